//! Conversion settings.

use crate::block::SectionPolicy;
use std::sync::OnceLock;

/// Input file used when none is given on the command line.
pub const DEFAULT_INPUT: &str = "Test.amf";

/// Appended to the input file stem to name the output.
pub const OUTPUT_SUFFIX: &str = "_convert";

/// Extension of the output file.
pub const OUTPUT_EXTENSION: &str = "scad";

/// Build-time winding setting, see [`invert_faces`].
static INVERT_FACES_CELL: OnceLock<bool> = OnceLock::new();

#[inline]
const fn default_invert_faces() -> bool {
    true
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Whether triangle winding is reversed by default.
///
/// Fixed when the crate is built: set `AMF2SCAD_INVERT_FACES=false` at build
/// time to keep the winding exactly as the AMF file has it. If the object
/// comes out inside out in OpenSCAD, flip this.
pub fn invert_faces() -> bool {
    *INVERT_FACES_CELL.get_or_init(|| {
        option_env!("AMF2SCAD_INVERT_FACES")
            .and_then(parse_flag)
            .unwrap_or_else(default_invert_faces)
    })
}

/// Settings threaded through a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Swap the first and third index of every triangle.
    pub invert_faces: bool,
    /// Which `<vertices>`/`<volume>` sub-blocks of a mesh are used.
    pub section_policy: SectionPolicy,
}

impl ConvertOptions {
    pub const fn new(invert_faces: bool) -> Self {
        Self {
            invert_faces,
            section_policy: SectionPolicy::First,
        }
    }

    pub const fn with_section_policy(mut self, section_policy: SectionPolicy) -> Self {
        self.section_policy = section_policy;
        self
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::new(invert_faces())
    }
}
