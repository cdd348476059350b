//! Line-range extraction between start and end markers.
//!
//! Markers are matched as plain substrings of a line, so a marker inside an
//! attribute value or a comment counts just the same.

use crate::errors::ConvertError;
use tracing::{debug, warn};

/// A run of lines from a start-marker line up to and including the next
/// end-marker line.
pub type Block<'a> = Vec<&'a str>;

/// Collect every block delimited by `start` and `end`.
///
/// Scanning is single pass. A start marker seen while already gathering does
/// not open a nested block, and an end marker seen while not gathering is
/// ignored. A block whose end marker never shows up is dropped.
pub fn extract_blocks<'a>(lines: &[&'a str], start: &str, end: &str) -> Vec<Block<'a>> {
    let mut blocks = Vec::new();
    let mut current: Block<'a> = Vec::new();
    let mut gathering = false;

    for &line in lines {
        if line.contains(start) {
            gathering = true;
        }
        if !gathering {
            continue;
        }
        current.push(line);
        if line.contains(end) {
            gathering = false;
            blocks.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        warn!(
            marker = start,
            lines = current.len(),
            "dropping block with no closing marker"
        );
    }
    debug!(marker = start, found = blocks.len(), "extracted blocks");
    blocks
}

/// A sub-block of a `<mesh>`, identified by its start and end markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Vertices,
    Volume,
}

impl Section {
    /// Opening marker searched for inside a mesh block.
    pub const fn start_marker(self) -> &'static str {
        match self {
            Section::Vertices => "<vertices",
            Section::Volume => "<volume",
        }
    }

    /// Closing marker searched for inside a mesh block.
    pub const fn end_marker(self) -> &'static str {
        match self {
            Section::Vertices => "</vertices",
            Section::Volume => "</volume",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Section::Vertices => f.write_str("vertices"),
            Section::Volume => f.write_str("volume"),
        }
    }
}

/// How a mesh's `<vertices>` and `<volume>` sub-blocks are chosen when the
/// mesh holds more than one of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SectionPolicy {
    /// Use the first sub-block, ignore the rest.
    #[default]
    First,
    /// Concatenate every sub-block in document order.
    Merge,
    /// Fail unless there is exactly one.
    Unique,
}

impl SectionPolicy {
    /// Reduce the candidate sub-blocks of `section` in mesh `mesh` to one.
    ///
    /// An empty candidate list is always a [`ConvertError::MissingSection`].
    pub fn select<'a>(
        self,
        mut blocks: Vec<Block<'a>>,
        mesh: usize,
        section: Section,
    ) -> Result<Block<'a>, ConvertError> {
        if blocks.is_empty() {
            return Err(ConvertError::MissingSection { mesh, section });
        }
        if blocks.len() > 1 {
            debug!(mesh, %section, count = blocks.len(), policy = ?self, "several candidate blocks");
        }
        match self {
            SectionPolicy::First => Ok(blocks.swap_remove(0)),
            SectionPolicy::Merge => Ok(blocks.concat()),
            SectionPolicy::Unique if blocks.len() == 1 => Ok(blocks.swap_remove(0)),
            SectionPolicy::Unique => Err(ConvertError::DuplicateSection {
                mesh,
                section,
                count: blocks.len(),
            }),
        }
    }
}

/// Extract `section` out of one mesh block and apply `policy`.
pub fn extract_section<'a>(
    mesh_lines: &[&'a str],
    mesh: usize,
    section: Section,
    policy: SectionPolicy,
) -> Result<Block<'a>, ConvertError> {
    let blocks = extract_blocks(mesh_lines, section.start_marker(), section.end_marker());
    policy.select(blocks, mesh, section)
}
