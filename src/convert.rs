//! The AMF to OpenSCAD pipeline: read meshes, build statements, write them.

use crate::config::{ConvertOptions, OUTPUT_EXTENSION, OUTPUT_SUFFIX};
use crate::errors::ConvertError;
use crate::io::IoError;
use crate::io::amf::from_amf;
use crate::io::scad::{ScadPolyhedron, render_scad, write_scad};
use crate::mesh::AmfMesh;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Statements for every mesh of one document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversion {
    pub polyhedra: Vec<ScadPolyhedron>,
}

impl Conversion {
    /// Number of meshes converted.
    pub const fn len(&self) -> usize {
        self.polyhedra.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.polyhedra.is_empty()
    }

    /// Output text: three lines per mesh. Empty when there were no meshes.
    pub fn render(&self) -> String {
        render_scad(&self.polyhedra)
    }
}

/// Build statements for already parsed meshes, numbering them from 0.
pub fn convert_meshes(meshes: &[AmfMesh], invert_faces: bool) -> Conversion {
    Conversion {
        polyhedra: meshes
            .iter()
            .enumerate()
            .map(|(index, mesh)| mesh.to_scad(index, invert_faces))
            .collect(),
    }
}

/// Convert an AMF document held in memory.
pub fn convert_str(text: &str, options: &ConvertOptions) -> Result<Conversion, ConvertError> {
    let meshes = from_amf(text, options.section_policy)?;
    Ok(convert_meshes(&meshes, options.invert_faces))
}

/// Output path for `input`: same directory, extension replaced by
/// `_convert.scad`.
///
/// ```
/// # use std::path::Path;
/// let out = amf2scad::convert::output_path_for(Path::new("parts/Test.amf")).unwrap();
/// assert_eq!(out, Path::new("parts/Test_convert.scad"));
/// ```
pub fn output_path_for(input: &Path) -> Result<PathBuf, IoError> {
    let stem = input.file_stem().ok_or_else(|| {
        IoError::MalformedPath(format!("{} does not name a file", input.display()))
    })?;
    let mut name = stem.to_os_string();
    name.push(OUTPUT_SUFFIX);
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    Ok(input.with_file_name(name))
}

/// Convert `input` and write the statements to `output`.
///
/// The whole document is converted before `output` is created, so a failed
/// conversion leaves no output file behind.
pub fn convert_file(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> Result<Conversion, ConvertError> {
    let text = fs::read_to_string(input)?;
    let conversion = convert_str(&text, options)?;

    let mut writer = BufWriter::new(fs::File::create(output)?);
    write_scad(&conversion.polyhedra, &mut writer)?;
    writer.flush()?;

    info!(
        input = %input.display(),
        output = %output.display(),
        meshes = conversion.len(),
        "wrote polyhedra"
    );
    Ok(conversion)
}
