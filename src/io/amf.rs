#![doc = " AMF file format support for AmfMesh objects"]
#![doc = ""]
#![doc = " AMF (Additive Manufacturing File Format) is XML based. The reader here is"]
#![doc = " line oriented: element boundaries are found by substring search, not by a"]
#![doc = " markup parser, so it accepts the layout exporters actually produce (one"]
#![doc = " element per line) without caring about schema validity."]

use crate::block::{Section, SectionPolicy, extract_blocks, extract_section};
use crate::errors::ConvertError;
use crate::float_types::unit_scale;
use crate::mesh::AmfMesh;
use crate::triplet::{COORDINATE_TAGS, INDEX_TAGS, scan_triplets};
use nom::{
    IResult,
    bytes::complete::{tag, take_until},
    sequence::{pair, preceded},
};
use std::io::Write;
use tracing::{debug, info, warn};

pub const MESH_START: &str = "<mesh";
pub const MESH_END: &str = "</mesh";
const ROOT_START: &str = "<amf";

/// Value of the `unit` attribute on the `<amf` root line, if any.
pub fn document_unit(lines: &[&str]) -> Option<String> {
    let root = lines.iter().copied().find(|line| line.contains(ROOT_START))?;
    let found: IResult<&str, &str> = preceded(
        pair(take_until("unit=\""), tag("unit=\"")),
        take_until("\""),
    )(root);
    found.ok().map(|(_, unit)| unit.to_owned())
}

/// Read one mesh block into vertex and triangle triplets.
///
/// Partial triplets at the end of a section are dropped with a warning.
pub fn read_mesh(
    mesh_lines: &[&str],
    index: usize,
    policy: SectionPolicy,
) -> Result<AmfMesh, ConvertError> {
    let vertex_lines = extract_section(mesh_lines, index, Section::Vertices, policy)?;
    let volume_lines = extract_section(mesh_lines, index, Section::Volume, policy)?;

    let vertices = scan_triplets(&vertex_lines, &COORDINATE_TAGS);
    if !vertices.dropped.is_empty() {
        warn!(mesh = index, dropped = ?vertices.dropped, "incomplete coordinate triplet ignored");
    }
    let triangles = scan_triplets(&volume_lines, &INDEX_TAGS);
    if !triangles.dropped.is_empty() {
        warn!(mesh = index, dropped = ?triangles.dropped, "incomplete triangle triplet ignored");
    }

    info!(
        mesh = index,
        vertices = vertices.triplets.len(),
        triangles = triangles.triplets.len(),
        "read mesh"
    );
    Ok(AmfMesh::new(vertices.triplets, triangles.triplets))
}

/// Read every `<mesh>` of a document, in document order.
///
/// The first malformed mesh aborts the whole read.
pub fn read_meshes(lines: &[&str], policy: SectionPolicy) -> Result<Vec<AmfMesh>, ConvertError> {
    if let Some(unit) = document_unit(lines) {
        debug!(%unit, scale_mm = ?unit_scale(&unit), "document unit");
    }
    let blocks = extract_blocks(lines, MESH_START, MESH_END);
    info!(meshes = blocks.len(), "found meshes");

    blocks
        .iter()
        .enumerate()
        .map(|(index, block)| read_mesh(block, index, policy))
        .collect()
}

/// Parse an AMF document held in memory.
pub fn from_amf(text: &str, policy: SectionPolicy) -> Result<Vec<AmfMesh>, ConvertError> {
    let lines: Vec<&str> = text.lines().collect();
    read_meshes(&lines, policy)
}

#[doc = " Export meshes to AMF format as a string"]
#[doc = ""]
#[doc = " Every mesh becomes its own `<object>`, laid out one element per line."]
#[doc = ""]
#[doc = " # Arguments"]
#[doc = " * `object_name` - Description stored in the document metadata"]
#[doc = " * `units` - Units for the geometry (e.g., \"millimeter\", \"inch\")"]
pub fn to_amf(meshes: &[AmfMesh], object_name: &str, units: &str) -> String {
    let mut amf_content = String::new();
    amf_content.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    amf_content.push_str(&format!("<amf unit=\"{units}\" version=\"1.1\">\n"));
    amf_content.push_str("  <metadata type=\"producer\">amf2scad</metadata>\n");
    amf_content.push_str(&format!(
        "  <metadata type=\"description\">{object_name}</metadata>\n"
    ));

    for (id, mesh) in meshes.iter().enumerate() {
        amf_content.push_str(&format!("  <object id=\"{id}\">\n"));
        amf_content.push_str("    <mesh>\n");
        amf_content.push_str("      <vertices>\n");
        for (i, [x, y, z]) in mesh.vertices.iter().enumerate() {
            amf_content.push_str(&format!("        <vertex id=\"{i}\">\n"));
            amf_content.push_str("          <coordinates>\n");
            amf_content.push_str(&format!("            <x>{x}</x>\n"));
            amf_content.push_str(&format!("            <y>{y}</y>\n"));
            amf_content.push_str(&format!("            <z>{z}</z>\n"));
            amf_content.push_str("          </coordinates>\n");
            amf_content.push_str("        </vertex>\n");
        }
        amf_content.push_str("      </vertices>\n");
        amf_content.push_str("      <volume>\n");
        for (i, [a, b, c]) in mesh.triangles.iter().enumerate() {
            amf_content.push_str(&format!("        <triangle id=\"{i}\">\n"));
            amf_content.push_str(&format!("          <v1>{a}</v1>\n"));
            amf_content.push_str(&format!("          <v2>{b}</v2>\n"));
            amf_content.push_str(&format!("          <v3>{c}</v3>\n"));
            amf_content.push_str("        </triangle>\n");
        }
        amf_content.push_str("      </volume>\n");
        amf_content.push_str("    </mesh>\n");
        amf_content.push_str("  </object>\n");
    }
    amf_content.push_str("</amf>\n");
    amf_content
}

#[doc = " Export meshes to an AMF file"]
#[doc = ""]
#[doc = " # Arguments"]
#[doc = " * `writer` - Where to write the AMF data"]
#[doc = " * `object_name` - Description stored in the document metadata"]
#[doc = " * `units` - Units for the geometry (e.g., \"millimeter\", \"inch\")"]
pub fn write_amf<W: Write>(
    meshes: &[AmfMesh],
    writer: &mut W,
    object_name: &str,
    units: &str,
) -> std::io::Result<()> {
    writer.write_all(to_amf(meshes, object_name, units).as_bytes())
}
