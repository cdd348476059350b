#![doc = " OpenSCAD polyhedron output for AMF meshes"]
#![doc = ""]
#![doc = " Each mesh becomes three statements: a point array, a face array and a"]
#![doc = " `polyhedron()` call. Array names carry the mesh index so several meshes"]
#![doc = " can share one `.scad` file."]

use crate::mesh::AmfMesh;
use crate::triplet::Triplet;
use std::fmt;
use std::io::Write;

/// The three statements generated for one mesh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScadPolyhedron {
    /// `points_<i>=[[x,y,z],...];`
    pub points: String,
    /// `triangles_<i>=[[a,b,c],...];`
    pub faces: String,
    /// `polyhedron(points_<i>,triangles_<i>);`
    pub polyhedron: String,
}

/// Identifier of the point array for mesh `index`.
pub fn points_label(index: usize) -> String {
    format!("points_{index}")
}

/// Identifier of the face array for mesh `index`.
pub fn faces_label(index: usize) -> String {
    format!("triangles_{index}")
}

fn render_array<'a>(label: &str, groups: impl Iterator<Item = [&'a str; 3]>) -> String {
    let mut out = String::new();
    out.push_str(label);
    out.push_str("=[");
    for (i, [a, b, c]) in groups.enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&format!("[{a},{b},{c}]"));
    }
    out.push_str("];");
    out
}

fn as_strs(triplet: &Triplet) -> [&str; 3] {
    [&triplet[0], &triplet[1], &triplet[2]]
}

#[doc = " Build the statements for one mesh"]
#[doc = ""]
#[doc = " # Arguments"]
#[doc = " * `mesh` - Raw vertex and triangle values"]
#[doc = " * `index` - Position of the mesh in its document, used in the array names"]
#[doc = " * `invert_faces` - Swap the first and third index of every triangle"]
pub fn to_scad(mesh: &AmfMesh, index: usize, invert_faces: bool) -> ScadPolyhedron {
    let point_label = points_label(index);
    let face_label = faces_label(index);

    let points = render_array(&point_label, mesh.vertices.iter().map(as_strs));
    let faces = render_array(
        &face_label,
        mesh.triangles.iter().map(|triangle| {
            let [a, b, c] = as_strs(triangle);
            if invert_faces { [c, b, a] } else { [a, b, c] }
        }),
    );
    let polyhedron = format!("polyhedron({point_label},{face_label});");

    ScadPolyhedron {
        points,
        faces,
        polyhedron,
    }
}

impl fmt::Display for ScadPolyhedron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.points)?;
        writeln!(f, "{}", self.faces)?;
        writeln!(f, "{}", self.polyhedron)
    }
}

/// Concatenate the statements of every mesh, three lines each.
pub fn render_scad(polyhedra: &[ScadPolyhedron]) -> String {
    polyhedra.iter().map(ToString::to_string).collect()
}

/// Write the statements of every mesh to `writer`.
pub fn write_scad<W: Write>(polyhedra: &[ScadPolyhedron], writer: &mut W) -> std::io::Result<()> {
    writer.write_all(render_scad(polyhedra).as_bytes())
}

impl AmfMesh {
    pub fn to_scad(&self, index: usize, invert_faces: bool) -> ScadPolyhedron {
        self::to_scad(self, index, invert_faces)
    }
}
