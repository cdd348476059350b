//! Test support library
//! Provides AMF fixtures and a reader for generated OpenSCAD arrays.

#![allow(dead_code)]

use amf2scad::AmfMesh;
use amf2scad::triplet::Triplet;

pub fn triplet(a: &str, b: &str, c: &str) -> Triplet {
    [a.to_string(), b.to_string(), c.to_string()]
}

/// One mesh, three vertices, one triangle, laid out the way OpenSCAD
/// exports AMF.
pub const SINGLE_TRIANGLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<amf unit="millimeter">
 <metadata type="producer">OpenSCAD</metadata>
 <object id="0">
  <mesh>
   <vertices>
    <vertex><coordinates>
     <x>0</x>
     <y>0</y>
     <z>0</z>
    </coordinates></vertex>
    <vertex><coordinates>
     <x>1</x>
     <y>0</y>
     <z>0</z>
    </coordinates></vertex>
    <vertex><coordinates>
     <x>0</x>
     <y>1</y>
     <z>0</z>
    </coordinates></vertex>
   </vertices>
   <volume>
    <triangle>
     <v1>0</v1>
     <v2>1</v2>
     <v3>2</v3>
    </triangle>
   </volume>
  </mesh>
 </object>
</amf>
"#;

/// A mesh block with a volume but no vertices.
pub const MISSING_VERTICES: &str = r#"<amf unit="millimeter">
 <object id="0">
  <mesh>
   <volume>
    <triangle><v1>0</v1><v2>1</v2><v3>2</v3></triangle>
   </volume>
  </mesh>
 </object>
</amf>
"#;

/// Render meshes into a document, one `<object>` each.
pub fn document(meshes: &[AmfMesh]) -> String {
    amf2scad::io::amf::to_amf(meshes, "fixture", "millimeter")
}

/// Read back the groups of an array statement such as
/// `points_0=[[0,0,0],[1,0,0]];`.
pub fn parse_scad_array(statement: &str) -> (String, Vec<Triplet>) {
    let (label, body) = statement
        .split_once("=[")
        .expect("statement should be `<label>=[...]`");
    let body = body
        .strip_suffix("];")
        .expect("statement should end with `];`");

    let groups = body
        .split("],")
        .map(|group| group.trim_start_matches('[').trim_end_matches(']'))
        .filter(|group| !group.is_empty())
        .map(|group| {
            let values: Vec<&str> = group.split(',').collect();
            assert_eq!(values.len(), 3, "group `{group}` is not a triplet");
            triplet(values[0], values[1], values[2])
        })
        .collect();
    (label.to_string(), groups)
}
