//! Convert **AMF** (Additive Manufacturing File Format) meshes into
//! **OpenSCAD** `polyhedron()` statements.
//!
//! Every `<mesh>` of the document becomes three lines:
//!
//! ```text
//! points_0=[[0,0,0],[1,0,0],[0,1,0]];
//! triangles_0=[[2,1,0]];
//! polyhedron(points_0,triangles_0);
//! ```
//!
//! which can be pasted straight into a `.scad` file. Coordinate and index
//! values are copied as text; nothing is rounded or re-formatted.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::all)]

pub mod block;
pub mod config;
pub mod convert;
pub mod errors;
pub mod float_types;
pub mod io;
pub mod mesh;
pub mod triplet;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use config::ConvertOptions;
pub use convert::{Conversion, convert_file, convert_str};
pub use errors::ConvertError;
pub use mesh::AmfMesh;
