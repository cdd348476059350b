//! Reading AMF documents and writing OpenSCAD polyhedra.

pub mod amf;
pub mod scad;

/// Generic I/O and format‑conversion errors.
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),
    ParseFloat(std::num::ParseFloatError),
    ParseInt(std::num::ParseIntError),

    MalformedPath(String),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),
            ParseFloat(error) => write!(f, "Could not parse float: {error}"),
            ParseInt(error) => write!(f, "Could not parse integer: {error}"),

            MalformedPath(msg) => write!(f, "The path is malformed: {msg}"),
        }
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IoError::StdIo(error) => Some(error),
            IoError::ParseFloat(error) => Some(error),
            IoError::ParseInt(error) => Some(error),
            _ => None,
        }
    }
}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}

impl From<std::num::ParseFloatError> for IoError {
    fn from(value: std::num::ParseFloatError) -> Self {
        Self::ParseFloat(value)
    }
}

impl From<std::num::ParseIntError> for IoError {
    fn from(value: std::num::ParseIntError) -> Self {
        Self::ParseInt(value)
    }
}
