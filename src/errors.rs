//! Conversion errors

pub use crate::block::Section;
use crate::io::IoError;

/// Everything that can abort a conversion.
///
/// Any of these stops the whole run: a single malformed mesh fails the
/// document even if the other meshes are fine.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// A `<mesh>` block has no `<vertices>` or `<volume>` sub-block
    #[error("mesh {mesh} has no <{section}> block")]
    MissingSection { mesh: usize, section: Section },
    /// More than one sub-block under [`SectionPolicy::Unique`](crate::block::SectionPolicy::Unique)
    #[error("mesh {mesh} has {count} <{section}> blocks, expected exactly one")]
    DuplicateSection {
        mesh: usize,
        section: Section,
        count: usize,
    },
    #[error(transparent)]
    Io(#[from] IoError),
}

impl From<std::io::Error> for ConvertError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(IoError::StdIo(value))
    }
}
