use std::path::PathBuf;
use thiserror::Error;

/// Result type for slidecat operations
pub type Result<T> = std::result::Result<T, SlidecatError>;

/// Error types for slidecat operations
///
/// These cover structural failures only: a document that cannot be opened
/// or does not expose the sections the extractors need. A single field
/// that cannot be recovered is not an error; it is reported through
/// [`crate::extraction::Diagnostics`] instead.
#[derive(Error, Debug)]
pub enum SlidecatError {
    /// Markup could not be read at all
    #[error("markup error: {0}")]
    Markup(String),

    /// Document is readable but missing a required section
    #[error("no <{section}> section found in {}", path.display())]
    DocumentStructure {
        path: PathBuf,
        section: &'static str,
    },

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<quick_xml::Error> for SlidecatError {
    fn from(e: quick_xml::Error) -> Self {
        SlidecatError::Markup(format!("{}", e))
    }
}
