//! Extraction and validation of digitized microscopy slide metadata
//!
//! Two entry points:
//! - [`extract`]: load a per-slide metadata document and assemble a
//!   [`SlideMetadata`] record, or report why it could not be built
//! - [`validate_tree`]: check a directory tree of paired image/metadata
//!   files for duplicates and 1:1 stem correspondence

pub mod api;
pub mod document;
pub mod error;
pub mod extraction;
pub mod types;
pub mod validate;

pub use api::{extract, ExtractionOutcome, SlideExtractor};
pub use document::{Section, SlideDocument};
pub use error::{Result, SlidecatError};
pub use extraction::Diagnostics;
pub use types::*;
pub use validate::{validate_tree, validate_tree_with, DirectoryReport, TreeReport};
