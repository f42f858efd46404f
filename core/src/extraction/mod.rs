//! Per-field recovery heuristics
//!
//! Each extractor reads one semantic field from a parsed section and
//! returns `Option<T>`. Extractors never fail hard: structural absence
//! becomes `None` plus a line in the shared [`Diagnostics`] log, and the
//! remaining fields are still attempted.

pub mod depth;
pub mod identity;
pub mod side;
pub mod timestamp;

pub use depth::extract_depth;
pub use identity::{extract_identifier, extract_notes};
pub use side::extract_side_of_head;
pub use timestamp::extract_digitization_date;

use std::fmt;

/// Shared log of field-recovery diagnostics for one document
///
/// Collects one human-readable line per recovery failure (or notable
/// absence). Order of lines follows extractor invocation order, so a
/// given document always produces identical output.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Diagnostics {
    lines: Vec<String>,
}

impl Diagnostics {
    /// Creates an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one diagnostic line
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Whether nothing was logged
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The collected lines, in logging order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("; "))
    }
}
