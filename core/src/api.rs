use crate::document::SlideDocument;
use crate::extraction::{
    extract_depth, extract_digitization_date, extract_identifier, extract_notes,
    extract_side_of_head, Diagnostics,
};
use crate::types::SlideMetadata;
use std::path::Path;

/// Assembles slide records from parsed metadata documents
///
/// Runs every field extractor and then constructs a [`SlideMetadata`]
/// only if the identifier, depth and digitization timestamp were all
/// recovered. There is no partial record: a missing required field
/// rejects the whole document.
pub struct SlideExtractor;

impl SlideExtractor {
    /// Extracts a record from an already-parsed document
    ///
    /// All five extractors run even when an early one fails, so the
    /// diagnostics describe every missing field in one pass.
    pub fn extract(doc: &SlideDocument) -> ExtractionOutcome {
        let mut diagnostics = Diagnostics::new();

        let id = extract_identifier(doc.document(), &mut diagnostics);
        let notes = extract_notes(doc.document());
        let side_of_head = extract_side_of_head(doc.document(), &mut diagnostics);
        let depth_um = extract_depth(doc.document(), &mut diagnostics);
        let digitized_at = extract_digitization_date(doc.image(), &mut diagnostics);

        let record = match (id, depth_um, digitized_at) {
            (Some(id), Some(depth_um), Some(digitized_at)) => Some(SlideMetadata::new(
                id,
                notes,
                side_of_head,
                depth_um,
                digitized_at,
            )),
            (id, depth_um, digitized_at) => {
                let mut missing = Vec::new();
                if id.is_none() {
                    missing.push("id");
                }
                if depth_um.is_none() {
                    missing.push("depth");
                }
                if digitized_at.is_none() {
                    missing.push("digitization date");
                }
                diagnostics.push(format!(
                    "could not extract metadata from {}: missing required {}",
                    doc.path().display(),
                    missing.join(", ")
                ));
                None
            }
        };

        ExtractionOutcome {
            record,
            diagnostics,
        }
    }
}

/// Result of extracting one metadata document
///
/// `record` is `Some` exactly when extraction succeeded. Diagnostics may
/// be non-empty even on success, e.g. when the optional side of head
/// could not be resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionOutcome {
    /// The assembled record, or `None` when a required field was missing
    /// or the document was structurally unreadable
    pub record: Option<SlideMetadata>,

    /// Everything the extractors had to report about this document
    pub diagnostics: Diagnostics,
}

impl ExtractionOutcome {
    /// Whether a record was assembled
    pub fn success(&self) -> bool {
        self.record.is_some()
    }

    /// The diagnostics joined into a single message
    pub fn diagnostic(&self) -> String {
        self.diagnostics.to_string()
    }

    fn structural_failure(message: String) -> Self {
        let mut diagnostics = Diagnostics::new();
        diagnostics.push(message);
        Self {
            record: None,
            diagnostics,
        }
    }
}

/// Extracts a slide record straight from a metadata file
///
/// The per-file entry point for callers that do not need the parsed
/// document itself. A file that cannot be opened or lacks the required
/// sections yields a failed outcome naming the file and cause, the same
/// shape as a missing-field failure.
pub fn extract(path: impl AsRef<Path>) -> ExtractionOutcome {
    let path = path.as_ref();
    match SlideDocument::open(path) {
        Ok(doc) => SlideExtractor::extract(&doc),
        Err(e) => ExtractionOutcome::structural_failure(format!(
            "could not parse {}: {}",
            path.display(),
            e
        )),
    }
}
