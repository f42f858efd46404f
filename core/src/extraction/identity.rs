use crate::document::Section;
use crate::extraction::Diagnostics;

/// Extracts the specimen identifier from the document section
///
/// The identifier is the segment of the title left of the first
/// underscore, uppercased: title `PP21_321_Rt` yields `PP21`. Returns
/// `None` with a diagnostic if the title field is absent or the segment
/// is empty.
pub fn extract_identifier(document: &Section, log: &mut Diagnostics) -> Option<String> {
    let title = match document.text("title") {
        Some(t) => t,
        None => {
            log.push("no title field to derive the specimen id from");
            return None;
        }
    };

    let id = title.split('_').next().unwrap_or("").to_uppercase();
    if id.is_empty() {
        log.push(format!("title '{}' has no id segment", title));
        return None;
    }
    Some(id)
}

/// Extracts free-text scanning notes from the document section
///
/// Notes are optional; absence is a normal state and produces no
/// diagnostic.
pub fn extract_notes(document: &Section) -> Option<String> {
    document.text("comment").map(str::to_string)
}
