use crate::error::{Result, SlidecatError};
use log::debug;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A parsed section of a slide metadata document
///
/// Holds the first text node found inside each descendant tag, keyed by
/// lowercased tag name. Field lookup never fails hard; a missing field is
/// simply `None` and is left to the extractors to report.
#[derive(Debug, Default, Clone)]
pub struct Section {
    fields: HashMap<String, String>,
}

impl Section {
    /// Returns the text of the named field, matching the tag name
    /// case-insensitively
    pub fn text(&self, tag: &str) -> Option<&str> {
        self.fields.get(&tag.to_lowercase()).map(String::as_str)
    }

    /// Number of fields captured in this section
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the section captured no fields at all
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Stores the first text seen for a tag; later occurrences are ignored
    pub(crate) fn record(&mut self, tag: &str, text: String) {
        self.fields.entry(tag.to_lowercase()).or_insert(text);
    }
}

/// A loaded slide metadata document
///
/// Scanner vendors author these files inconsistently, so parsing is
/// deliberately loose: tag names are matched case-insensitively, end-tag
/// names are not checked, and the first unreadable event stops the scan
/// while keeping everything collected so far. The only hard requirements
/// are that the file is readable and that a `document` and an `image`
/// section can both be located.
#[derive(Debug)]
pub struct SlideDocument {
    path: PathBuf,
    document: Section,
    image: Section,
}

impl SlideDocument {
    /// Loads and parses a metadata document from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, or if no `document`
    /// or no `image` section is present. Missing fields inside a section
    /// are not errors.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let scan = parse_sections(&raw, path);

        // A markup error is only fatal when it cost us both sections
        if scan.document.is_none() && scan.image.is_none() {
            if let Some(e) = scan.error {
                return Err(e.into());
            }
        }
        let document = scan.document.ok_or_else(|| SlidecatError::DocumentStructure {
            path: path.to_path_buf(),
            section: "document",
        })?;
        let image = scan.image.ok_or_else(|| SlidecatError::DocumentStructure {
            path: path.to_path_buf(),
            section: "image",
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            document,
            image,
        })
    }

    /// The `document` section (title, comment, description, ...)
    pub fn document(&self) -> &Section {
        &self.document
    }

    /// The `image` section (acquisition date and time, ...)
    pub fn image(&self) -> &Section {
        &self.image
    }

    /// Path this document was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Which section an element belongs to while scanning
#[derive(Clone, Copy, PartialEq)]
enum Target {
    Document,
    Image,
}

/// What a single pass over the markup yielded
struct Scan {
    document: Option<Section>,
    image: Option<Section>,
    error: Option<quick_xml::Error>,
}

fn parse_sections(raw: &str, path: &Path) -> Scan {
    let mut reader = Reader::from_str(raw);
    reader.config_mut().trim_text(true);
    reader.config_mut().check_end_names = false;

    let mut document: Option<Section> = None;
    let mut image: Option<Section> = None;
    let mut error: Option<quick_xml::Error> = None;
    let mut target: Option<Target> = None;
    // Open elements below the current section, innermost last
    let mut field_stack: Vec<String> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_lowercase();
                match target {
                    Some(_) => field_stack.push(name),
                    None => {
                        if name == "document" {
                            target = Some(Target::Document);
                            document.get_or_insert_with(Section::default);
                        } else if name == "image" {
                            target = Some(Target::Image);
                            image.get_or_insert_with(Section::default);
                        }
                    }
                }
            }
            Ok(Event::End(_)) => {
                if target.is_some() && field_stack.pop().is_none() {
                    target = None;
                }
            }
            Ok(Event::Text(e)) => {
                if let Ok(text) = e.unescape() {
                    store_text(&mut document, &mut image, target, &field_stack, text.trim());
                }
            }
            Ok(Event::CData(e)) => {
                let text = String::from_utf8_lossy(&e.into_inner()).trim().to_string();
                store_text(&mut document, &mut image, target, &field_stack, &text);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                // Keep whatever was collected before the malformed event
                debug!("stopping scan of {} at malformed markup: {}", path.display(), e);
                error = Some(e);
                break;
            }
        }
    }

    Scan {
        document,
        image,
        error,
    }
}

fn store_text(
    document: &mut Option<Section>,
    image: &mut Option<Section>,
    target: Option<Target>,
    field_stack: &[String],
    text: &str,
) {
    if text.is_empty() {
        return;
    }
    let field = match field_stack.last() {
        Some(f) => f,
        None => return,
    };
    let section = match target {
        Some(Target::Document) => document.as_mut(),
        Some(Target::Image) => image.as_mut(),
        None => None,
    };
    if let Some(section) = section {
        section.record(field, text.to_string());
    }
}
