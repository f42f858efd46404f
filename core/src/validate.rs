use crate::error::{Result, SlidecatError};
use log::warn;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extension of the slide image files
pub const IMAGE_EXTENSION: &str = "tiff";

/// Extension of the sidecar metadata files
pub const METADATA_EXTENSION: &str = "xml";

/// Validation outcome for a single directory
///
/// Built fresh for every directory visited and never persisted. A
/// directory is clean when neither file group contains duplicates and
/// the two groups pair 1:1 by filename stem.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryReport {
    pub dir: PathBuf,

    /// Image filenames occurring more than once (extension case folded)
    pub duplicate_images: Vec<String>,

    /// Metadata filenames occurring more than once (extension case folded)
    pub duplicate_metadata: Vec<String>,

    /// Whether sorted image stems equal sorted metadata stems
    pub paired: bool,

    pub image_count: usize,
    pub metadata_count: usize,
}

impl DirectoryReport {
    /// Whether this directory passed every check
    pub fn is_clean(&self) -> bool {
        self.paired && self.duplicate_images.is_empty() && self.duplicate_metadata.is_empty()
    }
}

impl fmt::Display for DirectoryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.duplicate_images.is_empty() {
            writeln!(
                f,
                "\tduplicate image files found in {}: {}",
                self.dir.display(),
                self.duplicate_images.join(", ")
            )?;
        }
        if !self.duplicate_metadata.is_empty() {
            writeln!(
                f,
                "\tduplicate metadata files found in {}: {}",
                self.dir.display(),
                self.duplicate_metadata.join(", ")
            )?;
        }
        if !self.paired {
            writeln!(
                f,
                "\timage (n = {}) and metadata (n = {}) files do not pair 1:1 in {}",
                self.image_count,
                self.metadata_count,
                self.dir.display()
            )?;
        }
        Ok(())
    }
}

/// Aggregated validation outcome for a whole directory tree
///
/// Holds one [`DirectoryReport`] per offending directory; clean
/// directories are not listed. The walk never stops at the first
/// violation, so the caller sees every problem in one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeReport {
    root: PathBuf,
    problems: Vec<DirectoryReport>,
}

impl TreeReport {
    /// Whether every visited directory was clean
    pub fn ok(&self) -> bool {
        self.problems.is_empty()
    }

    /// The offending directories, in path order
    pub fn problems(&self) -> &[DirectoryReport] {
        &self.problems
    }

    /// The full report as a single diagnostic string; empty when ok
    pub fn diagnostic(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TreeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ok() {
            return Ok(());
        }
        writeln!(
            f,
            "found the following problems with the target root directory {}:",
            self.root.display()
        )?;
        for problem in &self.problems {
            write!(f, "{}", problem)?;
        }
        Ok(())
    }
}

/// Validates a tree of paired slide image and metadata files
///
/// Every directory under `root` (including `root` itself) is checked for
/// duplicate filenames per file group and for a 1:1 stem correspondence
/// between the `tiff` and `xml` groups.
///
/// # Errors
///
/// Returns an error only when `root` is not a directory; in-tree
/// violations are reported through the returned [`TreeReport`].
pub fn validate_tree(root: impl AsRef<Path>) -> Result<TreeReport> {
    validate_tree_with(root, IMAGE_EXTENSION, METADATA_EXTENSION)
}

/// [`validate_tree`] with custom image and metadata extensions
pub fn validate_tree_with(
    root: impl AsRef<Path>,
    image_ext: &str,
    metadata_ext: &str,
) -> Result<TreeReport> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(SlidecatError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is not a directory", root.display()),
        )));
    }

    // Directory -> filenames; BTreeMap keeps the report order stable
    let mut directories: BTreeMap<PathBuf, Vec<String>> = BTreeMap::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };
        if entry.file_type().is_dir() {
            directories.entry(entry.path().to_path_buf()).or_default();
        } else if entry.file_type().is_file() {
            if let Some(parent) = entry.path().parent() {
                directories
                    .entry(parent.to_path_buf())
                    .or_default()
                    .push(entry.file_name().to_string_lossy().into_owned());
            }
        }
    }

    let problems = directories
        .iter()
        .map(|(dir, names)| check_directory(dir, names, image_ext, metadata_ext))
        .filter(|report| !report.is_clean())
        .collect();

    Ok(TreeReport {
        root: root.to_path_buf(),
        problems,
    })
}

/// Checks one directory's filenames for duplicates and stem pairing
pub fn check_directory(
    dir: &Path,
    names: &[String],
    image_ext: &str,
    metadata_ext: &str,
) -> DirectoryReport {
    let images = files_with_extension(names, image_ext);
    let metadata = files_with_extension(names, metadata_ext);

    let mut image_stems = stems(&images);
    let mut metadata_stems = stems(&metadata);
    image_stems.sort();
    metadata_stems.sort();

    DirectoryReport {
        dir: dir.to_path_buf(),
        duplicate_images: duplicates(&images),
        duplicate_metadata: duplicates(&metadata),
        paired: image_stems == metadata_stems,
        image_count: images.len(),
        metadata_count: metadata.len(),
    }
}

/// Filenames whose extension case-insensitively equals `ext`
fn files_with_extension<'a>(names: &'a [String], ext: &str) -> Vec<&'a str> {
    names
        .iter()
        .filter(|name| {
            Path::new(name.as_str())
                .extension()
                .map(|e| e.to_string_lossy().eq_ignore_ascii_case(ext))
                .unwrap_or(false)
        })
        .map(String::as_str)
        .collect()
}

/// Filenames stripped of their extension
fn stems(names: &[&str]) -> Vec<String> {
    names
        .iter()
        .map(|name| {
            Path::new(name)
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| name.to_string())
        })
        .collect()
}

/// Names occurring more than once within one group, sorted
///
/// Extension case is folded before comparison, so `a.TIFF` and `a.tiff`
/// collide. Detection is a set-size comparison against the group size.
fn duplicates(names: &[&str]) -> Vec<String> {
    let folded: Vec<String> = names.iter().map(|name| fold_extension(name)).collect();
    let unique: BTreeSet<&String> = folded.iter().collect();
    if unique.len() == folded.len() {
        return Vec::new();
    }

    let mut seen = BTreeSet::new();
    let mut dups = BTreeSet::new();
    for name in &folded {
        if !seen.insert(name) {
            dups.insert(name.clone());
        }
    }
    dups.into_iter().collect()
}

fn fold_extension(name: &str) -> String {
    let path = Path::new(name);
    match (path.file_stem(), path.extension()) {
        (Some(stem), Some(ext)) => format!(
            "{}.{}",
            stem.to_string_lossy(),
            ext.to_string_lossy().to_lowercase()
        ),
        _ => name.to_string(),
    }
}
