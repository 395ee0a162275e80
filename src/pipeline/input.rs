//! Input selection: list the files of a directory whose names match a pattern.
//!
//! Only regular files directly inside the directory are considered; the scan
//! never recurses. Results keep the order of the underlying directory listing.

use crate::error::Pdf2ImgError;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

static RE_ANY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:.+)$").unwrap());

static RE_PDF: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"^(?:.+\.pdf)$")
        .case_insensitive(true)
        .build()
        .unwrap()
});

/// A full-match file-name pattern.
///
/// The expression must match the whole file name, not a substring of it:
/// `.+\.pdf` accepts `a.pdf` but not `a.pdf.bak`.
#[derive(Clone)]
pub struct FilePattern {
    source: String,
    regex: Regex,
}

impl FilePattern {
    /// Compile `pattern` with full-match semantics.
    pub fn new(pattern: &str, case_insensitive: bool) -> Result<Self, Pdf2ImgError> {
        let regex = RegexBuilder::new(&format!("^(?:{pattern})$"))
            .case_insensitive(case_insensitive)
            .build()
            .map_err(|e| Pdf2ImgError::InvalidPattern {
                pattern: pattern.to_string(),
                detail: e.to_string(),
            })?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// Matches every non-empty file name.
    pub fn any() -> Self {
        Self {
            source: ".+".to_string(),
            regex: RE_ANY.clone(),
        }
    }

    /// Matches `*.pdf` regardless of extension case.
    pub fn pdf() -> Self {
        Self {
            source: r"(?i).+\.pdf".to_string(),
            regex: RE_PDF.clone(),
        }
    }

    /// Returns `true` if `file_name` matches in full.
    pub fn matches(&self, file_name: &str) -> bool {
        self.regex.is_match(file_name)
    }

    /// The expression as given by the caller.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl Default for FilePattern {
    fn default() -> Self {
        Self::any()
    }
}

impl fmt::Debug for FilePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FilePattern").field(&self.source).finish()
    }
}

/// List regular files directly inside `dir` whose file name matches `pattern`.
///
/// # Errors
/// - [`Pdf2ImgError::NotADirectory`] if `dir` does not exist or is not a directory
/// - [`Pdf2ImgError::ReadDirFailed`] if the listing cannot be read
pub fn list_matching_files(
    dir: &Path,
    pattern: &FilePattern,
) -> Result<Vec<PathBuf>, Pdf2ImgError> {
    if !dir.is_dir() {
        return Err(Pdf2ImgError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let read_err = |source| Pdf2ImgError::ReadDirFailed {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let path = entry.path();

        // Follows symlinks, so a link to a regular file counts as a file.
        if !path.is_file() {
            continue;
        }

        let name = entry.file_name();
        if pattern.matches(&name.to_string_lossy()) {
            files.push(path);
        }
    }

    debug!(
        "Matched {} file(s) in {} against '{}'",
        files.len(),
        dir.display(),
        pattern.as_str()
    );
    Ok(files)
}
