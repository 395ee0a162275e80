//! Error types for the pdf2img library.
//!
//! Every operation returns [`Pdf2ImgError`]. Each variant carries the path it
//! failed on and maps onto one of four closed [`ErrorKind`]s, so callers and
//! tests can branch on the cause without matching message text.
//!
//! There is no non-fatal error: the batch driver aborts on the first failure
//! and never deletes inputs after one.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Broad failure category of a [`Pdf2ImgError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Caller-supplied input is unusable (not a directory, bad pattern).
    Validation,
    /// A PDF could not be opened, parsed or rendered.
    Decode,
    /// Invalid conversion configuration or an encoder rejected a page.
    Encode,
    /// Listing, creating, writing or deleting on disk failed.
    Filesystem,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Decode => "decode",
            ErrorKind::Encode => "encode",
            ErrorKind::Filesystem => "filesystem",
        };
        f.write_str(s)
    }
}

/// All errors returned by the pdf2img library.
#[derive(Debug, Error)]
pub enum Pdf2ImgError {
    // ── Validation errors ─────────────────────────────────────────────────
    /// The input path does not exist or is not a directory.
    #[error("'{path}' is not an existing directory\nSpecify a directory that exists.")]
    NotADirectory { path: PathBuf },

    /// A file-name pattern failed to compile.
    #[error("Invalid file name pattern '{pattern}': {detail}")]
    InvalidPattern { pattern: String, detail: String },

    /// A PDF path has no usable file stem.
    #[error("Cannot derive an output name from '{path}'")]
    InvalidInput { path: PathBuf },

    // ── Decode errors ─────────────────────────────────────────────────────
    /// pdfium could not open or parse the document.
    #[error("Failed to open PDF '{path}': {detail}")]
    OpenFailed { path: PathBuf, detail: String },

    /// pdfium returned an error for a specific page.
    #[error("Rasterisation failed for page {page} of '{path}': {detail}")]
    RasterisationFailed {
        path: PathBuf,
        page: usize,
        detail: String,
    },

    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library: {0}\n\
Set PDFIUM_LIB_PATH=/path/to/libpdfium, or place the library next to the executable."
    )]
    PdfiumBindingFailed(String),

    // ── Encode errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The requested image type is not one of jpg, jpeg, png, gif, tiff.
    #[error("Unsupported image type '{value}' (expected one of: jpg, jpeg, png, gif, tiff)")]
    UnsupportedImageType { value: String },

    /// The image encoder rejected a rendered page.
    #[error("Failed to encode image '{path}': {source}")]
    EncodeFailed {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    // ── Filesystem errors ─────────────────────────────────────────────────
    /// The input directory listing could not be read.
    #[error("Failed to list directory '{path}': {source}")]
    ReadDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output directory could not be created.
    #[error("Failed to create output directory '{path}': {source}")]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output image file could not be created or flushed.
    #[error("Failed to write image file '{path}': {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A source PDF could not be deleted after a successful batch.
    #[error("Failed to delete input file '{path}': {source}")]
    DeleteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Pdf2ImgError {
    /// The failure category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Pdf2ImgError::NotADirectory { .. }
            | Pdf2ImgError::InvalidPattern { .. }
            | Pdf2ImgError::InvalidInput { .. } => ErrorKind::Validation,
            Pdf2ImgError::OpenFailed { .. }
            | Pdf2ImgError::RasterisationFailed { .. }
            | Pdf2ImgError::PdfiumBindingFailed(_) => ErrorKind::Decode,
            Pdf2ImgError::InvalidConfig(_)
            | Pdf2ImgError::UnsupportedImageType { .. }
            | Pdf2ImgError::EncodeFailed { .. } => ErrorKind::Encode,
            Pdf2ImgError::ReadDirFailed { .. }
            | Pdf2ImgError::CreateDirFailed { .. }
            | Pdf2ImgError::WriteFailed { .. }
            | Pdf2ImgError::DeleteFailed { .. } => ErrorKind::Filesystem,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_a_directory_display() {
        let e = Pdf2ImgError::NotADirectory {
            path: "/nope".into(),
        };
        assert!(e.to_string().contains("/nope"), "got: {e}");
        assert_eq!(e.kind(), ErrorKind::Validation);
    }

    #[test]
    fn rasterisation_failed_display() {
        let e = Pdf2ImgError::RasterisationFailed {
            path: "doc.pdf".into(),
            page: 3,
            detail: "bad stream".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("page 3"));
        assert!(msg.contains("doc.pdf"));
        assert_eq!(e.kind(), ErrorKind::Decode);
    }

    #[test]
    fn delete_failed_keeps_source() {
        use std::error::Error as _;
        let e = Pdf2ImgError::DeleteFailed {
            path: "a.pdf".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(e.kind(), ErrorKind::Filesystem);
        assert!(e.source().is_some());
    }

    #[test]
    fn config_errors_are_encode_kind() {
        assert_eq!(
            Pdf2ImgError::InvalidConfig("dpi".into()).kind(),
            ErrorKind::Encode
        );
        assert_eq!(
            Pdf2ImgError::UnsupportedImageType { value: "bmp".into() }.kind(),
            ErrorKind::Encode
        );
    }

    #[test]
    fn kind_display() {
        assert_eq!(ErrorKind::Filesystem.to_string(), "filesystem");
    }
}
