//! Result types returned by the conversion entry points.

use serde::Serialize;
use std::path::PathBuf;

/// Outcome of a successful batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Number of PDFs matched and converted.
    pub input_files: usize,
    /// Number of images written across all PDFs.
    pub output_files: usize,
    /// The explicit output directory if one was given, else the input directory.
    pub output_dir: PathBuf,
    /// Whether the source PDFs were deleted after conversion.
    pub deleted_inputs: bool,
}
