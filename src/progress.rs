//! Progress-callback trait for per-file batch events.
//!
//! Inject an [`Arc<dyn BatchProgressCallback>`] via
//! [`crate::config::BatchConfigBuilder::progress_callback`] to receive events
//! as the batch driver works through the matched PDFs.
//!
//! # Example
//!
//! ```rust
//! use pdf2img::{BatchConfig, BatchProgressCallback};
//! use std::path::Path;
//! use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
//!
//! struct CountingCallback {
//!     images: AtomicUsize,
//! }
//!
//! impl BatchProgressCallback for CountingCallback {
//!     fn on_file_complete(&self, _index: usize, _total: usize, _path: &Path, images: usize) {
//!         self.images.fetch_add(images, Ordering::SeqCst);
//!     }
//! }
//!
//! let counter = Arc::new(CountingCallback { images: AtomicUsize::new(0) });
//!
//! let config = BatchConfig::builder("scans")
//!     .progress_callback(counter as Arc<dyn BatchProgressCallback>)
//!     .build()
//!     .unwrap();
//! ```

use crate::output::RunSummary;
use std::path::Path;
use std::sync::Arc;

/// Called by the batch driver as it processes each file.
///
/// All methods have default no-op implementations so callers only override
/// what they care about. Files are processed one at a time, in order.
pub trait BatchProgressCallback: Send + Sync {
    /// Called once after the input directory was listed.
    ///
    /// # Arguments
    /// * `total_files` — number of PDFs that will be converted
    fn on_batch_start(&self, total_files: usize) {
        let _ = total_files;
    }

    /// Called before a PDF is opened.
    ///
    /// # Arguments
    /// * `index` — 1-indexed position in the batch
    /// * `total` — number of PDFs in the batch
    /// * `path`  — the PDF about to be converted
    fn on_file_start(&self, index: usize, total: usize, path: &Path) {
        let _ = (index, total, path);
    }

    /// Called after every page of a PDF was written.
    ///
    /// # Arguments
    /// * `images` — number of image files produced for this PDF
    fn on_file_complete(&self, index: usize, total: usize, path: &Path, images: usize) {
        let _ = (index, total, path, images);
    }

    /// Called once after all files converted and, if requested, were deleted.
    ///
    /// Not called when the batch fails.
    fn on_batch_complete(&self, summary: &RunSummary) {
        let _ = summary;
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl BatchProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::BatchConfig`].
pub type ProgressCallback = Arc<dyn BatchProgressCallback>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn noop_callback_does_not_panic() {
        let cb = NoopProgressCallback;
        cb.on_batch_start(2);
        cb.on_file_start(1, 2, Path::new("a.pdf"));
        cb.on_file_complete(1, 2, Path::new("a.pdf"), 3);
        cb.on_batch_complete(&RunSummary {
            input_files: 2,
            output_files: 3,
            output_dir: PathBuf::from("."),
            deleted_inputs: false,
        });
    }

    #[test]
    fn arc_dyn_callback_works() {
        let cb: ProgressCallback = Arc::new(NoopProgressCallback);
        cb.on_batch_start(10);
        cb.on_file_start(1, 10, Path::new("x.pdf"));
    }
}
