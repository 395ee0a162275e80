//! # pdf2img
//!
//! Batch-convert PDF files into raster images, one image per page.
//!
//! Every matching PDF in a directory is rasterised through pdfium at a chosen
//! DPI and written as JPEG, PNG, GIF or TIFF. Multi-page documents get a
//! zero-padded page suffix (`doc_01.png` … `doc_12.png`); single-page
//! documents keep the bare stem (`doc.png`).
//!
//! ## Pipeline Overview
//!
//! ```text
//! input dir
//!  │
//!  ├─ 1. Input   list *.pdf (case-insensitive, non-recursive)
//!  ├─ 2. Render  rasterise each page via pdfium at dpi/72 scale
//!  ├─ 3. Encode  jpeg / png / gif / tiff, written next to the PDF or to output_dir
//!  └─ 4. Delete  optional, only after every file converted
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2img::{run_batch, BatchConfig, ImageType, PdfiumEngine};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = PdfiumEngine::bind()?;
//!     let config = BatchConfig::builder("scans")
//!         .image_type(ImageType::Jpg)
//!         .dpi(200)
//!         .output_dir("scans/images")
//!         .build()?;
//!     let summary = run_batch(&engine, &config)?;
//!     println!("{} PDFs → {} images", summary.input_files, summary.output_files);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2img` binary (clap + anyhow + indicatif + tracing-subscriber) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod report;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{BatchConfig, BatchConfigBuilder, ImageType, RasterConfig, RasterConfigBuilder};
pub use convert::{convert_file, run_batch};
pub use error::{ErrorKind, Pdf2ImgError};
pub use output::RunSummary;
pub use pipeline::input::{list_matching_files, FilePattern};
pub use pipeline::render::{PdfEngine, PdfiumEngine, RasterDocument};
pub use progress::{BatchProgressCallback, NoopProgressCallback, ProgressCallback};
pub use report::{failure_report, success_report};
