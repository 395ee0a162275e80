//! Pipeline stages for PDF-to-image conversion.
//!
//! Each submodule implements exactly one step.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ render ──▶ encode
//! (match)   (pdfium)   (jpeg/png/gif/tiff)
//! ```
//!
//! 1. [`input`]  — select the PDFs of a directory by file-name pattern
//! 2. [`render`] — open a document and rasterise each page at a DPI
//! 3. [`encode`] — encode each page buffer and write it to disk

pub mod encode;
pub mod input;
pub mod render;
