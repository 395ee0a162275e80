//! Conversion entry points: one PDF ([`convert_file`]) or a whole directory
//! ([`run_batch`]).
//!
//! Both are synchronous and process one document at a time. The batch stops
//! at the first error, leaving already-written images in place. Source PDFs
//! are deleted only after every file converted.

use crate::config::{BatchConfig, RasterConfig};
use crate::error::Pdf2ImgError;
use crate::output::RunSummary;
use crate::pipeline::render::PdfEngine;
use crate::pipeline::{encode, input};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Number of decimal digits in `n` (at least 1).
pub fn digit_count(n: usize) -> usize {
    n.to_string().len()
}

/// File-name suffix for 1-indexed `page` of a `total`-page document.
///
/// Empty for single-page documents, otherwise `_` plus the page number
/// zero-padded to the width of `total`, so lexical and numeric order agree.
pub fn page_suffix(page: usize, total: usize) -> String {
    if total > 1 {
        format!("_{:0width$}", page, width = digit_count(total))
    } else {
        String::new()
    }
}

/// Path of the image for `page` of `total`: `<dir>/<stem><suffix>.<ext>`.
pub fn output_path(dir: &Path, stem: &str, page: usize, total: usize, extension: &str) -> PathBuf {
    dir.join(format!("{stem}{}.{extension}", page_suffix(page, total)))
}

/// Rasterise every page of `pdf_path` and write one image per page.
///
/// The output directory (see [`RasterConfig::resolve_output_dir`]) is created
/// first, with parents. Existing images of the same name are overwritten.
///
/// # Returns
/// The page count, which equals the number of images written.
///
/// # Errors
/// Any open, render, encode or write failure. Images written before the
/// failure stay on disk.
pub fn convert_file(
    engine: &dyn PdfEngine,
    pdf_path: &Path,
    config: &RasterConfig,
) -> Result<usize, Pdf2ImgError> {
    let stem = pdf_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| Pdf2ImgError::InvalidInput {
            path: pdf_path.to_path_buf(),
        })?;

    let output_dir = config.resolve_output_dir(pdf_path);
    std::fs::create_dir_all(&output_dir).map_err(|source| Pdf2ImgError::CreateDirFailed {
        path: output_dir.clone(),
        source,
    })?;

    let document = engine.open(pdf_path)?;
    let total_pages = document.page_count();
    let extension = config.image_type.extension();

    for index in 0..total_pages {
        let page_num = index + 1;
        let image = document.render_page(index, config.dpi)?;
        let path = output_path(&output_dir, &stem, page_num, total_pages, extension);
        encode::save_image(&image, &path, config.image_type, config.jpeg_quality)?;
        debug!("Page {}/{} → {}", page_num, total_pages, path.display());
    }

    info!(
        "Converted {} → {} {} image(s) in {}",
        pdf_path.display(),
        total_pages,
        config.image_type,
        output_dir.display()
    );
    Ok(total_pages)
}

/// Convert every PDF of `config.input_dir` that matches `config.pattern`.
///
/// Files are converted in directory-listing order. When
/// `config.delete_inputs` is set, the sources are removed only once all of
/// them converted; any earlier error returns before the delete phase.
pub fn run_batch(engine: &dyn PdfEngine, config: &BatchConfig) -> Result<RunSummary, Pdf2ImgError> {
    let start = Instant::now();
    info!("Starting batch: {}", config.input_dir.display());

    // ── Step 1: Select inputs ────────────────────────────────────────────
    let pdf_files = input::list_matching_files(&config.input_dir, &config.pattern)?;
    let total_files = pdf_files.len();
    info!("Found {} input file(s)", total_files);

    if let Some(ref cb) = config.progress_callback {
        cb.on_batch_start(total_files);
    }

    // ── Step 2: Convert ──────────────────────────────────────────────────
    let mut output_files = 0;
    for (i, pdf) in pdf_files.iter().enumerate() {
        if let Some(ref cb) = config.progress_callback {
            cb.on_file_start(i + 1, total_files, pdf);
        }

        let images = convert_file(engine, pdf, &config.raster)?;
        output_files += images;

        if let Some(ref cb) = config.progress_callback {
            cb.on_file_complete(i + 1, total_files, pdf, images);
        }
    }

    // ── Step 3: Delete sources ───────────────────────────────────────────
    if config.delete_inputs {
        for pdf in &pdf_files {
            std::fs::remove_file(pdf).map_err(|source| Pdf2ImgError::DeleteFailed {
                path: pdf.clone(),
                source,
            })?;
            debug!("Deleted {}", pdf.display());
        }
        info!("Deleted {} input file(s)", total_files);
    }

    let summary = RunSummary {
        input_files: total_files,
        output_files,
        output_dir: config.reported_output_dir().to_path_buf(),
        deleted_inputs: config.delete_inputs,
    };

    info!(
        "Batch complete: {} file(s) → {} image(s) in {}ms",
        summary.input_files,
        summary.output_files,
        start.elapsed().as_millis()
    );

    if let Some(ref cb) = config.progress_callback {
        cb.on_batch_complete(&summary);
    }

    Ok(summary)
}
