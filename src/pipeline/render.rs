//! PDF rasterisation: open a document and render its pages to `DynamicImage`.
//!
//! [`PdfEngine`] is the seam between the conversion loop and the PDF library.
//! [`PdfiumEngine`] is the production implementation over `pdfium-render`.
//! A document handle returned by [`PdfEngine::open`] is released when it is
//! dropped, so an error halfway through a document still closes it.

use crate::error::Pdf2ImgError;
use image::DynamicImage;
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// PDF user space units per inch.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Opens PDF documents for rendering.
pub trait PdfEngine {
    /// Open the document at `path`.
    fn open<'a>(&'a self, path: &Path) -> Result<Box<dyn RasterDocument + 'a>, Pdf2ImgError>;
}

/// An open PDF document.
pub trait RasterDocument {
    /// Total number of pages.
    fn page_count(&self) -> usize;

    /// Render the page at 0-based `index` at `dpi` dots per inch.
    fn render_page(&self, index: usize, dpi: u32) -> Result<DynamicImage, Pdf2ImgError>;
}

/// Scale factor applied to page dimensions for a given DPI.
pub fn scale_for_dpi(dpi: u32) -> f32 {
    dpi as f32 / POINTS_PER_INCH
}

// ── pdfium ───────────────────────────────────────────────────────────────

/// [`PdfEngine`] backed by the pdfium library.
pub struct PdfiumEngine {
    pdfium: Pdfium,
}

impl PdfiumEngine {
    /// Wrap an already-bound pdfium instance.
    pub fn new(pdfium: Pdfium) -> Self {
        Self { pdfium }
    }

    /// Bind to a pdfium library, trying in order:
    ///
    /// 1. `PDFIUM_LIB_PATH`, if set
    /// 2. the platform library next to the running executable
    /// 3. the system library search path
    pub fn bind() -> Result<Self, Pdf2ImgError> {
        let mut attempts: Vec<String> = Vec::new();

        for lib in candidate_libraries() {
            match Pdfium::bind_to_library(&lib) {
                Ok(bindings) => {
                    debug!("Bound pdfium from {}", lib.display());
                    return Ok(Self::new(Pdfium::new(bindings)));
                }
                Err(e) => attempts.push(format!("{}: {:?}", lib.display(), e)),
            }
        }

        match Pdfium::bind_to_system_library() {
            Ok(bindings) => {
                debug!("Bound system pdfium");
                Ok(Self::new(Pdfium::new(bindings)))
            }
            Err(e) => {
                attempts.push(format!("system library: {e:?}"));
                Err(Pdf2ImgError::PdfiumBindingFailed(attempts.join("; ")))
            }
        }
    }
}

/// Library files tried before the system search path. `PDFIUM_LIB_PATH` may
/// name either the library itself or the directory holding it.
fn candidate_libraries() -> Vec<PathBuf> {
    let mut libs = Vec::new();
    if let Ok(p) = std::env::var("PDFIUM_LIB_PATH") {
        let p = PathBuf::from(p);
        if p.is_dir() {
            libs.push(PathBuf::from(Pdfium::pdfium_platform_library_name_at_path(&p)));
        } else {
            libs.push(p);
        }
    }
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        libs.push(PathBuf::from(Pdfium::pdfium_platform_library_name_at_path(&exe_dir)));
    }
    libs
}

impl PdfEngine for PdfiumEngine {
    fn open<'a>(&'a self, path: &Path) -> Result<Box<dyn RasterDocument + 'a>, Pdf2ImgError> {
        let document = self
            .pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| Pdf2ImgError::OpenFailed {
                path: path.to_path_buf(),
                detail: format!("{:?}", e),
            })?;

        let doc = PdfiumDocument {
            path: path.to_path_buf(),
            document,
        };
        info!("PDF loaded: {} ({} pages)", path.display(), doc.page_count());
        Ok(Box::new(doc))
    }
}

struct PdfiumDocument<'a> {
    path: PathBuf,
    document: PdfDocument<'a>,
}

impl RasterDocument for PdfiumDocument<'_> {
    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    fn render_page(&self, index: usize, dpi: u32) -> Result<DynamicImage, Pdf2ImgError> {
        let failed = |e: PdfiumError| Pdf2ImgError::RasterisationFailed {
            path: self.path.clone(),
            page: index + 1,
            detail: format!("{:?}", e),
        };

        let page = self.document.pages().get(index as u16).map_err(failed)?;

        let render_config = PdfRenderConfig::new().scale_page_by_factor(scale_for_dpi(dpi));
        let bitmap = page.render_with_config(&render_config).map_err(failed)?;

        let image = bitmap.as_image();
        debug!(
            "Rendered page {} → {}x{} px",
            index + 1,
            image.width(),
            image.height()
        );
        Ok(image)
    }
}
