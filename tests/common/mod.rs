//! Shared helpers for the integration tests.
#![allow(dead_code)]

use image::{DynamicImage, Rgba, RgbaImage};
use pdf2img::{PdfEngine, Pdf2ImgError, RasterDocument};
use std::cell::Cell;
use std::path::Path;

/// In-memory engine reading "fake PDFs": files whose content is
/// `%PDF-fake pages=<N>`. Anything else fails to open.
///
/// A file containing `fail-page=<K>` as well fails to render page K.
#[derive(Default)]
pub struct FakeEngine {
    pub opened: Cell<usize>,
    pub open_now: Cell<usize>,
}

impl PdfEngine for FakeEngine {
    fn open<'a>(&'a self, path: &Path) -> Result<Box<dyn RasterDocument + 'a>, Pdf2ImgError> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        let open_failed = || Pdf2ImgError::OpenFailed {
            path: path.to_path_buf(),
            detail: "not a PDF".into(),
        };
        if !content.starts_with("%PDF-fake") {
            return Err(open_failed());
        }
        let pages = field(&content, "pages=").ok_or_else(open_failed)?;
        let fail_page = field(&content, "fail-page=");

        self.opened.set(self.opened.get() + 1);
        self.open_now.set(self.open_now.get() + 1);
        assert_eq!(self.open_now.get(), 1, "only one document may be open at a time");

        Ok(Box::new(FakeDocument {
            pages,
            fail_page,
            path: path.to_path_buf(),
            open_now: &self.open_now,
        }))
    }
}

fn field(content: &str, key: &str) -> Option<usize> {
    content
        .split_whitespace()
        .find_map(|w| w.strip_prefix(key))
        .and_then(|v| v.parse().ok())
}

struct FakeDocument<'a> {
    pages: usize,
    fail_page: Option<usize>,
    path: std::path::PathBuf,
    open_now: &'a Cell<usize>,
}

impl RasterDocument for FakeDocument<'_> {
    fn page_count(&self) -> usize {
        self.pages
    }

    fn render_page(&self, index: usize, dpi: u32) -> Result<DynamicImage, Pdf2ImgError> {
        if self.fail_page == Some(index + 1) {
            return Err(Pdf2ImgError::RasterisationFailed {
                path: self.path.clone(),
                page: index + 1,
                detail: "broken content stream".into(),
            });
        }
        // A 1-inch square page.
        let shade = (index * 20 % 256) as u8;
        Ok(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            dpi,
            dpi,
            Rgba([shade, 128, 255 - shade, 255]),
        )))
    }
}

impl Drop for FakeDocument<'_> {
    fn drop(&mut self) {
        self.open_now.set(self.open_now.get() - 1);
    }
}

/// Write a fake PDF with `pages` pages to `dir/name`.
pub fn write_fake_pdf(dir: &Path, name: &str, pages: usize) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!("%PDF-fake pages={pages}")).unwrap();
    path
}

/// Write a file that no engine can open.
pub fn write_corrupt_pdf(dir: &Path, name: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"this is not a pdf").unwrap();
    path
}

/// A minimal, valid PDF with `pages` blank 1-inch (72 × 72 pt) pages.
pub fn minimal_pdf(pages: usize) -> Vec<u8> {
    let mut objects: Vec<String> = Vec::new();
    objects.push("<< /Type /Catalog /Pages 2 0 R >>".to_string());
    let kids: Vec<String> = (0..pages).map(|i| format!("{} 0 R", i + 3)).collect();
    objects.push(format!(
        "<< /Type /Pages /Kids [{}] /Count {} >>",
        kids.join(" "),
        pages
    ));
    for _ in 0..pages {
        objects.push("<< /Type /Page /Parent 2 0 R /MediaBox [0 0 72 72] >>".to_string());
    }

    let mut out = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.push_str(&format!("{} 0 obj\n{}\nendobj\n", i + 1, body));
    }

    let xref_offset = out.len();
    out.push_str(&format!("xref\n0 {}\n", objects.len() + 1));
    out.push_str("0000000000 65535 f \n");
    for offset in offsets {
        out.push_str(&format!("{offset:010} 00000 n \n"));
    }
    out.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_offset
    ));
    out.into_bytes()
}

/// Sorted file names directly inside `dir`.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
