//! Configuration types for PDF-to-image conversion.
//!
//! A single-file conversion is controlled by [`RasterConfig`]. A directory
//! batch wraps one in [`BatchConfig`], adding the input directory, the file
//! pattern and the delete-after-success switch. Both are built through
//! builders that validate in `build()`.

use crate::error::Pdf2ImgError;
use crate::pipeline::input::FilePattern;
use crate::progress::ProgressCallback;
use image::ImageFormat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default rendering resolution.
pub const DEFAULT_DPI: u32 = 150;

/// Default JPEG quality.
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

// ── Image type ───────────────────────────────────────────────────────────

/// Output image format.
///
/// `Jpg` and `Jpeg` produce identical JPEG data; they differ only in the
/// extension written to disk, which keeps the spelling the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    Jpg,
    Jpeg,
    Png,
    Gif,
    Tiff,
}

impl ImageType {
    /// Every accepted image type, in CLI help order.
    pub const ALL: [ImageType; 5] = [
        ImageType::Jpg,
        ImageType::Jpeg,
        ImageType::Png,
        ImageType::Gif,
        ImageType::Tiff,
    ];

    /// Lowercase file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ImageType::Jpg => "jpg",
            ImageType::Jpeg => "jpeg",
            ImageType::Png => "png",
            ImageType::Gif => "gif",
            ImageType::Tiff => "tiff",
        }
    }

    /// The encoder format. `jpg` is normalised to JPEG.
    pub fn format(self) -> ImageFormat {
        match self {
            ImageType::Jpg | ImageType::Jpeg => ImageFormat::Jpeg,
            ImageType::Png => ImageFormat::Png,
            ImageType::Gif => ImageFormat::Gif,
            ImageType::Tiff => ImageFormat::Tiff,
        }
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ImageType {
    type Err = Pdf2ImgError;

    /// Accepts the all-lowercase or all-uppercase name: `png` or `PNG`,
    /// not `Png`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ImageType::ALL
            .into_iter()
            .find(|t| t.extension() == s || t.extension().to_ascii_uppercase() == s)
            .ok_or_else(|| Pdf2ImgError::UnsupportedImageType {
                value: s.to_string(),
            })
    }
}

// ── Single-file configuration ────────────────────────────────────────────

/// Configuration for converting one PDF to images.
///
/// # Example
/// ```rust
/// use pdf2img::{ImageType, RasterConfig};
///
/// let config = RasterConfig::builder()
///     .image_type(ImageType::Png)
///     .dpi(300)
///     .output_dir("out")
///     .build()
///     .unwrap();
/// assert_eq!(config.dpi, 300);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterConfig {
    /// Output format and extension. Default: [`ImageType::Png`].
    pub image_type: ImageType,

    /// Rendering resolution in dots per inch. Must be ≥ 1. Default: 150.
    ///
    /// PDF user space is 72 units per inch, so pages are scaled by `dpi / 72`.
    pub dpi: u32,

    /// Directory for the images. `None` writes next to each PDF.
    ///
    /// Created with all parents if it does not exist.
    pub output_dir: Option<PathBuf>,

    /// JPEG quality, 1–100. Ignored for other formats. Default: 75.
    pub jpeg_quality: u8,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            image_type: ImageType::Png,
            dpi: DEFAULT_DPI,
            output_dir: None,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl RasterConfig {
    /// Create a new builder for `RasterConfig`.
    pub fn builder() -> RasterConfigBuilder {
        RasterConfigBuilder {
            config: Self::default(),
        }
    }

    /// Directory the images of `pdf_path` are written to.
    pub fn resolve_output_dir(&self, pdf_path: &Path) -> PathBuf {
        match self.explicit_output_dir() {
            Some(dir) => dir.to_path_buf(),
            None => pdf_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }

    /// `output_dir`, treating an empty path as unset.
    fn explicit_output_dir(&self) -> Option<&Path> {
        self.output_dir
            .as_deref()
            .filter(|dir| !dir.as_os_str().is_empty())
    }
}

/// Builder for [`RasterConfig`].
#[derive(Debug)]
pub struct RasterConfigBuilder {
    config: RasterConfig,
}

impl RasterConfigBuilder {
    pub fn image_type(mut self, image_type: ImageType) -> Self {
        self.config.image_type = image_type;
        self
    }

    pub fn dpi(mut self, dpi: u32) -> Self {
        self.config.dpi = dpi;
        self
    }

    /// An empty path leaves the output directory unset.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.config.output_dir = (!dir.as_os_str().is_empty()).then_some(dir);
        self
    }

    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.config.jpeg_quality = quality;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<RasterConfig, Pdf2ImgError> {
        let c = &self.config;
        if c.dpi == 0 {
            return Err(Pdf2ImgError::InvalidConfig(
                "DPI must be a positive integer, got 0".into(),
            ));
        }
        if !(1..=100).contains(&c.jpeg_quality) {
            return Err(Pdf2ImgError::InvalidConfig(format!(
                "JPEG quality must be 1–100, got {}",
                c.jpeg_quality
            )));
        }
        Ok(self.config)
    }
}

// ── Batch configuration ──────────────────────────────────────────────────

/// Configuration for converting every matching PDF in a directory.
#[derive(Clone)]
pub struct BatchConfig {
    /// Directory scanned (non-recursively) for inputs.
    pub input_dir: PathBuf,

    /// Settings shared by every file of the batch.
    pub raster: RasterConfig,

    /// File names to convert. Default: [`FilePattern::pdf`].
    pub pattern: FilePattern,

    /// Delete the source PDFs once the whole batch succeeded. Default: false.
    pub delete_inputs: bool,

    /// Receives per-file progress events. Default: none.
    pub progress_callback: Option<ProgressCallback>,
}

impl fmt::Debug for BatchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchConfig")
            .field("input_dir", &self.input_dir)
            .field("raster", &self.raster)
            .field("pattern", &self.pattern)
            .field("delete_inputs", &self.delete_inputs)
            .field(
                "progress_callback",
                &self
                    .progress_callback
                    .as_ref()
                    .map(|_| "<dyn BatchProgressCallback>"),
            )
            .finish()
    }
}

impl BatchConfig {
    /// Create a new builder scanning `input_dir`.
    pub fn builder(input_dir: impl Into<PathBuf>) -> BatchConfigBuilder {
        BatchConfigBuilder {
            input_dir: input_dir.into(),
            raster: RasterConfig::builder(),
            pattern: FilePattern::pdf(),
            delete_inputs: false,
            progress_callback: None,
        }
    }

    /// Directory reported in the run summary: the explicit output directory
    /// if one was given, else the input directory.
    pub fn reported_output_dir(&self) -> &Path {
        self.raster.explicit_output_dir().unwrap_or(&self.input_dir)
    }
}

/// Builder for [`BatchConfig`].
pub struct BatchConfigBuilder {
    input_dir: PathBuf,
    raster: RasterConfigBuilder,
    pattern: FilePattern,
    delete_inputs: bool,
    progress_callback: Option<ProgressCallback>,
}

impl BatchConfigBuilder {
    pub fn image_type(mut self, image_type: ImageType) -> Self {
        self.raster = self.raster.image_type(image_type);
        self
    }

    pub fn dpi(mut self, dpi: u32) -> Self {
        self.raster = self.raster.dpi(dpi);
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.raster = self.raster.output_dir(dir);
        self
    }

    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.raster = self.raster.jpeg_quality(quality);
        self
    }

    pub fn pattern(mut self, pattern: FilePattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn delete_inputs(mut self, v: bool) -> Self {
        self.delete_inputs = v;
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating the shared raster settings.
    pub fn build(self) -> Result<BatchConfig, Pdf2ImgError> {
        Ok(BatchConfig {
            input_dir: self.input_dir,
            raster: self.raster.build()?,
            pattern: self.pattern,
            delete_inputs: self.delete_inputs,
            progress_callback: self.progress_callback,
        })
    }
}
