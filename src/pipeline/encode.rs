//! Image encoding: `DynamicImage` → image file on disk.
//!
//! Every format is written with the encoder's size-optimising settings:
//! PNG at best compression with adaptive filtering, JPEG at the configured
//! quality, GIF with a palette-quantised frame, TIFF uncompressed.
//! Rendered pages are opaque, so every format is written from an RGB buffer
//! with the alpha channel dropped.

use crate::config::ImageType;
use crate::error::Pdf2ImgError;
use image::codecs::gif::GifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::codecs::tiff::TiffEncoder;
use image::{DynamicImage, Frame, ImageError};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// NeuQuant sampling speed for GIF palettes (1 = slowest/best, 30 = fastest).
const GIF_QUANTIZE_SPEED: i32 = 10;

/// Encode `img` as `image_type` and write it to `path`, replacing any
/// existing file.
pub fn save_image(
    img: &DynamicImage,
    path: &Path,
    image_type: ImageType,
    jpeg_quality: u8,
) -> Result<(), Pdf2ImgError> {
    let file = File::create(path).map_err(|source| Pdf2ImgError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    encode_into(img, &mut writer, image_type, jpeg_quality).map_err(|e| match e {
        ImageError::IoError(source) => Pdf2ImgError::WriteFailed {
            path: path.to_path_buf(),
            source,
        },
        source => Pdf2ImgError::EncodeFailed {
            path: path.to_path_buf(),
            source,
        },
    })?;

    writer.flush().map_err(|source| Pdf2ImgError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Wrote {} ({})", path.display(), image_type);
    Ok(())
}

fn encode_into<W: Write + std::io::Seek>(
    img: &DynamicImage,
    writer: &mut W,
    image_type: ImageType,
    jpeg_quality: u8,
) -> Result<(), ImageError> {
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
    match image_type {
        ImageType::Jpg | ImageType::Jpeg => {
            rgb.write_with_encoder(JpegEncoder::new_with_quality(writer, jpeg_quality))
        }
        ImageType::Png => rgb.write_with_encoder(PngEncoder::new_with_quality(
            writer,
            CompressionType::Best,
            FilterType::Adaptive,
        )),
        ImageType::Gif => {
            let mut encoder = GifEncoder::new_with_speed(writer, GIF_QUANTIZE_SPEED);
            encoder.encode_frame(Frame::new(rgb.to_rgba8()))
        }
        ImageType::Tiff => rgb.write_with_encoder(TiffEncoder::new(writer)),
    }
}
