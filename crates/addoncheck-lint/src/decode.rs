//! Image decoding for artwork checks.

use image::{DynamicImage, Limits};
use std::path::Path;

/// Facts about a decoded image that artwork policy cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// True if any pixel has alpha below fully opaque.
    pub has_transparency: bool,
}

/// Errors that can occur while opening an image.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The file is missing or unreadable.
    #[error("failed to read image: {0}")]
    Io(#[from] std::io::Error),

    /// The file is truncated, corrupt, or not a recognized image format.
    #[error("failed to decode image: {0}")]
    Format(#[from] image::ImageError),
}

/// Opens an image file and reports its dimensions and transparency.
pub trait ImageDecoder {
    fn decode(&self, path: &Path) -> Result<DecodedImage, DecodeError>;
}

/// Decoder backed by the `image` crate (PNG, JPEG and GIF codecs).
///
/// The format is guessed from the file contents, falling back to the
/// extension. The whole image is decoded so truncated files are caught.
/// No allocation limits apply: a large but valid image is not corrupt.
#[derive(Debug, Clone, Copy, Default)]
pub struct RasterDecoder;

impl ImageDecoder for RasterDecoder {
    fn decode(&self, path: &Path) -> Result<DecodedImage, DecodeError> {
        decode_with_limits(path, Limits::no_limits())
    }
}

fn decode_with_limits(path: &Path, limits: Limits) -> Result<DecodedImage, DecodeError> {
    let mut reader = image::ImageReader::open(path)?.with_guessed_format()?;
    reader.limits(limits);
    let image = reader.decode()?;

    Ok(DecodedImage {
        width: image.width(),
        height: image.height(),
        has_transparency: has_transparency(&image),
    })
}

/// Returns true if the image carries an alpha channel with at least one
/// non-opaque pixel.
fn has_transparency(image: &DynamicImage) -> bool {
    if !image.color().has_alpha() {
        return false;
    }
    image.to_rgba8().pixels().any(|pixel| pixel.0[3] < u8::MAX)
}
