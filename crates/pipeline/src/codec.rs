use image::RgbImage;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Empty image payload; expected an encoded raster image")]
    Empty,
    #[error("Failed to decode image: {0}. Input must be a valid encoded raster image (PNG, JPEG, ...)")]
    Invalid(#[from] image::ImageError),
}

/// Decode raw image bytes (JPEG / PNG / WEBP / ...) into an RGB buffer.
/// Grayscale and indexed sources are upconverted so every downstream
/// stage sees the same three-channel layout.
pub fn decode(data: &[u8]) -> Result<RgbImage, DecodeError> {
    if data.is_empty() {
        return Err(DecodeError::Empty);
    }
    Ok(image::load_from_memory(data)?.to_rgb8())
}
