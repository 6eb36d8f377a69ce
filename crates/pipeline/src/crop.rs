use image::{imageops, RgbImage};
use slipscan_core::BoundingBox;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CropError {
    #[error("Internal error: content box {area} does not fit a {width}x{height} image")]
    OutOfBounds {
        area: BoundingBox,
        width: u32,
        height: u32,
    },
}

/// Extract the content sub-rectangle from the original (non-binarized)
/// image. The box comes from the detector, which works in the same
/// coordinate system, so a failure here means a pipeline bug rather
/// than bad input.
pub fn crop(original: &RgbImage, area: &BoundingBox) -> Result<RgbImage, CropError> {
    let (width, height) = original.dimensions();
    if !area.fits_within(width, height) {
        return Err(CropError::OutOfBounds {
            area: *area,
            width,
            height,
        });
    }
    Ok(imageops::crop_imm(original, area.left, area.top, area.width(), area.height()).to_image())
}
