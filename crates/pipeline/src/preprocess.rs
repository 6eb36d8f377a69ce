use image::{imageops, GrayImage, ImageBuffer, Luma, RgbImage};
use slipscan_core::ScanConfig;

/// Condition a photographed receipt for content analysis: grayscale
/// reduction, Gaussian blur, contrast stretch, global threshold,
/// polarity inversion. The caller's image is left untouched.
///
/// Every pixel of the returned buffer is exactly 0 (background) or
/// 255 (ink).
pub fn to_binary(image: &RgbImage, config: &ScanConfig) -> GrayImage {
    let gray: GrayImage = imageops::grayscale(image);
    let blurred = imageops::blur(&gray, config.blur_sigma);
    let stretched = stretch_contrast(blurred);
    let mut binary = apply_threshold(&stretched, config.threshold);
    // Receipts photograph as dark ink on a light background; flip so the
    // ink carries the signal in the projection profiles.
    imageops::invert(&mut binary);
    binary
}

/// Map the darkest and lightest pixels to the full 0..255 range. A
/// zero-range (uniform) image is returned unchanged.
fn stretch_contrast(gray: GrayImage) -> GrayImage {
    let (min_px, max_px) = gray
        .pixels()
        .fold((255u8, 0u8), |(mn, mx), p| (mn.min(p[0]), mx.max(p[0])));

    if max_px == min_px {
        return gray;
    }

    let range = (max_px - min_px) as u32;
    ImageBuffer::from_fn(gray.width(), gray.height(), |x, y| {
        let p = gray.get_pixel(x, y)[0];
        Luma([((p - min_px) as u32 * 255 / range) as u8])
    })
}

/// Binarize against a single global cutoff: below the threshold maps to
/// 0, at or above maps to 255.
fn apply_threshold(gray: &GrayImage, threshold: u8) -> GrayImage {
    ImageBuffer::from_fn(gray.width(), gray.height(), |x, y| {
        if gray.get_pixel(x, y)[0] < threshold {
            Luma([0u8])
        } else {
            Luma([255u8])
        }
    })
}
