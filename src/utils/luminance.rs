/// Dark/light pixel classification
///
/// A pixel is dark when R + G + B falls below a fixed threshold. The alpha
/// channel is ignored; source pixels are treated as opaque.
use image::{Rgba, RgbaImage};
use rayon::prelude::*;

/// Default threshold on R + G + B (roughly half of the 765 maximum)
pub const DARK_THRESHOLD: u32 = 384;

/// Sum of the color channels of a pixel
#[inline]
pub fn channel_sum(pixel: &Rgba<u8>) -> u32 {
    pixel[0] as u32 + pixel[1] as u32 + pixel[2] as u32
}

/// Check whether a pixel is dark under `threshold`
#[inline]
pub fn is_dark(pixel: &Rgba<u8>, threshold: u32) -> bool {
    channel_sum(pixel) < threshold
}

/// Classify one row of an image, true = dark
pub fn classify_row(img: &RgbaImage, y: u32, threshold: u32) -> Vec<bool> {
    if y >= img.height() {
        return Vec::new();
    }
    (0..img.width())
        .map(|x| is_dark(img.get_pixel(x, y), threshold))
        .collect()
}

/// Count dark pixels in the window `[x0, x0 + w) x [y0, y0 + h)`
///
/// The window is clamped to the image. Rows are counted in parallel.
pub fn count_dark(img: &RgbaImage, x0: u32, y0: u32, w: u32, h: u32, threshold: u32) -> usize {
    let x_end = x0.saturating_add(w).min(img.width());
    let y_end = y0.saturating_add(h).min(img.height());
    if x0 >= x_end || y0 >= y_end {
        return 0;
    }

    (y0..y_end)
        .into_par_iter()
        .map(|y| {
            (x0..x_end)
                .filter(|&x| is_dark(img.get_pixel(x, y), threshold))
                .count()
        })
        .sum()
}
