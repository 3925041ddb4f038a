/// Eye (position-detection pattern) location by windowed dark-pixel ratio
use image::RgbaImage;
use tracing::{debug, trace};

use super::config::DetectionConfig;
use crate::models::{EyePattern, Point};
use crate::utils::luminance::count_dark;

/// Modules per side of a position-detection pattern
pub const EYE_MODULES: u32 = 7;

/// The three corners that carry an eye. Bottom-right never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    /// Top-left
    TopLeft,
    /// Top-right
    TopRight,
    /// Bottom-left
    BottomLeft,
}

impl Corner {
    /// Scan order used by [`locate_eyes`]
    pub const ALL: [Corner; 3] = [Corner::TopLeft, Corner::TopRight, Corner::BottomLeft];

    /// Top-left pixel of this corner's candidate window, possibly negative
    fn window_origin(self, width: u32, height: u32, window: u32, margin: u32) -> (i64, i64) {
        let (w, h, s, m) = (width as i64, height as i64, window as i64, margin as i64);
        match self {
            Corner::TopLeft => (m, m),
            Corner::TopRight => (w - m - s, m),
            Corner::BottomLeft => (m, h - m - s),
        }
    }
}

/// Locate up to three eyes, in top-left, top-right, bottom-left order.
///
/// Each corner's window is `7 * module_size` pixels square. Windows that do
/// not fit inside the image are skipped. A window counts as an eye when its
/// dark fraction lies strictly inside the configured band. Missing eyes are
/// not an error; the result may be empty.
pub fn locate_eyes(img: &RgbaImage, module_size: u32, config: &DetectionConfig) -> Vec<EyePattern> {
    Corner::ALL
        .iter()
        .filter_map(|&corner| check_corner(img, corner, module_size, config))
        .collect()
}

/// Classify a single corner's window
pub fn check_corner(
    img: &RgbaImage,
    corner: Corner,
    module_size: u32,
    config: &DetectionConfig,
) -> Option<EyePattern> {
    let (width, height) = img.dimensions();
    let module_size = module_size.max(1);
    let window = module_size.checked_mul(EYE_MODULES)?;
    let margin = module_size.checked_mul(config.eye_margin_modules)?;

    let (x0, y0) = corner.window_origin(width, height, window, margin);
    if x0 < 0 || y0 < 0 || x0 + window as i64 > width as i64 || y0 + window as i64 > height as i64 {
        trace!(?corner, x0, y0, window, "Eye window out of bounds");
        return None;
    }
    let (x0, y0) = (x0 as u32, y0 as u32);

    let dark = count_dark(img, x0, y0, window, window, config.dark_threshold);
    let total = window as u64 * window as u64;
    let ratio = dark as f32 / total as f32;
    trace!(?corner, x0, y0, window, ratio, "Eye window dark ratio");

    if ratio > config.min_eye_dark_ratio && ratio < config.max_eye_dark_ratio {
        let half = window as f32 / 2.0;
        let center = Point::new(x0 as f32, y0 as f32).translate(half, half);
        let eye = EyePattern::new(center.x, center.y, window as f32);
        debug!(?corner, x = eye.center.x, y = eye.center.y, size = eye.size, "Eye detected");
        Some(eye)
    } else {
        None
    }
}
