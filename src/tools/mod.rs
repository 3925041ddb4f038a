//! Helpers shared by the CLI, benches and tests: loading inputs from disk
//! and building synthetic QR-like bitmaps.

use image::{Rgba, RgbaImage};
use std::fs;
use std::path::Path;

use crate::error::StyleError;
use crate::models::Rgb;
use crate::pipeline::decode;
use crate::utils::luminance::{DARK_THRESHOLD, is_dark};

/// Read and decode an image file into RGBA pixels.
pub fn load_rgba<P: AsRef<Path>>(path: P) -> Result<RgbaImage, StyleError> {
    let bytes = fs::read(path)?;
    decode(&bytes)
}

/// Summary of dark pixels in an image.
#[derive(Debug, Clone, Copy)]
pub struct DarkStats {
    /// Count of dark pixels.
    pub dark_pixels: usize,
    /// Total pixels.
    pub total_pixels: usize,
    /// Fraction of dark pixels.
    pub dark_ratio: f32,
}

/// Count dark pixels with the default threshold.
pub fn dark_stats(img: &RgbaImage) -> DarkStats {
    let total_pixels = (img.width() as usize) * (img.height() as usize);
    let dark_pixels = img
        .pixels()
        .filter(|p| is_dark(p, DARK_THRESHOLD))
        .count();
    let dark_ratio = if total_pixels == 0 {
        0.0
    } else {
        dark_pixels as f32 / total_pixels as f32
    };
    DarkStats {
        dark_pixels,
        total_pixels,
        dark_ratio,
    }
}

/// Modules per side of a version-1 code
pub const VERSION1_MODULES: usize = 21;
/// Light modules around the synthetic code; puts each eye where the
/// corner windows look for it
pub const SYNTHETIC_QUIET_ZONE: u32 = 7;

/// Module matrix with three standard eyes (plus light separators) and a
/// checkerboard everywhere else. `true` = dark.
pub fn synthetic_matrix(modules: usize) -> Vec<Vec<bool>> {
    let mut matrix = vec![vec![false; modules]; modules];
    let far = modules.saturating_sub(7);

    for (r, row) in matrix.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            let eye_origin = if r < 8 && c < 8 {
                Some((0, 0))
            } else if r < 8 && c + 8 >= modules {
                Some((0, far))
            } else if r + 8 >= modules && c < 8 {
                Some((far, 0))
            } else {
                None
            };

            *cell = match eye_origin {
                Some((r0, c0)) => {
                    // Separators fall outside the 7x7 box and stay light
                    if r < r0 || c < c0 || r >= r0 + 7 || c >= c0 + 7 {
                        false
                    } else {
                        let (dr, dc) = (r - r0, c - c0);
                        let ring = dr == 0 || dc == 0 || dr == 6 || dc == 6;
                        let ball = (2..5).contains(&dr) && (2..5).contains(&dc);
                        ring || ball
                    }
                }
                None => (r + c) % 2 == 0,
            };
        }
    }

    matrix
}

/// Rasterize a module matrix with `quiet` light modules on every side.
///
/// A `module_px` of 0 is treated as 1.
pub fn render_matrix(
    matrix: &[Vec<bool>],
    module_px: u32,
    quiet: u32,
    foreground: Rgb,
    background: Rgb,
) -> RgbaImage {
    let module_px = module_px.max(1);
    let modules = matrix.len() as u32;
    let side = (modules + 2 * quiet) * module_px;
    let (fg, bg) = (foreground.to_rgba(), background.to_rgba());

    RgbaImage::from_fn(side, side, |x, y| {
        let (mx, my) = (x / module_px, y / module_px);
        if mx < quiet || my < quiet || mx >= quiet + modules || my >= quiet + modules {
            return bg;
        }
        if matrix[(my - quiet) as usize][(mx - quiet) as usize] {
            fg
        } else {
            bg
        }
    })
}

/// Black-on-white version-1 sized synthetic code at `module_px` pixels per module.
pub fn synthetic_code(module_px: u32) -> RgbaImage {
    render_matrix(
        &synthetic_matrix(VERSION1_MODULES),
        module_px.max(1),
        SYNTHETIC_QUIET_ZONE,
        Rgb::BLACK,
        Rgb::WHITE,
    )
}

/// Solid image of one color
pub fn blank(width: u32, height: u32, color: Rgb) -> RgbaImage {
    let Rgb { r, g, b } = color;
    RgbaImage::from_pixel(width, height, Rgba([r, g, b, 255]))
}
