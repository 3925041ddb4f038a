//! Body (data module) rendering
use image::RgbaImage;

use super::surface::{Shape, Surface};
use crate::models::{BodyShape, EyePattern, Rgb};
use crate::utils::luminance::is_dark;

/// Corner radius of a rounded module, in modules
const ROUNDED_RADIUS: f32 = 0.2;
/// Diameter of a dot module, in modules
const DOT_DIAMETER: f32 = 0.6;

/// Shape covering one module cell whose top-left pixel is (x, y)
pub fn module_shape(shape: BodyShape, x: f32, y: f32, module_size: f32) -> Shape {
    let (cx, cy) = (x + module_size / 2.0, y + module_size / 2.0);
    match shape {
        BodyShape::Square => Shape::Rect {
            x,
            y,
            w: module_size,
            h: module_size,
        },
        BodyShape::Rounded => Shape::RoundedRect {
            x,
            y,
            w: module_size,
            h: module_size,
            radius: module_size * ROUNDED_RADIUS,
        },
        BodyShape::Circle => Shape::Circle {
            cx,
            cy,
            r: module_size / 2.0,
        },
        BodyShape::Dots => Shape::Circle {
            cx,
            cy,
            r: module_size * DOT_DIAMETER / 2.0,
        },
    }
}

/// Draw every dark module outside the eyes. Returns the number drawn.
///
/// Cells are visited on a `module_size` stride and classified by their
/// top-left pixel.
pub fn draw_body<S: Surface>(
    surface: &mut S,
    img: &RgbaImage,
    module_size: u32,
    eyes: &[EyePattern],
    shape: BodyShape,
    color: Rgb,
    dark_threshold: u32,
) -> usize {
    let step = module_size.max(1) as usize;
    let m = module_size.max(1) as f32;
    let mut drawn = 0;

    for y in (0..img.height()).step_by(step) {
        for x in (0..img.width()).step_by(step) {
            if !is_dark(img.get_pixel(x, y), dark_threshold) {
                continue;
            }
            let (fx, fy) = (x as f32, y as f32);
            if eyes.iter().any(|eye| eye.contains(fx, fy)) {
                continue;
            }
            surface.fill(&module_shape(shape, fx, fy, m), color);
            drawn += 1;
        }
    }

    drawn
}
