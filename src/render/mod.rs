//! Re-drawing a QR bitmap with styled modules, eyes and border
//!
//! Drawing order:
//! 1. Background fill
//! 2. Circular clip (circle border only)
//! 3. Body modules outside the eyes
//! 4. Eyes (frame, fixed square ring, ball)
//! 5. Clip released, border stroked

/// Body module shapes
pub mod body;
/// Border and clip geometry
pub mod border;
/// Eye layers
pub mod eye;
/// Path construction
pub mod path;
/// Surface trait and tiny-skia backend
pub mod surface;

use image::RgbaImage;
use tracing::debug;

use crate::error::StyleError;
use crate::models::{EyePattern, OuterBorderShape, ResolvedStyle};
use body::draw_body;
use border::{border_padding, border_shape, clip_circle};
use eye::draw_eye;
pub use surface::{PixmapSurface, Shape, Surface};

/// Counts reported by [`render`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Body modules drawn
    pub modules: usize,
    /// Eyes drawn
    pub eyes: usize,
}

/// Draw `img` onto `surface` in the given style.
///
/// `surface` must have the same dimensions as `img`.
pub fn render<S: Surface>(
    surface: &mut S,
    img: &RgbaImage,
    module_size: u32,
    eyes: &[EyePattern],
    style: &ResolvedStyle,
    dark_threshold: u32,
) -> Result<RenderStats, StyleError> {
    let (width, height) = (surface.width(), surface.height());
    surface.clear(style.background);

    let circular = style.outer_border_shape == OuterBorderShape::Circle;
    if circular {
        let (cx, cy, r) = clip_circle(width, height);
        surface.clip_to_circle(cx, cy, r)?;
    }

    let modules = draw_body(
        surface,
        img,
        module_size,
        eyes,
        style.body_shape,
        style.foreground,
        dark_threshold,
    );

    let m = module_size.max(1) as f32;
    for eye in eyes {
        draw_eye(
            surface,
            eye,
            m,
            style.eye_frame_shape,
            style.eye_ball_shape,
            style.foreground,
            style.background,
        );
    }

    if circular {
        surface.reset_clip();
    }

    if let Some(shape) = border_shape(style.outer_border_shape, width, height) {
        surface.stroke(&shape, style.foreground, border_padding(width, height));
    }

    let stats = RenderStats {
        modules,
        eyes: eyes.len(),
    };
    debug!(
        modules = stats.modules,
        eyes = stats.eyes,
        body = %style.body_shape,
        border = %style.outer_border_shape,
        "Rendered styled code"
    );
    Ok(stats)
}
