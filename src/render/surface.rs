//! Drawing surface abstraction and its tiny-skia implementation.

use image::RgbaImage;
use tiny_skia::{Color, FillRule, Mask, Paint, Path, Pixmap, Stroke, Transform};

use super::path::{circle_path, rect_path, rounded_rect_path};
use crate::error::StyleError;
use crate::models::Rgb;

/// A closed set of drawable primitives
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Axis-aligned rectangle
    Rect {
        /// Left edge
        x: f32,
        /// Top edge
        y: f32,
        /// Width
        w: f32,
        /// Height
        h: f32,
    },
    /// Rectangle with rounded corners
    RoundedRect {
        /// Left edge
        x: f32,
        /// Top edge
        y: f32,
        /// Width
        w: f32,
        /// Height
        h: f32,
        /// Corner radius
        radius: f32,
    },
    /// Circle
    Circle {
        /// Center x
        cx: f32,
        /// Center y
        cy: f32,
        /// Radius
        r: f32,
    },
}

impl Shape {
    /// Build the outline, `None` for degenerate geometry
    pub fn to_path(&self) -> Option<Path> {
        match *self {
            Shape::Rect { x, y, w, h } => rect_path(x, y, w, h),
            Shape::RoundedRect { x, y, w, h, radius } => rounded_rect_path(x, y, w, h, radius),
            Shape::Circle { cx, cy, r } => circle_path(cx, cy, r),
        }
    }
}

/// Minimal 2D drawing interface used by the renderer
pub trait Surface {
    /// Surface width in pixels
    fn width(&self) -> u32;

    /// Surface height in pixels
    fn height(&self) -> u32;

    /// Fill the whole surface, ignoring any clip
    fn clear(&mut self, color: Rgb);

    /// Fill a shape, honoring the current clip
    fn fill(&mut self, shape: &Shape, color: Rgb);

    /// Stroke a shape outline with the given line width, honoring the current clip
    fn stroke(&mut self, shape: &Shape, color: Rgb, width: f32);

    /// Restrict subsequent drawing to a circle
    fn clip_to_circle(&mut self, cx: f32, cy: f32, r: f32) -> Result<(), StyleError>;

    /// Remove any clip
    fn reset_clip(&mut self);

    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        self.fill(&Shape::Rect { x, y, w, h }, color);
    }

    /// Fill a rounded rectangle
    fn fill_rounded_rect(&mut self, x: f32, y: f32, w: f32, h: f32, radius: f32, color: Rgb) {
        self.fill(&Shape::RoundedRect { x, y, w, h, radius }, color);
    }

    /// Fill a circle
    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Rgb) {
        self.fill(&Shape::Circle { cx, cy, r }, color);
    }
}

/// Anti-aliased software surface backed by a tiny-skia pixmap
pub struct PixmapSurface {
    pixmap: Pixmap,
    clip: Option<Mask>,
}

impl PixmapSurface {
    /// Allocate a transparent surface
    pub fn new(width: u32, height: u32) -> Result<Self, StyleError> {
        let pixmap = Pixmap::new(width, height).ok_or(StyleError::Surface { width, height })?;
        Ok(Self { pixmap, clip: None })
    }

    /// Un-premultiplied RGBA copy of the surface
    pub fn to_image(&self) -> Result<RgbaImage, StyleError> {
        let data: Vec<u8> = self
            .pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        RgbaImage::from_raw(self.width(), self.height(), data)
            .ok_or_else(|| StyleError::Encode("pixel buffer size mismatch".into()))
    }
}

fn paint_for(color: Rgb) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, 255);
    paint.anti_alias = true;
    paint
}

impl Surface for PixmapSurface {
    fn width(&self) -> u32 {
        self.pixmap.width()
    }

    fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn clear(&mut self, color: Rgb) {
        self.pixmap
            .fill(Color::from_rgba8(color.r, color.g, color.b, 255));
    }

    fn fill(&mut self, shape: &Shape, color: Rgb) {
        let Some(path) = shape.to_path() else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &paint_for(color),
            FillRule::Winding,
            Transform::identity(),
            self.clip.as_ref(),
        );
    }

    fn stroke(&mut self, shape: &Shape, color: Rgb, width: f32) {
        let Some(path) = shape.to_path() else {
            return;
        };
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &paint_for(color),
            &stroke,
            Transform::identity(),
            self.clip.as_ref(),
        );
    }

    fn clip_to_circle(&mut self, cx: f32, cy: f32, r: f32) -> Result<(), StyleError> {
        let (width, height) = (self.width(), self.height());
        let mut mask = Mask::new(width, height).ok_or(StyleError::Surface { width, height })?;
        if let Some(path) = circle_path(cx, cy, r) {
            mask.fill_path(&path, FillRule::Winding, true, Transform::identity());
        }
        self.clip = Some(mask);
        Ok(())
    }

    fn reset_clip(&mut self) {
        self.clip = None;
    }
}
