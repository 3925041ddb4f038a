//! Outer border and circular clip geometry
use super::surface::Shape;
use crate::models::OuterBorderShape;

/// Border stroke width and inset, as a fraction of the shorter side
const PADDING_RATIO: f32 = 0.03;
/// Rounded border corner radius, as a fraction of the shorter side
const ROUNDED_RATIO: f32 = 0.08;

/// Stroke width (equal to the inset) for an image of this size
pub fn border_padding(width: u32, height: u32) -> f32 {
    width.min(height) as f32 * PADDING_RATIO
}

/// Circle used to clip body and eyes when the border is circular
pub fn clip_circle(width: u32, height: u32) -> (f32, f32, f32) {
    (
        width as f32 / 2.0,
        height as f32 / 2.0,
        width.min(height) as f32 / 2.0,
    )
}

/// Outline to stroke for the border, `None` when there is no border
pub fn border_shape(border: OuterBorderShape, width: u32, height: u32) -> Option<Shape> {
    let (w, h) = (width as f32, height as f32);
    let min_side = width.min(height) as f32;
    let p = border_padding(width, height);

    match border {
        OuterBorderShape::None => None,
        OuterBorderShape::Square => Some(Shape::Rect {
            x: p,
            y: p,
            w: w - 2.0 * p,
            h: h - 2.0 * p,
        }),
        OuterBorderShape::Rounded => Some(Shape::RoundedRect {
            x: p,
            y: p,
            w: w - 2.0 * p,
            h: h - 2.0 * p,
            radius: min_side * ROUNDED_RATIO,
        }),
        OuterBorderShape::Circle => Some(Shape::Circle {
            cx: w / 2.0,
            cy: h / 2.0,
            r: min_side / 2.0 - p,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_uses_shorter_side() {
        assert!((border_padding(250, 250) - 7.5).abs() < 1e-4);
        assert!((border_padding(400, 100) - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_circle_border() {
        let Some(Shape::Circle { cx, cy, r }) = border_shape(OuterBorderShape::Circle, 250, 250) else {
            panic!("circle border must be a circle");
        };
        assert_eq!((cx, cy), (125.0, 125.0));
        assert!((r - 117.5).abs() < 1e-4);
    }

    #[test]
    fn test_rounded_border() {
        let Some(Shape::RoundedRect { x, y, w, h, radius }) =
            border_shape(OuterBorderShape::Rounded, 200, 100)
        else {
            panic!("rounded border must be a rounded rect");
        };
        for (got, want) in [(x, 3.0), (y, 3.0), (w, 194.0), (h, 94.0), (radius, 8.0)] {
            assert!((got - want).abs() < 1e-4, "{got} != {want}");
        }
    }

    #[test]
    fn test_no_border() {
        assert!(border_shape(OuterBorderShape::None, 100, 100).is_none());
    }
}
