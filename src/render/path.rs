//! Path construction for the shapes the renderer draws.

use tiny_skia::{Path, PathBuilder, Rect};

/// Cubic Bézier handle length for a quarter circle of radius 1
const KAPPA: f32 = 0.552_284_8;

/// Axis-aligned rectangle; `None` when the size is degenerate
pub fn rect_path(x: f32, y: f32, w: f32, h: f32) -> Option<Path> {
    Rect::from_xywh(x, y, w, h).map(PathBuilder::from_rect)
}

/// Circle centered at (cx, cy); `None` when the radius is not positive
pub fn circle_path(cx: f32, cy: f32, r: f32) -> Option<Path> {
    if r <= 0.0 {
        return None;
    }
    PathBuilder::from_circle(cx, cy, r)
}

/// Rectangle with four quarter-circle corners.
///
/// The radius is clamped to half the shorter side. A zero radius degrades to
/// a plain rectangle.
pub fn rounded_rect_path(x: f32, y: f32, w: f32, h: f32, radius: f32) -> Option<Path> {
    if w <= 0.0 || h <= 0.0 {
        return None;
    }
    let r = radius.max(0.0).min(w / 2.0).min(h / 2.0);
    if r <= 0.0 {
        return rect_path(x, y, w, h);
    }
    let k = r * KAPPA;
    let (right, bottom) = (x + w, y + h);

    let mut pb = PathBuilder::new();
    pb.move_to(x + r, y);
    pb.line_to(right - r, y);
    pb.cubic_to(right - r + k, y, right, y + r - k, right, y + r);
    pb.line_to(right, bottom - r);
    pb.cubic_to(right, bottom - r + k, right - r + k, bottom, right - r, bottom);
    pb.line_to(x + r, bottom);
    pb.cubic_to(x + r - k, bottom, x, bottom - r + k, x, bottom - r);
    pb.line_to(x, y + r);
    pb.cubic_to(x, y + r - k, x + r - k, y, x + r, y);
    pb.close();
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_sizes() {
        assert!(rect_path(0.0, 0.0, 0.0, 5.0).is_none());
        assert!(circle_path(5.0, 5.0, 0.0).is_none());
        assert!(rounded_rect_path(0.0, 0.0, 10.0, -1.0, 2.0).is_none());
    }

    #[test]
    fn test_rounded_rect_bounds_match_rect() {
        let path = rounded_rect_path(10.0, 20.0, 30.0, 40.0, 6.0).unwrap();
        let b = path.bounds();
        assert!((b.left() - 10.0).abs() < 1e-3);
        assert!((b.top() - 20.0).abs() < 1e-3);
        assert!((b.right() - 40.0).abs() < 1e-3);
        assert!((b.bottom() - 60.0).abs() < 1e-3);
    }

    #[test]
    fn test_zero_radius_is_plain_rect() {
        let rounded = rounded_rect_path(1.0, 2.0, 3.0, 4.0, 0.0).unwrap();
        let plain = rect_path(1.0, 2.0, 3.0, 4.0).unwrap();
        assert_eq!(rounded.bounds(), plain.bounds());
        assert_eq!(rounded.len(), plain.len());
    }
}
