use super::Point;

/// A detected position-detection pattern ("eye")
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyePattern {
    /// Center of the 7x7-module pattern in pixels
    pub center: Point,
    /// Full side length in pixels (7 modules)
    pub size: f32,
}

impl EyePattern {
    /// Create an eye from its center and side length
    pub fn new(x: f32, y: f32, size: f32) -> Self {
        Self {
            center: Point::new(x, y),
            size,
        }
    }

    /// Whether a pixel coordinate lies inside the eye's bounding box.
    ///
    /// Bounds are `center ± size / 2` on both axes, inclusive.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        let half = self.size / 2.0;
        x >= self.center.x - half
            && x <= self.center.x + half
            && y >= self.center.y - half
            && y <= self.center.y + half
    }
}
