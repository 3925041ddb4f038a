//! Eye rendering: frame, fixed background ring, ball
use super::surface::{Shape, Surface};
use crate::models::{EyePattern, EyeShape, Rgb};

/// Corner radius of a rounded eye frame, in modules
const FRAME_RADIUS: f32 = 0.3;
/// Corner radius of a rounded eye ball, in modules
const BALL_RADIUS: f32 = 0.2;

/// Square of side `size` centered on (cx, cy), styled per `shape`
fn centered_shape(shape: EyeShape, cx: f32, cy: f32, size: f32, radius: f32) -> Shape {
    let (x, y) = (cx - size / 2.0, cy - size / 2.0);
    match shape {
        EyeShape::Square => Shape::Rect { x, y, w: size, h: size },
        EyeShape::Rounded => Shape::RoundedRect {
            x,
            y,
            w: size,
            h: size,
            radius,
        },
        EyeShape::Circle => Shape::Circle {
            cx,
            cy,
            r: size / 2.0,
        },
    }
}

/// The three nested layers of an eye, largest first
pub fn eye_layers(
    eye: &EyePattern,
    module_size: f32,
    frame: EyeShape,
    ball: EyeShape,
) -> [Shape; 3] {
    let (cx, cy) = (eye.center.x, eye.center.y);
    let outer = eye.size;
    let inner = outer - 2.0 * module_size;
    let core = inner - 2.0 * module_size;
    [
        centered_shape(frame, cx, cy, outer, module_size * FRAME_RADIUS),
        // The 5x5 light ring stays square so scanners still lock on
        centered_shape(EyeShape::Square, cx, cy, inner, 0.0),
        centered_shape(ball, cx, cy, core, module_size * BALL_RADIUS),
    ]
}

/// Draw one eye in foreground/background/foreground layers
pub fn draw_eye<S: Surface>(
    surface: &mut S,
    eye: &EyePattern,
    module_size: f32,
    frame: EyeShape,
    ball: EyeShape,
    foreground: Rgb,
    background: Rgb,
) {
    let [outer, inner, core] = eye_layers(eye, module_size, frame, ball);
    surface.fill(&outer, foreground);
    surface.fill(&inner, background);
    surface.fill(&core, foreground);
}
