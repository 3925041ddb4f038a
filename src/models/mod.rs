pub mod color;
pub mod eye;
pub mod point;
pub mod style;

pub use color::Rgb;
pub use eye::EyePattern;
pub use point::Point;
pub use style::{BodyShape, EyeShape, OuterBorderShape, ResolvedStyle, StyleConfig};
