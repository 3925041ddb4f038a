//! Utility functions for image analysis
//!
//! - Luminance classification (dark/light by channel sum)
//! - Hex color parsing

pub mod color;
pub mod luminance;
