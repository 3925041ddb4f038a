//! QR structure inference from pixel data
//!
//! This module recovers the geometry the renderer needs from a rendered
//! black-on-white bitmap:
//! - Module size (from one horizontal scanline)
//! - Eye locations (three fixed corner windows, dark-ratio test)

/// Tunable detection constants
pub mod config;
/// Eye (position-detection pattern) locator
pub mod eye;
/// Module-size estimation from a scanline
pub mod module_size;

pub use config::DetectionConfig;
pub use eye::{Corner, locate_eyes};
pub use module_size::detect_module_size;
