//! RustQR Style - re-shape rendered QR code bitmaps
//!
//! Takes a black-on-white QR bitmap produced elsewhere and re-draws it with
//! custom module shapes, eye shapes and an optional outer border. The module
//! grid and eye locations are inferred from the pixels alone; nothing here
//! encodes or decodes QR data.
//!
//! ```
//! use rust_qr_style::{BodyShape, StyleConfig, restyle_image, tools::synthetic_code};
//!
//! let code = synthetic_code(8);
//! let style = StyleConfig {
//!     body_shape: BodyShape::Dots,
//!     ..StyleConfig::default()
//! };
//! let styled = restyle_image(&code, &style).unwrap();
//! assert_eq!(styled.dimensions(), code.dimensions());
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Structure inference (module size, eyes)
pub mod detector;
/// Error types
pub mod error;
/// Core data structures (style, eyes, colors)
pub mod models;
/// Decode → analyse → render → encode stages
pub mod pipeline;
/// Styled re-drawing on a 2D surface
pub mod render;
/// Loading and fixture helpers
pub mod tools;
/// Utility functions (luminance, color parsing)
pub mod utils;

pub use detector::DetectionConfig;
pub use error::{ErrorKind, StyleError};
pub use models::{BodyShape, EyePattern, EyeShape, OuterBorderShape, Point, ResolvedStyle, Rgb, StyleConfig};
pub use pipeline::{Analysis, Restyled, analyze};

use image::RgbaImage;
use rayon::prelude::*;
use tracing::debug;

use pipeline::{decode, encode_png, run};

/// Restyle encoded image bytes, returning PNG bytes
///
/// # Arguments
/// * `bytes` - Any image format the `image` crate can decode
/// * `style` - Style configuration; invalid colors and shapes fall back to defaults
///
/// # Errors
/// [`ErrorKind::InputAcquisition`] if the bytes cannot be decoded,
/// [`ErrorKind::Rendering`] if no surface can be allocated or the result
/// cannot be encoded.
pub fn restyle(bytes: &[u8], style: &StyleConfig) -> Result<Vec<u8>, StyleError> {
    Styler::new().restyle(bytes, style)
}

/// Restyle an already decoded RGBA image
pub fn restyle_image(img: &RgbaImage, style: &StyleConfig) -> Result<RgbaImage, StyleError> {
    Styler::new().restyle_image(img, style)
}

/// Restyler with configurable detection constants
///
/// Holds no per-call state; one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Styler {
    config: DetectionConfig,
}

impl Styler {
    /// Create a styler with default detection constants
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a styler with custom detection constants
    pub fn with_config(config: DetectionConfig) -> Self {
        Self { config }
    }

    /// Detection constants in use
    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Infer module size and eyes without drawing
    pub fn analyze(&self, img: &RgbaImage) -> Analysis {
        analyze(img, &self.config)
    }

    /// Restyle and report what was inferred and drawn
    pub fn restyle_detailed(
        &self,
        img: &RgbaImage,
        style: &StyleConfig,
    ) -> Result<Restyled, StyleError> {
        run(img, &style.resolve(), &self.config)
    }

    /// Restyle an already decoded RGBA image
    pub fn restyle_image(
        &self,
        img: &RgbaImage,
        style: &StyleConfig,
    ) -> Result<RgbaImage, StyleError> {
        self.restyle_detailed(img, style).map(|r| r.image)
    }

    /// Decode, restyle and PNG-encode
    pub fn restyle(&self, bytes: &[u8], style: &StyleConfig) -> Result<Vec<u8>, StyleError> {
        let img = decode(bytes)?;
        debug!(width = img.width(), height = img.height(), "Decoded source image");
        encode_png(self.restyle_image(&img, style)?)
    }

    /// Restyle many independent inputs in parallel
    ///
    /// Results keep the input order; each entry fails or succeeds on its own.
    pub fn restyle_batch<B: AsRef<[u8]> + Sync>(
        &self,
        inputs: &[B],
        style: &StyleConfig,
    ) -> Vec<Result<Vec<u8>, StyleError>> {
        inputs
            .par_iter()
            .map(|bytes| self.restyle(bytes.as_ref(), style))
            .collect()
    }
}

/// Fetch an image over HTTP(S) and restyle it
///
/// The download is the only suspension point; the transform itself runs
/// synchronously afterwards. No retries and no timeout are applied here.
#[cfg(feature = "fetch")]
pub async fn fetch_and_restyle(url: &str, style: &StyleConfig) -> Result<Vec<u8>, StyleError> {
    let bytes = fetch(url).await?;
    Styler::new().restyle(&bytes, style)
}

/// Download raw image bytes
#[cfg(feature = "fetch")]
pub async fn fetch(url: &str) -> Result<Vec<u8>, StyleError> {
    let response = reqwest::get(url)
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| StyleError::Fetch(e.to_string()))?;
    let bytes = response
        .bytes()
        .await
        .map_err(|e| StyleError::Fetch(e.to_string()))?;
    debug!(url, len = bytes.len(), "Fetched source image");
    Ok(bytes.to_vec())
}
