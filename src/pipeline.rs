use std::io::Cursor;
use std::time::Instant;

use image::{DynamicImage, ImageFormat, RgbaImage};
use tracing::debug;

use crate::detector::{DetectionConfig, detect_module_size, locate_eyes};
use crate::error::StyleError;
use crate::models::{EyePattern, ResolvedStyle};
use crate::render::{PixmapSurface, RenderStats, render};

/// Structure inferred from a rendered QR bitmap
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Pixel width of one module, at least 1
    pub module_size: u32,
    /// Detected eyes, 0 to 3
    pub eyes: Vec<EyePattern>,
}

/// Output of a restyle together with what was inferred and drawn
#[derive(Debug, Clone)]
pub struct Restyled {
    /// The re-drawn image, same dimensions as the input
    pub image: RgbaImage,
    /// Inferred structure
    pub analysis: Analysis,
    /// Draw counts
    pub stats: RenderStats,
}

/// Infer module size and eye positions from pixel data alone
pub fn analyze(img: &RgbaImage, config: &DetectionConfig) -> Analysis {
    let module_size = detect_module_size(img, config);
    let eyes = locate_eyes(img, module_size, config);
    Analysis { module_size, eyes }
}

/// Decode image bytes into an RGBA pixel buffer
pub fn decode(bytes: &[u8]) -> Result<RgbaImage, StyleError> {
    Ok(image::load_from_memory(bytes)?.to_rgba8())
}

/// Encode an RGBA buffer as PNG
pub fn encode_png(img: RgbaImage) -> Result<Vec<u8>, StyleError> {
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut out, ImageFormat::Png)
        .map_err(|e| StyleError::Encode(e.to_string()))?;
    Ok(out.into_inner())
}

/// Analyse and re-draw an already decoded bitmap
pub fn run(
    img: &RgbaImage,
    style: &ResolvedStyle,
    config: &DetectionConfig,
) -> Result<Restyled, StyleError> {
    let start = Instant::now();
    let analysis = analyze(img, config);
    let analyzed = start.elapsed();

    let mut surface = PixmapSurface::new(img.width(), img.height())?;
    let stats = render(
        &mut surface,
        img,
        analysis.module_size,
        &analysis.eyes,
        style,
        config.dark_threshold,
    )?;
    let output = surface.to_image()?;

    debug!(
        width = img.width(),
        height = img.height(),
        module_size = analysis.module_size,
        eyes = analysis.eyes.len(),
        analyze_us = analyzed.as_micros() as u64,
        total_us = start.elapsed().as_micros() as u64,
        "Restyle pipeline complete"
    );
    Ok(Restyled {
        image: output,
        analysis,
        stats,
    })
}
