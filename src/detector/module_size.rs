/// Module-size estimation from a single horizontal scanline
use image::RgbaImage;
use tracing::{debug, trace};

use super::config::DetectionConfig;
use crate::utils::luminance::classify_row;

/// Estimate the pixel width of one QR module.
///
/// Samples the row at `height / 2`, records every dark/light transition and
/// averages the gaps between the first `max_transitions` of them. A row with
/// too few transitions falls back to `width / fallback_divisor`. The result
/// is always at least 1.
pub fn detect_module_size(img: &RgbaImage, config: &DetectionConfig) -> u32 {
    let (width, height) = img.dimensions();
    let row = classify_row(img, height / 2, config.dark_threshold);
    let transitions = find_transitions(&row);

    if transitions.len() < config.min_transitions.max(2) {
        let fallback = fallback_module_size(width, config);
        debug!(
            transitions = transitions.len(),
            fallback, "Scanline degenerate, using fallback module size"
        );
        return fallback;
    }

    let used = &transitions[..transitions.len().min(config.max_transitions)];
    let gaps: Vec<u32> = used.windows(2).map(|w| w[1] - w[0]).collect();
    let average = gaps.iter().sum::<u32>() as f32 / gaps.len() as f32;
    trace!(?gaps, average, "Scanline transition gaps");

    let module_size = (average.floor() as u32).max(1);
    debug!(module_size, transitions = transitions.len(), "Detected module size");
    module_size
}

/// x-coordinates where the classification changes from the previous pixel
pub fn find_transitions(row: &[bool]) -> Vec<u32> {
    row.windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0] != pair[1])
        .map(|(i, _)| i as u32 + 1)
        .collect()
}

fn fallback_module_size(width: u32, config: &DetectionConfig) -> u32 {
    (width / config.fallback_divisor.max(1)).max(1)
}
