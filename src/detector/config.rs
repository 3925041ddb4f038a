use crate::utils::luminance::DARK_THRESHOLD;

/// Tunable constants for module-size and eye detection
///
/// The defaults match black-on-white renders from the upstream bitmap
/// service. The eye acceptance band in particular was picked empirically and
/// may need retuning for other render sources.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionConfig {
    /// R + G + B below this is dark
    pub dark_threshold: u32,
    /// Fallback module size is `width / fallback_divisor` when the scanline is degenerate
    pub fallback_divisor: u32,
    /// Fewer transitions than this on the scanline triggers the fallback
    pub min_transitions: usize,
    /// At most this many transitions feed the average
    pub max_transitions: usize,
    /// Eye windows are accepted when the dark fraction is strictly above this
    pub min_eye_dark_ratio: f32,
    /// ...and strictly below this
    pub max_eye_dark_ratio: f32,
    /// Distance in modules from each corner to the near edge of its eye window
    pub eye_margin_modules: u32,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            dark_threshold: DARK_THRESHOLD,
            fallback_divisor: 25,
            min_transitions: 4,
            max_transitions: 20,
            min_eye_dark_ratio: 0.5,
            max_eye_dark_ratio: 0.8,
            eye_margin_modules: 7,
        }
    }
}
