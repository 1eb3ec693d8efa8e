//! Viewer configuration types

use std::ops::RangeInclusive;

/// Control domains and defaults for a display session
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Integer domain of the main high/low sliders
    pub data_slider: RangeInclusive<i32>,
    /// Integer domain of the limb high/low sliders
    pub limb_slider: RangeInclusive<i32>,
    /// Gamma at the first slider position
    pub gamma_min: f64,
    /// Gamma increment per slider unit
    pub gamma_step: f64,
    pub gamma_slider: RangeInclusive<i32>,
    /// White-balance gain per slider unit
    pub white_balance_step: f64,
    pub white_balance_slider: RangeInclusive<i32>,
    /// Maximum position of the iMax, lambda and mu sliders
    pub tone_slider_max: [i32; 3],
    /// Frames per second when playback starts
    pub playback_fps: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            data_slider: 0..=65535,
            limb_slider: 1..=65536,
            gamma_min: 0.1,
            gamma_step: 0.1,
            gamma_slider: 1..=100,
            white_balance_step: 0.01,
            white_balance_slider: 0..=300,
            tone_slider_max: [10000; 3],
            playback_fps: 10,
        }
    }
}

impl ViewerConfig {
    pub fn builder() -> ViewerConfigBuilder {
        ViewerConfigBuilder::default()
    }
}

/// Builder for ViewerConfig
#[derive(Default)]
pub struct ViewerConfigBuilder {
    data_slider: Option<RangeInclusive<i32>>,
    limb_slider: Option<RangeInclusive<i32>>,
    gamma_min: Option<f64>,
    gamma_step: Option<f64>,
    gamma_slider: Option<RangeInclusive<i32>>,
    white_balance_step: Option<f64>,
    white_balance_slider: Option<RangeInclusive<i32>>,
    tone_slider_max: Option<[i32; 3]>,
    playback_fps: Option<u32>,
}

impl ViewerConfigBuilder {
    pub fn data_slider(mut self, range: RangeInclusive<i32>) -> Self {
        self.data_slider = Some(range);
        self
    }

    pub fn limb_slider(mut self, range: RangeInclusive<i32>) -> Self {
        self.limb_slider = Some(range);
        self
    }

    pub fn gamma_min(mut self, gamma_min: f64) -> Self {
        self.gamma_min = Some(gamma_min);
        self
    }

    pub fn gamma_step(mut self, step: f64) -> Self {
        self.gamma_step = Some(step);
        self
    }

    pub fn gamma_slider(mut self, range: RangeInclusive<i32>) -> Self {
        self.gamma_slider = Some(range);
        self
    }

    pub fn white_balance_step(mut self, step: f64) -> Self {
        self.white_balance_step = Some(step);
        self
    }

    pub fn white_balance_slider(mut self, range: RangeInclusive<i32>) -> Self {
        self.white_balance_slider = Some(range);
        self
    }

    pub fn tone_slider_max(mut self, max: [i32; 3]) -> Self {
        self.tone_slider_max = Some(max);
        self
    }

    pub fn playback_fps(mut self, fps: u32) -> Self {
        self.playback_fps = Some(fps);
        self
    }

    pub fn build(self) -> ViewerConfig {
        let default = ViewerConfig::default();
        ViewerConfig {
            data_slider: self.data_slider.unwrap_or(default.data_slider),
            limb_slider: self.limb_slider.unwrap_or(default.limb_slider),
            gamma_min: self.gamma_min.unwrap_or(default.gamma_min),
            gamma_step: self.gamma_step.unwrap_or(default.gamma_step),
            gamma_slider: self.gamma_slider.unwrap_or(default.gamma_slider),
            white_balance_step: self.white_balance_step.unwrap_or(default.white_balance_step),
            white_balance_slider: self.white_balance_slider.unwrap_or(default.white_balance_slider),
            tone_slider_max: self.tone_slider_max.unwrap_or(default.tone_slider_max),
            playback_fps: self.playback_fps.unwrap_or(default.playback_fps),
        }
    }
}
