use std::ops::RangeInclusive;

use crate::display_core::common::error::{Result, ViewerError};

/// Affine map between an integer slider domain and a continuous domain:
/// `value = offset + scale * position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderValueMapper {
    slider_min: i32,
    slider_max: i32,
    scale: f64,
    offset: f64,
}

impl SliderValueMapper {
    /// Spreads `[data_min, data_max]` over the slider so that `slider_min`
    /// maps to `data_min`, with
    /// `scale = (data_max - data_min + 1) / (slider_max - slider_min + 1)`.
    pub fn for_data_domain(data_min: f64, data_max: f64, slider: RangeInclusive<i32>) -> Result<Self> {
        let (slider_min, slider_max) = Self::check_slider(&slider)?;
        let slider_range = f64::from(slider_max) - f64::from(slider_min) + 1.0;
        let scale = (data_max - data_min + 1.0) / slider_range;
        Self::build(slider_min, slider_max, scale, data_min)
    }

    /// Fixed `step` per slider unit, `value_at_min` at the first position.
    /// Used for gamma, limb and white-balance controls.
    pub fn linear(value_at_min: f64, step: f64, slider: RangeInclusive<i32>) -> Result<Self> {
        let (slider_min, slider_max) = Self::check_slider(&slider)?;
        Self::build(slider_min, slider_max, step, value_at_min)
    }

    /// Recomputes the map for a new continuous domain, e.g. when another
    /// series is attached.
    pub fn rebind(&mut self, data_min: f64, data_max: f64, slider: RangeInclusive<i32>) -> Result<()> {
        *self = Self::for_data_domain(data_min, data_max, slider)?;
        Ok(())
    }

    fn check_slider(slider: &RangeInclusive<i32>) -> Result<(i32, i32)> {
        let (min, max) = (*slider.start(), *slider.end());
        if max < min {
            return Err(ViewerError::InvalidParameterError(format!(
                "empty slider domain {}..={}",
                min, max
            )));
        }
        Ok((min, max))
    }

    fn build(slider_min: i32, slider_max: i32, scale: f64, value_at_min: f64) -> Result<Self> {
        if !scale.is_finite() || scale == 0.0 || !value_at_min.is_finite() {
            return Err(ViewerError::InvalidParameterError(format!(
                "slider scale {} from origin {} is not usable",
                scale, value_at_min
            )));
        }
        Ok(Self {
            slider_min,
            slider_max,
            scale,
            offset: value_at_min - scale * f64::from(slider_min),
        })
    }

    pub fn to_continuous(&self, position: i32) -> f64 {
        self.offset + self.scale * f64::from(position)
    }

    /// Nearest slider position for `value`.
    ///
    /// Not clamped to the slider domain: out-of-range positions are returned
    /// as they are and the control is left to ignore or saturate them.
    pub fn to_slider(&self, value: f64) -> i32 {
        ((value - self.offset) / self.scale).round() as i32
    }

    pub fn contains(&self, position: i32) -> bool {
        (self.slider_min..=self.slider_max).contains(&position)
    }

    pub fn slider_min(&self) -> i32 {
        self.slider_min
    }

    pub fn slider_max(&self) -> i32 {
        self.slider_max
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }
}
