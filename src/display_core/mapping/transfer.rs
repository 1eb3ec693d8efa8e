use crate::display_core::common::error::{Result, ViewerError};

/// Which of the two transfer contexts an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingContext {
    Main,
    Limb,
}

/// Linear+gamma transfer: `y = (alpha * x + beta) ^ gamma` on the render side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferContext {
    current_min: f64,
    current_max: f64,
    gamma: f64,
    alpha: f64,
    beta: f64,
}

impl TransferContext {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        let mut context = Self {
            current_min: 0.0,
            current_max: 1.0,
            gamma: 1.0,
            alpha: 1.0,
            beta: 0.0,
        };
        context.set_range(min, max)?;
        Ok(context)
    }

    /// Maps `[min, max]` onto `[0, 1]`. A zero-width or non-finite range is
    /// rejected and the previous range is kept.
    pub fn set_range(&mut self, min: f64, max: f64) -> Result<()> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ViewerError::InvalidParameterError(format!(
                "range bounds must be finite, got [{}, {}]",
                min, max
            )));
        }
        if min == max {
            return Err(ViewerError::DegenerateRangeError { min, max });
        }

        let width = max - min;
        self.current_min = min;
        self.current_max = max;
        self.alpha = 1.0 / width;
        self.beta = -min / width;
        Ok(())
    }

    /// Stored verbatim; the renderer uses it as the shader exponent.
    pub fn set_gamma(&mut self, gamma: f64) {
        self.gamma = gamma;
    }

    pub fn current_min(&self) -> f64 {
        self.current_min
    }

    pub fn current_max(&self) -> f64 {
        self.current_max
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Normalized intensity of `value` before gamma, unclamped.
    pub fn normalize(&self, value: f64) -> f64 {
        self.alpha * value + self.beta
    }
}
