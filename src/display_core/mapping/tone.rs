use std::f64::consts::PI;

use crate::display_core::common::error::{Result, ViewerError};

/// Per-channel multiplicative gains.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhiteBalance {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Default for WhiteBalance {
    fn default() -> Self {
        Self {
            red: 1.0,
            green: 1.0,
            blue: 1.0,
        }
    }
}

impl WhiteBalance {
    pub fn new(red: f64, green: f64, blue: f64) -> Result<Self> {
        for (name, gain) in [("red", red), ("green", green), ("blue", blue)] {
            if !gain.is_finite() || gain < 0.0 {
                return Err(ViewerError::InvalidParameterError(format!(
                    "{} gain must be finite and non-negative, got {}",
                    name, gain
                )));
            }
        }
        Ok(Self { red, green, blue })
    }

    pub fn gains(&self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }
}

/// Inverse-Gaussian tone curve parameters.
///
/// The curve is evaluated by the render backend; the core only validates
/// and holds the parameters, and samples the curve for plotting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneMapping {
    pub i_max: f64,
    pub lambda: f64,
    pub mu: f64,
    pub enabled: bool,
    pub use_inverse_gaussian: bool,
}

impl Default for ToneMapping {
    fn default() -> Self {
        Self {
            i_max: 5000.0,
            lambda: 100.0,
            mu: 100.0,
            enabled: false,
            use_inverse_gaussian: true,
        }
    }
}

impl ToneMapping {
    pub fn validate(i_max: f64, lambda: f64, mu: f64) -> Result<()> {
        if !i_max.is_finite() || i_max < 0.0 {
            return Err(ViewerError::InvalidParameterError(format!(
                "iMax must be finite and non-negative, got {}",
                i_max
            )));
        }
        if !lambda.is_finite() || lambda <= 0.0 {
            return Err(ViewerError::InvalidParameterError(format!(
                "lambda must be finite and positive, got {}",
                lambda
            )));
        }
        if !mu.is_finite() || mu <= 0.0 {
            return Err(ViewerError::InvalidParameterError(format!(
                "mu must be finite and positive, got {}",
                mu
            )));
        }
        Ok(())
    }

    /// `y = iMax * sqrt(lambda / (2 pi x^3)) * exp(-lambda (x - mu)^2 / (2 mu^2 x)) + x`
    ///
    /// The curve tends to `x` as `x -> 0+`, so non-positive inputs pass through.
    pub fn evaluate(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return x;
        }
        let density = (self.lambda / (2.0 * PI * x.powi(3))).sqrt()
            * (-self.lambda * (x - self.mu).powi(2) / (2.0 * self.mu.powi(2) * x)).exp();
        self.i_max * density + x
    }

    /// Samples the curve at `x = i / samples` for `i` in `0..samples`.
    pub fn sample_curve(&self, samples: usize) -> Vec<(f64, f64)> {
        (0..samples)
            .map(|i| {
                let x = i as f64 / samples as f64;
                (x, self.evaluate(x))
            })
            .collect()
    }
}
