use tracing::{debug, info, warn};

use crate::display_core::common::error::{Result, ViewerError};
use crate::display_core::mapping::tone::{ToneMapping, WhiteBalance};
use crate::display_core::mapping::transfer::{MappingContext, TransferContext};
use crate::display_core::sample::{Instrument, Representation, SampleBuffer};
use crate::display_core::series::FrameSeries;

/// Display parameters of one frame series.
///
/// Created when a series is first displayed. Ranges are only re-derived from
/// statistics on an explicit scaling request.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayMapping {
    main: TransferContext,
    limb: TransferContext,
    white_balance: WhiteBalance,
    tone: ToneMapping,
    scale_limb: bool,
    /// Solar disk radius in pixels
    limb_radius: f64,
}

impl DisplayMapping {
    /// Both contexts start on `[min, max]` with unit gamma.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        let context = TransferContext::new(min, max)?;
        Ok(Self {
            main: context,
            limb: context,
            white_balance: WhiteBalance::default(),
            tone: ToneMapping::default(),
            scale_limb: false,
            limb_radius: 0.0,
        })
    }

    /// Initial mapping for a series: frame 0 extrema, widened by one unit for
    /// constant frames, and frame 0 solar radius.
    pub fn for_series(series: &FrameSeries) -> Result<Self> {
        let first = series.first()?;
        let (min, max) = first.extrema();
        let max = if min == max { min + 1.0 } else { max };

        let mut mapping = Self::new(min, max)?;
        mapping.limb_radius = first
            .metadata()
            .and_then(|m| m.solar_radius)
            .map(f64::from)
            .unwrap_or(0.0);
        Ok(mapping)
    }

    pub fn context(&self, context: MappingContext) -> &TransferContext {
        match context {
            MappingContext::Main => &self.main,
            MappingContext::Limb => &self.limb,
        }
    }

    fn context_mut(&mut self, context: MappingContext) -> &mut TransferContext {
        match context {
            MappingContext::Main => &mut self.main,
            MappingContext::Limb => &mut self.limb,
        }
    }

    pub fn set_range(&mut self, context: MappingContext, min: f64, max: f64) -> Result<()> {
        self.context_mut(context).set_range(min, max).inspect_err(|e| {
            warn!(?context, "Range update rejected: {}", e);
        })
    }

    /// Moves the lower bound, keeping the upper bound.
    pub fn set_min(&mut self, context: MappingContext, min: f64) -> Result<()> {
        let max = self.context(context).current_max();
        self.set_range(context, min, max)
    }

    /// Moves the upper bound, keeping the lower bound.
    pub fn set_max(&mut self, context: MappingContext, max: f64) -> Result<()> {
        let min = self.context(context).current_min();
        self.set_range(context, min, max)
    }

    pub fn set_gamma(&mut self, context: MappingContext, gamma: f64) {
        self.context_mut(context).set_gamma(gamma);
    }

    /// Sets the range from the histogram thresholds of frame 0, whatever frame
    /// is displayed, or to [0, 255] for 8-bit data. Resets gamma to 1.
    pub fn auto_scale(&mut self, series: &FrameSeries, context: MappingContext) -> Result<()> {
        let first = series.first()?;
        let (min, max) = match first.representation() {
            Representation::U8 => (0.0, 255.0),
            _ => {
                let stats = first.statistics();
                (stats.intensity_low, stats.intensity_high)
            }
        };

        info!(?context, min, max, "Auto-scale");
        self.set_range(context, min, max)?;
        self.set_gamma(context, 1.0);
        Ok(())
    }

    /// Sets both contexts to the extrema of `buffer`, the currently displayed
    /// frame, and resets the main gamma to 1.
    pub fn min_max_scale(&mut self, buffer: &SampleBuffer) -> Result<()> {
        let (min, max) = buffer.extrema();
        debug!(min, max, "Min/max scale");
        self.set_both(min, max)?;
        self.main.set_gamma(1.0);
        Ok(())
    }

    /// Sets both contexts to the nominal bounds of `buffer`'s representation
    /// and instrument.
    pub fn range_scale(&mut self, buffer: &SampleBuffer) -> Result<()> {
        let (min, max) = match (buffer.instrument(), buffer.representation()) {
            (Instrument::Uset, _) => (0.0, 4095.0),
            (_, Representation::F32) => buffer.extrema(),
            (_, Representation::U16) => (0.0, 65535.0),
            (_, Representation::U8) => (0.0, 255.0),
            (_, representation) => {
                return Err(ViewerError::UnsupportedRepresentationError(representation));
            }
        };
        debug!(min, max, "Range scale");
        self.set_both(min, max)
    }

    /// Updates both contexts or neither.
    fn set_both(&mut self, min: f64, max: f64) -> Result<()> {
        let mut main = self.main;
        let mut limb = self.limb;
        main.set_range(min, max)?;
        limb.set_range(min, max)?;
        self.main = main;
        self.limb = limb;
        Ok(())
    }

    pub fn apply_white_balance(&mut self, red: f64, green: f64, blue: f64) -> Result<()> {
        self.white_balance = WhiteBalance::new(red, green, blue)?;
        Ok(())
    }

    pub fn white_balance(&self) -> WhiteBalance {
        self.white_balance
    }

    /// Validates and stores the tone curve parameters. Invalid parameters
    /// leave the previous curve in place.
    pub fn apply_tone_curve(&mut self, i_max: f64, lambda: f64, mu: f64, enabled: bool) -> Result<()> {
        ToneMapping::validate(i_max, lambda, mu)?;
        self.tone.i_max = i_max;
        self.tone.lambda = lambda;
        self.tone.mu = mu;
        self.tone.enabled = enabled;
        Ok(())
    }

    pub fn set_inverse_gaussian(&mut self, use_inverse_gaussian: bool) {
        self.tone.use_inverse_gaussian = use_inverse_gaussian;
    }

    pub fn tone_mapping(&self) -> ToneMapping {
        self.tone
    }

    pub fn set_scale_limb(&mut self, scale_limb: bool) {
        self.scale_limb = scale_limb;
    }

    pub fn scale_limb(&self) -> bool {
        self.scale_limb
    }

    pub fn set_limb_radius(&mut self, radius: f64) -> Result<()> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(ViewerError::InvalidParameterError(format!(
                "limb radius must be finite and non-negative, got {}",
                radius
            )));
        }
        self.limb_radius = radius;
        Ok(())
    }

    pub fn limb_radius(&self) -> f64 {
        self.limb_radius
    }

    /// Draw parameters for a frame of `width` x `height` pixels.
    pub fn render_parameters(&self, width: usize, height: usize) -> RenderParameters {
        let normalized = |extent: usize| {
            if extent == 0 {
                0.0
            } else {
                (self.limb_radius / extent as f64) as f32
            }
        };

        RenderParameters {
            alpha: self.main.alpha() as f32,
            beta: self.main.beta() as f32,
            gamma: self.main.gamma() as f32,
            alpha_limb: self.limb.alpha() as f32,
            beta_limb: self.limb.beta() as f32,
            limb_gamma: self.limb.gamma() as f32,
            white_balance: self.white_balance.gains().map(|g| g as f32),
            tone_mapping: ToneMappingUniforms {
                i_max: self.tone.i_max as f32,
                lambda: self.tone.lambda as f32,
                mu: self.tone.mu as f32,
                enabled: self.tone.enabled,
                use_inverse_gaussian: self.tone.use_inverse_gaussian,
            },
            scale_limb: self.scale_limb,
            limb_radius: [normalized(width), normalized(height)],
        }
    }
}

/// Per-frame shader uniforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParameters {
    pub alpha: f32,
    pub beta: f32,
    pub gamma: f32,
    pub alpha_limb: f32,
    pub beta_limb: f32,
    pub limb_gamma: f32,
    /// Red, green, blue gains
    pub white_balance: [f32; 3],
    pub tone_mapping: ToneMappingUniforms,
    pub scale_limb: bool,
    /// Limb radius over frame width and height
    pub limb_radius: [f32; 2],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneMappingUniforms {
    pub i_max: f32,
    pub lambda: f32,
    pub mu: f32,
    pub enabled: bool,
    pub use_inverse_gaussian: bool,
}
