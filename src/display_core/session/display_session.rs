use tracing::{debug, info, instrument};

use crate::display_core::common::error::Result;
use crate::display_core::config::ViewerConfig;
use crate::display_core::mapping::{DisplayMapping, MappingContext, RenderParameters, WhiteBalance};
use crate::display_core::preview::{PreviewImage, Roi, render_preview};
use crate::display_core::sample::{Instrument, SampleBuffer, SampleData};
use crate::display_core::series::FrameSeries;
use crate::display_core::session::controls::{ColorChannel, Control, ControlIntent, ToneParameter};
use crate::display_core::slider::{SliderValueMapper, ToneSliderScales};
use crate::display_core::statistics::Statistics;

/// Control domains, rebuilt whenever a series is attached.
#[derive(Debug, Clone, Copy)]
struct Sliders {
    data: SliderValueMapper,
    limb: SliderValueMapper,
    gamma: SliderValueMapper,
    white_balance: SliderValueMapper,
    tone: ToneSliderScales,
}

impl Sliders {
    fn bind(series: &FrameSeries, config: &ViewerConfig) -> Result<Self> {
        let series_min = series.series_min()?;
        let series_max = series.series_max()?;
        let first = series.first()?;

        // DSLR integer data keeps raw sensor units on the limb controls.
        let limb_base = if first.instrument() == Instrument::Dslr && !first.representation().is_float() {
            0.0
        } else {
            series_min
        };

        Ok(Self {
            data: SliderValueMapper::for_data_domain(series_min, series_max, config.data_slider.clone())?,
            limb: SliderValueMapper::linear(limb_base, 1.0, config.limb_slider.clone())?,
            gamma: SliderValueMapper::linear(config.gamma_min, config.gamma_step, config.gamma_slider.clone())?,
            white_balance: SliderValueMapper::linear(0.0, config.white_balance_step, config.white_balance_slider.clone())?,
            tone: ToneSliderScales::for_representation(first.representation(), config.tone_slider_max)?,
        })
    }
}

/// The display context of one frame series.
#[derive(Debug)]
pub struct DisplaySession {
    config: ViewerConfig,
    series: FrameSeries,
    mapping: DisplayMapping,
    sliders: Sliders,
    display_only_first: bool,
}

impl DisplaySession {
    /// Attaches a non-empty series: builds its initial mapping and binds the
    /// slider domains to its series-wide bounds.
    #[instrument(skip_all, fields(frames = series.len()))]
    pub fn new(series: FrameSeries, config: ViewerConfig) -> Result<Self> {
        let mapping = DisplayMapping::for_series(&series)?;
        let sliders = Sliders::bind(&series, &config)?;
        info!(
            series_min = series.series_min()?,
            series_max = series.series_max()?,
            "Series attached"
        );
        Ok(Self {
            config,
            series,
            mapping,
            sliders,
            display_only_first: false,
        })
    }

    /// Replaces the series, rebuilding mapping and slider domains.
    pub fn attach(&mut self, series: FrameSeries) -> Result<()> {
        let mapping = DisplayMapping::for_series(&series)?;
        let sliders = Sliders::bind(&series, &self.config)?;
        self.series = series;
        self.mapping = mapping;
        self.sliders = sliders;
        Ok(())
    }

    /// Rewrites one frame's samples (normalisation, stretching) and rebinds
    /// the slider domains to the new series bounds.
    pub fn replace_frame_samples(&mut self, index: usize, samples: SampleData) -> Result<()> {
        self.series.replace_samples(index, samples)?;
        self.sliders = Sliders::bind(&self.series, &self.config)?;
        Ok(())
    }

    pub fn series(&self) -> &FrameSeries {
        &self.series
    }

    pub fn mapping(&self) -> &DisplayMapping {
        &self.mapping
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Slider map of `control`, for range and readout formatting.
    pub fn slider(&self, control: Control) -> SliderValueMapper {
        match control {
            Control::MainHigh | Control::MainLow => self.sliders.data,
            Control::LimbHigh | Control::LimbLow => self.sliders.limb,
            Control::MainGamma | Control::LimbGamma => self.sliders.gamma,
            Control::WhiteBalance(_) => self.sliders.white_balance,
            Control::ToneMapping(ToneParameter::IMax) => self.sliders.tone.i_max,
            Control::ToneMapping(ToneParameter::Lambda) => self.sliders.tone.lambda,
            Control::ToneMapping(ToneParameter::Mu) => self.sliders.tone.mu,
        }
    }

    /// Applies a control move and returns the continuous value for its readout.
    ///
    /// A move that would collapse a range to zero width is rejected with
    /// `DegenerateRangeError` and leaves the mapping unchanged.
    pub fn apply(&mut self, intent: ControlIntent) -> Result<f64> {
        let value = self.slider(intent.control).to_continuous(intent.position);
        debug!(control = ?intent.control, position = intent.position, value, "Applying intent");
        self.set_value(intent.control, value)?;
        Ok(value)
    }

    /// Applies a value typed into a readout: snaps it to the nearest slider
    /// position, applies that position and returns it.
    pub fn apply_readout(&mut self, control: Control, value: f64) -> Result<i32> {
        let position = self.slider(control).to_slider(value);
        self.apply(ControlIntent::new(control, position))?;
        Ok(position)
    }

    fn set_value(&mut self, control: Control, value: f64) -> Result<()> {
        match control {
            Control::MainHigh => self.mapping.set_max(MappingContext::Main, value),
            Control::MainLow => self.mapping.set_min(MappingContext::Main, value),
            Control::LimbHigh => self.mapping.set_max(MappingContext::Limb, value),
            Control::LimbLow => self.mapping.set_min(MappingContext::Limb, value),
            Control::MainGamma => {
                self.mapping.set_gamma(MappingContext::Main, value);
                Ok(())
            }
            Control::LimbGamma => {
                self.mapping.set_gamma(MappingContext::Limb, value);
                Ok(())
            }
            Control::WhiteBalance(channel) => {
                let WhiteBalance { red, green, blue } = self.mapping.white_balance();
                match channel {
                    ColorChannel::Red => self.mapping.apply_white_balance(value, green, blue),
                    ColorChannel::Green => self.mapping.apply_white_balance(red, value, blue),
                    ColorChannel::Blue => self.mapping.apply_white_balance(red, green, value),
                }
            }
            Control::ToneMapping(parameter) => {
                let tone = self.mapping.tone_mapping();
                let (i_max, lambda, mu) = match parameter {
                    ToneParameter::IMax => (value, tone.lambda, tone.mu),
                    ToneParameter::Lambda => (tone.i_max, value, tone.mu),
                    ToneParameter::Mu => (tone.i_max, tone.lambda, value),
                };
                self.mapping.apply_tone_curve(i_max, lambda, mu, tone.enabled)
            }
        }
    }

    /// Slider position matching the current mapping value of `control`.
    /// Unclamped, like `SliderValueMapper::to_slider`.
    pub fn position(&self, control: Control) -> i32 {
        let value = match control {
            Control::MainHigh => self.mapping.context(MappingContext::Main).current_max(),
            Control::MainLow => self.mapping.context(MappingContext::Main).current_min(),
            Control::MainGamma => self.mapping.context(MappingContext::Main).gamma(),
            Control::LimbHigh => self.mapping.context(MappingContext::Limb).current_max(),
            Control::LimbLow => self.mapping.context(MappingContext::Limb).current_min(),
            Control::LimbGamma => self.mapping.context(MappingContext::Limb).gamma(),
            Control::WhiteBalance(ColorChannel::Red) => self.mapping.white_balance().red,
            Control::WhiteBalance(ColorChannel::Green) => self.mapping.white_balance().green,
            Control::WhiteBalance(ColorChannel::Blue) => self.mapping.white_balance().blue,
            Control::ToneMapping(ToneParameter::IMax) => self.mapping.tone_mapping().i_max,
            Control::ToneMapping(ToneParameter::Lambda) => self.mapping.tone_mapping().lambda,
            Control::ToneMapping(ToneParameter::Mu) => self.mapping.tone_mapping().mu,
        };
        self.slider(control).to_slider(value)
    }

    /// Auto-scales both contexts from frame 0.
    pub fn auto_scale(&mut self) -> Result<()> {
        self.mapping.auto_scale(&self.series, MappingContext::Main)?;
        self.mapping.auto_scale(&self.series, MappingContext::Limb)
    }

    /// Scales both contexts to the displayed frame's extrema.
    pub fn min_max_scale(&mut self) -> Result<()> {
        let frame = displayed(&self.series, self.display_only_first)?;
        self.mapping.min_max_scale(frame)
    }

    /// Scales both contexts to the displayed frame's nominal bounds.
    pub fn range_scale(&mut self) -> Result<()> {
        let frame = displayed(&self.series, self.display_only_first)?;
        self.mapping.range_scale(frame)
    }

    pub fn set_current_frame(&mut self, index: usize) -> Result<()> {
        self.series.set_current_frame(index)
    }

    pub fn advance(&mut self) -> Result<usize> {
        self.series.advance()
    }

    pub fn retreat(&mut self) -> Result<usize> {
        self.series.retreat()
    }

    /// Freezes the display on frame 0 while navigation keeps moving the cursor.
    pub fn set_display_only_first(&mut self, enabled: bool) {
        self.display_only_first = enabled;
    }

    pub fn displayed_frame(&self) -> Result<&SampleBuffer> {
        displayed(&self.series, self.display_only_first)
    }

    pub fn displayed_statistics(&self) -> Result<&Statistics> {
        self.displayed_frame().map(SampleBuffer::statistics)
    }

    pub fn set_scale_limb(&mut self, enabled: bool) {
        self.mapping.set_scale_limb(enabled);
    }

    pub fn set_limb_radius(&mut self, radius: f64) -> Result<()> {
        self.mapping.set_limb_radius(radius)
    }

    pub fn set_tone_mapping_enabled(&mut self, enabled: bool) -> Result<()> {
        let tone = self.mapping.tone_mapping();
        self.mapping.apply_tone_curve(tone.i_max, tone.lambda, tone.mu, enabled)
    }

    pub fn set_inverse_gaussian(&mut self, enabled: bool) {
        self.mapping.set_inverse_gaussian(enabled);
    }

    /// Draw parameters for the displayed frame.
    pub fn render_parameters(&self) -> Result<RenderParameters> {
        let frame = self.displayed_frame()?;
        Ok(self.mapping.render_parameters(frame.width(), frame.height()))
    }

    /// 8-bit preview of the displayed frame, or of a region of it.
    pub fn preview(&self, roi: Option<Roi>) -> Result<PreviewImage> {
        render_preview(self.displayed_frame()?, &self.mapping, roi)
    }
}

fn displayed(series: &FrameSeries, only_first: bool) -> Result<&SampleBuffer> {
    if only_first {
        series.first()
    } else {
        series.current()
    }
}
