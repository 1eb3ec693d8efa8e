use crate::display_core::common::error::Result;
use crate::display_core::sample::Representation;
use crate::display_core::slider::SliderValueMapper;

/// Slider maps for the iMax, lambda and mu tone-curve parameters.
///
/// Full slider travel covers a representation-dependent span: 0.5, 5 and 1
/// for 16-bit and float data, 10000, 2000 and 255 for 8-bit data, and one
/// unit per position otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSliderScales {
    pub i_max: SliderValueMapper,
    pub lambda: SliderValueMapper,
    pub mu: SliderValueMapper,
}

impl ToneSliderScales {
    pub fn for_representation(representation: Representation, slider_max: [i32; 3]) -> Result<Self> {
        let spans = match representation {
            Representation::U16 | Representation::F32 => Some([0.5, 5.0, 1.0]),
            Representation::U8 => Some([10000.0, 2000.0, 255.0]),
            Representation::I16 => None,
        };

        let mapper = |i: usize| {
            let max = slider_max[i];
            let step = spans.map_or(1.0, |s| s[i] / f64::from(max));
            SliderValueMapper::linear(0.0, step, 0..=max)
        };

        Ok(Self {
            i_max: mapper(0)?,
            lambda: mapper(1)?,
            mu: mapper(2)?,
        })
    }

    /// (iMax, lambda, mu) for the three slider positions.
    pub fn to_parameters(&self, positions: [i32; 3]) -> (f64, f64, f64) {
        (
            self.i_max.to_continuous(positions[0]),
            self.lambda.to_continuous(positions[1]),
            self.mu.to_continuous(positions[2]),
        )
    }

    pub fn to_positions(&self, i_max: f64, lambda: f64, mu: f64) -> [i32; 3] {
        [
            self.i_max.to_slider(i_max),
            self.lambda.to_slider(lambda),
            self.mu.to_slider(mu),
        ]
    }
}
