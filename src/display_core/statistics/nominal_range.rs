use crate::display_core::sample::{Instrument, Representation};

/// Nominal data range of a frame and the histogram/threshold policy derived from it.
///
/// The range is a property of the sensor and representation, not of the
/// observed pixel values, except for data that has no fixed scale
/// (non-normalized floats and signed integers).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NominalRange {
    pub data_range: f64,
    pub bins: usize,
    /// Percentage of pixel mass below the low auto-scale threshold
    pub cutoff_low: f64,
    /// Percentage of pixel mass below the high auto-scale threshold
    pub cutoff_high: f64,
    pub hist_min: f64,
    pub hist_max: f64,
}

/// Largest histogram a frame may ask for; wider actual ranges are rejected.
pub const MAX_HISTOGRAM_BINS: usize = 1 << 24;

const USET_RANGE: f64 = 4096.0;
const DSLR_RANGE: f64 = 16384.0;
const U16_RANGE: f64 = 65536.0;
const U8_RANGE: f64 = 256.0;

impl NominalRange {
    /// Resolves the range policy for a frame.
    ///
    /// `unit_rescaled` is set when float samples observed within [0, 1] have
    /// already been stretched to the 16-bit scale.
    pub fn resolve(
        representation: Representation,
        instrument: Instrument,
        data_min: f64,
        data_max: f64,
        unit_rescaled: bool,
    ) -> Self {
        let (data_range, fixed) = match (instrument, representation) {
            (Instrument::Uset, _) => (USET_RANGE, true),
            (Instrument::Dslr, _) => (DSLR_RANGE, true),
            (_, Representation::U16) => (U16_RANGE, true),
            (_, Representation::F32) if unit_rescaled => (U16_RANGE, true),
            (_, Representation::F32) | (_, Representation::I16) => (data_max - data_min, false),
            (_, Representation::U8) => (U8_RANGE, true),
        };

        let (cutoff_low, cutoff_high) = match instrument {
            Instrument::Uset => (0.0, 99.97),
            _ => (5.0, 99.85),
        };

        // The histogram may start below zero for signed or float data.
        let hist_min = data_min.min(0.0);
        let hist_max = if fixed { hist_min + data_range } else { data_max };

        Self {
            data_range,
            bins: (data_range.floor() as usize).max(1),
            cutoff_low,
            cutoff_high,
            hist_min,
            hist_max,
        }
    }

    pub fn bin_width(&self) -> f64 {
        (self.hist_max - self.hist_min) / self.bins as f64
    }
}
