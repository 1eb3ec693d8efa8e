use tracing::{debug, instrument};

use crate::display_core::common::error::{Result, ViewerError};
use crate::display_core::sample::{Instrument, Representation, SampleData};
use crate::display_core::statistics::{
    MAX_HISTOGRAM_BINS, NominalRange, compute_extrema, histogram, mean_std_dev, percentile_threshold,
};

/// Statistics of a frame's grayscale plane, computed once per buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub data_min: f64,
    pub data_max: f64,
    pub mean: f64,
    pub std_dev: f64,
    pub median: f64,
    pub intensity_low: f64,
    pub intensity_high: f64,
    pub pixel_count: u64,
    pub range: NominalRange,
    histogram: Vec<u64>,
}

impl Statistics {
    /// Fails with `InvalidBufferError` when the data range would need more
    /// than `MAX_HISTOGRAM_BINS` bins (float or signed data spread too wide).
    #[instrument(skip(gray), fields(samples = gray.len()))]
    pub fn compute(
        gray: &SampleData,
        representation: Representation,
        instrument: Instrument,
        unit_rescaled: bool,
    ) -> Result<Self> {
        let (data_min, data_max) = compute_extrema(gray).unwrap_or((0.0, 0.0));
        let (mean, std_dev) = mean_std_dev(gray);
        let range = NominalRange::resolve(representation, instrument, data_min, data_max, unit_rescaled);
        if range.bins > MAX_HISTOGRAM_BINS {
            return Err(ViewerError::InvalidBufferError(format!(
                "data range {} needs {} histogram bins, at most {} supported",
                range.data_range, range.bins, MAX_HISTOGRAM_BINS
            )));
        }

        debug!(
            data_min,
            data_max,
            data_range = range.data_range,
            bins = range.bins,
            "Computing histogram over [{}, {}]",
            range.hist_min,
            range.hist_max
        );
        let histogram = histogram(gray, range.bins, range.hist_min, range.hist_max);

        let mut stats = Self {
            data_min,
            data_max,
            mean,
            std_dev,
            median: 0.0,
            intensity_low: 0.0,
            intensity_high: 0.0,
            pixel_count: gray.len() as u64,
            range,
            histogram,
        };

        stats.median = stats.percentile_threshold(50.0);
        stats.intensity_low = stats.percentile_threshold(range.cutoff_low);
        stats.intensity_high = stats.percentile_threshold(range.cutoff_high);
        if stats.intensity_low == stats.intensity_high {
            stats.intensity_high = stats.intensity_low + 1.0;
        }

        debug!(
            median = stats.median,
            intensity_low = stats.intensity_low,
            intensity_high = stats.intensity_high,
            "Statistics ready"
        );
        Ok(stats)
    }

    pub fn data_range(&self) -> f64 {
        self.range.data_range
    }

    pub fn histogram(&self) -> &[u64] {
        &self.histogram
    }

    pub fn bin_width(&self) -> f64 {
        self.range.bin_width()
    }

    pub fn hist_min(&self) -> f64 {
        self.range.hist_min
    }

    pub fn hist_max(&self) -> f64 {
        self.range.hist_max
    }

    /// Intensity at the lower edge of every bin, for plotting.
    pub fn bin_intensities(&self) -> Vec<f64> {
        let width = self.bin_width();
        (0..self.histogram.len())
            .map(|i| self.range.hist_min + width * i as f64)
            .collect()
    }

    pub fn percentile_threshold(&self, cutoff: f64) -> f64 {
        percentile_threshold(
            &self.histogram,
            self.pixel_count,
            cutoff,
            self.bin_width(),
            self.range.hist_min,
        )
    }
}
