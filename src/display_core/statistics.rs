//! Display-range statistics
//!
//! Extrema, moments, histogram and percentile thresholds of a frame's
//! grayscale plane. The nominal range table decides how many bins the
//! histogram has and which percentiles bound the auto-scale range.

mod engine;
mod histogram;
mod nominal_range;

#[cfg(test)]
mod tests;

pub use engine::Statistics;
pub use histogram::{compute_extrema, histogram, mean_std_dev, percentile_threshold};
pub use nominal_range::{MAX_HISTOGRAM_BINS, NominalRange};
