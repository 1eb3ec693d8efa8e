use crate::display_core::sample::{SampleData, dispatch_samples};

/// Minimum and maximum over finite samples, `None` if there are none.
pub fn compute_extrema(data: &SampleData) -> Option<(f64, f64)> {
    dispatch_samples!(data, values => {
        values
            .iter()
            .map(|&v| f64::from(v))
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    })
}

/// Mean and population standard deviation over finite samples (Welford).
pub fn mean_std_dev(data: &SampleData) -> (f64, f64) {
    let mut count: u64 = 0;
    let mut mean = 0.0_f64;
    let mut m2 = 0.0_f64;

    dispatch_samples!(data, values => {
        for v in values.iter().map(|&v| f64::from(v)).filter(|v| v.is_finite()) {
            count += 1;
            let delta = v - mean;
            mean += delta / count as f64;
            m2 += delta * (v - mean);
        }
    });

    if count == 0 {
        return (0.0, 0.0);
    }
    (mean, (m2 / count as f64).sqrt())
}

/// Counts samples into `bins` uniform bins spanning `[range_min, range_max]`.
///
/// The last bin includes `range_max`; samples outside the range are not
/// counted. A zero-width range yields all-zero bins.
pub fn histogram(data: &SampleData, bins: usize, range_min: f64, range_max: f64) -> Vec<u64> {
    let mut counts = vec![0u64; bins];
    if bins == 0 || range_min == range_max {
        return counts;
    }

    let scale = bins as f64 / (range_max - range_min);
    let last = bins - 1;
    dispatch_samples!(data, values => {
        for v in values.iter().map(|&v| f64::from(v)) {
            if !(range_min..=range_max).contains(&v) {
                continue;
            }
            let index = (((v - range_min) * scale) as usize).min(last);
            counts[index] += 1;
        }
    });
    counts
}

/// Intensity of the first bin whose cumulative share of `total` strictly
/// exceeds `cutoff` percent.
///
/// Never fails: when the cutoff is not reached (empty histogram, mass lost
/// to out-of-range samples, cutoff of 100) the last bin is returned.
pub fn percentile_threshold(counts: &[u64], total: u64, cutoff: f64, bin_width: f64, range_min: f64) -> f64 {
    let mut cdf: u64 = 0;
    let index = counts
        .iter()
        .position(|&count| {
            cdf += count;
            total > 0 && 100.0 * cdf as f64 / total as f64 > cutoff
        })
        .unwrap_or_else(|| counts.len().saturating_sub(1));

    range_min + bin_width * index as f64
}
