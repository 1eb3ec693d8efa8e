use crate::display_core::common::error::ViewerError;
use crate::display_core::sample::{FrameDescriptor, Instrument, Representation, SampleBuffer, SampleData};
use crate::display_core::statistics::{
    MAX_HISTOGRAM_BINS, NominalRange, Statistics, histogram, mean_std_dev, percentile_threshold,
};
use crate::display_core::test_utils::{frame, instrument_frame, mono_u16, ramp_u16, single_outlier_u8};

#[test]
fn test_single_outlier_frame() {
    let buffer = single_outlier_u8();
    let stats = buffer.statistics();

    assert_eq!(stats.data_min, 100.0);
    assert_eq!(stats.data_max, 200.0);
    assert_eq!(stats.data_range(), 256.0);
    assert_eq!(stats.histogram().len(), 256);
    assert_eq!(stats.histogram()[100], 15);
    assert_eq!(stats.histogram()[200], 1);
    assert_eq!(stats.median, 100.0);
    assert_eq!(stats.intensity_low, 100.0);
    assert_eq!(stats.intensity_high, 200.0);
    assert_eq!(stats.pixel_count, 16);
}

#[test]
fn test_histogram_mass_equals_pixel_count() {
    let frames = [
        single_outlier_u8(),
        ramp_u16(1000),
        frame(SampleData::I16(vec![-100, -50, 0, 50]), 2, 2, 1),
        frame(SampleData::F32(vec![-3.5, 0.0, 12.25, 7.0]), 2, 2, 1),
        frame(SampleData::U8(vec![10, 20, 30, 40, 50, 60]), 2, 1, 3),
    ];

    for buffer in &frames {
        let stats = buffer.statistics();
        let mass: u64 = stats.histogram().iter().sum();
        assert_eq!(mass, stats.pixel_count, "{:?}", buffer.representation());
    }
}

#[test]
fn test_signed_frames_use_observed_range() {
    let buffer = frame(SampleData::I16(vec![-100, -50, 0, 50]), 2, 2, 1);
    let stats = buffer.statistics();

    assert_eq!(stats.data_range(), 150.0);
    assert_eq!(stats.hist_min(), -100.0);
    assert_eq!(stats.hist_max(), 50.0);
    assert_eq!(stats.histogram()[0], 1);
    assert_eq!(stats.histogram()[149], 1);
}

#[test]
fn test_bin_count_is_floor_of_range() {
    let buffer = frame(SampleData::F32(vec![0.0, 2.0, 10.5, 3.0]), 2, 2, 1);
    assert_eq!(buffer.statistics().range.bins, 10);
    assert_eq!(buffer.statistics().histogram().len(), 10);
}

#[test]
fn test_instrument_ranges() {
    let uset = instrument_frame(SampleData::U16(vec![0, 4095, 100, 200]), 2, 2, 1, Instrument::Uset);
    let range = uset.nominal_range();
    assert_eq!(range.data_range, 4096.0);
    assert_eq!(range.bins, 4096);
    assert_eq!(range.cutoff_low, 0.0);
    assert_eq!(range.cutoff_high, 99.97);

    let dslr = instrument_frame(SampleData::U16(vec![0, 16383, 100, 200]), 2, 2, 1, Instrument::Dslr);
    assert_eq!(dslr.nominal_range().data_range, 16384.0);
    assert_eq!(dslr.nominal_range().cutoff_low, 5.0);
    assert_eq!(dslr.nominal_range().cutoff_high, 99.85);

    let generic = NominalRange::resolve(Representation::U16, Instrument::Generic, 10.0, 20.0, false);
    assert_eq!(generic.data_range, 65536.0);
    assert_eq!(generic.hist_min, 0.0);
    assert_eq!(generic.hist_max, 65536.0);
    assert_eq!(generic.bin_width(), 1.0);
}

#[test]
fn test_percentiles_are_monotonic() {
    let buffer = ramp_u16(0);
    let stats = buffer.statistics();

    assert_eq!(stats.intensity_low, 12.0);
    assert_eq!(stats.median, 128.0);
    assert_eq!(stats.intensity_high, 255.0);

    let mut previous = f64::MIN;
    for cutoff in [0.0, 1.0, 5.0, 25.0, 50.0, 75.0, 99.0, 99.85, 100.0] {
        let threshold = stats.percentile_threshold(cutoff);
        assert!(threshold >= previous, "cutoff {} gave {}", cutoff, threshold);
        previous = threshold;
    }
}

#[test]
fn test_constant_frame_thresholds_are_separated() {
    let buffer = mono_u16(2, 2, vec![1000; 4]);
    let stats = buffer.statistics();

    assert_eq!(stats.median, 1000.0);
    assert_eq!(stats.intensity_low, 1000.0);
    assert_eq!(stats.intensity_high, 1001.0);
    assert_eq!(stats.std_dev, 0.0);
}

#[test]
fn test_threshold_saturates_to_last_bin() {
    assert_eq!(percentile_threshold(&[0, 0, 0], 0, 50.0, 1.0, 0.0), 2.0);
    assert_eq!(percentile_threshold(&[1, 1, 2], 4, 100.0, 2.0, 10.0), 14.0);
    assert_eq!(percentile_threshold(&[], 0, 50.0, 1.0, 0.0), 0.0);
}

#[test]
fn test_histogram_edges() {
    let data = SampleData::U8(vec![0, 10, 100, 255]);

    assert_eq!(histogram(&data, 8, 5.0, 5.0), vec![0; 8]);

    let counts = histogram(&data, 10, 0.0, 100.0);
    assert_eq!(counts.iter().sum::<u64>(), 3);
    assert_eq!(counts[0], 1);
    assert_eq!(counts[1], 1);
    assert_eq!(counts[9], 1);
}

#[test]
fn test_mean_and_population_std_dev() {
    let (mean, std_dev) = mean_std_dev(&SampleData::U8(vec![1, 2, 3, 4]));
    assert_eq!(mean, 2.5);
    assert!((std_dev - 1.25_f64.sqrt()).abs() < 1e-12);

    let (mean, std_dev) = mean_std_dev(&SampleData::F32(vec![f32::NAN, 4.0, f32::INFINITY]));
    assert_eq!(mean, 4.0);
    assert_eq!(std_dev, 0.0);
}

#[test]
fn test_bin_intensities() {
    let stats = Statistics::compute(
        &SampleData::I16(vec![-10, 10]),
        Representation::I16,
        Instrument::Generic,
        false,
    )
    .unwrap();
    let intensities = stats.bin_intensities();

    assert_eq!(intensities.len(), 20);
    assert_eq!(intensities[0], -10.0);
    assert_eq!(intensities[1], -9.0);
}

#[test]
fn test_fixed_range_instruments_skip_unit_float_rescale() {
    for (instrument, range) in [(Instrument::Dslr, 16384.0), (Instrument::Uset, 4096.0)] {
        let buffer = instrument_frame(SampleData::F32(vec![0.0, 0.25, 0.5, 1.0]), 2, 2, 1, instrument);
        let stats = buffer.statistics();

        assert!(!buffer.unit_rescaled(), "{:?}", instrument);
        assert_eq!(buffer.raw(), &SampleData::F32(vec![0.0, 0.25, 0.5, 1.0]));
        assert_eq!((stats.data_min, stats.data_max), (0.0, 1.0));
        assert_eq!(stats.data_range(), range);
        assert_eq!(stats.histogram().iter().sum::<u64>(), 4);
        assert_eq!(stats.intensity_high, 1.0);
    }
}

#[test]
fn test_excessive_histogram_range_rejected() {
    let descriptor = FrameDescriptor::new(2, 2, 1, Representation::F32);
    let result = SampleBuffer::new(SampleData::F32(vec![-1e30, 0.0, 1e30, 5.0]), descriptor.clone());
    assert!(matches!(result, Err(ViewerError::InvalidBufferError(_))));

    let too_wide = (MAX_HISTOGRAM_BINS + 2) as f32;
    let result = SampleBuffer::new(SampleData::F32(vec![0.0, 1.0, too_wide, 2.0]), descriptor);
    assert!(matches!(result, Err(ViewerError::InvalidBufferError(_))));

    let signed = Statistics::compute(
        &SampleData::I16(vec![i16::MIN, i16::MAX]),
        Representation::I16,
        Instrument::Generic,
        false,
    )
    .unwrap();
    assert_eq!(signed.histogram().len(), 65535);
}
