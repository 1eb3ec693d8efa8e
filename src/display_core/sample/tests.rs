use crate::display_core::common::error::ViewerError;
use crate::display_core::sample::{
    BayerPattern, FrameDescriptor, FrameMetadata, Instrument, PixelLayout, Representation, SampleBuffer, SampleData,
};
use crate::display_core::test_utils::{frame, instrument_frame, mono_u8};

#[test]
fn test_length_mismatch_rejected() {
    let descriptor = FrameDescriptor::new(4, 4, 1, Representation::U8);
    let result = SampleBuffer::new(SampleData::U8(vec![0; 15]), descriptor);
    assert!(matches!(result, Err(ViewerError::InvalidBufferError(_))));
}

#[test]
fn test_representation_mismatch_rejected() {
    let descriptor = FrameDescriptor::new(2, 2, 1, Representation::U16);
    let result = SampleBuffer::new(SampleData::U8(vec![0; 4]), descriptor);
    assert!(matches!(result, Err(ViewerError::InvalidBufferError(_))));
}

#[test]
fn test_empty_and_odd_shapes_rejected() {
    let empty = SampleBuffer::new(SampleData::U8(vec![]), FrameDescriptor::new(0, 4, 1, Representation::U8));
    assert!(matches!(empty, Err(ViewerError::InvalidBufferError(_))));

    let two_channels = SampleBuffer::new(SampleData::U8(vec![0; 8]), FrameDescriptor::new(2, 2, 2, Representation::U8));
    assert!(matches!(two_channels, Err(ViewerError::InvalidBufferError(_))));

    let bayer_rgb = SampleBuffer::new(
        SampleData::U8(vec![0; 12]),
        FrameDescriptor::new(2, 2, 3, Representation::U8).with_bayer(BayerPattern::Rggb),
    );
    assert!(matches!(bayer_rgb, Err(ViewerError::InvalidBufferError(_))));
}

#[test]
fn test_float_bayer_rejected() {
    let descriptor = FrameDescriptor::new(2, 2, 1, Representation::F32).with_bayer(BayerPattern::Rggb);
    let result = SampleBuffer::new(SampleData::F32(vec![0.5; 4]), descriptor);
    assert!(matches!(result, Err(ViewerError::InvalidBufferError(_))));
}

#[test]
fn test_mono_grayscale_aliases_raw() {
    let buffer = mono_u8(2, 2, vec![1, 2, 3, 4]);
    assert_eq!(buffer.layout(), PixelLayout::Mono);
    assert!(buffer.grayscale_aliases_raw());
    assert!(std::ptr::eq(buffer.grayscale(), buffer.raw()));
    assert!(buffer.rgb().is_none());
}

#[test]
fn test_rgb_luma_reduction() {
    let buffer = frame(SampleData::U8(vec![100, 200, 50]), 1, 1, 3);
    assert_eq!(buffer.layout(), PixelLayout::Rgb);
    assert_eq!(buffer.grayscale(), &SampleData::U8(vec![153]));
    assert!(std::ptr::eq(buffer.rgb().unwrap(), buffer.raw()));
    assert_eq!(buffer.statistics().data_min, 153.0);
}

#[test]
fn test_tiff_frames_are_bgr() {
    let buffer = instrument_frame(SampleData::U8(vec![50, 200, 100]), 1, 1, 3, Instrument::Tiff);
    assert_eq!(buffer.rgb(), Some(&SampleData::U8(vec![100, 200, 50])));
    assert_eq!(buffer.grayscale(), &SampleData::U8(vec![153]));
}

#[test]
fn test_bayer_promotes_to_16_bit_rgb() {
    let descriptor = FrameDescriptor::new(4, 4, 1, Representation::U8).with_bayer(BayerPattern::Rggb);
    let buffer = SampleBuffer::new(SampleData::U8(vec![100; 16]), descriptor).unwrap();

    assert!(buffer.is_bayer());
    assert!(!buffer.grayscale_aliases_raw());
    match buffer.rgb() {
        Some(SampleData::U16(values)) => {
            assert_eq!(values.len(), 48);
            assert!(values.iter().all(|&v| v == 100));
        }
        other => panic!("expected 16-bit RGB, got {:?}", other),
    }
    assert_eq!(buffer.grayscale().len(), 16);
    assert_eq!(buffer.raw(), &SampleData::U8(vec![100; 16]));

    let texture = buffer.texture_descriptor();
    assert_eq!(texture.channels, 3);
    assert_eq!(texture.representation, Representation::U16);
}

#[test]
fn test_unit_float_frames_are_stretched() {
    let buffer = frame(SampleData::F32(vec![0.0, 0.5, 1.0, 0.25]), 2, 2, 1);

    assert!(buffer.unit_rescaled());
    assert_eq!(buffer.raw(), &SampleData::F32(vec![0.0, 32767.5, 65535.0, 16383.75]));
    assert_eq!(buffer.extrema(), (0.0, 65535.0));
    assert_eq!(buffer.nominal_range().data_range, 65536.0);
    assert_eq!(buffer.statistics().histogram().len(), 65536);
}

#[test]
fn test_float_frames_outside_unit_range_keep_values() {
    let buffer = frame(SampleData::F32(vec![0.0, 2.0, 10.5, 3.0]), 2, 2, 1);

    assert!(!buffer.unit_rescaled());
    assert_eq!(buffer.extrema(), (0.0, 10.5));
    assert_eq!(buffer.nominal_range().data_range, 10.5);
}

#[test]
fn test_metadata_set_once() {
    let buffer = mono_u8(1, 1, vec![7]);
    assert_eq!(buffer.title(), "");

    let metadata = FrameMetadata {
        title: "Halpha 2014-06-10".to_string(),
        temperature: Some(-12.5),
        ..Default::default()
    };
    buffer.set_metadata(metadata).unwrap();
    assert_eq!(buffer.title(), "Halpha 2014-06-10");

    let again = buffer.set_metadata(FrameMetadata::default());
    assert!(matches!(again, Err(ViewerError::MetadataAlreadySetError)));
    assert_eq!(buffer.metadata().unwrap().temperature, Some(-12.5));
}

#[test]
fn test_replace_samples_recomputes_statistics() {
    let mut buffer = mono_u8(2, 2, vec![10, 10, 10, 10]);
    buffer.replace_samples(SampleData::U8(vec![0, 50, 100, 150])).unwrap();

    assert_eq!(buffer.extrema(), (0.0, 150.0));
    assert_eq!(buffer.statistics().mean, 75.0);

    let wrong = buffer.replace_samples(SampleData::U8(vec![1, 2, 3]));
    assert!(matches!(wrong, Err(ViewerError::InvalidBufferError(_))));
    assert_eq!(buffer.extrema(), (0.0, 150.0));
}

#[test]
fn test_from_le_bytes() {
    let data = SampleData::from_le_bytes(&[0x01, 0x02, 0xff, 0xff], Representation::U16, 2).unwrap();
    assert_eq!(data, SampleData::U16(vec![0x0201, 0xffff]));

    let signed = SampleData::from_le_bytes(&[0xff, 0xff], Representation::I16, 1).unwrap();
    assert_eq!(signed, SampleData::I16(vec![-1]));

    let short = SampleData::from_le_bytes(&[0x01, 0x02, 0x03], Representation::U16, 2);
    assert!(matches!(short, Err(ViewerError::InvalidBufferError(_))));
}

#[test]
fn test_flip_carried_to_texture() {
    let descriptor = FrameDescriptor::new(1, 1, 1, Representation::U16).with_flip_vertical(true);
    let buffer = SampleBuffer::new(SampleData::U16(vec![3]), descriptor).unwrap();
    assert!(buffer.texture_descriptor().flip_vertical);
}
