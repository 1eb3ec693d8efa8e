use crate::display_core::sample::{FrameDescriptor, Instrument, SampleBuffer, SampleData};
use crate::display_core::series::FrameSeries;

pub(crate) fn frame(data: SampleData, width: usize, height: usize, channels: usize) -> SampleBuffer {
    instrument_frame(data, width, height, channels, Instrument::Generic)
}

pub(crate) fn instrument_frame(
    data: SampleData,
    width: usize,
    height: usize,
    channels: usize,
    instrument: Instrument,
) -> SampleBuffer {
    let descriptor = FrameDescriptor::new(width, height, channels, data.representation()).with_instrument(instrument);
    SampleBuffer::new(data, descriptor).expect("valid test frame")
}

pub(crate) fn mono_u8(width: usize, height: usize, values: Vec<u8>) -> SampleBuffer {
    frame(SampleData::U8(values), width, height, 1)
}

pub(crate) fn mono_u16(width: usize, height: usize, values: Vec<u16>) -> SampleBuffer {
    frame(SampleData::U16(values), width, height, 1)
}

/// 4x4 8-bit frame, all 100 except one 200 pixel.
pub(crate) fn single_outlier_u8() -> SampleBuffer {
    let mut values = vec![100u8; 16];
    values[5] = 200;
    mono_u8(4, 4, values)
}

/// 16x16 16-bit ramp `offset + i`.
pub(crate) fn ramp_u16(offset: u16) -> SampleBuffer {
    mono_u16(16, 16, (0..256u16).map(|i| offset + i).collect())
}

pub(crate) fn series_of(frames: Vec<SampleBuffer>) -> FrameSeries {
    FrameSeries::new(frames)
}
