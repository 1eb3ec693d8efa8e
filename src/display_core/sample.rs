//! Frame sample storage
//!
//! A `SampleBuffer` owns one frame's raw samples together with the derivatives
//! the rest of the core reads from: a grayscale plane for statistics and an
//! RGB plane for colour display.

mod buffer;
mod types;

#[cfg(test)]
mod tests;

pub use buffer::SampleBuffer;
pub use types::{
    BayerPattern,
    FrameDescriptor,
    FrameMetadata,
    Instrument,
    PixelLayout,
    Representation,
    SampleData,
    TextureDescriptor,
};

pub(crate) use types::dispatch_samples;
