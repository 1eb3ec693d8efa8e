//! Decoder for headerless, little-endian packed sample data.
//!
//! Frame shape and conventions come from a `FrameDescriptor` supplied by the
//! caller, typically parsed from a sidecar header by the ingestion layer.

use tracing::debug;

use crate::display_core::common::error::Result;
use crate::display_core::raw::reader::FrameDecoder;
use crate::display_core::sample::{FrameDescriptor, SampleBuffer, SampleData};

#[derive(Debug, Clone)]
pub struct PackedSampleDecoder {
    descriptor: FrameDescriptor,
}

impl PackedSampleDecoder {
    pub fn new(descriptor: FrameDescriptor) -> Self {
        Self { descriptor }
    }

    pub fn descriptor(&self) -> &FrameDescriptor {
        &self.descriptor
    }
}

impl FrameDecoder for PackedSampleDecoder {
    /// Decodes `data` as `width * height * channels` samples of the
    /// descriptor's representation.
    ///
    /// # Returns
    ///
    /// * `Ok(SampleBuffer)` - frame with derivatives and statistics computed
    /// * `Err(ViewerError::InvalidBufferError)` - byte length does not match the descriptor
    fn decode(&self, data: &[u8]) -> Result<SampleBuffer> {
        debug!("Decoding packed frame, {} bytes", data.len());

        let samples = SampleData::from_le_bytes(
            data,
            self.descriptor.representation,
            self.descriptor.sample_count()?,
        )?;

        SampleBuffer::new(samples, self.descriptor.clone())
    }
}
