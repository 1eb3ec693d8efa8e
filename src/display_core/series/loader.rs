use std::path::Path;

use tracing::{info, instrument, warn};

use crate::display_core::common::error::{Result, ViewerError};
use crate::display_core::raw::{FrameDecoder, PackedSampleDecoder};
use crate::display_core::sample::{FrameDescriptor, SampleBuffer};
use crate::display_core::series::FrameSeries;

/// A frame that failed to decode and was left out of the series.
#[derive(Debug)]
pub struct SkippedFrame {
    /// Position in the input batch
    pub index: usize,
    pub error: ViewerError,
}

/// Groups decoded frames into a series; one bad frame does not abort the load.
pub struct SeriesLoader<D: FrameDecoder> {
    decoder: D,
}

impl SeriesLoader<PackedSampleDecoder> {
    pub fn new(descriptor: FrameDescriptor) -> Self {
        Self {
            decoder: PackedSampleDecoder::new(descriptor),
        }
    }
}

impl<D: FrameDecoder> SeriesLoader<D> {
    pub fn with_decoder(decoder: D) -> Self {
        Self { decoder }
    }

    #[instrument(skip_all)]
    pub fn load<'a, I>(&self, inputs: I) -> (FrameSeries, Vec<SkippedFrame>)
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        self.collect(inputs.into_iter().map(|data| self.decoder.decode(data)))
    }

    #[instrument(skip_all)]
    pub fn load_files<P: AsRef<Path>>(&self, paths: &[P]) -> (FrameSeries, Vec<SkippedFrame>) {
        self.collect(paths.iter().map(|path| self.decoder.decode_file(path.as_ref())))
    }

    fn collect<I>(&self, results: I) -> (FrameSeries, Vec<SkippedFrame>)
    where
        I: Iterator<Item = Result<SampleBuffer>>,
    {
        let mut frames = Vec::new();
        let mut skipped = Vec::new();

        for (index, result) in results.enumerate() {
            match result {
                Ok(frame) => frames.push(frame),
                Err(error) => {
                    warn!(index, "Skipping frame: {}", error);
                    skipped.push(SkippedFrame { index, error });
                }
            }
        }

        info!(loaded = frames.len(), skipped = skipped.len(), "Series loaded");
        (FrameSeries::new(frames), skipped)
    }
}
