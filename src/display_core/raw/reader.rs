use std::path::Path;

use crate::display_core::common::error::{Result, ViewerError};
use crate::display_core::sample::SampleBuffer;

pub trait FrameDecoder {
    fn decode(&self, data: &[u8]) -> Result<SampleBuffer>;

    fn decode_file(&self, path: &Path) -> Result<SampleBuffer> {
        let data = std::fs::read(path)
            .map_err(|e| ViewerError::InputReadError(format!("{}: {}", path.display(), e)))?;
        self.decode(&data)
    }
}
