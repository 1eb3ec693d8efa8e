//! Raw frame decoding module
//!
//! The ingestion layer hands the core packed sample bytes; decoders turn them
//! into `SampleBuffer`s.

mod packed_decoder;
mod reader;

pub use packed_decoder::PackedSampleDecoder;
pub use reader::FrameDecoder;
