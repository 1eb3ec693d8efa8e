//! Intensity-mapping and statistics core for solar image sequences
//!
//! This module turns decoded sample buffers into display-ready transfer
//! parameters: per-frame statistics, series-wide bounds, the main and limb
//! linear+gamma mappings, and the slider domains that drive them.

pub mod common;
pub mod config;
pub mod debayer;
pub mod mapping;
pub mod playback;
pub mod preview;
pub mod raw;
pub mod sample;
pub mod series;
pub mod session;
pub mod slider;
pub mod statistics;

#[cfg(test)]
pub(crate) mod test_utils;

pub use common::{
    Result,
    ViewerError,
};

pub use config::{
    ViewerConfig,
    ViewerConfigBuilder,
};

pub use sample::{
    BayerPattern,
    FrameDescriptor,
    FrameMetadata,
    Instrument,
    PixelLayout,
    Representation,
    SampleBuffer,
    SampleData,
    TextureDescriptor,
};

pub use statistics::{
    NominalRange,
    Statistics,
};

pub use mapping::{
    DisplayMapping,
    MappingContext,
    RenderParameters,
    ToneMapping,
    ToneMappingUniforms,
    TransferContext,
    WhiteBalance,
};

pub use raw::{
    FrameDecoder,
    PackedSampleDecoder,
};

pub use series::{
    FrameSeries,
    SeriesLoader,
    SkippedFrame,
};

pub use slider::{
    SliderValueMapper,
    ToneSliderScales,
};

pub use session::{
    ColorChannel,
    Control,
    ControlIntent,
    DisplaySession,
    ToneParameter,
};

pub use playback::Playback;

pub use preview::{
    PreviewImage,
    Roi,
};
