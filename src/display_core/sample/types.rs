//! Types describing frame samples and their layout

use crate::display_core::common::error::{Result, ViewerError};

/// In-memory sample representation of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    /// 8-bit unsigned integer
    U8,
    /// 16-bit unsigned integer
    U16,
    /// 16-bit signed integer (FITS BITPIX = 16)
    I16,
    /// 32-bit floating point
    F32,
}

impl Representation {
    /// Size of one sample in bytes.
    pub fn sample_size(self) -> usize {
        match self {
            Representation::U8 => 1,
            Representation::U16 | Representation::I16 => 2,
            Representation::F32 => 4,
        }
    }

    pub fn is_float(self) -> bool {
        matches!(self, Representation::F32)
    }
}

/// Acquisition instrument. Some instruments override the representation's
/// nominal range with their sensor bit depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Instrument {
    #[default]
    Generic,
    /// USET solar telescope, 12-bit sensor
    Uset,
    /// Consumer DSLR, 14-bit sensor
    Dslr,
    /// Decoded TIFF files, 3-channel data is stored BGR
    Tiff,
}

/// Colour filter array layout of a Bayer mosaic, named from the top-left 2x2 block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BayerPattern {
    #[default]
    Rggb,
    Bggr,
    Grbg,
    Gbrg,
}

/// Pixel layout resolved once from the channel count and the bayer flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelLayout {
    Mono,
    Bayer(BayerPattern),
    Rgb,
}

/// Shape and conventions of a frame, as reported by the ingestion layer.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameDescriptor {
    pub width: usize,
    pub height: usize,
    /// 1 or 3
    pub channels: usize,
    pub representation: Representation,
    pub bayer: Option<BayerPattern>,
    pub instrument: Instrument,
    /// Rows are stored bottom-up
    pub flip_vertical: bool,
}

impl FrameDescriptor {
    pub fn new(width: usize, height: usize, channels: usize, representation: Representation) -> Self {
        Self {
            width,
            height,
            channels,
            representation,
            bayer: None,
            instrument: Instrument::Generic,
            flip_vertical: false,
        }
    }

    pub fn with_bayer(mut self, pattern: BayerPattern) -> Self {
        self.bayer = Some(pattern);
        self
    }

    pub fn with_instrument(mut self, instrument: Instrument) -> Self {
        self.instrument = instrument;
        self
    }

    pub fn with_flip_vertical(mut self, flip: bool) -> Self {
        self.flip_vertical = flip;
        self
    }

    /// Number of samples the raw storage must hold.
    pub fn sample_count(&self) -> Result<usize> {
        self.width
            .checked_mul(self.height)
            .and_then(|n| n.checked_mul(self.channels))
            .ok_or_else(|| {
                ViewerError::InvalidBufferError(format!(
                    "dimensions overflow: {}x{}x{}",
                    self.width, self.height, self.channels
                ))
            })
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Checks the descriptor on its own and resolves its pixel layout.
    pub fn layout(&self) -> Result<PixelLayout> {
        if self.width == 0 || self.height == 0 {
            return Err(ViewerError::InvalidBufferError(format!(
                "empty frame: width={}, height={}",
                self.width, self.height
            )));
        }

        match (self.channels, self.bayer) {
            (1, None) => Ok(PixelLayout::Mono),
            (1, Some(pattern)) => {
                if !matches!(self.representation, Representation::U8 | Representation::U16) {
                    return Err(ViewerError::InvalidBufferError(format!(
                        "bayer mosaics must be 8- or 16-bit unsigned, got {:?}",
                        self.representation
                    )));
                }
                if self.width < 2 || self.height < 2 {
                    return Err(ViewerError::InvalidBufferError(format!(
                        "bayer mosaic too small: {}x{}",
                        self.width, self.height
                    )));
                }
                Ok(PixelLayout::Bayer(pattern))
            }
            (3, None) => Ok(PixelLayout::Rgb),
            (3, Some(_)) => Err(ViewerError::InvalidBufferError(
                "a 3-channel frame cannot carry a bayer mosaic".to_string(),
            )),
            (channels, _) => Err(ViewerError::InvalidBufferError(format!(
                "unsupported channel count: {}",
                channels
            ))),
        }
    }
}

/// Raw, row-major, channel-interleaved samples.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleData {
    U8(Vec<u8>),
    U16(Vec<u16>),
    I16(Vec<i16>),
    F32(Vec<f32>),
}

/// Runs `$body` with `$values` bound to the typed sample slice.
macro_rules! dispatch_samples {
    ($data:expr, $values:ident => $body:expr) => {
        match $data {
            $crate::display_core::sample::SampleData::U8($values) => $body,
            $crate::display_core::sample::SampleData::U16($values) => $body,
            $crate::display_core::sample::SampleData::I16($values) => $body,
            $crate::display_core::sample::SampleData::F32($values) => $body,
        }
    };
}

pub(crate) use dispatch_samples;

impl SampleData {
    pub fn representation(&self) -> Representation {
        match self {
            SampleData::U8(_) => Representation::U8,
            SampleData::U16(_) => Representation::U16,
            SampleData::I16(_) => Representation::I16,
            SampleData::F32(_) => Representation::F32,
        }
    }

    pub fn len(&self) -> usize {
        dispatch_samples!(self, values => values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sample at `index` widened to `f64`.
    pub fn get(&self, index: usize) -> Option<f64> {
        dispatch_samples!(self, values => values.get(index).map(|&v| f64::from(v)))
    }

    /// Decodes little-endian packed bytes. The byte length must be exactly
    /// `sample_count` samples of `representation`.
    pub fn from_le_bytes(bytes: &[u8], representation: Representation, sample_count: usize) -> Result<Self> {
        let expected = sample_count
            .checked_mul(representation.sample_size())
            .ok_or_else(|| ViewerError::InvalidBufferError("byte length overflow".to_string()))?;
        if bytes.len() != expected {
            return Err(ViewerError::InvalidBufferError(format!(
                "expected {} bytes for {} {:?} samples, got {}",
                expected,
                sample_count,
                representation,
                bytes.len()
            )));
        }

        let data = match representation {
            Representation::U8 => SampleData::U8(bytes.to_vec()),
            Representation::U16 => SampleData::U16(
                bytes.chunks_exact(2).map(|b| u16::from_le_bytes([b[0], b[1]])).collect(),
            ),
            Representation::I16 => SampleData::I16(
                bytes.chunks_exact(2).map(|b| i16::from_le_bytes([b[0], b[1]])).collect(),
            ),
            Representation::F32 => SampleData::F32(
                bytes
                    .chunks_exact(4)
                    .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
                    .collect(),
            ),
        };
        Ok(data)
    }
}

/// Descriptive frame metadata, set at most once after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameMetadata {
    pub title: String,
    /// Acquisition date and time as reported by the file header
    pub date_time: Option<String>,
    /// Exposure time in seconds
    pub exposure: Option<f32>,
    /// Sensor temperature in degrees Celsius
    pub temperature: Option<f32>,
    /// Solar disk radius in pixels
    pub solar_radius: Option<f32>,
}

/// What the render backend needs to upload a frame as a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureDescriptor {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
    pub representation: Representation,
    pub flip_vertical: bool,
}
