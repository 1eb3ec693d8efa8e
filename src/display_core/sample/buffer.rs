use std::sync::OnceLock;

use tracing::{debug, info, instrument};

use crate::display_core::common::error::{Result, ViewerError};
use crate::display_core::debayer::CpuDebayer;
use crate::display_core::sample::types::{
    FrameDescriptor, FrameMetadata, Instrument, PixelLayout, Representation, SampleData, TextureDescriptor,
};
use crate::display_core::statistics::{NominalRange, Statistics, compute_extrema};

/// Scale applied to float frames observed within [0, 1].
const UNIT_FLOAT_SCALE: f32 = 65535.0;

/// Rec. 601 luma weights in RGB order.
const LUMA_RGB: [f64; 3] = [0.299, 0.587, 0.114];
const LUMA_BGR: [f64; 3] = [0.114, 0.587, 0.299];

/// One decoded frame: raw samples, cached derivatives and their statistics.
///
/// Samples and derivatives are fixed once built. Only the metadata can be
/// set afterwards, and only once.
#[derive(Debug)]
pub struct SampleBuffer {
    descriptor: FrameDescriptor,
    layout: PixelLayout,
    raw: SampleData,
    /// Owned RGB plane; `None` when there is none (mono) or it is the raw data.
    rgb: Option<SampleData>,
    /// Owned grayscale plane; `None` when it is the raw data.
    gray: Option<SampleData>,
    unit_rescaled: bool,
    statistics: Statistics,
    metadata: OnceLock<FrameMetadata>,
}

impl SampleBuffer {
    /// Builds a frame and eagerly computes its derivatives and statistics.
    #[instrument(skip(raw), fields(samples = raw.len()))]
    pub fn new(raw: SampleData, descriptor: FrameDescriptor) -> Result<Self> {
        let layout = Self::validate(&raw, &descriptor)?;
        let (raw, rgb, gray, unit_rescaled) = Self::prepare(raw, &descriptor, layout)?;
        let statistics = Statistics::compute(
            gray.as_ref().unwrap_or(&raw),
            descriptor.representation,
            descriptor.instrument,
            unit_rescaled,
        )?;

        info!(
            width = descriptor.width,
            height = descriptor.height,
            data_min = statistics.data_min,
            data_max = statistics.data_max,
            "Frame ready"
        );

        Ok(Self {
            descriptor,
            layout,
            raw,
            rgb,
            gray,
            unit_rescaled,
            statistics,
            metadata: OnceLock::new(),
        })
    }

    fn validate(raw: &SampleData, descriptor: &FrameDescriptor) -> Result<PixelLayout> {
        let layout = descriptor.layout()?;

        if raw.representation() != descriptor.representation {
            return Err(ViewerError::InvalidBufferError(format!(
                "samples are {:?}, descriptor declares {:?}",
                raw.representation(),
                descriptor.representation
            )));
        }

        let expected = descriptor.sample_count()?;
        if raw.len() != expected {
            return Err(ViewerError::InvalidBufferError(format!(
                "expected {} samples for {}x{}x{}, got {}",
                expected,
                descriptor.width,
                descriptor.height,
                descriptor.channels,
                raw.len()
            )));
        }

        Ok(layout)
    }

    /// Builds the derivatives, stretching unit-range float data to the 16-bit scale first.
    fn prepare(
        mut raw: SampleData,
        descriptor: &FrameDescriptor,
        layout: PixelLayout,
    ) -> Result<(SampleData, Option<SampleData>, Option<SampleData>, bool)> {
        let (mut rgb, mut gray) = Self::derive(&raw, descriptor, layout)?;

        let observed = compute_extrema(gray.as_ref().unwrap_or(&raw));
        // USET and DSLR ranges are fixed by the sensor and take precedence.
        let unit_rescaled = raw.representation().is_float()
            && !matches!(descriptor.instrument, Instrument::Uset | Instrument::Dslr)
            && matches!(observed, Some((min, max)) if min >= 0.0 && max <= 1.0);

        if unit_rescaled {
            debug!("Float frame within [0, 1], rescaling by {}", UNIT_FLOAT_SCALE);
            if let SampleData::F32(values) = &mut raw {
                values.iter_mut().for_each(|v| *v *= UNIT_FLOAT_SCALE);
            }
            (rgb, gray) = Self::derive(&raw, descriptor, layout)?;
        }

        Ok((raw, rgb, gray, unit_rescaled))
    }

    fn derive(
        raw: &SampleData,
        descriptor: &FrameDescriptor,
        layout: PixelLayout,
    ) -> Result<(Option<SampleData>, Option<SampleData>)> {
        match layout {
            PixelLayout::Mono => Ok((None, None)),
            PixelLayout::Bayer(pattern) => {
                let rgb = SampleData::U16(CpuDebayer::new().process(
                    raw,
                    descriptor.width,
                    descriptor.height,
                    pattern,
                )?);
                let gray = luma(&rgb, LUMA_RGB);
                Ok((Some(rgb), Some(gray)))
            }
            PixelLayout::Rgb if descriptor.instrument == Instrument::Tiff => {
                Ok((Some(swap_red_blue(raw)), Some(luma(raw, LUMA_BGR))))
            }
            PixelLayout::Rgb => Ok((None, Some(luma(raw, LUMA_RGB)))),
        }
    }

    /// Replaces the raw samples in place (e.g. after a normalisation step)
    /// and recomputes derivatives and statistics.
    pub fn replace_samples(&mut self, raw: SampleData) -> Result<()> {
        Self::validate(&raw, &self.descriptor)?;
        let (raw, rgb, gray, unit_rescaled) = Self::prepare(raw, &self.descriptor, self.layout)?;
        self.statistics = Statistics::compute(
            gray.as_ref().unwrap_or(&raw),
            self.descriptor.representation,
            self.descriptor.instrument,
            unit_rescaled,
        )?;
        self.raw = raw;
        self.rgb = rgb;
        self.gray = gray;
        self.unit_rescaled = unit_rescaled;
        Ok(())
    }

    pub fn width(&self) -> usize {
        self.descriptor.width
    }

    pub fn height(&self) -> usize {
        self.descriptor.height
    }

    pub fn channels(&self) -> usize {
        self.descriptor.channels
    }

    pub fn representation(&self) -> Representation {
        self.descriptor.representation
    }

    pub fn instrument(&self) -> Instrument {
        self.descriptor.instrument
    }

    pub fn is_bayer(&self) -> bool {
        matches!(self.layout, PixelLayout::Bayer(_))
    }

    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    pub fn descriptor(&self) -> &FrameDescriptor {
        &self.descriptor
    }

    pub fn raw(&self) -> &SampleData {
        &self.raw
    }

    /// Grayscale plane the statistics are computed from.
    pub fn grayscale(&self) -> &SampleData {
        self.gray.as_ref().unwrap_or(&self.raw)
    }

    /// Interleaved RGB plane, `None` for monochrome frames.
    pub fn rgb(&self) -> Option<&SampleData> {
        match self.layout {
            PixelLayout::Mono => None,
            PixelLayout::Bayer(_) => self.rgb.as_ref(),
            PixelLayout::Rgb => Some(self.rgb.as_ref().unwrap_or(&self.raw)),
        }
    }

    /// Whether the grayscale plane shares storage with the raw samples.
    pub fn grayscale_aliases_raw(&self) -> bool {
        self.gray.is_none()
    }

    pub fn unit_rescaled(&self) -> bool {
        self.unit_rescaled
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn extrema(&self) -> (f64, f64) {
        (self.statistics.data_min, self.statistics.data_max)
    }

    pub fn nominal_range(&self) -> NominalRange {
        self.statistics.range
    }

    pub fn metadata(&self) -> Option<&FrameMetadata> {
        self.metadata.get()
    }

    /// Title of the frame, empty until metadata is set.
    pub fn title(&self) -> &str {
        self.metadata().map(|m| m.title.as_str()).unwrap_or("")
    }

    pub fn set_metadata(&self, metadata: FrameMetadata) -> Result<()> {
        self.metadata
            .set(metadata)
            .map_err(|_| ViewerError::MetadataAlreadySetError)
    }

    /// Upload descriptor for the plane the renderer displays.
    pub fn texture_descriptor(&self) -> TextureDescriptor {
        let (channels, representation) = match self.layout {
            PixelLayout::Bayer(_) => (3, Representation::U16),
            _ => (self.descriptor.channels, self.descriptor.representation),
        };
        TextureDescriptor {
            width: self.descriptor.width,
            height: self.descriptor.height,
            channels,
            representation,
            flip_vertical: self.descriptor.flip_vertical,
        }
    }
}

/// Reduces interleaved 3-channel samples to one luma plane of the same representation.
fn luma(data: &SampleData, weights: [f64; 3]) -> SampleData {
    fn reduce<T: Copy + Into<f64>>(values: &[T], weights: [f64; 3]) -> impl Iterator<Item = f64> + '_ {
        values.chunks_exact(3).map(move |px| {
            let (c0, c1, c2): (f64, f64, f64) = (px[0].into(), px[1].into(), px[2].into());
            weights[0] * c0 + weights[1] * c1 + weights[2] * c2
        })
    }

    match data {
        SampleData::U8(v) => SampleData::U8(reduce(v, weights).map(|y| y.round().clamp(0.0, 255.0) as u8).collect()),
        SampleData::U16(v) => SampleData::U16(reduce(v, weights).map(|y| y.round().clamp(0.0, 65535.0) as u16).collect()),
        SampleData::I16(v) => SampleData::I16(
            reduce(v, weights)
                .map(|y| y.round().clamp(i16::MIN as f64, i16::MAX as f64) as i16)
                .collect(),
        ),
        SampleData::F32(v) => SampleData::F32(reduce(v, weights).map(|y| y as f32).collect()),
    }
}

fn swap_red_blue(data: &SampleData) -> SampleData {
    fn swap<T: Copy>(values: &[T]) -> Vec<T> {
        values.chunks_exact(3).flat_map(|px| [px[2], px[1], px[0]]).collect()
    }

    match data {
        SampleData::U8(v) => SampleData::U8(swap(v)),
        SampleData::U16(v) => SampleData::U16(swap(v)),
        SampleData::I16(v) => SampleData::I16(swap(v)),
        SampleData::F32(v) => SampleData::F32(swap(v)),
    }
}
