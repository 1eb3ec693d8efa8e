use crate::display_core::common::error::{Result, ViewerError};
use crate::display_core::mapping::{DisplayMapping, MappingContext};
use crate::display_core::sample::{PixelLayout, SampleBuffer};

/// Rectangular region of a frame, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roi {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

/// Interleaved 8-bit RGB image.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewImage {
    pub width: usize,
    pub height: usize,
    /// Origin of the preview in frame coordinates
    pub origin: (usize, usize),
    pub data: Vec<u8>,
}

impl PreviewImage {
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 3;
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }
}

/// Renders the main transfer of `frame` into 8-bit RGB.
///
/// The ROI is moved inside the frame when it overhangs an edge. Each channel
/// is mapped to `round(255 * (alpha * v + beta))` with saturation, then
/// multiplied by its white-balance gain and clamped to 255.
pub fn render_preview(frame: &SampleBuffer, mapping: &DisplayMapping, roi: Option<Roi>) -> Result<PreviewImage> {
    let (width, height) = (frame.width(), frame.height());
    let roi = roi.unwrap_or(Roi {
        x: 0,
        y: 0,
        width,
        height,
    });
    if roi.width == 0 || roi.height == 0 || roi.width > width || roi.height > height {
        return Err(ViewerError::InvalidParameterError(format!(
            "preview region {}x{} does not fit a {}x{} frame",
            roi.width, roi.height, width, height
        )));
    }
    let x0 = roi.x.min(width - roi.width);
    let y0 = roi.y.min(height - roi.height);

    let (plane, channels) = match (frame.layout(), frame.rgb()) {
        (PixelLayout::Mono, _) | (_, None) => (frame.raw(), 1),
        (_, Some(rgb)) => (rgb, 3),
    };

    let transfer = mapping.context(MappingContext::Main);
    let gains = mapping.white_balance().gains();
    let to_8bit = |v: f64| (255.0 * transfer.normalize(v)).round().clamp(0.0, 255.0);
    let balance = |v8: f64, gain: f64| (gain * v8).min(255.0) as u8;

    let mut data = Vec::with_capacity(roi.width * roi.height * 3);
    for y in y0..y0 + roi.height {
        for x in x0..x0 + roi.width {
            let base = (y * width + x) * channels;
            let sample = |c: usize| plane.get(base + c).unwrap_or(0.0);
            if channels == 1 {
                let v8 = to_8bit(sample(0));
                data.extend(gains.map(|g| balance(v8, g)));
            } else {
                data.extend([0, 1, 2].map(|c| balance(to_8bit(sample(c)), gains[c])));
            }
        }
    }

    Ok(PreviewImage {
        width: roi.width,
        height: roi.height,
        origin: (x0, y0),
        data,
    })
}

/// Raw intensity under a cursor, clamped to the frame. Channel mean for
/// 3-channel frames.
pub fn probe_intensity(frame: &SampleBuffer, x: usize, y: usize) -> f64 {
    let x = x.min(frame.width() - 1);
    let y = y.min(frame.height() - 1);
    let channels = frame.channels();
    let base = (y * frame.width() + x) * channels;

    let sum: f64 = (0..channels).filter_map(|c| frame.raw().get(base + c)).sum();
    sum / channels as f64
}
