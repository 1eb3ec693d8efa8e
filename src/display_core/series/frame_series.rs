use std::cell::OnceCell;

use tracing::debug;

use crate::display_core::common::error::{Result, ViewerError};
use crate::display_core::sample::{SampleBuffer, SampleData};

#[derive(Debug, Default)]
pub struct FrameSeries {
    frames: Vec<SampleBuffer>,
    current: usize,
    /// Series-wide (min, max), computed on first request
    bounds: OnceCell<(f64, f64)>,
}

impl FrameSeries {
    pub fn new(frames: Vec<SampleBuffer>) -> Self {
        Self {
            frames,
            current: 0,
            bounds: OnceCell::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[SampleBuffer] {
        &self.frames
    }

    pub fn frame(&self, index: usize) -> Result<&SampleBuffer> {
        self.frames.get(index).ok_or(ViewerError::IndexOutOfRangeError {
            index,
            len: self.frames.len(),
        })
    }

    pub fn first(&self) -> Result<&SampleBuffer> {
        self.frames.first().ok_or(ViewerError::EmptySeriesError)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Result<&SampleBuffer> {
        if self.is_empty() {
            return Err(ViewerError::EmptySeriesError);
        }
        self.frame(self.current)
    }

    pub fn set_current_frame(&mut self, index: usize) -> Result<()> {
        if index >= self.frames.len() {
            return Err(ViewerError::IndexOutOfRangeError {
                index,
                len: self.frames.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    /// Steps forward, wrapping from the last frame to the first.
    pub fn advance(&mut self) -> Result<usize> {
        if self.is_empty() {
            return Err(ViewerError::EmptySeriesError);
        }
        self.current = (self.current + 1) % self.frames.len();
        Ok(self.current)
    }

    /// Steps backward, wrapping from the first frame to the last.
    pub fn retreat(&mut self) -> Result<usize> {
        if self.is_empty() {
            return Err(ViewerError::EmptySeriesError);
        }
        self.current = self.current.checked_sub(1).unwrap_or(self.frames.len() - 1);
        Ok(self.current)
    }

    pub fn push(&mut self, frame: SampleBuffer) {
        self.frames.push(frame);
        self.invalidate();
    }

    pub fn remove(&mut self, index: usize) -> Result<SampleBuffer> {
        self.frame(index)?;
        let frame = self.frames.remove(index);
        if self.current >= self.frames.len() {
            self.current = self.frames.len().saturating_sub(1);
        }
        self.invalidate();
        Ok(frame)
    }

    pub fn replace(&mut self, index: usize, frame: SampleBuffer) -> Result<SampleBuffer> {
        self.frame(index)?;
        let old = std::mem::replace(&mut self.frames[index], frame);
        self.invalidate();
        Ok(old)
    }

    /// Rewrites one frame's samples and recomputes its statistics.
    pub fn replace_samples(&mut self, index: usize, samples: SampleData) -> Result<()> {
        let len = self.frames.len();
        let frame = self
            .frames
            .get_mut(index)
            .ok_or(ViewerError::IndexOutOfRangeError { index, len })?;
        frame.replace_samples(samples)?;
        self.invalidate();
        Ok(())
    }

    fn invalidate(&mut self) {
        self.bounds = OnceCell::new();
    }

    fn bounds(&self) -> Result<(f64, f64)> {
        if self.is_empty() {
            return Err(ViewerError::EmptySeriesError);
        }
        Ok(*self.bounds.get_or_init(|| {
            let bounds = self.frames.iter().map(SampleBuffer::extrema).fold(
                (f64::INFINITY, f64::NEG_INFINITY),
                |(lo, hi), (min, max)| (lo.min(min), hi.max(max)),
            );
            debug!(min = bounds.0, max = bounds.1, "Series bounds computed");
            bounds
        }))
    }

    /// Smallest frame minimum across the series.
    pub fn series_min(&self) -> Result<f64> {
        self.bounds().map(|(min, _)| min)
    }

    /// Largest frame maximum across the series.
    pub fn series_max(&self) -> Result<f64> {
        self.bounds().map(|(_, max)| max)
    }

    /// Mean intensity of every frame, in series order.
    pub fn mean_series(&self) -> Vec<f64> {
        self.frames.iter().map(|f| f.statistics().mean).collect()
    }

    /// Sensor temperature of every frame, `None` where metadata lacks it.
    pub fn temperature_series(&self) -> Vec<Option<f32>> {
        self.frames
            .iter()
            .map(|f| f.metadata().and_then(|m| m.temperature))
            .collect()
    }
}
