use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::{debug, info};

use crate::display_core::common::error::{Result, ViewerError};
use crate::display_core::session::DisplaySession;

const FPS_STEP: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playback {
    fps: u32,
}

impl Playback {
    pub fn new(fps: u32) -> Result<Self> {
        if fps == 0 {
            return Err(ViewerError::InvalidParameterError(
                "playback rate must be at least 1 fps".to_string(),
            ));
        }
        Ok(Self { fps })
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Jumps to 5 fps from below, otherwise adds 5.
    pub fn increase_fps(&mut self) -> u32 {
        self.fps = if self.fps < FPS_STEP { FPS_STEP } else { self.fps + FPS_STEP };
        self.fps
    }

    /// Subtracts 5, never going below 1.
    pub fn decrease_fps(&mut self) -> u32 {
        self.fps = self.fps.saturating_sub(FPS_STEP).max(1);
        self.fps
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis((1000.0 / self.fps as f64).round() as u64)
    }

    /// Plays the session's series until `stop` is raised or `on_frame`
    /// breaks, and returns the number of frames advanced.
    ///
    /// Every iteration checks `stop`, yields to the host through `on_frame`,
    /// advances one frame (wrapping at the end) and sleeps one frame interval.
    pub fn run<F>(&self, session: &mut DisplaySession, stop: &AtomicBool, mut on_frame: F) -> Result<usize>
    where
        F: FnMut(&DisplaySession) -> ControlFlow<()>,
    {
        let interval = self.frame_interval();
        info!(fps = self.fps, "Playback started");

        let mut advanced = 0;
        while !stop.load(Ordering::Acquire) {
            if on_frame(session).is_break() {
                break;
            }
            if stop.load(Ordering::Acquire) {
                break;
            }
            let index = session.advance()?;
            advanced += 1;
            debug!(index, "Playback frame");
            std::thread::sleep(interval);
        }

        info!(advanced, "Playback stopped");
        Ok(advanced)
    }
}
