//! Frame series module
//!
//! An ordered set of frames (time, focus or exposure progression) with a
//! current-frame cursor and lazily cached series-wide bounds.

mod frame_series;
mod loader;


pub use frame_series::FrameSeries;
pub use loader::{SeriesLoader, SkippedFrame};
