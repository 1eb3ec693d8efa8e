//! Slider value mapping
//!
//! Converts between the bounded integer positions of interactive controls and
//! the continuous values the display mapping works in.

mod mapper;
mod tone_scales;

#[cfg(test)]
mod tests;

pub use mapper::SliderValueMapper;
pub use tone_scales::ToneSliderScales;
