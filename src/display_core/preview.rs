//! 8-bit preview rasterisation
//!
//! A CPU rendition of the main transfer for magnifier and thumbnail views.
//! Gamma and tone mapping are left to the render backend.

mod render;


pub use render::{PreviewImage, Roi, probe_intensity, render_preview};
