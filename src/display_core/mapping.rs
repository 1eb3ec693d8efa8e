//! Display mapping module
//!
//! Holds the parameters the render backend turns raw samples into display
//! intensities with: two independent linear+gamma transfer contexts (main
//! and limb), white-balance gains and the inverse-Gaussian tone curve.

mod display;
mod tone;
mod transfer;


pub use display::{DisplayMapping, RenderParameters, ToneMappingUniforms};
pub use tone::{ToneMapping, WhiteBalance};
pub use transfer::{MappingContext, TransferContext};
