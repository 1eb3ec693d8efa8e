//! Display session
//!
//! Owns a frame series together with its display mapping and control
//! domains. Controls send intents; the session translates them through the
//! slider mappers into mapping updates, and the renderer reads the result.

mod controls;
mod display_session;


pub use controls::{ColorChannel, Control, ControlIntent, ToneParameter};
pub use display_session::DisplaySession;
