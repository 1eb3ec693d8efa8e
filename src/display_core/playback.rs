//! Continuous playback
//!
//! Auto-advances the displayed frame at a fixed rate on the caller's thread,
//! handing control back to the host event loop before every sleep.

mod player;


pub use player::Playback;
