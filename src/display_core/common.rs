//! Common utilities module
//!
//! This module contains shared utilities used across the display core.

pub mod error;

pub use error::{Result, ViewerError};
