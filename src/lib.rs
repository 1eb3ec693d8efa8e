pub mod display_core;
pub mod logger;
