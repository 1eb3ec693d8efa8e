//! Debayering module for converting Bayer mosaics to RGB

pub mod cpu_debayer;

pub use cpu_debayer::CpuDebayer;
