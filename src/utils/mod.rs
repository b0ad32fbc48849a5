//! Output helpers for the command line driver

pub mod display;

pub use display::{Color, ColorOutput, GenerationReport, ReportFormatter};
