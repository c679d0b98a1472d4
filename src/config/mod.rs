//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, viewport, thresholds)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{AnalysisMode, Config, LogFormat, LogLevel, OutputFormat};
