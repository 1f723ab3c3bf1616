//! Application configuration and constants.
//!
//! This module provides:
//! - Textual constants for function matching and comment markers
//! - Exit code constants
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ConfigValidationError, LogFormat, LogLevel, Opt, SummaryFormat};
