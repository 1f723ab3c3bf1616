//! Error handling.
//!
//! This module provides:
//! - The [`FixError`] taxonomy (argument, file access, range)
//! - Exit code classification through [`ErrorKind`]
//! - Initialization errors for logger setup

mod types;

// Re-export public API
pub use types::{ErrorKind, FixError, InitializationError};
