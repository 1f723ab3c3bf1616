//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use std::io;
use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::config::{ConfigValidationError, EXIT_ARGUMENT, EXIT_FILE_ACCESS, EXIT_RANGE};

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors that abort a fix run.
///
/// None of these are retried. A run that fails before the write step leaves
/// the target file untouched.
#[derive(Error, Debug)]
pub enum FixError {
    /// The configuration was rejected before any I/O happened.
    #[error(transparent)]
    InvalidConfig(#[from] ConfigValidationError),

    /// The target file could not be read or written.
    #[error("Cannot {action} {}: {source}", .path.display())]
    FileAccess {
        /// What was being attempted ("read", "write", ...)
        action: &'static str,
        /// Path of the target file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The closing comment would land past the last line of the file.
    #[error(
        "Function `{name}` on line {line} needs a closing comment on line {closing_line}, but the file has only {total} lines"
    )]
    Range {
        /// Function whose definition was matched
        name: String,
        /// 1-based line of the matched definition
        line: usize,
        /// 1-based line that should have received the closing marker
        closing_line: usize,
        /// Number of lines in the file
        total: usize,
    },
}

/// Coarse classification of [`FixError`], used for exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorKind {
    /// Missing or invalid arguments
    Argument,
    /// Target file unreadable or unwritable
    FileAccess,
    /// Closing comment line out of range
    Range,
}

impl ErrorKind {
    /// Process exit status reported for this kind of failure.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorKind::Argument => EXIT_ARGUMENT,
            ErrorKind::FileAccess => EXIT_FILE_ACCESS,
            ErrorKind::Range => EXIT_RANGE,
        }
    }
}

impl FixError {
    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FixError::InvalidConfig(_) => ErrorKind::Argument,
            FixError::FileAccess { .. } => ErrorKind::FileAccess,
            FixError::Range { .. } => ErrorKind::Range,
        }
    }
}
