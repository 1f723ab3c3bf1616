//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use thiserror::Error;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How the end-of-run summary is printed to stdout.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    /// One line per commented function plus a totals line
    Plain,
    /// The full report serialized as a single JSON object
    Json,
    /// Print nothing
    None,
}

/// Command-line options.
///
/// ```text
/// release_fixer <FILE> [FUNCTIONS]...
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "release_fixer",
    version,
    about = "Comments out generated function definitions that clash with library-provided ones"
)]
pub struct Opt {
    /// Generated file to rewrite in place
    pub file: PathBuf,

    /// Names of the functions to comment out
    pub functions: Vec<String>,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Summary printed after the run
    #[arg(long, value_enum, default_value_t = SummaryFormat::Plain)]
    pub summary: SummaryFormat,

    /// Report what would be commented out without touching the file
    #[arg(long)]
    pub dry_run: bool,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without going through [`Opt`].
///
/// # Examples
///
/// ```no_run
/// use release_fixer::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("out/app.js"),
///     functions: ["_glClear".to_string()].into_iter().collect(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// File to rewrite in place
    pub file: PathBuf,

    /// Target function names (membership test only)
    pub functions: BTreeSet<String>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Summary format
    pub summary: SummaryFormat,

    /// Skip the final write
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::new(),
            functions: BTreeSet::new(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            summary: SummaryFormat::Plain,
            dry_run: false,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            file: opt.file,
            functions: opt.functions.into_iter().collect(),
            log_level: opt.log_level,
            log_format: opt.log_format,
            summary: opt.summary,
            dry_run: opt.dry_run,
        }
    }
}

/// A configuration value that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// Human-readable description of what is wrong
    pub message: String,
}

impl Config {
    /// Checks the configuration before any file is touched.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigValidationError`] if the file path is empty or a
    /// function name is empty (an empty name can never match a definition).
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.file.as_os_str().is_empty() {
            return Err(ConfigValidationError {
                field: "file",
                message: "a path to the file to rewrite is required".to_string(),
            });
        }
        if self.functions.iter().any(|name| name.is_empty()) {
            return Err(ConfigValidationError {
                field: "functions",
                message: "function names must be non-empty".to_string(),
            });
        }
        Ok(())
    }
}
