//! release_fixer library: comments out conflicting function definitions
//!
//! Emscripten sometimes fails to notice functions provided by a JavaScript
//! library and emits error stubs with the same names, which then shadow the
//! real implementations. This library rewrites the generated file so that the
//! stubs for the named functions are wrapped in block comments.
//!
//! # Example
//!
//! ```no_run
//! use release_fixer::{run_fix, Config};
//! use std::path::PathBuf;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     file: PathBuf::from("build/app.js"),
//!     functions: ["_glClear".to_string(), "_glFlush".to_string()]
//!         .into_iter()
//!         .collect(),
//!     ..Default::default()
//! };
//!
//! let report = run_fix(&config)?;
//! println!("Commented out {} definitions", report.commented.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod app;
pub mod commenter;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod storage;

// Re-export public API
pub use commenter::{comment_out, CommentedFunction};
pub use config::{Config, LogFormat, LogLevel, Opt, SummaryFormat};
pub use error_handling::{ErrorKind, FixError};
pub use run::{run_fix, FixReport};

// Internal run module (contains the read / comment / write sequence)
mod run {
    use std::path::PathBuf;

    use anyhow::Result;
    use log::{info, warn};
    use serde::Serialize;

    use crate::commenter::{comment_out, CommentedFunction};
    use crate::config::Config;
    use crate::error_handling::FixError;
    use crate::storage::{read_lines, write_lines};

    /// Results of a fix run.
    #[derive(Debug, Clone, Serialize)]
    pub struct FixReport {
        /// File that was processed
        pub file: PathBuf,
        /// Number of lines in the file
        pub total_lines: usize,
        /// Definitions that were commented out, in file order
        pub commented: Vec<CommentedFunction>,
        /// Requested names that matched no definition
        pub missing: Vec<String>,
        /// Whether this was a dry run
        pub dry_run: bool,
        /// Whether the file was rewritten
        pub written: bool,
    }

    /// Comments out the configured functions in the configured file.
    ///
    /// The file is read once, transformed in memory and, unless
    /// `config.dry_run` is set, written back once. The file is rewritten even
    /// when nothing matched, so its contents come back byte-identical.
    ///
    /// # Errors
    ///
    /// Returns a [`FixError`] (inside the `anyhow::Error`) if:
    /// - The configuration is invalid
    /// - The file cannot be read or written
    /// - A matched definition has fewer than two lines after it
    ///
    /// The file is left untouched in every error case except a failing final
    /// write, and even then the original survives because the write goes
    /// through a temporary file.
    pub fn run_fix(config: &Config) -> Result<FixReport> {
        config.validate().map_err(FixError::from)?;

        info!(
            "Commenting out {} function name{} in {}",
            config.functions.len(),
            if config.functions.len() == 1 { "" } else { "s" },
            config.file.display()
        );

        let mut lines = read_lines(&config.file)?;
        let commented = comment_out(&mut lines, &config.functions)?;

        let missing: Vec<String> = config
            .functions
            .iter()
            .filter(|name| !commented.iter().any(|c| &c.name == *name))
            .cloned()
            .collect();
        for name in &missing {
            warn!("No definition of `{}` found in {}", name, config.file.display());
        }

        let written = if config.dry_run {
            info!("Dry run: leaving {} unchanged", config.file.display());
            false
        } else {
            write_lines(&config.file, &lines)?;
            true
        };

        info!(
            "Commented out {} definition{} in {}",
            commented.len(),
            if commented.len() == 1 { "" } else { "s" },
            config.file.display()
        );

        Ok(FixReport {
            file: config.file.clone(),
            total_lines: lines.len(),
            commented,
            missing,
            dry_run: config.dry_run,
            written,
        })
    }
}
