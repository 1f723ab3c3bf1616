//! Configuration constants.
//!
//! This module defines the fixed textual conventions the commenter relies on
//! and the process exit codes reported by the binary.

/// Literal prefix a trimmed line must start with to be considered a function definition.
pub const FUNCTION_PREFIX: &str = "function ";

/// Marker prepended to the matched definition line.
pub const COMMENT_OPEN: &str = "/*";

/// Marker appended to the closing line.
pub const COMMENT_CLOSE: &str = "*/";

/// Distance from a matched definition line to the line that receives `*/`.
///
/// Generated library definitions are laid out as signature, one body line and
/// the closing brace, so the comment always closes two lines below the match.
pub const CLOSE_OFFSET: usize = 2;

// Exit codes
/// Target file could not be read or written
pub const EXIT_FILE_ACCESS: i32 = 1;
/// Missing or invalid command-line arguments (matches clap's usage error code)
pub const EXIT_ARGUMENT: i32 = 2;
/// Closing comment line falls past the end of the file
pub const EXIT_RANGE: i32 = 3;
