//! Fixed-offset function commenting.
//!
//! Emscripten emits stub definitions for functions that a JavaScript library
//! already provides, and the stubs shadow the real implementations. The
//! generated stubs always occupy three lines:
//!
//! ```text
//! function _glClear(mask) {
//!   abort("missing function: glClear");
//! }
//! ```
//!
//! so a stub is disabled by opening a block comment on the definition line and
//! closing it two lines below. The offset is fixed; braces are never counted.

mod matching;

use std::collections::BTreeSet;

use log::{debug, trace};
use serde::Serialize;

use crate::config::{CLOSE_OFFSET, COMMENT_CLOSE, COMMENT_OPEN};
use crate::error_handling::FixError;

pub use matching::function_name;

/// A definition that was wrapped in a block comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentedFunction {
    /// Function name as it appeared in the file
    pub name: String,
    /// 1-based line that received `/*`
    pub line: usize,
    /// 1-based line that received `*/`
    pub closing_line: usize,
}

/// Comments out every definition of a target function in `lines`.
///
/// Lines are processed top to bottom and each match is evaluated against the
/// line's current content. For a match at index `i`, `/*` is prepended to line
/// `i` and `*/` is appended to line `i + 2`, ahead of its line terminator.
/// Every occurrence of a target is handled independently.
///
/// # Errors
///
/// Returns [`FixError::Range`] if a match's closing line is past the end of
/// `lines`. Lines modified before the failing match stay modified, so callers
/// must discard `lines` on error.
pub fn comment_out(
    lines: &mut [String],
    targets: &BTreeSet<String>,
) -> Result<Vec<CommentedFunction>, FixError> {
    let mut commented = Vec::new();
    if targets.is_empty() {
        return Ok(commented);
    }

    for index in 0..lines.len() {
        let name = match function_name(&lines[index]) {
            Some(name) if targets.contains(name) => name.to_string(),
            Some(name) => {
                trace!("Skipping function `{}` on line {}", name, index + 1);
                continue;
            }
            None => continue,
        };

        let closing = index + CLOSE_OFFSET;
        if closing >= lines.len() {
            return Err(FixError::Range {
                name,
                line: index + 1,
                closing_line: closing + 1,
                total: lines.len(),
            });
        }

        lines[index].insert_str(0, COMMENT_OPEN);
        append_before_terminator(&mut lines[closing], COMMENT_CLOSE);

        debug!(
            "Commented out `{}` (lines {}-{})",
            name,
            index + 1,
            closing + 1
        );
        commented.push(CommentedFunction {
            name,
            line: index + 1,
            closing_line: closing + 1,
        });
    }

    Ok(commented)
}

/// Appends `marker` to `line`, keeping a trailing `\n` or `\r\n` last.
fn append_before_terminator(line: &mut String, marker: &str) {
    let terminator_len = if line.ends_with("\r\n") {
        2
    } else if line.ends_with('\n') {
        1
    } else {
        0
    };
    line.insert_str(line.len() - terminator_len, marker);
}
