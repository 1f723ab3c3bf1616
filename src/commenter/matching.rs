//! Function definition matching.

use crate::config::FUNCTION_PREFIX;

/// Extracts the function name from a definition line.
///
/// The line is trimmed, must start with the literal `function ` prefix, and
/// the name is everything between that prefix and the first `(`. Lines with
/// no `(` or with an empty name do not match.
///
/// ```
/// use release_fixer::commenter::function_name;
///
/// assert_eq!(function_name("  function _glClear(mask) {\n"), Some("_glClear"));
/// assert_eq!(function_name("function (x) {}"), None);
/// assert_eq!(function_name("var f = function foo() {};"), None);
/// ```
pub fn function_name(line: &str) -> Option<&str> {
    let rest = line.trim().strip_prefix(FUNCTION_PREFIX)?;
    match rest.find('(') {
        Some(pos) if pos > 0 => Some(&rest[..pos]),
        _ => None,
    }
}
