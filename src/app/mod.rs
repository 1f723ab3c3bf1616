//! User-facing output for the binary.

mod summary;

pub use summary::{print_summary, render_summary};
