//! Application initialization.
//!
//! Currently this only covers logger setup; it is called once by the binary
//! before any file is touched.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
