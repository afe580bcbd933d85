//! Structured logging for coinsource
//!
//! Provides a small, ergonomic logging API:
//! - Standard log levels (Error/Warning/Info/Debug)
//! - Per-subsystem tags for scannable output
//! - Colored console output with timestamps
//!
//! ## Usage
//!
//! ```rust
//! use coinsource::logger::{self, LogTag};
//!
//! logger::info(LogTag::Config, "Configuration loaded");
//! logger::warning(LogTag::Register, "Record limit reached, truncating");
//! logger::debug(LogTag::Pipeline, "Assembled 12 candidates"); // gated by min level
//! ```
//!
//! The default minimum level is Info; call [`set_min_level`] to widen or
//! narrow it (tests and embedding applications typically raise it to Debug).

mod core;
mod format;
mod levels;
mod tags;

pub use core::{min_level, set_min_level};
pub use levels::LogLevel;
pub use tags::LogTag;

/// Log at ERROR level (always shown, critical issues)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level (important issues that need attention)
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level (standard operational messages)
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level (detailed diagnostics, hidden unless enabled)
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}
