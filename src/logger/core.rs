/// Core logging implementation with level filtering
///
/// Holds the global minimum-level switch and the single entry point the
/// public level functions delegate to.
use std::sync::RwLock;

use once_cell::sync::Lazy;

use super::levels::LogLevel;
use super::tags::LogTag;

static MIN_LEVEL: Lazy<RwLock<LogLevel>> = Lazy::new(|| RwLock::new(LogLevel::Info));

/// Current minimum level threshold
pub fn min_level() -> LogLevel {
    *MIN_LEVEL.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Set the minimum level threshold (messages above it are dropped)
pub fn set_min_level(level: LogLevel) {
    *MIN_LEVEL
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner()) = level;
}

/// Check if a log message should be displayed
///
/// Errors always log; everything else is compared against the threshold.
pub fn should_log(level: LogLevel) -> bool {
    if level == LogLevel::Error {
        return true;
    }
    level <= min_level()
}

/// Internal logging function with automatic filtering
pub fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    if !should_log(level) {
        return;
    }

    super::format::format_and_log(&tag, level, message);
}
