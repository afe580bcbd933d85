//! Log formatting and console output with ANSI colors
//!
//! Formats messages as `HH:MM:SS [TAG     ] [LEVEL  ] message` with the tag
//! colored per subsystem. Output goes to stdout; broken pipes (piped
//! commands that exit early) terminate quietly instead of panicking.

use chrono::Local;
use colored::*;
use std::io::{stdout, ErrorKind, Write};

use super::levels::LogLevel;
use super::tags::LogTag;

/// Log format widths for alignment
const TAG_WIDTH: usize = 9;
const LEVEL_WIDTH: usize = 7;

/// Format and output a log message
pub fn format_and_log(tag: &LogTag, level: LogLevel, message: &str) {
    let time = Local::now().format("%H:%M:%S").to_string();

    let line = format!(
        "{} [{}] [{}] {}",
        time.dimmed(),
        format_tag(tag),
        format_level(level),
        message
    );

    print_stdout_safe(&line);
}

/// Format a tag with its subsystem color
fn format_tag(tag: &LogTag) -> ColoredString {
    let padded = format!("{:<width$}", tag.as_str(), width = TAG_WIDTH);
    match tag {
        LogTag::Config => padded.bright_yellow().bold(),
        LogTag::Editor => padded.bright_cyan().bold(),
        LogTag::Pipeline => padded.bright_green().bold(),
        LogTag::Register => padded.bright_magenta().bold(),
        LogTag::Symbols => padded.bright_blue().bold(),
        LogTag::Test => padded.bright_white().bold(),
        LogTag::Other(_) => padded.white().bold(),
    }
}

/// Format a level label with severity color
fn format_level(level: LogLevel) -> ColoredString {
    let padded = format!("{:<width$}", level.as_str(), width = LEVEL_WIDTH);
    match level {
        LogLevel::Error => padded.bright_red().bold(),
        LogLevel::Warning => padded.bright_yellow(),
        LogLevel::Info => padded.white(),
        LogLevel::Debug => padded.dimmed(),
    }
}

/// Print to stdout but ignore broken pipe errors
fn print_stdout_safe(message: &str) {
    if let Err(e) = writeln!(stdout(), "{}", message) {
        if e.kind() == ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        let _ = writeln!(std::io::stderr(), "Logger stdout error: {}", e);
    }
    let _ = stdout().flush();
}
