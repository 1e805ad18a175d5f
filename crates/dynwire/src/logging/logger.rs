// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Process-wide logger state.
//!
//! One [`Output`] plus a minimum level, installed at most once for the
//! process lifetime. Installation goes through a `OnceLock`, so reads
//! on the logging path take no lock; outputs synchronize themselves.
//! Messages arrive as `fmt::Arguments` and are only rendered to a
//! string after the level filter passes, so a filtered-out or
//! pre-installation message never allocates.

use super::output::{LogLevel, Output};
use std::fmt;
use std::io;
use std::sync::{Arc, OnceLock};

struct Logger {
    output: Arc<dyn Output>,
    min_level: LogLevel,
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Install the process-wide logger. The first call wins; later calls
/// are ignored, so a library and its host cannot race each other into
/// a panic by both initializing.
pub fn init_logger(output: Arc<dyn Output>, min_level: LogLevel) {
    let _ = LOGGER.set(Logger { output, min_level });
}

/// Render and write one message. Called by the logging macros; a no-op
/// until a logger is installed.
#[inline]
pub(crate) fn log(level: LogLevel, args: fmt::Arguments<'_>) -> io::Result<()> {
    match LOGGER.get() {
        Some(logger) if level >= logger.min_level => {
            logger.output.write(level, &args.to_string())
        }
        _ => Ok(()),
    }
}

/// Write a function entry marker (used by `trace_fn!`).
#[inline]
#[cfg(feature = "trace")]
pub(crate) fn trace_entry(fn_name: &str) -> io::Result<()> {
    log(LogLevel::Debug, format_args!("[ENTER:FNC] {}", fn_name))
}

/// Flush the installed output; safe before installation.
pub fn flush_logger() -> io::Result<()> {
    match LOGGER.get() {
        Some(logger) => logger.output.flush(),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::output::ConsoleOutput;

    #[test]
    fn test_log_without_install_is_noop() {
        assert!(log(LogLevel::Info, format_args!("before install")).is_ok());
        assert!(flush_logger().is_ok());
    }

    #[test]
    fn test_second_install_is_ignored() {
        init_logger(
            Arc::new(ConsoleOutput::new(LogLevel::Info)),
            LogLevel::Info,
        );
        // Re-installation must not panic and must leave logging usable.
        init_logger(
            Arc::new(ConsoleOutput::new(LogLevel::Debug)),
            LogLevel::Debug,
        );
        assert!(log(LogLevel::Error, format_args!("still works")).is_ok());
        assert!(flush_logger().is_ok());
    }

    #[test]
    fn test_filtered_message_reports_success() {
        init_logger(
            Arc::new(ConsoleOutput::new(LogLevel::Info)),
            LogLevel::Info,
        );
        // Dropped by the filter (or by no logger being installed when
        // tests race): either way the call succeeds silently.
        assert!(log(LogLevel::Debug, format_args!("dropped")).is_ok());
    }
}
