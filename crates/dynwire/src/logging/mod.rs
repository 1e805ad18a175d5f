// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Compile-time configurable logging.
//!
//! The crate exports four severity macros at its root: `debug!()`,
//! `info!()`, `warn!()` and `error!()`. Arguments are captured as
//! `format_args!`, handed to the installed [`Output`] through a
//! lock-free global, and only rendered once the level filter passes;
//! with no logger installed a call costs one atomic load. Building
//! without the `logging` cargo feature removes the machinery entirely
//! and the macros expand to nothing.
//!
//! The runtime reports its recoverable failures (type mismatches,
//! malformed pointers, unimplemented operations) through `error!()`,
//! so installing an output is how a host observes them.
//!
//! ## Example
//!
//! ```ignore
//! use dynwire::logging::{init_logger, ConsoleOutput, LogLevel};
//! use std::sync::Arc;
//!
//! init_logger(Arc::new(ConsoleOutput::new(LogLevel::Debug)), LogLevel::Debug);
//! info!("pool ready with {} nodes", count);
//! ```

#[cfg(feature = "logging")]
pub mod logger;
#[cfg(feature = "logging")]
mod output;

#[cfg(feature = "logging")]
pub use logger::{flush_logger, init_logger};
#[cfg(feature = "logging")]
pub use output::{ConsoleOutput, FileOutput, LogLevel, Output};

/// Emit one record through the installed logger at the given level.
/// Shared expansion for the four severity macros.
#[doc(hidden)]
#[macro_export]
#[cfg(feature = "logging")]
macro_rules! __log_at {
    ($level:ident, $($arg:tt)*) => {
        let _ = $crate::logging::logger::log(
            $crate::logging::LogLevel::$level,
            ::std::format_args!($($arg)*),
        );
    };
}

/// Debug-level log message; formats like `println!()`.
#[macro_export]
#[cfg(feature = "logging")]
macro_rules! debug {
    ($($arg:tt)*) => { $crate::__log_at!(Debug, $($arg)*); };
}

/// Info-level log message; formats like `println!()`.
#[macro_export]
#[cfg(feature = "logging")]
macro_rules! info {
    ($($arg:tt)*) => { $crate::__log_at!(Info, $($arg)*); };
}

/// Warning-level log message; formats like `println!()`.
#[macro_export]
#[cfg(feature = "logging")]
macro_rules! warn {
    ($($arg:tt)*) => { $crate::__log_at!(Warning, $($arg)*); };
}

/// Error-level log message; formats like `println!()`. The runtime's
/// recoverable validation failures are reported here.
#[macro_export]
#[cfg(feature = "logging")]
macro_rules! error {
    ($($arg:tt)*) => { $crate::__log_at!(Error, $($arg)*); };
}

/// Function entry trace marker, active with `logging` + `trace`.
#[macro_export]
#[cfg(all(feature = "logging", feature = "trace"))]
macro_rules! trace_fn {
    ($fn_name:expr) => {
        let _ = $crate::logging::logger::trace_entry($fn_name);
    };
}

/// No-op trace marker (when `trace` is disabled).
#[macro_export]
#[cfg(not(all(feature = "logging", feature = "trace")))]
macro_rules! trace_fn {
    ($fn_name:expr) => {};
}

/// No-op debug macro (when `logging` is disabled).
#[macro_export]
#[cfg(not(feature = "logging"))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

/// No-op info macro (when `logging` is disabled).
#[macro_export]
#[cfg(not(feature = "logging"))]
macro_rules! info {
    ($($arg:tt)*) => {};
}

/// No-op warn macro (when `logging` is disabled).
#[macro_export]
#[cfg(not(feature = "logging"))]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

/// No-op error macro (when `logging` is disabled).
#[macro_export]
#[cfg(not(feature = "logging"))]
macro_rules! error {
    ($($arg:tt)*) => {};
}
