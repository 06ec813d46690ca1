//! Backend log sink

use std::sync::Arc;

/// Where the backend reports operational events
///
/// The backend only ever passes metadata here (mount, path, sizes, error
/// text). Secret values and caller tokens never reach a `Logger`.
///
/// `Backend` defaults to [`TracingLogger`](super::TracingLogger); hosts that
/// collect logs elsewhere install their own through `Backend::with_logger`.
pub trait Logger: Send + Sync {
    /// Cache resets and other routine state changes
    fn debug(&self, message: &str);

    /// Write confirmations
    fn info(&self, message: &str);

    fn warn(&self, message: &str);

    /// Hard failures, e.g. an entry that no longer decodes
    fn error(&self, message: &str);
}

/// Logger shared between the backend and the host
pub type SharedLogger = Arc<dyn Logger>;

/// Format-on-demand helpers behind the `log_*!` macros
///
/// Blanket-implemented for every `Logger`, including `dyn Logger`.
pub trait LoggerExt: Logger {
    fn debug_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.debug(&args.to_string());
    }

    fn info_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.info(&args.to_string());
    }

    fn warn_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.warn(&args.to_string());
    }

    fn error_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.error(&args.to_string());
    }
}

impl<T: Logger + ?Sized> LoggerExt for T {}

/// `log_*!(logger, "fmt", args..)`; `logger` is anything that derefs to a `Logger`
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $crate::logging::LoggerExt::debug_fmt(&*$logger, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $crate::logging::LoggerExt::info_fmt(&*$logger, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $crate::logging::LoggerExt::warn_fmt(&*$logger, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $crate::logging::LoggerExt::error_fmt(&*$logger, format_args!($($arg)*))
    };
}
