//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. Each expands to
//! the corresponding logger call and evaluates to its `Result`, so a
//! failing appender surfaces at the call site.
//!
//! # Examples
//!
//! ```
//! use category_logger::prelude::*;
//! use category_logger::info;
//!
//! let logger = Logger::new("server");
//!
//! // Basic logging
//! info!(logger, "Server started")?;
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port)?;
//! # Ok::<(), category_logger::LoggerError>(())
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use category_logger::prelude::*;
/// # let logger = Logger::new("demo");
/// use category_logger::log;
/// log!(logger, Level::Info, "Simple message")?;
/// log!(logger, Level::Error, "Error code: {}", 500)?;
/// # Ok::<(), category_logger::LoggerError>(())
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a trace-level message.
///
/// # Examples
///
/// ```
/// # use category_logger::prelude::*;
/// # let logger = Logger::new("demo");
/// use category_logger::trace;
/// trace!(logger, "Entering function: calculate()")?;
/// trace!(logger, "Variable value: {}", 42)?;
/// # Ok::<(), category_logger::LoggerError>(())
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::Level::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use category_logger::prelude::*;
/// # let logger = Logger::new("demo");
/// use category_logger::debug;
/// debug!(logger, "Counter value: {}", 10)?;
/// # Ok::<(), category_logger::LoggerError>(())
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use category_logger::prelude::*;
/// # let logger = Logger::new("demo");
/// use category_logger::info;
/// info!(logger, "Processing {} items", 100)?;
/// # Ok::<(), category_logger::LoggerError>(())
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use category_logger::prelude::*;
/// # let logger = Logger::new("demo");
/// use category_logger::warn;
/// warn!(logger, "Retry attempt {} of {}", 3, 5)?;
/// # Ok::<(), category_logger::LoggerError>(())
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::Level::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use category_logger::prelude::*;
/// # let logger = Logger::new("demo");
/// use category_logger::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error")?;
/// # Ok::<(), category_logger::LoggerError>(())
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::Level::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
///
/// # Examples
///
/// ```
/// # use category_logger::prelude::*;
/// # let logger = Logger::new("demo");
/// use category_logger::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full")?;
/// # Ok::<(), category_logger::LoggerError>(())
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::Level::Fatal, $($arg)+)
    };
}
