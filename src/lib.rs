//! # Category Logger
//!
//! A category-based Rust logging framework: named loggers are fetched from
//! a process-scoped registry, gate calls by severity, and fan each accepted
//! event out to pluggable appenders rendered through pluggable layouts.
//!
//! ## Features
//!
//! - **Named Loggers**: One cached logger per category, created on first use
//! - **Deferred Binding**: Appenders may be registered before their target
//!   logger exists, including a wildcard binding for every category
//! - **Pattern Layouts**: Templates compiled once, replayed per event
//! - **Thread Safe**: Registry and loggers are shared safely across threads
//!
//! ## Example
//!
//! ```
//! use category_logger::prelude::*;
//!
//! let registry = Registry::new();
//! registry.add_appender(shared(ConsoleAppender::new()), &[]);
//!
//! let logger = registry.get_logger("server");
//! logger.info("listening on port 8080")?;
//! # Ok::<(), category_logger::LoggerError>(())
//! ```

pub mod appenders;
pub mod config;
pub mod core;
pub mod layouts;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender, LevelFilter};
    pub use crate::config::{AppenderConfig, CategorySelector, Config, LayoutConfig};
    pub use crate::core::{
        shared, Appender, AppenderHandle, ErrorInfo, Level, Logger, LoggerError, LoggingEvent,
        Registry, Result, ALL_CATEGORIES, DEFAULT_CATEGORY,
    };
    pub use crate::layouts::{DateFormat, Layout, PatternLayout};
}

pub use appenders::{ConsoleAppender, FileAppender, LevelFilter};
pub use config::{AppenderConfig, CategorySelector, Config, LayoutConfig};
pub use layouts::{DateFormat, Layout, PatternLayout};
pub use self::core::{
    shared, Appender, AppenderHandle, ErrorInfo, Level, Logger, LoggerError, LoggingEvent,
    Registry, Result, ALL_CATEGORIES, DEFAULT_CATEGORY,
};
