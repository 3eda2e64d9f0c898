//! Appender implementations

pub mod console;
pub mod file;
pub mod level_filter;

pub use console::ConsoleAppender;
pub use file::FileAppender;
pub use level_filter::LevelFilter;

// Re-export the trait for convenience
pub use crate::core::Appender;
