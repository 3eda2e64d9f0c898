//! Logging event structure

use super::level::Level;
use super::logger::Logger;
use chrono::{DateTime, Local};
use std::sync::Weak;

/// Error details attached to a logging event.
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    pub name: String,
    pub message: String,
    pub stack: Option<String>,
}

impl ErrorInfo {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            stack: None,
        }
    }

    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    /// Capture an error's type name and display message.
    pub fn from_error<E: std::error::Error>(error: &E) -> Self {
        let name = std::any::type_name::<E>()
            .rsplit("::")
            .next()
            .unwrap_or("Error");
        Self::new(name, error.to_string())
    }

    /// Text used by layouts: the stack trace when present, otherwise
    /// `name: message`.
    pub fn render(&self) -> String {
        match &self.stack {
            Some(stack) => stack.clone(),
            None => format!("{}: {}", self.name, self.message),
        }
    }
}

/// Immutable snapshot of one accepted log call.
///
/// Captured at log-call time (not emit time), fanned out synchronously to
/// the logger's appenders, and dropped afterwards. The `source` reference
/// is non-owning: an event can never keep a logger alive.
#[derive(Debug, Clone)]
pub struct LoggingEvent {
    pub timestamp: DateTime<Local>,
    pub category: String,
    pub level: Level,
    pub message: String,
    pub error: Option<ErrorInfo>,
    pub source: Weak<Logger>,
}

impl LoggingEvent {
    pub fn new(
        category: impl Into<String>,
        level: Level,
        message: impl Into<String>,
        error: Option<ErrorInfo>,
        source: Weak<Logger>,
    ) -> Self {
        Self {
            timestamp: Local::now(),
            category: category.into(),
            level,
            message: message.into(),
            error,
            source,
        }
    }
}
