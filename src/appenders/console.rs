//! Console appender implementation

use crate::core::{Appender, Level, LoggingEvent, Result};
use crate::layouts::Layout;
use colored::Colorize;

pub struct ConsoleAppender {
    layout: Layout,
    use_colors: bool,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            layout: Layout::default(),
            use_colors: true,
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            layout: Layout::default(),
            use_colors,
        }
    }

    /// Set the layout for this appender
    ///
    /// # Example
    ///
    /// ```
    /// use category_logger::appenders::ConsoleAppender;
    /// use category_logger::layouts::Layout;
    ///
    /// let appender = ConsoleAppender::new()
    ///     .with_layout(Layout::pattern("%-5p %c - %m"));
    /// ```
    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, event: &LoggingEvent) -> Result<()> {
        let line = self.layout.format(event);
        let line = if self.use_colors {
            line.color(event.level.color_code()).to_string()
        } else {
            line
        };

        // Route Error and Fatal levels to stderr, others to stdout
        match event.level {
            Level::Error | Level::Fatal => eprintln!("{}", line),
            _ => println!("{}", line),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
