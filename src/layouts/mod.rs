//! Layouts render a logging event to text
//!
//! A layout is a pure function from [`LoggingEvent`] to a formatted string.
//! Three layouts exist: the pass-through layout (message only), the basic
//! layout (fixed timestamp/level/category prefix), and the pattern layout
//! (compiled from a `%`-directive template).

pub mod pattern;

pub use pattern::{DateFormat, PatternLayout};

use crate::core::event::LoggingEvent;

#[derive(Debug, Clone, Default)]
pub enum Layout {
    /// The event message, verbatim.
    MessagePassThrough,
    /// Fixed equivalent of the template `%d [%p] %c - %m`. When the event
    /// carries an error, a second line repeats the prefix followed by the
    /// error's stack text (or `name: message` without one).
    #[default]
    Basic,
    /// A compiled pattern template.
    Pattern(PatternLayout),
}

impl Layout {
    /// Compile a pattern template into a layout.
    pub fn pattern(template: &str) -> Self {
        Layout::Pattern(PatternLayout::parse(template))
    }

    pub fn format(&self, event: &LoggingEvent) -> String {
        match self {
            Layout::MessagePassThrough => event.message.clone(),
            Layout::Basic => basic(event),
            Layout::Pattern(layout) => layout.format(event),
        }
    }
}

fn basic(event: &LoggingEvent) -> String {
    let prefix = format!(
        "{} [{}] {} - ",
        DateFormat::Iso8601.format(&event.timestamp),
        event.level,
        event.category
    );

    let mut output = format!("{}{}", prefix, event.message);
    if let Some(ref error) = event.error {
        output.push('\n');
        output.push_str(&prefix);
        output.push_str(&error.render());
    }
    output
}
