//! Pattern layout engine
//!
//! Compiles a template string once into a list of literal runs and
//! pre-parsed directives, then replays the list per event. A directive has
//! the shape `%[padding][.truncation]conversionChar[{argument}]`:
//!
//! - `padding`: integer field width; negative left-justifies, positive
//!   right-justifies, both space-padded, applied after truncation
//! - `truncation`: `.N` keeps only the first N characters of the field
//! - conversion characters: `c` (category, optional `{precision}`),
//!   `d` (timestamp, optional `{format}`), `m` (message), `n` (newline),
//!   `p` (level name), `r` (short time of day), `%` (literal percent)
//!
//! Unrecognized conversion characters degrade to the literal matched text;
//! template compilation never fails.

use crate::core::event::LoggingEvent;
use chrono::{DateTime, Local};

/// Date rendering for the `%d` directive.
///
/// Named formats follow the conventional layouts; anything else is treated
/// as a date pattern over the tokens `yyyy`/`yy`, `MM`, `dd`, `hh`, `mm`,
/// `ss`, `SSS` (zero-padded milliseconds), and `O` (signed zone offset as
/// `±HHMM`), translated once into a chrono format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateFormat {
    /// `yyyy-MM-dd hh:mm:ss.SSS` (the default)
    Iso8601,
    /// `hh:mm:ss.SSS`
    Absolute,
    /// `dd MM yyyy hh:mm:ss.SSS`
    Date,
    /// A translated date pattern, stored in chrono's format language.
    Custom(String),
}

impl DateFormat {
    pub fn from_argument(argument: &str) -> Self {
        match argument {
            "ISO8601" => DateFormat::Iso8601,
            "ABSOLUTE" => DateFormat::Absolute,
            "DATE" => DateFormat::Date,
            pattern => DateFormat::Custom(translate_date_pattern(pattern)),
        }
    }

    fn chrono_format(&self) -> &str {
        match self {
            DateFormat::Iso8601 => "%Y-%m-%d %H:%M:%S.%3f",
            DateFormat::Absolute => "%H:%M:%S.%3f",
            DateFormat::Date => "%d %m %Y %H:%M:%S.%3f",
            DateFormat::Custom(format) => format,
        }
    }

    pub fn format(&self, timestamp: &DateTime<Local>) -> String {
        timestamp.format(self.chrono_format()).to_string()
    }
}

/// Translate a date pattern into chrono's format language. Non-token
/// characters pass through as literals (`%` escaped for chrono).
fn translate_date_pattern(pattern: &str) -> String {
    let mut output = String::with_capacity(pattern.len() + 4);
    let mut rest = pattern;

    while !rest.is_empty() {
        let (replacement, consumed) = if rest.starts_with("yyyy") {
            ("%Y", 4)
        } else if rest.starts_with("yy") {
            ("%y", 2)
        } else if rest.starts_with("MM") {
            ("%m", 2)
        } else if rest.starts_with("dd") {
            ("%d", 2)
        } else if rest.starts_with("hh") {
            ("%H", 2)
        } else if rest.starts_with("mm") {
            ("%M", 2)
        } else if rest.starts_with("SSS") {
            ("%3f", 3)
        } else if rest.starts_with("ss") {
            ("%S", 2)
        } else if rest.starts_with('O') {
            ("%z", 1)
        } else {
            let c = rest.chars().next().expect("rest is non-empty");
            if c == '%' {
                output.push_str("%%");
            } else {
                output.push(c);
            }
            rest = &rest[c.len_utf8()..];
            continue;
        };

        output.push_str(replacement);
        rest = &rest[consumed..];
    }

    output
}

#[derive(Debug, Clone, PartialEq)]
enum Conversion {
    Category { precision: Option<usize> },
    Timestamp(DateFormat),
    Message,
    Newline,
    LevelName,
    ShortTime,
    Percent,
}

#[derive(Debug, Clone, PartialEq)]
struct Directive {
    /// 0 means no padding; sign selects the justification.
    padding: i32,
    truncation: Option<usize>,
    conversion: Conversion,
}

impl Directive {
    fn render(&self, event: &LoggingEvent) -> String {
        let mut field = match &self.conversion {
            Conversion::Category { precision } => precise_category(&event.category, *precision),
            Conversion::Timestamp(format) => format.format(&event.timestamp),
            Conversion::Message => event.message.clone(),
            Conversion::Newline => "\n".to_string(),
            Conversion::LevelName => event.level.to_str().to_string(),
            Conversion::ShortTime => event.timestamp.format("%H:%M:%S").to_string(),
            Conversion::Percent => "%".to_string(),
        };

        // Truncation keeps the leading characters and runs before padding.
        if let Some(keep) = self.truncation {
            if field.chars().count() > keep {
                field = field.chars().take(keep).collect();
            }
        }

        pad(field, self.padding)
    }
}

fn pad(field: String, padding: i32) -> String {
    if padding == 0 {
        return field;
    }
    let width = padding.unsigned_abs() as usize;
    if field.chars().count() >= width {
        return field;
    }
    if padding < 0 {
        format!("{:<width$}", field)
    } else {
        format!("{:>width$}", field)
    }
}

/// Keep only the last `precision` dot-separated segments of the category.
fn precise_category(category: &str, precision: Option<usize>) -> String {
    match precision {
        Some(keep) if keep > 0 => {
            let segments: Vec<&str> = category.split('.').collect();
            if keep >= segments.len() {
                category.to_string()
            } else {
                segments[segments.len() - keep..].join(".")
            }
        }
        _ => category.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Piece {
    Literal(String),
    Directive(Directive),
}

/// A template compiled into replayable pieces.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternLayout {
    pieces: Vec<Piece>,
}

impl PatternLayout {
    /// Compile a template. Never fails: text that does not form a valid
    /// directive is kept as a literal run.
    pub fn parse(template: &str) -> Self {
        let chars: Vec<char> = template.chars().collect();
        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut position = 0;

        while position < chars.len() {
            if chars[position] != '%' {
                literal.push(chars[position]);
                position += 1;
                continue;
            }

            match parse_directive(&chars, position) {
                Ok((directive, next)) => {
                    if !literal.is_empty() {
                        pieces.push(Piece::Literal(std::mem::take(&mut literal)));
                    }
                    pieces.push(Piece::Directive(directive));
                    position = next;
                }
                Err(next) => {
                    literal.extend(&chars[position..next]);
                    position = next;
                }
            }
        }

        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }

        PatternLayout { pieces }
    }

    pub fn format(&self, event: &LoggingEvent) -> String {
        let mut output = String::new();
        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) => output.push_str(text),
                Piece::Directive(directive) => output.push_str(&directive.render(event)),
            }
        }
        output
    }
}

/// Parse one directive starting at the `%` in `chars[start]`. On success
/// returns the directive and the position past the consumed text; on
/// failure returns the position past the text that must be emitted
/// literally instead.
fn parse_directive(chars: &[char], start: usize) -> Result<(Directive, usize), usize> {
    let mut position = start + 1;

    // Optional padding: an integer, negative for left-justification.
    let mut padding = 0i32;
    let negative = position < chars.len() && chars[position] == '-';
    let digits_start = if negative { position + 1 } else { position };
    let digits_end = scan_digits(chars, digits_start);
    if digits_end > digits_start {
        let width: i32 = chars[digits_start..digits_end]
            .iter()
            .collect::<String>()
            .parse()
            .unwrap_or(0);
        padding = if negative { -width } else { width };
        position = digits_end;
    } else if negative {
        // A bare '-' is not a padding modifier.
        return Err((position + 1).min(chars.len()));
    }

    // Optional truncation: '.' followed by an integer.
    let mut truncation = None;
    if position < chars.len() && chars[position] == '.' {
        let digits_end = scan_digits(chars, position + 1);
        if digits_end == position + 1 {
            return Err(digits_end.min(chars.len()));
        }
        let keep: usize = chars[position + 1..digits_end]
            .iter()
            .collect::<String>()
            .parse()
            .unwrap_or(0);
        truncation = Some(keep);
        position = digits_end;
    }

    let Some(&conversion_char) = chars.get(position) else {
        return Err(chars.len());
    };
    position += 1;

    // Optional '{argument}', consumed for every directive and ignored
    // where it has no meaning.
    let mut argument = None;
    if chars.get(position) == Some(&'{') {
        if let Some(close) = chars[position + 1..].iter().position(|&c| c == '}') {
            let end = position + 1 + close;
            argument = Some(chars[position + 1..end].iter().collect::<String>());
            position = end + 1;
        }
    }

    let conversion = match conversion_char {
        'c' => Conversion::Category {
            precision: argument.as_deref().and_then(|a| a.trim().parse().ok()),
        },
        'd' => Conversion::Timestamp(
            argument
                .as_deref()
                .map(DateFormat::from_argument)
                .unwrap_or(DateFormat::Iso8601),
        ),
        'm' => Conversion::Message,
        'n' => Conversion::Newline,
        'p' => Conversion::LevelName,
        'r' => Conversion::ShortTime,
        '%' => Conversion::Percent,
        _ => return Err(position),
    };

    Ok((
        Directive {
            padding,
            truncation,
            conversion,
        },
        position,
    ))
}

fn scan_digits(chars: &[char], start: usize) -> usize {
    let mut end = start;
    while end < chars.len() && chars[end].is_ascii_digit() {
        end += 1;
    }
    end
}
