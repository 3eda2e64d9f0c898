//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered log severity.
///
/// `All` and `Off` are sentinels: `All` ranks below every real level and
/// `Off` above every real level, so a logger thresholded at `All` accepts
/// everything and one thresholded at `Off` accepts nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Level {
    All = 0,
    #[default]
    Trace = 1,
    Debug = 2,
    Info = 3,
    Warn = 4,
    Error = 5,
    Fatal = 6,
    Off = 7,
}

impl Level {
    /// Numeric rank of this level. Comparisons are by rank only.
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Level::All => "ALL",
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
            Level::Off => "OFF",
        }
    }

    /// Case-insensitive name lookup that degrades to `default` when the
    /// name is absent or unrecognized. Never fails.
    pub fn to_level(name: Option<&str>, default: Level) -> Level {
        match name {
            Some(s) => s.parse().unwrap_or(default),
            None => default,
        }
    }

    /// `true` iff this level's rank is less than or equal to `other`'s.
    pub fn is_at_most(&self, other: Level) -> bool {
        *self <= other
    }

    /// `true` iff this level's rank is greater than or equal to `other`'s.
    pub fn is_at_least(&self, other: Level) -> bool {
        *self >= other
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Level::All | Level::Trace => BrightBlack,
            Level::Debug => Blue,
            Level::Info => Green,
            Level::Warn => Yellow,
            Level::Error => Red,
            Level::Fatal => BrightRed,
            Level::Off => White,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ALL" => Ok(Level::All),
            "TRACE" => Ok(Level::Trace),
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "ERROR" => Ok(Level::Error),
            "FATAL" => Ok(Level::Fatal),
            "OFF" => Ok(Level::Off),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_LEVELS: [Level; 8] = [
        Level::All,
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
        Level::Off,
    ];

    #[test]
    fn test_rank_ordering() {
        for pair in ALL_LEVELS.windows(2) {
            assert!(pair[0].rank() < pair[1].rank());
            assert!(pair[0].is_at_most(pair[1]));
            assert!(!pair[1].is_at_most(pair[0]));
            assert!(pair[1].is_at_least(pair[0]));
        }
    }

    #[test]
    fn test_sentinels() {
        for level in ALL_LEVELS {
            assert!(Level::All.is_at_most(level));
            assert!(Level::Off.is_at_least(level));
        }
    }

    #[test]
    fn test_comparison_is_reflexive() {
        for level in ALL_LEVELS {
            assert!(level.is_at_most(level));
            assert!(level.is_at_least(level));
        }
    }

    #[test]
    fn test_to_level_known_names() {
        assert_eq!(Level::to_level(Some("info"), Level::Trace), Level::Info);
        assert_eq!(Level::to_level(Some("WARN"), Level::Trace), Level::Warn);
        assert_eq!(Level::to_level(Some("Warning"), Level::Trace), Level::Warn);
        assert_eq!(Level::to_level(Some("off"), Level::Trace), Level::Off);
    }

    #[test]
    fn test_to_level_falls_back_to_default() {
        assert_eq!(Level::to_level(Some("verbose"), Level::Info), Level::Info);
        assert_eq!(Level::to_level(Some(""), Level::Debug), Level::Debug);
        assert_eq!(Level::to_level(None, Level::Error), Level::Error);
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(Level::Info.to_string(), "INFO");
        assert_eq!(Level::All.to_string(), "ALL");
        assert_eq!(format!("{}", Level::Fatal), "FATAL");
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("loud".parse::<Level>().is_err());
    }
}
