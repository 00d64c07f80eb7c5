use core::fmt;
use core::str::FromStr;

use crate::error::LoggerError;

/// Severity of a log line.
///
/// Levels are ordered by their numeric value, `TRACE` lowest and `ERROR` highest. Values outside
/// the five named levels are still valid: they compare numerically and carry an empty label, so
/// `Level::from(5)` as a threshold silences every named level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(i32);

impl Level {
    pub const TRACE: Level = Level(0);
    pub const DEBUG: Level = Level(1);
    pub const INFO: Level = Level(2);
    pub const WARN: Level = Level(3);
    pub const ERROR: Level = Level(4);

    /// The five named levels, lowest first.
    pub const ALL: [Level; 5] = [
        Level::TRACE, Level::DEBUG, Level::INFO, Level::WARN, Level::ERROR
    ];

    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i32 {
        self.0
    }

    /// The label written in front of every message at this level, e.g. `"[INFO] "`.
    ///
    /// Unknown levels have an empty label.
    pub const fn label(self) -> &'static str {
        match self.0 {
            0 => "[TRACE] ",
            1 => "[DEBUG] ",
            2 => "[INFO] ",
            3 => "[WARN] ",
            4 => "[ERROR] ",
            _ => "",
        }
    }

    /// The bare upper-case name, `None` for unknown levels.
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("TRACE"),
            1 => Some("DEBUG"),
            2 => Some("INFO"),
            3 => Some("WARN"),
            4 => Some("ERROR"),
            _ => None,
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::INFO
    }
}

impl From<i32> for Level {
    fn from(value: i32) -> Self {
        Level(value)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "LEVEL({})", self.0),
        }
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.name().is_some_and(|name| name.eq_ignore_ascii_case(s.trim())))
            .ok_or_else(|| LoggerError::UnknownLevel(s.to_string()))
    }
}
