//! Severity levels that gate which records reach which handlers.

use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so handlers can compare a record's level against their severity range.
///
/// Discriminants follow the conventional 10-step scale so ordinals stay comparable with
/// other logging systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Level {
    /// Diagnostic output for developers. Never translated.
    Debug = 10,
    /// Normal operational milestones.
    #[default]
    Info = 20,
    /// Non-fatal anomalies that may need attention.
    Warning = 30,
    /// Failures that prevent an operation from completing.
    Error = 40,
    /// Failures that leave the application unable to continue.
    Critical = 50,
}

impl Level {
    /// Upper-case because this is the label rendered inside `[...]` tags.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Level::ordinal`]. Values between steps round up to the next level,
    /// anything above `CRITICAL` saturates.
    #[must_use]
    pub const fn from_ordinal(value: u8) -> Self {
        match value {
            0..=10 => Self::Debug,
            11..=20 => Self::Info,
            21..=30 => Self::Warning,
            31..=40 => Self::Error,
            _ => Self::Critical,
        }
    }

    /// Used by help output, CLI value parsing, and tests.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Debug,
            Self::Info,
            Self::Warning,
            Self::Error,
            Self::Critical,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" | "err" => Ok(Self::Error),
            "critical" | "crit" | "fatal" => Ok(Self::Critical),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

pub const DEBUG: Level = Level::Debug;
pub const INFO: Level = Level::Info;
