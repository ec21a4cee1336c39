//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width of the level column in standard log lines
pub const LEVEL_COLUMN_WIDTH: usize = 6;

/// A logging priority. Higher levels are more important.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(i8)]
pub enum Level {
    /// Voluminous output, usually disabled in production
    Debug = -1,
    #[default]
    Info = 0,
    /// More important than Info, but without individual human review
    Warn = 1,
    /// High priority; a healthy application should not produce these
    Error = 2,
    /// Particularly important errors. In development the logger panics after writing.
    DPanic = 3,
    /// Logs, then panics
    Panic = 4,
    /// Logs, then terminates the process
    Fatal = 5,
}

impl Level {
    pub const ALL: [Level; 7] = [
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::DPanic,
        Level::Panic,
        Level::Fatal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::DPanic => "DPANIC",
            Level::Panic => "PANIC",
            Level::Fatal => "FATAL",
        }
    }

    /// Display token for a raw level value; `"UNKNOWN"` outside the defined range
    pub fn name_of(raw: i8) -> &'static str {
        Level::from_raw(raw).map_or("UNKNOWN", |level| level.as_str())
    }

    pub fn from_raw(raw: i8) -> Option<Level> {
        Level::ALL.into_iter().find(|level| *level as i8 == raw)
    }

    /// Token left-aligned to the level column width
    pub fn padded(&self) -> String {
        format!("{:<width$}", self.as_str(), width = LEVEL_COLUMN_WIDTH)
    }

    #[cfg(feature = "console")]
    pub fn color(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Level::Debug => Magenta,
            Level::Info => Blue,
            Level::Warn => Yellow,
            Level::Error | Level::DPanic | Level::Panic => Red,
            Level::Fatal => BrightRed,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "ERROR" => Ok(Level::Error),
            "DPANIC" => Ok(Level::DPanic),
            "PANIC" => Ok(Level::Panic),
            "FATAL" => Ok(Level::Fatal),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
