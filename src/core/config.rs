//! Serializable logger settings
//!
//! `LoggerConfig` is plain data: it can be embedded in an application's own
//! configuration file and handed to [`StdLoggerBuilder::config`].
//!
//! [`StdLoggerBuilder::config`]: crate::core::std_logger::StdLoggerBuilder::config

use super::error::Result;
use super::escalation::TerminationPolicy;
use super::level::Level;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Minimum level written to the output sink, e.g. `"warn"`
    pub min_level: String,
    /// Whether `dpanic` escalates
    pub dev_mode: bool,
    /// Suppress every write
    pub disabled: bool,
    /// Include `file:line` in lines
    pub caller: bool,
    /// Colorize the level column
    pub colors: bool,
    pub termination: TerminationPolicy,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: Level::Debug.as_str().to_string(),
            dev_mode: true,
            disabled: false,
            caller: true,
            colors: false,
            termination: TerminationPolicy::Process,
        }
    }
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
