//! Core logger types and traits

pub mod caller;
pub mod config;
pub mod contract;
pub mod error;
pub mod escalation;
pub mod field;
pub mod format_error;
pub mod level;
pub mod sink;
pub mod std_logger;
pub mod timestamp;

pub use caller::CallSite;
pub use config::LoggerConfig;
pub use contract::{join_name, BoxLogger, Logger};
pub use error::{LoggerError, Result};
pub use escalation::{Escalation, TerminationPolicy};
pub use field::{field, Field, FieldSet, FieldValue};
pub use format_error::{format_to_error, format_to_error_at};
pub use level::Level;
pub use sink::{CaptureBuffer, SharedWriter};
pub use std_logger::{StdLogger, StdLoggerBuilder};
pub use timestamp::MonotonicClock;
