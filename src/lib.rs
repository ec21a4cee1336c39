//! # Rust Logger Facade
//!
//! A backend-agnostic structured logging contract. Applications and libraries
//! log through [`Logger`]; the backend behind it can be swapped without
//! touching call sites.
//!
//! ## Features
//!
//! - **One Contract**: naming, field accumulation, leveled emission,
//!   `error_return`, and panic/fatal escalation behave the same on every backend
//! - **Standard Backend**: [`StdLogger`] writes fixed-format lines with caller
//!   locations and needs no logging framework
//! - **Adapters**: [`backends::LogCrateLogger`] for the `log` crate and
//!   [`backends::TracingLogger`] for `tracing`
//! - **Testable Escalation**: [`TerminationPolicy::Propagate`] turns panics
//!   and process exits into returned values
//!
//! ```
//! use rust_logger_facade::prelude::*;
//!
//! let (sink, captured) = SharedWriter::buffer();
//! let root = StdLogger::builder().out_sink(sink).build()?;
//!
//! let db = root.named("svc").named("db").with(&[field("table", "users")]);
//! db.info("upserted", &[field("rows", 3)]);
//!
//! assert!(captured.contents().contains(r#"SVC.DB"#));
//! assert!(captured.contents().contains(r#"upserted (table="users", rows=3)"#));
//! # Ok::<(), LoggerError>(())
//! ```

pub mod backends;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        field, BoxLogger, CaptureBuffer, Escalation, Field, FieldValue, Level, Logger,
        LoggerConfig, LoggerError, Result, SharedWriter, StdLogger, StdLoggerBuilder,
        TerminationPolicy,
    };
}

pub use crate::core::{
    field, format_to_error, format_to_error_at, join_name, BoxLogger, CallSite, CaptureBuffer,
    Escalation, Field, FieldSet, FieldValue, Level, Logger, LoggerConfig, LoggerError,
    MonotonicClock, Result, SharedWriter, StdLogger, StdLoggerBuilder, TerminationPolicy,
};
