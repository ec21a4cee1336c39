//! Adapters that implement the contract on top of third-party loggers
//!
//! Each adapter wraps an already-constructed backend value and tracks the
//! accumulated name and fields itself, so naming, field accumulation,
//! `error_return` and escalation behave exactly as on [`StdLogger`].
//!
//! [`StdLogger`]: crate::core::StdLogger

#[cfg(feature = "log-backend")]
pub mod log_backend;
#[cfg(feature = "tracing-backend")]
pub mod tracing_backend;

#[cfg(feature = "log-backend")]
pub use log_backend::LogCrateLogger;
#[cfg(feature = "tracing-backend")]
pub use tracing_backend::TracingLogger;
