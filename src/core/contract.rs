//! The backend-agnostic logger contract
//!
//! [`Logger`] is the capability set every backend implements. Derivation
//! (`named`, `with`) is pure: it returns a new logger and never touches the
//! receiver, so siblings derived from one parent cannot observe each other.
//! The only side effects live in the emission methods.
//!
//! All emission methods are `#[track_caller]`; implementations read the call
//! site with `std::panic::Location::caller()`.

use super::error::{LoggerError, Result};
use super::escalation::{Escalation, TerminationPolicy};
use super::field::Field;
use super::level::Level;
use std::sync::Arc;

/// Owned, type-erased logger returned by derivations
pub type BoxLogger = Box<dyn Logger>;

/// Separator between hierarchical name segments
pub const NAME_SEPARATOR: char = '.';

/// Append `segment` to `parent`, joined with `.`, then normalize to upper case
pub fn join_name(parent: &str, segment: &str) -> String {
    let joined = if parent.is_empty() {
        segment.to_string()
    } else {
        format!("{}{}{}", parent, NAME_SEPARATOR, segment)
    };
    joined.to_uppercase()
}

/// Leveled, structured logging over an arbitrary backend
pub trait Logger: Send + Sync {
    /// Add a path segment to the logger's name. Loggers are unnamed by default.
    fn named(&self, name: &str) -> BoxLogger;

    /// Child logger carrying the receiver's fields followed by `fields`
    fn with(&self, fields: &[Field]) -> BoxLogger;

    /// Flush buffered entries; call before the process exits
    fn sync(&self) -> Result<()>;

    /// Accumulated hierarchical name, empty when unnamed
    fn name(&self) -> &str;

    /// Accumulated fields in declaration order
    fn fields(&self) -> &[Field];

    /// Whether `dpanic` escalates
    fn is_development(&self) -> bool;

    fn termination_policy(&self) -> TerminationPolicy;

    /// Write one entry at `level`, unless the backend filters it
    #[track_caller]
    fn log(&self, level: Level, msg: &str, fields: &[Field]);

    /// Log at Error level and return an error carrying the same information
    #[track_caller]
    fn error_return(&self, msg: &str, fields: &[Field]) -> LoggerError;

    #[track_caller]
    fn debug(&self, msg: &str, fields: &[Field]) {
        self.log(Level::Debug, msg, fields);
    }

    #[track_caller]
    fn info(&self, msg: &str, fields: &[Field]) {
        self.log(Level::Info, msg, fields);
    }

    #[track_caller]
    fn warn(&self, msg: &str, fields: &[Field]) {
        self.log(Level::Warn, msg, fields);
    }

    #[track_caller]
    fn error(&self, msg: &str, fields: &[Field]) {
        self.log(Level::Error, msg, fields);
    }

    /// Log at DPanic level, then escalate if the logger is in development mode
    ///
    /// Escalation happens even when DPanic is below the minimum level.
    #[track_caller]
    fn dpanic(&self, msg: &str, fields: &[Field]) -> std::result::Result<(), Escalation> {
        self.log(Level::DPanic, msg, fields);
        if self.is_development() {
            self.termination_policy().escalate(Escalation::panic(msg))
        } else {
            Ok(())
        }
    }

    /// Log at Panic level, then escalate unconditionally
    #[track_caller]
    fn panic(&self, msg: &str, fields: &[Field]) -> std::result::Result<(), Escalation> {
        self.log(Level::Panic, msg, fields);
        self.termination_policy().escalate(Escalation::panic(msg))
    }

    /// Log at Fatal level, flush, then terminate unconditionally
    ///
    /// Under [`TerminationPolicy::Process`] this ends the whole process.
    #[track_caller]
    fn fatal(&self, msg: &str, fields: &[Field]) -> std::result::Result<(), Escalation> {
        self.log(Level::Fatal, msg, fields);
        let _ = self.sync();
        self.termination_policy().escalate(Escalation::fatal(msg))
    }
}

macro_rules! forward_logger {
    ($ty:ty) => {
        impl<L: Logger + ?Sized> Logger for $ty {
            fn named(&self, name: &str) -> BoxLogger {
                (**self).named(name)
            }

            fn with(&self, fields: &[Field]) -> BoxLogger {
                (**self).with(fields)
            }

            fn sync(&self) -> Result<()> {
                (**self).sync()
            }

            fn name(&self) -> &str {
                (**self).name()
            }

            fn fields(&self) -> &[Field] {
                (**self).fields()
            }

            fn is_development(&self) -> bool {
                (**self).is_development()
            }

            fn termination_policy(&self) -> TerminationPolicy {
                (**self).termination_policy()
            }

            #[track_caller]
            fn log(&self, level: Level, msg: &str, fields: &[Field]) {
                (**self).log(level, msg, fields)
            }

            #[track_caller]
            fn error_return(&self, msg: &str, fields: &[Field]) -> LoggerError {
                (**self).error_return(msg, fields)
            }

            #[track_caller]
            fn dpanic(&self, msg: &str, fields: &[Field]) -> std::result::Result<(), Escalation> {
                (**self).dpanic(msg, fields)
            }

            #[track_caller]
            fn panic(&self, msg: &str, fields: &[Field]) -> std::result::Result<(), Escalation> {
                (**self).panic(msg, fields)
            }

            #[track_caller]
            fn fatal(&self, msg: &str, fields: &[Field]) -> std::result::Result<(), Escalation> {
                (**self).fatal(msg, fields)
            }
        }
    };
}

forward_logger!(Box<L>);
forward_logger!(Arc<L>);
