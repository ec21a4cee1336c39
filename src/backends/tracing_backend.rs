//! Adapter onto `tracing`
//!
//! `tracing` fields need static names, so contract fields cannot become
//! individual event fields. Each event instead carries:
//!
//! - `logger`: the accumulated name
//! - `severity`: the contract level, which keeps DPANIC/PANIC/FATAL distinct
//!   from ERROR
//! - `caller`: `file:line` of the call site
//! - `fields`: the rendered field set, `k="v", n=1`
//!
//! Events go to the wrapped [`tracing::Dispatch`] regardless of the thread's
//! global default subscriber.

use crate::core::{
    caller::CallSite,
    contract::{join_name, BoxLogger, Logger},
    error::{LoggerError, Result},
    escalation::TerminationPolicy,
    field::{Field, FieldSet},
    format_error::format_to_error_at,
    level::Level,
};
use std::panic::Location;
use std::path::Path;
use std::sync::Arc;
use tracing::Dispatch;

macro_rules! emit {
    ($level:expr, $($rest:tt)+) => {
        match $level {
            Level::Debug => tracing::event!(tracing::Level::DEBUG, $($rest)+),
            Level::Info => tracing::event!(tracing::Level::INFO, $($rest)+),
            Level::Warn => tracing::event!(tracing::Level::WARN, $($rest)+),
            Level::Error | Level::DPanic | Level::Panic | Level::Fatal => {
                tracing::event!(tracing::Level::ERROR, $($rest)+)
            }
        }
    };
}

#[derive(Clone)]
pub struct TracingLogger {
    dispatch: Dispatch,
    dev_mode: bool,
    policy: TerminationPolicy,
    working_dir: Option<Arc<Path>>,
    name: String,
    fields: Arc<Vec<Field>>,
}

impl TracingLogger {
    /// Wrap an already-constructed dispatcher
    pub fn new(dispatch: Dispatch, dev_mode: bool) -> Self {
        Self {
            dispatch,
            dev_mode,
            policy: TerminationPolicy::Process,
            working_dir: std::env::current_dir().ok().map(Arc::from),
            name: String::new(),
            fields: Arc::new(Vec::new()),
        }
    }

    /// Wrap whatever dispatcher is the default for the current thread
    pub fn from_default(dev_mode: bool) -> Self {
        Self::new(tracing::dispatcher::get_default(Dispatch::clone), dev_mode)
    }

    #[must_use]
    pub fn with_termination_policy(mut self, policy: TerminationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn into_boxed(self) -> BoxLogger {
        Box::new(self)
    }
}

impl Logger for TracingLogger {
    fn named(&self, name: &str) -> BoxLogger {
        let mut child = self.clone();
        child.name = join_name(&self.name, name);
        Box::new(child)
    }

    fn with(&self, fields: &[Field]) -> BoxLogger {
        let mut child = self.clone();
        child.fields = Arc::new(FieldSet::new(&self.fields, fields).to_vec());
        Box::new(child)
    }

    fn sync(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn fields(&self) -> &[Field] {
        &self.fields
    }

    fn is_development(&self) -> bool {
        self.dev_mode
    }

    fn termination_policy(&self) -> TerminationPolicy {
        self.policy
    }

    #[track_caller]
    fn log(&self, level: Level, msg: &str, fields: &[Field]) {
        let caller = CallSite::resolve(Location::caller(), self.working_dir.as_deref())
            .map(|site| site.to_string())
            .unwrap_or_default();
        let rendered = FieldSet::new(&self.fields, fields).render();
        let name = self.name.as_str();
        let severity = level.as_str();

        tracing::dispatcher::with_default(&self.dispatch, || {
            emit!(
                level,
                logger = %name,
                severity = %severity,
                caller = %caller,
                fields = %rendered,
                "{}",
                msg
            )
        });
    }

    #[track_caller]
    fn error_return(&self, msg: &str, fields: &[Field]) -> LoggerError {
        let location = Location::caller();
        self.error(msg, fields);
        format_to_error_at(
            &self.name,
            Some(location),
            self.working_dir.as_deref(),
            msg,
            FieldSet::new(&self.fields, fields),
        )
    }
}
