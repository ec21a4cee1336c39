//! Standard logger implementation
//!
//! [`StdLogger`] formats one line per call and writes it straight to its
//! output sink; nothing is buffered or queued. A line looks like:
//!
//! ```text
//! 2025-01-08T10:30:45.123456Z         INFO   SVC.DB src/db.rs:42 upserted (table="users", rows=3)
//! ```

use super::{
    caller::{current_working_dir, CallSite},
    config::LoggerConfig,
    contract::{join_name, BoxLogger, Logger},
    error::{LoggerError, Result},
    escalation::TerminationPolicy,
    field::{Field, FieldSet},
    format_error::{format_to_error_at, sanitize_message},
    level::Level,
    sink::SharedWriter,
    timestamp::{format_padded, MonotonicClock},
};
use chrono::{DateTime, Utc};
use std::io::Write;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct StdLogger {
    out: SharedWriter,
    err: SharedWriter,
    clock: Arc<MonotonicClock>,
    working_dir: Option<Arc<Path>>,
    min_level: Level,
    dev_mode: bool,
    disabled: bool,
    caller: bool,
    colors: bool,
    policy: TerminationPolicy,
    name: String,
    fields: Arc<Vec<Field>>,
}

impl StdLogger {
    /// Root logger with every option at its default
    #[must_use]
    pub fn new() -> Self {
        Self::builder().must_build()
    }

    /// Create a builder for StdLogger
    ///
    /// # Example
    /// ```
    /// use rust_logger_facade::prelude::*;
    ///
    /// let logger = StdLogger::builder()
    ///     .min_level(Level::Warn)
    ///     .is_in_dev_environment(false)
    ///     .build()?;
    /// logger.warn("disk almost full", &[field("free_mb", 120)]);
    /// # Ok::<(), LoggerError>(())
    /// ```
    #[must_use]
    pub fn builder() -> StdLoggerBuilder {
        StdLoggerBuilder::new()
    }

    pub fn into_boxed(self) -> BoxLogger {
        Box::new(self)
    }

    pub fn min_level(&self) -> Level {
        self.min_level
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    /// Render the line `log` would write for the given inputs
    pub fn render_line(
        &self,
        timestamp: &DateTime<Utc>,
        level: Level,
        caller: Option<&CallSite>,
        msg: &str,
        fields: FieldSet<'_>,
    ) -> String {
        let mut line = format_padded(timestamp);
        line.push(' ');
        line.push_str(&self.level_token(level));
        line.push(' ');

        if !self.name.is_empty() {
            line.push_str(&self.name);
            line.push(' ');
        }
        if let Some(site) = caller {
            line.push_str(&site.to_string());
            line.push(' ');
        }

        line.push_str(&sanitize_message(msg));
        line.push_str(&fields.render_suffix());
        line.push('\n');
        line
    }

    /// Escape codes are emitted whenever colors are on, whatever the sink is
    #[cfg(feature = "console")]
    fn level_token(&self, level: Level) -> String {
        if self.colors {
            format!("\x1b[1;{}m{}\x1b[0m", level.color().to_fg_str(), level.padded())
        } else {
            level.padded()
        }
    }

    #[cfg(not(feature = "console"))]
    fn level_token(&self, level: Level) -> String {
        level.padded()
    }

    fn resolve_caller(&self, location: &Location<'_>) -> Option<CallSite> {
        if !self.caller {
            return None;
        }

        let site = CallSite::resolve(location, self.working_dir());
        if site.is_none() {
            self.report("logger: failed to resolve caller location\n");
        }
        site
    }

    /// Self-diagnostics go to the error sink and are never escalated
    fn report(&self, diagnostic: &str) {
        let _ = self.err.write_all(diagnostic.as_bytes());
    }

    fn derive(&self) -> Self {
        self.clone()
    }
}

impl Default for StdLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for StdLogger {
    fn named(&self, name: &str) -> BoxLogger {
        let mut child = self.derive();
        child.name = join_name(&self.name, name);
        Box::new(child)
    }

    fn with(&self, fields: &[Field]) -> BoxLogger {
        let mut child = self.derive();
        child.fields = Arc::new(FieldSet::new(&self.fields, fields).to_vec());
        Box::new(child)
    }

    fn sync(&self) -> Result<()> {
        if let Err(e) = self.out.flush() {
            self.report(&format!(
                "logger: flushing {} failed due to: {}\n",
                self.out.label(),
                e
            ));
        }
        let _ = self.err.flush();
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
        if self.disabled {
            return;
        }
        if level < self.min_level {
            return;
        }

        let caller = self.resolve_caller(Location::caller());
        let fields = FieldSet::new(&self.fields, fields);

        // The clock is read under the sink lock so lines land in timestamp order.
        let mut out = self.out.lock();
        let line = self.render_line(&self.clock.now(), level, caller.as_ref(), msg, fields);
        let written = out.write_all(line.as_bytes());
        drop(out);

        if let Err(e) = written {
            self.report(&format!(
                "logger: writing of message {:?} failed due to: {}\n",
                line, e
            ));
        }
    }

    #[track_caller]
    fn error_return(&self, msg: &str, fields: &[Field]) -> LoggerError {
        let location = Location::caller();
        self.log(Level::Error, msg, fields);
        format_to_error_at(
            &self.name,
            self.caller.then_some(location),
            self.working_dir(),
            msg,
            FieldSet::new(&self.fields, fields),
        )
    }
}

/// Builder for constructing StdLogger with a fluent API
///
/// Options that reject their input are remembered and reported by
/// [`build`](StdLoggerBuilder::build); [`must_build`](StdLoggerBuilder::must_build)
/// panics instead.
pub struct StdLoggerBuilder {
    out: Option<SharedWriter>,
    err: Option<SharedWriter>,
    min_level: Level,
    dev_mode: bool,
    disabled: bool,
    caller: bool,
    colors: bool,
    policy: TerminationPolicy,
    working_dir: Option<PathBuf>,
    rejected: Option<LoggerError>,
}

impl StdLoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            out: None,
            err: None,
            min_level: Level::Debug,
            dev_mode: true,
            disabled: false,
            caller: true,
            colors: false,
            policy: TerminationPolicy::Process,
            working_dir: None,
            rejected: None,
        }
    }

    /// Fully disable the logger. Nothing is written to either sink.
    #[must_use = "builder methods return a new value"]
    pub fn disable_log_writes(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Destination for log lines (default: stdout)
    #[must_use = "builder methods return a new value"]
    pub fn out_writer<W: Write + Send + 'static>(self, writer: W) -> Self {
        self.out_sink(SharedWriter::new(writer))
    }

    #[must_use = "builder methods return a new value"]
    pub fn out_sink(mut self, sink: SharedWriter) -> Self {
        self.out = Some(sink);
        self
    }

    /// Destination for the logger's own failures (default: stderr)
    #[must_use = "builder methods return a new value"]
    pub fn err_writer<W: Write + Send + 'static>(self, writer: W) -> Self {
        self.err_sink(SharedWriter::new(writer))
    }

    #[must_use = "builder methods return a new value"]
    pub fn err_sink(mut self, sink: SharedWriter) -> Self {
        self.err = Some(sink);
        self
    }

    /// Lines below this level are discarded (default: Debug)
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Like [`min_level`](Self::min_level), parsed from text such as `"warn"`
    #[must_use = "builder methods return a new value"]
    pub fn min_level_str(mut self, level: &str) -> Self {
        match level.parse() {
            Ok(level) => self.min_level = level,
            Err(message) => self.reject(LoggerError::config("min_level", message)),
        }
        self
    }

    /// Whether `dpanic` escalates (default: true)
    #[must_use = "builder methods return a new value"]
    pub fn is_in_dev_environment(mut self, dev: bool) -> Self {
        self.dev_mode = dev;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn termination_policy(mut self, policy: TerminationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Include `file:line` of the call site (default: true)
    #[must_use = "builder methods return a new value"]
    pub fn with_caller(mut self, caller: bool) -> Self {
        self.caller = caller;
        self
    }

    /// Colorize the level column (default: false)
    #[cfg(feature = "console")]
    #[must_use = "builder methods return a new value"]
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    /// Base directory stripped from caller paths; must be absolute
    ///
    /// Defaults to the process working directory at build time.
    #[must_use = "builder methods return a new value"]
    pub fn working_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        let dir = dir.into();
        if dir.is_absolute() {
            self.working_dir = Some(dir);
        } else {
            self.reject(LoggerError::config(
                "working_dir",
                format!("'{}' is not an absolute path", dir.display()),
            ));
        }
        self
    }

    /// Apply every setting from `config`
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: &LoggerConfig) -> Self {
        self = self
            .min_level_str(&config.min_level)
            .is_in_dev_environment(config.dev_mode)
            .with_caller(config.caller)
            .termination_policy(config.termination);
        self.disabled = config.disabled;
        self.colors = config.colors;
        self
    }

    fn reject(&mut self, error: LoggerError) {
        if self.rejected.is_none() {
            self.rejected = Some(error);
        }
    }

    /// Build the root logger
    pub fn build(self) -> Result<StdLogger> {
        if let Some(error) = self.rejected {
            return Err(error);
        }

        let err = self.err.unwrap_or_else(SharedWriter::stderr);
        let working_dir = match self.working_dir {
            Some(dir) => Some(dir),
            None => match current_working_dir() {
                Ok(dir) => Some(dir),
                Err(e) => {
                    if !self.disabled {
                        let _ = err.write_all(
                            format!(
                                "logger: failed to determine working directory: {}\n",
                                e
                            )
                            .as_bytes(),
                        );
                    }
                    None
                }
            },
        };

        Ok(StdLogger {
            out: self.out.unwrap_or_else(SharedWriter::stdout),
            err,
            clock: Arc::new(MonotonicClock::new()),
            working_dir: working_dir.map(Arc::from),
            min_level: self.min_level,
            dev_mode: self.dev_mode,
            disabled: self.disabled,
            caller: self.caller,
            colors: self.colors,
            policy: self.policy,
            name: String::new(),
            fields: Arc::new(Vec::new()),
        })
    }

    /// Like [`build`](Self::build), but panics if an option was rejected
    pub fn must_build(self) -> StdLogger {
        match self.build() {
            Ok(logger) => logger,
            Err(e) => panic!("failed to build logger: {}", e),
        }
    }
}

impl Default for StdLoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
