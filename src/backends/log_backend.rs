//! Adapter onto the `log` crate
//!
//! `log::Log` implementations cannot report back the context attached to a
//! record, so the adapter keeps its own copy of the accumulated name and
//! fields. Every record carries the full field set as `log::kv` pairs, and
//! `error_return` rebuilds the error text from the tracked copy.

use crate::core::{
    contract::{join_name, BoxLogger, Logger},
    error::{LoggerError, Result},
    escalation::TerminationPolicy,
    field::{Field, FieldSet, FieldValue},
    format_error::format_to_error_at,
    level::Level,
};
use log::kv::{self, Key, Value, VisitSource};
use std::panic::Location;
use std::path::Path;
use std::sync::Arc;

/// Target used for records from an unnamed logger
pub const DEFAULT_TARGET: &str = "app";

#[derive(Clone)]
pub struct LogCrateLogger {
    inner: Arc<dyn log::Log>,
    dev_mode: bool,
    policy: TerminationPolicy,
    working_dir: Option<Arc<Path>>,
    name: String,
    fields: Arc<Vec<Field>>,
}

impl LogCrateLogger {
    /// Wrap an already-configured `log::Log` implementation
    pub fn new(inner: Arc<dyn log::Log>, dev_mode: bool) -> Self {
        Self {
            inner,
            dev_mode,
            policy: TerminationPolicy::Process,
            working_dir: std::env::current_dir().ok().map(Arc::from),
            name: String::new(),
            fields: Arc::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_termination_policy(mut self, policy: TerminationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn into_boxed(self) -> BoxLogger {
        Box::new(self)
    }

    fn target(&self) -> &str {
        if self.name.is_empty() {
            DEFAULT_TARGET
        } else {
            &self.name
        }
    }
}

/// Map a contract level onto the `log` crate's narrower range
pub fn to_log_level(level: Level) -> log::Level {
    match level {
        Level::Debug => log::Level::Debug,
        Level::Info => log::Level::Info,
        Level::Warn => log::Level::Warn,
        Level::Error | Level::DPanic | Level::Panic | Level::Fatal => log::Level::Error,
    }
}

fn to_kv_value(value: &FieldValue) -> Value<'_> {
    match value {
        FieldValue::Int(i) => Value::from(*i),
        FieldValue::Uint(u) => Value::from(*u),
        FieldValue::Float(f) => Value::from(*f),
        FieldValue::Bool(b) => Value::from(*b),
        FieldValue::Str(s) | FieldValue::Other(s) => Value::from(s.as_str()),
        FieldValue::Null => Value::from("null"),
    }
}

struct KeyValues<'a>(FieldSet<'a>);

impl kv::Source for KeyValues<'_> {
    fn visit<'kvs>(&'kvs self, visitor: &mut dyn VisitSource<'kvs>) -> std::result::Result<(), kv::Error> {
        for field in self.0.iter() {
            visitor.visit_pair(Key::from_str(field.key()), to_kv_value(field.value()))?;
        }
        Ok(())
    }

    fn count(&self) -> usize {
        self.0.len()
    }
}

impl Logger for LogCrateLogger {
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
        self.inner.flush();
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
        let location = Location::caller();
        let key_values = KeyValues(FieldSet::new(&self.fields, fields));
        let target = self.target();

        let metadata = log::Metadata::builder()
            .level(to_log_level(level))
            .target(target)
            .build();
        if !self.inner.enabled(&metadata) {
            return;
        }

        self.inner.log(
            &log::Record::builder()
                .args(format_args!("{}", msg))
                .level(to_log_level(level))
                .target(target)
                .file(Some(location.file()))
                .line(Some(location.line()))
                .key_values(&key_values)
                .build(),
        );
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::escalation::Escalation;
    use crate::core::field::field;
    use parking_lot::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    struct Captured {
        level: log::Level,
        target: String,
        message: String,
        line: Option<u32>,
        pairs: Vec<(String, String)>,
    }

    #[derive(Default)]
    struct CaptureLog {
        min: Option<log::Level>,
        records: Mutex<Vec<Captured>>,
    }

    struct Collect(Vec<(String, String)>);

    impl<'kvs> VisitSource<'kvs> for Collect {
        fn visit_pair(&mut self, key: Key<'kvs>, value: Value<'kvs>) -> std::result::Result<(), kv::Error> {
            self.0.push((key.to_string(), value.to_string()));
            Ok(())
        }
    }

    impl log::Log for CaptureLog {
        fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
            self.min.map_or(true, |min| metadata.level() <= min)
        }

        fn log(&self, record: &log::Record<'_>) {
            let mut collect = Collect(Vec::new());
            record.key_values().visit(&mut collect).unwrap();
            self.records.lock().push(Captured {
                level: record.level(),
                target: record.target().to_string(),
                message: record.args().to_string(),
                line: record.line(),
                pairs: collect.0,
            });
        }

        fn flush(&self) {}
    }

    fn adapter(min: Option<log::Level>) -> (LogCrateLogger, Arc<CaptureLog>) {
        let capture = Arc::new(CaptureLog {
            min,
            ..CaptureLog::default()
        });
        let logger = LogCrateLogger::new(capture.clone(), true)
            .with_termination_policy(TerminationPolicy::Propagate);
        (logger, capture)
    }

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn test_named_and_with_accumulate() {
        let (root, capture) = adapter(None);
        let db = root.named("service").with(&[field("foo", "bar")]).named("db");
        db.info("upserted", &[field("rows", 3)]);

        let records = capture.records.lock();
        assert_eq!(records[0].target, "SERVICE.DB");
        assert_eq!(records[0].message, "upserted");
        assert_eq!(records[0].pairs, vec![pair("foo", "bar"), pair("rows", "3")]);
        assert_eq!(root.name(), "");
        assert!(root.fields().is_empty());
    }

    #[test]
    fn test_unnamed_target_and_call_site() {
        let (root, capture) = adapter(None);
        let line = line!() + 1;
        root.warn("careful", &[]);

        let records = capture.records.lock();
        assert_eq!(records[0].target, DEFAULT_TARGET);
        assert_eq!(records[0].level, log::Level::Warn);
        assert_eq!(records[0].line, Some(line));
    }

    #[test]
    fn test_backend_filter_is_respected() {
        let (root, capture) = adapter(Some(log::Level::Warn));
        root.info("hidden", &[]);
        root.debug("hidden", &[]);
        root.error("shown", &[]);
        assert_eq!(capture.records.lock().len(), 1);
    }

    #[test]
    fn test_error_return_matches_record() {
        let (root, capture) = adapter(None);
        let logger = root.named("svc").with(&[field("a", 1)]);
        let err = logger.error_return("boom", &[field("k", "v")]);

        let text = err.to_string();
        assert!(text.starts_with("SVC: "));
        assert!(text.ends_with(r#"boom (a=1, k="v")"#));

        let records = capture.records.lock();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, log::Level::Error);
        assert_eq!(records[0].pairs, vec![pair("a", "1"), pair("k", "v")]);
    }

    #[test]
    fn test_escalation_is_synthesized() {
        let (root, capture) = adapter(None);
        assert_eq!(root.panic("p", &[]), Err(Escalation::panic("p")));
        assert_eq!(root.fatal("f", &[]), Err(Escalation::fatal("f")));
        assert_eq!(root.dpanic("d", &[]), Err(Escalation::panic("d")));

        let relaxed = LogCrateLogger::new(capture.clone(), false)
            .with_termination_policy(TerminationPolicy::Propagate);
        assert_eq!(relaxed.dpanic("d", &[]), Ok(()));
        assert_eq!(capture.records.lock().len(), 4);
    }

    #[test]
    fn test_level_mapping() {
        assert_eq!(to_log_level(Level::Debug), log::Level::Debug);
        assert_eq!(to_log_level(Level::DPanic), log::Level::Error);
        assert_eq!(to_log_level(Level::Fatal), log::Level::Error);
    }
}
