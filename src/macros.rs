//! Logging macros for ergonomic message formatting and field lists.
//!
//! The level macros take a logger, `format!`-style arguments and an optional
//! `; key => value, ...` tail of call-site fields.
//!
//! # Examples
//!
//! ```
//! use rust_logger_facade::prelude::*;
//! use rust_logger_facade::{fields, info, warn};
//!
//! let (sink, captured) = SharedWriter::buffer();
//! let logger = StdLogger::builder().out_sink(sink).build()?;
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments and fields
//! let port = 8080;
//! info!(logger, "Listening on port {}", port; "tls" => true);
//!
//! // Fields alone
//! logger.info("request", &fields!["path" => "/health", "status" => 200]);
//!
//! warn!(logger, "Retry {} of {}", 2, 5);
//! assert_eq!(captured.lines().len(), 4);
//! # Ok::<(), LoggerError>(())
//! ```

/// Build an array of [`Field`](crate::Field)s from `key => value` pairs.
///
/// # Examples
///
/// ```
/// use rust_logger_facade::fields;
///
/// let fields = fields!["user" => "ana", "attempt" => 3];
/// assert_eq!(fields.len(), 2);
/// assert_eq!(fields[1].to_string(), "attempt=3");
/// ```
#[macro_export]
macro_rules! fields {
    () => {{
        let empty: [$crate::Field; 0] = [];
        empty
    }};
    ($($key:expr => $value:expr),+ $(,)?) => {
        [$($crate::Field::new($key, $value)),+]
    };
}

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_logger_facade::prelude::*;
/// # let logger = StdLogger::builder().disable_log_writes().build().unwrap();
/// use rust_logger_facade::log;
/// log!(logger, Level::Info, "Simple message");
/// log!(logger, Level::Error, "Error code: {}", 500; "retryable" => false);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $fmt:literal $(, $arg:expr)* $(; $($key:expr => $value:expr),+ $(,)?)?) => {{
        use $crate::Logger as _;
        ($logger).log(
            $level,
            &::std::format!($fmt $(, $arg)*),
            &$crate::fields![$($($key => $value),+)?],
        )
    }};
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_logger_facade::prelude::*;
/// # let logger = StdLogger::builder().disable_log_writes().build().unwrap();
/// use rust_logger_facade::info;
/// info!(logger, "Processing {} items", 100; "batch" => 7);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Level, SharedWriter, StdLogger};

    fn logger() -> (StdLogger, crate::core::CaptureBuffer) {
        let (sink, captured) = SharedWriter::buffer();
        let logger = StdLogger::builder().out_sink(sink).build().unwrap();
        (logger, captured)
    }

    #[test]
    fn test_log_macro() {
        let (logger, captured) = logger();
        log!(logger, Level::Info, "Test message");
        log!(logger, Level::Info, "Formatted: {}", 42);

        let lines = captured.lines();
        assert!(lines[0].ends_with("Test message"));
        assert!(lines[1].ends_with("Formatted: 42"));
    }

    #[test]
    fn test_field_tail() {
        let (logger, captured) = logger();
        info!(logger, "Items: {}", 100; "batch" => 7, "source" => "queue");
        assert!(captured
            .contents()
            .contains(r#"Items: 100 (batch=7, source="queue")"#));
    }

    #[test]
    fn test_level_macros() {
        let (logger, captured) = logger();
        debug!(logger, "Debug message");
        warn!(logger, "Retry {} of {}", 1, 3);
        error!(logger, "Code: {}", 500);

        let contents = captured.contents();
        assert!(contents.contains("DEBUG "));
        assert!(contents.contains("WARN   "));
        assert!(contents.contains("ERROR  "));
    }

    #[test]
    fn test_macro_reports_invocation_site() {
        let (logger, captured) = logger();
        let line = line!() + 1;
        info!(logger, "where");
        assert!(captured
            .contents()
            .contains(&format!("macros.rs:{} where", line)));
    }

    #[test]
    fn test_macro_through_boxed_logger() {
        use crate::core::Logger;
        let (root, captured) = logger();
        let named = root.named("child");
        info!(named, "boxed");
        assert!(captured.contents().contains("CHILD"));
    }
}
