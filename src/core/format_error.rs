//! Error values that mirror a logged line
//!
//! `error_return` writes an Error-level line and hands back an error built
//! from the same name, call site, message and fields. Backends without their
//! own caller capture build that error with [`format_to_error_at`].

use super::caller::{current_working_dir, CallSite};
use super::error::LoggerError;
use super::field::FieldSet;
use std::panic::Location;
use std::path::Path;

/// Escape characters that would split one event across several lines
pub fn sanitize_message(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Render `NAME: file:line: msg (k="v", ...)`
///
/// Each prefix is omitted when empty or unresolved; the field block is
/// omitted when there are no fields.
pub fn error_text(name: &str, caller: Option<&CallSite>, msg: &str, fields: FieldSet<'_>) -> String {
    let mut text = String::new();
    if !name.is_empty() {
        text.push_str(name);
        text.push_str(": ");
    }
    if let Some(site) = caller {
        text.push_str(&site.to_string());
        text.push_str(": ");
    }
    text.push_str(&sanitize_message(msg));
    text.push_str(&fields.render_suffix());
    text
}

/// Build the error for an explicit call site
///
/// Paths are shortened relative to `working_dir`; pass `None` for `caller`
/// to leave the location out of the text.
pub fn format_to_error_at(
    name: &str,
    caller: Option<&Location<'_>>,
    working_dir: Option<&Path>,
    msg: &str,
    fields: FieldSet<'_>,
) -> LoggerError {
    let site = caller.and_then(|location| CallSite::resolve(location, working_dir));
    LoggerError::Reported(error_text(name, site.as_ref(), msg, fields))
}

/// Build the error for the calling frame
///
/// The location is taken from the `#[track_caller]` chain, so wrapping this
/// in further `#[track_caller]` functions does not change the result. The
/// process working directory is looked up on each call.
///
/// # Example
///
/// ```
/// use rust_logger_facade::core::format_error::format_to_error;
/// use rust_logger_facade::field;
///
/// let err = format_to_error("DB", "query failed", &[field("table", "users")]);
/// let text = err.to_string();
/// assert!(text.starts_with("DB: "));
/// assert!(text.ends_with(r#"query failed (table="users")"#));
/// ```
#[track_caller]
pub fn format_to_error(name: &str, msg: &str, fields: &[super::field::Field]) -> LoggerError {
    let working_dir = current_working_dir().ok();
    format_to_error_at(
        name,
        Some(Location::caller()),
        working_dir.as_deref(),
        msg,
        FieldSet::new(&[], fields),
    )
}
