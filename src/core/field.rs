//! Structured key-value fields
//!
//! This module provides:
//! - `FieldValue`: the closed set of renderable value kinds
//! - `Field`: an immutable key/value pair attached to a call or a logger
//! - `FieldSet`: rendering of an ordered field sequence

use super::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value type for structured logging fields
///
/// Numeric kinds render unquoted; every other kind is rendered as a quoted,
/// escaped string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Str(String),
    /// A value already converted through its `Display` or serde form
    Other(String),
    Null,
}

impl FieldValue {
    /// Capture any `Display` value as a generic stringified field
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        FieldValue::Other(value.to_string())
    }

    /// Capture any serializable value as compact JSON text
    pub fn serialized<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(FieldValue::Other(serde_json::to_string(value)?))
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            FieldValue::Int(_) | FieldValue::Uint(_) | FieldValue::Float(_)
        )
    }

    /// Plain text of the value, without quoting
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Int(i) => i.to_string(),
            FieldValue::Uint(u) => u.to_string(),
            FieldValue::Float(f) => format!("{:.6}", f),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Str(s) | FieldValue::Other(s) => s.clone(),
            FieldValue::Null => "null".to_string(),
        }
    }

    /// Text as it appears inside a log line or error: numbers bare, the rest quoted
    ///
    /// Quoting follows Rust's `Debug` escaping for strings, so control and
    /// non-printable characters appear as `\u{7f}`-style escapes.
    pub fn render(&self) -> String {
        if self.is_numeric() {
            self.as_text()
        } else {
            format!("{:?}", self.as_text())
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for FieldValue {
            fn from(value: $ty) -> Self {
                FieldValue::Int(value as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for FieldValue {
            fn from(value: $ty) -> Self {
                FieldValue::Uint(value as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for FieldValue {
    fn from(f: f32) -> Self {
        FieldValue::Float(f as f64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Str(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Str(s.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        FieldValue::Str(s.clone())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

/// A key/value pair used to add structured context to a log call or a logger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    key: String,
    value: FieldValue,
}

impl Field {
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value.render())
    }
}

/// Shortcut for [`Field::new`]
pub fn field<K, V>(key: K, value: V) -> Field
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    Field::new(key, value)
}

/// Ordered view over accumulated and call-site fields
///
/// Keys are never deduplicated: a key declared twice is rendered twice, in
/// declaration order.
#[derive(Debug, Clone, Copy)]
pub struct FieldSet<'a> {
    accumulated: &'a [Field],
    call_site: &'a [Field],
}

impl<'a> FieldSet<'a> {
    pub fn new(accumulated: &'a [Field], call_site: &'a [Field]) -> Self {
        Self {
            accumulated,
            call_site,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.accumulated.is_empty() && self.call_site.is_empty()
    }

    pub fn len(&self) -> usize {
        self.accumulated.len() + self.call_site.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Field> + 'a {
        let (accumulated, call_site) = (self.accumulated, self.call_site);
        accumulated.iter().chain(call_site.iter())
    }

    /// Concatenated copy, accumulated fields first
    pub fn to_vec(&self) -> Vec<Field> {
        self.iter().cloned().collect()
    }

    /// Format fields as `k="v", k2=2`
    pub fn render(&self) -> String {
        self.iter()
            .map(Field::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// ` (k="v", ...)` suffix, or an empty string when there are no fields
    pub fn render_suffix(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!(" ({})", self.render())
        }
    }
}

impl fmt::Display for FieldSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
