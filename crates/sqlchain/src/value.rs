//! Typed values and their SQL-literal rendering.
//!
//! [`Value`] is a closed set of renderable shapes. [`render_value`] turns one of
//! them into literal text under a [`Quoting`] mode:
//!
//! - integers (any width, signed or unsigned) are never quoted
//! - text, timestamps and [`Value::Display`] values are wrapped in `'...'` when
//!   quoting is requested, unless the text starts with `(`; such text is taken
//!   to be a parenthesized subquery or expression and is emitted as-is
//! - [`Value::Ref`] is dereferenced exactly one level; a null reference, or a
//!   reference to one, is [`RenderError::NullReference`]
//!
//! # Example
//! ```
//! use sqlchain::{render_value, Quoting, Value};
//!
//! assert_eq!(render_value(&"Kelly".into(), Quoting::Quoted)?, "'Kelly'");
//! assert_eq!(render_value(&42u8.into(), Quoting::Quoted)?, "42");
//! assert_eq!(render_value(&"(SELECT 1)".into(), Quoting::Quoted)?, "(SELECT 1)");
//! # Ok::<(), sqlchain::RenderError>(())
//! ```

use crate::error::{RenderError, RenderResult};
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Whether rendered literals get wrapped in single quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quoting {
    Quoted,
    Unquoted,
}

impl Quoting {
    pub fn is_quoted(self) -> bool {
        matches!(self, Self::Quoted)
    }
}

/// A value that can be rendered as SQL-literal text.
#[derive(Clone)]
pub enum Value {
    /// Signed integer of any width.
    Int(i128),
    /// Unsigned integer of any width.
    UInt(u128),
    /// Text, emitted verbatim (quoted on request).
    Text(String),
    /// Timestamp, rendered as RFC 3339 text.
    Timestamp(DateTime<Utc>),
    /// Owned reference to another value; `None` is a null reference.
    Ref(Option<Box<Value>>),
    /// A value that renders itself through [`fmt::Display`].
    Display(Arc<dyn fmt::Display + Send + Sync>),
    /// A value with no SQL-literal form, tagged with its source type name.
    Unsupported(&'static str),
}

impl Value {
    /// Wrap any displayable value.
    pub fn display<T>(value: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        Value::Display(Arc::new(value))
    }

    /// Create a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Value::Text(value.into())
    }

    /// Create a non-null reference to `value`.
    pub fn reference(value: impl Into<Value>) -> Self {
        Value::Ref(Some(Box::new(value.into())))
    }

    /// Create a null reference.
    pub fn null() -> Self {
        Value::Ref(None)
    }

    /// Mark a value of type `T` as having no SQL rendering.
    pub fn unsupported<T: ?Sized>() -> Self {
        Value::Unsupported(std::any::type_name::<T>())
    }

    /// Check if this is a null reference.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Ref(None))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Value::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
            Value::Text(v) => f.debug_tuple("Text").field(v).finish(),
            Value::Timestamp(v) => f.debug_tuple("Timestamp").field(v).finish(),
            Value::Ref(v) => f.debug_tuple("Ref").field(v).finish(),
            Value::Display(v) => f.debug_tuple("Display").field(&v.to_string()).finish(),
            Value::Unsupported(v) => f.debug_tuple("Unsupported").field(v).finish(),
        }
    }
}

/// Render one value as SQL-literal text.
///
/// Fails with [`RenderError::NullReference`] for `Ref(None)` or a reference
/// to one, and with [`RenderError::UnsupportedValueType`] for unsupported
/// values or a reference to a non-null reference.
pub fn render_value(value: &Value, quoting: Quoting) -> RenderResult<String> {
    match value {
        Value::Display(d) => Ok(quote_text(d.to_string(), quoting)),
        Value::Text(s) => Ok(quote_text(s.clone(), quoting)),
        Value::Timestamp(ts) => Ok(quote_text(
            ts.to_rfc3339_opts(SecondsFormat::Secs, true),
            quoting,
        )),
        Value::Ref(None) => Err(RenderError::NullReference),
        Value::Ref(Some(inner)) => match inner.as_ref() {
            Value::Ref(None) => Err(RenderError::NullReference),
            Value::Ref(Some(_)) => Err(RenderError::unsupported("nested reference")),
            referent => render_value(referent, quoting),
        },
        Value::Int(n) => Ok(n.to_string()),
        Value::UInt(n) => Ok(n.to_string()),
        Value::Unsupported(type_name) => Err(RenderError::unsupported(*type_name)),
    }
}

/// Apply the quoting rule to already-rendered text.
///
/// Text starting with `(` is never quoted.
pub(crate) fn quote_text(text: String, quoting: Quoting) -> String {
    if quoting.is_quoted() && !text.starts_with('(') {
        format!("'{}'", text)
    } else {
        text
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::Int(v as i128)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::UInt(v as u128)
            }
        })*
    };
}

macro_rules! impl_from_unsupported {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(_: $t) -> Self {
                Value::unsupported::<$t>()
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_unsupported!(f32, f64, bool);

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Timestamp(v)
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Text(v.hyphenated().to_string())
    }
}

impl From<Box<Value>> for Value {
    fn from(v: Box<Value>) -> Self {
        Value::Ref(Some(v))
    }
}

/// `Some(v)` becomes a reference to `v`, `None` a null reference.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        Value::Ref(v.map(|inner| Box::new(inner.into())))
    }
}

#[cfg(test)]
mod tests;
