//! Runtime values.

mod number;

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

pub use number::format_number;

/// A value of the language.
///
/// `PartialEq` is structural and exists for tests. Language equality lives
/// in [`crate::operators::equals`], which rejects mixed types.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    Number(f64),
    /// Byte string; may hold bytes that are not valid UTF-8.
    Str(Rc<[u8]>),
}

impl Value {
    /// Build a string value from any byte-like source.
    pub fn string(bytes: impl AsRef<[u8]>) -> Self {
        Value::Str(Rc::from(bytes.as_ref()))
    }

    /// The name `type()` reports for this value.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
        }
    }

    /// The bytes `print` writes for this value.
    pub fn render_bytes(&self) -> Cow<'_, [u8]> {
        match self {
            Value::Str(bytes) => Cow::Borrowed(&bytes[..]),
            other => Cow::Owned(other.to_string().into_bytes()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Str(bytes) => f.write_str(&String::from_utf8_lossy(bytes)),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}
