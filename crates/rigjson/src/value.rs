//! Decoded value types and utilities.

use std::{fmt, sync::Arc};

use indexmap::IndexMap;

/// Object members in document order. The decoder pre-sizes the backing
/// storage from the scanner's element estimate.
pub type Map = IndexMap<Arc<str>, Value>;
/// Array elements in document order.
pub type Array = Vec<Value>;

/// A decoded value tree.
///
/// Numbers carry the width the decoder was configured with:
/// single-precision values are interned and shared ([`Value::Float`]),
/// double-precision values are stored inline ([`Value::Double`]). Strings
/// are canonical per decode session, so equal content compares cheaply and
/// repeated keys cost one allocation.
///
/// # Examples
///
/// ```
/// use rigjson::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("name".into(), Value::String("root".into()));
/// let v = Value::Object(map);
/// assert_eq!(v.to_string(), r#"{"name":"root"}"#);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    /// A single-precision number; equal values within one decode session
    /// share the same allocation.
    Float(Arc<f32>),
    /// A double-precision number.
    Double(f64),
    String(Arc<str>),
    Array(Array),
    Object(Map),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl Value {
    /// Returns `true` if the value is [`Null`](Value::Null).
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the boolean if the value is [`Boolean`](Value::Boolean).
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number widened to `f64`, whichever width it was decoded
    /// at.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(f64::from(**n)),
            Self::Double(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string content if the value is [`String`](Value::String).
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements if the value is [`Array`](Value::Array).
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// Returns the members if the value is [`Object`](Value::Object).
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(members) => Some(members),
            _ => None,
        }
    }
}

/// Writes `src` with the escapes the decoder understands: named escapes for
/// the common control characters, `\uXXXX` for the rest.
fn write_escaped<W: fmt::Write>(src: &str, f: &mut W) -> fmt::Result {
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\u{0008}' => f.write_str("\\b")?,
            '\u{000C}' => f.write_str("\\f")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() => write!(f, "\\u{:04X}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    Ok(())
}

impl fmt::Display for Value {
    /// Encodes the tree as compact JSON. Finite numbers and strings without
    /// `\u` escapes decode back to an equal tree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Float(n) => write!(f, "{n}"),
            Value::Double(n) => write!(f, "{n}"),
            Value::String(s) => {
                f.write_str("\"")?;
                write_escaped(s, f)?;
                f.write_str("\"")
            }
            Value::Array(elements) => {
                f.write_str("[")?;
                let mut first = true;
                for element in elements {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            }
            Value::Object(members) => {
                f.write_str("{")?;
                let mut first = true;
                for (name, value) in members {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    f.write_str("\"")?;
                    write_escaped(name, f)?;
                    write!(f, "\":{value}")?;
                }
                f.write_str("}")
            }
        }
    }
}
