//! Conversion of a raw [`Value`] into a requested Rust type.
//!
//! The rules, in order:
//!
//! 1. If the runtime variant already is the target type it is returned as is.
//! 2. Numeric variants (and numeric document nodes) convert between each
//!    other with `as`-cast semantics.
//! 3. Anything else is rendered with [`Display`](std::fmt::Display) and parsed.
//!
//! Strings always succeed, booleans never fail (unknown text is `false`),
//! numeric parsing fails with [`RuleError::NumericParse`], and container
//! reinterpretation fails with [`RuleError::TypeMismatch`].

use std::collections::HashMap;
use std::str::FromStr;

use crate::{RuleError, Value};

/// Tokens that coerce to `true`, compared case-insensitively.
const TRUTHY: [&str; 6] = ["t", "true", "y", "yes", "1", "+"];

/// A type that can be produced from a [`Value`].
pub trait FromValue: Sized {
    /// Name used in error messages.
    const TYPE_NAME: &'static str;

    /// Convert `value` into `Self`.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError`] if the value cannot be viewed as `Self`.
    fn from_value(value: &Value) -> Result<Self, RuleError>;
}

/// Coerce `value` into `T`. Shorthand for [`FromValue::from_value`].
///
/// # Errors
///
/// Returns [`RuleError`] if the value cannot be viewed as `T`.
pub fn coerce<T: FromValue>(value: &Value) -> Result<T, RuleError> {
    T::from_value(value)
}

/// Truthiness of the textual representation of `value`.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Document(serde_json::Value::Bool(b)) => *b,
        other => {
            let text = text_of(other);
            TRUTHY.iter().any(|token| token.eq_ignore_ascii_case(&text))
        }
    }
}

/// A numeric reading of `value` that does not go through text.
enum Number {
    Int(i64),
    Float(f64),
}

fn as_number(value: &Value) -> Option<Number> {
    match value {
        Value::Short(v) => Some(Number::Int(i64::from(*v))),
        Value::Int(v) => Some(Number::Int(i64::from(*v))),
        Value::Long(v) => Some(Number::Int(*v)),
        Value::Float(v) => Some(Number::Float(f64::from(*v))),
        Value::Double(v) => Some(Number::Float(*v)),
        Value::Document(serde_json::Value::Number(n)) => n
            .as_i64()
            .map(Number::Int)
            .or_else(|| n.as_f64().map(Number::Float)),
        _ => None,
    }
}

/// Textual form used for parsing. Document string nodes yield their raw text.
fn text_of(value: &Value) -> String {
    match value {
        Value::Document(serde_json::Value::String(s)) => s.clone(),
        other => other.to_string(),
    }
}

fn parse_text<T: FromStr>(value: &Value, target: &'static str) -> Result<T, RuleError> {
    let text = text_of(value);
    text.parse::<T>()
        .map_err(|_| RuleError::NumericParse { text, target })
}

macro_rules! numeric_from_value {
    ($ty:ty, $name:literal, $variant:ident) => {
        impl FromValue for $ty {
            const TYPE_NAME: &'static str = $name;

            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_precision_loss,
                clippy::cast_lossless,
                clippy::unnecessary_cast
            )]
            fn from_value(value: &Value) -> Result<Self, RuleError> {
                if let Value::$variant(v) = value {
                    return Ok(*v);
                }
                match as_number(value) {
                    Some(Number::Int(v)) => Ok(v as $ty),
                    Some(Number::Float(v)) => Ok(v as $ty),
                    None => parse_text(value, Self::TYPE_NAME),
                }
            }
        }
    };
}

numeric_from_value!(i16, "short", Short);
numeric_from_value!(i32, "int", Int);
numeric_from_value!(i64, "long", Long);
numeric_from_value!(f32, "float", Float);
numeric_from_value!(f64, "double", Double);

impl FromValue for String {
    const TYPE_NAME: &'static str = "string";

    fn from_value(value: &Value) -> Result<Self, RuleError> {
        Ok(text_of(value))
    }
}

impl FromValue for bool {
    const TYPE_NAME: &'static str = "bool";

    fn from_value(value: &Value) -> Result<Self, RuleError> {
        Ok(is_truthy(value))
    }
}

impl FromValue for Value {
    const TYPE_NAME: &'static str = "value";

    fn from_value(value: &Value) -> Result<Self, RuleError> {
        Ok(value.clone())
    }
}

impl FromValue for HashMap<String, Value> {
    const TYPE_NAME: &'static str = "map";

    fn from_value(value: &Value) -> Result<Self, RuleError> {
        match value {
            Value::Map(entries) => Ok(entries.clone()),
            other => Err(mismatch::<Self>(other)),
        }
    }
}

impl FromValue for serde_json::Value {
    const TYPE_NAME: &'static str = "document";

    fn from_value(value: &Value) -> Result<Self, RuleError> {
        match value {
            Value::Document(node) => Ok(node.clone()),
            other => Err(mismatch::<Self>(other)),
        }
    }
}

impl FromValue for Vec<Value> {
    const TYPE_NAME: &'static str = "array";

    fn from_value(value: &Value) -> Result<Self, RuleError> {
        match value {
            Value::Array(items) => Ok(items.clone()),
            Value::Document(serde_json::Value::Array(items)) => {
                Ok(items.iter().cloned().map(Value::Document).collect())
            }
            other => Err(mismatch::<Self>(other)),
        }
    }
}

pub(crate) fn mismatch<T: FromValue>(found: &Value) -> RuleError {
    RuleError::TypeMismatch {
        expected: T::TYPE_NAME,
        found: found.kind(),
    }
}
