//! Ready-made extractors for the `given` stage.
//!
//! Whole-argument extractors (`any_*`) reinterpret the rule input itself.
//! Keyed extractors (`*_field`, [`field`], [`path`]) look a key up first and
//! then coerce the found value. The free keyed functions resolve the
//! process-wide default strategy each time the rule runs; the methods on
//! [`Fields`] use the strategy the `Fields` was built with.
//!
//! ```
//! use gwt::{rule, int_field, using, AccessStrategy, Value};
//!
//! let adult = rule("adult", |r| {
//!     r.given(int_field("age"))
//!         .expect(|age| *age >= 18)
//!         .then(|_| "adult")
//!         .otherwise(|_| "minor")
//! });
//! assert_eq!(adult.invoke(&Value::map().with("age", "21")), Ok("adult"));
//!
//! let from_json = rule("adult", |r| {
//!     r.given(using(AccessStrategy::document()).int("age"))
//!         .expect(|age| *age >= 18)
//!         .then(|_| "adult")
//!         .otherwise(|_| "minor")
//! });
//! assert_eq!(
//!     from_json.invoke(&Value::from(serde_json::json!({"age": 12}))),
//!     Ok("minor")
//! );
//! ```

use std::any::{type_name, Any};
use std::collections::HashMap;
use std::sync::Arc;

use crate::coerce::FromValue;
use crate::{Fields, RuleError, Value};

/// Reinterpret the whole input as `T`.
pub fn any<T>() -> impl Fn(&Value) -> Result<T, RuleError> + Send + Sync + 'static
where
    T: FromValue + 'static,
{
    |input: &Value| T::from_value(input)
}

pub fn any_string() -> impl Fn(&Value) -> Result<String, RuleError> + Send + Sync + 'static {
    any::<String>()
}

pub fn any_short() -> impl Fn(&Value) -> Result<i16, RuleError> + Send + Sync + 'static {
    any::<i16>()
}

pub fn any_int() -> impl Fn(&Value) -> Result<i32, RuleError> + Send + Sync + 'static {
    any::<i32>()
}

pub fn any_long() -> impl Fn(&Value) -> Result<i64, RuleError> + Send + Sync + 'static {
    any::<i64>()
}

pub fn any_float() -> impl Fn(&Value) -> Result<f32, RuleError> + Send + Sync + 'static {
    any::<f32>()
}

pub fn any_double() -> impl Fn(&Value) -> Result<f64, RuleError> + Send + Sync + 'static {
    any::<f64>()
}

/// Truthiness of the whole input. Never fails.
pub fn any_bool() -> impl Fn(&Value) -> Result<bool, RuleError> + Send + Sync + 'static {
    any::<bool>()
}

/// The whole input as a flat map. Fails with [`RuleError::TypeMismatch`] otherwise.
pub fn any_map(
) -> impl Fn(&Value) -> Result<HashMap<String, Value>, RuleError> + Send + Sync + 'static {
    any::<HashMap<String, Value>>()
}

/// The whole input as a JSON document. Fails with [`RuleError::TypeMismatch`] otherwise.
pub fn any_document(
) -> impl Fn(&Value) -> Result<serde_json::Value, RuleError> + Send + Sync + 'static {
    any::<serde_json::Value>()
}

pub fn any_array() -> impl Fn(&Value) -> Result<Vec<Value>, RuleError> + Send + Sync + 'static {
    any::<Vec<Value>>()
}

/// The whole input as a typed object wrapped with [`Value::object`].
pub fn any_object<T>() -> impl Fn(&Value) -> Result<Arc<T>, RuleError> + Send + Sync + 'static
where
    T: Any + Send + Sync,
{
    |input: &Value| match input {
        Value::Object(obj) => obj.downcast::<T>().ok_or(RuleError::TypeMismatch {
            expected: type_name::<T>(),
            found: obj.type_name(),
        }),
        other => Err(RuleError::TypeMismatch {
            expected: type_name::<T>(),
            found: other.kind(),
        }),
    }
}

impl Fields {
    /// Look up `key` and coerce the value to `T`.
    pub fn field<T>(
        &self,
        key: &str,
    ) -> impl Fn(&Value) -> Result<T, RuleError> + Send + Sync + 'static
    where
        T: FromValue + 'static,
    {
        let fields = self.clone();
        let key = key.to_owned();
        move |input: &Value| {
            let value = fields.get(&key, input)?;
            T::from_value(&value)
        }
    }

    /// Follow a dot-separated path and coerce the value to `T`.
    pub fn path<T>(
        &self,
        path: &str,
    ) -> impl Fn(&Value) -> Result<T, RuleError> + Send + Sync + 'static
    where
        T: FromValue + 'static,
    {
        let fields = self.clone();
        let path = path.to_owned();
        move |input: &Value| {
            let value = fields.get_path(&path, input)?;
            T::from_value(&value)
        }
    }

    pub fn string(
        &self,
        key: &str,
    ) -> impl Fn(&Value) -> Result<String, RuleError> + Send + Sync + 'static {
        self.field::<String>(key)
    }

    pub fn int(
        &self,
        key: &str,
    ) -> impl Fn(&Value) -> Result<i32, RuleError> + Send + Sync + 'static {
        self.field::<i32>(key)
    }

    pub fn long(
        &self,
        key: &str,
    ) -> impl Fn(&Value) -> Result<i64, RuleError> + Send + Sync + 'static {
        self.field::<i64>(key)
    }

    pub fn double(
        &self,
        key: &str,
    ) -> impl Fn(&Value) -> Result<f64, RuleError> + Send + Sync + 'static {
        self.field::<f64>(key)
    }

    pub fn boolean(
        &self,
        key: &str,
    ) -> impl Fn(&Value) -> Result<bool, RuleError> + Send + Sync + 'static {
        self.field::<bool>(key)
    }
}

/// Look up `key` through the default strategy and coerce the value to `T`.
pub fn field<T>(key: &str) -> impl Fn(&Value) -> Result<T, RuleError> + Send + Sync + 'static
where
    T: FromValue + 'static,
{
    Fields::default().field::<T>(key)
}

/// Follow a dot-separated path through the default strategy.
pub fn path<T>(path: &str) -> impl Fn(&Value) -> Result<T, RuleError> + Send + Sync + 'static
where
    T: FromValue + 'static,
{
    Fields::default().path::<T>(path)
}

pub fn string_field(
    key: &str,
) -> impl Fn(&Value) -> Result<String, RuleError> + Send + Sync + 'static {
    field::<String>(key)
}

pub fn short_field(key: &str) -> impl Fn(&Value) -> Result<i16, RuleError> + Send + Sync + 'static {
    field::<i16>(key)
}

pub fn int_field(key: &str) -> impl Fn(&Value) -> Result<i32, RuleError> + Send + Sync + 'static {
    field::<i32>(key)
}

pub fn long_field(key: &str) -> impl Fn(&Value) -> Result<i64, RuleError> + Send + Sync + 'static {
    field::<i64>(key)
}

pub fn float_field(key: &str) -> impl Fn(&Value) -> Result<f32, RuleError> + Send + Sync + 'static {
    field::<f32>(key)
}

pub fn double_field(
    key: &str,
) -> impl Fn(&Value) -> Result<f64, RuleError> + Send + Sync + 'static {
    field::<f64>(key)
}

/// Truthiness of a looked-up value. A missing key still fails.
pub fn bool_field(key: &str) -> impl Fn(&Value) -> Result<bool, RuleError> + Send + Sync + 'static {
    field::<bool>(key)
}

/// A nested flat map stored under `key`.
pub fn map_field(
    key: &str,
) -> impl Fn(&Value) -> Result<HashMap<String, Value>, RuleError> + Send + Sync + 'static {
    field::<HashMap<String, Value>>(key)
}

/// A nested document node stored under `key`.
pub fn document_field(
    key: &str,
) -> impl Fn(&Value) -> Result<serde_json::Value, RuleError> + Send + Sync + 'static {
    field::<serde_json::Value>(key)
}

pub fn array_field(
    key: &str,
) -> impl Fn(&Value) -> Result<Vec<Value>, RuleError> + Send + Sync + 'static {
    field::<Vec<Value>>(key)
}
