use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Dynamically typed rule input.
///
/// Every rule takes a single `&Value`. Fields are pulled out of it and
/// converted through the extractors in [`crate::extract`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Absence of a value inside an otherwise present entry.
    #[default]
    Null,
    Bool(bool),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    Array(Vec<Value>),
    /// Flat key/value container, read by [`AccessStrategy::map`](crate::AccessStrategy::map).
    Map(HashMap<String, Value>),
    /// Structured document node, read by
    /// [`AccessStrategy::document`](crate::AccessStrategy::document).
    Document(serde_json::Value),
    /// Arbitrary typed value, recovered with [`any_object`](crate::any_object).
    Object(ObjectValue),
}

/// A type-erased Rust value carried inside [`Value::Object`].
#[derive(Clone)]
pub struct ObjectValue {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl ObjectValue {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Name of the wrapped type, as reported by [`std::any::type_name`].
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Checked reinterpretation as `T`. Returns `None` if the wrapped value has another type.
    #[must_use]
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.inner).downcast::<T>().ok()
    }
}

impl fmt::Debug for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectValue")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

impl PartialEq for ObjectValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Value {
    /// An empty flat container.
    #[must_use]
    pub fn map() -> Self {
        Value::Map(HashMap::new())
    }

    /// Wrap an arbitrary typed value.
    #[must_use]
    pub fn object<T: Any + Send + Sync>(value: T) -> Self {
        Value::Object(ObjectValue::new(value))
    }

    /// Insert `key` into a map value. Any other variant is returned unchanged.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        if let Value::Map(entries) = &mut self {
            entries.insert(key.to_owned(), value.into());
        }
        self
    }

    /// Short name of the runtime shape, used in diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Short(_) => "short",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Float(_) => "float",
            Value::Double(_) => "double",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
            Value::Document(_) => "document",
            Value::Object(_) => "object",
        }
    }

    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Value::Short(_) | Value::Int(_) | Value::Long(_) | Value::Float(_) | Value::Double(_)
        )
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Short(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

impl From<HashMap<String, Value>> for Value {
    fn from(v: HashMap<String, Value>) -> Self {
        Value::Map(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Document(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Short(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Long(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Double(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "{v}"),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                // Sorted so the text form is stable across runs.
                let mut keys: Vec<&String> = entries.keys().collect();
                keys.sort();
                write!(f, "{{")?;
                for (i, key) in keys.into_iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {}", entries[key])?;
                }
                write!(f, "}}")
            }
            Value::Document(node) => write!(f, "{node}"),
            Value::Object(obj) => write!(f, "<object {}>", obj.type_name()),
        }
    }
}
