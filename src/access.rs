//! Field lookup over different container shapes.
//!
//! An [`AccessStrategy`] is a named function `(key, container) -> Value`. Two
//! are built in: [`AccessStrategy::map`] for [`Value::Map`] and
//! [`AccessStrategy::document`] for JSON object documents. Supporting another
//! input shape means supplying a function to [`AccessStrategy::custom`].
//!
//! Keyed extractors that are not tied to a strategy resolve the process-wide
//! default at invocation time. Use [`Fields::using`] to pin a strategy
//! instead.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;

use crate::{RuleError, Value};

type LookupFn = dyn Fn(&str, &Value) -> Result<Value, RuleError> + Send + Sync;

/// A pluggable lookup function for one container shape.
///
/// Implementations must return the present value or
/// [`RuleError::MissingKey`]; they never return a placeholder for an absent key.
#[derive(Clone)]
pub struct AccessStrategy {
    name: &'static str,
    lookup: Arc<LookupFn>,
}

impl AccessStrategy {
    /// Lookup in a flat [`Value::Map`].
    #[must_use]
    pub fn map() -> Self {
        Self::custom("map", map_lookup)
    }

    /// Lookup of a child node in a [`Value::Document`] holding a JSON object.
    #[must_use]
    pub fn document() -> Self {
        Self::custom("document", document_lookup)
    }

    /// A strategy backed by an arbitrary lookup function.
    pub fn custom<F>(name: &'static str, lookup: F) -> Self
    where
        F: Fn(&str, &Value) -> Result<Value, RuleError> + Send + Sync + 'static,
    {
        Self {
            name,
            lookup: Arc::new(lookup),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Look up `key` in `container`.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::MissingKey`] if the key is absent, or
    /// [`RuleError::TypeMismatch`] if `container` has the wrong shape.
    pub fn lookup(&self, key: &str, container: &Value) -> Result<Value, RuleError> {
        (self.lookup)(key, container)
    }

    /// Follow a dot-separated path, applying this strategy per segment.
    ///
    /// # Errors
    ///
    /// Fails on the first segment that cannot be resolved.
    pub fn lookup_path(&self, path: &str, container: &Value) -> Result<Value, RuleError> {
        let mut segments = path.split('.');
        let first = segments.next().unwrap_or(path);
        let mut current = self.lookup(first, container)?;
        for segment in segments {
            current = self.lookup(segment, &current)?;
        }
        Ok(current)
    }
}

impl fmt::Debug for AccessStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessStrategy")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for AccessStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

fn map_lookup(key: &str, container: &Value) -> Result<Value, RuleError> {
    match container {
        Value::Map(entries) => entries
            .get(key)
            .cloned()
            .ok_or_else(|| RuleError::missing_key(key)),
        other => Err(RuleError::TypeMismatch {
            expected: "map",
            found: other.kind(),
        }),
    }
}

fn document_lookup(key: &str, container: &Value) -> Result<Value, RuleError> {
    match container {
        Value::Document(serde_json::Value::Object(fields)) => fields
            .get(key)
            .map(from_node)
            .ok_or_else(|| RuleError::missing_key(key)),
        other => Err(RuleError::TypeMismatch {
            expected: "document",
            found: other.kind(),
        }),
    }
}

/// Convert scalar document nodes to native values. `null`, arrays and
/// objects stay opaque documents.
#[allow(clippy::cast_precision_loss)]
fn from_node(node: &serde_json::Value) -> Value {
    use serde_json::Value as Json;

    match node {
        Json::Bool(b) => Value::Bool(*b),
        Json::String(s) => Value::String(s.clone()),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                i32::try_from(i).map_or(Value::Long(i), Value::Int)
            } else if let Some(u) = n.as_u64() {
                Value::Double(u as f64)
            } else {
                Value::Double(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        other => Value::Document(other.clone()),
    }
}

static DEFAULT_STRATEGY: Lazy<RwLock<AccessStrategy>> =
    Lazy::new(|| RwLock::new(AccessStrategy::map()));

/// The strategy unqualified keyed extractors currently resolve through.
#[must_use]
pub fn default_strategy() -> AccessStrategy {
    DEFAULT_STRATEGY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replace the process-wide default strategy.
///
/// Affects every rule built with unqualified keyed extractors, including rules
/// built before the call. Results already returned are not affected.
pub fn set_default(strategy: AccessStrategy) {
    tracing::debug!(strategy = strategy.name(), "switching default access strategy");
    *DEFAULT_STRATEGY
        .write()
        .unwrap_or_else(PoisonError::into_inner) = strategy;
}

/// Make flat maps the default container shape.
pub fn use_map_default() {
    set_default(AccessStrategy::map());
}

/// Make JSON documents the default container shape.
pub fn use_document_default() {
    set_default(AccessStrategy::document());
}

/// Strategy selection for keyed extractors.
///
/// `Fields::default()` defers to the process-wide default at invocation time;
/// [`Fields::using`] pins a strategy so the global is never consulted.
#[derive(Debug, Clone, Default)]
pub struct Fields {
    strategy: Option<AccessStrategy>,
}

impl Fields {
    #[must_use]
    pub fn using(strategy: AccessStrategy) -> Self {
        Self {
            strategy: Some(strategy),
        }
    }

    /// The pinned strategy, or the current process-wide default.
    #[must_use]
    pub fn strategy(&self) -> AccessStrategy {
        match &self.strategy {
            Some(strategy) => strategy.clone(),
            None => default_strategy(),
        }
    }

    /// Look up a single key.
    ///
    /// # Errors
    ///
    /// See [`AccessStrategy::lookup`].
    pub fn get(&self, key: &str, container: &Value) -> Result<Value, RuleError> {
        match &self.strategy {
            Some(strategy) => strategy.lookup(key, container),
            None => default_strategy().lookup(key, container),
        }
    }

    /// Look up a dot-separated path.
    ///
    /// # Errors
    ///
    /// See [`AccessStrategy::lookup_path`].
    pub fn get_path(&self, path: &str, container: &Value) -> Result<Value, RuleError> {
        self.strategy().lookup_path(path, container)
    }
}

/// Shorthand for [`Fields::using`].
#[must_use]
pub fn using(strategy: AccessStrategy) -> Fields {
    Fields::using(strategy)
}
