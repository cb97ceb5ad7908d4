use thiserror::Error;

/// Failure raised while extracting or coercing the input of a rule.
///
/// All variants abort the current invocation and surface to the caller.
/// A value that does not look like a truthy token is *not* an error: boolean
/// coercion falls back to `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("missing key '{key}'")]
    MissingKey { key: String },

    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("cannot parse '{text}' as {target}")]
    NumericParse { text: String, target: &'static str },
}

impl RuleError {
    pub(crate) fn missing_key(key: &str) -> Self {
        RuleError::MissingKey {
            key: key.to_owned(),
        }
    }
}
