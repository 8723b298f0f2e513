use crate::{error::RuntimeError, interpreter::value::core::Value};

/// A value usable as a hash-table key.
///
/// Only integers, booleans and strings hash; attempting to key a hash with
/// any other value is an `unhashable key` error at index or construction
/// time. The derived `Ord` gives hash tables a stable printing order:
/// booleans sort before integers, integers before strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HashKey {
    /// A boolean key.
    Bool(bool),
    /// An integer key.
    Integer(i64),
    /// A string key.
    Str(String),
}

impl TryFrom<&Value> for HashKey {
    type Error = RuntimeError;

    /// Converts a runtime value into a hash key.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnhashableKey`] for any value other than an
    /// integer, boolean or string.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::value::{core::Value, hash_key::HashKey};
    ///
    /// let key = HashKey::try_from(&Value::Integer(3)).unwrap();
    /// assert_eq!(key, HashKey::Integer(3));
    ///
    /// assert!(HashKey::try_from(&Value::Nil).is_err());
    /// ```
    fn try_from(value: &Value) -> Result<Self, RuntimeError> {
        match value {
            Value::Integer(n) => Ok(Self::Integer(*n)),
            Value::Bool(b) => Ok(Self::Bool(*b)),
            Value::Str(s) => Ok(Self::Str(s.clone())),
            _ => Err(RuntimeError::UnhashableKey { key: value.to_string() }),
        }
    }
}

impl std::fmt::Display for HashKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}
