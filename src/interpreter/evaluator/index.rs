use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Value, hash_key::HashKey},
    },
};

/// Evaluates an index expression on already-evaluated operands.
///
/// - An array indexed by an integer yields the element at that position;
///   anything outside `0..len` (including negative indices) is an
///   `array index out of range` error.
/// - A hash indexed by a hashable value yields the bound value, or `null`
///   when the key is absent. A non-hashable key is an `unhashable key`
///   error.
/// - Every other collection/index combination is a `type mismatch` error.
///
/// # Parameters
/// - `collection`: The evaluated array or hash.
/// - `index`: The evaluated index or key.
///
/// # Returns
/// The element read out of the collection, or the applicable error.
pub(in crate::interpreter::evaluator) fn eval_index(collection: &Value,
                                                    index: &Value)
                                                    -> EvalResult<Value> {
    match (collection, index) {
        (Value::Array(elements), Value::Integer(i)) => {
            usize::try_from(*i).ok()
                               .and_then(|i| elements.get(i))
                               .cloned()
                               .ok_or(RuntimeError::IndexOutOfRange { index: *i })
        },
        (Value::Hash(entries), key) => {
            let key = HashKey::try_from(key)?;
            Ok(entries.get(&key).cloned().unwrap_or(Value::Nil))
        },
        _ => {
            Err(RuntimeError::TypeMismatch { left:     collection.to_string(),
                                             operator: "[]".to_string(),
                                             right:    index.to_string(), })
        },
    }
}
