use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Appends a value to an array, producing a new array.
///
/// The input array is never mutated: the result owns a fresh element
/// sequence with the new value at the end, so every existing binding of
/// the input keeps observing its original length. This is the only way to
/// grow an array in the language.
///
/// # Parameters
/// - `args`: Two arguments, the array and the value to append.
///
/// # Returns
/// A new `Value::Array` one element longer than the input.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::function::append::append, value::core::Value};
///
/// let xs = Value::from(vec![Value::Integer(1)]);
/// let r = append(vec![xs, Value::Integer(2)]).unwrap();
/// assert_eq!(r.to_string(), "[1, 2]");
/// ```
pub fn append(args: Vec<Value>) -> EvalResult<Value> {
    let mut args = args.into_iter();
    let (Some(array), Some(value)) = (args.next(), args.next()) else {
        return Err(RuntimeError::Builtin { detail: "append expects an array and a value"
                                                   .to_string(), });
    };

    match array {
        Value::Array(elements) => {
            let mut appended = Vec::with_capacity(elements.len() + 1);
            appended.extend(elements.iter().cloned());
            appended.push(value);
            Ok(appended.into())
        },
        other => {
            Err(RuntimeError::Builtin { detail: format!("append expects an array, found {other}") })
        },
    }
}
