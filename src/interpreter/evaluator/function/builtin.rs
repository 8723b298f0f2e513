use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Returns the length of a string or array.
///
/// String length is measured in bytes; the language has no escape
/// processing, so for ASCII sources this matches the character count.
/// Other value types produce a builtin error.
///
/// # Parameters
/// - `args`: One argument, the value to measure.
///
/// # Returns
/// `Value::Integer` containing the length.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::function::builtin::len, value::core::Value};
///
/// let r = len(vec![Value::Str("hello".to_string())]).unwrap();
/// assert_eq!(r, Value::Integer(5));
/// ```
pub fn len(args: Vec<Value>) -> EvalResult<Value> {
    match &args[0] {
        Value::Str(s) => Ok(Value::Integer(count_as_integer(s.len()))),
        Value::Array(elements) => Ok(Value::Integer(count_as_integer(elements.len()))),
        other => Err(RuntimeError::Builtin { detail: format!("len is not defined for {other}") }),
    }
}

/// Returns the first element of an array, or `null` when it is empty.
///
/// Non-array arguments produce a builtin error.
///
/// # Parameters
/// - `args`: One argument, the array to read.
///
/// # Returns
/// The first element or `Value::Nil`.
pub fn first(args: Vec<Value>) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => Ok(elements.first().cloned().unwrap_or(Value::Nil)),
        other => {
            Err(RuntimeError::Builtin { detail: format!("first expects an array, found {other}") })
        },
    }
}

/// Returns the last element of an array, or `null` when it is empty.
///
/// Non-array arguments produce a builtin error.
///
/// # Parameters
/// - `args`: One argument, the array to read.
///
/// # Returns
/// The last element or `Value::Nil`.
pub fn last(args: Vec<Value>) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => Ok(elements.last().cloned().unwrap_or(Value::Nil)),
        other => {
            Err(RuntimeError::Builtin { detail: format!("last expects an array, found {other}") })
        },
    }
}

/// Returns a new array holding every element but the first, or `null` when
/// the array is empty.
///
/// The result is a fresh array; the input is left untouched, so repeated
/// `rest` calls are the idiomatic way to walk an array recursively.
///
/// # Parameters
/// - `args`: One argument, the array to slice.
///
/// # Returns
/// A new `Value::Array` or `Value::Nil`.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::function::builtin::rest, value::core::Value};
///
/// let xs = Value::from(vec![Value::Integer(1), Value::Integer(2)]);
/// let r = rest(vec![xs]).unwrap();
/// assert_eq!(r.to_string(), "[2]");
/// ```
pub fn rest(args: Vec<Value>) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => {
            if elements.is_empty() {
                return Ok(Value::Nil);
            }
            Ok(elements[1..].to_vec().into())
        },
        other => {
            Err(RuntimeError::Builtin { detail: format!("rest expects an array, found {other}") })
        },
    }
}

/// Converts a container length to the language's integer type. Lengths
/// beyond `i64::MAX` saturate.
fn count_as_integer(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
