use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates an infix operation on two already-evaluated operands.
///
/// The dispatch order encodes the language's typing rules:
/// 1. Two integers support the full arithmetic and comparison set.
/// 2. Two strings support `+` (concatenation) and `==` (content equality);
///    every other string operator is an `unknown operator` error.
/// 3. Operands of differing types are a `type mismatch` error.
/// 4. Matching types beyond the above compare by identity under `==` and
///    `!=`; any other operator is an `unknown operator` error.
///
/// # Parameters
/// - `op`: The infix operator.
/// - `left`: The evaluated left operand.
/// - `right`: The evaluated right operand.
///
/// # Returns
/// The computed value or the applicable error.
pub(in crate::interpreter::evaluator) fn eval_infix(op: InfixOperator,
                                                    left: &Value,
                                                    right: &Value)
                                                    -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => eval_integer_infix(op, *a, *b),
        (Value::Str(a), Value::Str(b)) => eval_string_infix(op, a, b),
        _ if !left.same_type(right) => {
            Err(RuntimeError::TypeMismatch { left:     left.to_string(),
                                             operator: op.to_string(),
                                             right:    right.to_string(), })
        },
        _ => match op {
            InfixOperator::Equal => Ok(Value::Bool(left == right)),
            InfixOperator::NotEqual => Ok(Value::Bool(left != right)),
            _ => Err(RuntimeError::UnknownOperator { detail: format!("{left} {op} {right}") }),
        },
    }
}

/// Integer arithmetic and comparison.
///
/// Arithmetic wraps at the 64-bit signed boundary. Division by zero is not
/// guarded and panics; programs are expected not to divide by zero.
fn eval_integer_infix(op: InfixOperator, a: i64, b: i64) -> EvalResult<Value> {
    use InfixOperator::{Add, Div, Equal, Greater, Less, Mul, NotEqual, Sub};

    match op {
        Add => Ok(Value::Integer(a.wrapping_add(b))),
        Sub => Ok(Value::Integer(a.wrapping_sub(b))),
        Mul => Ok(Value::Integer(a.wrapping_mul(b))),
        Div => Ok(Value::Integer(a.wrapping_div(b))),
        Less => Ok(Value::Bool(a < b)),
        Greater => Ok(Value::Bool(a > b)),
        Equal => Ok(Value::Bool(a == b)),
        NotEqual => Ok(Value::Bool(a != b)),
    }
}

/// String concatenation and content equality.
fn eval_string_infix(op: InfixOperator, a: &str, b: &str) -> EvalResult<Value> {
    match op {
        InfixOperator::Add => Ok(Value::Str(format!("{a}{b}"))),
        InfixOperator::Equal => Ok(Value::Bool(a == b)),
        _ => Err(RuntimeError::UnknownOperator { detail: format!("{a} {op} {b}") }),
    }
}
