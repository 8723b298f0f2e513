use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a prefix operation on an already-evaluated operand.
///
/// Supported operators:
/// - `Not`: logical negation. `!x` is `true` exactly when `x` is `false`
///   or `null`; every other value, including `0` and empty containers,
///   negates to `false`.
/// - `Negate`: arithmetic negation, defined for integers only. Negation
///   wraps at the 64-bit boundary.
///
/// # Parameters
/// - `op`: The prefix operator.
/// - `right`: The evaluated operand.
///
/// # Returns
/// The computed value, or an `unknown operator` error when `-` is applied
/// to a non-integer.
pub(in crate::interpreter::evaluator) fn eval_prefix(op: PrefixOperator,
                                                     right: &Value)
                                                     -> EvalResult<Value> {
    match op {
        PrefixOperator::Not => Ok(Value::Bool(!right.is_truthy())),
        PrefixOperator::Negate => match right {
            Value::Integer(n) => Ok(Value::Integer(n.wrapping_neg())),
            _ => Err(RuntimeError::UnknownOperator { detail: format!("-{right}") }),
        },
    }
}
