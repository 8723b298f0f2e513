#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
///
/// A runtime error short-circuits the surrounding construct immediately:
/// every evaluation function propagates it outward with `?`, so the first
/// failure becomes the result of the whole program. The rendered form of
/// each variant is the canonical `<kind>: <detail>` text checked by the
/// test suite; operand details are rendered with the value's `inspect`
/// form, not its type name.
pub enum RuntimeError {
    /// An infix operation was applied to operands of differing types.
    TypeMismatch {
        /// Inspected left operand.
        left:     String,
        /// The operator spelling.
        operator: String,
        /// Inspected right operand.
        right:    String,
    },
    /// An operator is not defined for its operand type(s).
    UnknownOperator {
        /// The offending operation, e.g. `-true`.
        detail: String,
    },
    /// A name was looked up but bound nowhere along the environment chain.
    IdentifierNotDefined {
        /// The unbound name.
        name: String,
    },
    /// A call expression's callee evaluated to something not callable.
    NotAFunction {
        /// Inspected callee value.
        callee: String,
    },
    /// A built-in function rejected its arguments (count or type).
    Builtin {
        /// Description of the violation.
        detail: String,
    },
    /// An array was indexed outside `0..len`.
    IndexOutOfRange {
        /// The requested index.
        index: i64,
    },
    /// A value that cannot serve as a hash key was used as one.
    UnhashableKey {
        /// Inspected key value.
        key: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { left,
                                 operator,
                                 right, } => {
                write!(f, "type mismatch: {left} {operator} {right}")
            },
            Self::UnknownOperator { detail } => write!(f, "unknown operator: {detail}"),
            Self::IdentifierNotDefined { name } => write!(f, "identifier not defined: {name}"),
            Self::NotAFunction { callee } => write!(f, "not a function: {callee}"),
            Self::Builtin { detail } => write!(f, "builtin error: {detail}"),
            Self::IndexOutOfRange { index } => write!(f, "array index out of range: {index}"),
            Self::UnhashableKey { key } => write!(f, "unhashable key: {key}"),
        }
    }
}

impl std::error::Error for RuntimeError {}
