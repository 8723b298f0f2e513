use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::BlockStmt,
    interpreter::{
        environment::SharedEnv,
        evaluator::function::core::BuiltinDef,
        value::hash_key::HashKey,
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// bindings, function returns, and conditional evaluations. Containers hold
/// shared handles: cloning a `Value` is always cheap, and two bindings
/// produced from the same array or hash observe the same underlying
/// storage.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer. Arithmetic wraps on overflow.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// The absence of a value. Produced by `if` expressions without a taken
    /// branch and by hash lookups on a missing key. Inspects as `null`.
    Nil,
    /// An immutable UTF-8 string.
    Str(String),
    /// An array of `Value` elements behind a shared handle.
    Array(Rc<Vec<Self>>),
    /// A hash table from hashable keys to values behind a shared handle.
    Hash(Rc<HashMap<HashKey, Self>>),
    /// A user-defined function together with its captured environment.
    Function(Rc<FunctionValue>),
    /// A built-in function, resolved from the static builtin table.
    Builtin(&'static BuiltinDef),
    /// A `return` sentinel wrapping the returned value. It travels through
    /// block evaluation untouched and is unwrapped exactly once, at the
    /// function-call boundary or the program top level. Never stored in an
    /// environment or exposed to user code.
    Return(Box<Self>),
}

/// A function value: a closure over the environment in which its literal
/// was evaluated.
///
/// Calls extend the *captured* environment, never the caller's, which is
/// what gives the language its lexical scoping. The shared handle keeps the
/// captured environment alive for as long as the function is reachable.
#[derive(Debug)]
pub struct FunctionValue {
    /// Parameter names in declaration order.
    pub parameters: Vec<String>,
    /// The function body.
    pub body:       BlockStmt,
    /// The environment captured at literal-evaluation time.
    pub env:        SharedEnv,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl Value {
    /// Reports whether the value counts as true in a condition.
    ///
    /// Only `false` and `null` are falsy; every other value, including `0`,
    /// the empty string and empty containers, is truthy.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(0).is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(!Value::Nil.is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Bool(false) | Self::Nil)
    }

    /// Reports whether `self` and `other` are the same kind of value.
    ///
    /// Used by infix evaluation to distinguish a type mismatch from an
    /// operator that is merely undefined for a matching pair of types.
    #[must_use]
    pub fn same_type(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Returns `true` if the value is [`Integer`].
    ///
    /// [`Integer`]: Value::Integer
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }
}

/// Equality over values.
///
/// Integers, booleans, nil and strings compare by content. Arrays, hashes
/// and functions compare by identity of their shared handle, which is the
/// observable behavior of `==` in the language for those types: two
/// bindings are equal only when they refer to the same underlying object.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Nil, Self::Nil) => true,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b),
            (Self::Hash(a), Self::Hash(b)) => Rc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => std::ptr::eq(*a, *b),
            (Self::Return(a), Self::Return(b)) => a == b,
            _ => false,
        }
    }
}

/// The canonical textual rendering of a value, used by `println`, the REPL
/// and the test suite. Hash entries are printed in sorted key order so the
/// rendering is stable across runs.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Nil => write!(f, "null"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Array(a) => {
                write!(f, "[")?;

                for (index, value) in a.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Hash(h) => {
                let mut entries: Vec<(&HashKey, &Self)> = h.iter().collect();
                entries.sort_by(|(a, _), (b, _)| a.cmp(b));

                write!(f, "{{")?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
            Self::Function(func) => {
                write!(f, "fn({}) {{ {} }}", func.parameters.join(", "), func.body)
            },
            Self::Builtin(builtin) => write!(f, "builtin function {}", builtin.name),
            Self::Return(inner) => write!(f, "{inner}"),
        }
    }
}
