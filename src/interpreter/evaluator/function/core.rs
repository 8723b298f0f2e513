use std::rc::Rc;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::{Environment, SharedEnv},
        evaluator::{
            core::{EvalResult, eval_block, eval_expression},
            function::{append, builtin, println},
        },
        value::core::{FunctionValue, Value},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluated argument values by ownership and must
/// not retain them past the call. It returns the call's value wrapped in
/// `EvalResult`.
type BuiltinFn = fn(Vec<Value>) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `Any` accepts every argument count, including zero.
#[derive(Debug, Clone, Copy)]
enum Arity {
    Exact(usize),
    Any,
}

/// A registered built-in function: its name, accepted arity, and handler.
///
/// Entries live in the static builtin table for the lifetime of the
/// program; a `Value::Builtin` is simply a reference to one of them, which
/// makes builtin values trivially cheap to copy and identity-comparable.
#[derive(Debug)]
pub struct BuiltinDef {
    /// The name the identifier resolver looks up.
    pub name: &'static str,
    arity:    Arity,
    func:     BuiltinFn,
}

/// Defines builtin functions by generating the lookup table and a name
/// list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// The names of all registered built-in functions, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "len"     => { arity: Arity::Exact(1), func: builtin::len },
    "first"   => { arity: Arity::Exact(1), func: builtin::first },
    "last"    => { arity: Arity::Exact(1), func: builtin::last },
    "rest"    => { arity: Arity::Exact(1), func: builtin::rest },
    "append"  => { arity: Arity::Exact(2), func: append::append },
    "println" => { arity: Arity::Any, func: println::println },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity
    /// constraint.
    fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::Any => true,
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(m) => write!(f, "{m}"),
            Self::Any => write!(f, "any"),
        }
    }
}

/// Resolves a name against the builtin table.
///
/// Identifier evaluation consults this after the environment chain, so a
/// user binding shadows a builtin of the same name.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name)
}

/// Evaluates a call expression.
///
/// The callee is evaluated first, then the arguments strictly
/// left-to-right; the first error anywhere short-circuits the call. The
/// resulting values are applied to the callee, which must be a function or
/// a builtin.
///
/// # Parameters
/// - `callee`: The expression producing the function to call.
/// - `arguments`: Argument expressions in call order.
/// - `env`: The caller's environment, used only to evaluate the callee and
///   arguments; the invoked function body never sees it.
///
/// # Returns
/// The call's value or the first error raised.
pub(in crate::interpreter::evaluator) fn eval_call(callee: &Expr,
                                                   arguments: &[Expr],
                                                   env: &SharedEnv)
                                                   -> EvalResult<Value> {
    let callee = eval_expression(callee, env)?;

    let mut args = Vec::with_capacity(arguments.len());
    for argument in arguments {
        args.push(eval_expression(argument, env)?);
    }

    match &callee {
        Value::Function(func) => call_function(func, args),
        Value::Builtin(builtin) => call_builtin(builtin, args),
        _ => Err(RuntimeError::NotAFunction { callee: callee.to_string() }),
    }
}

/// Invokes a user-defined function.
///
/// A fresh scope is created as a child of the function's *captured*
/// environment, never the caller's; parameters are bound positionally.
/// Arity is not enforced: missing parameters stay unbound and surplus
/// arguments are dropped. A single return-sentinel layer is unwrapped
/// here, so a `return` exits exactly one call.
fn call_function(func: &FunctionValue, args: Vec<Value>) -> EvalResult<Value> {
    let scope = Environment::enclosed(Rc::clone(&func.env));

    for (parameter, argument) in func.parameters.iter().zip(args) {
        scope.borrow_mut().set(parameter.clone(), argument);
    }

    let result = eval_block(&func.body, &scope)?;

    match result {
        Value::Return(inner) => Ok(*inner),
        other => Ok(other),
    }
}

/// Invokes a builtin after checking its declared arity.
fn call_builtin(builtin: &BuiltinDef, args: Vec<Value>) -> EvalResult<Value> {
    if !builtin.arity.check(args.len()) {
        return Err(RuntimeError::Builtin { detail: format!("wrong number of arguments to {}: \
                                                            got {}, want {}",
                                                           builtin.name,
                                                           args.len(),
                                                           builtin.arity), });
    }

    (builtin.func)(args)
}
