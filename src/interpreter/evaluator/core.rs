use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{BlockStmt, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::SharedEnv,
        evaluator::{function, index::eval_index, infix::eval_infix, prefix::eval_prefix},
        value::{
            core::{FunctionValue, Value},
            hash_key::HashKey,
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// [`RuntimeError`] describing the failure. The `?` operator gives the
/// short-circuit behavior the language needs: the first error anywhere in
/// a program immediately becomes the result of the whole evaluation.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a program against a root environment.
///
/// Statements run in order. A `return` at the top level stops execution
/// and yields the returned value; otherwise the program's value is the
/// value of its last statement, or `null` for an empty program. The
/// environment is the caller's: successive programs evaluated against the
/// same root observe each other's bindings, which is what gives the REPL
/// its session continuity.
///
/// # Parameters
/// - `program`: The parsed program.
/// - `env`: The root environment to evaluate against.
///
/// # Returns
/// The program's value, or the first runtime error raised.
///
/// # Example
/// ```
/// use monkey::interpreter::{
///     environment::Environment,
///     evaluator::core::eval_program,
///     parser::core::Parser,
/// };
///
/// let (program, errors) = Parser::new("let x = 2; x * 21;").parse();
/// assert!(errors.is_empty());
///
/// let env = Environment::root();
/// let value = eval_program(&program, &env).unwrap();
///
/// assert_eq!(value.to_string(), "42");
/// ```
pub fn eval_program(program: &Program, env: &SharedEnv) -> EvalResult<Value> {
    let mut result = Value::Nil;

    for statement in &program.statements {
        result = eval_statement(statement, env)?;

        if let Value::Return(inner) = result {
            return Ok(*inner);
        }
    }

    Ok(result)
}

/// Evaluates a single statement.
///
/// - An expression statement's value is its expression's value.
/// - A `let` statement evaluates its initializer, binds the result in the
///   current environment, and yields the bound value.
/// - A `return` statement wraps its value (or `null`) in the return
///   sentinel for the enclosing call boundary to unwrap.
pub(in crate::interpreter::evaluator) fn eval_statement(statement: &Statement,
                                                        env: &SharedEnv)
                                                        -> EvalResult<Value> {
    match statement {
        Statement::Expression { expr } => eval_expression(expr, env),
        Statement::Let { name, value } => {
            let value = eval_expression(value, env)?;
            env.borrow_mut().set(name.clone(), value.clone());
            Ok(value)
        },
        Statement::Return { value } => {
            let inner = match value {
                Some(expr) => eval_expression(expr, env)?,
                None => Value::Nil,
            };
            Ok(Value::Return(Box::new(inner)))
        },
    }
}

/// Evaluates a block of statements.
///
/// A return sentinel produced anywhere in the block propagates upward
/// *without unwrapping*, so a `return` nested several blocks deep still
/// exits only the enclosing function. The block's value is otherwise the
/// value of its last statement, or `null` for an empty block.
pub(in crate::interpreter::evaluator) fn eval_block(block: &BlockStmt,
                                                    env: &SharedEnv)
                                                    -> EvalResult<Value> {
    let mut result = Value::Nil;

    for statement in &block.statements {
        result = eval_statement(statement, env)?;

        if matches!(result, Value::Return(_)) {
            return Ok(result);
        }
    }

    Ok(result)
}

/// Evaluates an expression.
///
/// This is the central dispatch of the interpreter: literals construct
/// values directly, function literals capture the current environment by
/// shared handle, and every compound form delegates to its specialized
/// evaluation function. Operand evaluation is strictly left-to-right with
/// errors short-circuiting.
pub(in crate::interpreter::evaluator) fn eval_expression(expr: &Expr,
                                                         env: &SharedEnv)
                                                         -> EvalResult<Value> {
    match expr {
        Expr::IntegerLiteral(value) => Ok(Value::Integer(*value)),
        Expr::BooleanLiteral(value) => Ok(Value::Bool(*value)),
        Expr::StringLiteral(value) => Ok(Value::Str(value.clone())),
        Expr::Identifier(name) => eval_identifier(name, env),
        Expr::Prefix { op, right } => {
            let right = eval_expression(right, env)?;
            eval_prefix(*op, &right)
        },
        Expr::Infix { left, op, right } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            eval_infix(*op, &left, &right)
        },
        Expr::If { condition,
                   consequence,
                   alternative, } => eval_if(condition, consequence, alternative.as_ref(), env),
        Expr::FunctionLiteral { parameters, body } => {
            Ok(Value::Function(Rc::new(FunctionValue { parameters: parameters.clone(),
                                                       body:       body.clone(),
                                                       env:        Rc::clone(env), })))
        },
        Expr::Call { callee, arguments } => function::core::eval_call(callee, arguments, env),
        Expr::ArrayLiteral { elements } => eval_array_literal(elements, env),
        Expr::Index { collection, index } => {
            let collection = eval_expression(collection, env)?;
            let index = eval_expression(index, env)?;
            eval_index(&collection, &index)
        },
        Expr::HashLiteral { pairs } => eval_hash_literal(pairs, env),
    }
}

/// Resolves an identifier.
///
/// The environment chain is searched first, then the built-in table, so a
/// user binding shadows a built-in of the same name.
fn eval_identifier(name: &str, env: &SharedEnv) -> EvalResult<Value> {
    if let Some(value) = env.borrow().get(name) {
        return Ok(value);
    }
    if let Some(builtin) = function::core::lookup(name) {
        return Ok(Value::Builtin(builtin));
    }

    Err(RuntimeError::IdentifierNotDefined { name: name.to_string() })
}

/// Evaluates a conditional expression.
///
/// The condition is truthy unless it is `false` or `null`. A falsy
/// condition with no `else` branch yields `null`.
fn eval_if(condition: &Expr,
           consequence: &BlockStmt,
           alternative: Option<&BlockStmt>,
           env: &SharedEnv)
           -> EvalResult<Value> {
    let condition = eval_expression(condition, env)?;

    if condition.is_truthy() {
        eval_block(consequence, env)
    } else if let Some(alternative) = alternative {
        eval_block(alternative, env)
    } else {
        Ok(Value::Nil)
    }
}

/// Evaluates an array literal, left-to-right with error short-circuit.
fn eval_array_literal(elements: &[Expr], env: &SharedEnv) -> EvalResult<Value> {
    let mut values = Vec::with_capacity(elements.len());

    for element in elements {
        values.push(eval_expression(element, env)?);
    }

    Ok(values.into())
}

/// Evaluates a hash literal.
///
/// Keys and values are evaluated in source order; the first error stops
/// construction. Duplicate keys overwrite in insertion order, so the last
/// occurrence wins.
fn eval_hash_literal(pairs: &[(Expr, Expr)], env: &SharedEnv) -> EvalResult<Value> {
    let mut entries = HashMap::with_capacity(pairs.len());

    for (key_expr, value_expr) in pairs {
        let key = eval_expression(key_expr, env)?;
        let value = eval_expression(value_expr, env)?;

        entries.insert(HashKey::try_from(&key)?, value);
    }

    Ok(Value::Hash(Rc::new(entries)))
}
