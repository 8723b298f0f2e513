//! # monkey
//!
//! monkey is a tree-walking interpreter for the Monkey programming
//! language: a small, dynamically-typed, expression-oriented language with
//! first-class functions, lexical closures, integers, booleans, strings,
//! arrays, and hash tables. Source text is lexed into tokens, parsed into
//! an abstract syntax tree, and evaluated directly against a nested
//! environment.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{
        environment::{Environment, SharedEnv},
        evaluator::core::eval_program,
        parser::core::Parser,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums and related types
/// that represent the syntactic structure of source code as a tree. The
/// AST is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Provides the canonical re-printing of parsed code via `Display`.
/// - Enables extensible and robust handling of parsed code.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing,
/// parsing, or evaluating code. It standardizes error reporting and
/// carries detailed information about failures.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Renders each error in its canonical textual form.
/// - Supports integration with standard error handling traits and
///   reporting utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, environments, error handling, and the interactive
/// driver to provide a complete runtime for source code evaluation. It
/// exposes the public API for interpreting and executing programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses a source string into a program.
///
/// # Errors
/// Returns every collected syntax error when the source does not parse
/// cleanly; the partial program is discarded in that case.
///
/// # Examples
/// ```
/// use monkey::parse_source;
///
/// let program = parse_source("1 + 2 * 3;").unwrap();
/// assert_eq!(program.to_string(), "(1 + (2 * 3))");
///
/// let errors = parse_source("let = 5;").unwrap_err();
/// assert_eq!(errors[0].to_string(),
///            "expected next token to be IDENT, got = instead");
/// ```
pub fn parse_source(source: &str) -> Result<Program, Vec<ParseError>> {
    let (program, errors) = Parser::new(source).parse();

    if errors.is_empty() { Ok(program) } else { Err(errors) }
}

/// Parses and evaluates a source string against an existing environment.
///
/// Bindings created by the program stay in `env`, so feeding successive
/// sources to the same environment behaves like consecutive REPL lines.
/// When the source fails to parse, the first collected syntax error is
/// returned and the environment is left untouched.
///
/// # Errors
/// Returns the first parse error, or the runtime error that stopped
/// evaluation.
///
/// # Examples
/// ```
/// use monkey::{eval_source, interpreter::environment::Environment};
///
/// let env = Environment::root();
/// eval_source("let three = 3;", &env).unwrap();
///
/// let value = eval_source("three * 14;", &env).unwrap();
/// assert_eq!(value.to_string(), "42");
/// ```
pub fn eval_source(source: &str, env: &SharedEnv) -> Result<Value, Box<dyn std::error::Error>> {
    let program = match parse_source(source) {
        Ok(program) => program,
        Err(mut errors) => return Err(Box::new(errors.remove(0))),
    };

    Ok(eval_program(&program, env)?)
}

/// Runs a complete script in a fresh environment.
///
/// This is the entry point used by the command-line driver. With
/// `auto_print` set, the script's final value is written to standard
/// output unless it is `null`.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use monkey::interpret;
///
/// // Simple script: the result will be calculated and no error should occur.
/// let source = "let result = 2 + 2;";
/// assert!(interpret(source, false).is_ok());
///
/// // Example with an intentional error (unknown identifier).
/// let source = "let y = x + 1;"; // 'x' is not defined
/// assert!(interpret(source, false).is_err());
/// ```
pub fn interpret(source: &str, auto_print: bool) -> Result<(), Box<dyn std::error::Error>> {
    let env = Environment::root();
    let value = eval_source(source, &env)?;

    if auto_print && !matches!(value, Value::Nil) {
        println!("{value}");
    }

    Ok(())
}
