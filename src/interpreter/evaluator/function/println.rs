use crate::interpreter::{evaluator::core::EvalResult, value::core::Value};

/// Prints values to standard output and returns `null`.
///
/// Each argument is rendered with its canonical `inspect` form; arguments
/// are separated by single spaces and followed by a newline. Calling with
/// no arguments prints a bare newline.
///
/// # Parameters
/// - `args`: Any number of values to print.
///
/// # Returns
/// `Value::Nil`.
pub fn println(args: Vec<Value>) -> EvalResult<Value> {
    let rendered: Vec<String> = args.iter().map(ToString::to_string).collect();
    println!("{}", rendered.join(" "));

    Ok(Value::Nil)
}
