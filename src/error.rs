/// Parsing errors.
///
/// Defines all error types that can occur while parsing source code.
/// Parse errors include missing expected tokens and tokens that cannot
/// begin an expression; they are accumulated by the parser rather than
/// raised, so a single pass reports every problem it can find.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include type mismatches, unknown operators, unbound identifiers,
/// calls to non-functions, builtin argument violations, and invalid
/// indexing.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
