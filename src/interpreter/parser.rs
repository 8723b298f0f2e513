/// Core parser state and the Pratt expression loop.
///
/// Holds the token cursor, the operator precedence table, error collection,
/// and the shared comma-list helper used by calls, arrays and parameter
/// lists.
pub mod core;

/// Statement parsing.
///
/// Handles `let` statements, `return` statements, expression statements and
/// brace-delimited blocks.
pub mod statement;

/// Prefix position parsing.
///
/// Everything an expression can start with: literals, identifiers, prefix
/// operators, grouped expressions, conditionals, function literals, arrays
/// and hashes.
pub mod prefix;

/// Infix position parsing.
///
/// Binary operators plus the call and index forms, which bind tighter than
/// any operator.
pub mod infix;
