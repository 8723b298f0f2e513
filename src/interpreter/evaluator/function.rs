/// Call evaluation and the builtin registry.
///
/// Evaluates call expressions against function values and built-ins, and
/// owns the static table that maps builtin names to their handlers and
/// accepted arities.
pub mod core;

/// Collection built-ins: `len`, `first`, `last` and `rest`.
pub mod builtin;

/// The `append` built-in.
pub mod append;

/// The `println` built-in.
pub mod println;
