/// Core evaluation logic.
///
/// Contains the main evaluation engine: program, statement, block and
/// expression dispatch, identifier resolution, conditionals and literal
/// construction, plus `return` propagation.
pub mod core;

/// Prefix operator evaluation logic.
///
/// Implements logical NOT with the language's truthiness rule and
/// arithmetic negation.
pub mod prefix;

/// Infix operator evaluation logic.
///
/// Handles integer arithmetic and comparison, string concatenation and
/// equality, identity comparison for the remaining types, and the type
/// mismatch rule.
pub mod infix;

/// Index expression evaluation.
///
/// Bounds-checked array access and hash lookup with the hashable-key
/// restriction.
pub mod index;

/// Function evaluation.
///
/// Handles closure calls, argument binding, return-value unwrapping, and
/// the built-in function table.
pub mod function;
