/// Hash-key representation.
///
/// Defines the `HashKey` type used for the keys of a `Value::Hash`. Only
/// integers, booleans and strings may serve as keys; the conversion from a
/// general runtime value is fallible and reports unhashable values.
pub mod hash_key;

pub mod core;
