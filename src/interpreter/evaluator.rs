/// Core evaluation logic and context.
///
/// Contains the per-call evaluator, the result type and arity dispatch.
pub mod core;

/// Unary operation evaluation.
///
/// Handles negation and square root of the accumulator.
pub mod unary;

/// Binary operation evaluation.
///
/// Applies one binary operation to a running value and an argument.
pub mod binary;

/// Argument loop for binary and folded operations.
///
/// Parses arguments one by one and threads the running value through them.
pub mod fold;
