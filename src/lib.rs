//! # foldcalc
//!
//! foldcalc evaluates single-line calculator instructions against a running
//! accumulator. An instruction names an operation and, for binary
//! operations, a numeric argument:
//!
//! ```text
//! 5          set the accumulator to 5
//! + 2.5      add 2.5
//! SQRT       take the square root
//! (*) 2 3 4  fold: multiply by 2, then 3, then 4
//! ```
//!
//! Evaluation never fails from the caller's point of view. A malformed line
//! or a rejected operand leaves the accumulator unchanged and produces a
//! diagnostic on an injected sink.

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
    diagnostics::{Diagnostics, Stderr},
    interpreter::evaluator::core::Evaluator,
};

/// Destinations for evaluation diagnostics.
///
/// This module declares the `Diagnostics` trait through which failures are
/// reported, together with sinks for standard error, `tracing` events,
/// in-memory collection and silence.
pub mod diagnostics;
/// Provides unified error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (recognition, argument
///   parsing, operand checks).
/// - Attaches the offending text or index for context.
/// - Implements the standard error traits.
pub mod error;
/// Reads and executes instruction lines.
///
/// This module ties together the cursor, the operation and argument parsers
/// and the evaluator.
pub mod interpreter;
/// Defines the closed set of operations and their arity.
pub mod operation;

/// Evaluates one instruction line against the accumulator.
///
/// Diagnostics are written to standard error. See [`evaluate_with`] to
/// choose another sink.
///
/// # Example
/// ```
/// use foldcalc::evaluate;
///
/// assert_eq!(evaluate(0.0, "(+) 1 2 3"), 6.0);
/// assert_eq!(evaluate(10.0, "(/) 2 0 5"), 10.0);
/// ```
#[must_use]
pub fn evaluate(current: f64, line: &str) -> f64 {
    evaluate_with(current, line, &mut Stderr)
}

/// Evaluates one instruction line, reporting failures to `diagnostics`.
///
/// Returns the new accumulator on success. On any failure the diagnostic is
/// reported and `current` is returned unchanged.
///
/// # Example
/// ```
/// use foldcalc::{error::EvalError, evaluate_with};
///
/// let mut reported: Vec<EvalError> = Vec::new();
/// assert_eq!(evaluate_with(3.0, "SQX", &mut reported), 3.0);
/// assert_eq!(reported[0].to_string(), "Unknown operation SQX");
/// ```
#[must_use]
pub fn evaluate_with(current: f64, line: &str, diagnostics: &mut dyn Diagnostics) -> f64 {
    Evaluator::new(diagnostics).evaluate(current, line)
}
