use crate::error::EvalError;

/// A destination for failure descriptions produced during evaluation.
///
/// Diagnostics are a side channel: reporting never changes the value an
/// evaluation returns. The evaluator borrows a sink for the duration of a
/// single call, so tests can capture messages without touching a global
/// stream.
pub trait Diagnostics {
    /// Records one failure.
    fn report(&mut self, error: &EvalError);
}

/// Writes each diagnostic as one line on standard error.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stderr;

impl Diagnostics for Stderr {
    fn report(&mut self, error: &EvalError) {
        eprintln!("{error}");
    }
}

/// Emits each diagnostic as a `tracing` warning event.
#[derive(Debug, Default, Clone, Copy)]
pub struct Tracing;

impl Diagnostics for Tracing {
    fn report(&mut self, error: &EvalError) {
        let kind = match error {
            EvalError::Parse(_) => "parse",
            EvalError::Runtime(_) => "runtime",
        };
        tracing::warn!(kind, "{error}");
    }
}

/// Discards every diagnostic.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Diagnostics for Silent {
    fn report(&mut self, _error: &EvalError) {}
}

/// Collects diagnostics in order.
///
/// # Example
/// ```
/// use foldcalc::{error::EvalError, evaluate_with};
///
/// let mut reported: Vec<EvalError> = Vec::new();
/// assert_eq!(evaluate_with(7.0, "+", &mut reported), 7.0);
/// assert_eq!(reported.len(), 1);
/// ```
impl Diagnostics for Vec<EvalError> {
    fn report(&mut self, error: &EvalError) {
        self.push(error.clone());
    }
}
