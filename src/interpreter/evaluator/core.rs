use crate::{
    diagnostics::Diagnostics,
    error::EvalError,
    interpreter::{cursor::Cursor, parser::operation::parse_operation},
    operation::Arity,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Stores the context of a single evaluation call.
///
/// The evaluator keeps no state between lines. It only borrows the sink
/// that receives diagnostics which do not abort evaluation, so one
/// `Evaluator` may be reused for any number of independent lines.
pub struct Evaluator<'d> {
    diagnostics: &'d mut dyn Diagnostics,
}

impl<'d> Evaluator<'d> {
    /// Creates an evaluator reporting to `diagnostics`.
    pub fn new(diagnostics: &'d mut dyn Diagnostics) -> Self {
        Self { diagnostics }
    }

    /// Evaluates one instruction line against the accumulator.
    ///
    /// The operation is recognized first, then dispatched by arity: unary
    /// operations act on `current` directly, binary operations read their
    /// arguments from the rest of the line.
    ///
    /// # Parameters
    /// - `current`: The accumulator value before the line.
    /// - `line`: The instruction text.
    ///
    /// # Returns
    /// The new accumulator value.
    ///
    /// # Errors
    /// Any recognition, argument or operand failure. The square root of a
    /// non-positive accumulator is reported to the sink instead and yields
    /// `Ok(current)`.
    ///
    /// # Example
    /// ```
    /// use foldcalc::{diagnostics::Silent, interpreter::evaluator::core::Evaluator};
    ///
    /// let mut sink = Silent;
    /// let mut evaluator = Evaluator::new(&mut sink);
    /// assert_eq!(evaluator.eval_line(1.0, "(+) 1 2 3").unwrap(), 7.0);
    /// assert!(evaluator.eval_line(1.0, "/0").is_err());
    /// ```
    pub fn eval_line(&mut self, current: f64, line: &str) -> EvalResult<f64> {
        let mut cursor = Cursor::new(line);
        let operation = parse_operation(&mut cursor)?;
        tracing::debug!(%operation, fold = cursor.is_fold(), "recognized operation");

        match operation.arity() {
            Arity::Unary => self.eval_unary(operation, current, &cursor),
            Arity::Binary => Self::eval_fold(operation, current, &mut cursor),
        }
    }

    /// Evaluates one line, reporting any failure and keeping `current`.
    #[must_use]
    pub fn evaluate(&mut self, current: f64, line: &str) -> f64 {
        self.eval_line(current, line).unwrap_or_else(|error| {
                                         self.diagnostics.report(&error);
                                         current
                                     })
    }

    pub(super) fn report(&mut self, error: &EvalError) {
        self.diagnostics.report(error);
    }
}
