use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{
        cursor::Cursor,
        evaluator::core::{EvalResult, Evaluator},
    },
    operation::Operation,
};

impl Evaluator<'_> {
    /// Evaluates a unary operation on the accumulator.
    ///
    /// Supported operations:
    /// - `Negate`: the additive inverse.
    /// - `SquareRoot`: the square root of a strictly positive value. Any
    ///   other value is reported as a bad argument and returned unchanged;
    ///   this is not treated as a failed evaluation.
    ///
    /// The operation must end the line.
    ///
    /// # Parameters
    /// - `op`: Unary operation.
    /// - `current`: The accumulator.
    /// - `cursor`: Cursor positioned right after the operation.
    ///
    /// # Returns
    /// The new accumulator value.
    ///
    /// # Errors
    /// `UnexpectedSuffix` if text remains after the operation.
    pub fn eval_unary(&mut self,
                      op: Operation,
                      current: f64,
                      cursor: &Cursor<'_>)
                      -> EvalResult<f64> {
        if !cursor.is_at_end() {
            return Err(ParseError::UnexpectedSuffix { suffix: cursor.rest().to_string() }.into());
        }

        match op {
            Operation::Negate => Ok(-current),
            Operation::SquareRoot => {
                if current > 0.0 {
                    Ok(current.sqrt())
                } else {
                    self.report(&RuntimeError::InvalidSquareRoot { value: current }.into());
                    Ok(current)
                }
            },
            // Binary operations never reach here; leave the value alone.
            _ => Ok(current),
        }
    }
}
