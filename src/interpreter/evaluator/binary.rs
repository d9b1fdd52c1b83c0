use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
    operation::Operation,
};

impl Evaluator<'_> {
    /// Applies a binary operation to the running value and one argument.
    ///
    /// `Set` replaces the left operand, `Power` follows `powf` for every
    /// exponent, and `Remainder` takes the sign of the dividend like C's
    /// `fmod`. A zero right operand is rejected for `Divide` and
    /// `Remainder`.
    ///
    /// # Parameters
    /// - `op`: The binary operation.
    /// - `left`: The running value.
    /// - `right`: The parsed argument.
    ///
    /// # Returns
    /// The combined value.
    ///
    /// # Errors
    /// `DivisionByZero` or `RemainderByZero` for a zero divisor.
    ///
    /// # Panics
    /// If `op` is a unary operation.
    ///
    /// # Example
    /// ```
    /// use foldcalc::{interpreter::evaluator::core::Evaluator, operation::Operation};
    ///
    /// assert_eq!(Evaluator::eval_binary(Operation::Remainder, -7.0, 3.0).unwrap(), -1.0);
    /// assert_eq!(Evaluator::eval_binary(Operation::Power, 2.0, -1.0).unwrap(), 0.5);
    /// assert!(Evaluator::eval_binary(Operation::Divide, 1.0, 0.0).is_err());
    /// ```
    pub fn eval_binary(op: Operation, left: f64, right: f64) -> EvalResult<f64> {
        use Operation::{
            Add, Divide, Multiply, Negate, Power, Remainder, Set, SquareRoot, Subtract,
        };

        Ok(match op {
               Set => right,
               Add => left + right,
               Subtract => left - right,
               Multiply => left * right,
               Divide => {
                   if right == 0.0 {
                       return Err(RuntimeError::DivisionByZero { divisor: right }.into());
                   }
                   left / right
               },
               Remainder => {
                   if right == 0.0 {
                       return Err(RuntimeError::RemainderByZero { divisor: right }.into());
                   }
                   left % right
               },
               Power => left.powf(right),
               Negate | SquareRoot => unreachable!("{op} takes no argument"),
           })
    }
}
