use crate::{
    error::ParseError,
    interpreter::{
        cursor::Cursor,
        evaluator::core::{EvalResult, Evaluator},
        parser::argument::parse_argument,
    },
    operation::Operation,
};

impl Evaluator<'_> {
    /// Evaluates a binary operation over the arguments that follow it.
    ///
    /// Each step skips whitespace, parses one argument and applies `op` to
    /// the running value, starting from `current`. Outside fold mode exactly
    /// one step runs. In fold mode steps repeat until the line is consumed;
    /// running out of input after at least one argument ends the sequence
    /// normally.
    ///
    /// Any failure discards the partial result: the caller only ever sees
    /// the final value or an error.
    ///
    /// # Parameters
    /// - `op`: The binary operation.
    /// - `current`: The accumulator, used as the first left operand.
    /// - `cursor`: Cursor positioned right after the operation.
    ///
    /// # Returns
    /// The value after the last application.
    ///
    /// # Errors
    /// - `MissingArgument` if a step finds no argument.
    /// - Argument parse errors and zero-divisor errors from any step.
    pub fn eval_fold(op: Operation, current: f64, cursor: &mut Cursor<'_>) -> EvalResult<f64> {
        let mut value = current;
        let mut applied = 0_usize;

        loop {
            cursor.skip_whitespace();
            let start = cursor.position();
            let argument = parse_argument(cursor);

            if cursor.position() == start {
                if cursor.is_fold() && cursor.is_at_end() && applied > 0 {
                    break;
                }
                return Err(ParseError::MissingArgument.into());
            }

            let argument = argument?;
            value = Self::eval_binary(op, value, argument)?;
            applied += 1;
            tracing::trace!(%op, argument, value, "applied argument");

            if !cursor.is_fold() || cursor.is_at_end() {
                break;
            }
        }

        Ok(value)
    }
}
