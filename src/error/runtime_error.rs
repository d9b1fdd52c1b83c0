#[derive(Debug, Clone, PartialEq)]
/// Represents all errors raised while applying an operation to its operands.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The right operand that was rejected.
        divisor: f64,
    },
    /// Attempted remainder by zero.
    RemainderByZero {
        /// The right operand that was rejected.
        divisor: f64,
    },
    /// Square root of a value that is not strictly positive.
    InvalidSquareRoot {
        /// The accumulator value that was rejected.
        value: f64,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { divisor } => {
                write!(f, "Bad right argument for division: {divisor}")
            },
            Self::RemainderByZero { divisor } => {
                write!(f, "Bad right argument for remainder: {divisor}")
            },
            Self::InvalidSquareRoot { value } => write!(f, "Bad argument for SQRT: {value}"),
        }
    }
}

impl std::error::Error for RuntimeError {}
