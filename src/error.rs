/// Parsing errors.
///
/// Defines the errors raised while recognizing the operation of a line and
/// reading its numeric arguments: unknown keywords, malformed fold markers,
/// bad or truncated numbers, missing arguments and unexpected trailing text.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised when an operation rejects its operands, such
/// as a zero divisor or the square root of a non-positive value.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq)]
/// Any failure reported while evaluating a single instruction line.
pub enum EvalError {
    /// The line could not be read.
    Parse(ParseError),
    /// An operation rejected its operands.
    Runtime(RuntimeError),
}

impl From<ParseError> for EvalError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
