#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reading an instruction line.
pub enum ParseError {
    /// The line does not start with a known operation.
    UnknownOperation {
        /// The text from the position the recognizer rolled back to.
        text: String,
    },
    /// A fold marker `(` was not followed by the operation and `)`.
    IncorrectFold {
        /// The whole instruction line.
        line: String,
    },
    /// An argument contained a character that cannot appear in a number.
    InvalidArgument {
        /// Byte index of the offending character.
        position: usize,
        /// The unparsed remainder of the line, starting at `position`.
        suffix:   String,
    },
    /// An argument reached the digit limit with input left over.
    ArgumentNotFullyParsed {
        /// The unparsed remainder of the line.
        suffix: String,
    },
    /// A binary operation found no argument to apply.
    MissingArgument,
    /// A unary operation was followed by more input.
    UnexpectedSuffix {
        /// The remainder of the line after the operation.
        suffix: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownOperation { text } => write!(f, "Unknown operation {text}"),
            Self::IncorrectFold { line } => {
                write!(f, "Incorrect folded operation specified {line}")
            },
            Self::InvalidArgument { position, suffix } => {
                write!(f, "Argument parsing error at {position}: '{suffix}'")
            },
            Self::ArgumentNotFullyParsed { suffix } => {
                write!(f, "Argument isn't fully parsed, suffix left: '{suffix}'")
            },
            Self::MissingArgument => write!(f, "No argument for a binary operation"),
            Self::UnexpectedSuffix { suffix } => {
                write!(f, "Unexpected suffix for a unary operation: '{suffix}'")
            },
        }
    }
}

impl std::error::Error for ParseError {}
