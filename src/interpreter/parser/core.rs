use crate::error::ParseError;

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;
