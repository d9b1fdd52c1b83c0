/// Shared parser types.
pub mod core;

/// Keyword matching.
///
/// Matches multi-character keywords such as `SQRT` and reports how far to
/// roll back on a partial match.
pub mod keyword;

/// Operation recognition.
///
/// Reads the optional fold marker and the operation token at the start of a
/// line.
pub mod operation;

/// Argument parsing.
///
/// Reads one fixed-precision decimal number.
pub mod argument;
