/// The cursor module tracks the read position inside one line.
///
/// A cursor is created per evaluation call, walks the line byte by byte and
/// carries the fold flag set by a leading `(`.
pub mod cursor;
/// The evaluator module applies recognized operations to the accumulator.
///
/// # Responsibilities
/// - Dispatches on operation arity.
/// - Applies unary operations to the accumulator.
/// - Drives the argument loop for binary and folded operations.
/// - Reports operand errors such as division by zero.
pub mod evaluator;
/// The parser module reads operations and arguments from the line.
///
/// # Responsibilities
/// - Recognizes the operation token, including the `SQRT` keyword and the
///   fold wrapper.
/// - Parses bounded decimal arguments.
pub mod parser;
