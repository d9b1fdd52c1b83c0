use crate::{
    error::ParseError,
    interpreter::{
        cursor::Cursor,
        parser::{
            core::ParseResult,
            keyword::{KeywordMatch, SQRT, match_keyword},
        },
    },
    operation::Operation,
};

/// Recognizes the operation at the start of a line.
///
/// Grammar: `operation := "(" op ")" | op` where `op` is one of
/// `+ - * / % _ ^`, the keyword `SQRT`, or a leading digit. A leading digit
/// selects [`Operation::Set`] and is left in place as the first digit of the
/// argument. The fold marker `(` switches the cursor into fold mode and must
/// be closed by `)` right after the operation.
///
/// On an unknown operation the cursor is rolled back over everything the
/// recognizer consumed, fold marker included, and the error carries the
/// text from that point on.
///
/// # Parameters
/// - `cursor`: Cursor at the start of the line.
///
/// # Returns
/// The recognized operation, with the cursor positioned right after it.
///
/// # Errors
/// - `UnknownOperation` if no operation matches.
/// - `IncorrectFold` if a fold marker is not closed.
///
/// # Example
/// ```
/// use foldcalc::{
///     interpreter::{cursor::Cursor, parser::operation::parse_operation},
///     operation::Operation,
/// };
///
/// let mut cursor = Cursor::new("(*) 2 3");
/// assert_eq!(parse_operation(&mut cursor), Ok(Operation::Multiply));
/// assert!(cursor.is_fold());
/// assert_eq!(cursor.rest(), " 2 3");
///
/// let mut cursor = Cursor::new("42");
/// assert_eq!(parse_operation(&mut cursor), Ok(Operation::Set));
/// assert_eq!(cursor.rest(), "42");
/// ```
pub fn parse_operation(cursor: &mut Cursor<'_>) -> ParseResult<Operation> {
    if cursor.eat(b'(') {
        cursor.set_fold(true);
    }

    let operation = match cursor.peek() {
        Some(b'0'..=b'9') => Operation::Set,
        Some(b'S') => match match_keyword(cursor, SQRT) {
            KeywordMatch::Matched => Operation::SquareRoot,
            KeywordMatch::Mismatch { rollback } => {
                return Err(unknown_operation(cursor, rollback));
            },
        },
        Some(symbol) => {
            let Some(operation) = Operation::from_symbol(symbol) else {
                return Err(unknown_operation(cursor, 0));
            };
            cursor.bump();
            operation
        },
        None => return Err(unknown_operation(cursor, 0)),
    };

    if cursor.is_fold() && !cursor.eat(b')') {
        return Err(ParseError::IncorrectFold { line: cursor.line().to_string() });
    }

    Ok(operation)
}

/// Rolls the cursor back to where recognition started and builds the error.
fn unknown_operation(cursor: &mut Cursor<'_>, consumed: usize) -> ParseError {
    cursor.retreat(consumed + usize::from(cursor.is_fold()));
    ParseError::UnknownOperation { text: cursor.rest().to_string() }
}
