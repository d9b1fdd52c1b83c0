use crate::{
    error::ParseError,
    interpreter::{cursor::Cursor, parser::core::ParseResult},
};

/// Maximum number of digits read for a single argument.
pub const MAX_DECIMAL_DIGITS: usize = 10;

/// Parses one decimal argument at the cursor.
///
/// Digits before the decimal point build the integer part; each digit after
/// it is weighted by a further factor of ten. Reading stops at the end of the
/// line, after [`MAX_DECIMAL_DIGITS`] digits, or, in fold mode, at a space.
/// Outside fold mode a space is rejected like any other stray character.
///
/// A token may be empty: nothing is consumed and `0.0` is returned, leaving
/// the caller to notice that the cursor did not move.
///
/// Grammar: `argument := [0-9]* ("." [0-9]*)?`
///
/// # Parameters
/// - `cursor`: Cursor positioned at the first byte of the token.
///
/// # Returns
/// The parsed value, with the cursor positioned right after the token.
///
/// # Errors
/// - `InvalidArgument` on any byte that cannot continue the number.
/// - `ArgumentNotFullyParsed` if the digit limit is reached before the line
///   ends.
///
/// # Example
/// ```
/// use foldcalc::interpreter::{cursor::Cursor, parser::argument::parse_argument};
///
/// let mut cursor = Cursor::new("12.5");
/// assert_eq!(parse_argument(&mut cursor), Ok(12.5));
/// assert!(cursor.is_at_end());
///
/// let mut cursor = Cursor::new("7 ");
/// assert!(parse_argument(&mut cursor).is_err());
/// ```
pub fn parse_argument(cursor: &mut Cursor<'_>) -> ParseResult<f64> {
    let mut value = 0.0;
    let mut digits = 0;
    // Weight of the last fractional digit, once a decimal point was seen.
    let mut weight: Option<f64> = None;

    while digits < MAX_DECIMAL_DIGITS
          && let Some(byte) = cursor.peek()
    {
        match byte {
            b'0'..=b'9' => {
                let digit = f64::from(byte - b'0');
                match weight.as_mut() {
                    None => value = value * 10.0 + digit,
                    Some(weight) => {
                        *weight /= 10.0;
                        value += digit * *weight;
                    },
                }
                cursor.bump();
                digits += 1;
            },
            b'.' if weight.is_none() => {
                weight = Some(1.0);
                cursor.bump();
            },
            b' ' if cursor.is_fold() => break,
            _ => {
                return Err(ParseError::InvalidArgument { position: cursor.position(),
                                                         suffix:   cursor.rest().to_string(), });
            },
        }
    }

    if digits >= MAX_DECIMAL_DIGITS && !cursor.is_at_end() {
        return Err(ParseError::ArgumentNotFullyParsed { suffix: cursor.rest().to_string() });
    }

    Ok(value)
}
