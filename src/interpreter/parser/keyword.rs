use crate::interpreter::cursor::Cursor;

/// The square-root keyword.
pub const SQRT: &str = "SQRT";

/// Outcome of matching a multi-character keyword.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeywordMatch {
    /// Every character matched and the keyword has been consumed.
    Matched,
    /// A character differed or the line ended early.
    Mismatch {
        /// How many bytes the matcher consumed before giving up, including
        /// the mismatched byte itself.
        rollback: usize,
    },
}

/// Matches `keyword` at the cursor one byte at a time.
///
/// The matcher is a small state machine whose state is the number of
/// keyword bytes matched so far. On a mismatch the cursor is left where the
/// matcher stopped; the caller decides whether to roll it back by
/// `rollback` bytes.
///
/// # Parameters
/// - `cursor`: Cursor positioned at the first byte of the candidate keyword.
/// - `keyword`: The ASCII literal to match.
///
/// # Returns
/// [`KeywordMatch::Matched`] or the number of bytes to roll back.
///
/// # Example
/// ```
/// use foldcalc::interpreter::{
///     cursor::Cursor,
///     parser::keyword::{KeywordMatch, SQRT, match_keyword},
/// };
///
/// let mut cursor = Cursor::new("SQX");
/// assert_eq!(match_keyword(&mut cursor, SQRT), KeywordMatch::Mismatch { rollback: 3 });
/// assert_eq!(cursor.position(), 3);
///
/// let mut cursor = Cursor::new("SQRT");
/// assert_eq!(match_keyword(&mut cursor, SQRT), KeywordMatch::Matched);
/// assert!(cursor.is_at_end());
/// ```
pub fn match_keyword(cursor: &mut Cursor<'_>, keyword: &str) -> KeywordMatch {
    let mut matched = 0;
    for &expected in keyword.as_bytes() {
        match cursor.bump() {
            Some(byte) if byte == expected => matched += 1,
            Some(_) => return KeywordMatch::Mismatch { rollback: matched + 1 },
            None => return KeywordMatch::Mismatch { rollback: matched },
        }
    }
    KeywordMatch::Matched
}
