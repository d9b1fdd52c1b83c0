/// A read position inside one instruction line.
///
/// The cursor walks the line byte by byte. It only moves forward, except
/// when the recognizer rolls back a partially matched keyword. The `fold`
/// flag records whether the line opened with a fold marker `(`.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    line:     &'a str,
    position: usize,
    fold:     bool,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `line` with fold mode off.
    #[must_use]
    pub const fn new(line: &'a str) -> Self {
        Self { line,
               position: 0,
               fold: false }
    }

    /// The full line being read.
    #[must_use]
    pub const fn line(&self) -> &'a str {
        self.line
    }

    /// The current byte index.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Whether fold mode is active.
    #[must_use]
    pub const fn is_fold(&self) -> bool {
        self.fold
    }

    pub(crate) const fn set_fold(&mut self, fold: bool) {
        self.fold = fold;
    }

    /// Returns the byte under the cursor without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<u8> {
        self.line.as_bytes().get(self.position).copied()
    }

    /// Consumes and returns the byte under the cursor.
    pub fn bump(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.position += 1;
        Some(byte)
    }

    /// Consumes the byte under the cursor if it equals `expected`.
    pub fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Moves the cursor back by `distance` bytes.
    pub(crate) const fn retreat(&mut self, distance: usize) {
        self.position = self.position.saturating_sub(distance);
    }

    /// Returns `true` once every byte of the line has been consumed.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.position >= self.line.len()
    }

    /// The unconsumed remainder of the line.
    ///
    /// The cursor only ever stops on ASCII bytes or at the end of the line,
    /// so the slice boundary is always a character boundary.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        self.line.get(self.position..).unwrap_or_default()
    }

    /// Skips ASCII whitespace, including vertical tab.
    ///
    /// # Example
    /// ```
    /// use foldcalc::interpreter::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(" \t 12");
    /// cursor.skip_whitespace();
    /// assert_eq!(cursor.rest(), "12");
    /// ```
    pub fn skip_whitespace(&mut self) {
        while let Some(byte) = self.peek()
              && (byte.is_ascii_whitespace() || byte == 0x0b)
        {
            self.position += 1;
        }
    }
}
