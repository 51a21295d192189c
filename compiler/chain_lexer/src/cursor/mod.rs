//! Byte cursor over the source text.
//!
//! The cursor advances through the source byte-by-byte. Reads past the end
//! return `0x00`; use [`Cursor::is_eof`] to tell EOF apart from an interior
//! null byte.
//!
//! Token boundaries produced by the scanner always fall on ASCII bytes or at
//! EOF, so [`Cursor::slice_from`] never splits a UTF-8 character.

/// Returns the earliest (minimum) of two optional positions.
///
/// Used to combine separate `memchr` searches when more needles are needed
/// than a single `memchr3` call supports.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Cursor over a source string.
///
/// The cursor is [`Copy`], enabling cheap state snapshots for lookahead.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    #[inline]
    fn bytes(&self) -> &'a [u8] {
        self.source.as_bytes()
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.peek_at(0)
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.peek_at(1)
    }

    /// Returns the byte `n` positions ahead of current, or `0x00` past EOF.
    #[inline]
    pub fn peek_at(&self, n: usize) -> u8 {
        self.bytes().get(self.pos + n).copied().unwrap_or(0)
    }

    /// Check whether the source continues with `text` at the current position.
    #[inline]
    pub fn starts_with(&self, text: &str) -> bool {
        self.bytes()[self.pos..].starts_with(text.as_bytes())
    }

    /// Like [`starts_with`](Self::starts_with), ignoring ASCII case.
    pub fn starts_with_ignore_case(&self, text: &str) -> bool {
        let rest = &self.bytes()[self.pos..];
        rest.len() >= text.len() && rest[..text.len()].eq_ignore_ascii_case(text.as_bytes())
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance the cursor by `n` bytes, stopping at EOF.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
    }

    /// Returns `true` if the cursor has reached EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Source text from `start` to the current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.pos]
    }

    /// Advance while `pred` returns `true` for the current byte.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance to the first occurrence of `needle`, or to EOF.
    ///
    /// Returns `true` if the needle was found; the cursor is positioned at
    /// its first byte.
    pub fn eat_until_str(&mut self, needle: &str) -> bool {
        match memchr::memmem::find(&self.bytes()[self.pos..], needle.as_bytes()) {
            Some(offset) => {
                self.pos += offset;
                true
            }
            None => {
                self.pos = self.source.len();
                false
            }
        }
    }

    /// Advance to the next line break (`\n` or `\r`), or EOF.
    pub fn eat_until_line_break(&mut self) {
        let remaining = &self.bytes()[self.pos..];
        match memchr::memchr2(b'\n', b'\r', remaining) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.source.len(),
        }
    }

    /// Advance past one line break (`\n`, `\r\n`, or `\r`) if present.
    ///
    /// Returns `true` if a line break was consumed.
    pub fn eat_line_break(&mut self) -> bool {
        match self.current() {
            b'\r' if self.peek() == b'\n' => {
                self.pos += 2;
                true
            }
            b'\n' | b'\r' => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    /// Advance to the next line-comment terminator: a line break or `?>`.
    pub fn eat_line_comment_body(&mut self) {
        loop {
            let remaining = &self.bytes()[self.pos..];
            let line_end = memchr::memchr2(b'\n', b'\r', remaining);
            let question = memchr::memchr(b'?', remaining);
            match earliest_of(line_end, question) {
                Some(offset) => {
                    self.pos += offset;
                    if self.current() != b'?' || self.peek() == b'>' {
                        return;
                    }
                    self.pos += 1;
                }
                None => {
                    self.pos = self.source.len();
                    return;
                }
            }
        }
    }

    /// Advance past the body of a quoted literal, through the closing `quote`.
    ///
    /// Backslash escapes the following byte. An unterminated literal runs to
    /// EOF.
    pub fn eat_quoted(&mut self, quote: u8) {
        loop {
            let remaining = &self.bytes()[self.pos..];
            match memchr::memchr2(quote, b'\\', remaining) {
                Some(offset) => {
                    self.pos += offset;
                    if self.current() == quote {
                        self.pos += 1;
                        return;
                    }
                    // Backslash: skip it and the escaped byte. Landing inside a
                    // multi-byte char is fine; the next search only stops on ASCII.
                    self.advance_n(2);
                }
                None => {
                    self.pos = self.source.len();
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
