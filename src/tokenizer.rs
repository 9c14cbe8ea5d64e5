//! A minimal cursor-based scanner shared by the query and path parsers.
//!
//! A token runs from the cursor's current position up to (but not
//! including) the next delimiter, or to the end of input; the caller
//! decides what to do with whatever delimiter stopped the scan.

/// A position within a `&str`, advanced as tokens are consumed.
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    #[must_use]
    pub fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// The character the cursor is sitting on, or `None` at end of input.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Advances past the character `peek` would have returned. A no-op at
    /// end of input.
    pub fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }
}

/// Reads from `cursor`'s current position up to the first character in
/// `delims` (exclusive) or end of input, leaving the cursor positioned on
/// the delimiter (or at end of input). The returned token is trimmed of
/// leading/trailing ASCII whitespace.
pub fn parse_token<'a>(cursor: &mut Cursor<'a>, delims: &[char]) -> &'a str {
    let start = cursor.pos;
    let end = cursor.input[start..]
        .find(|c: char| delims.contains(&c))
        .map_or(cursor.input.len(), |rel| start + rel);
    let token = &cursor.input[start..end];
    cursor.pos = end;
    token.trim_matches(|c: char| c == ' ' || c == '\t')
}
