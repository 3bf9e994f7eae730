//! Forward-only byte cursor with a single byte of lookahead.

/// A cursor over the bytes of a URI string.
///
/// The cursor buffers at most one byte. Every production of the grammar is
/// decided by that byte alone, so positions only ever move forward.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    lookahead: Option<u8>,
    next_pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            lookahead: None,
            next_pos: 0,
        }
    }

    /// Returns the byte at the current position without consuming it.
    pub(crate) fn peek(&mut self) -> Option<u8> {
        if let Some(b) = self.lookahead {
            return Some(b);
        }
        let b = *self.input.as_bytes().get(self.pos)?;
        self.lookahead = Some(b);
        self.next_pos = self.pos + 1;
        Some(b)
    }

    /// Consumes and returns the byte at the current position.
    pub(crate) fn advance(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.lookahead = None;
        self.pos = self.next_pos;
        Some(b)
    }

    pub(crate) const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the text consumed since `start`.
    ///
    /// Spans always begin and end next to an ASCII delimiter or at the ends
    /// of the input, so they fall on `char` boundaries.
    pub(crate) fn slice(&self, start: usize) -> &'a str {
        &self.input[start..self.pos]
    }

    /// Returns the `char` that begins at `pos`, if any.
    pub(crate) fn char_at(&self, pos: usize) -> Option<char> {
        self.input.get(pos..).and_then(|rest| rest.chars().next())
    }
}
