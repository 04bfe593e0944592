//! Byte cursor over source text.
//!
//! Reads past the end of the source yield `0x00`, so scanning loops can
//! dispatch on the current byte without separate bounds checks. Interior
//! null bytes also read as `0x00`; [`Cursor::is_eof`] tells them apart by
//! position.

/// Copyable cursor into a source string.
///
/// Being [`Copy`] makes speculative scanning cheap: copy the cursor, scan
/// ahead on the copy, and keep whichever copy matched the longest input.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: u32,
    len: u32,
}

impl<'a> Cursor<'a> {
    /// Cursor at offset 0. Sources longer than `u32::MAX` bytes are only
    /// scanned up to that limit.
    pub fn new(src: &'a str) -> Self {
        Cursor {
            src,
            pos: 0,
            len: u32::try_from(src.len()).unwrap_or(u32::MAX),
        }
    }

    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos.saturating_add(1))
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        if pos < self.len {
            self.src.as_bytes().get(pos as usize).copied().unwrap_or(0)
        } else {
            0
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance by `n` bytes, stopping at the end of the source.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos = self.pos.saturating_add(n).min(self.len);
    }

    /// Advance over one UTF-8 encoded character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Byte length of the character introduced by `lead`.
    #[inline]
    pub fn utf8_char_width(lead: u8) -> u32 {
        match lead {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.len
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Advance while `pred` holds for the current byte, never past EOF.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Jump to the next occurrence of `a` or `b` and return that byte.
    ///
    /// When neither occurs, moves to EOF and returns `0`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets within the remaining source fit in u32"
    )]
    pub fn skip_to_either(&mut self, a: u8, b: u8) -> u8 {
        let remaining = self.remaining();
        if let Some(offset) = memchr::memchr2(a, b, remaining) {
            self.pos += offset as u32;
            self.current()
        } else {
            self.pos = self.len;
            0
        }
    }

    fn remaining(&self) -> &'a [u8] {
        self.src
            .as_bytes()
            .get(self.pos as usize..self.len as usize)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests;
