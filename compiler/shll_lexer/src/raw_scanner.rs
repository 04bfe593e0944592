//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner never allocates and never fails: malformed input is reported
//! through the error variants of [`RawTag`], each covering the bytes a
//! caller should skip to resume scanning. Turning tags into [`Token`]s and
//! [`LexError`]s is left to the cooking layer in [`Lexer`].
//!
//! At every position the longest match wins, and ties go to the rule listed
//! first (integers before decimals). Numbers are scanned speculatively on
//! copies of the cursor so both readings can be compared.
//!
//! [`Token`]: crate::Token
//! [`LexError`]: crate::LexError
//! [`Lexer`]: crate::Lexer

use crate::cursor::Cursor;

/// Raw token category, including error categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RawTag {
    Eq,
    Comma,
    LParen,
    RParen,
    Ident,
    Int,
    Decimal,
    Str,
    Char,
    Whitespace,
    Eof,
    /// A character that starts no token.
    Unexpected,
    /// `"` with no closing quote before end of input.
    UnterminatedString,
    /// `'` with no unescaped closing quote before end of input.
    UnterminatedChar,
    /// `'...'` whose contents match neither character-literal form.
    MalformedChar,
}

impl RawTag {
    pub fn is_error(self) -> bool {
        matches!(
            self,
            RawTag::Unexpected
                | RawTag::UnterminatedString
                | RawTag::UnterminatedChar
                | RawTag::MalformedChar
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

// ─── Byte classes ───────────────────────────────────────────────────────

const IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0;
    while i < 256 {
        #[allow(clippy::cast_possible_truncation, reason = "i < 256")]
        let b = i as u8;
        table[i] = b.is_ascii_alphanumeric() || b == b'_';
        i += 1;
    }
    table
};

#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

#[inline]
fn is_decimal_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

#[inline]
fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

#[inline]
fn is_octal_digit(b: u8) -> bool {
    matches!(b, b'0'..=b'7')
}

#[inline]
fn is_binary_digit(b: u8) -> bool {
    matches!(b, b'0' | b'1')
}

// ─── Scanner ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug)]
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    pub fn new(source: &'a str) -> Self {
        RawScanner {
            cursor: Cursor::new(source),
        }
    }

    /// Byte offset of the next token.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next raw token. Returns `Eof` with `len == 0` once the
    /// source is exhausted, and keeps returning it.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        if self.cursor.is_eof() {
            return RawToken {
                tag: RawTag::Eof,
                len: 0,
            };
        }
        match self.cursor.current() {
            b' ' | b'\t' | b'\r' | b'\n' => self.whitespace(start),
            b'=' => self.single(start, RawTag::Eq),
            b',' => self.single(start, RawTag::Comma),
            b'(' => self.single(start, RawTag::LParen),
            b')' => self.single(start, RawTag::RParen),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' | b'+' | b'-' => self.number(start),
            b'"' => self.string(start),
            b'\'' => self.char_literal(start),
            _ => self.unexpected(start),
        }
    }

    #[inline]
    fn token(&self, start: u32, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(start, tag)
    }

    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_while(is_whitespace);
        self.token(start, RawTag::Whitespace)
    }

    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);
        self.token(start, RawTag::Ident)
    }

    fn unexpected(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char();
        self.token(start, RawTag::Unexpected)
    }

    // ─── Numbers ────────────────────────────────────────────────────────

    fn number(&mut self, start: u32) -> RawToken {
        let integer = Self::integer_end(self.cursor);
        let decimal = Self::decimal_end(self.cursor);
        let (end, tag) = match (integer, decimal) {
            (Some(int), Some(dec)) if dec.pos() > int.pos() => (dec, RawTag::Decimal),
            (Some(int), _) => (int, RawTag::Int),
            (None, Some(dec)) => (dec, RawTag::Decimal),
            // A sign not followed by a digit.
            (None, None) => return self.unexpected(start),
        };
        self.cursor = end;
        self.token(start, tag)
    }

    /// End of the longest integer starting at `c`.
    ///
    /// Radix prefixes are only recognised on unsigned literals and only
    /// when at least one digit follows; otherwise the literal is just `0`.
    fn integer_end(mut c: Cursor<'a>) -> Option<Cursor<'a>> {
        let signed = matches!(c.current(), b'+' | b'-');
        if signed {
            c.advance();
        }
        match c.current() {
            b'0' => {
                c.advance();
                if signed {
                    return Some(c);
                }
                let is_digit: fn(u8) -> bool = match c.current() {
                    b'x' | b'X' => is_hex_digit,
                    b'o' | b'O' => is_octal_digit,
                    b'b' | b'B' => is_binary_digit,
                    _ => return Some(c),
                };
                if is_digit(c.peek()) {
                    c.advance();
                    c.eat_while(is_digit);
                }
                Some(c)
            }
            b'1'..=b'9' => {
                c.advance();
                c.eat_while(is_decimal_digit);
                Some(c)
            }
            _ => None,
        }
    }

    /// End of a `[+-]?[0-9]+.[0-9]+` decimal starting at `c`.
    fn decimal_end(mut c: Cursor<'a>) -> Option<Cursor<'a>> {
        if matches!(c.current(), b'+' | b'-') {
            c.advance();
        }
        if !is_decimal_digit(c.current()) {
            return None;
        }
        c.eat_while(is_decimal_digit);
        if c.current() != b'.' || !is_decimal_digit(c.peek()) {
            return None;
        }
        c.advance();
        c.eat_while(is_decimal_digit);
        Some(c)
    }

    // ─── Strings ────────────────────────────────────────────────────────

    /// `"` ( not-`"` | `\"` )* `"`.
    ///
    /// If the greedy reading runs off the end of the input, the longest
    /// valid prefix ends at the quote of the last `\"` pair.
    fn string(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        let mut last_escaped_quote = None;
        loop {
            match self.cursor.skip_to_either(b'"', b'\\') {
                b'"' => {
                    self.cursor.advance();
                    return self.token(start, RawTag::Str);
                }
                b'\\' => {
                    self.cursor.advance();
                    if self.cursor.current() == b'"' {
                        self.cursor.advance();
                        last_escaped_quote = Some(self.cursor);
                    }
                }
                _ => {
                    return match last_escaped_quote {
                        Some(end) => {
                            self.cursor = end;
                            self.token(start, RawTag::Str)
                        }
                        None => self.token(start, RawTag::UnterminatedString),
                    };
                }
            }
        }
    }

    // ─── Character literals ─────────────────────────────────────────────

    /// `'` ( run of not-`'`-or-`\` | (`\` any)* ) `'`, longest form wins.
    fn char_literal(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        let body = self.cursor;
        let end = match (Self::char_run_end(body), Self::char_escapes_end(body)) {
            (Some(run), Some(esc)) => Some(if run.pos() >= esc.pos() { run } else { esc }),
            (run, esc) => run.or(esc),
        };
        if let Some(end) = end {
            self.cursor = end;
            return self.token(start, RawTag::Char);
        }

        // Resume after the first unescaped quote, if there is one.
        loop {
            match self.cursor.skip_to_either(b'\'', b'\\') {
                b'\'' => {
                    self.cursor.advance();
                    return self.token(start, RawTag::MalformedChar);
                }
                b'\\' => {
                    self.cursor.advance();
                    self.cursor.advance_char();
                }
                _ => return self.token(start, RawTag::UnterminatedChar),
            }
        }
    }

    /// A non-empty run without `'` or `\`, then the closing quote.
    fn char_run_end(mut c: Cursor<'a>) -> Option<Cursor<'a>> {
        let run_start = c.pos();
        c.eat_while(|b| b != b'\'' && b != b'\\');
        if c.pos() == run_start || c.current() != b'\'' || c.is_eof() {
            return None;
        }
        c.advance();
        Some(c)
    }

    /// Zero or more `\x` pairs, then the closing quote.
    fn char_escapes_end(mut c: Cursor<'a>) -> Option<Cursor<'a>> {
        loop {
            if c.is_eof() {
                return None;
            }
            match c.current() {
                b'\'' => {
                    c.advance();
                    return Some(c);
                }
                b'\\' => {
                    c.advance();
                    if c.is_eof() {
                        return None;
                    }
                    c.advance_char();
                }
                _ => return None,
            }
        }
    }
}
