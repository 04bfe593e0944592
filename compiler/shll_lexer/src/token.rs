//! Cooked tokens as seen by the parser.

use std::fmt;

use shll_ir::Span;

/// Token category.
///
/// Discriminants are dense from `0`, so a kind can index a bitset.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// `=`
    Eq,
    /// `,`
    Comma,
    /// `(`
    LParen,
    /// `)`
    RParen,
    Ident,
    Int,
    Decimal,
    Str,
    Char,
    /// Spaces, tabs, and line breaks. Only produced by
    /// [`Lexer::with_trivia`](crate::Lexer::with_trivia).
    Whitespace,
    Eof,
}

impl TokenKind {
    pub const ALL: [TokenKind; 11] = [
        TokenKind::Eq,
        TokenKind::Comma,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::Ident,
        TokenKind::Int,
        TokenKind::Decimal,
        TokenKind::Str,
        TokenKind::Char,
        TokenKind::Whitespace,
        TokenKind::Eof,
    ];

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Name used in error messages: punctuation in backticks, other kinds
    /// as words.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Eq => "`=`",
            TokenKind::Comma => "`,`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Ident => "identifier",
            TokenKind::Int => "integer",
            TokenKind::Decimal => "decimal",
            TokenKind::Str => "string",
            TokenKind::Char => "character",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Eof => "end of input",
        }
    }

    /// Punctuation always has the same text.
    pub const fn is_punct(self) -> bool {
        matches!(
            self,
            TokenKind::Eq | TokenKind::Comma | TokenKind::LParen | TokenKind::RParen
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A token with the exact source text it matched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Span,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, text: &'src str, span: Span) -> Self {
        Token { kind, text, span }
    }

    /// Byte offset of the first character.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.span.start
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

#[cfg(test)]
mod tests;
