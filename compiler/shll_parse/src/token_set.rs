//! Sets of token kinds, used for lookahead decisions and for the
//! "expected ..." part of syntax errors.

use std::fmt;

use shll_lexer::TokenKind;

const _: () = assert!(
    TokenKind::ALL.len() <= 16,
    "TokenSet uses a u16 bitset; every TokenKind index must be < 16"
);

/// Bitset over [`TokenKind`], one bit per kind index.
///
/// ```
/// use shll_lexer::TokenKind;
/// use shll_parse::TokenSet;
///
/// const CLOSERS: TokenSet = TokenSet::new()
///     .with(TokenKind::Comma)
///     .with(TokenKind::RParen);
///
/// assert!(CLOSERS.contains(TokenKind::RParen));
/// assert_eq!(CLOSERS.to_string(), "`,` or `)`");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TokenSet(u16);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        TokenSet(0)
    }

    #[inline]
    pub const fn single(kind: TokenKind) -> Self {
        TokenSet(1 << kind.index())
    }

    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        TokenSet(self.0 | (1 << kind.index()))
    }

    #[inline]
    pub const fn contains(self, kind: TokenKind) -> bool {
        self.0 & (1 << kind.index()) != 0
    }

    /// Kinds in the set, in [`TokenKind`] declaration order.
    pub fn iter(self) -> impl Iterator<Item = TokenKind> {
        TokenKind::ALL
            .into_iter()
            .filter(move |kind| self.contains(*kind))
    }

    /// Human-readable list: "`,` or `)`", "`)`, identifier, or integer".
    pub fn format_expected(self) -> String {
        let names: Vec<&'static str> = self.iter().map(TokenKind::display_name).collect();
        match names.as_slice() {
            [] => "nothing".to_string(),
            [single] => (*single).to_string(),
            [first, second] => format!("{first} or {second}"),
            [rest @ .., last] => format!("{}, or {last}", rest.join(", ")),
        }
    }
}

impl fmt::Display for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_expected())
    }
}

impl fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

// ─── Grammar sets ───────────────────────────────────────────────────────

/// Tokens that can start a term.
pub const TERM_START: TokenSet = TokenSet::new()
    .with(TokenKind::Ident)
    .with(TokenKind::Int)
    .with(TokenKind::Decimal)
    .with(TokenKind::Str)
    .with(TokenKind::Char);

/// Right after `(`: a closing paren, a separator, or any argument.
pub const ARGS_START: TokenSet = TERM_START
    .with(TokenKind::RParen)
    .with(TokenKind::Comma);

/// After a complete argument.
pub const ARG_END: TokenSet = TokenSet::new()
    .with(TokenKind::Comma)
    .with(TokenKind::RParen);

/// After `,` in the positional block: another positional, the first
/// keyword argument, or `)` for a trailing comma.
pub const AFTER_POSITIONAL_COMMA: TokenSet = TERM_START.with(TokenKind::RParen);

/// After `,` in the keyword block: a keyword name or `)`.
pub const AFTER_KEYWORD_COMMA: TokenSet = TokenSet::new()
    .with(TokenKind::Ident)
    .with(TokenKind::RParen);

pub const KEYWORD_EQ: TokenSet = TokenSet::single(TokenKind::Eq);

pub const END_OF_INPUT: TokenSet = TokenSet::single(TokenKind::Eof);

#[cfg(test)]
mod tests;
