//! Token cursor for the parser.
//!
//! Pulls tokens from a [`Lexer`] on demand and buffers the few the
//! grammar looks ahead at. Lexical errors surface at the point the parser
//! first needs the offending token, so input after the parse stops is
//! never scanned.

use std::collections::VecDeque;

use shll_ir::Span;
use shll_lexer::{LexError, Lexer, Token, TokenKind};
use tracing::trace;

pub struct Cursor<'src> {
    lexer: Lexer<'src>,
    lookahead: VecDeque<Token<'src>>,
    /// Tokens consumed so far, reported in traces.
    consumed: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(lexer: Lexer<'src>) -> Self {
        Cursor {
            lexer,
            lookahead: VecDeque::with_capacity(2),
            consumed: 0,
        }
    }

    /// Token `n` positions ahead of the current one (`0` is current).
    ///
    /// Past the end of the stream every position reads as `Eof`.
    pub fn nth(&mut self, n: usize) -> Result<Token<'src>, LexError> {
        while self.lookahead.len() <= n {
            let token = match self.lexer.next() {
                Some(token) => token?,
                None => self.end_of_input(),
            };
            self.lookahead.push_back(token);
        }
        Ok(self.lookahead[n])
    }

    #[inline]
    pub fn current(&mut self) -> Result<Token<'src>, LexError> {
        self.nth(0)
    }

    #[inline]
    pub fn current_kind(&mut self) -> Result<TokenKind, LexError> {
        Ok(self.nth(0)?.kind)
    }

    /// Kind of the token after the current one.
    #[inline]
    pub fn peek_kind(&mut self) -> Result<TokenKind, LexError> {
        Ok(self.nth(1)?.kind)
    }

    #[inline]
    pub fn check(&mut self, kind: TokenKind) -> Result<bool, LexError> {
        Ok(self.current_kind()? == kind)
    }

    /// Consume and return the current token.
    pub fn advance(&mut self) -> Result<Token<'src>, LexError> {
        let token = self.current()?;
        self.lookahead.pop_front();
        trace!(
            pos = self.consumed,
            kind = %token.kind,
            start = token.span.start,
            end = token.span.end,
            "advance"
        );
        self.consumed += 1;
        Ok(token)
    }

    fn end_of_input(&self) -> Token<'src> {
        let source = self.lexer.source();
        let end = u32::try_from(source.len()).unwrap_or(u32::MAX);
        Token::new(TokenKind::Eof, "", Span::point(end))
    }
}

#[cfg(test)]
mod tests;
