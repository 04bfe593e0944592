//! Recursive-descent rules.
//!
//! ```text
//! term     = IDENT | INT | DECIMAL | STRING | CHAR | apply
//! apply    = IDENT "(" args ")"
//! args     = [ term { "," term } ] [ "," ] [ kw_args ]    (see below)
//! kw_args  = kw_arg { "," kw_arg } [ "," ]
//! kw_arg   = IDENT "=" term
//! ```
//!
//! Positional arguments come first. The keyword block starts at the first
//! `IDENT "="` pair, either right after `(` or after a `,`. A `,` directly
//! after `(` is an empty positional block followed by the separator, so
//! `f(,)` and `f(, x=1)` are accepted. An identifier followed by `(`
//! always starts an application.

use shll_diagnostic::ErrorCode;
use shll_ir::{KwArg, Term};
use shll_lexer::{char_payload, string_value, Token, TokenKind};
use shll_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::error::{ErrorContext, FoundToken, ParseError, SyntaxError};
use crate::token_set::{
    AFTER_KEYWORD_COMMA, AFTER_POSITIONAL_COMMA, ARGS_START, ARG_END, END_OF_INPUT, KEYWORD_EQ,
    TERM_START,
};
use crate::{Parser, TokenSet};

impl<'src> Parser<'src> {
    pub(crate) fn term(&mut self) -> Result<Term, ParseError> {
        ensure_sufficient_stack(|| self.term_inner())
    }

    fn term_inner(&mut self) -> Result<Term, ParseError> {
        let token = self.cursor.current()?;
        let term = match token.kind {
            TokenKind::Ident => {
                if self.cursor.peek_kind()? == TokenKind::LParen {
                    return self.apply();
                }
                Term::ident(token.text)
            }
            TokenKind::Int => Term::int(token.text),
            TokenKind::Decimal => Term::decimal(token.text),
            TokenKind::Str => Term::string(string_value(token.text)),
            TokenKind::Char => Term::char(char_payload(token.text)),
            _ => return Err(self.unexpected(token, TERM_START, ErrorContext::Term)),
        };
        self.cursor.advance()?;
        Ok(term)
    }

    /// `IDENT "(" args ")"`, entered with the cursor on the callee and `(`
    /// next.
    fn apply(&mut self) -> Result<Term, ParseError> {
        let callee = self.cursor.advance()?;
        let open = self.cursor.advance()?;
        debug!(callee = callee.text, offset = callee.offset(), "apply");

        self.open_parens.push(open.span);
        let args = self.arguments();
        self.open_parens.pop();
        let (positional, keyword) = args?;

        debug!(
            callee = callee.text,
            positional = positional.len(),
            keyword = keyword.len(),
            "apply done"
        );
        Ok(Term::apply(callee.text, positional, keyword))
    }

    /// Everything between `(` and `)`, consuming the `)`.
    fn arguments(&mut self) -> Result<(Vec<Term>, Vec<KwArg>), ParseError> {
        let mut positional = Vec::new();

        let first = self.cursor.current()?;
        match first.kind {
            TokenKind::RParen => {
                self.cursor.advance()?;
                return Ok((positional, Vec::new()));
            }
            // Empty positional block, then the separator.
            TokenKind::Comma => {
                self.cursor.advance()?;
                return Ok((positional, self.keyword_args()?));
            }
            _ if self.at_keyword_arg()? => return Ok((positional, self.keyword_args()?)),
            kind if TERM_START.contains(kind) => {}
            _ => return Err(self.unexpected(first, ARGS_START, ErrorContext::ArgumentList)),
        }

        loop {
            positional.push(self.term()?);

            let token = self.cursor.current()?;
            match token.kind {
                TokenKind::RParen => {
                    self.cursor.advance()?;
                    return Ok((positional, Vec::new()));
                }
                TokenKind::Comma => {
                    self.cursor.advance()?;
                    let next = self.cursor.current()?;
                    if next.kind == TokenKind::RParen {
                        self.cursor.advance()?;
                        return Ok((positional, Vec::new()));
                    }
                    if self.at_keyword_arg()? {
                        return Ok((positional, self.keyword_args()?));
                    }
                    if !TERM_START.contains(next.kind) {
                        return Err(self.unexpected(next, AFTER_POSITIONAL_COMMA, ErrorContext::Term));
                    }
                }
                _ => return Err(self.unexpected(token, ARG_END, ErrorContext::ArgumentList)),
            }
        }
    }

    /// The keyword block, consuming the closing `)`. May be empty.
    fn keyword_args(&mut self) -> Result<Vec<KwArg>, ParseError> {
        let mut keyword = Vec::new();
        loop {
            if self.cursor.check(TokenKind::RParen)? {
                self.cursor.advance()?;
                return Ok(keyword);
            }
            keyword.push(self.keyword_arg()?);

            let token = self.cursor.current()?;
            match token.kind {
                TokenKind::RParen => {
                    self.cursor.advance()?;
                    return Ok(keyword);
                }
                TokenKind::Comma => {
                    self.cursor.advance()?;
                }
                _ => return Err(self.unexpected(token, ARG_END, ErrorContext::ArgumentList)),
            }
        }
    }

    fn keyword_arg(&mut self) -> Result<KwArg, ParseError> {
        let name = self.expect(TokenKind::Ident, AFTER_KEYWORD_COMMA, ErrorContext::ArgumentList)?;
        self.expect(TokenKind::Eq, KEYWORD_EQ, ErrorContext::KeywordArgument)?;
        let value = self.term()?;
        Ok(KwArg::new(name.text, value))
    }

    pub(crate) fn end_of_input(&mut self) -> Result<(), ParseError> {
        let token = self.cursor.current()?;
        if token.is_eof() {
            Ok(())
        } else {
            Err(self.unexpected(token, END_OF_INPUT, ErrorContext::EndOfInput))
        }
    }

    // ─── Helpers ────────────────────────────────────────────────────────

    fn at_keyword_arg(&mut self) -> Result<bool, ParseError> {
        Ok(self.cursor.check(TokenKind::Ident)? && self.cursor.peek_kind()? == TokenKind::Eq)
    }

    fn expect(
        &mut self,
        kind: TokenKind,
        expected: TokenSet,
        context: ErrorContext,
    ) -> Result<Token<'src>, ParseError> {
        let token = self.cursor.current()?;
        if token.kind == kind {
            self.cursor.advance()?;
            Ok(token)
        } else {
            Err(self.unexpected(token, expected, context))
        }
    }

    #[cold]
    #[inline(never)]
    fn unexpected(&self, found: Token<'_>, expected: TokenSet, context: ErrorContext) -> ParseError {
        let open_paren = self.open_parens.last().copied();
        let code = match context {
            _ if found.is_eof() && open_paren.is_some() => ErrorCode::E1004,
            ErrorContext::Term => ErrorCode::E1002,
            ErrorContext::KeywordArgument => ErrorCode::E1003,
            ErrorContext::EndOfInput => ErrorCode::E1005,
            ErrorContext::ArgumentList => ErrorCode::E1001,
        };
        debug!(
            offset = found.offset(),
            found = %found.kind,
            %expected,
            code = %code,
            "syntax error"
        );
        SyntaxError {
            offset: found.offset(),
            span: found.span,
            found: FoundToken::new(&found),
            expected,
            code,
            context,
            open_paren,
        }
        .into()
    }
}
