//! Parser for SHLL term notation.
//!
//! Builds a [`Term`] from source text with one token of lookahead. Parsing
//! stops at the first error.
//!
//! ```
//! use shll_ir::Term;
//!
//! let term = shll_parse::parse("point(1, 2, label=\"origin\")").unwrap_or_else(|_| Term::ident("?"));
//! assert_eq!(term.to_string(), "point(1, 2, label=\"origin\")");
//! ```

mod cursor;
mod error;
mod grammar;
mod token_set;

use shll_ir::{Span, Term};
use shll_lexer::Lexer;

use crate::cursor::Cursor;

pub use error::{ErrorContext, FoundToken, ParseError, SyntaxError};
pub use token_set::{
    TokenSet, AFTER_KEYWORD_COMMA, AFTER_POSITIONAL_COMMA, ARGS_START, ARG_END, END_OF_INPUT,
    KEYWORD_EQ, TERM_START,
};

/// Recursive-descent parser over a lazy token stream.
pub struct Parser<'src> {
    cursor: Cursor<'src>,
    /// Spans of the `(` of argument lists currently open, innermost last.
    open_parens: Vec<Span>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Parser::from_lexer(Lexer::new(source))
    }

    /// Parse from an existing token stream. The lexer should not yield
    /// whitespace.
    pub fn from_lexer(lexer: Lexer<'src>) -> Self {
        Parser {
            cursor: Cursor::new(lexer),
            open_parens: Vec::new(),
        }
    }

    /// Parse one term. Tokens after it are left unread; see
    /// [`Parser::expect_eof`].
    pub fn parse_term(&mut self) -> Result<Term, ParseError> {
        self.term()
    }

    /// Fail unless every token has been consumed.
    pub fn expect_eof(&mut self) -> Result<(), ParseError> {
        self.end_of_input()
    }
}

/// Parse `source` as exactly one term.
pub fn parse(source: &str) -> Result<Term, ParseError> {
    let mut parser = Parser::new(source);
    let term = parser.parse_term()?;
    parser.expect_eof()?;
    Ok(term)
}

#[cfg(test)]
mod tests;
