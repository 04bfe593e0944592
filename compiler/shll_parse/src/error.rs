//! Parse errors.
//!
//! A parse fails with exactly one error: either the lexer rejected the
//! input ([`ParseError::Lex`]) or a well-formed token appeared where the
//! grammar does not allow it ([`ParseError::Syntax`]).

use std::fmt;

use shll_diagnostic::{Diagnostic, ErrorCode};
use shll_ir::Span;
use shll_lexer::{LexError, Token, TokenKind};

use crate::TokenSet;

/// Where in the grammar the parser was when it gave up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    /// Expecting the start of a term.
    Term,
    /// Inside an argument list, between arguments.
    ArgumentList,
    /// Between a keyword name and its `=`.
    KeywordArgument,
    /// After the top-level term, expecting the end of input.
    EndOfInput,
}

impl ErrorContext {
    pub fn description(self) -> &'static str {
        match self {
            ErrorContext::Term => "a term",
            ErrorContext::ArgumentList => "an argument list",
            ErrorContext::KeywordArgument => "a keyword argument",
            ErrorContext::EndOfInput => "the end of input",
        }
    }
}

/// The token the parser found instead of what it expected.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FoundToken {
    pub kind: TokenKind,
    pub text: String,
}

impl FoundToken {
    pub fn new(token: &Token<'_>) -> Self {
        FoundToken {
            kind: token.kind,
            text: token.text.to_string(),
        }
    }
}

impl fmt::Display for FoundToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.is_punct() || self.kind == TokenKind::Eof {
            f.write_str(self.kind.display_name())
        } else {
            write!(f, "{} `{}`", self.kind, self.text)
        }
    }
}

/// An unexpected token.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("expected {expected}, found {found}")]
pub struct SyntaxError {
    /// Byte offset of the unexpected token.
    pub offset: u32,
    pub span: Span,
    pub found: FoundToken,
    pub expected: TokenSet,
    pub code: ErrorCode,
    pub context: ErrorContext,
    /// The `(` of the innermost open argument list, if any.
    pub open_paren: Option<Span>,
}

impl SyntaxError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = if self.found.kind == TokenKind::Eof {
            format!("expected {} here", self.expected)
        } else {
            format!("unexpected {}", self.found)
        };
        let mut diag = Diagnostic::error(self.code)
            .with_message(self.to_string())
            .with_label(self.span, label);
        if let Some(open) = self.open_paren {
            diag = diag.with_secondary_label(open, "argument list opened here");
        }
        diag = diag.with_note(format!("while parsing {}", self.context.description()));
        match self.code {
            ErrorCode::E1002 if self.found.kind == TokenKind::Comma => {
                diag.with_suggestion("remove the extra `,`")
            }
            ErrorCode::E1003 => diag.with_suggestion(
                "positional arguments must come before every `name=value` argument",
            ),
            ErrorCode::E1004 => diag.with_suggestion("add the missing `)`"),
            ErrorCode::E1005 => {
                diag.with_note("input must contain exactly one term")
            }
            _ => diag,
        }
    }
}

/// Why a parse failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl ParseError {
    /// Byte offset where the failure was detected.
    pub fn offset(&self) -> u32 {
        match self {
            ParseError::Lex(err) => err.offset,
            ParseError::Syntax(err) => err.offset,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ParseError::Lex(err) => err.span,
            ParseError::Syntax(err) => err.span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::Lex(err) => err.code(),
            ParseError::Syntax(err) => err.code,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ParseError::Lex(err) => err.to_diagnostic(),
            ParseError::Syntax(err) => err.to_diagnostic(),
        }
    }
}
