//! Lexical errors.

use shll_diagnostic::{Diagnostic, ErrorCode};
use shll_ir::Span;

/// What went wrong while scanning.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    #[error("unexpected character {found:?}")]
    UnexpectedChar { found: char },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated character literal")]
    UnterminatedChar,
    #[error("malformed character literal")]
    MalformedChar,
}

/// A lexical error.
///
/// `offset` is where the problem was detected: the offending character, or
/// the end of input for unterminated literals. `span` covers the bytes the
/// scanner skipped, starting at the opening quote for literals.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{kind} at offset {offset}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub offset: u32,
    pub span: Span,
}

impl LexError {
    pub fn unexpected_char(span: Span, found: char) -> Self {
        LexError {
            kind: LexErrorKind::UnexpectedChar { found },
            offset: span.start,
            span,
        }
    }

    pub fn unterminated_string(span: Span) -> Self {
        LexError {
            kind: LexErrorKind::UnterminatedString,
            offset: span.end,
            span,
        }
    }

    pub fn unterminated_char(span: Span) -> Self {
        LexError {
            kind: LexErrorKind::UnterminatedChar,
            offset: span.end,
            span,
        }
    }

    pub fn malformed_char(span: Span) -> Self {
        LexError {
            kind: LexErrorKind::MalformedChar,
            offset: span.start,
            span,
        }
    }

    /// The character at `offset`, or `None` when the error is at the end of
    /// input.
    pub fn found(&self) -> Option<char> {
        match self.kind {
            LexErrorKind::UnexpectedChar { found } => Some(found),
            LexErrorKind::MalformedChar => Some('\''),
            LexErrorKind::UnterminatedString | LexErrorKind::UnterminatedChar => None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnexpectedChar { .. } => ErrorCode::E0001,
            LexErrorKind::UnterminatedString => ErrorCode::E0002,
            LexErrorKind::UnterminatedChar => ErrorCode::E0003,
            LexErrorKind::MalformedChar => ErrorCode::E0004,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.kind.to_string());
        let opener = Span::new(self.span.start, self.span.start.saturating_add(1));
        match self.kind {
            LexErrorKind::UnexpectedChar { found: found @ ('+' | '-') } => diag
                .with_label(self.span, format!("`{found}` is not followed by a digit"))
                .with_note("signs are only allowed directly before an integer or decimal"),
            LexErrorKind::UnexpectedChar { found } => diag
                .with_label(self.span, format!("{found:?} does not start a token"))
                .with_suggestion("move the text inside a string literal"),
            LexErrorKind::UnterminatedString => diag
                .with_label(Span::point(self.offset), "input ends here")
                .with_secondary_label(opener, "string starts here")
                .with_suggestion("add a closing `\"`"),
            LexErrorKind::UnterminatedChar => diag
                .with_label(Span::point(self.offset), "input ends here")
                .with_secondary_label(opener, "character literal starts here")
                .with_suggestion("add a closing `'`"),
            LexErrorKind::MalformedChar => diag
                .with_label(self.span, "neither a plain run nor backslash pairs")
                .with_note("write `'abc'` or `'\\n'`, not a mix of both"),
        }
    }
}
