//! Tokenizer for SHLL term notation.
//!
//! Two layers:
//!
//! - [`RawScanner`] walks the bytes of the source and produces
//!   `(RawTag, len)` pairs. It never fails; malformed input becomes an
//!   error tag covering the bytes to skip.
//! - [`Lexer`] cooks raw tags into [`Token`]s carrying their source text and
//!   span, hides whitespace, and turns error tags into [`LexError`]s.
//!
//! ```
//! use shll_lexer::{tokenize, TokenKind};
//!
//! let kinds: Vec<TokenKind> = tokenize("foo(1, x=2)")
//!     .map(|tok| tok.map(|t| t.kind))
//!     .collect::<Result<_, _>>()
//!     .unwrap_or_default();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Ident,
//!         TokenKind::LParen,
//!         TokenKind::Int,
//!         TokenKind::Comma,
//!         TokenKind::Ident,
//!         TokenKind::Eq,
//!         TokenKind::Int,
//!         TokenKind::RParen,
//!         TokenKind::Eof,
//!     ]
//! );
//! ```

mod cursor;
mod lex_error;
mod lexer;
mod raw_scanner;
mod token;
mod unescape;

pub use cursor::Cursor;
pub use lex_error::{LexError, LexErrorKind};
pub use lexer::{tokenize_recovering, Lexer};
pub use raw_scanner::{RawScanner, RawTag, RawToken};
pub use token::{Token, TokenKind};
pub use unescape::{char_payload, string_value};

/// Lazily tokenize `source`, stopping at the first error.
pub fn tokenize(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}
