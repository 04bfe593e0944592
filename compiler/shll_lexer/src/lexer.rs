//! Cooking layer: raw tags to [`Token`]s and [`LexError`]s.

use std::iter::FusedIterator;

use shll_ir::Span;
use tracing::trace;

use crate::raw_scanner::{RawScanner, RawTag, RawToken};
use crate::{LexError, Token, TokenKind};

/// Lazy token stream over a source string.
///
/// Yields tokens in source order, ending with a single [`TokenKind::Eof`]
/// token. The first lexical error is yielded as `Err` and ends the stream.
/// Cloning a lexer snapshots its position; the clone resumes from there.
#[derive(Clone, Debug)]
pub struct Lexer<'src> {
    source: &'src str,
    scanner: RawScanner<'src>,
    trivia: bool,
    done: bool,
}

impl<'src> Lexer<'src> {
    /// Token stream without whitespace.
    pub fn new(source: &'src str) -> Self {
        Lexer {
            source,
            scanner: RawScanner::new(source),
            trivia: false,
            done: false,
        }
    }

    /// Token stream that also yields [`TokenKind::Whitespace`] tokens.
    pub fn with_trivia(source: &'src str) -> Self {
        Lexer {
            trivia: true,
            ..Lexer::new(source)
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Byte offset where the next token will start.
    pub fn offset(&self) -> u32 {
        self.scanner.pos()
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Token<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let start = self.scanner.pos();
            let raw = self.scanner.next_token();
            match raw.tag {
                RawTag::Whitespace if !self.trivia => continue,
                RawTag::Eof => self.done = true,
                tag if tag.is_error() => self.done = true,
                _ => {}
            }
            return Some(cook(self.source, start, raw));
        }
        None
    }
}

impl FusedIterator for Lexer<'_> {}

/// Tokenize all of `source`, skipping over malformed regions instead of
/// stopping at the first one.
///
/// Whitespace is dropped. The token list always ends with `Eof`.
pub fn tokenize_recovering(source: &str) -> (Vec<Token<'_>>, Vec<LexError>) {
    let mut scanner = RawScanner::new(source);
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    loop {
        let start = scanner.pos();
        let raw = scanner.next_token();
        if raw.tag == RawTag::Whitespace {
            continue;
        }
        match cook(source, start, raw) {
            Ok(token) => {
                let eof = token.is_eof();
                tokens.push(token);
                if eof {
                    break;
                }
            }
            Err(err) => errors.push(err),
        }
    }
    (tokens, errors)
}

fn cook(source: &str, start: u32, raw: RawToken) -> Result<Token<'_>, LexError> {
    let span = Span::new(start, start + raw.len);
    let text = source.get(span.to_range()).unwrap_or_default();
    let kind = match raw.tag {
        RawTag::Eq => TokenKind::Eq,
        RawTag::Comma => TokenKind::Comma,
        RawTag::LParen => TokenKind::LParen,
        RawTag::RParen => TokenKind::RParen,
        RawTag::Ident => TokenKind::Ident,
        RawTag::Int => TokenKind::Int,
        RawTag::Decimal => TokenKind::Decimal,
        RawTag::Str => TokenKind::Str,
        RawTag::Char => TokenKind::Char,
        RawTag::Whitespace => TokenKind::Whitespace,
        RawTag::Eof => TokenKind::Eof,
        RawTag::Unexpected => {
            let found = text.chars().next().unwrap_or('\0');
            return Err(reported(LexError::unexpected_char(span, found)));
        }
        RawTag::UnterminatedString => return Err(reported(LexError::unterminated_string(span))),
        RawTag::UnterminatedChar => return Err(reported(LexError::unterminated_char(span))),
        RawTag::MalformedChar => return Err(reported(LexError::malformed_char(span))),
    };
    Ok(Token::new(kind, text, span))
}

fn reported(err: LexError) -> LexError {
    trace!(offset = err.offset, kind = %err.kind, "lex error");
    err
}
