#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use shll_lexer::LexErrorKind;

use super::*;

fn cursor(source: &str) -> Cursor<'_> {
    Cursor::new(Lexer::new(source))
}

#[test]
fn current_and_advance() {
    let mut c = cursor("f(x)");
    assert_eq!(c.current_kind().unwrap(), TokenKind::Ident);
    let tok = c.advance().unwrap();
    assert_eq!(tok.text, "f");
    assert_eq!(c.current_kind().unwrap(), TokenKind::LParen);
}

#[test]
fn peek_does_not_consume() {
    let mut c = cursor("x = 1");
    assert_eq!(c.peek_kind().unwrap(), TokenKind::Eq);
    assert_eq!(c.current().unwrap().text, "x");
    assert_eq!(c.advance().unwrap().text, "x");
}

#[test]
fn check_compares_current_kind() {
    let mut c = cursor(")");
    assert!(c.check(TokenKind::RParen).unwrap());
    assert!(!c.check(TokenKind::Comma).unwrap());
}

#[test]
fn eof_repeats_past_end() {
    let mut c = cursor("a");
    c.advance().unwrap();
    let first = c.advance().unwrap();
    assert!(first.is_eof());
    assert_eq!(first.span, Span::point(1));
    let again = c.current().unwrap();
    assert!(again.is_eof());
    assert_eq!(again.span, Span::point(1));
    assert_eq!(c.peek_kind().unwrap(), TokenKind::Eof);
}

#[test]
fn lex_error_surfaces_when_reached() {
    let mut c = cursor("a $");
    assert_eq!(c.current().unwrap().text, "a");
    let err = c.peek_kind().unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnexpectedChar { found: '$' });
    assert_eq!(err.offset, 2);
}

#[test]
fn input_after_lookahead_is_not_scanned() {
    let mut c = cursor("a b $");
    assert_eq!(c.advance().unwrap().text, "a");
    assert_eq!(c.current().unwrap().text, "b");
}
