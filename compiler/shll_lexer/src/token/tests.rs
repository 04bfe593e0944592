use shll_ir::Span;

use super::*;

#[test]
fn indices_are_dense_and_round_trip() {
    for (i, kind) in TokenKind::ALL.iter().enumerate() {
        assert_eq!(kind.index() as usize, i);
    }
}

#[test]
fn classification() {
    assert!(TokenKind::Comma.is_punct());
    assert!(TokenKind::RParen.is_punct());
    assert!(!TokenKind::Str.is_punct());
    assert!(!TokenKind::Eof.is_punct());
}

#[test]
fn token_offset_and_eof() {
    let comma = Token::new(TokenKind::Comma, ",", Span::new(3, 4));
    assert_eq!(comma.offset(), 3);
    assert!(!comma.is_eof());

    let eof = Token::new(TokenKind::Eof, "", Span::point(9));
    assert!(eof.is_eof());
    assert_eq!(eof.kind.display_name(), "end of input");
}
