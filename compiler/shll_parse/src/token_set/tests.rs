use shll_lexer::TokenKind;

use super::*;

#[test]
fn empty_set() {
    let set = TokenSet::new();
    assert_eq!(set.iter().count(), 0);
    assert_eq!(set.format_expected(), "nothing");
    assert!(TokenKind::ALL.iter().all(|kind| !set.contains(*kind)));
}

#[test]
fn with_and_contains() {
    let set = TokenSet::new().with(TokenKind::Eq).with(TokenKind::Eof);
    assert!(set.contains(TokenKind::Eq));
    assert!(set.contains(TokenKind::Eof));
    assert!(!set.contains(TokenKind::Comma));
    assert_eq!(set.iter().count(), 2);
}

#[test]
fn iter_follows_declaration_order() {
    let kinds: Vec<TokenKind> = ARGS_START.iter().collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Comma,
            TokenKind::RParen,
            TokenKind::Ident,
            TokenKind::Int,
            TokenKind::Decimal,
            TokenKind::Str,
            TokenKind::Char,
        ]
    );
}

#[test]
fn format_one_two_many() {
    assert_eq!(KEYWORD_EQ.format_expected(), "`=`");
    assert_eq!(ARG_END.format_expected(), "`,` or `)`");
    assert_eq!(
        AFTER_KEYWORD_COMMA.format_expected(),
        "`)` or identifier"
    );
    assert_eq!(
        TERM_START.format_expected(),
        "identifier, integer, decimal, string, or character"
    );
}

#[test]
fn display_matches_format_expected() {
    assert_eq!(
        AFTER_POSITIONAL_COMMA.to_string(),
        AFTER_POSITIONAL_COMMA.format_expected()
    );
}

#[test]
fn grammar_sets_have_expected_sizes() {
    assert_eq!(TERM_START.iter().count(), 5);
    assert_eq!(ARGS_START.iter().count(), 7);
    assert_eq!(AFTER_POSITIONAL_COMMA.iter().count(), 6);
    assert!(!TERM_START.contains(TokenKind::Whitespace));
}
