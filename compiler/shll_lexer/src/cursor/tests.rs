use super::*;

#[test]
fn reads_past_end_are_zero() {
    let cursor = Cursor::new("");
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
    assert_eq!(cursor.peek(), 0);
}

#[test]
fn interior_null_is_not_eof() {
    let mut cursor = Cursor::new("a\0b");
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
    assert_eq!(cursor.peek(), b'b');
}

#[test]
fn advance_stops_at_end() {
    let mut cursor = Cursor::new("ab");
    cursor.advance_n(10);
    assert_eq!(cursor.pos(), 2);
    assert!(cursor.is_eof());
}

#[test]
fn eat_while_stops_at_predicate_or_eof() {
    let mut cursor = Cursor::new("aaab");
    cursor.eat_while(|b| b == b'a');
    assert_eq!(cursor.pos(), 3);

    let mut cursor = Cursor::new("aaa");
    cursor.eat_while(|b| b == b'a');
    assert_eq!(cursor.pos(), 3);
    assert!(cursor.is_eof());
}

#[test]
fn eat_while_does_not_consume_trailing_zeroes() {
    let mut cursor = Cursor::new("ab");
    cursor.eat_while(|b| b != b'x');
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn advance_char_skips_multibyte() {
    let mut cursor = Cursor::new("é$");
    cursor.advance_char();
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), b'$');

    let mut cursor = Cursor::new("😀");
    cursor.advance_char();
    assert_eq!(cursor.pos(), 4);
}

#[test]
fn skip_to_either_finds_first() {
    let mut cursor = Cursor::new("abc\\d\"e");
    assert_eq!(cursor.skip_to_either(b'"', b'\\'), b'\\');
    assert_eq!(cursor.pos(), 3);
    cursor.advance();
    assert_eq!(cursor.skip_to_either(b'"', b'\\'), b'"');
    assert_eq!(cursor.pos(), 5);
}

#[test]
fn skip_to_either_missing_goes_to_eof() {
    let mut cursor = Cursor::new("plain");
    assert_eq!(cursor.skip_to_either(b'"', b'\\'), 0);
    assert!(cursor.is_eof());
}

#[test]
fn copies_are_independent_snapshots() {
    let mut cursor = Cursor::new("abc");
    let snapshot = cursor;
    cursor.advance_n(2);
    assert_eq!(snapshot.pos(), 0);
    assert_eq!(cursor.pos(), 2);
}
