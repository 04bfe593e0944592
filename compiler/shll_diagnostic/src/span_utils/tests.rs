use super::*;

#[test]
fn single_line() {
    let source = "foo(1, 2)";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_col(source, 4), (1, 5));
    assert_eq!(table.line_text(source, 1), source);
}

#[test]
fn offset_at_end_of_input() {
    let source = "\"abc";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_col(source, 4), (1, 5));
}

#[test]
fn offset_on_newline_belongs_to_that_line() {
    let source = "a\nb";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_col(source, 1), (1, 2));
    assert_eq!(table.line_col(source, 2), (2, 1));
}

#[test]
fn columns_count_characters() {
    let source = "\"héllo\" §";
    let table = LineOffsetTable::build(source);
    let offset = u32::try_from(source.find('§').unwrap_or(0)).unwrap_or(0);
    assert_eq!(table.line_col(source, offset), (1, 9));
}

#[test]
fn crlf_is_trimmed_from_line_text() {
    let source = "f(\r\n)";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_text(source, 1), "f(");
    assert_eq!(table.line_text(source, 2), ")");
}

#[test]
fn trailing_newline_adds_empty_line() {
    let source = "x\n";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_col(source, 2), (2, 1));
    assert_eq!(table.line_text(source, 2), "");
}
