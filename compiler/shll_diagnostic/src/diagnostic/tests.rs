use shll_ir::Span;

use super::*;

#[test]
fn builder_collects_parts() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("expected `)`, found `=`")
        .with_label(Span::new(4, 5), "unexpected `=`")
        .with_secondary_label(Span::new(0, 4), "argument list starts here")
        .with_note("keyword arguments need a name")
        .with_suggestion("remove the `=`");

    assert_eq!(
        diag.labels,
        vec![
            Label::primary(Span::new(4, 5), "unexpected `=`"),
            Label::secondary(Span::new(0, 4), "argument list starts here"),
        ]
    );
    assert_eq!(diag.notes, vec!["keyword arguments need a name".to_string()]);
    assert_eq!(diag.suggestions.len(), 1);
}

#[test]
fn display_header() {
    let diag = Diagnostic::error(ErrorCode::E0002).with_message("unterminated string literal");
    assert_eq!(diag.to_string(), "error[E0002]: unterminated string literal");
}
