use pretty_assertions::assert_eq;
use shll_ir::{KwArg, Term};
use shll_lexer::Lexer;

use super::parse_ok;
use crate::Parser;

fn apply(callee: &str, positional: Vec<Term>, keyword: Vec<KwArg>) -> Term {
    Term::apply(callee, positional, keyword)
}

// ─── Atoms ──────────────────────────────────────────────────────────────

#[test]
fn identifier() {
    assert_eq!(parse_ok("foo_bar1"), Term::ident("foo_bar1"));
    assert_eq!(parse_ok("  _x \n"), Term::ident("_x"));
}

#[test]
fn integers_keep_raw_text() {
    assert_eq!(parse_ok("42"), Term::int("42"));
    assert_eq!(parse_ok("-7"), Term::int("-7"));
    assert_eq!(parse_ok("+0"), Term::int("+0"));
    assert_eq!(parse_ok("0x1F"), Term::int("0x1F"));
    assert_eq!(parse_ok("0b1010"), Term::int("0b1010"));
    assert_eq!(parse_ok("0o777"), Term::int("0o777"));
}

#[test]
fn decimals_keep_raw_text() {
    assert_eq!(parse_ok("3.14"), Term::decimal("3.14"));
    assert_eq!(parse_ok("-0.5"), Term::decimal("-0.5"));
}

#[test]
fn strings_resolve_escaped_quotes() {
    assert_eq!(parse_ok(r#""hello""#), Term::string("hello"));
    assert_eq!(parse_ok(r#""say \"hi\"""#), Term::string(r#"say "hi""#));
    assert_eq!(parse_ok(r#""a\nb""#), Term::string(r"a\nb"));
    assert_eq!(parse_ok(r#""""#), Term::string(""));
}

#[test]
fn interior_backslashes_survive_printing() {
    for value in [r"a\b", r"\\x", r#"a\"b"#, r"\q\r"] {
        let term = Term::apply("f", vec![Term::string(value), Term::string("z")], vec![]);
        assert_eq!(parse_ok(&term.to_string()), term, "{value}");
    }
}

#[test]
fn chars_keep_payload() {
    assert_eq!(parse_ok("'a'"), Term::char("a"));
    assert_eq!(parse_ok(r"'\n'"), Term::char(r"\n"));
    assert_eq!(parse_ok("'abc'"), Term::char("abc"));
    assert_eq!(parse_ok("''"), Term::char(""));
}

// ─── Applications ───────────────────────────────────────────────────────

#[test]
fn empty_application() {
    assert_eq!(parse_ok("f()"), apply("f", vec![], vec![]));
    assert_eq!(parse_ok("f ( )"), apply("f", vec![], vec![]));
}

#[test]
fn positional_arguments() {
    assert_eq!(
        parse_ok("add(1, 2.5, x)"),
        apply(
            "add",
            vec![Term::int("1"), Term::decimal("2.5"), Term::ident("x")],
            vec![]
        )
    );
}

#[test]
fn keyword_arguments() {
    assert_eq!(
        parse_ok("f(a=1, b='c')"),
        apply(
            "f",
            vec![],
            vec![
                KwArg::new("a", Term::int("1")),
                KwArg::new("b", Term::char("c")),
            ]
        )
    );
}

#[test]
fn positional_then_keyword() {
    assert_eq!(
        parse_ok(r#"point(1, 2, label="origin")"#),
        apply(
            "point",
            vec![Term::int("1"), Term::int("2")],
            vec![KwArg::new("label", Term::string("origin"))]
        )
    );
}

#[test]
fn trailing_commas() {
    assert_eq!(parse_ok("f(1,)"), apply("f", vec![Term::int("1")], vec![]));
    assert_eq!(
        parse_ok("f(1, k=2,)"),
        apply("f", vec![Term::int("1")], vec![KwArg::new("k", Term::int("2"))])
    );
    assert_eq!(
        parse_ok("f(k=2,)"),
        apply("f", vec![], vec![KwArg::new("k", Term::int("2"))])
    );
}

#[test]
fn leading_comma_opens_keyword_block() {
    assert_eq!(parse_ok("f(,)"), apply("f", vec![], vec![]));
    assert_eq!(
        parse_ok("f(, x=1)"),
        apply("f", vec![], vec![KwArg::new("x", Term::int("1"))])
    );
}

#[test]
fn duplicate_keywords_are_kept_in_order() {
    let term = parse_ok("f(k=1, k=2)");
    let Term::Apply(app) = &term else {
        panic!("expected an application, got {term}");
    };
    assert_eq!(
        app.keyword,
        vec![KwArg::new("k", Term::int("1")), KwArg::new("k", Term::int("2"))]
    );
}

#[test]
fn nested_applications() {
    assert_eq!(
        parse_ok("f(g(x), k=h(y=z()))"),
        apply(
            "f",
            vec![apply("g", vec![Term::ident("x")], vec![])],
            vec![KwArg::new(
                "k",
                apply(
                    "h",
                    vec![],
                    vec![KwArg::new("y", apply("z", vec![], vec![]))]
                )
            )]
        )
    );
}

#[test]
fn identifier_argument_is_not_a_keyword_without_eq() {
    assert_eq!(
        parse_ok("f(x, y)"),
        apply("f", vec![Term::ident("x"), Term::ident("y")], vec![])
    );
}

#[test]
fn whitespace_between_every_token() {
    assert_eq!(
        parse_ok(" f \t(\r\n a \n= \n1 ,\n) "),
        apply("f", vec![], vec![KwArg::new("a", Term::int("1"))])
    );
}

// ─── Parser API ─────────────────────────────────────────────────────────

#[test]
fn parse_term_leaves_trailing_tokens() {
    let mut parser = Parser::new("a b");
    assert_eq!(parser.parse_term().unwrap(), Term::ident("a"));
    let err = parser.expect_eof().unwrap_err();
    assert_eq!(err.offset(), 2);
}

#[test]
fn successive_terms_from_one_parser() {
    let mut parser = Parser::new("f(1) g(2)");
    let first = parser.parse_term().unwrap();
    let second = parser.parse_term().unwrap();
    parser.expect_eof().unwrap();
    assert_eq!(first.to_string(), "f(1)");
    assert_eq!(second.to_string(), "g(2)");
}

#[test]
fn from_lexer_continues_a_stream() {
    let mut lexer = Lexer::new("skip f(x)");
    lexer.next();
    let mut parser = Parser::from_lexer(lexer);
    assert_eq!(
        parser.parse_term().unwrap(),
        apply("f", vec![Term::ident("x")], vec![])
    );
    parser.expect_eof().unwrap();
}

#[test]
fn deep_nesting() {
    const DEPTH: usize = 20_000;
    let source = format!("{}x{}", "f(".repeat(DEPTH), ")".repeat(DEPTH));
    let term = parse_ok(&source);

    let mut depth = 0;
    let mut node = &term;
    while let Term::Apply(app) = node {
        assert_eq!(app.callee, "f");
        depth += 1;
        node = &app.positional[0];
    }
    assert_eq!(depth, DEPTH);
    assert_eq!(node, &Term::ident("x"));
}
