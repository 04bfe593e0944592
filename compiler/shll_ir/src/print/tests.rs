use pretty_assertions::assert_eq;

use crate::{KwArg, Term};

#[test]
fn atoms() {
    assert_eq!(Term::ident("foo").to_string(), "foo");
    assert_eq!(Term::int("0x1F").to_string(), "0x1F");
    assert_eq!(Term::decimal("-3.50").to_string(), "-3.50");
    assert_eq!(Term::char("ab").to_string(), "'ab'");
    assert_eq!(Term::char("").to_string(), "''");
}

#[test]
fn string_quotes_are_escaped() {
    assert_eq!(Term::string("say \"hi\"").to_string(), r#""say \"hi\"""#);
    assert_eq!(Term::string("a\\b").to_string(), r#""a\b""#);
}

#[test]
fn empty_application() {
    assert_eq!(Term::apply("foo", vec![], vec![]).to_string(), "foo()");
}

#[test]
fn mixed_arguments() {
    let term = Term::apply(
        "foo",
        vec![Term::int("1"), Term::apply("g", vec![Term::ident("x")], vec![])],
        vec![KwArg::new("k", Term::string("v"))],
    );
    assert_eq!(term.to_string(), r#"foo(1, g(x), k="v")"#);
}

#[test]
fn keyword_only() {
    let term = Term::apply(
        "f",
        vec![],
        vec![KwArg::new("x", Term::int("1")), KwArg::new("y", Term::int("2"))],
    );
    assert_eq!(term.to_string(), "f(x=1, y=2)");
}

#[test]
fn deep_nesting_prints() {
    let depth = 20_000;
    let mut term = Term::ident("x");
    for i in 0..depth {
        term = if i % 2 == 0 {
            Term::apply("f", vec![term], vec![])
        } else {
            Term::apply("g", vec![], vec![KwArg::new("k", term)])
        };
    }
    let text = term.to_string();
    assert!(text.starts_with("g(k=f(g(k="), "{}", &text[..20]);
    assert_eq!(text.matches('(').count(), depth);
    assert!(text.ends_with(&format!("x{}", ")".repeat(depth))));
}
