use proptest::prelude::*;
use shll_ir::{KwArg, Term};

use crate::{parse, ParseError, TokenSet};

fn arb_ident() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,8}"
}

fn arb_atom() -> impl Strategy<Value = Term> {
    prop_oneof![
        arb_ident().prop_map(Term::ident),
        "[+-]?(0|[1-9][0-9]{0,9})".prop_map(Term::int),
        "0[xX][0-9a-fA-F]{1,6}".prop_map(Term::int),
        "0[bB][01]{1,8}".prop_map(Term::int),
        "[+-]?[0-9]{1,4}\\.[0-9]{1,4}".prop_map(Term::decimal),
        // A value ending in a backslash has no unambiguous spelling;
        // backslashes anywhere else must survive printing.
        "([a-z \"',()=\\\\]{0,9}[a-z \"',()=])?".prop_map(Term::string),
        "[a-z ]{0,4}".prop_map(Term::char),
        "(\\\\[a-z'\"]){1,3}".prop_map(Term::char),
    ]
}

fn arb_term() -> impl Strategy<Value = Term> {
    arb_atom().prop_recursive(4, 48, 6, |inner| {
        (
            arb_ident(),
            prop::collection::vec(inner.clone(), 0..4),
            prop::collection::vec((arb_ident(), inner), 0..3),
        )
            .prop_map(|(callee, positional, keyword)| {
                let keyword = keyword
                    .into_iter()
                    .map(|(name, value)| KwArg::new(name, value))
                    .collect();
                Term::apply(callee, positional, keyword)
            })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn printed_terms_parse_back(term in arb_term()) {
        let printed = term.to_string();
        let reparsed = parse(&printed).map_err(|e| TestCaseError::fail(format!("{printed}: {e}")))?;
        prop_assert_eq!(reparsed, term);
    }

    #[test]
    fn printing_is_a_fixed_point(term in arb_term()) {
        let once = term.to_string();
        let twice = parse(&once)
            .map_err(|e| TestCaseError::fail(e.to_string()))?
            .to_string();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn arbitrary_input_never_panics(source in any::<String>()) {
        if let Err(err) = parse(&source) {
            prop_assert!(err.offset() as usize <= source.len());
        }
    }

    #[test]
    fn token_soup_errors_are_in_bounds(source in "[a-z0-9=,() '\"\\\\.+-]{0,30}") {
        match parse(&source) {
            Ok(_) => {}
            Err(ParseError::Syntax(err)) => {
                prop_assert!(err.span.end as usize <= source.len());
                prop_assert!(err.expected != TokenSet::new());
            }
            Err(ParseError::Lex(err)) => prop_assert!(err.span.end as usize <= source.len()),
        }
    }
}
