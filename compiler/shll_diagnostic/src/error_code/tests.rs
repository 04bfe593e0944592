use super::*;

#[test]
fn parse_round_trips_every_code() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(*code));
    }
}

#[test]
fn parse_is_case_insensitive() {
    assert_eq!("e1003".parse::<ErrorCode>(), Ok(ErrorCode::E1003));
    assert_eq!("E9999".parse::<ErrorCode>(), Err(()));
}

#[test]
fn every_code_has_a_summary() {
    for code in ErrorCode::ALL {
        assert!(!code.summary().is_empty(), "{code} has no summary");
    }
}
