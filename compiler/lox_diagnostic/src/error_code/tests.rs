use super::*;

#[test]
fn test_display_matches_as_str() {
    for code in ErrorCode::ALL {
        assert_eq!(code.to_string(), code.as_str());
    }
}

#[test]
fn test_phase_follows_leading_digit() {
    for code in ErrorCode::ALL {
        let expected = match &code.as_str()[1..2] {
            "0" => Phase::Lexer,
            "1" => Phase::Parser,
            "6" => Phase::Runtime,
            other => panic!("unexpected phase digit {other}"),
        };
        assert_eq!(code.phase(), expected, "{code}");
    }
}

#[test]
fn test_static_vs_runtime() {
    assert!(ErrorCode::E0001.is_static_error());
    assert!(ErrorCode::E1004.is_static_error());
    assert!(ErrorCode::E1004.is_parser_error());
    assert!(ErrorCode::E6004.is_runtime_error());
    assert!(!ErrorCode::E6001.is_static_error());
}

#[test]
fn test_from_str() {
    assert_eq!("E1004".parse::<ErrorCode>(), Ok(ErrorCode::E1004));
    assert_eq!("e6001".parse::<ErrorCode>(), Ok(ErrorCode::E6001));
    let err = "E9999".parse::<ErrorCode>().unwrap_err();
    assert_eq!(err.to_string(), "unknown error code `E9999`");
}
