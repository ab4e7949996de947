// Line Parsing Tests

use crate::InputError;
use crate::values::parse_integers;

#[test]
fn test_blank_line_is_empty() {
    assert_eq!(parse_integers("").unwrap(), Vec::<i64>::new());
    assert_eq!(parse_integers("   \t ").unwrap(), Vec::<i64>::new());
}

#[test]
fn test_several_integers() {
    assert_eq!(parse_integers("4 -7 +2").unwrap(), vec![4, -7, 2]);
}

#[test]
fn test_word_rejects_line() {
    match parse_integers("1 dos 3") {
        Err(InputError::InvalidNumber { span, found, line, .. }) => {
            assert_eq!(found, "dos");
            assert_eq!(span, 2..5);
            assert_eq!(line, "1 dos 3");
        }
        other => panic!("Expected InvalidNumber, got {:?}", other),
    }
}

#[test]
fn test_overflow_rejects_line() {
    match parse_integers("99999999999999999999") {
        Err(InputError::InvalidNumber { found, reason, .. }) => {
            assert_eq!(found, "99999999999999999999");
            assert!(reason.contains("64-bit"));
        }
        other => panic!("Expected InvalidNumber, got {:?}", other),
    }
}

#[test]
fn test_float_rejects_line() {
    assert!(parse_integers("3.5").is_err());
}
