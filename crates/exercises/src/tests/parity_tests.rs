// Parity Tests

use super::{console, stdout};
use crate::parity::{self, Parity};

#[test]
fn test_even_numbers() {
    for n in [0, 2, 4, 100, -2, -8, i64::MIN, i64::MAX - 1] {
        assert_eq!(Parity::of(n), Parity::Even, "{} should be even", n);
    }
}

#[test]
fn test_odd_numbers() {
    for n in [1, 3, 7, -1, -7, i64::MAX, i64::MIN + 1] {
        assert_eq!(Parity::of(n), Parity::Odd, "{} should be odd", n);
    }
}

#[test]
fn test_matches_remainder_rule() {
    for n in -50..=50 {
        assert_eq!(Parity::of(n).is_even(), n % 2 == 0);
    }
}

#[test]
fn test_display() {
    assert_eq!(Parity::Even.to_string(), "par");
    assert_eq!(Parity::Odd.to_string(), "impar");
}

#[test]
fn test_run_four_is_even() {
    let mut c = console("4\n");
    assert_eq!(parity::run(&mut c).unwrap(), Parity::Even);
    assert_eq!(stdout(c), "Ingrese un numero: \nEl numero: 4 es par\n");
}

#[test]
fn test_run_seven_is_odd() {
    let mut c = console("7\n");
    assert_eq!(parity::run(&mut c).unwrap(), Parity::Odd);
    assert!(stdout(c).ends_with("El numero: 7 es impar\n"));
}

#[test]
fn test_run_negative() {
    let mut c = console("-3\n");
    assert_eq!(parity::run(&mut c).unwrap(), Parity::Odd);
    assert!(stdout(c).contains("El numero: -3 es impar"));
}

#[test]
fn test_run_retries_after_text() {
    let mut c = console("siete\n7\n");
    assert_eq!(parity::run(&mut c).unwrap(), Parity::Odd);
}
