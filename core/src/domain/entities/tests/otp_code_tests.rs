//! Unit tests for OTP digit cells

use crate::domain::entities::otp_code::{OtpDigits, CODE_LENGTH};

#[test]
fn test_set_rejects_non_digits() {
    let mut digits = OtpDigits::new();
    assert!(!digits.set(0, 'a'));
    assert!(!digits.set(0, ' '));
    assert!(!digits.set(0, '٣')); // non-ASCII digit
    assert_eq!(digits, OtpDigits::new());
}

#[test]
fn test_set_rejects_out_of_range() {
    let mut digits = OtpDigits::new();
    assert!(!digits.set(CODE_LENGTH, '1'));
    assert_eq!(digits.filled(), 0);
}

#[test]
fn test_code_only_when_complete() {
    let mut digits = OtpDigits::new();
    for (i, ch) in "12345".chars().enumerate() {
        assert!(digits.set(i, ch));
    }
    assert!(!digits.is_complete());
    assert_eq!(digits.code(), None);

    digits.set(5, '6');
    assert_eq!(digits.code().as_deref(), Some("123456"));
}

#[test]
fn test_next_empty_after() {
    let mut digits = OtpDigits::new();
    digits.set(1, '1');
    digits.set(2, '2');

    assert_eq!(digits.next_empty_after(0), Some(3));
    assert_eq!(digits.next_empty_after(4), Some(5));
    assert_eq!(digits.next_empty_after(5), None);
}

#[test]
fn test_clear_and_to_strings() {
    let mut digits = OtpDigits::new();
    digits.set(0, '9');
    digits.set(3, '4');
    digits.clear(0);

    assert_eq!(digits.to_strings(), ["", "", "", "4", "", ""].map(String::from));

    digits.clear_all();
    assert_eq!(digits.filled(), 0);
}
