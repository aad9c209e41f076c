// src/types/fraction/tests.rs

use super::*;
use test_case::test_case;

fn frac(text: &str) -> Fraction {
    Fraction::parse(text).unwrap()
}

fn big(n: i64) -> BigInt {
    BigInt::from(n)
}

#[test]
fn test_parse_basic() {
    let f = frac("3/4");
    assert_eq!(f.numerator(), &big(3));
    assert_eq!(f.denominator(), &big(4));
}

#[test]
fn test_parse_keeps_signs_and_factors() {
    let f = frac("6/-8");
    assert_eq!(f.numerator(), &big(6));
    assert_eq!(f.denominator(), &big(-8));
    assert_eq!(f.render(), "6/-8");
}

#[test]
fn test_parse_big_values() {
    let f = frac("123456789012345678901234567890/7");
    assert_eq!(f.render(), "123456789012345678901234567890/7");
}

#[test_case("12" => FractionError::MalformedInput("12".to_string()); "no slash")]
#[test_case("1/0" => FractionError::DivisionByZero; "zero denominator")]
#[test_case("a/2" => FractionError::InvalidNumeral("a".to_string()); "bad numerator")]
#[test_case("1/x" => FractionError::InvalidNumeral("x".to_string()); "bad denominator")]
#[test_case("1/2/3" => FractionError::InvalidNumeral("2/3".to_string()); "two slashes")]
#[test_case("/" => FractionError::InvalidNumeral("".to_string()); "empty parts")]
#[test_case("1_000/3" => FractionError::InvalidNumeral("1_000".to_string()); "digit separator")]
#[test_case("1/3_0" => FractionError::InvalidNumeral("3_0".to_string()); "separator in denominator")]
fn parse_errors(text: &str) -> FractionError {
    Fraction::parse(text).unwrap_err()
}

#[test]
fn test_new_rejects_zero_denominator() {
    assert_eq!(Fraction::new(big(1), big(0)), Err(FractionError::DivisionByZero));
}

#[test]
fn test_to_mixed_fraction() {
    let m = frac("9/2").to_mixed_fraction();
    assert_eq!(m.whole(), &big(4));
    assert_eq!(m.numerator(), &big(1));
    assert_eq!(m.denominator(), &big(2));
}

#[test]
fn test_to_mixed_fraction_truncates_toward_zero() {
    let m = frac("-7/2").to_mixed_fraction();
    assert_eq!(m.render(), "-3 -1/2");
    assert!(m.to_improper_fraction().value_eq(&frac("-7/2")));
}

#[test]
fn test_to_decimal_is_true_division() {
    assert_eq!(frac("1/2").to_decimal(), 0.5);
    assert_eq!(frac("3/4").to_decimal(), 0.75);
    assert_eq!(frac("1/-4").to_decimal(), -0.25);
    assert_eq!(frac("1/3").to_decimal(), 1.0 / 3.0);
}

#[test]
fn test_to_decimal_beyond_f64_range() {
    let huge = "1".to_string() + &"0".repeat(400);
    let f = frac(&format!("{}/{}0", huge, huge));
    assert_eq!(f.to_decimal(), 0.1);
}

#[test]
fn test_to_percentage() {
    assert_eq!(frac("1/2").to_percentage(), 50.0);
    assert_eq!(frac("3/4").to_percentage(), 75.0);
}

#[test_case("1/2" => true; "proper")]
#[test_case("5/3" => false; "improper")]
#[test_case("3/3" => false; "equal parts")]
#[test_case("-1/2" => true; "negative proper")]
#[test_case("-5/3" => false; "negative improper")]
#[test_case("1/-2" => true; "negative denominator")]
fn proper(text: &str) -> bool {
    let f = frac(text);
    assert_eq!(f.is_improper(), !f.is_proper());
    f.is_proper()
}

#[test]
fn test_like_and_unlike() {
    assert!(Fraction::is_like(&frac("1/5"), &frac("3/5")));
    assert!(!Fraction::is_unlike(&frac("1/5"), &frac("3/5")));
    assert!(Fraction::is_unlike(&frac("1/5"), &frac("2/10")));
}

#[test_case("2/4" => "1/2"; "common factor")]
#[test_case("6/-8" => "-3/4"; "negative denominator")]
#[test_case("-6/-8" => "3/4"; "both negative")]
#[test_case("0/5" => "0/1"; "zero")]
#[test_case("7/1" => "7/1"; "integer")]
fn simplest(text: &str) -> String {
    frac(text).to_simplest_form().render()
}

#[test]
fn test_add() {
    assert_eq!(frac("1/2").add(&frac("1/3")).render(), "5/6");
    assert_eq!(frac("1/4").add(&frac("1/4")).render(), "1/2");
}

#[test]
fn test_add_without_simplify_uses_lcm() {
    let raw = frac("1/2").add_with(&frac("1/3"), false);
    assert_eq!(raw.denominator(), &big(6));
    assert_eq!(raw.render(), "5/6");

    let raw = frac("1/4").add_with(&frac("1/4"), false);
    assert_eq!(raw.render(), "2/4");
}

#[test]
fn test_subtract() {
    assert_eq!(frac("1/2").subtract(&frac("1/3")).render(), "1/6");
    assert_eq!(frac("1/3").subtract(&frac("1/2")).render(), "-1/6");
    assert_eq!(frac("3/4").subtract_with(&frac("1/4"), false).render(), "2/4");
}

#[test]
fn test_add_with_negative_denominator() {
    let sum = frac("1/-2").add(&frac("1/3"));
    assert_eq!(sum.render(), "-1/6");
}

#[test]
fn test_multiply() {
    assert_eq!(frac("2/3").multiply(&frac("3/4")).render(), "1/2");
    assert_eq!(frac("2/3").multiply_with(&frac("3/4"), false).render(), "6/12");
}

#[test]
fn test_divide() {
    assert_eq!(frac("1/2").divide(&frac("1/4")).unwrap().render(), "2/1");
    assert_eq!(frac("1/2").divide_with(&frac("3/4"), false).unwrap().render(), "4/6");
    assert_eq!(frac("1/2").divide(&frac("-1/4")).unwrap().render(), "-2/1");
}

#[test]
fn test_divide_by_zero() {
    assert_eq!(frac("1/2").divide(&frac("0/5")), Err(FractionError::DivisionByZero));
}

#[test]
fn test_operation_dispatch() {
    let a = frac("1/2");
    let b = frac("1/3");
    assert_eq!(Fraction::operation(&a, &b, Operation::Add, true).unwrap().render(), "5/6");
    assert_eq!(Fraction::operation(&a, &b, Operation::Subtract, true).unwrap().render(), "1/6");
    assert_eq!(Fraction::operation(&a, &b, Operation::Multiply, true).unwrap().render(), "1/6");
    assert_eq!(Fraction::operation(&a, &b, Operation::Divide, true).unwrap().render(), "3/2");
}

#[test]
fn test_operation_named() {
    let a = frac("1/2");
    let b = frac("1/3");
    let result = Fraction::operation_named(&a, &b, "multiply", false).unwrap();
    assert_eq!(result.map(|f| f.render()), Some("1/6".to_string()));
    assert_eq!(Fraction::operation_named(&a, &b, "power", true), Ok(None));
    assert_eq!(
        Fraction::operation_named(&a, &frac("0/1"), "divide", true),
        Err(FractionError::DivisionByZero)
    );
}

#[test]
fn test_value_eq_ignores_representation() {
    assert!(frac("1/2").value_eq(&frac("-2/-4")));
    assert!(!frac("1/2").value_eq(&frac("1/3")));
    assert_ne!(frac("1/2"), frac("2/4"));
}
