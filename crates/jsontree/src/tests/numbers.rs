use alloc::string::ToString;

use rstest::rstest;

use crate::{Kind, parse};

#[rstest]
#[case("0", Kind::UInt)]
#[case("12345", Kind::UInt)]
#[case("-0", Kind::Int)]
#[case("-12345", Kind::Int)]
#[case("0.0", Kind::Float)]
#[case("123.456", Kind::Float)]
#[case("-2.5", Kind::Float)]
#[case("1e3", Kind::Float)]
#[case("0e5", Kind::Float)]
#[case("-1E-9", Kind::Float)]
// 64-bit boundaries: the last representable value stays an integer kind, one
// past it overflows to float.
#[case("-9223372036854775808", Kind::Int)]
#[case("-9223372036854775807", Kind::Int)]
#[case("-9223372036854775809", Kind::Float)]
#[case("18446744073709551615", Kind::UInt)]
#[case("18446744073709551614", Kind::UInt)]
#[case("18446744073709551616", Kind::Float)]
#[case("99999999999999999999999999", Kind::Float)]
#[case("-99999999999999999999999999", Kind::Float)]
fn number_kind(#[case] text: &str, #[case] kind: Kind) {
    assert_eq!(parse(text).unwrap().kind(), kind, "input {text:?}");
}

#[test]
fn boundary_values_are_exact() {
    let min = parse("-9223372036854775808").unwrap();
    assert_eq!(min.as_int().unwrap().get(), i64::MIN);
    assert_eq!(min.to_string(), "-9223372036854775808");

    let max = parse("18446744073709551615").unwrap();
    assert_eq!(max.as_uint().unwrap().get(), u64::MAX);
    assert_eq!(max.to_string(), "18446744073709551615");
}

#[test]
fn overflow_becomes_float_of_the_right_magnitude() {
    let value = parse("18446744073709551616").unwrap();
    assert_eq!(value.as_float().unwrap().get(), 18_446_744_073_709_551_616.0);

    let value = parse("-9223372036854775809").unwrap();
    assert_eq!(value.as_float().unwrap().get(), -9_223_372_036_854_775_809.0);
}

#[test]
fn negative_zero_is_integer_zero() {
    let value = parse("-0").unwrap();
    assert_eq!(value.as_int().unwrap().get(), 0);
    assert_eq!(value.to_string(), "0");
}

#[test]
fn float_values_parse_exactly() {
    assert_eq!(parse("0.0").unwrap().as_float().unwrap().get(), 0.0);
    assert_eq!(parse("123.456").unwrap().as_float().unwrap().get(), 123.456);
    assert_eq!(parse("1e3").unwrap().as_float().unwrap().get(), 1000.0);
    assert_eq!(parse("-2.5E-2").unwrap().as_float().unwrap().get(), -0.025);
}

#[test]
fn float_serialization_reparses_as_float() {
    for text in ["3.0", "1e300", "-0.5", "2.225e-308"] {
        let value = parse(text).unwrap();
        let rendered = value.to_string();
        let reparsed = parse(&rendered).unwrap();
        assert_eq!(reparsed.kind(), Kind::Float, "rendered {rendered:?}");
        assert_eq!(
            reparsed.as_float().unwrap().get(),
            value.as_float().unwrap().get()
        );
    }
}
