//! Number grammar validation and 64-bit range checks.
//!
//! `classify` runs a finite automaton over a candidate number token and
//! reports whether it is integer-shaped (no fraction, no exponent) or
//! float-shaped. Integer-shaped tokens are then range-checked against the
//! 64-bit limits by comparing digit strings, so the decision never depends
//! on lossy numeric conversion.

use core::cmp::Ordering;

/// Shape of a token that satisfies the JSON number grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NumberShape {
    /// No fractional part and no exponent.
    Integer,
    /// A fractional part or an exponent is present.
    Float,
}

#[derive(Clone, Copy)]
enum State {
    Start,
    Sign,
    Zero,
    DecimalInteger,
    DecimalPoint,
    DecimalFraction,
    DecimalExponent,
    DecimalExponentSign,
    DecimalExponentInteger,
}

/// Validates `token` against the JSON number grammar.
///
/// Grammar: optional `-`; integer part a single `0` or a nonzero digit
/// followed by digits; optional `.` and one or more digits; optional `e`/`E`,
/// optional sign, one or more digits. Returns `None` when the grammar is
/// violated.
pub(crate) fn classify(token: &str) -> Option<NumberShape> {
    let mut state = State::Start;
    for &b in token.as_bytes() {
        state = match (state, b) {
            (State::Start, b'-') => State::Sign,
            (State::Start | State::Sign, b'0') => State::Zero,
            (State::Start | State::Sign, b'1'..=b'9') => State::DecimalInteger,
            (State::DecimalInteger, b'0'..=b'9') => State::DecimalInteger,
            (State::Zero | State::DecimalInteger, b'.') => State::DecimalPoint,
            (State::DecimalPoint | State::DecimalFraction, b'0'..=b'9') => State::DecimalFraction,
            (State::Zero | State::DecimalInteger | State::DecimalFraction, b'e' | b'E') => {
                State::DecimalExponent
            }
            (State::DecimalExponent, b'+' | b'-') => State::DecimalExponentSign,
            (
                State::DecimalExponent | State::DecimalExponentSign | State::DecimalExponentInteger,
                b'0'..=b'9',
            ) => State::DecimalExponentInteger,
            _ => return None,
        };
    }
    match state {
        State::Zero | State::DecimalInteger => Some(NumberShape::Integer),
        State::DecimalFraction | State::DecimalExponentInteger => Some(NumberShape::Float),
        _ => None,
    }
}

const I64_MIN_TOKEN: &str = "-9223372036854775808";
const U64_MAX_TOKEN: &str = "18446744073709551615";

/// Whether a negative integer-shaped token is representable as an `i64`.
///
/// `token` must start with `-` and be integer-shaped. Tokens shorter than the
/// boundary are always in range and longer ones never are; at equal length
/// the digit strings are compared directly, which is exact where conversion
/// through a float would not be.
pub(crate) fn fits_i64(token: &str) -> bool {
    match token.len().cmp(&I64_MIN_TOKEN.len()) {
        Ordering::Less => true,
        Ordering::Greater => false,
        Ordering::Equal => token <= I64_MIN_TOKEN,
    }
}

/// Whether a non-negative integer-shaped token is representable as a `u64`.
pub(crate) fn fits_u64(token: &str) -> bool {
    match token.len().cmp(&U64_MAX_TOKEN.len()) {
        Ordering::Less => true,
        Ordering::Greater => false,
        Ordering::Equal => token <= U64_MAX_TOKEN,
    }
}

#[cfg(test)]
mod tests {
    use super::{NumberShape, classify, fits_i64, fits_u64};

    #[test]
    fn integer_shapes() {
        assert_eq!(classify("0"), Some(NumberShape::Integer));
        assert_eq!(classify("-0"), Some(NumberShape::Integer));
        assert_eq!(classify("12345"), Some(NumberShape::Integer));
        assert_eq!(classify("-907"), Some(NumberShape::Integer));
    }

    #[test]
    fn float_shapes() {
        assert_eq!(classify("0.5"), Some(NumberShape::Float));
        assert_eq!(classify("-12.25e-3"), Some(NumberShape::Float));
        assert_eq!(classify("3E+8"), Some(NumberShape::Float));
        assert_eq!(classify("0e5"), Some(NumberShape::Float));
    }

    #[test]
    fn grammar_violations() {
        for token in [
            "", "-", ".", "01", "-01", "1.", ".5", "1e", "1e+", "1.e2", "+1", "1.2.3", "1e2e3",
            "12nau", "0x10",
        ] {
            assert_eq!(classify(token), None, "token {token:?}");
        }
    }

    #[test]
    fn signed_boundary() {
        assert!(fits_i64("-9223372036854775808"));
        assert!(fits_i64("-9223372036854775807"));
        assert!(!fits_i64("-9223372036854775809"));
        assert!(fits_i64("-1"));
        assert!(!fits_i64("-99999999999999999990"));
    }

    #[test]
    fn unsigned_boundary() {
        assert!(fits_u64("18446744073709551615"));
        assert!(fits_u64("18446744073709551614"));
        assert!(!fits_u64("18446744073709551616"));
        assert!(fits_u64("0"));
        assert!(!fits_u64("184467440737095516150"));
    }
}
