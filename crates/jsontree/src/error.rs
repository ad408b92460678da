//! Error types returned by the parser and the narrowing accessors.

use alloc::string::String;

use thiserror::Error;

use crate::value::Kind;

/// A grammar violation encountered while parsing JSON text.
///
/// The parser aborts at the first violation; no location information is
/// attached and no partial tree is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// A value began with a character that cannot start any JSON value.
    #[error("invalid character '{0}'")]
    InvalidCharacter(char),
    /// A string contained a backslash followed by a character that is not one
    /// of the eight recognized escapes.
    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(char),
    /// A literal run starting with `t`, `f` or `n` was not exactly `true`,
    /// `false` or `null`.
    #[error("invalid literal '{0}'")]
    InvalidLiteral(String),
    /// A token starting with a sign or digit did not match the JSON number
    /// grammar.
    #[error("malformed number '{0}'")]
    MalformedNumber(String),
    /// A structural token was required but something else was found.
    #[error("expected {expected}, found '{found}'")]
    UnexpectedToken {
        /// Description of what the grammar required at this point.
        expected: &'static str,
        /// The offending token text.
        found: String,
    },
    /// The input ended inside an object, array or other incomplete value.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// A string token was missing its closing quote, or its closing quote was
    /// escaped away by a trailing backslash.
    #[error("unterminated string")]
    UnterminatedString,
}

/// A narrowing accessor was applied to a value of a different kind.
///
/// Always a caller-logic error; the value is left untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("expected {expected}, found {actual}")]
pub struct TypeMismatch {
    /// The kind the accessor asked for.
    pub expected: Kind,
    /// The kind the value actually has.
    pub actual: Kind,
}
