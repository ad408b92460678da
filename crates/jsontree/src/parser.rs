//! Recursive-descent parsing over the token stream.
//!
//! Each production returns `Result` and composes with `?`, so the first
//! grammar violation aborts the whole parse. Objects and arrays are driven by
//! explicit state machines that sequence key/colon/value/comma expectations;
//! everything else dispatches on the first character of the current token.

use alloc::string::{String, ToString};

use crate::{
    error::SyntaxError,
    handles::{JsonArray, JsonNull, JsonObject},
    number::{self, NumberShape},
    tokenizer::Tokenizer,
    value::JsonValue,
};

/// Parses one JSON value from `text`.
///
/// Parsing stops after the first complete top-level value; trailing
/// characters beyond it are ignored rather than reported. Recursion depth is
/// bounded only by the nesting depth of the input, so adversarially deep
/// documents can exhaust the call stack.
///
/// # Examples
///
/// ```
/// use jsontree::parse;
///
/// let root = parse(r#"{"name":"ada","age":36}"#)?;
/// let object = root.as_object()?;
/// assert_eq!(object.get("name").unwrap().as_string()?.get(), "ada");
/// assert_eq!(object.get("age").unwrap().as_uint()?.get(), 36);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
///
/// Returns [`SyntaxError`] on the first grammar violation; the partial tree
/// built up to that point is discarded.
pub fn parse(text: &str) -> Result<JsonValue, SyntaxError> {
    let mut parser = Parser {
        tokens: Tokenizer::new(text),
    };
    parser.tokens.advance();
    parser.parse_value()
}

struct Parser<'a> {
    tokens: Tokenizer<'a>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ObjectState {
    WaitKeyOrEnd,
    WaitKey,
    WaitColon,
    WaitValue,
    WaitCommaOrEnd,
    End,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ArrayState {
    WaitValueOrEnd,
    WaitValue,
    WaitCommaOrEnd,
    End,
}

impl<'a> Parser<'a> {
    /// The current token, or `UnexpectedEndOfInput` once the stream is done.
    fn current(&self) -> Result<&'a str, SyntaxError> {
        if self.tokens.is_finished() {
            Err(SyntaxError::UnexpectedEndOfInput)
        } else {
            Ok(self.tokens.current())
        }
    }

    /// Consumes the current token if it is exactly `token`.
    fn eat(&mut self, token: &str) -> bool {
        if !self.tokens.is_finished() && self.tokens.current() == token {
            self.tokens.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: &str, expected: &'static str) -> Result<(), SyntaxError> {
        if self.eat(token) {
            Ok(())
        } else {
            Err(SyntaxError::UnexpectedToken {
                expected,
                found: self.current()?.to_string(),
            })
        }
    }

    fn parse_value(&mut self) -> Result<JsonValue, SyntaxError> {
        let token = self.current()?;
        let Some(first) = token.chars().next() else {
            return Err(SyntaxError::UnexpectedEndOfInput);
        };
        match first {
            '{' => Ok(self.parse_object()?.into_value()),
            '[' => Ok(self.parse_array()?.into_value()),
            '"' => Ok(JsonValue::from(self.parse_string()?)),
            '-' | '0'..='9' => self.parse_number(),
            't' | 'f' => self.parse_bool(),
            'n' => self.parse_null(),
            c => Err(SyntaxError::InvalidCharacter(c)),
        }
    }

    fn parse_object(&mut self) -> Result<JsonObject, SyntaxError> {
        self.expect("{", "'{'")?;
        let object = JsonObject::new();
        let mut key = None;
        let mut state = ObjectState::WaitKeyOrEnd;
        while state != ObjectState::End {
            state = match state {
                ObjectState::WaitKeyOrEnd => {
                    if self.eat("}") {
                        ObjectState::End
                    } else {
                        ObjectState::WaitKey
                    }
                }
                ObjectState::WaitKey => {
                    key = Some(self.parse_string()?);
                    ObjectState::WaitColon
                }
                ObjectState::WaitColon => {
                    self.expect(":", "':'")?;
                    ObjectState::WaitValue
                }
                ObjectState::WaitValue => {
                    let value = self.parse_value()?;
                    // Insert-if-absent: a duplicate key keeps the first value.
                    if let Some(key) = key.take() {
                        object.insert(key, value);
                    }
                    ObjectState::WaitCommaOrEnd
                }
                ObjectState::WaitCommaOrEnd => {
                    if self.eat(",") {
                        ObjectState::WaitKey
                    } else if self.eat("}") {
                        ObjectState::End
                    } else {
                        return Err(SyntaxError::UnexpectedToken {
                            expected: "',' or '}'",
                            found: self.current()?.to_string(),
                        });
                    }
                }
                ObjectState::End => ObjectState::End,
            };
        }
        Ok(object)
    }

    fn parse_array(&mut self) -> Result<JsonArray, SyntaxError> {
        self.expect("[", "'['")?;
        let array = JsonArray::new();
        let mut state = ArrayState::WaitValueOrEnd;
        while state != ArrayState::End {
            state = match state {
                ArrayState::WaitValueOrEnd => {
                    if self.eat("]") {
                        ArrayState::End
                    } else {
                        ArrayState::WaitValue
                    }
                }
                ArrayState::WaitValue => {
                    array.push(self.parse_value()?);
                    ArrayState::WaitCommaOrEnd
                }
                ArrayState::WaitCommaOrEnd => {
                    if self.eat(",") {
                        ArrayState::WaitValue
                    } else if self.eat("]") {
                        ArrayState::End
                    } else {
                        return Err(SyntaxError::UnexpectedToken {
                            expected: "',' or ']'",
                            found: self.current()?.to_string(),
                        });
                    }
                }
                ArrayState::End => ArrayState::End,
            };
        }
        Ok(array)
    }

    /// Decodes a quoted string token into its text payload.
    ///
    /// The token must begin and end with an unescaped `"`. Exactly the eight
    /// JSON escapes are translated; anything else after a backslash is an
    /// error, as is a backslash that swallows the closing quote.
    fn parse_string(&mut self) -> Result<String, SyntaxError> {
        let token = self.current()?;
        if !token.starts_with('"') {
            return Err(SyntaxError::UnexpectedToken {
                expected: "string",
                found: token.to_string(),
            });
        }
        if token.len() < 2 || !token.ends_with('"') {
            return Err(SyntaxError::UnterminatedString);
        }
        let interior = &token[1..token.len() - 1];
        let mut decoded = String::with_capacity(interior.len());
        let mut chars = interior.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                let Some(escape) = chars.next() else {
                    // The "closing" quote was escaped away.
                    return Err(SyntaxError::UnterminatedString);
                };
                decoded.push(unescape(escape)?);
            } else {
                decoded.push(c);
            }
        }
        self.tokens.advance();
        Ok(decoded)
    }

    fn parse_number(&mut self) -> Result<JsonValue, SyntaxError> {
        let token = self.current()?;
        let shape = number::classify(token).ok_or_else(|| malformed(token))?;
        let negative = token.starts_with('-');
        let value = match shape {
            NumberShape::Integer if negative && number::fits_i64(token) => {
                JsonValue::from(token.parse::<i64>().map_err(|_| malformed(token))?)
            }
            NumberShape::Integer if !negative && number::fits_u64(token) => {
                JsonValue::from(token.parse::<u64>().map_err(|_| malformed(token))?)
            }
            // Fraction or exponent present, or the integer overflows 64 bits.
            _ => JsonValue::from(token.parse::<f64>().map_err(|_| malformed(token))?),
        };
        self.tokens.advance();
        Ok(value)
    }

    fn parse_bool(&mut self) -> Result<JsonValue, SyntaxError> {
        let token = self.current()?;
        let value = match token {
            "true" => true,
            "false" => false,
            _ => return Err(SyntaxError::InvalidLiteral(token.to_string())),
        };
        self.tokens.advance();
        Ok(JsonValue::from(value))
    }

    fn parse_null(&mut self) -> Result<JsonValue, SyntaxError> {
        let token = self.current()?;
        if token != "null" {
            return Err(SyntaxError::InvalidLiteral(token.to_string()));
        }
        self.tokens.advance();
        Ok(JsonNull::new().into_value())
    }
}

fn malformed(token: &str) -> SyntaxError {
    SyntaxError::MalformedNumber(token.to_string())
}

fn unescape(c: char) -> Result<char, SyntaxError> {
    Ok(match c {
        '"' => '"',
        '\\' => '\\',
        '/' => '/',
        'b' => '\u{0008}',
        'f' => '\u{000C}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        other => return Err(SyntaxError::InvalidEscape(other)),
    })
}
