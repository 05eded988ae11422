/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Tokenizes JSON byte slices without building an intermediate document.

mod error;
mod token;

pub use error::{Error, ErrorReason};
pub use token::{
    expect_bool_or_null, expect_number_or_null, expect_start_array, expect_start_object,
    expect_string_or_null, expect_timestamp_or_null, skip_value, EscapedStr, Offset, Token,
};

/// Returns an iterator over the tokens in `input`.
///
/// The iterator validates structure as it goes (matching braces,
/// required commas and colons) and yields positioned errors for
/// malformed documents. String values are **not** unescaped by the
/// tokenizer; they come back as [`EscapedStr`].
pub fn json_token_iter(input: &[u8]) -> JsonTokenIterator<'_> {
    JsonTokenIterator {
        input,
        index: 0,
        state_stack: Vec::new(),
        done: false,
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum State {
    ObjectFirstKeyOrEnd,
    ObjectNextKeyOrEnd,
    ObjectFieldValue,
    ArrayFirstValueOrEnd,
    ArrayNextValueOrEnd,
}

pub struct JsonTokenIterator<'a> {
    input: &'a [u8],
    index: usize,
    state_stack: Vec<State>,
    done: bool,
}

impl<'a> JsonTokenIterator<'a> {
    fn peek(&self) -> Option<u8> {
        self.input.get(self.index).copied()
    }

    fn discard_whitespace(&mut self) {
        while let Some(byte) = self.peek() {
            match byte {
                b' ' | b'\t' | b'\n' | b'\r' => self.index += 1,
                _ => break,
            }
        }
    }

    fn eos_error(&self) -> Error {
        Error::new(ErrorReason::UnexpectedEos, Some(self.index))
    }

    fn unexpected_token(&self, token: u8, expected: &'static str) -> Error {
        Error::new(
            ErrorReason::UnexpectedToken(token as char, expected),
            Some(self.index),
        )
    }

    /// Reads one value, pushing a new scope for objects and arrays.
    fn read_value(&mut self) -> Result<Token<'a>, Error> {
        let offset = Offset(self.index);
        match self.peek() {
            None => Err(self.eos_error()),
            Some(b'{') => {
                self.index += 1;
                self.state_stack.push(State::ObjectFirstKeyOrEnd);
                Ok(Token::StartObject { offset })
            }
            Some(b'[') => {
                self.index += 1;
                self.state_stack.push(State::ArrayFirstValueOrEnd);
                Ok(Token::StartArray { offset })
            }
            Some(b'"') => {
                let value = self.read_string()?;
                Ok(Token::ValueString { offset, value })
            }
            Some(b't') => self
                .expect_literal("true")
                .map(|()| Token::ValueBool {
                    offset,
                    value: true,
                }),
            Some(b'f') => self
                .expect_literal("false")
                .map(|()| Token::ValueBool {
                    offset,
                    value: false,
                }),
            Some(b'n') => self
                .expect_literal("null")
                .map(|()| Token::ValueNull { offset }),
            Some(b'-') | Some(b'0'..=b'9') => self.read_number(),
            Some(other) => {
                Err(self.unexpected_token(other, "'{', '[', '\"', number, or literal"))
            }
        }
    }

    fn expect_literal(&mut self, literal: &'static str) -> Result<(), Error> {
        if self.input[self.index..].starts_with(literal.as_bytes()) {
            self.index += literal.len();
            Ok(())
        } else {
            Err(Error::new(
                ErrorReason::ExpectedLiteral(literal.into()),
                Some(self.index),
            ))
        }
    }

    /// Reads a string span, validating UTF-8 and rejecting unescaped
    /// control characters. Unescaping is deferred to the caller.
    fn read_string(&mut self) -> Result<EscapedStr<'a>, Error> {
        debug_assert_eq!(self.peek(), Some(b'"'));
        let start = self.index;
        self.index += 1;
        while let Some(byte) = self.peek() {
            match byte {
                b'"' => {
                    let escaped = &self.input[(start + 1)..self.index];
                    self.index += 1;
                    let value = std::str::from_utf8(escaped)
                        .map_err(|_| Error::new(ErrorReason::InvalidUtf8, Some(start)))?;
                    return Ok(EscapedStr::new(value));
                }
                b'\\' => self.index += 2,
                0x00..=0x1F => {
                    return Err(Error::new(
                        ErrorReason::UnexpectedControlCharacter(byte),
                        Some(self.index),
                    ))
                }
                _ => self.index += 1,
            }
        }
        Err(self.eos_error())
    }

    fn read_number(&mut self) -> Result<Token<'a>, Error> {
        let start = self.index;
        let mut float = false;
        if self.peek() == Some(b'-') {
            self.index += 1;
        }
        while let Some(byte) = self.peek() {
            match byte {
                b'0'..=b'9' => self.index += 1,
                b'.' | b'e' | b'E' | b'+' | b'-' => {
                    float = true;
                    self.index += 1;
                }
                _ => break,
            }
        }
        // The span is ASCII by construction
        let number = std::str::from_utf8(&self.input[start..self.index])
            .expect("number spans are ASCII")
            .to_owned();
        let value = if float {
            number.parse::<f64>().map(wire_types::Number::Float).ok()
        } else if number.starts_with('-') {
            number.parse::<i64>().map(wire_types::Number::NegInt).ok()
        } else {
            number.parse::<u64>().map(wire_types::Number::PosInt).ok()
        };
        match value {
            Some(value) => Ok(Token::ValueNumber {
                offset: Offset(start),
                value,
            }),
            None => Err(Error::new(ErrorReason::InvalidNumber, Some(start))),
        }
    }

    /// Reads an object key and the colon that follows it, leaving the
    /// iterator positioned at the field value.
    fn object_key(&mut self) -> Result<Token<'a>, Error> {
        let offset = Offset(self.index);
        let key = self.read_string()?;
        self.discard_whitespace();
        match self.peek() {
            Some(b':') => {
                self.index += 1;
                *self
                    .state_stack
                    .last_mut()
                    .expect("only called inside an object scope") = State::ObjectFieldValue;
                Ok(Token::ObjectKey { offset, key })
            }
            Some(other) => Err(self.unexpected_token(other, "':'")),
            None => Err(self.eos_error()),
        }
    }

    fn object_first_key_or_end(&mut self) -> Result<Token<'a>, Error> {
        match self.peek() {
            None => Err(self.eos_error()),
            Some(b'}') => {
                let offset = Offset(self.index);
                self.index += 1;
                self.state_stack.pop();
                Ok(Token::EndObject { offset })
            }
            Some(b'"') => self.object_key(),
            Some(other) => Err(self.unexpected_token(other, "'}', '\"'")),
        }
    }

    fn object_next_key_or_end(&mut self) -> Result<Token<'a>, Error> {
        match self.peek() {
            None => Err(self.eos_error()),
            Some(b'}') => {
                let offset = Offset(self.index);
                self.index += 1;
                self.state_stack.pop();
                Ok(Token::EndObject { offset })
            }
            Some(b',') => {
                self.index += 1;
                self.discard_whitespace();
                match self.peek() {
                    Some(b'"') => self.object_key(),
                    Some(other) => Err(self.unexpected_token(other, "'\"'")),
                    None => Err(self.eos_error()),
                }
            }
            Some(other) => Err(self.unexpected_token(other, "'}', ','")),
        }
    }

    fn array_first_value_or_end(&mut self) -> Result<Token<'a>, Error> {
        match self.peek() {
            None => Err(self.eos_error()),
            Some(b']') => {
                let offset = Offset(self.index);
                self.index += 1;
                self.state_stack.pop();
                Ok(Token::EndArray { offset })
            }
            _ => {
                *self
                    .state_stack
                    .last_mut()
                    .expect("only called inside an array scope") = State::ArrayNextValueOrEnd;
                self.read_value()
            }
        }
    }

    fn array_next_value_or_end(&mut self) -> Result<Token<'a>, Error> {
        match self.peek() {
            None => Err(self.eos_error()),
            Some(b']') => {
                let offset = Offset(self.index);
                self.index += 1;
                self.state_stack.pop();
                Ok(Token::EndArray { offset })
            }
            Some(b',') => {
                self.index += 1;
                self.discard_whitespace();
                self.read_value()
            }
            Some(other) => Err(self.unexpected_token(other, "']', ','")),
        }
    }
}

impl<'a> Iterator for JsonTokenIterator<'a> {
    type Item = Result<Token<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.discard_whitespace();
        let result = match self.state_stack.last().copied() {
            None => match self.peek() {
                None => return None,
                Some(_) => self.read_value(),
            },
            Some(State::ObjectFirstKeyOrEnd) => self.object_first_key_or_end(),
            Some(State::ObjectNextKeyOrEnd) => self.object_next_key_or_end(),
            Some(State::ObjectFieldValue) => {
                *self
                    .state_stack
                    .last_mut()
                    .expect("checked above") = State::ObjectNextKeyOrEnd;
                self.read_value()
            }
            Some(State::ArrayFirstValueOrEnd) => self.array_first_value_or_end(),
            Some(State::ArrayNextValueOrEnd) => self.array_next_value_or_end(),
        };
        if result.is_err() {
            self.done = true;
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::{json_token_iter, Error, ErrorReason, EscapedStr, Offset, Token};
    use crate::deserialize::skip_value;
    use proptest::proptest;
    use wire_types::Number;

    #[test]
    fn empty_input() {
        assert!(json_token_iter(b"").next().is_none());
        assert!(json_token_iter(b"   \n\t ").next().is_none());
    }

    #[test]
    fn scalars() {
        let tokens: Vec<_> = json_token_iter(b"true false null \"hi\" 5 -2 3.5")
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::ValueBool {
                    offset: Offset(0),
                    value: true
                },
                Token::ValueBool {
                    offset: Offset(5),
                    value: false
                },
                Token::ValueNull { offset: Offset(11) },
                Token::ValueString {
                    offset: Offset(16),
                    value: EscapedStr::new("hi")
                },
                Token::ValueNumber {
                    offset: Offset(21),
                    value: Number::PosInt(5)
                },
                Token::ValueNumber {
                    offset: Offset(23),
                    value: Number::NegInt(-2)
                },
                Token::ValueNumber {
                    offset: Offset(26),
                    value: Number::Float(3.5)
                },
            ]
        );
    }

    #[test]
    fn object_with_fields() {
        let json = br#"{"Name":"test","Count":3,"Nested":{"Enabled":true},"List":[1,2]}"#;
        let tokens: Vec<_> = json_token_iter(json).collect::<Result<_, _>>().unwrap();
        use Token::*;
        assert!(matches!(tokens[0], StartObject { .. }));
        assert!(
            matches!(&tokens[1], ObjectKey { key, .. } if key.as_escaped_str() == "Name")
        );
        assert!(
            matches!(&tokens[2], ValueString { value, .. } if value.as_escaped_str() == "test")
        );
        assert!(
            matches!(&tokens[3], ObjectKey { key, .. } if key.as_escaped_str() == "Count")
        );
        assert!(matches!(
            tokens[4],
            ValueNumber {
                value: Number::PosInt(3),
                ..
            }
        ));
        assert!(matches!(tokens.last(), Some(EndObject { .. })));
        assert_eq!(tokens.len(), 16);
    }

    #[test]
    fn exponent_numbers() {
        let tokens: Vec<_> = json_token_iter(b"[1e3, 1.2e-2]")
            .collect::<Result<_, _>>()
            .unwrap();
        assert!(matches!(
            tokens[1],
            Token::ValueNumber {
                value: Number::Float(v),
                ..
            } if v == 1000.0
        ));
        assert!(matches!(
            tokens[2],
            Token::ValueNumber {
                value: Number::Float(v),
                ..
            } if v == 0.012
        ));
    }

    #[test]
    fn unclosed_structures_are_errors() {
        assert!(json_token_iter(b"{").nth(1).unwrap().is_err());
        assert!(json_token_iter(b"[\"test\"").nth(2).unwrap().is_err());
        assert!(json_token_iter(b"\"unclosed").next().unwrap().is_err());
    }

    #[test]
    fn errors_are_terminal() {
        let mut tokens = json_token_iter(b"[5,6}");
        assert!(tokens.next().unwrap().is_ok());
        assert!(tokens.next().unwrap().is_ok());
        assert!(tokens.next().unwrap().is_ok());
        assert!(tokens.next().unwrap().is_err());
        assert!(tokens.next().is_none());
    }

    #[test]
    fn mismatched_braces() {
        // The tokenizer validates structure, so skip_value doesn't have to.
        assert_eq!(
            Err(Error::new(
                ErrorReason::UnexpectedToken(']', "'}', ','"),
                Some(10),
            )),
            skip_value(&mut json_token_iter(br#"[{"foo": 5]}"#))
        );
        assert_eq!(
            Err(Error::new(
                ErrorReason::UnexpectedToken(']', "'}', ','"),
                Some(9),
            )),
            skip_value(&mut json_token_iter(br#"{"foo": 5]}"#))
        );
        assert_eq!(
            Err(Error::new(
                ErrorReason::UnexpectedToken('}', "']', ','"),
                Some(4),
            )),
            skip_value(&mut json_token_iter(br#"[5,6}"#))
        );
    }

    #[test]
    fn missing_colon_is_an_error() {
        assert!(json_token_iter(b"{\"key\" 5}")
            .nth(1)
            .unwrap()
            .is_err());
    }

    #[test]
    fn unescaped_control_characters_are_errors() {
        assert!(json_token_iter(b"\"new\nline\"").next().unwrap().is_err());
    }

    #[test]
    fn literals_must_match_exactly() {
        assert!(json_token_iter(b"troo").next().unwrap().is_err());
        assert!(json_token_iter(b"nil").next().unwrap().is_err());
    }

    proptest! {
        #[test]
        fn string_round_trips_through_serde_json(s in ".*") {
            let json = serde_json::to_string(&s).unwrap();
            let mut tokens = json_token_iter(json.as_bytes());
            match tokens.next() {
                Some(Ok(Token::ValueString { value, .. })) => {
                    assert_eq!(s, value.to_unescaped().unwrap());
                }
                other => panic!("expected a string token, got {:?}", other),
            }
            assert!(tokens.next().is_none());
        }
    }
}
