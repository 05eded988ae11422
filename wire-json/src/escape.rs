/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::borrow::Cow;
use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum EscapeError {
    ExpectedSurrogatePair(String),
    InvalidEscapeCharacter(char),
    InvalidSurrogatePair(u16, u16),
    InvalidUnicodeEscape(String),
    InvalidUtf8,
    UnexpectedEndOfString,
}

impl fmt::Display for EscapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use EscapeError::*;
        match self {
            ExpectedSurrogatePair(low) => write!(
                f,
                "expected a UTF-16 surrogate pair, but got {} as the low word",
                low
            ),
            InvalidEscapeCharacter(chr) => write!(f, "invalid JSON escape: \\{}", chr),
            InvalidSurrogatePair(high, low) => {
                write!(f, "invalid surrogate pair: \\u{:04x}\\u{:04x}", high, low)
            }
            InvalidUnicodeEscape(escape) => write!(f, "invalid JSON unicode escape: \\u{}", escape),
            InvalidUtf8 => write!(f, "invalid UTF-8 codepoint in JSON stream"),
            UnexpectedEndOfString => write!(f, "unexpected end of string"),
        }
    }
}

impl std::error::Error for EscapeError {}

/// Escapes a string for embedding in a JSON string value.
///
/// Returns the original string when nothing needs escaping.
pub fn escape_string(value: &str) -> Cow<'_, str> {
    let bytes = value.as_bytes();
    for (index, byte) in bytes.iter().enumerate() {
        match byte {
            0..=0x1F | b'"' | b'\\' => {
                return Cow::Owned(escape_string_inner(&bytes[0..index], &bytes[index..]))
            }
            _ => {}
        }
    }
    Cow::Borrowed(value)
}

fn escape_string_inner(start: &[u8], rest: &[u8]) -> String {
    let mut escaped = start.to_vec();
    for byte in rest {
        match byte {
            b'"' => escaped.extend("\\\"".bytes()),
            b'\\' => escaped.extend("\\\\".bytes()),
            0x08 => escaped.extend("\\b".bytes()),
            0x0C => escaped.extend("\\f".bytes()),
            b'\n' => escaped.extend("\\n".bytes()),
            b'\r' => escaped.extend("\\r".bytes()),
            b'\t' => escaped.extend("\\t".bytes()),
            0..=0x1F => escaped.extend(format!("\\u{:04x}", byte).bytes()),
            _ => escaped.push(*byte),
        }
    }
    // The input was valid UTF-8 and every replacement is ASCII
    debug_assert!(String::from_utf8(escaped.clone()).is_ok());
    unsafe { String::from_utf8_unchecked(escaped) }
}

/// Unescapes a JSON-escaped string.
///
/// If the string doesn't need unescaping, it is returned as-is.
pub fn unescape_string(value: &str) -> Result<Cow<'_, str>, EscapeError> {
    let bytes = value.as_bytes();
    for (index, byte) in bytes.iter().enumerate() {
        if *byte == b'\\' {
            return unescape_string_inner(&bytes[0..index], &bytes[index..]).map(Cow::Owned);
        }
    }
    Ok(Cow::Borrowed(value))
}

fn unescape_string_inner(start: &[u8], rest: &[u8]) -> Result<String, EscapeError> {
    let mut unescaped = start.to_vec();
    let mut index = 0;
    while index < rest.len() {
        match rest[index] {
            b'\\' => match rest.get(index + 1) {
                None => return Err(EscapeError::UnexpectedEndOfString),
                Some(b'u') => {
                    let (consumed, chr) = read_unicode_escapes(&rest[index..])?;
                    let mut buffer = [0u8; 4];
                    unescaped.extend_from_slice(chr.encode_utf8(&mut buffer).as_bytes());
                    index += consumed;
                }
                Some(escape) => {
                    match escape {
                        b'"' => unescaped.push(b'"'),
                        b'\\' => unescaped.push(b'\\'),
                        b'/' => unescaped.push(b'/'),
                        b'b' => unescaped.push(0x08),
                        b'f' => unescaped.push(0x0C),
                        b'n' => unescaped.push(b'\n'),
                        b'r' => unescaped.push(b'\r'),
                        b't' => unescaped.push(b'\t'),
                        _ => return Err(EscapeError::InvalidEscapeCharacter(*escape as char)),
                    }
                    index += 2;
                }
            },
            byte => {
                unescaped.push(byte);
                index += 1;
            }
        }
    }
    String::from_utf8(unescaped).map_err(|_| EscapeError::InvalidUtf8)
}

/// Reads one `\uXXXX` escape (or a surrogate pair of them) starting at
/// the backslash. Returns the number of bytes consumed and the decoded
/// character.
fn read_unicode_escapes(bytes: &[u8]) -> Result<(usize, char), EscapeError> {
    let high = read_unicode_escape(bytes)?;
    if (0xD800..=0xDBFF).contains(&high) {
        let low = match bytes.get(6..) {
            Some(low_bytes) if low_bytes.starts_with(b"\\u") => read_unicode_escape(low_bytes)?,
            _ => {
                let found = bytes
                    .get(6..12)
                    .map(|b| String::from_utf8_lossy(b).into_owned())
                    .unwrap_or_default();
                return Err(EscapeError::ExpectedSurrogatePair(found));
            }
        };
        if !(0xDC00..=0xDFFF).contains(&low) {
            return Err(EscapeError::InvalidSurrogatePair(high, low));
        }
        let codepoint =
            0x10000 + ((high as u32 - 0xD800) << 10) + (low as u32 - 0xDC00);
        let chr = std::char::from_u32(codepoint)
            .ok_or(EscapeError::InvalidSurrogatePair(high, low))?;
        Ok((12, chr))
    } else {
        let chr = std::char::from_u32(high as u32).ok_or_else(|| {
            EscapeError::InvalidUnicodeEscape(format!("{:04x}", high))
        })?;
        Ok((6, chr))
    }
}

/// Reads a single 4-digit hex escape starting at the backslash.
fn read_unicode_escape(bytes: &[u8]) -> Result<u16, EscapeError> {
    debug_assert!(bytes.starts_with(b"\\u"));
    let digits = bytes
        .get(2..6)
        .ok_or(EscapeError::UnexpectedEndOfString)?;
    let digits_str =
        std::str::from_utf8(digits).map_err(|_| EscapeError::InvalidUtf8)?;
    u16::from_str_radix(digits_str, 16)
        .map_err(|_| EscapeError::InvalidUnicodeEscape(digits_str.into()))
}

#[cfg(test)]
mod test {
    use super::{escape_string, unescape_string, EscapeError};
    use std::borrow::Cow;

    #[test]
    fn escape() {
        assert_eq!("", escape_string("").as_ref());
        assert_eq!("foo", escape_string("foo").as_ref());
        assert_eq!("foo\\r\\nbar", escape_string("foo\r\nbar").as_ref());
        assert_eq!(r#"foo\\bar"#, escape_string(r#"foo\bar"#).as_ref());
        assert_eq!(
            r#"\bf\fo\to\r\n"#,
            escape_string("\u{08}f\u{0C}o\to\r\n").as_ref()
        );
        assert_eq!("\\\"test\\\"", escape_string("\"test\"").as_ref());
        assert_eq!("\\u0000", escape_string("\u{0}").as_ref());
        assert_eq!("\\u001f", escape_string("\u{1f}").as_ref());
    }

    #[test]
    fn unescape_none_needed() {
        assert!(matches!(
            unescape_string("plain string").unwrap(),
            Cow::Borrowed("plain string")
        ));
    }

    #[test]
    fn unescape_simple_escapes() {
        assert_eq!(
            "\"test\"\ntest\ttab\\slash/\r\u{08}\u{0C}",
            unescape_string(r#"\"test\"\ntest\ttab\\slash\/\r\b\f"#).unwrap()
        );
    }

    #[test]
    fn unescape_unicode() {
        assert_eq!("\u{1f}", unescape_string("\\u001f").unwrap());
        assert_eq!("foo\u{2603}bar", unescape_string("foo\\u2603bar").unwrap());
        // surrogate pair
        assert_eq!("\u{1D11E}", unescape_string("\\uD834\\uDD1E").unwrap());
    }

    #[test]
    fn unescape_errors() {
        assert_eq!(
            Err(EscapeError::InvalidEscapeCharacter('q')),
            unescape_string("\\q")
        );
        assert_eq!(
            Err(EscapeError::UnexpectedEndOfString),
            unescape_string("\\")
        );
        assert_eq!(
            Err(EscapeError::UnexpectedEndOfString),
            unescape_string("\\u00")
        );
        assert!(matches!(
            unescape_string("\\uD834 no pair"),
            Err(EscapeError::ExpectedSurrogatePair(_))
        ));
        assert!(matches!(
            unescape_string("\\uD834\\uD834"),
            Err(EscapeError::InvalidSurrogatePair(_, _))
        ));
    }

    use proptest::proptest;
    proptest! {
        #[test]
        fn escape_matches_serde_json(s in ".*") {
            assert_eq!(
                serde_json::to_string(&s).unwrap(),
                format!(r#""{}""#, escape_string(&s))
            )
        }

        #[test]
        fn escape_unescape_round_trips(s in ".*") {
            assert_eq!(s, unescape_string(&escape_string(&s)).unwrap());
        }
    }
}
