/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::decode::XmlError;
use std::borrow::Cow;

/// Resolves XML entity references (`&amp;`, `&lt;`, `&gt;`, `&quot;`,
/// `&apos;`, and numeric `&#nn;`/`&#xhh;` forms).
///
/// Returns the input unchanged when it contains no references.
pub fn unescape(s: &str) -> Result<Cow<'_, str>, XmlError> {
    if !s.contains('&') {
        return Ok(Cow::Borrowed(s));
    }
    let mut result = String::with_capacity(s.len());
    let mut remaining = s;
    while let Some(idx) = remaining.find('&') {
        result.push_str(&remaining[..idx]);
        let after = &remaining[idx + 1..];
        let semicolon = after
            .find(';')
            .ok_or_else(|| XmlError::custom("unterminated entity reference"))?;
        let entity = &after[..semicolon];
        match entity {
            "amp" => result.push('&'),
            "lt" => result.push('<'),
            "gt" => result.push('>'),
            "quot" => result.push('"'),
            "apos" => result.push('\''),
            entity if entity.starts_with("#x") || entity.starts_with("#X") => {
                let codepoint = u32::from_str_radix(&entity[2..], 16)
                    .ok()
                    .and_then(std::char::from_u32)
                    .ok_or_else(|| XmlError::invalid_escape(entity))?;
                result.push(codepoint);
            }
            entity if entity.starts_with('#') => {
                let codepoint = entity[1..]
                    .parse::<u32>()
                    .ok()
                    .and_then(std::char::from_u32)
                    .ok_or_else(|| XmlError::invalid_escape(entity))?;
                result.push(codepoint);
            }
            entity => return Err(XmlError::invalid_escape(entity)),
        }
        remaining = &after[semicolon + 1..];
    }
    result.push_str(remaining);
    Ok(Cow::Owned(result))
}

#[cfg(test)]
mod test {
    use super::unescape;
    use std::borrow::Cow;

    #[test]
    fn no_escapes_borrows() {
        assert!(matches!(
            unescape("plain text").unwrap(),
            Cow::Borrowed("plain text")
        ));
    }

    #[test]
    fn named_entities() {
        assert_eq!(
            "a&b<c>d\"e'f",
            unescape("a&amp;b&lt;c&gt;d&quot;e&apos;f").unwrap()
        );
    }

    #[test]
    fn numeric_entities() {
        assert_eq!("a\nb", unescape("a&#10;b").unwrap());
        assert_eq!("a\nb", unescape("a&#x0A;b").unwrap());
        assert_eq!("\u{2603}", unescape("&#x2603;").unwrap());
    }

    #[test]
    fn invalid_entities() {
        assert!(unescape("&unknown;").is_err());
        assert!(unescape("&#xD800;").is_err());
        assert!(unescape("&#notanumber;").is_err());
        assert!(unescape("&unterminated").is_err());
    }
}
