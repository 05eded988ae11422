/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::unescape::unescape;
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;
use xmlparser::{ElementEnd, Token, Tokenizer};

#[derive(Debug, Error)]
pub enum XmlError {
    #[error("XML parse error: {0}")]
    InvalidXml(#[from] xmlparser::Error),
    #[error("invalid XML escape: {esc}")]
    InvalidEscape { esc: String },
    #[error("error parsing XML: {msg}")]
    Custom { msg: Cow<'static, str> },
}

impl XmlError {
    pub fn custom(msg: impl Into<Cow<'static, str>>) -> Self {
        XmlError::Custom { msg: msg.into() }
    }

    pub(crate) fn invalid_escape(esc: impl Into<String>) -> Self {
        XmlError::InvalidEscape { esc: esc.into() }
    }
}

/// An element name split into namespace prefix and local part.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Name<'inp> {
    pub prefix: &'inp str,
    pub local: &'inp str,
}

impl<'inp> Name<'inp> {
    /// True if the local part matches `expected`, regardless of prefix.
    pub fn matches(&self, expected: &str) -> bool {
        self.local == expected
    }
}

impl fmt::Display for Name<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.prefix.is_empty() {
            write!(f, "{}", self.local)
        } else {
            write!(f, "{}:{}", self.prefix, self.local)
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Attr<'inp> {
    name: Name<'inp>,
    value: Cow<'inp, str>,
}

impl<'inp> Attr<'inp> {
    pub fn name(&self) -> &Name<'inp> {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A decoded start tag: name, attributes, and its nesting depth.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct StartEl<'inp> {
    name: Name<'inp>,
    attributes: Vec<Attr<'inp>>,
    closed: bool,
    depth: usize,
}

impl<'inp> StartEl<'inp> {
    pub fn name(&self) -> &Name<'inp> {
        &self.name
    }

    pub fn local(&self) -> &'inp str {
        self.name.local
    }

    /// True if this element's local name matches `expected`.
    pub fn matches(&self, expected: &str) -> bool {
        self.name.matches(expected)
    }

    /// Returns the value of the attribute with the given local name.
    pub fn attr(&self, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name.local == local)
            .map(|attr| attr.value())
    }
}

enum XmlToken<'inp> {
    ElementStart(StartEl<'inp>),
    /// Close of the element that was opened at the contained depth.
    ElementClose(usize),
    Text(Cow<'inp, str>),
}

/// A whole XML document positioned before its root element.
pub struct Document<'inp> {
    tokenizer: Tokenizer<'inp>,
    depth: usize,
}

impl<'inp> Document<'inp> {
    pub fn new(input: &'inp str) -> Self {
        Document {
            tokenizer: Tokenizer::from(input),
            depth: 0,
        }
    }

    pub fn try_from(input: &'inp [u8]) -> Result<Self, XmlError> {
        let as_str = std::str::from_utf8(input)
            .map_err(|_| XmlError::custom("XML document was not valid UTF-8"))?;
        Ok(Document::new(as_str))
    }

    /// Returns a decoder scoped to the document's root element.
    pub fn root_element(&mut self) -> Result<ScopedDecoder<'inp, '_>, XmlError> {
        loop {
            match self.next_token()? {
                None => return Err(XmlError::custom("no root element found")),
                Some(XmlToken::ElementStart(start_el)) => {
                    let terminated = start_el.closed;
                    return Ok(ScopedDecoder {
                        doc: self,
                        start_el,
                        terminated,
                    });
                }
                Some(_) => {}
            }
        }
    }

    /// Pulls the next semantic token, folding attribute tokens into
    /// their start tag and dropping comments, declarations, and
    /// whitespace-only text.
    fn next_token(&mut self) -> Result<Option<XmlToken<'inp>>, XmlError> {
        loop {
            let token = match self.tokenizer.next().transpose()? {
                None => return Ok(None),
                Some(token) => token,
            };
            match token {
                Token::ElementStart { prefix, local, .. } => {
                    let name = Name {
                        prefix: prefix.as_str(),
                        local: local.as_str(),
                    };
                    let mut attributes = Vec::new();
                    let (closed, depth) = loop {
                        match self.tokenizer.next().transpose()? {
                            Some(Token::Attribute {
                                prefix,
                                local,
                                value,
                                ..
                            }) => attributes.push(Attr {
                                name: Name {
                                    prefix: prefix.as_str(),
                                    local: local.as_str(),
                                },
                                value: unescape(value.as_str())?,
                            }),
                            Some(Token::ElementEnd {
                                end: ElementEnd::Open,
                                ..
                            }) => {
                                let depth = self.depth;
                                self.depth += 1;
                                break (false, depth);
                            }
                            Some(Token::ElementEnd {
                                end: ElementEnd::Empty,
                                ..
                            }) => break (true, self.depth),
                            _ => {
                                return Err(XmlError::custom(
                                    "expected an attribute or the end of the start tag",
                                ))
                            }
                        }
                    };
                    return Ok(Some(XmlToken::ElementStart(StartEl {
                        name,
                        attributes,
                        closed,
                        depth,
                    })));
                }
                Token::ElementEnd {
                    end: ElementEnd::Close(..),
                    ..
                } => {
                    if self.depth == 0 {
                        return Err(XmlError::custom("close tag without matching open tag"));
                    }
                    self.depth -= 1;
                    return Ok(Some(XmlToken::ElementClose(self.depth)));
                }
                Token::Text { text } => {
                    if !text.as_str().trim().is_empty() {
                        return Ok(Some(XmlToken::Text(unescape(text.as_str())?)));
                    }
                }
                Token::Cdata { text, .. } => {
                    return Ok(Some(XmlToken::Text(Cow::Borrowed(text.as_str()))));
                }
                // declarations, comments, processing instructions, DTDs
                _ => {}
            }
        }
    }
}

/// A decoder scoped to one element.
///
/// [`next_tag`](ScopedDecoder::next_tag) yields a child-scoped decoder
/// per child element. A child scope that is dropped early is re-synced
/// by depth on the next call, so callers can skip subtrees they don't
/// recognize — unknown tags are never an error.
pub struct ScopedDecoder<'inp, 'a> {
    doc: &'a mut Document<'inp>,
    start_el: StartEl<'inp>,
    terminated: bool,
}

impl<'inp> ScopedDecoder<'inp, '_> {
    /// The start tag this decoder is scoped to.
    pub fn start_el(&self) -> &StartEl<'inp> {
        &self.start_el
    }

    /// Returns a decoder for the next child element, or `None` when
    /// this element's close tag is reached.
    pub fn next_tag(&mut self) -> Option<ScopedDecoder<'inp, '_>> {
        if self.terminated || self.start_el.closed {
            return None;
        }
        loop {
            match self.doc.next_token() {
                Err(_) | Ok(None) => {
                    self.terminated = true;
                    return None;
                }
                Ok(Some(XmlToken::ElementStart(el)))
                    if el.depth == self.start_el.depth + 1 =>
                {
                    let terminated = el.closed;
                    return Some(ScopedDecoder {
                        doc: &mut *self.doc,
                        start_el: el,
                        terminated,
                    });
                }
                Ok(Some(XmlToken::ElementClose(depth))) if depth == self.start_el.depth => {
                    self.terminated = true;
                    return None;
                }
                // deeper content left over from a partially-read child scope
                Ok(Some(_)) => {}
            }
        }
    }

    /// Returns the character data of this element ("" when empty).
    ///
    /// Errors if a child element is found instead of data.
    pub fn try_data(&mut self) -> Result<Cow<'inp, str>, XmlError> {
        if self.terminated || self.start_el.closed {
            return Ok(Cow::Borrowed(""));
        }
        loop {
            match self.doc.next_token()? {
                None => {
                    self.terminated = true;
                    return Ok(Cow::Borrowed(""));
                }
                Some(XmlToken::Text(text)) => return Ok(text),
                Some(XmlToken::ElementClose(depth)) if depth == self.start_el.depth => {
                    self.terminated = true;
                    return Ok(Cow::Borrowed(""));
                }
                Some(XmlToken::ElementStart(el)) if !el.closed => {
                    return Err(XmlError::custom(format!(
                        "expected data, found element `{}`",
                        el.name()
                    )));
                }
                Some(_) => {}
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::Document;

    #[test]
    fn parse_flat_response() {
        let xml = br#"<?xml version="1.0"?>
            <SendEmailResponse xmlns="http://ses.amazonaws.com/doc/2010-12-01/">
              <SendEmailResult>
                <MessageId>0000014a-f4d4-4f89</MessageId>
              </SendEmailResult>
              <ResponseMetadata>
                <RequestId>d5964849-c866-11e0</RequestId>
              </ResponseMetadata>
            </SendEmailResponse>"#;
        let mut doc = Document::try_from(xml).unwrap();
        let mut root = doc.root_element().unwrap();
        assert!(root.start_el().matches("SendEmailResponse"));

        let mut message_id = None;
        let mut request_id = None;
        while let Some(mut child) = root.next_tag() {
            if child.start_el().matches("SendEmailResult") {
                while let Some(mut grandchild) = child.next_tag() {
                    if grandchild.start_el().matches("MessageId") {
                        message_id = Some(grandchild.try_data().unwrap().to_string());
                    }
                }
            } else if child.start_el().matches("ResponseMetadata") {
                while let Some(mut grandchild) = child.next_tag() {
                    if grandchild.start_el().matches("RequestId") {
                        request_id = Some(grandchild.try_data().unwrap().to_string());
                    }
                }
            }
        }
        assert_eq!(message_id.as_deref(), Some("0000014a-f4d4-4f89"));
        assert_eq!(request_id.as_deref(), Some("d5964849-c866-11e0"));
    }

    #[test]
    fn unknown_elements_are_skipped() {
        let xml = br#"<Root>
            <Mystery><Deeply><Nested>stuff</Nested></Deeply></Mystery>
            <Known>value</Known>
        </Root>"#;
        let mut doc = Document::try_from(xml).unwrap();
        let mut root = doc.root_element().unwrap();
        let mut known = None;
        while let Some(mut child) = root.next_tag() {
            if child.start_el().matches("Known") {
                known = Some(child.try_data().unwrap().to_string());
            }
            // unrecognized children are dropped without being read
        }
        assert_eq!(known.as_deref(), Some("value"));
    }

    #[test]
    fn partially_read_child_scopes_resync() {
        let xml = br#"<Root><A><B>1</B><C>2</C></A><D>3</D></Root>"#;
        let mut doc = Document::try_from(xml).unwrap();
        let mut root = doc.root_element().unwrap();
        {
            let mut a = root.next_tag().unwrap();
            assert!(a.start_el().matches("A"));
            // read only the first grandchild, then drop the scope
            let mut b = a.next_tag().unwrap();
            assert_eq!(b.try_data().unwrap(), "1");
        }
        let mut d = root.next_tag().unwrap();
        assert!(d.start_el().matches("D"));
        assert_eq!(d.try_data().unwrap(), "3");
        assert!(root.next_tag().is_none());
    }

    #[test]
    fn self_closed_and_empty_elements() {
        let xml = br#"<Root><Empty/><AlsoEmpty></AlsoEmpty></Root>"#;
        let mut doc = Document::try_from(xml).unwrap();
        let mut root = doc.root_element().unwrap();
        let mut empty = root.next_tag().unwrap();
        assert!(empty.start_el().matches("Empty"));
        assert_eq!(empty.try_data().unwrap(), "");
        drop(empty);
        let mut also_empty = root.next_tag().unwrap();
        assert_eq!(also_empty.try_data().unwrap(), "");
    }

    #[test]
    fn attributes_and_entities() {
        let xml = br#"<Root note="a&amp;b"><Value>x &lt; y</Value></Root>"#;
        let mut doc = Document::try_from(xml).unwrap();
        let mut root = doc.root_element().unwrap();
        assert_eq!(root.start_el().attr("note"), Some("a&b"));
        assert_eq!(root.start_el().attr("missing"), None);
        let mut value = root.next_tag().unwrap();
        assert_eq!(value.try_data().unwrap(), "x < y");
    }

    #[test]
    fn data_where_element_expected_is_an_error() {
        let xml = br#"<Root><Child>data</Child></Root>"#;
        let mut doc = Document::try_from(xml).unwrap();
        let mut root = doc.root_element().unwrap();
        assert!(root.try_data().is_err());
    }

    #[test]
    fn invalid_documents() {
        assert!(Document::try_from(&b"\xff\xfe"[..]).is_err());
        let mut doc = Document::new("not xml at all");
        assert!(doc.root_element().is_err());
    }
}
