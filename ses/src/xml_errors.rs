/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Decodes `<ErrorResponse>` bodies.
//!
//! The `<Error>` element is decoded once into an envelope (code,
//! message, and any service-specific members like `Name` or `Bucket`,
//! kept by path). Each candidate fault unmarshaller claims the envelope
//! only on an exact `Code` match; the first match wins, and an
//! unclaimed envelope falls through to [`Error::Unhandled`].

use crate::error::{
    AlreadyExistsException, CannotDeleteException, ConfigurationSetDoesNotExistException, Error,
    InvalidS3ConfigurationException, InvalidSnsTopicException, LimitExceededException,
    MailFromDomainNotVerifiedException, MessageRejectedException, RuleDoesNotExistException,
    RuleSetDoesNotExistException,
};
use std::collections::HashMap;
use wire_types::error::Metadata;
use wire_xml::decode::{Document, XmlError};

/// The decoded contents of an `<ErrorResponse>`.
#[derive(Debug, Default)]
struct ErrorEnvelope {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
    /// Scalar children of `<Error>` beyond Type/Code/Message, keyed by
    /// element name.
    extras: HashMap<String, String>,
}

impl ErrorEnvelope {
    fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Looks up a service-specific member by its path inside `Error`.
    fn extra(&self, path: &str) -> Option<String> {
        self.extras.get(path).cloned()
    }
}

type FaultUnmarshaller = fn(&ErrorEnvelope) -> Option<Error>;

/// One candidate per modeled exception, tried in order.
const FAULT_UNMARSHALLERS: &[FaultUnmarshaller] = &[
    try_already_exists,
    try_cannot_delete,
    try_configuration_set_does_not_exist,
    try_invalid_s3_configuration,
    try_invalid_sns_topic,
    try_limit_exceeded,
    try_message_rejected,
    try_mail_from_domain_not_verified,
    try_rule_does_not_exist,
    try_rule_set_does_not_exist,
];

pub(crate) fn parse_error(response: &http::Response<Vec<u8>>) -> Error {
    let envelope = match parse_error_envelope(response.body()) {
        Ok(envelope) => envelope,
        Err(err) => return Error::unmarshalling(err),
    };
    for candidate in FAULT_UNMARSHALLERS {
        if let Some(error) = candidate(&envelope) {
            return error;
        }
    }
    let mut builder = Metadata::builder().set_message(envelope.message);
    if let Some(code) = envelope.code {
        builder = builder.code(code);
    }
    if let Some(request_id) = envelope.request_id {
        builder = builder.request_id(request_id);
    }
    Error::Unhandled(builder.build())
}

fn try_already_exists(envelope: &ErrorEnvelope) -> Option<Error> {
    if envelope.code() != Some("AlreadyExists") {
        return None;
    }
    Some(Error::AlreadyExistsException(AlreadyExistsException {
        name: envelope.extra("Name"),
        message: envelope.message.clone(),
    }))
}

fn try_cannot_delete(envelope: &ErrorEnvelope) -> Option<Error> {
    if envelope.code() != Some("CannotDelete") {
        return None;
    }
    Some(Error::CannotDeleteException(CannotDeleteException {
        name: envelope.extra("Name"),
        message: envelope.message.clone(),
    }))
}

fn try_configuration_set_does_not_exist(envelope: &ErrorEnvelope) -> Option<Error> {
    if envelope.code() != Some("ConfigurationSetDoesNotExist") {
        return None;
    }
    Some(Error::ConfigurationSetDoesNotExistException(
        ConfigurationSetDoesNotExistException {
            configuration_set_name: envelope.extra("ConfigurationSetName"),
            message: envelope.message.clone(),
        },
    ))
}

fn try_invalid_s3_configuration(envelope: &ErrorEnvelope) -> Option<Error> {
    if envelope.code() != Some("InvalidS3Configuration") {
        return None;
    }
    Some(Error::InvalidS3ConfigurationException(
        InvalidS3ConfigurationException {
            bucket: envelope.extra("Bucket"),
            message: envelope.message.clone(),
        },
    ))
}

fn try_invalid_sns_topic(envelope: &ErrorEnvelope) -> Option<Error> {
    if envelope.code() != Some("InvalidSnsTopic") {
        return None;
    }
    Some(Error::InvalidSnsTopicException(InvalidSnsTopicException {
        topic: envelope.extra("Topic"),
        message: envelope.message.clone(),
    }))
}

fn try_limit_exceeded(envelope: &ErrorEnvelope) -> Option<Error> {
    if envelope.code() != Some("LimitExceeded") {
        return None;
    }
    Some(Error::LimitExceededException(LimitExceededException {
        message: envelope.message.clone(),
    }))
}

fn try_message_rejected(envelope: &ErrorEnvelope) -> Option<Error> {
    if envelope.code() != Some("MessageRejected") {
        return None;
    }
    Some(Error::MessageRejectedException(MessageRejectedException {
        message: envelope.message.clone(),
    }))
}

fn try_mail_from_domain_not_verified(envelope: &ErrorEnvelope) -> Option<Error> {
    if envelope.code() != Some("MailFromDomainNotVerifiedException") {
        return None;
    }
    Some(Error::MailFromDomainNotVerifiedException(
        MailFromDomainNotVerifiedException {
            message: envelope.message.clone(),
        },
    ))
}

fn try_rule_does_not_exist(envelope: &ErrorEnvelope) -> Option<Error> {
    if envelope.code() != Some("RuleDoesNotExist") {
        return None;
    }
    Some(Error::RuleDoesNotExistException(RuleDoesNotExistException {
        name: envelope.extra("Name"),
        message: envelope.message.clone(),
    }))
}

fn try_rule_set_does_not_exist(envelope: &ErrorEnvelope) -> Option<Error> {
    if envelope.code() != Some("RuleSetDoesNotExist") {
        return None;
    }
    Some(Error::RuleSetDoesNotExistException(
        RuleSetDoesNotExistException {
            name: envelope.extra("Name"),
            message: envelope.message.clone(),
        },
    ))
}

fn parse_error_envelope(body: &[u8]) -> Result<ErrorEnvelope, XmlError> {
    let mut doc = Document::try_from(body)?;
    let mut root = doc.root_element()?;
    if !root.start_el().matches("ErrorResponse") {
        return Err(XmlError::custom("expected an ErrorResponse document"));
    }
    let mut envelope = ErrorEnvelope::default();
    while let Some(mut child) = root.next_tag() {
        if child.start_el().matches("Error") {
            while let Some(mut field) = child.next_tag() {
                let local = field.start_el().local();
                match local {
                    "Type" => {
                        // Sender/Receiver classification; not surfaced
                        field.try_data()?;
                    }
                    "Code" => envelope.code = Some(field.try_data()?.to_string()),
                    "Message" => envelope.message = Some(field.try_data()?.to_string()),
                    other => {
                        // service-specific members, e.g. Name or Bucket
                        if let Ok(data) = field.try_data() {
                            envelope.extras.insert(other.to_string(), data.to_string());
                        }
                    }
                }
            }
        } else if child.start_el().matches("RequestId") {
            envelope.request_id = Some(child.try_data()?.to_string());
        }
    }
    Ok(envelope)
}

#[cfg(test)]
mod test {
    use super::parse_error;
    use crate::error::Error;

    fn response(body: &str) -> http::Response<Vec<u8>> {
        http::Response::builder()
            .status(400)
            .body(body.as_bytes().to_vec())
            .unwrap()
    }

    const RULE_SET_MISSING: &str = r#"<ErrorResponse>
        <Error>
            <Type>Sender</Type>
            <Code>RuleSetDoesNotExist</Code>
            <Message>Rule set does not exist: my-rules</Message>
            <Name>my-rules</Name>
        </Error>
        <RequestId>42d59b56-7407-4c4a-be0f-4c88daeea257</RequestId>
    </ErrorResponse>"#;

    #[test]
    fn matching_code_claims_the_response_and_extracts_extras() {
        match parse_error(&response(RULE_SET_MISSING)) {
            Error::RuleSetDoesNotExistException(err) => {
                assert_eq!(err.name.as_deref(), Some("my-rules"));
                assert_eq!(err.message(), Some("Rule set does not exist: my-rules"));
            }
            other => panic!("wrong error variant: {:?}", other),
        }
    }

    #[test]
    fn non_matching_candidates_pass_and_the_chain_falls_through() {
        let body = r#"<ErrorResponse>
            <Error>
                <Type>Sender</Type>
                <Code>BrandNewErrorCode</Code>
                <Message>no unmarshaller knows this</Message>
            </Error>
            <RequestId>0000-1111</RequestId>
        </ErrorResponse>"#;
        match parse_error(&response(body)) {
            Error::Unhandled(metadata) => {
                assert_eq!(metadata.code(), Some("BrandNewErrorCode"));
                assert_eq!(metadata.message(), Some("no unmarshaller knows this"));
                assert_eq!(metadata.request_id(), Some("0000-1111"));
            }
            other => panic!("wrong error variant: {:?}", other),
        }
    }

    #[test]
    fn code_match_is_exact() {
        // `RuleSetDoesNotExist` must not claim `RuleDoesNotExist`
        let body = r#"<ErrorResponse>
            <Error>
                <Code>RuleDoesNotExist</Code>
                <Message>Rule does not exist: forwarder</Message>
                <Name>forwarder</Name>
            </Error>
        </ErrorResponse>"#;
        match parse_error(&response(body)) {
            Error::RuleDoesNotExistException(err) => {
                assert_eq!(err.name.as_deref(), Some("forwarder"));
            }
            other => panic!("wrong error variant: {:?}", other),
        }
    }

    #[test]
    fn garbage_body_is_an_unmarshalling_error() {
        assert!(matches!(
            parse_error(&response("<html>Bad Gateway</html>")),
            Error::Unmarshalling(_)
        ));
    }
}
