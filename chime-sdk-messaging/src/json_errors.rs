/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Decodes error responses.
//!
//! The error code is sniffed from the `x-amzn-ErrorType` header or the
//! body's `__type`/`code` member, then offered to one candidate fault
//! unmarshaller per modeled exception. A candidate only claims the
//! response on an exact code match; the first match wins, and an
//! unclaimed response falls through to [`Error::Unhandled`].

use crate::error::Error;
use crate::json_deser;
use wire_json::deserialize::{
    expect_start_object, expect_string_or_null, json_token_iter, skip_value,
    Error as DeserializeError, Token,
};
use wire_types::error::Metadata;

const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";
const REQUEST_ID_HEADER: &str = "x-amzn-requestid";

type FaultUnmarshaller = fn(&str, &[u8]) -> Result<Option<Error>, DeserializeError>;

/// One candidate per modeled exception, tried in order.
const FAULT_UNMARSHALLERS: &[FaultUnmarshaller] = &[
    try_bad_request_exception,
    try_conflict_exception,
    try_forbidden_exception,
    try_not_found_exception,
    try_resource_limit_exceeded_exception,
    try_service_failure_exception,
    try_service_unavailable_exception,
    try_throttled_client_exception,
    try_unauthorized_client_exception,
];

pub(crate) fn parse_error(response: &http::Response<Vec<u8>>) -> Error {
    let generic = match parse_generic_error(response) {
        Ok(generic) => generic,
        Err(err) => return Error::unmarshalling(err),
    };
    let code = generic.code().unwrap_or_default().to_string();
    for candidate in FAULT_UNMARSHALLERS {
        match candidate(&code, response.body()) {
            Ok(Some(error)) => return error,
            Ok(None) => continue,
            Err(err) => return Error::unmarshalling(err),
        }
    }
    Error::Unhandled(generic)
}

macro_rules! fault_unmarshaller {
    ($fn_name:ident, $error_code:literal, $deser:ident, $variant:ident) => {
        fn $fn_name(code: &str, body: &[u8]) -> Result<Option<Error>, DeserializeError> {
            if code != $error_code {
                return Ok(None);
            }
            Ok(Some(Error::$variant(json_deser::$deser(body)?)))
        }
    };
}

fault_unmarshaller!(
    try_bad_request_exception,
    "BadRequestException",
    bad_request_exception,
    BadRequestException
);
fault_unmarshaller!(
    try_conflict_exception,
    "ConflictException",
    conflict_exception,
    ConflictException
);
fault_unmarshaller!(
    try_forbidden_exception,
    "ForbiddenException",
    forbidden_exception,
    ForbiddenException
);
fault_unmarshaller!(
    try_not_found_exception,
    "NotFoundException",
    not_found_exception,
    NotFoundException
);
fault_unmarshaller!(
    try_resource_limit_exceeded_exception,
    "ResourceLimitExceededException",
    resource_limit_exceeded_exception,
    ResourceLimitExceededException
);
fault_unmarshaller!(
    try_service_failure_exception,
    "ServiceFailureException",
    service_failure_exception,
    ServiceFailureException
);
fault_unmarshaller!(
    try_service_unavailable_exception,
    "ServiceUnavailableException",
    service_unavailable_exception,
    ServiceUnavailableException
);
fault_unmarshaller!(
    try_throttled_client_exception,
    "ThrottledClientException",
    throttled_client_exception,
    ThrottledClientException
);
fault_unmarshaller!(
    try_unauthorized_client_exception,
    "UnauthorizedClientException",
    unauthorized_client_exception,
    UnauthorizedClientException
);

/// Decodes whatever generic error metadata the response carries.
fn parse_generic_error(
    response: &http::Response<Vec<u8>>,
) -> Result<Metadata, DeserializeError> {
    let mut body_code = None;
    let mut message = None;
    let mut tokens = json_token_iter(response.body()).peekable();
    expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(Token::EndObject { .. }) => break,
            Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                "__type" | "code" => body_code = expect_string_or_null(tokens.next())?,
                "message" | "Message" | "errorMessage" => {
                    message = expect_string_or_null(tokens.next())?
                }
                _ => skip_value(&mut tokens)?,
            },
            _ => return Err(DeserializeError::custom("expected object key or end object")),
        }
    }

    let header_code = response
        .headers()
        .get(ERROR_TYPE_HEADER)
        .and_then(|value| value.to_str().ok());
    let code = header_code
        .or(body_code.as_deref())
        .map(sanitize_error_code);
    let request_id = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok());

    let mut builder = Metadata::builder().set_message(message);
    if let Some(code) = code {
        builder = builder.code(code);
    }
    if let Some(request_id) = request_id {
        builder = builder.request_id(request_id);
    }
    Ok(builder.build())
}

/// Error codes can arrive as `namespace#ErrorName:http://...` — strip
/// the trailing URL first, then the namespace prefix.
fn sanitize_error_code(code: &str) -> &str {
    let code = match code.find(':') {
        Some(idx) => &code[..idx],
        None => code,
    };
    match code.find('#') {
        Some(idx) => &code[idx + 1..],
        None => code,
    }
}

#[cfg(test)]
mod test {
    use super::{parse_error, sanitize_error_code};
    use crate::error::Error;
    use crate::model::ErrorCode;

    fn error_response(
        error_type_header: Option<&str>,
        body: &str,
    ) -> http::Response<Vec<u8>> {
        let mut builder = http::Response::builder().status(400);
        if let Some(value) = error_type_header {
            builder = builder.header("x-amzn-ErrorType", value);
        }
        builder.body(body.as_bytes().to_vec()).unwrap()
    }

    #[test]
    fn sanitize() {
        assert_eq!("FooError", sanitize_error_code("FooError"));
        assert_eq!(
            "FooError",
            sanitize_error_code("aws.protocoltests#FooError")
        );
        assert_eq!(
            "FooError",
            sanitize_error_code("aws.protocoltests#FooError:http://internal.amazon.com/coral/")
        );
    }

    #[test]
    fn code_from_body_type_member() {
        let response = error_response(
            None,
            r#"{"__type":"com.amazon.chime#BadRequestException","Code":"BadRequest","Message":"invalid"}"#,
        );
        match parse_error(&response) {
            Error::BadRequestException(err) => {
                assert_eq!(err.code, Some(ErrorCode::BadRequest));
                assert_eq!(err.message(), Some("invalid"));
            }
            other => panic!("wrong error variant: {:?}", other),
        }
    }

    #[test]
    fn header_code_takes_precedence() {
        let response = error_response(
            Some("ThrottledClientException"),
            r#"{"Code":"Throttled","Message":"slow down"}"#,
        );
        assert!(matches!(
            parse_error(&response),
            Error::ThrottledClientException(_)
        ));
    }

    #[test]
    fn unknown_code_falls_through_to_unhandled() {
        let response = error_response(
            Some("BrandNewException"),
            r#"{"Message":"never seen before"}"#,
        );
        match parse_error(&response) {
            Error::Unhandled(metadata) => {
                assert_eq!(metadata.code(), Some("BrandNewException"));
                assert_eq!(metadata.message(), Some("never seen before"));
            }
            other => panic!("wrong error variant: {:?}", other),
        }
    }

    #[test]
    fn garbage_body_is_an_unmarshalling_error() {
        let response = error_response(None, "<html>Service Unavailable</html>");
        assert!(matches!(
            parse_error(&response),
            Error::Unmarshalling(_)
        ));
    }
}
