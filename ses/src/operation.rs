/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Marshals operation inputs into HTTP requests and unmarshals HTTP
//! responses into outputs.
//!
//! Every Query operation POSTs its form-encoded parameter list to `/`;
//! the operation name travels in the `Action` parameter rather than the
//! URI.

use crate::error::Error;
use crate::input::{
    CreateReceiptRuleInput, DeleteIdentityInput, DescribeReceiptRuleInput,
    GetIdentityVerificationAttributesInput, ListIdentitiesInput, SendEmailInput,
    SendRawEmailInput, SetReceiptRulePositionInput, VerifyEmailIdentityInput,
};
use crate::output::{
    CreateReceiptRuleOutput, DeleteIdentityOutput, DescribeReceiptRuleOutput,
    GetIdentityVerificationAttributesOutput, ListIdentitiesOutput, SendEmailOutput,
    SendRawEmailOutput, SetReceiptRulePositionOutput, VerifyEmailIdentityOutput,
};
use crate::{query_ser, xml_deser, xml_errors};
use wire_types::error::BuildError;

const CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

fn build_request(params: String) -> Result<http::Request<Vec<u8>>, BuildError> {
    http::Request::builder()
        .method(http::Method::POST)
        .uri("/")
        .header(http::header::CONTENT_TYPE, CONTENT_TYPE)
        .body(params.into_bytes())
        .map_err(|err| BuildError::InvalidField {
            field: "request",
            details: err.to_string(),
        })
}

impl SendEmailInput {
    /// Marshals this input into an HTTP request.
    pub fn request(&self) -> Result<http::Request<Vec<u8>>, BuildError> {
        build_request(query_ser::send_email_input(self))
    }
}

/// Unmarshals the HTTP response for `SendEmail`.
pub fn parse_send_email_response(
    response: &http::Response<Vec<u8>>,
) -> Result<SendEmailOutput, Error> {
    if !response.status().is_success() {
        return Err(xml_errors::parse_error(response));
    }
    xml_deser::send_email_output(response.body()).map_err(Error::unmarshalling)
}

impl SendRawEmailInput {
    /// Marshals this input into an HTTP request.
    pub fn request(&self) -> Result<http::Request<Vec<u8>>, BuildError> {
        build_request(query_ser::send_raw_email_input(self))
    }
}

/// Unmarshals the HTTP response for `SendRawEmail`.
pub fn parse_send_raw_email_response(
    response: &http::Response<Vec<u8>>,
) -> Result<SendRawEmailOutput, Error> {
    if !response.status().is_success() {
        return Err(xml_errors::parse_error(response));
    }
    xml_deser::send_raw_email_output(response.body()).map_err(Error::unmarshalling)
}

impl VerifyEmailIdentityInput {
    /// Marshals this input into an HTTP request.
    pub fn request(&self) -> Result<http::Request<Vec<u8>>, BuildError> {
        build_request(query_ser::verify_email_identity_input(self))
    }
}

/// Unmarshals the HTTP response for `VerifyEmailIdentity`, whose result
/// is empty.
pub fn parse_verify_email_identity_response(
    response: &http::Response<Vec<u8>>,
) -> Result<VerifyEmailIdentityOutput, Error> {
    if !response.status().is_success() {
        return Err(xml_errors::parse_error(response));
    }
    Ok(VerifyEmailIdentityOutput::builder().build())
}

impl DeleteIdentityInput {
    /// Marshals this input into an HTTP request.
    pub fn request(&self) -> Result<http::Request<Vec<u8>>, BuildError> {
        build_request(query_ser::delete_identity_input(self))
    }
}

/// Unmarshals the HTTP response for `DeleteIdentity`, whose result is
/// empty.
pub fn parse_delete_identity_response(
    response: &http::Response<Vec<u8>>,
) -> Result<DeleteIdentityOutput, Error> {
    if !response.status().is_success() {
        return Err(xml_errors::parse_error(response));
    }
    Ok(DeleteIdentityOutput::builder().build())
}

impl ListIdentitiesInput {
    /// Marshals this input into an HTTP request.
    pub fn request(&self) -> Result<http::Request<Vec<u8>>, BuildError> {
        build_request(query_ser::list_identities_input(self))
    }
}

/// Unmarshals the HTTP response for `ListIdentities`.
pub fn parse_list_identities_response(
    response: &http::Response<Vec<u8>>,
) -> Result<ListIdentitiesOutput, Error> {
    if !response.status().is_success() {
        return Err(xml_errors::parse_error(response));
    }
    xml_deser::list_identities_output(response.body()).map_err(Error::unmarshalling)
}

impl GetIdentityVerificationAttributesInput {
    /// Marshals this input into an HTTP request.
    pub fn request(&self) -> Result<http::Request<Vec<u8>>, BuildError> {
        build_request(query_ser::get_identity_verification_attributes_input(self))
    }
}

/// Unmarshals the HTTP response for `GetIdentityVerificationAttributes`.
pub fn parse_get_identity_verification_attributes_response(
    response: &http::Response<Vec<u8>>,
) -> Result<GetIdentityVerificationAttributesOutput, Error> {
    if !response.status().is_success() {
        return Err(xml_errors::parse_error(response));
    }
    xml_deser::get_identity_verification_attributes_output(response.body())
        .map_err(Error::unmarshalling)
}

impl DescribeReceiptRuleInput {
    /// Marshals this input into an HTTP request.
    pub fn request(&self) -> Result<http::Request<Vec<u8>>, BuildError> {
        build_request(query_ser::describe_receipt_rule_input(self))
    }
}

/// Unmarshals the HTTP response for `DescribeReceiptRule`.
pub fn parse_describe_receipt_rule_response(
    response: &http::Response<Vec<u8>>,
) -> Result<DescribeReceiptRuleOutput, Error> {
    if !response.status().is_success() {
        return Err(xml_errors::parse_error(response));
    }
    xml_deser::describe_receipt_rule_output(response.body()).map_err(Error::unmarshalling)
}

impl CreateReceiptRuleInput {
    /// Marshals this input into an HTTP request.
    pub fn request(&self) -> Result<http::Request<Vec<u8>>, BuildError> {
        build_request(query_ser::create_receipt_rule_input(self))
    }
}

/// Unmarshals the HTTP response for `CreateReceiptRule`, whose result
/// is empty.
pub fn parse_create_receipt_rule_response(
    response: &http::Response<Vec<u8>>,
) -> Result<CreateReceiptRuleOutput, Error> {
    if !response.status().is_success() {
        return Err(xml_errors::parse_error(response));
    }
    Ok(CreateReceiptRuleOutput::builder().build())
}

impl SetReceiptRulePositionInput {
    /// Marshals this input into an HTTP request.
    pub fn request(&self) -> Result<http::Request<Vec<u8>>, BuildError> {
        build_request(query_ser::set_receipt_rule_position_input(self))
    }
}

/// Unmarshals the HTTP response for `SetReceiptRulePosition`, whose
/// result is empty.
pub fn parse_set_receipt_rule_position_response(
    response: &http::Response<Vec<u8>>,
) -> Result<SetReceiptRulePositionOutput, Error> {
    if !response.status().is_success() {
        return Err(xml_errors::parse_error(response));
    }
    Ok(SetReceiptRulePositionOutput::builder().build())
}
