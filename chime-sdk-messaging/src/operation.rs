/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Marshals operation inputs into HTTP requests and unmarshals HTTP
//! responses into outputs.
//!
//! Members bound to the URI must be present and non-empty before any
//! request construction happens; a violation is a [`BuildError`], never
//! a partially-built request.

use crate::error::Error;
use crate::input::{
    CreateChannelInput, DeleteChannelInput, DescribeChannelInput, GetChannelMessageInput,
    ListChannelMessagesInput, ListChannelsInput, SendChannelMessageInput,
    UpdateChannelReadMarkerInput,
};
use crate::output::{
    CreateChannelOutput, DeleteChannelOutput, DescribeChannelOutput, GetChannelMessageOutput,
    ListChannelMessagesOutput, ListChannelsOutput, SendChannelMessageOutput,
    UpdateChannelReadMarkerOutput,
};
use crate::{json_deser, json_errors, json_ser};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use wire_types::error::BuildError;
use wire_types::instant::Format;

const CONTENT_TYPE: &str = "application/x-amz-json-1.0";
const BEARER_HEADER: &str = "x-amz-chime-bearer";

/// Everything except RFC 3986 unreserved characters gets encoded, both
/// in path labels and query values. ARNs bound to the path rely on this
/// (their `:` and `/` must not read as path structure).
const STRICT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn encode(value: &str) -> String {
    utf8_percent_encode(value, STRICT).to_string()
}

fn require_field<'a>(
    field: &'static str,
    value: &'a Option<String>,
) -> Result<&'a str, BuildError> {
    match value.as_deref() {
        Some(value) if !value.is_empty() => Ok(value),
        Some(_) => Err(BuildError::MissingField {
            field,
            details: "cannot be empty",
        }),
        None => Err(BuildError::MissingField {
            field,
            details: "field is required",
        }),
    }
}

fn build_request(
    method: http::Method,
    uri: String,
    bearer: &str,
    body: Option<String>,
) -> Result<http::Request<Vec<u8>>, BuildError> {
    let mut builder = http::Request::builder()
        .method(method)
        .uri(uri)
        .header(BEARER_HEADER, bearer);
    if body.is_some() {
        builder = builder.header(http::header::CONTENT_TYPE, CONTENT_TYPE);
    }
    builder
        .body(body.map(String::into_bytes).unwrap_or_default())
        .map_err(|err| BuildError::InvalidField {
            field: "request",
            details: err.to_string(),
        })
}

impl CreateChannelInput {
    /// Marshals this input into an HTTP request.
    pub fn request(&self) -> Result<http::Request<Vec<u8>>, BuildError> {
        let bearer = require_field("chime_bearer", &self.chime_bearer)?;
        let body = json_ser::create_channel_input(self);
        build_request(http::Method::POST, "/channels".to_string(), bearer, Some(body))
    }
}

/// Unmarshals the HTTP response for `CreateChannel`.
pub fn parse_create_channel_response(
    response: &http::Response<Vec<u8>>,
) -> Result<CreateChannelOutput, Error> {
    if !response.status().is_success() {
        return Err(json_errors::parse_error(response));
    }
    json_deser::create_channel_output(response.body()).map_err(Error::unmarshalling)
}

impl DescribeChannelInput {
    /// Marshals this input into an HTTP request.
    pub fn request(&self) -> Result<http::Request<Vec<u8>>, BuildError> {
        let bearer = require_field("chime_bearer", &self.chime_bearer)?;
        let channel_arn = require_field("channel_arn", &self.channel_arn)?;
        let uri = format!("/channels/{}", encode(channel_arn));
        build_request(http::Method::GET, uri, bearer, None)
    }
}

/// Unmarshals the HTTP response for `DescribeChannel`.
pub fn parse_describe_channel_response(
    response: &http::Response<Vec<u8>>,
) -> Result<DescribeChannelOutput, Error> {
    if !response.status().is_success() {
        return Err(json_errors::parse_error(response));
    }
    json_deser::describe_channel_output(response.body()).map_err(Error::unmarshalling)
}

impl DeleteChannelInput {
    /// Marshals this input into an HTTP request.
    pub fn request(&self) -> Result<http::Request<Vec<u8>>, BuildError> {
        let bearer = require_field("chime_bearer", &self.chime_bearer)?;
        let channel_arn = require_field("channel_arn", &self.channel_arn)?;
        let uri = format!("/channels/{}", encode(channel_arn));
        build_request(http::Method::DELETE, uri, bearer, None)
    }
}

/// Unmarshals the HTTP response for `DeleteChannel`, which has no body.
pub fn parse_delete_channel_response(
    response: &http::Response<Vec<u8>>,
) -> Result<DeleteChannelOutput, Error> {
    if !response.status().is_success() {
        return Err(json_errors::parse_error(response));
    }
    Ok(DeleteChannelOutput::builder().build())
}

impl ListChannelsInput {
    /// Marshals this input into an HTTP request.
    pub fn request(&self) -> Result<http::Request<Vec<u8>>, BuildError> {
        let bearer = require_field("chime_bearer", &self.chime_bearer)?;
        let app_instance_arn = require_field("app_instance_arn", &self.app_instance_arn)?;
        let mut query = vec![format!("app-instance-arn={}", encode(app_instance_arn))];
        if let Some(privacy) = &self.privacy {
            query.push(format!("privacy={}", encode(privacy.as_str())));
        }
        if let Some(max_results) = self.max_results {
            query.push(format!("max-results={}", max_results));
        }
        if let Some(next_token) = &self.next_token {
            query.push(format!("next-token={}", encode(next_token)));
        }
        let uri = format!("/channels?{}", query.join("&"));
        build_request(http::Method::GET, uri, bearer, None)
    }
}

/// Unmarshals the HTTP response for `ListChannels`.
pub fn parse_list_channels_response(
    response: &http::Response<Vec<u8>>,
) -> Result<ListChannelsOutput, Error> {
    if !response.status().is_success() {
        return Err(json_errors::parse_error(response));
    }
    json_deser::list_channels_output(response.body()).map_err(Error::unmarshalling)
}

impl SendChannelMessageInput {
    /// Marshals this input into an HTTP request.
    pub fn request(&self) -> Result<http::Request<Vec<u8>>, BuildError> {
        let bearer = require_field("chime_bearer", &self.chime_bearer)?;
        let channel_arn = require_field("channel_arn", &self.channel_arn)?;
        let uri = format!("/channels/{}/messages", encode(channel_arn));
        let body = json_ser::send_channel_message_input(self);
        build_request(http::Method::POST, uri, bearer, Some(body))
    }
}

/// Unmarshals the HTTP response for `SendChannelMessage`.
pub fn parse_send_channel_message_response(
    response: &http::Response<Vec<u8>>,
) -> Result<SendChannelMessageOutput, Error> {
    if !response.status().is_success() {
        return Err(json_errors::parse_error(response));
    }
    json_deser::send_channel_message_output(response.body()).map_err(Error::unmarshalling)
}

impl GetChannelMessageInput {
    /// Marshals this input into an HTTP request.
    pub fn request(&self) -> Result<http::Request<Vec<u8>>, BuildError> {
        let bearer = require_field("chime_bearer", &self.chime_bearer)?;
        let channel_arn = require_field("channel_arn", &self.channel_arn)?;
        let message_id = require_field("message_id", &self.message_id)?;
        let uri = format!(
            "/channels/{}/messages/{}",
            encode(channel_arn),
            encode(message_id)
        );
        build_request(http::Method::GET, uri, bearer, None)
    }
}

/// Unmarshals the HTTP response for `GetChannelMessage`.
pub fn parse_get_channel_message_response(
    response: &http::Response<Vec<u8>>,
) -> Result<GetChannelMessageOutput, Error> {
    if !response.status().is_success() {
        return Err(json_errors::parse_error(response));
    }
    json_deser::get_channel_message_output(response.body()).map_err(Error::unmarshalling)
}

impl ListChannelMessagesInput {
    /// Marshals this input into an HTTP request.
    pub fn request(&self) -> Result<http::Request<Vec<u8>>, BuildError> {
        let bearer = require_field("chime_bearer", &self.chime_bearer)?;
        let channel_arn = require_field("channel_arn", &self.channel_arn)?;
        let mut query = Vec::new();
        if let Some(sort_order) = &self.sort_order {
            query.push(format!("sort-order={}", encode(sort_order.as_str())));
        }
        if let Some(not_before) = &self.not_before {
            query.push(format!(
                "not-before={}",
                encode(&not_before.fmt(Format::DateTime))
            ));
        }
        if let Some(not_after) = &self.not_after {
            query.push(format!(
                "not-after={}",
                encode(&not_after.fmt(Format::DateTime))
            ));
        }
        if let Some(max_results) = self.max_results {
            query.push(format!("max-results={}", max_results));
        }
        if let Some(next_token) = &self.next_token {
            query.push(format!("next-token={}", encode(next_token)));
        }
        let mut uri = format!("/channels/{}/messages", encode(channel_arn));
        if !query.is_empty() {
            uri.push('?');
            uri.push_str(&query.join("&"));
        }
        build_request(http::Method::GET, uri, bearer, None)
    }
}

/// Unmarshals the HTTP response for `ListChannelMessages`.
pub fn parse_list_channel_messages_response(
    response: &http::Response<Vec<u8>>,
) -> Result<ListChannelMessagesOutput, Error> {
    if !response.status().is_success() {
        return Err(json_errors::parse_error(response));
    }
    json_deser::list_channel_messages_output(response.body()).map_err(Error::unmarshalling)
}

impl UpdateChannelReadMarkerInput {
    /// Marshals this input into an HTTP request.
    pub fn request(&self) -> Result<http::Request<Vec<u8>>, BuildError> {
        let bearer = require_field("chime_bearer", &self.chime_bearer)?;
        let channel_arn = require_field("channel_arn", &self.channel_arn)?;
        let uri = format!("/channels/{}/readMarker", encode(channel_arn));
        let body = json_ser::update_channel_read_marker_input();
        build_request(http::Method::PUT, uri, bearer, Some(body))
    }
}

/// Unmarshals the HTTP response for `UpdateChannelReadMarker`.
pub fn parse_update_channel_read_marker_response(
    response: &http::Response<Vec<u8>>,
) -> Result<UpdateChannelReadMarkerOutput, Error> {
    if !response.status().is_success() {
        return Err(json_errors::parse_error(response));
    }
    json_deser::update_channel_read_marker_output(response.body()).map_err(Error::unmarshalling)
}
