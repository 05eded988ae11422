/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Wire-level tests: requests marshal to the expected HTTP shape, and
//! response bodies unmarshal to the expected outputs.

use chime_sdk_messaging::error::Error;
use chime_sdk_messaging::input::{
    CreateChannelInput, DescribeChannelInput, ListChannelMessagesInput, ListChannelsInput,
    SendChannelMessageInput,
};
use chime_sdk_messaging::model::{
    ChannelMessageType, ChannelMode, ChannelPrivacy, MessageAttributeValue, SortOrder, Tag,
};
use chime_sdk_messaging::operation::{
    parse_get_channel_message_response, parse_list_channel_messages_response,
    parse_send_channel_message_response,
};
use pretty_assertions::assert_eq;
use protocol_test_helpers::{assert_ok, validate_headers, validate_json_body, validate_query_string};
use wire_types::error::BuildError;

const BEARER: &str = "arn:aws:chime:us-east-1:111122223333:app-instance/app/user/alice";
const CHANNEL_ARN: &str = "arn:aws:chime:us-east-1:111122223333:app-instance/app/channel/chan";

fn response(status: u16, body: &str) -> http::Response<Vec<u8>> {
    http::Response::builder()
        .status(status)
        .body(body.as_bytes().to_vec())
        .unwrap()
}

#[test]
fn create_channel_marshals_populated_fields_only() {
    let input = CreateChannelInput::builder()
        .app_instance_arn("arn:aws:chime:us-east-1:111122223333:app-instance/app")
        .name("general")
        .mode(ChannelMode::Restricted)
        .privacy(ChannelPrivacy::Private)
        .tags(Tag::builder().key("env").value("prod").build())
        .chime_bearer(BEARER)
        .build();
    let request = input.request().expect("valid input");

    assert_eq!(request.method(), http::Method::POST);
    assert_eq!(request.uri().path(), "/channels");
    assert_ok(validate_headers(
        &request,
        &[
            ("x-amz-chime-bearer", BEARER),
            ("content-type", "application/x-amz-json-1.0"),
        ],
    ));
    // Metadata and ClientRequestToken were never set: no keys for them
    assert_ok(validate_json_body(
        request.body(),
        r#"{
            "AppInstanceArn": "arn:aws:chime:us-east-1:111122223333:app-instance/app",
            "Name": "general",
            "Mode": "RESTRICTED",
            "Privacy": "PRIVATE",
            "Tags": [{"Key": "env", "Value": "prod"}]
        }"#,
    ));
}

#[test]
fn unset_body_members_marshal_to_an_empty_object() {
    let input = SendChannelMessageInput::builder()
        .channel_arn(CHANNEL_ARN)
        .chime_bearer(BEARER)
        .build();
    let request = input.request().expect("valid input");
    assert_ok(validate_json_body(request.body(), "{}"));
}

#[test]
fn path_members_are_percent_encoded() {
    let input = DescribeChannelInput::builder()
        .channel_arn(CHANNEL_ARN)
        .chime_bearer(BEARER)
        .build();
    let request = input.request().expect("valid input");
    assert_eq!(
        request.uri().path(),
        "/channels/arn%3Aaws%3Achime%3Aus-east-1%3A111122223333%3Aapp-instance%2Fapp%2Fchannel%2Fchan"
    );
}

#[test]
fn list_channels_binds_query_members() {
    let input = ListChannelsInput::builder()
        .app_instance_arn("arn:aws:chime:us-east-1:111122223333:app-instance/app")
        .privacy(ChannelPrivacy::Public)
        .max_results(50)
        .chime_bearer(BEARER)
        .build();
    let request = input.request().expect("valid input");
    assert_ok(validate_query_string(
        &request,
        &["privacy=PUBLIC", "max-results=50"],
    ));
}

#[test]
fn send_channel_message_marshals_nested_and_map_members() {
    let input = SendChannelMessageInput::builder()
        .channel_arn(CHANNEL_ARN)
        .content("hello there")
        .r#type(ChannelMessageType::Standard)
        .client_request_token("token-1")
        .message_attributes(
            "tags",
            MessageAttributeValue::builder()
                .string_values("one")
                .string_values("two")
                .build(),
        )
        .chime_bearer(BEARER)
        .build();
    let request = input.request().expect("valid input");
    assert_ok(validate_json_body(
        request.body(),
        r#"{
            "Content": "hello there",
            "Type": "STANDARD",
            "ClientRequestToken": "token-1",
            "MessageAttributes": {"tags": {"StringValues": ["one", "two"]}}
        }"#,
    ));
}

#[test]
fn missing_uri_member_is_a_build_error_before_any_marshalling() {
    let input = SendChannelMessageInput::builder()
        .content("no channel arn")
        .chime_bearer(BEARER)
        .build();
    match input.request() {
        Err(BuildError::MissingField { field, .. }) => assert_eq!(field, "channel_arn"),
        other => panic!("expected a missing-field error, got {:?}", other),
    }

    let input = SendChannelMessageInput::builder()
        .channel_arn("")
        .chime_bearer(BEARER)
        .build();
    assert!(matches!(
        input.request(),
        Err(BuildError::MissingField { .. })
    ));
}

#[test]
fn get_channel_message_unmarshals_known_fields_and_skips_unknown_ones() {
    let body = r#"{
        "ChannelMessage": {
            "ChannelArn": "arn:aws:chime:us-east-1:111122223333:app-instance/app/channel/chan",
            "MessageId": "msg-01",
            "Content": "hello there",
            "Type": "STANDARD",
            "CreatedTimestamp": 1634839556,
            "Redacted": false,
            "Sender": {"Arn": "arn:user/alice", "Name": "alice"},
            "BrandNewField": {"Nested": ["ignored", 1, true]},
            "MessageAttributes": {"tags": {"StringValues": ["one", "two"]}}
        },
        "AnotherUnknownField": 42
    }"#;
    let output = parse_get_channel_message_response(&response(200, body)).expect("valid body");
    let message = output.channel_message.expect("message present");
    assert_eq!(message.channel_arn.as_deref(), Some(CHANNEL_ARN));
    assert_eq!(message.message_id.as_deref(), Some("msg-01"));
    assert_eq!(message.content.as_deref(), Some("hello there"));
    assert_eq!(message.r#type, Some(ChannelMessageType::Standard));
    assert_eq!(
        message.created_timestamp.map(|t| t.epoch_seconds()),
        Some(1634839556)
    );
    assert_eq!(message.redacted, Some(false));
    assert_eq!(
        message.sender.as_ref().and_then(|s| s.name.as_deref()),
        Some("alice")
    );
    let attributes = message.message_attributes.expect("map decoded");
    assert_eq!(
        attributes["tags"].string_values,
        Some(vec!["one".to_string(), "two".to_string()])
    );
    // fields that were absent on the wire stay unset
    assert_eq!(message.metadata, None);
    assert_eq!(message.persistence, None);
}

#[test]
fn list_channel_messages_preserves_list_order() {
    let body = r#"{
        "ChannelArn": "arn:aws:chime:us-east-1:111122223333:app-instance/app/channel/chan",
        "NextToken": "page-2",
        "ChannelMessages": [
            {"MessageId": "m1", "Content": "first"},
            {"MessageId": "m2", "Content": "second"},
            {"MessageId": "m3", "Content": "third"}
        ]
    }"#;
    let output = parse_list_channel_messages_response(&response(200, body)).expect("valid body");
    let ids: Vec<_> = output
        .channel_messages
        .expect("messages present")
        .into_iter()
        .map(|m| m.message_id.unwrap())
        .collect();
    assert_eq!(ids, vec!["m1", "m2", "m3"]);
    assert_eq!(output.next_token.as_deref(), Some("page-2"));
}

#[test]
fn sort_order_and_timestamps_bind_to_the_query() {
    let input = ListChannelMessagesInput::builder()
        .channel_arn(CHANNEL_ARN)
        .sort_order(SortOrder::Descending)
        .not_before(wire_types::Instant::from_epoch_seconds(1576540098))
        .chime_bearer(BEARER)
        .build();
    let request = input.request().expect("valid input");
    assert_ok(validate_query_string(
        &request,
        &[
            "sort-order=DESCENDING",
            "not-before=2019-12-16T23%3A48%3A18Z",
        ],
    ));
}

#[test]
fn error_responses_dispatch_to_the_matching_fault() {
    let body = r#"{"__type":"ConflictException","Code":"Conflict","Message":"already exists"}"#;
    match parse_send_channel_message_response(&response(409, body)) {
        Err(Error::ConflictException(err)) => {
            assert_eq!(err.message(), Some("already exists"));
        }
        other => panic!("expected ConflictException, got {:?}", other),
    }
}

#[test]
fn unclaimed_error_codes_surface_as_unhandled() {
    let body = r#"{"__type":"SomethingNew","Message":"??"}"#;
    match parse_send_channel_message_response(&response(500, body)) {
        Err(Error::Unhandled(metadata)) => {
            assert_eq!(metadata.code(), Some("SomethingNew"));
        }
        other => panic!("expected Unhandled, got {:?}", other),
    }
}
