/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Marshals operation inputs into JSON request bodies. Only populated
//! fields are written; a fully-unset input serializes as `{}`.

use crate::input::{CreateChannelInput, SendChannelMessageInput};
use crate::model::{MessageAttributeValue, PushNotificationConfiguration, Tag};
use std::collections::HashMap;
use wire_json::serialize::JsonObjectWriter;

pub(crate) fn create_channel_input(input: &CreateChannelInput) -> String {
    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    if let Some(app_instance_arn) = &input.app_instance_arn {
        object.string("AppInstanceArn", app_instance_arn);
    }
    if let Some(name) = &input.name {
        object.string("Name", name);
    }
    if let Some(mode) = &input.mode {
        object.string("Mode", mode.as_str());
    }
    if let Some(privacy) = &input.privacy {
        object.string("Privacy", privacy.as_str());
    }
    if let Some(metadata) = &input.metadata {
        object.string("Metadata", metadata);
    }
    if let Some(client_request_token) = &input.client_request_token {
        object.string("ClientRequestToken", client_request_token);
    }
    if let Some(tags) = &input.tags {
        let mut array = object.start_array("Tags");
        for item in tags {
            let mut entry = array.start_object();
            serialize_tag(&mut entry, item);
            entry.finish();
        }
        array.finish();
    }
    object.finish();
    out
}

pub(crate) fn send_channel_message_input(input: &SendChannelMessageInput) -> String {
    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    if let Some(content) = &input.content {
        object.string("Content", content);
    }
    if let Some(message_type) = &input.r#type {
        object.string("Type", message_type.as_str());
    }
    if let Some(persistence) = &input.persistence {
        object.string("Persistence", persistence.as_str());
    }
    if let Some(metadata) = &input.metadata {
        object.string("Metadata", metadata);
    }
    if let Some(client_request_token) = &input.client_request_token {
        object.string("ClientRequestToken", client_request_token);
    }
    if let Some(push_notification) = &input.push_notification {
        let mut nested = object.start_object("PushNotification");
        serialize_push_notification_configuration(&mut nested, push_notification);
        nested.finish();
    }
    if let Some(message_attributes) = &input.message_attributes {
        let mut map = object.start_object("MessageAttributes");
        serialize_message_attributes(&mut map, message_attributes);
        map.finish();
    }
    object.finish();
    out
}

/// `UpdateChannelReadMarker` binds everything to the URI and headers,
/// so its body is an empty object.
pub(crate) fn update_channel_read_marker_input() -> String {
    let mut out = String::new();
    JsonObjectWriter::new(&mut out).finish();
    out
}

fn serialize_tag(object: &mut JsonObjectWriter<'_>, input: &Tag) {
    if let Some(key) = &input.key {
        object.string("Key", key);
    }
    if let Some(value) = &input.value {
        object.string("Value", value);
    }
}

fn serialize_push_notification_configuration(
    object: &mut JsonObjectWriter<'_>,
    input: &PushNotificationConfiguration,
) {
    if let Some(title) = &input.title {
        object.string("Title", title);
    }
    if let Some(body) = &input.body {
        object.string("Body", body);
    }
    if let Some(push_type) = &input.r#type {
        object.string("Type", push_type.as_str());
    }
}

fn serialize_message_attributes(
    object: &mut JsonObjectWriter<'_>,
    input: &HashMap<String, MessageAttributeValue>,
) {
    for (key, value) in input {
        let mut entry = object.start_object(key);
        if let Some(string_values) = &value.string_values {
            let mut array = entry.start_array("StringValues");
            for item in string_values {
                array.string(item);
            }
            array.finish();
        }
        entry.finish();
    }
}

#[cfg(test)]
mod test {
    use crate::input::{CreateChannelInput, SendChannelMessageInput};

    #[test]
    fn empty_input_serializes_as_empty_object() {
        let input = CreateChannelInput::builder().build();
        assert_eq!("{}", super::create_channel_input(&input));
        let input = SendChannelMessageInput::builder().build();
        assert_eq!("{}", super::send_channel_message_input(&input));
    }
}
