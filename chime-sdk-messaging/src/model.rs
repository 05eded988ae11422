/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Data shapes shared by the Chime SDK Messaging operations. Every
//! field is optional; absent fields are omitted from the wire form and
//! unknown wire fields are ignored on read.

use std::collections::HashMap;
use wire_types::Instant;

/// The details of a channel.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    pub name: Option<String>,
    pub channel_arn: Option<String>,
    pub mode: Option<ChannelMode>,
    pub privacy: Option<ChannelPrivacy>,
    pub metadata: Option<String>,
    pub created_by: Option<Identity>,
    pub created_timestamp: Option<Instant>,
    pub last_message_timestamp: Option<Instant>,
    pub last_updated_timestamp: Option<Instant>,
}

impl Channel {
    pub fn builder() -> channel::Builder {
        channel::Builder::default()
    }
}

pub mod channel {
    use super::{ChannelMode, ChannelPrivacy, Identity};
    use wire_types::Instant;

    /// A builder for [`Channel`](super::Channel).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        name: Option<String>,
        channel_arn: Option<String>,
        mode: Option<ChannelMode>,
        privacy: Option<ChannelPrivacy>,
        metadata: Option<String>,
        created_by: Option<Identity>,
        created_timestamp: Option<Instant>,
        last_message_timestamp: Option<Instant>,
        last_updated_timestamp: Option<Instant>,
    }

    impl Builder {
        pub fn name(mut self, inp: impl Into<String>) -> Self {
            self.name = Some(inp.into());
            self
        }
        pub fn set_name(mut self, inp: Option<String>) -> Self {
            self.name = inp;
            self
        }
        pub fn channel_arn(mut self, inp: impl Into<String>) -> Self {
            self.channel_arn = Some(inp.into());
            self
        }
        pub fn set_channel_arn(mut self, inp: Option<String>) -> Self {
            self.channel_arn = inp;
            self
        }
        pub fn mode(mut self, inp: ChannelMode) -> Self {
            self.mode = Some(inp);
            self
        }
        pub fn set_mode(mut self, inp: Option<ChannelMode>) -> Self {
            self.mode = inp;
            self
        }
        pub fn privacy(mut self, inp: ChannelPrivacy) -> Self {
            self.privacy = Some(inp);
            self
        }
        pub fn set_privacy(mut self, inp: Option<ChannelPrivacy>) -> Self {
            self.privacy = inp;
            self
        }
        pub fn metadata(mut self, inp: impl Into<String>) -> Self {
            self.metadata = Some(inp.into());
            self
        }
        pub fn set_metadata(mut self, inp: Option<String>) -> Self {
            self.metadata = inp;
            self
        }
        pub fn created_by(mut self, inp: Identity) -> Self {
            self.created_by = Some(inp);
            self
        }
        pub fn set_created_by(mut self, inp: Option<Identity>) -> Self {
            self.created_by = inp;
            self
        }
        pub fn created_timestamp(mut self, inp: Instant) -> Self {
            self.created_timestamp = Some(inp);
            self
        }
        pub fn set_created_timestamp(mut self, inp: Option<Instant>) -> Self {
            self.created_timestamp = inp;
            self
        }
        pub fn last_message_timestamp(mut self, inp: Instant) -> Self {
            self.last_message_timestamp = Some(inp);
            self
        }
        pub fn set_last_message_timestamp(mut self, inp: Option<Instant>) -> Self {
            self.last_message_timestamp = inp;
            self
        }
        pub fn last_updated_timestamp(mut self, inp: Instant) -> Self {
            self.last_updated_timestamp = Some(inp);
            self
        }
        pub fn set_last_updated_timestamp(mut self, inp: Option<Instant>) -> Self {
            self.last_updated_timestamp = inp;
            self
        }
        pub fn build(self) -> super::Channel {
            super::Channel {
                name: self.name,
                channel_arn: self.channel_arn,
                mode: self.mode,
                privacy: self.privacy,
                metadata: self.metadata,
                created_by: self.created_by,
                created_timestamp: self.created_timestamp,
                last_message_timestamp: self.last_message_timestamp,
                last_updated_timestamp: self.last_updated_timestamp,
            }
        }
    }
}

/// Summary of the details of a channel, as returned by `ListChannels`.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSummary {
    pub name: Option<String>,
    pub channel_arn: Option<String>,
    pub mode: Option<ChannelMode>,
    pub privacy: Option<ChannelPrivacy>,
    pub metadata: Option<String>,
    pub last_message_timestamp: Option<Instant>,
}

impl ChannelSummary {
    pub fn builder() -> channel_summary::Builder {
        channel_summary::Builder::default()
    }
}

pub mod channel_summary {
    use super::{ChannelMode, ChannelPrivacy};
    use wire_types::Instant;

    /// A builder for [`ChannelSummary`](super::ChannelSummary).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        name: Option<String>,
        channel_arn: Option<String>,
        mode: Option<ChannelMode>,
        privacy: Option<ChannelPrivacy>,
        metadata: Option<String>,
        last_message_timestamp: Option<Instant>,
    }

    impl Builder {
        pub fn name(mut self, inp: impl Into<String>) -> Self {
            self.name = Some(inp.into());
            self
        }
        pub fn set_name(mut self, inp: Option<String>) -> Self {
            self.name = inp;
            self
        }
        pub fn channel_arn(mut self, inp: impl Into<String>) -> Self {
            self.channel_arn = Some(inp.into());
            self
        }
        pub fn set_channel_arn(mut self, inp: Option<String>) -> Self {
            self.channel_arn = inp;
            self
        }
        pub fn mode(mut self, inp: ChannelMode) -> Self {
            self.mode = Some(inp);
            self
        }
        pub fn set_mode(mut self, inp: Option<ChannelMode>) -> Self {
            self.mode = inp;
            self
        }
        pub fn privacy(mut self, inp: ChannelPrivacy) -> Self {
            self.privacy = Some(inp);
            self
        }
        pub fn set_privacy(mut self, inp: Option<ChannelPrivacy>) -> Self {
            self.privacy = inp;
            self
        }
        pub fn metadata(mut self, inp: impl Into<String>) -> Self {
            self.metadata = Some(inp.into());
            self
        }
        pub fn set_metadata(mut self, inp: Option<String>) -> Self {
            self.metadata = inp;
            self
        }
        pub fn last_message_timestamp(mut self, inp: Instant) -> Self {
            self.last_message_timestamp = Some(inp);
            self
        }
        pub fn set_last_message_timestamp(mut self, inp: Option<Instant>) -> Self {
            self.last_message_timestamp = inp;
            self
        }
        pub fn build(self) -> super::ChannelSummary {
            super::ChannelSummary {
                name: self.name,
                channel_arn: self.channel_arn,
                mode: self.mode,
                privacy: self.privacy,
                metadata: self.metadata,
                last_message_timestamp: self.last_message_timestamp,
            }
        }
    }
}

/// The details of a message in a channel.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelMessage {
    pub channel_arn: Option<String>,
    pub message_id: Option<String>,
    pub content: Option<String>,
    pub metadata: Option<String>,
    pub r#type: Option<ChannelMessageType>,
    pub created_timestamp: Option<Instant>,
    pub last_edited_timestamp: Option<Instant>,
    pub last_updated_timestamp: Option<Instant>,
    pub sender: Option<Identity>,
    pub redacted: Option<bool>,
    pub persistence: Option<ChannelMessagePersistenceType>,
    pub status: Option<ChannelMessageStatusStructure>,
    pub message_attributes: Option<HashMap<String, MessageAttributeValue>>,
}

impl ChannelMessage {
    pub fn builder() -> channel_message::Builder {
        channel_message::Builder::default()
    }
}

pub mod channel_message {
    use super::{
        ChannelMessagePersistenceType, ChannelMessageStatusStructure, ChannelMessageType,
        Identity, MessageAttributeValue,
    };
    use std::collections::HashMap;
    use wire_types::Instant;

    /// A builder for [`ChannelMessage`](super::ChannelMessage).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        channel_arn: Option<String>,
        message_id: Option<String>,
        content: Option<String>,
        metadata: Option<String>,
        r#type: Option<ChannelMessageType>,
        created_timestamp: Option<Instant>,
        last_edited_timestamp: Option<Instant>,
        last_updated_timestamp: Option<Instant>,
        sender: Option<Identity>,
        redacted: Option<bool>,
        persistence: Option<ChannelMessagePersistenceType>,
        status: Option<ChannelMessageStatusStructure>,
        message_attributes: Option<HashMap<String, MessageAttributeValue>>,
    }

    impl Builder {
        pub fn channel_arn(mut self, inp: impl Into<String>) -> Self {
            self.channel_arn = Some(inp.into());
            self
        }
        pub fn set_channel_arn(mut self, inp: Option<String>) -> Self {
            self.channel_arn = inp;
            self
        }
        pub fn message_id(mut self, inp: impl Into<String>) -> Self {
            self.message_id = Some(inp.into());
            self
        }
        pub fn set_message_id(mut self, inp: Option<String>) -> Self {
            self.message_id = inp;
            self
        }
        pub fn content(mut self, inp: impl Into<String>) -> Self {
            self.content = Some(inp.into());
            self
        }
        pub fn set_content(mut self, inp: Option<String>) -> Self {
            self.content = inp;
            self
        }
        pub fn metadata(mut self, inp: impl Into<String>) -> Self {
            self.metadata = Some(inp.into());
            self
        }
        pub fn set_metadata(mut self, inp: Option<String>) -> Self {
            self.metadata = inp;
            self
        }
        pub fn r#type(mut self, inp: ChannelMessageType) -> Self {
            self.r#type = Some(inp);
            self
        }
        pub fn set_type(mut self, inp: Option<ChannelMessageType>) -> Self {
            self.r#type = inp;
            self
        }
        pub fn created_timestamp(mut self, inp: Instant) -> Self {
            self.created_timestamp = Some(inp);
            self
        }
        pub fn set_created_timestamp(mut self, inp: Option<Instant>) -> Self {
            self.created_timestamp = inp;
            self
        }
        pub fn set_last_edited_timestamp(mut self, inp: Option<Instant>) -> Self {
            self.last_edited_timestamp = inp;
            self
        }
        pub fn set_last_updated_timestamp(mut self, inp: Option<Instant>) -> Self {
            self.last_updated_timestamp = inp;
            self
        }
        pub fn sender(mut self, inp: Identity) -> Self {
            self.sender = Some(inp);
            self
        }
        pub fn set_sender(mut self, inp: Option<Identity>) -> Self {
            self.sender = inp;
            self
        }
        pub fn redacted(mut self, inp: bool) -> Self {
            self.redacted = Some(inp);
            self
        }
        pub fn set_redacted(mut self, inp: Option<bool>) -> Self {
            self.redacted = inp;
            self
        }
        pub fn persistence(mut self, inp: ChannelMessagePersistenceType) -> Self {
            self.persistence = Some(inp);
            self
        }
        pub fn set_persistence(mut self, inp: Option<ChannelMessagePersistenceType>) -> Self {
            self.persistence = inp;
            self
        }
        pub fn status(mut self, inp: ChannelMessageStatusStructure) -> Self {
            self.status = Some(inp);
            self
        }
        pub fn set_status(mut self, inp: Option<ChannelMessageStatusStructure>) -> Self {
            self.status = inp;
            self
        }
        pub fn message_attributes(
            mut self,
            key: impl Into<String>,
            value: MessageAttributeValue,
        ) -> Self {
            self.message_attributes
                .get_or_insert_with(HashMap::new)
                .insert(key.into(), value);
            self
        }
        pub fn set_message_attributes(
            mut self,
            inp: Option<HashMap<String, MessageAttributeValue>>,
        ) -> Self {
            self.message_attributes = inp;
            self
        }
        pub fn build(self) -> super::ChannelMessage {
            super::ChannelMessage {
                channel_arn: self.channel_arn,
                message_id: self.message_id,
                content: self.content,
                metadata: self.metadata,
                r#type: self.r#type,
                created_timestamp: self.created_timestamp,
                last_edited_timestamp: self.last_edited_timestamp,
                last_updated_timestamp: self.last_updated_timestamp,
                sender: self.sender,
                redacted: self.redacted,
                persistence: self.persistence,
                status: self.status,
                message_attributes: self.message_attributes,
            }
        }
    }
}

/// Summary of the messages in a channel.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelMessageSummary {
    pub message_id: Option<String>,
    pub content: Option<String>,
    pub metadata: Option<String>,
    pub r#type: Option<ChannelMessageType>,
    pub created_timestamp: Option<Instant>,
    pub last_updated_timestamp: Option<Instant>,
    pub last_edited_timestamp: Option<Instant>,
    pub sender: Option<Identity>,
    pub redacted: Option<bool>,
    pub status: Option<ChannelMessageStatusStructure>,
    pub message_attributes: Option<HashMap<String, MessageAttributeValue>>,
}

impl ChannelMessageSummary {
    pub fn builder() -> channel_message_summary::Builder {
        channel_message_summary::Builder::default()
    }
}

pub mod channel_message_summary {
    use super::{
        ChannelMessageStatusStructure, ChannelMessageType, Identity, MessageAttributeValue,
    };
    use std::collections::HashMap;
    use wire_types::Instant;

    /// A builder for [`ChannelMessageSummary`](super::ChannelMessageSummary).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        message_id: Option<String>,
        content: Option<String>,
        metadata: Option<String>,
        r#type: Option<ChannelMessageType>,
        created_timestamp: Option<Instant>,
        last_updated_timestamp: Option<Instant>,
        last_edited_timestamp: Option<Instant>,
        sender: Option<Identity>,
        redacted: Option<bool>,
        status: Option<ChannelMessageStatusStructure>,
        message_attributes: Option<HashMap<String, MessageAttributeValue>>,
    }

    impl Builder {
        pub fn message_id(mut self, inp: impl Into<String>) -> Self {
            self.message_id = Some(inp.into());
            self
        }
        pub fn set_message_id(mut self, inp: Option<String>) -> Self {
            self.message_id = inp;
            self
        }
        pub fn content(mut self, inp: impl Into<String>) -> Self {
            self.content = Some(inp.into());
            self
        }
        pub fn set_content(mut self, inp: Option<String>) -> Self {
            self.content = inp;
            self
        }
        pub fn set_metadata(mut self, inp: Option<String>) -> Self {
            self.metadata = inp;
            self
        }
        pub fn set_type(mut self, inp: Option<ChannelMessageType>) -> Self {
            self.r#type = inp;
            self
        }
        pub fn set_created_timestamp(mut self, inp: Option<Instant>) -> Self {
            self.created_timestamp = inp;
            self
        }
        pub fn set_last_updated_timestamp(mut self, inp: Option<Instant>) -> Self {
            self.last_updated_timestamp = inp;
            self
        }
        pub fn set_last_edited_timestamp(mut self, inp: Option<Instant>) -> Self {
            self.last_edited_timestamp = inp;
            self
        }
        pub fn sender(mut self, inp: Identity) -> Self {
            self.sender = Some(inp);
            self
        }
        pub fn set_sender(mut self, inp: Option<Identity>) -> Self {
            self.sender = inp;
            self
        }
        pub fn set_redacted(mut self, inp: Option<bool>) -> Self {
            self.redacted = inp;
            self
        }
        pub fn set_status(mut self, inp: Option<ChannelMessageStatusStructure>) -> Self {
            self.status = inp;
            self
        }
        pub fn set_message_attributes(
            mut self,
            inp: Option<HashMap<String, MessageAttributeValue>>,
        ) -> Self {
            self.message_attributes = inp;
            self
        }
        pub fn build(self) -> super::ChannelMessageSummary {
            super::ChannelMessageSummary {
                message_id: self.message_id,
                content: self.content,
                metadata: self.metadata,
                r#type: self.r#type,
                created_timestamp: self.created_timestamp,
                last_updated_timestamp: self.last_updated_timestamp,
                last_edited_timestamp: self.last_edited_timestamp,
                sender: self.sender,
                redacted: self.redacted,
                status: self.status,
                message_attributes: self.message_attributes,
            }
        }
    }
}

/// The status of a channel message: the value and, for failures, the
/// reason the message was not delivered.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelMessageStatusStructure {
    pub value: Option<ChannelMessageStatus>,
    pub detail: Option<String>,
}

impl ChannelMessageStatusStructure {
    pub fn builder() -> channel_message_status_structure::Builder {
        channel_message_status_structure::Builder::default()
    }
}

pub mod channel_message_status_structure {
    use super::ChannelMessageStatus;

    /// A builder for [`ChannelMessageStatusStructure`](super::ChannelMessageStatusStructure).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        value: Option<ChannelMessageStatus>,
        detail: Option<String>,
    }

    impl Builder {
        pub fn value(mut self, inp: ChannelMessageStatus) -> Self {
            self.value = Some(inp);
            self
        }
        pub fn set_value(mut self, inp: Option<ChannelMessageStatus>) -> Self {
            self.value = inp;
            self
        }
        pub fn detail(mut self, inp: impl Into<String>) -> Self {
            self.detail = Some(inp.into());
            self
        }
        pub fn set_detail(mut self, inp: Option<String>) -> Self {
            self.detail = inp;
            self
        }
        pub fn build(self) -> super::ChannelMessageStatusStructure {
            super::ChannelMessageStatusStructure {
                value: self.value,
                detail: self.detail,
            }
        }
    }
}

/// The details of a user or bot.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub arn: Option<String>,
    pub name: Option<String>,
}

impl Identity {
    pub fn builder() -> identity::Builder {
        identity::Builder::default()
    }
}

pub mod identity {
    /// A builder for [`Identity`](super::Identity).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        arn: Option<String>,
        name: Option<String>,
    }

    impl Builder {
        pub fn arn(mut self, inp: impl Into<String>) -> Self {
            self.arn = Some(inp.into());
            self
        }
        pub fn set_arn(mut self, inp: Option<String>) -> Self {
            self.arn = inp;
            self
        }
        pub fn name(mut self, inp: impl Into<String>) -> Self {
            self.name = Some(inp.into());
            self
        }
        pub fn set_name(mut self, inp: Option<String>) -> Self {
            self.name = inp;
            self
        }
        pub fn build(self) -> super::Identity {
            super::Identity {
                arn: self.arn,
                name: self.name,
            }
        }
    }
}

/// The value of a message attribute.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct MessageAttributeValue {
    pub string_values: Option<Vec<String>>,
}

impl MessageAttributeValue {
    pub fn builder() -> message_attribute_value::Builder {
        message_attribute_value::Builder::default()
    }
}

pub mod message_attribute_value {
    /// A builder for [`MessageAttributeValue`](super::MessageAttributeValue).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        string_values: Option<Vec<String>>,
    }

    impl Builder {
        pub fn string_values(mut self, inp: impl Into<String>) -> Self {
            self.string_values
                .get_or_insert_with(Vec::new)
                .push(inp.into());
            self
        }
        pub fn set_string_values(mut self, inp: Option<Vec<String>>) -> Self {
            self.string_values = inp;
            self
        }
        pub fn build(self) -> super::MessageAttributeValue {
            super::MessageAttributeValue {
                string_values: self.string_values,
            }
        }
    }
}

/// The push notification configuration of a message.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct PushNotificationConfiguration {
    pub title: Option<String>,
    pub body: Option<String>,
    pub r#type: Option<PushNotificationType>,
}

impl PushNotificationConfiguration {
    pub fn builder() -> push_notification_configuration::Builder {
        push_notification_configuration::Builder::default()
    }
}

pub mod push_notification_configuration {
    use super::PushNotificationType;

    /// A builder for [`PushNotificationConfiguration`](super::PushNotificationConfiguration).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        title: Option<String>,
        body: Option<String>,
        r#type: Option<PushNotificationType>,
    }

    impl Builder {
        pub fn title(mut self, inp: impl Into<String>) -> Self {
            self.title = Some(inp.into());
            self
        }
        pub fn set_title(mut self, inp: Option<String>) -> Self {
            self.title = inp;
            self
        }
        pub fn body(mut self, inp: impl Into<String>) -> Self {
            self.body = Some(inp.into());
            self
        }
        pub fn set_body(mut self, inp: Option<String>) -> Self {
            self.body = inp;
            self
        }
        pub fn r#type(mut self, inp: PushNotificationType) -> Self {
            self.r#type = Some(inp);
            self
        }
        pub fn set_type(mut self, inp: Option<PushNotificationType>) -> Self {
            self.r#type = inp;
            self
        }
        pub fn build(self) -> super::PushNotificationConfiguration {
            super::PushNotificationConfiguration {
                title: self.title,
                body: self.body,
                r#type: self.r#type,
            }
        }
    }
}

/// A tag object containing a key-value pair.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl Tag {
    pub fn builder() -> tag::Builder {
        tag::Builder::default()
    }
}

pub mod tag {
    /// A builder for [`Tag`](super::Tag).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        key: Option<String>,
        value: Option<String>,
    }

    impl Builder {
        pub fn key(mut self, inp: impl Into<String>) -> Self {
            self.key = Some(inp.into());
            self
        }
        pub fn set_key(mut self, inp: Option<String>) -> Self {
            self.key = inp;
            self
        }
        pub fn value(mut self, inp: impl Into<String>) -> Self {
            self.value = Some(inp.into());
            self
        }
        pub fn set_value(mut self, inp: Option<String>) -> Self {
            self.value = inp;
            self
        }
        pub fn build(self) -> super::Tag {
            super::Tag {
                key: self.key,
                value: self.value,
            }
        }
    }
}

macro_rules! string_enum {
    ($(#[$docs:meta])* $name:ident, $(($variant:ident, $value:literal)),+) => {
        $(#[$docs])*
        #[non_exhaustive]
        #[derive(Debug, Clone, Eq, PartialEq, Hash)]
        pub enum $name {
            $($variant,)+
            /// Unknown contains new variants that have been added since this code was generated.
            Unknown(String),
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $($value => $name::$variant,)+
                    other => $name::Unknown(other.to_owned()),
                }
            }
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $value,)+
                    $name::Unknown(s) => s.as_str(),
                }
            }
        }
    };
}

string_enum!(ChannelMode, (Restricted, "RESTRICTED"), (Unrestricted, "UNRESTRICTED"));
string_enum!(ChannelPrivacy, (Private, "PRIVATE"), (Public, "PUBLIC"));
string_enum!(ChannelMessageType, (Standard, "STANDARD"), (Control, "CONTROL"));
string_enum!(
    ChannelMessagePersistenceType,
    (Persistent, "PERSISTENT"),
    (NonPersistent, "NON_PERSISTENT")
);
string_enum!(SortOrder, (Ascending, "ASCENDING"), (Descending, "DESCENDING"));
string_enum!(
    ChannelMessageStatus,
    (Sent, "SENT"),
    (Pending, "PENDING"),
    (Failed, "FAILED"),
    (Denied, "DENIED")
);
string_enum!(PushNotificationType, (Default, "DEFAULT"), (Voip, "VOIP"));
string_enum!(
    /// The service-assigned error code carried inside a modeled fault.
    ErrorCode,
    (BadRequest, "BadRequest"),
    (Conflict, "Conflict"),
    (Forbidden, "Forbidden"),
    (NotFound, "NotFound"),
    (PreconditionFailed, "PreconditionFailed"),
    (ResourceLimitExceeded, "ResourceLimitExceeded"),
    (ServiceFailure, "ServiceFailure"),
    (AccessDenied, "AccessDenied"),
    (ServiceUnavailable, "ServiceUnavailable"),
    (Throttled, "Throttled"),
    (Throttling, "Throttling"),
    (Unauthorized, "Unauthorized"),
    (Unprocessable, "Unprocessable")
);

#[cfg(test)]
mod test {
    use super::{ChannelMode, ErrorCode};

    #[test]
    fn enums_round_trip_known_values() {
        assert_eq!(ChannelMode::from("RESTRICTED"), ChannelMode::Restricted);
        assert_eq!(ChannelMode::Restricted.as_str(), "RESTRICTED");
        assert_eq!(ErrorCode::from("Throttled").as_str(), "Throttled");
    }

    #[test]
    fn enums_preserve_unknown_values() {
        let unknown = ChannelMode::from("SOMETHING_NEW");
        assert_eq!(unknown, ChannelMode::Unknown("SOMETHING_NEW".into()));
        assert_eq!(unknown.as_str(), "SOMETHING_NEW");
    }
}
