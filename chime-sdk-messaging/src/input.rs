/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation inputs. Each input marshals itself into an
//! [`http::Request`] via its `request()` method in
//! [`operation`](crate::operation).

use crate::model::{
    ChannelMessagePersistenceType, ChannelMessageType, ChannelMode, ChannelPrivacy,
    MessageAttributeValue, PushNotificationConfiguration, SortOrder, Tag,
};
use std::collections::HashMap;
use wire_types::Instant;

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct CreateChannelInput {
    pub app_instance_arn: Option<String>,
    pub name: Option<String>,
    pub mode: Option<ChannelMode>,
    pub privacy: Option<ChannelPrivacy>,
    pub metadata: Option<String>,
    pub client_request_token: Option<String>,
    pub tags: Option<Vec<Tag>>,
    /// The `AppInstanceUserArn` of the user that makes the API call.
    pub chime_bearer: Option<String>,
}

impl CreateChannelInput {
    pub fn builder() -> create_channel_input::Builder {
        create_channel_input::Builder::default()
    }
}

pub mod create_channel_input {
    use crate::model::{ChannelMode, ChannelPrivacy, Tag};

    /// A builder for [`CreateChannelInput`](super::CreateChannelInput).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        app_instance_arn: Option<String>,
        name: Option<String>,
        mode: Option<ChannelMode>,
        privacy: Option<ChannelPrivacy>,
        metadata: Option<String>,
        client_request_token: Option<String>,
        tags: Option<Vec<Tag>>,
        chime_bearer: Option<String>,
    }

    impl Builder {
        pub fn app_instance_arn(mut self, inp: impl Into<String>) -> Self {
            self.app_instance_arn = Some(inp.into());
            self
        }
        pub fn set_app_instance_arn(mut self, inp: Option<String>) -> Self {
            self.app_instance_arn = inp;
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
        pub fn client_request_token(mut self, inp: impl Into<String>) -> Self {
            self.client_request_token = Some(inp.into());
            self
        }
        pub fn set_client_request_token(mut self, inp: Option<String>) -> Self {
            self.client_request_token = inp;
            self
        }
        pub fn tags(mut self, inp: Tag) -> Self {
            self.tags.get_or_insert_with(Vec::new).push(inp);
            self
        }
        pub fn set_tags(mut self, inp: Option<Vec<Tag>>) -> Self {
            self.tags = inp;
            self
        }
        pub fn chime_bearer(mut self, inp: impl Into<String>) -> Self {
            self.chime_bearer = Some(inp.into());
            self
        }
        pub fn set_chime_bearer(mut self, inp: Option<String>) -> Self {
            self.chime_bearer = inp;
            self
        }
        pub fn build(self) -> super::CreateChannelInput {
            super::CreateChannelInput {
                app_instance_arn: self.app_instance_arn,
                name: self.name,
                mode: self.mode,
                privacy: self.privacy,
                metadata: self.metadata,
                client_request_token: self.client_request_token,
                tags: self.tags,
                chime_bearer: self.chime_bearer,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct DescribeChannelInput {
    pub channel_arn: Option<String>,
    pub chime_bearer: Option<String>,
}

impl DescribeChannelInput {
    pub fn builder() -> describe_channel_input::Builder {
        describe_channel_input::Builder::default()
    }
}

pub mod describe_channel_input {
    /// A builder for [`DescribeChannelInput`](super::DescribeChannelInput).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        channel_arn: Option<String>,
        chime_bearer: Option<String>,
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
        pub fn chime_bearer(mut self, inp: impl Into<String>) -> Self {
            self.chime_bearer = Some(inp.into());
            self
        }
        pub fn set_chime_bearer(mut self, inp: Option<String>) -> Self {
            self.chime_bearer = inp;
            self
        }
        pub fn build(self) -> super::DescribeChannelInput {
            super::DescribeChannelInput {
                channel_arn: self.channel_arn,
                chime_bearer: self.chime_bearer,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteChannelInput {
    pub channel_arn: Option<String>,
    pub chime_bearer: Option<String>,
}

impl DeleteChannelInput {
    pub fn builder() -> delete_channel_input::Builder {
        delete_channel_input::Builder::default()
    }
}

pub mod delete_channel_input {
    /// A builder for [`DeleteChannelInput`](super::DeleteChannelInput).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        channel_arn: Option<String>,
        chime_bearer: Option<String>,
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
        pub fn chime_bearer(mut self, inp: impl Into<String>) -> Self {
            self.chime_bearer = Some(inp.into());
            self
        }
        pub fn set_chime_bearer(mut self, inp: Option<String>) -> Self {
            self.chime_bearer = inp;
            self
        }
        pub fn build(self) -> super::DeleteChannelInput {
            super::DeleteChannelInput {
                channel_arn: self.channel_arn,
                chime_bearer: self.chime_bearer,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct ListChannelsInput {
    pub app_instance_arn: Option<String>,
    pub privacy: Option<ChannelPrivacy>,
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
    pub chime_bearer: Option<String>,
}

impl ListChannelsInput {
    pub fn builder() -> list_channels_input::Builder {
        list_channels_input::Builder::default()
    }
}

pub mod list_channels_input {
    use crate::model::ChannelPrivacy;

    /// A builder for [`ListChannelsInput`](super::ListChannelsInput).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        app_instance_arn: Option<String>,
        privacy: Option<ChannelPrivacy>,
        max_results: Option<i32>,
        next_token: Option<String>,
        chime_bearer: Option<String>,
    }

    impl Builder {
        pub fn app_instance_arn(mut self, inp: impl Into<String>) -> Self {
            self.app_instance_arn = Some(inp.into());
            self
        }
        pub fn set_app_instance_arn(mut self, inp: Option<String>) -> Self {
            self.app_instance_arn = inp;
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
        pub fn max_results(mut self, inp: i32) -> Self {
            self.max_results = Some(inp);
            self
        }
        pub fn set_max_results(mut self, inp: Option<i32>) -> Self {
            self.max_results = inp;
            self
        }
        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }
        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.next_token = inp;
            self
        }
        pub fn chime_bearer(mut self, inp: impl Into<String>) -> Self {
            self.chime_bearer = Some(inp.into());
            self
        }
        pub fn set_chime_bearer(mut self, inp: Option<String>) -> Self {
            self.chime_bearer = inp;
            self
        }
        pub fn build(self) -> super::ListChannelsInput {
            super::ListChannelsInput {
                app_instance_arn: self.app_instance_arn,
                privacy: self.privacy,
                max_results: self.max_results,
                next_token: self.next_token,
                chime_bearer: self.chime_bearer,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct SendChannelMessageInput {
    pub channel_arn: Option<String>,
    pub content: Option<String>,
    pub r#type: Option<ChannelMessageType>,
    pub persistence: Option<ChannelMessagePersistenceType>,
    pub metadata: Option<String>,
    pub client_request_token: Option<String>,
    pub push_notification: Option<PushNotificationConfiguration>,
    pub message_attributes: Option<HashMap<String, MessageAttributeValue>>,
    pub chime_bearer: Option<String>,
}

impl SendChannelMessageInput {
    pub fn builder() -> send_channel_message_input::Builder {
        send_channel_message_input::Builder::default()
    }
}

pub mod send_channel_message_input {
    use crate::model::{
        ChannelMessagePersistenceType, ChannelMessageType, MessageAttributeValue,
        PushNotificationConfiguration,
    };
    use std::collections::HashMap;

    /// A builder for [`SendChannelMessageInput`](super::SendChannelMessageInput).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        channel_arn: Option<String>,
        content: Option<String>,
        r#type: Option<ChannelMessageType>,
        persistence: Option<ChannelMessagePersistenceType>,
        metadata: Option<String>,
        client_request_token: Option<String>,
        push_notification: Option<PushNotificationConfiguration>,
        message_attributes: Option<HashMap<String, MessageAttributeValue>>,
        chime_bearer: Option<String>,
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
        pub fn content(mut self, inp: impl Into<String>) -> Self {
            self.content = Some(inp.into());
            self
        }
        pub fn set_content(mut self, inp: Option<String>) -> Self {
            self.content = inp;
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
        pub fn persistence(mut self, inp: ChannelMessagePersistenceType) -> Self {
            self.persistence = Some(inp);
            self
        }
        pub fn set_persistence(mut self, inp: Option<ChannelMessagePersistenceType>) -> Self {
            self.persistence = inp;
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
        pub fn client_request_token(mut self, inp: impl Into<String>) -> Self {
            self.client_request_token = Some(inp.into());
            self
        }
        pub fn set_client_request_token(mut self, inp: Option<String>) -> Self {
            self.client_request_token = inp;
            self
        }
        pub fn push_notification(mut self, inp: PushNotificationConfiguration) -> Self {
            self.push_notification = Some(inp);
            self
        }
        pub fn set_push_notification(
            mut self,
            inp: Option<PushNotificationConfiguration>,
        ) -> Self {
            self.push_notification = inp;
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
        pub fn chime_bearer(mut self, inp: impl Into<String>) -> Self {
            self.chime_bearer = Some(inp.into());
            self
        }
        pub fn set_chime_bearer(mut self, inp: Option<String>) -> Self {
            self.chime_bearer = inp;
            self
        }
        pub fn build(self) -> super::SendChannelMessageInput {
            super::SendChannelMessageInput {
                channel_arn: self.channel_arn,
                content: self.content,
                r#type: self.r#type,
                persistence: self.persistence,
                metadata: self.metadata,
                client_request_token: self.client_request_token,
                push_notification: self.push_notification,
                message_attributes: self.message_attributes,
                chime_bearer: self.chime_bearer,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct GetChannelMessageInput {
    pub channel_arn: Option<String>,
    pub message_id: Option<String>,
    pub chime_bearer: Option<String>,
}

impl GetChannelMessageInput {
    pub fn builder() -> get_channel_message_input::Builder {
        get_channel_message_input::Builder::default()
    }
}

pub mod get_channel_message_input {
    /// A builder for [`GetChannelMessageInput`](super::GetChannelMessageInput).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        channel_arn: Option<String>,
        message_id: Option<String>,
        chime_bearer: Option<String>,
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
        pub fn chime_bearer(mut self, inp: impl Into<String>) -> Self {
            self.chime_bearer = Some(inp.into());
            self
        }
        pub fn set_chime_bearer(mut self, inp: Option<String>) -> Self {
            self.chime_bearer = inp;
            self
        }
        pub fn build(self) -> super::GetChannelMessageInput {
            super::GetChannelMessageInput {
                channel_arn: self.channel_arn,
                message_id: self.message_id,
                chime_bearer: self.chime_bearer,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct ListChannelMessagesInput {
    pub channel_arn: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub not_before: Option<Instant>,
    pub not_after: Option<Instant>,
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
    pub chime_bearer: Option<String>,
}

impl ListChannelMessagesInput {
    pub fn builder() -> list_channel_messages_input::Builder {
        list_channel_messages_input::Builder::default()
    }
}

pub mod list_channel_messages_input {
    use crate::model::SortOrder;
    use wire_types::Instant;

    /// A builder for [`ListChannelMessagesInput`](super::ListChannelMessagesInput).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        channel_arn: Option<String>,
        sort_order: Option<SortOrder>,
        not_before: Option<Instant>,
        not_after: Option<Instant>,
        max_results: Option<i32>,
        next_token: Option<String>,
        chime_bearer: Option<String>,
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
        pub fn sort_order(mut self, inp: SortOrder) -> Self {
            self.sort_order = Some(inp);
            self
        }
        pub fn set_sort_order(mut self, inp: Option<SortOrder>) -> Self {
            self.sort_order = inp;
            self
        }
        pub fn not_before(mut self, inp: Instant) -> Self {
            self.not_before = Some(inp);
            self
        }
        pub fn set_not_before(mut self, inp: Option<Instant>) -> Self {
            self.not_before = inp;
            self
        }
        pub fn not_after(mut self, inp: Instant) -> Self {
            self.not_after = Some(inp);
            self
        }
        pub fn set_not_after(mut self, inp: Option<Instant>) -> Self {
            self.not_after = inp;
            self
        }
        pub fn max_results(mut self, inp: i32) -> Self {
            self.max_results = Some(inp);
            self
        }
        pub fn set_max_results(mut self, inp: Option<i32>) -> Self {
            self.max_results = inp;
            self
        }
        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }
        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.next_token = inp;
            self
        }
        pub fn chime_bearer(mut self, inp: impl Into<String>) -> Self {
            self.chime_bearer = Some(inp.into());
            self
        }
        pub fn set_chime_bearer(mut self, inp: Option<String>) -> Self {
            self.chime_bearer = inp;
            self
        }
        pub fn build(self) -> super::ListChannelMessagesInput {
            super::ListChannelMessagesInput {
                channel_arn: self.channel_arn,
                sort_order: self.sort_order,
                not_before: self.not_before,
                not_after: self.not_after,
                max_results: self.max_results,
                next_token: self.next_token,
                chime_bearer: self.chime_bearer,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateChannelReadMarkerInput {
    pub channel_arn: Option<String>,
    pub chime_bearer: Option<String>,
}

impl UpdateChannelReadMarkerInput {
    pub fn builder() -> update_channel_read_marker_input::Builder {
        update_channel_read_marker_input::Builder::default()
    }
}

pub mod update_channel_read_marker_input {
    /// A builder for [`UpdateChannelReadMarkerInput`](super::UpdateChannelReadMarkerInput).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        channel_arn: Option<String>,
        chime_bearer: Option<String>,
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
        pub fn chime_bearer(mut self, inp: impl Into<String>) -> Self {
            self.chime_bearer = Some(inp.into());
            self
        }
        pub fn set_chime_bearer(mut self, inp: Option<String>) -> Self {
            self.chime_bearer = inp;
            self
        }
        pub fn build(self) -> super::UpdateChannelReadMarkerInput {
            super::UpdateChannelReadMarkerInput {
                channel_arn: self.channel_arn,
                chime_bearer: self.chime_bearer,
            }
        }
    }
}
