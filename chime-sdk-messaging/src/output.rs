/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation outputs, unmarshalled from response bodies.

use crate::model::{Channel, ChannelMessage, ChannelMessageStatusStructure, ChannelMessageSummary, ChannelSummary};

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct CreateChannelOutput {
    pub channel_arn: Option<String>,
}

impl CreateChannelOutput {
    pub fn builder() -> create_channel_output::Builder {
        create_channel_output::Builder::default()
    }
}

pub mod create_channel_output {
    /// A builder for [`CreateChannelOutput`](super::CreateChannelOutput).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        channel_arn: Option<String>,
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
        pub fn build(self) -> super::CreateChannelOutput {
            super::CreateChannelOutput {
                channel_arn: self.channel_arn,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct DescribeChannelOutput {
    pub channel: Option<Channel>,
}

impl DescribeChannelOutput {
    pub fn builder() -> describe_channel_output::Builder {
        describe_channel_output::Builder::default()
    }
}

pub mod describe_channel_output {
    use crate::model::Channel;

    /// A builder for [`DescribeChannelOutput`](super::DescribeChannelOutput).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        channel: Option<Channel>,
    }

    impl Builder {
        pub fn channel(mut self, inp: Channel) -> Self {
            self.channel = Some(inp);
            self
        }
        pub fn set_channel(mut self, inp: Option<Channel>) -> Self {
            self.channel = inp;
            self
        }
        pub fn build(self) -> super::DescribeChannelOutput {
            super::DescribeChannelOutput {
                channel: self.channel,
            }
        }
    }
}

/// `DeleteChannel` returns no body.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteChannelOutput {}

impl DeleteChannelOutput {
    pub fn builder() -> delete_channel_output::Builder {
        delete_channel_output::Builder::default()
    }
}

pub mod delete_channel_output {
    /// A builder for [`DeleteChannelOutput`](super::DeleteChannelOutput).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {}

    impl Builder {
        pub fn build(self) -> super::DeleteChannelOutput {
            super::DeleteChannelOutput {}
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct ListChannelsOutput {
    pub channels: Option<Vec<ChannelSummary>>,
    pub next_token: Option<String>,
}

impl ListChannelsOutput {
    pub fn builder() -> list_channels_output::Builder {
        list_channels_output::Builder::default()
    }
}

pub mod list_channels_output {
    use crate::model::ChannelSummary;

    /// A builder for [`ListChannelsOutput`](super::ListChannelsOutput).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        channels: Option<Vec<ChannelSummary>>,
        next_token: Option<String>,
    }

    impl Builder {
        pub fn channels(mut self, inp: ChannelSummary) -> Self {
            self.channels.get_or_insert_with(Vec::new).push(inp);
            self
        }
        pub fn set_channels(mut self, inp: Option<Vec<ChannelSummary>>) -> Self {
            self.channels = inp;
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
        pub fn build(self) -> super::ListChannelsOutput {
            super::ListChannelsOutput {
                channels: self.channels,
                next_token: self.next_token,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct SendChannelMessageOutput {
    pub channel_arn: Option<String>,
    pub message_id: Option<String>,
    pub status: Option<ChannelMessageStatusStructure>,
}

impl SendChannelMessageOutput {
    pub fn builder() -> send_channel_message_output::Builder {
        send_channel_message_output::Builder::default()
    }
}

pub mod send_channel_message_output {
    use crate::model::ChannelMessageStatusStructure;

    /// A builder for [`SendChannelMessageOutput`](super::SendChannelMessageOutput).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        channel_arn: Option<String>,
        message_id: Option<String>,
        status: Option<ChannelMessageStatusStructure>,
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
        pub fn status(mut self, inp: ChannelMessageStatusStructure) -> Self {
            self.status = Some(inp);
            self
        }
        pub fn set_status(mut self, inp: Option<ChannelMessageStatusStructure>) -> Self {
            self.status = inp;
            self
        }
        pub fn build(self) -> super::SendChannelMessageOutput {
            super::SendChannelMessageOutput {
                channel_arn: self.channel_arn,
                message_id: self.message_id,
                status: self.status,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct GetChannelMessageOutput {
    pub channel_message: Option<ChannelMessage>,
}

impl GetChannelMessageOutput {
    pub fn builder() -> get_channel_message_output::Builder {
        get_channel_message_output::Builder::default()
    }
}

pub mod get_channel_message_output {
    use crate::model::ChannelMessage;

    /// A builder for [`GetChannelMessageOutput`](super::GetChannelMessageOutput).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        channel_message: Option<ChannelMessage>,
    }

    impl Builder {
        pub fn channel_message(mut self, inp: ChannelMessage) -> Self {
            self.channel_message = Some(inp);
            self
        }
        pub fn set_channel_message(mut self, inp: Option<ChannelMessage>) -> Self {
            self.channel_message = inp;
            self
        }
        pub fn build(self) -> super::GetChannelMessageOutput {
            super::GetChannelMessageOutput {
                channel_message: self.channel_message,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct ListChannelMessagesOutput {
    pub channel_arn: Option<String>,
    pub next_token: Option<String>,
    pub channel_messages: Option<Vec<ChannelMessageSummary>>,
}

impl ListChannelMessagesOutput {
    pub fn builder() -> list_channel_messages_output::Builder {
        list_channel_messages_output::Builder::default()
    }
}

pub mod list_channel_messages_output {
    use crate::model::ChannelMessageSummary;

    /// A builder for [`ListChannelMessagesOutput`](super::ListChannelMessagesOutput).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        channel_arn: Option<String>,
        next_token: Option<String>,
        channel_messages: Option<Vec<ChannelMessageSummary>>,
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
        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }
        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.next_token = inp;
            self
        }
        pub fn channel_messages(mut self, inp: ChannelMessageSummary) -> Self {
            self.channel_messages.get_or_insert_with(Vec::new).push(inp);
            self
        }
        pub fn set_channel_messages(mut self, inp: Option<Vec<ChannelMessageSummary>>) -> Self {
            self.channel_messages = inp;
            self
        }
        pub fn build(self) -> super::ListChannelMessagesOutput {
            super::ListChannelMessagesOutput {
                channel_arn: self.channel_arn,
                next_token: self.next_token,
                channel_messages: self.channel_messages,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateChannelReadMarkerOutput {
    pub channel_arn: Option<String>,
}

impl UpdateChannelReadMarkerOutput {
    pub fn builder() -> update_channel_read_marker_output::Builder {
        update_channel_read_marker_output::Builder::default()
    }
}

pub mod update_channel_read_marker_output {
    /// A builder for [`UpdateChannelReadMarkerOutput`](super::UpdateChannelReadMarkerOutput).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        channel_arn: Option<String>,
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
        pub fn build(self) -> super::UpdateChannelReadMarkerOutput {
            super::UpdateChannelReadMarkerOutput {
                channel_arn: self.channel_arn,
            }
        }
    }
}
