/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation inputs. Each input marshals itself into an
//! [`http::Request`] via its `request()` method in
//! [`operation`](crate::operation).

use crate::model::{Destination, IdentityType, Message, MessageTag, RawMessage, ReceiptRule};

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct SendEmailInput {
    pub source: Option<String>,
    pub destination: Option<Destination>,
    pub message: Option<Message>,
    pub reply_to_addresses: Option<Vec<String>>,
    pub return_path: Option<String>,
    pub tags: Option<Vec<MessageTag>>,
    pub configuration_set_name: Option<String>,
}

impl SendEmailInput {
    pub fn builder() -> send_email_input::Builder {
        send_email_input::Builder::default()
    }
}

pub mod send_email_input {
    use crate::model::{Destination, Message, MessageTag};

    /// A builder for [`SendEmailInput`](super::SendEmailInput).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        source: Option<String>,
        destination: Option<Destination>,
        message: Option<Message>,
        reply_to_addresses: Option<Vec<String>>,
        return_path: Option<String>,
        tags: Option<Vec<MessageTag>>,
        configuration_set_name: Option<String>,
    }

    impl Builder {
        pub fn source(mut self, inp: impl Into<String>) -> Self {
            self.source = Some(inp.into());
            self
        }
        pub fn set_source(mut self, inp: Option<String>) -> Self {
            self.source = inp;
            self
        }
        pub fn destination(mut self, inp: Destination) -> Self {
            self.destination = Some(inp);
            self
        }
        pub fn set_destination(mut self, inp: Option<Destination>) -> Self {
            self.destination = inp;
            self
        }
        pub fn message(mut self, inp: Message) -> Self {
            self.message = Some(inp);
            self
        }
        pub fn set_message(mut self, inp: Option<Message>) -> Self {
            self.message = inp;
            self
        }
        pub fn reply_to_addresses(mut self, inp: impl Into<String>) -> Self {
            self.reply_to_addresses
                .get_or_insert_with(Vec::new)
                .push(inp.into());
            self
        }
        pub fn set_reply_to_addresses(mut self, inp: Option<Vec<String>>) -> Self {
            self.reply_to_addresses = inp;
            self
        }
        pub fn return_path(mut self, inp: impl Into<String>) -> Self {
            self.return_path = Some(inp.into());
            self
        }
        pub fn set_return_path(mut self, inp: Option<String>) -> Self {
            self.return_path = inp;
            self
        }
        pub fn tags(mut self, inp: MessageTag) -> Self {
            self.tags.get_or_insert_with(Vec::new).push(inp);
            self
        }
        pub fn set_tags(mut self, inp: Option<Vec<MessageTag>>) -> Self {
            self.tags = inp;
            self
        }
        pub fn configuration_set_name(mut self, inp: impl Into<String>) -> Self {
            self.configuration_set_name = Some(inp.into());
            self
        }
        pub fn set_configuration_set_name(mut self, inp: Option<String>) -> Self {
            self.configuration_set_name = inp;
            self
        }
        pub fn build(self) -> super::SendEmailInput {
            super::SendEmailInput {
                source: self.source,
                destination: self.destination,
                message: self.message,
                reply_to_addresses: self.reply_to_addresses,
                return_path: self.return_path,
                tags: self.tags,
                configuration_set_name: self.configuration_set_name,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct SendRawEmailInput {
    pub source: Option<String>,
    pub destinations: Option<Vec<String>>,
    pub raw_message: Option<RawMessage>,
}

impl SendRawEmailInput {
    pub fn builder() -> send_raw_email_input::Builder {
        send_raw_email_input::Builder::default()
    }
}

pub mod send_raw_email_input {
    use crate::model::RawMessage;

    /// A builder for [`SendRawEmailInput`](super::SendRawEmailInput).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        source: Option<String>,
        destinations: Option<Vec<String>>,
        raw_message: Option<RawMessage>,
    }

    impl Builder {
        pub fn source(mut self, inp: impl Into<String>) -> Self {
            self.source = Some(inp.into());
            self
        }
        pub fn set_source(mut self, inp: Option<String>) -> Self {
            self.source = inp;
            self
        }
        pub fn destinations(mut self, inp: impl Into<String>) -> Self {
            self.destinations.get_or_insert_with(Vec::new).push(inp.into());
            self
        }
        pub fn set_destinations(mut self, inp: Option<Vec<String>>) -> Self {
            self.destinations = inp;
            self
        }
        pub fn raw_message(mut self, inp: RawMessage) -> Self {
            self.raw_message = Some(inp);
            self
        }
        pub fn set_raw_message(mut self, inp: Option<RawMessage>) -> Self {
            self.raw_message = inp;
            self
        }
        pub fn build(self) -> super::SendRawEmailInput {
            super::SendRawEmailInput {
                source: self.source,
                destinations: self.destinations,
                raw_message: self.raw_message,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct VerifyEmailIdentityInput {
    pub email_address: Option<String>,
}

impl VerifyEmailIdentityInput {
    pub fn builder() -> verify_email_identity_input::Builder {
        verify_email_identity_input::Builder::default()
    }
}

pub mod verify_email_identity_input {
    /// A builder for [`VerifyEmailIdentityInput`](super::VerifyEmailIdentityInput).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        email_address: Option<String>,
    }

    impl Builder {
        pub fn email_address(mut self, inp: impl Into<String>) -> Self {
            self.email_address = Some(inp.into());
            self
        }
        pub fn set_email_address(mut self, inp: Option<String>) -> Self {
            self.email_address = inp;
            self
        }
        pub fn build(self) -> super::VerifyEmailIdentityInput {
            super::VerifyEmailIdentityInput {
                email_address: self.email_address,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteIdentityInput {
    pub identity: Option<String>,
}

impl DeleteIdentityInput {
    pub fn builder() -> delete_identity_input::Builder {
        delete_identity_input::Builder::default()
    }
}

pub mod delete_identity_input {
    /// A builder for [`DeleteIdentityInput`](super::DeleteIdentityInput).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        identity: Option<String>,
    }

    impl Builder {
        pub fn identity(mut self, inp: impl Into<String>) -> Self {
            self.identity = Some(inp.into());
            self
        }
        pub fn set_identity(mut self, inp: Option<String>) -> Self {
            self.identity = inp;
            self
        }
        pub fn build(self) -> super::DeleteIdentityInput {
            super::DeleteIdentityInput {
                identity: self.identity,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct ListIdentitiesInput {
    pub identity_type: Option<IdentityType>,
    pub next_token: Option<String>,
    pub max_items: Option<i32>,
}

impl ListIdentitiesInput {
    pub fn builder() -> list_identities_input::Builder {
        list_identities_input::Builder::default()
    }
}

pub mod list_identities_input {
    use crate::model::IdentityType;

    /// A builder for [`ListIdentitiesInput`](super::ListIdentitiesInput).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        identity_type: Option<IdentityType>,
        next_token: Option<String>,
        max_items: Option<i32>,
    }

    impl Builder {
        pub fn identity_type(mut self, inp: IdentityType) -> Self {
            self.identity_type = Some(inp);
            self
        }
        pub fn set_identity_type(mut self, inp: Option<IdentityType>) -> Self {
            self.identity_type = inp;
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
        pub fn max_items(mut self, inp: i32) -> Self {
            self.max_items = Some(inp);
            self
        }
        pub fn set_max_items(mut self, inp: Option<i32>) -> Self {
            self.max_items = inp;
            self
        }
        pub fn build(self) -> super::ListIdentitiesInput {
            super::ListIdentitiesInput {
                identity_type: self.identity_type,
                next_token: self.next_token,
                max_items: self.max_items,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct GetIdentityVerificationAttributesInput {
    pub identities: Option<Vec<String>>,
}

impl GetIdentityVerificationAttributesInput {
    pub fn builder() -> get_identity_verification_attributes_input::Builder {
        get_identity_verification_attributes_input::Builder::default()
    }
}

pub mod get_identity_verification_attributes_input {
    /// A builder for
    /// [`GetIdentityVerificationAttributesInput`](super::GetIdentityVerificationAttributesInput).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        identities: Option<Vec<String>>,
    }

    impl Builder {
        pub fn identities(mut self, inp: impl Into<String>) -> Self {
            self.identities.get_or_insert_with(Vec::new).push(inp.into());
            self
        }
        pub fn set_identities(mut self, inp: Option<Vec<String>>) -> Self {
            self.identities = inp;
            self
        }
        pub fn build(self) -> super::GetIdentityVerificationAttributesInput {
            super::GetIdentityVerificationAttributesInput {
                identities: self.identities,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct DescribeReceiptRuleInput {
    pub rule_set_name: Option<String>,
    pub rule_name: Option<String>,
}

impl DescribeReceiptRuleInput {
    pub fn builder() -> describe_receipt_rule_input::Builder {
        describe_receipt_rule_input::Builder::default()
    }
}

pub mod describe_receipt_rule_input {
    /// A builder for [`DescribeReceiptRuleInput`](super::DescribeReceiptRuleInput).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        rule_set_name: Option<String>,
        rule_name: Option<String>,
    }

    impl Builder {
        pub fn rule_set_name(mut self, inp: impl Into<String>) -> Self {
            self.rule_set_name = Some(inp.into());
            self
        }
        pub fn set_rule_set_name(mut self, inp: Option<String>) -> Self {
            self.rule_set_name = inp;
            self
        }
        pub fn rule_name(mut self, inp: impl Into<String>) -> Self {
            self.rule_name = Some(inp.into());
            self
        }
        pub fn set_rule_name(mut self, inp: Option<String>) -> Self {
            self.rule_name = inp;
            self
        }
        pub fn build(self) -> super::DescribeReceiptRuleInput {
            super::DescribeReceiptRuleInput {
                rule_set_name: self.rule_set_name,
                rule_name: self.rule_name,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct CreateReceiptRuleInput {
    pub rule_set_name: Option<String>,
    /// The name of the existing rule to place the new rule after.
    pub after: Option<String>,
    pub rule: Option<ReceiptRule>,
}

impl CreateReceiptRuleInput {
    pub fn builder() -> create_receipt_rule_input::Builder {
        create_receipt_rule_input::Builder::default()
    }
}

pub mod create_receipt_rule_input {
    use crate::model::ReceiptRule;

    /// A builder for [`CreateReceiptRuleInput`](super::CreateReceiptRuleInput).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        rule_set_name: Option<String>,
        after: Option<String>,
        rule: Option<ReceiptRule>,
    }

    impl Builder {
        pub fn rule_set_name(mut self, inp: impl Into<String>) -> Self {
            self.rule_set_name = Some(inp.into());
            self
        }
        pub fn set_rule_set_name(mut self, inp: Option<String>) -> Self {
            self.rule_set_name = inp;
            self
        }
        pub fn after(mut self, inp: impl Into<String>) -> Self {
            self.after = Some(inp.into());
            self
        }
        pub fn set_after(mut self, inp: Option<String>) -> Self {
            self.after = inp;
            self
        }
        pub fn rule(mut self, inp: ReceiptRule) -> Self {
            self.rule = Some(inp);
            self
        }
        pub fn set_rule(mut self, inp: Option<ReceiptRule>) -> Self {
            self.rule = inp;
            self
        }
        pub fn build(self) -> super::CreateReceiptRuleInput {
            super::CreateReceiptRuleInput {
                rule_set_name: self.rule_set_name,
                after: self.after,
                rule: self.rule,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct SetReceiptRulePositionInput {
    pub rule_set_name: Option<String>,
    pub rule_name: Option<String>,
    /// The name of the existing rule to place the moved rule after.
    pub after: Option<String>,
}

impl SetReceiptRulePositionInput {
    pub fn builder() -> set_receipt_rule_position_input::Builder {
        set_receipt_rule_position_input::Builder::default()
    }
}

pub mod set_receipt_rule_position_input {
    /// A builder for [`SetReceiptRulePositionInput`](super::SetReceiptRulePositionInput).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        rule_set_name: Option<String>,
        rule_name: Option<String>,
        after: Option<String>,
    }

    impl Builder {
        pub fn rule_set_name(mut self, inp: impl Into<String>) -> Self {
            self.rule_set_name = Some(inp.into());
            self
        }
        pub fn set_rule_set_name(mut self, inp: Option<String>) -> Self {
            self.rule_set_name = inp;
            self
        }
        pub fn rule_name(mut self, inp: impl Into<String>) -> Self {
            self.rule_name = Some(inp.into());
            self
        }
        pub fn set_rule_name(mut self, inp: Option<String>) -> Self {
            self.rule_name = inp;
            self
        }
        pub fn after(mut self, inp: impl Into<String>) -> Self {
            self.after = Some(inp.into());
            self
        }
        pub fn set_after(mut self, inp: Option<String>) -> Self {
            self.after = inp;
            self
        }
        pub fn build(self) -> super::SetReceiptRulePositionInput {
            super::SetReceiptRulePositionInput {
                rule_set_name: self.rule_set_name,
                rule_name: self.rule_name,
                after: self.after,
            }
        }
    }
}
