/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation outputs, unmarshalled from XML response bodies.

use crate::model::{IdentityVerificationAttributes, ReceiptRule};
use std::collections::HashMap;

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct SendEmailOutput {
    pub message_id: Option<String>,
}

impl SendEmailOutput {
    pub fn builder() -> send_email_output::Builder {
        send_email_output::Builder::default()
    }
}

pub mod send_email_output {
    /// A builder for [`SendEmailOutput`](super::SendEmailOutput).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        message_id: Option<String>,
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
        pub fn build(self) -> super::SendEmailOutput {
            super::SendEmailOutput {
                message_id: self.message_id,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct SendRawEmailOutput {
    pub message_id: Option<String>,
}

impl SendRawEmailOutput {
    pub fn builder() -> send_raw_email_output::Builder {
        send_raw_email_output::Builder::default()
    }
}

pub mod send_raw_email_output {
    /// A builder for [`SendRawEmailOutput`](super::SendRawEmailOutput).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        message_id: Option<String>,
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
        pub fn build(self) -> super::SendRawEmailOutput {
            super::SendRawEmailOutput {
                message_id: self.message_id,
            }
        }
    }
}

/// `VerifyEmailIdentity` returns an empty result.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct VerifyEmailIdentityOutput {}

impl VerifyEmailIdentityOutput {
    pub fn builder() -> verify_email_identity_output::Builder {
        verify_email_identity_output::Builder::default()
    }
}

pub mod verify_email_identity_output {
    /// A builder for [`VerifyEmailIdentityOutput`](super::VerifyEmailIdentityOutput).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {}

    impl Builder {
        pub fn build(self) -> super::VerifyEmailIdentityOutput {
            super::VerifyEmailIdentityOutput {}
        }
    }
}

/// `DeleteIdentity` returns an empty result.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteIdentityOutput {}

impl DeleteIdentityOutput {
    pub fn builder() -> delete_identity_output::Builder {
        delete_identity_output::Builder::default()
    }
}

pub mod delete_identity_output {
    /// A builder for [`DeleteIdentityOutput`](super::DeleteIdentityOutput).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {}

    impl Builder {
        pub fn build(self) -> super::DeleteIdentityOutput {
            super::DeleteIdentityOutput {}
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct ListIdentitiesOutput {
    pub identities: Option<Vec<String>>,
    pub next_token: Option<String>,
}

impl ListIdentitiesOutput {
    pub fn builder() -> list_identities_output::Builder {
        list_identities_output::Builder::default()
    }
}

pub mod list_identities_output {
    /// A builder for [`ListIdentitiesOutput`](super::ListIdentitiesOutput).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        identities: Option<Vec<String>>,
        next_token: Option<String>,
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
        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }
        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.next_token = inp;
            self
        }
        pub fn build(self) -> super::ListIdentitiesOutput {
            super::ListIdentitiesOutput {
                identities: self.identities,
                next_token: self.next_token,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct GetIdentityVerificationAttributesOutput {
    pub verification_attributes: Option<HashMap<String, IdentityVerificationAttributes>>,
}

impl GetIdentityVerificationAttributesOutput {
    pub fn builder() -> get_identity_verification_attributes_output::Builder {
        get_identity_verification_attributes_output::Builder::default()
    }
}

pub mod get_identity_verification_attributes_output {
    use crate::model::IdentityVerificationAttributes;
    use std::collections::HashMap;

    /// A builder for
    /// [`GetIdentityVerificationAttributesOutput`](super::GetIdentityVerificationAttributesOutput).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        verification_attributes: Option<HashMap<String, IdentityVerificationAttributes>>,
    }

    impl Builder {
        pub fn verification_attributes(
            mut self,
            key: impl Into<String>,
            value: IdentityVerificationAttributes,
        ) -> Self {
            self.verification_attributes
                .get_or_insert_with(HashMap::new)
                .insert(key.into(), value);
            self
        }
        pub fn set_verification_attributes(
            mut self,
            inp: Option<HashMap<String, IdentityVerificationAttributes>>,
        ) -> Self {
            self.verification_attributes = inp;
            self
        }
        pub fn build(self) -> super::GetIdentityVerificationAttributesOutput {
            super::GetIdentityVerificationAttributesOutput {
                verification_attributes: self.verification_attributes,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct DescribeReceiptRuleOutput {
    pub rule: Option<ReceiptRule>,
}

impl DescribeReceiptRuleOutput {
    pub fn builder() -> describe_receipt_rule_output::Builder {
        describe_receipt_rule_output::Builder::default()
    }
}

pub mod describe_receipt_rule_output {
    use crate::model::ReceiptRule;

    /// A builder for [`DescribeReceiptRuleOutput`](super::DescribeReceiptRuleOutput).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        rule: Option<ReceiptRule>,
    }

    impl Builder {
        pub fn rule(mut self, inp: ReceiptRule) -> Self {
            self.rule = Some(inp);
            self
        }
        pub fn set_rule(mut self, inp: Option<ReceiptRule>) -> Self {
            self.rule = inp;
            self
        }
        pub fn build(self) -> super::DescribeReceiptRuleOutput {
            super::DescribeReceiptRuleOutput { rule: self.rule }
        }
    }
}

/// `CreateReceiptRule` returns an empty result.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct CreateReceiptRuleOutput {}

impl CreateReceiptRuleOutput {
    pub fn builder() -> create_receipt_rule_output::Builder {
        create_receipt_rule_output::Builder::default()
    }
}

pub mod create_receipt_rule_output {
    /// A builder for [`CreateReceiptRuleOutput`](super::CreateReceiptRuleOutput).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {}

    impl Builder {
        pub fn build(self) -> super::CreateReceiptRuleOutput {
            super::CreateReceiptRuleOutput {}
        }
    }
}

/// `SetReceiptRulePosition` returns an empty result.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct SetReceiptRulePositionOutput {}

impl SetReceiptRulePositionOutput {
    pub fn builder() -> set_receipt_rule_position_output::Builder {
        set_receipt_rule_position_output::Builder::default()
    }
}

pub mod set_receipt_rule_position_output {
    /// A builder for [`SetReceiptRulePositionOutput`](super::SetReceiptRulePositionOutput).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {}

    impl Builder {
        pub fn build(self) -> super::SetReceiptRulePositionOutput {
            super::SetReceiptRulePositionOutput {}
        }
    }
}
