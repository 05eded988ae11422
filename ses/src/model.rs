/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Data shapes shared by the SES operations. Every field is optional;
//! absent fields are omitted from the parameter list and unknown
//! response tags are ignored on read.

use wire_types::Blob;

/// The destination for an email: To, CC, and BCC address lists.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub to_addresses: Option<Vec<String>>,
    pub cc_addresses: Option<Vec<String>>,
    pub bcc_addresses: Option<Vec<String>>,
}

impl Destination {
    pub fn builder() -> destination::Builder {
        destination::Builder::default()
    }
}

pub mod destination {
    /// A builder for [`Destination`](super::Destination).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        to_addresses: Option<Vec<String>>,
        cc_addresses: Option<Vec<String>>,
        bcc_addresses: Option<Vec<String>>,
    }

    impl Builder {
        pub fn to_addresses(mut self, inp: impl Into<String>) -> Self {
            self.to_addresses.get_or_insert_with(Vec::new).push(inp.into());
            self
        }
        pub fn set_to_addresses(mut self, inp: Option<Vec<String>>) -> Self {
            self.to_addresses = inp;
            self
        }
        pub fn cc_addresses(mut self, inp: impl Into<String>) -> Self {
            self.cc_addresses.get_or_insert_with(Vec::new).push(inp.into());
            self
        }
        pub fn set_cc_addresses(mut self, inp: Option<Vec<String>>) -> Self {
            self.cc_addresses = inp;
            self
        }
        pub fn bcc_addresses(mut self, inp: impl Into<String>) -> Self {
            self.bcc_addresses.get_or_insert_with(Vec::new).push(inp.into());
            self
        }
        pub fn set_bcc_addresses(mut self, inp: Option<Vec<String>>) -> Self {
            self.bcc_addresses = inp;
            self
        }
        pub fn build(self) -> super::Destination {
            super::Destination {
                to_addresses: self.to_addresses,
                cc_addresses: self.cc_addresses,
                bcc_addresses: self.bcc_addresses,
            }
        }
    }
}

/// Textual content with an optional charset.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    pub data: Option<String>,
    pub charset: Option<String>,
}

impl Content {
    pub fn builder() -> content::Builder {
        content::Builder::default()
    }
}

pub mod content {
    /// A builder for [`Content`](super::Content).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        data: Option<String>,
        charset: Option<String>,
    }

    impl Builder {
        pub fn data(mut self, inp: impl Into<String>) -> Self {
            self.data = Some(inp.into());
            self
        }
        pub fn set_data(mut self, inp: Option<String>) -> Self {
            self.data = inp;
            self
        }
        pub fn charset(mut self, inp: impl Into<String>) -> Self {
            self.charset = Some(inp.into());
            self
        }
        pub fn set_charset(mut self, inp: Option<String>) -> Self {
            self.charset = inp;
            self
        }
        pub fn build(self) -> super::Content {
            super::Content {
                data: self.data,
                charset: self.charset,
            }
        }
    }
}

/// The body of an email: text and/or HTML variants.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub text: Option<Content>,
    pub html: Option<Content>,
}

impl Body {
    pub fn builder() -> body::Builder {
        body::Builder::default()
    }
}

pub mod body {
    use super::Content;

    /// A builder for [`Body`](super::Body).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        text: Option<Content>,
        html: Option<Content>,
    }

    impl Builder {
        pub fn text(mut self, inp: Content) -> Self {
            self.text = Some(inp);
            self
        }
        pub fn set_text(mut self, inp: Option<Content>) -> Self {
            self.text = inp;
            self
        }
        pub fn html(mut self, inp: Content) -> Self {
            self.html = Some(inp);
            self
        }
        pub fn set_html(mut self, inp: Option<Content>) -> Self {
            self.html = inp;
            self
        }
        pub fn build(self) -> super::Body {
            super::Body {
                text: self.text,
                html: self.html,
            }
        }
    }
}

/// A subject line and body.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub subject: Option<Content>,
    pub body: Option<Body>,
}

impl Message {
    pub fn builder() -> message::Builder {
        message::Builder::default()
    }
}

pub mod message {
    use super::{Body, Content};

    /// A builder for [`Message`](super::Message).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        subject: Option<Content>,
        body: Option<Body>,
    }

    impl Builder {
        pub fn subject(mut self, inp: Content) -> Self {
            self.subject = Some(inp);
            self
        }
        pub fn set_subject(mut self, inp: Option<Content>) -> Self {
            self.subject = inp;
            self
        }
        pub fn body(mut self, inp: Body) -> Self {
            self.body = Some(inp);
            self
        }
        pub fn set_body(mut self, inp: Option<Body>) -> Self {
            self.body = inp;
            self
        }
        pub fn build(self) -> super::Message {
            super::Message {
                subject: self.subject,
                body: self.body,
            }
        }
    }
}

/// A name/value pair applied to an email as a message tag.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct MessageTag {
    pub name: Option<String>,
    pub value: Option<String>,
}

impl MessageTag {
    pub fn builder() -> message_tag::Builder {
        message_tag::Builder::default()
    }
}

pub mod message_tag {
    /// A builder for [`MessageTag`](super::MessageTag).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        name: Option<String>,
        value: Option<String>,
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
        pub fn value(mut self, inp: impl Into<String>) -> Self {
            self.value = Some(inp.into());
            self
        }
        pub fn set_value(mut self, inp: Option<String>) -> Self {
            self.value = inp;
            self
        }
        pub fn build(self) -> super::MessageTag {
            super::MessageTag {
                name: self.name,
                value: self.value,
            }
        }
    }
}

/// The raw bytes of an email, headers included. Base64-encoded on the
/// wire.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct RawMessage {
    pub data: Option<Blob>,
}

impl RawMessage {
    pub fn builder() -> raw_message::Builder {
        raw_message::Builder::default()
    }
}

pub mod raw_message {
    use wire_types::Blob;

    /// A builder for [`RawMessage`](super::RawMessage).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        data: Option<Blob>,
    }

    impl Builder {
        pub fn data(mut self, inp: Blob) -> Self {
            self.data = Some(inp);
            self
        }
        pub fn set_data(mut self, inp: Option<Blob>) -> Self {
            self.data = inp;
            self
        }
        pub fn build(self) -> super::RawMessage {
            super::RawMessage { data: self.data }
        }
    }
}

/// The verification state of a single identity.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityVerificationAttributes {
    pub verification_status: Option<VerificationStatus>,
    pub verification_token: Option<String>,
}

impl IdentityVerificationAttributes {
    pub fn builder() -> identity_verification_attributes::Builder {
        identity_verification_attributes::Builder::default()
    }
}

pub mod identity_verification_attributes {
    use super::VerificationStatus;

    /// A builder for [`IdentityVerificationAttributes`](super::IdentityVerificationAttributes).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        verification_status: Option<VerificationStatus>,
        verification_token: Option<String>,
    }

    impl Builder {
        pub fn verification_status(mut self, inp: VerificationStatus) -> Self {
            self.verification_status = Some(inp);
            self
        }
        pub fn set_verification_status(mut self, inp: Option<VerificationStatus>) -> Self {
            self.verification_status = inp;
            self
        }
        pub fn verification_token(mut self, inp: impl Into<String>) -> Self {
            self.verification_token = Some(inp.into());
            self
        }
        pub fn set_verification_token(mut self, inp: Option<String>) -> Self {
            self.verification_token = inp;
            self
        }
        pub fn build(self) -> super::IdentityVerificationAttributes {
            super::IdentityVerificationAttributes {
                verification_status: self.verification_status,
                verification_token: self.verification_token,
            }
        }
    }
}

/// A receipt rule: recipient conditions plus an ordered action list.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptRule {
    pub name: Option<String>,
    pub enabled: Option<bool>,
    pub tls_policy: Option<TlsPolicy>,
    pub recipients: Option<Vec<String>>,
    pub actions: Option<Vec<ReceiptAction>>,
    pub scan_enabled: Option<bool>,
}

impl ReceiptRule {
    pub fn builder() -> receipt_rule::Builder {
        receipt_rule::Builder::default()
    }
}

pub mod receipt_rule {
    use super::{ReceiptAction, TlsPolicy};

    /// A builder for [`ReceiptRule`](super::ReceiptRule).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        name: Option<String>,
        enabled: Option<bool>,
        tls_policy: Option<TlsPolicy>,
        recipients: Option<Vec<String>>,
        actions: Option<Vec<ReceiptAction>>,
        scan_enabled: Option<bool>,
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
        pub fn enabled(mut self, inp: bool) -> Self {
            self.enabled = Some(inp);
            self
        }
        pub fn set_enabled(mut self, inp: Option<bool>) -> Self {
            self.enabled = inp;
            self
        }
        pub fn tls_policy(mut self, inp: TlsPolicy) -> Self {
            self.tls_policy = Some(inp);
            self
        }
        pub fn set_tls_policy(mut self, inp: Option<TlsPolicy>) -> Self {
            self.tls_policy = inp;
            self
        }
        pub fn recipients(mut self, inp: impl Into<String>) -> Self {
            self.recipients.get_or_insert_with(Vec::new).push(inp.into());
            self
        }
        pub fn set_recipients(mut self, inp: Option<Vec<String>>) -> Self {
            self.recipients = inp;
            self
        }
        pub fn actions(mut self, inp: ReceiptAction) -> Self {
            self.actions.get_or_insert_with(Vec::new).push(inp);
            self
        }
        pub fn set_actions(mut self, inp: Option<Vec<ReceiptAction>>) -> Self {
            self.actions = inp;
            self
        }
        pub fn scan_enabled(mut self, inp: bool) -> Self {
            self.scan_enabled = Some(inp);
            self
        }
        pub fn set_scan_enabled(mut self, inp: Option<bool>) -> Self {
            self.scan_enabled = inp;
            self
        }
        pub fn build(self) -> super::ReceiptRule {
            super::ReceiptRule {
                name: self.name,
                enabled: self.enabled,
                tls_policy: self.tls_policy,
                recipients: self.recipients,
                actions: self.actions,
                scan_enabled: self.scan_enabled,
            }
        }
    }
}

/// One action in a receipt rule. Exactly one of the nested actions is
/// set per entry.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptAction {
    pub s3_action: Option<S3Action>,
    pub bounce_action: Option<BounceAction>,
    pub stop_action: Option<StopAction>,
    pub sns_action: Option<SnsAction>,
}

impl ReceiptAction {
    pub fn builder() -> receipt_action::Builder {
        receipt_action::Builder::default()
    }
}

pub mod receipt_action {
    use super::{BounceAction, S3Action, SnsAction, StopAction};

    /// A builder for [`ReceiptAction`](super::ReceiptAction).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        s3_action: Option<S3Action>,
        bounce_action: Option<BounceAction>,
        stop_action: Option<StopAction>,
        sns_action: Option<SnsAction>,
    }

    impl Builder {
        pub fn s3_action(mut self, inp: S3Action) -> Self {
            self.s3_action = Some(inp);
            self
        }
        pub fn set_s3_action(mut self, inp: Option<S3Action>) -> Self {
            self.s3_action = inp;
            self
        }
        pub fn bounce_action(mut self, inp: BounceAction) -> Self {
            self.bounce_action = Some(inp);
            self
        }
        pub fn set_bounce_action(mut self, inp: Option<BounceAction>) -> Self {
            self.bounce_action = inp;
            self
        }
        pub fn stop_action(mut self, inp: StopAction) -> Self {
            self.stop_action = Some(inp);
            self
        }
        pub fn set_stop_action(mut self, inp: Option<StopAction>) -> Self {
            self.stop_action = inp;
            self
        }
        pub fn sns_action(mut self, inp: SnsAction) -> Self {
            self.sns_action = Some(inp);
            self
        }
        pub fn set_sns_action(mut self, inp: Option<SnsAction>) -> Self {
            self.sns_action = inp;
            self
        }
        pub fn build(self) -> super::ReceiptAction {
            super::ReceiptAction {
                s3_action: self.s3_action,
                bounce_action: self.bounce_action,
                stop_action: self.stop_action,
                sns_action: self.sns_action,
            }
        }
    }
}

/// Delivers the mail to an S3 bucket and, optionally, notifies a topic.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct S3Action {
    pub topic_arn: Option<String>,
    pub bucket_name: Option<String>,
    pub object_key_prefix: Option<String>,
    pub kms_key_arn: Option<String>,
}

impl S3Action {
    pub fn builder() -> s3_action::Builder {
        s3_action::Builder::default()
    }
}

pub mod s3_action {
    /// A builder for [`S3Action`](super::S3Action).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        topic_arn: Option<String>,
        bucket_name: Option<String>,
        object_key_prefix: Option<String>,
        kms_key_arn: Option<String>,
    }

    impl Builder {
        pub fn topic_arn(mut self, inp: impl Into<String>) -> Self {
            self.topic_arn = Some(inp.into());
            self
        }
        pub fn set_topic_arn(mut self, inp: Option<String>) -> Self {
            self.topic_arn = inp;
            self
        }
        pub fn bucket_name(mut self, inp: impl Into<String>) -> Self {
            self.bucket_name = Some(inp.into());
            self
        }
        pub fn set_bucket_name(mut self, inp: Option<String>) -> Self {
            self.bucket_name = inp;
            self
        }
        pub fn object_key_prefix(mut self, inp: impl Into<String>) -> Self {
            self.object_key_prefix = Some(inp.into());
            self
        }
        pub fn set_object_key_prefix(mut self, inp: Option<String>) -> Self {
            self.object_key_prefix = inp;
            self
        }
        pub fn kms_key_arn(mut self, inp: impl Into<String>) -> Self {
            self.kms_key_arn = Some(inp.into());
            self
        }
        pub fn set_kms_key_arn(mut self, inp: Option<String>) -> Self {
            self.kms_key_arn = inp;
            self
        }
        pub fn build(self) -> super::S3Action {
            super::S3Action {
                topic_arn: self.topic_arn,
                bucket_name: self.bucket_name,
                object_key_prefix: self.object_key_prefix,
                kms_key_arn: self.kms_key_arn,
            }
        }
    }
}

/// Rejects the mail with a bounce response.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct BounceAction {
    pub topic_arn: Option<String>,
    pub smtp_reply_code: Option<String>,
    pub status_code: Option<String>,
    pub message: Option<String>,
    pub sender: Option<String>,
}

impl BounceAction {
    pub fn builder() -> bounce_action::Builder {
        bounce_action::Builder::default()
    }
}

pub mod bounce_action {
    /// A builder for [`BounceAction`](super::BounceAction).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        topic_arn: Option<String>,
        smtp_reply_code: Option<String>,
        status_code: Option<String>,
        message: Option<String>,
        sender: Option<String>,
    }

    impl Builder {
        pub fn topic_arn(mut self, inp: impl Into<String>) -> Self {
            self.topic_arn = Some(inp.into());
            self
        }
        pub fn set_topic_arn(mut self, inp: Option<String>) -> Self {
            self.topic_arn = inp;
            self
        }
        pub fn smtp_reply_code(mut self, inp: impl Into<String>) -> Self {
            self.smtp_reply_code = Some(inp.into());
            self
        }
        pub fn set_smtp_reply_code(mut self, inp: Option<String>) -> Self {
            self.smtp_reply_code = inp;
            self
        }
        pub fn status_code(mut self, inp: impl Into<String>) -> Self {
            self.status_code = Some(inp.into());
            self
        }
        pub fn set_status_code(mut self, inp: Option<String>) -> Self {
            self.status_code = inp;
            self
        }
        pub fn message(mut self, inp: impl Into<String>) -> Self {
            self.message = Some(inp.into());
            self
        }
        pub fn set_message(mut self, inp: Option<String>) -> Self {
            self.message = inp;
            self
        }
        pub fn sender(mut self, inp: impl Into<String>) -> Self {
            self.sender = Some(inp.into());
            self
        }
        pub fn set_sender(mut self, inp: Option<String>) -> Self {
            self.sender = inp;
            self
        }
        pub fn build(self) -> super::BounceAction {
            super::BounceAction {
                topic_arn: self.topic_arn,
                smtp_reply_code: self.smtp_reply_code,
                status_code: self.status_code,
                message: self.message,
                sender: self.sender,
            }
        }
    }
}

/// Stops evaluating the active rule set.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct StopAction {
    pub scope: Option<StopScope>,
    pub topic_arn: Option<String>,
}

impl StopAction {
    pub fn builder() -> stop_action::Builder {
        stop_action::Builder::default()
    }
}

pub mod stop_action {
    use super::StopScope;

    /// A builder for [`StopAction`](super::StopAction).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        scope: Option<StopScope>,
        topic_arn: Option<String>,
    }

    impl Builder {
        pub fn scope(mut self, inp: StopScope) -> Self {
            self.scope = Some(inp);
            self
        }
        pub fn set_scope(mut self, inp: Option<StopScope>) -> Self {
            self.scope = inp;
            self
        }
        pub fn topic_arn(mut self, inp: impl Into<String>) -> Self {
            self.topic_arn = Some(inp.into());
            self
        }
        pub fn set_topic_arn(mut self, inp: Option<String>) -> Self {
            self.topic_arn = inp;
            self
        }
        pub fn build(self) -> super::StopAction {
            super::StopAction {
                scope: self.scope,
                topic_arn: self.topic_arn,
            }
        }
    }
}

/// Publishes the mail to an SNS topic.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct SnsAction {
    pub topic_arn: Option<String>,
    pub encoding: Option<SnsActionEncoding>,
}

impl SnsAction {
    pub fn builder() -> sns_action::Builder {
        sns_action::Builder::default()
    }
}

pub mod sns_action {
    use super::SnsActionEncoding;

    /// A builder for [`SnsAction`](super::SnsAction).
    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        topic_arn: Option<String>,
        encoding: Option<SnsActionEncoding>,
    }

    impl Builder {
        pub fn topic_arn(mut self, inp: impl Into<String>) -> Self {
            self.topic_arn = Some(inp.into());
            self
        }
        pub fn set_topic_arn(mut self, inp: Option<String>) -> Self {
            self.topic_arn = inp;
            self
        }
        pub fn encoding(mut self, inp: SnsActionEncoding) -> Self {
            self.encoding = Some(inp);
            self
        }
        pub fn set_encoding(mut self, inp: Option<SnsActionEncoding>) -> Self {
            self.encoding = inp;
            self
        }
        pub fn build(self) -> super::SnsAction {
            super::SnsAction {
                topic_arn: self.topic_arn,
                encoding: self.encoding,
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

string_enum!(IdentityType, (EmailAddress, "EmailAddress"), (Domain, "Domain"));
string_enum!(
    VerificationStatus,
    (Pending, "Pending"),
    (Success, "Success"),
    (Failed, "Failed"),
    (TemporaryFailure, "TemporaryFailure"),
    (NotStarted, "NotStarted")
);
string_enum!(TlsPolicy, (Require, "Require"), (Optional, "Optional"));
string_enum!(StopScope, (RuleSet, "RuleSet"));
string_enum!(SnsActionEncoding, (Utf8, "UTF-8"), (Base64, "Base64"));

#[cfg(test)]
mod test {
    use super::{TlsPolicy, VerificationStatus};

    #[test]
    fn enums_round_trip_known_values() {
        assert_eq!(VerificationStatus::from("Pending"), VerificationStatus::Pending);
        assert_eq!(TlsPolicy::Require.as_str(), "Require");
    }

    #[test]
    fn enums_preserve_unknown_values() {
        let unknown = VerificationStatus::from("Paused");
        assert_eq!(unknown.as_str(), "Paused");
    }
}
