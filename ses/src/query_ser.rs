/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Marshals operation inputs into Query protocol parameter lists. Only
//! populated fields are written; a fully-unset input serializes as just
//! `Action` and `Version`.

use crate::input::{
    CreateReceiptRuleInput, DeleteIdentityInput, DescribeReceiptRuleInput,
    GetIdentityVerificationAttributesInput, ListIdentitiesInput, SendEmailInput,
    SendRawEmailInput, SetReceiptRulePositionInput, VerifyEmailIdentityInput,
};
use crate::model::{
    Body, BounceAction, Content, Destination, Message, ReceiptAction, ReceiptRule, S3Action,
    SnsAction, StopAction,
};
use wire_query::{QueryValueWriter, QueryWriter};
use wire_types::base64;
use wire_types::Number;

const API_VERSION: &str = "2010-12-01";

pub(crate) fn send_email_input(input: &SendEmailInput) -> String {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "SendEmail", API_VERSION);
    if let Some(source) = &input.source {
        writer.prefix("Source").string(source);
    }
    if let Some(destination) = &input.destination {
        let mut scope = writer.prefix("Destination");
        serialize_destination(&mut scope, destination);
    }
    if let Some(message) = &input.message {
        let mut scope = writer.prefix("Message");
        serialize_message(&mut scope, message);
    }
    if let Some(reply_to_addresses) = &input.reply_to_addresses {
        serialize_string_list(writer.prefix("ReplyToAddresses"), reply_to_addresses);
    }
    if let Some(return_path) = &input.return_path {
        writer.prefix("ReturnPath").string(return_path);
    }
    if let Some(tags) = &input.tags {
        let scope = writer.prefix("Tags");
        let mut list = scope.start_list();
        for tag in tags {
            let mut entry = list.entry();
            if let Some(name) = &tag.name {
                entry.prefix("Name").string(name);
            }
            if let Some(value) = &tag.value {
                entry.prefix("Value").string(value);
            }
        }
        list.finish();
    }
    if let Some(configuration_set_name) = &input.configuration_set_name {
        writer.prefix("ConfigurationSetName").string(configuration_set_name);
    }
    writer.finish();
    out
}

pub(crate) fn send_raw_email_input(input: &SendRawEmailInput) -> String {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "SendRawEmail", API_VERSION);
    if let Some(source) = &input.source {
        writer.prefix("Source").string(source);
    }
    if let Some(destinations) = &input.destinations {
        serialize_string_list(writer.prefix("Destinations"), destinations);
    }
    if let Some(raw_message) = &input.raw_message {
        if let Some(data) = &raw_message.data {
            let mut scope = writer.prefix("RawMessage");
            scope.prefix("Data").string(&base64::encode(data));
        }
    }
    writer.finish();
    out
}

pub(crate) fn verify_email_identity_input(input: &VerifyEmailIdentityInput) -> String {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "VerifyEmailIdentity", API_VERSION);
    if let Some(email_address) = &input.email_address {
        writer.prefix("EmailAddress").string(email_address);
    }
    writer.finish();
    out
}

pub(crate) fn delete_identity_input(input: &DeleteIdentityInput) -> String {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "DeleteIdentity", API_VERSION);
    if let Some(identity) = &input.identity {
        writer.prefix("Identity").string(identity);
    }
    writer.finish();
    out
}

pub(crate) fn list_identities_input(input: &ListIdentitiesInput) -> String {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "ListIdentities", API_VERSION);
    if let Some(identity_type) = &input.identity_type {
        writer.prefix("IdentityType").string(identity_type.as_str());
    }
    if let Some(next_token) = &input.next_token {
        writer.prefix("NextToken").string(next_token);
    }
    if let Some(max_items) = input.max_items {
        writer.prefix("MaxItems").number(Number::NegInt(max_items as i64));
    }
    writer.finish();
    out
}

pub(crate) fn get_identity_verification_attributes_input(
    input: &GetIdentityVerificationAttributesInput,
) -> String {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "GetIdentityVerificationAttributes", API_VERSION);
    if let Some(identities) = &input.identities {
        serialize_string_list(writer.prefix("Identities"), identities);
    }
    writer.finish();
    out
}

pub(crate) fn describe_receipt_rule_input(input: &DescribeReceiptRuleInput) -> String {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "DescribeReceiptRule", API_VERSION);
    if let Some(rule_set_name) = &input.rule_set_name {
        writer.prefix("RuleSetName").string(rule_set_name);
    }
    if let Some(rule_name) = &input.rule_name {
        writer.prefix("RuleName").string(rule_name);
    }
    writer.finish();
    out
}

pub(crate) fn create_receipt_rule_input(input: &CreateReceiptRuleInput) -> String {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "CreateReceiptRule", API_VERSION);
    if let Some(rule_set_name) = &input.rule_set_name {
        writer.prefix("RuleSetName").string(rule_set_name);
    }
    if let Some(after) = &input.after {
        writer.prefix("After").string(after);
    }
    if let Some(rule) = &input.rule {
        let mut scope = writer.prefix("Rule");
        serialize_receipt_rule(&mut scope, rule);
    }
    writer.finish();
    out
}

pub(crate) fn set_receipt_rule_position_input(input: &SetReceiptRulePositionInput) -> String {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "SetReceiptRulePosition", API_VERSION);
    if let Some(rule_set_name) = &input.rule_set_name {
        writer.prefix("RuleSetName").string(rule_set_name);
    }
    if let Some(rule_name) = &input.rule_name {
        writer.prefix("RuleName").string(rule_name);
    }
    if let Some(after) = &input.after {
        writer.prefix("After").string(after);
    }
    writer.finish();
    out
}

fn serialize_string_list(writer: QueryValueWriter<'_>, values: &[String]) {
    let mut list = writer.start_list();
    for value in values {
        list.entry().string(value);
    }
    list.finish();
}

fn serialize_destination(writer: &mut QueryValueWriter<'_>, input: &Destination) {
    if let Some(to_addresses) = &input.to_addresses {
        serialize_string_list(writer.prefix("ToAddresses"), to_addresses);
    }
    if let Some(cc_addresses) = &input.cc_addresses {
        serialize_string_list(writer.prefix("CcAddresses"), cc_addresses);
    }
    if let Some(bcc_addresses) = &input.bcc_addresses {
        serialize_string_list(writer.prefix("BccAddresses"), bcc_addresses);
    }
}

fn serialize_message(writer: &mut QueryValueWriter<'_>, input: &Message) {
    if let Some(subject) = &input.subject {
        let mut scope = writer.prefix("Subject");
        serialize_content(&mut scope, subject);
    }
    if let Some(body) = &input.body {
        let mut scope = writer.prefix("Body");
        serialize_body(&mut scope, body);
    }
}

fn serialize_body(writer: &mut QueryValueWriter<'_>, input: &Body) {
    if let Some(text) = &input.text {
        let mut scope = writer.prefix("Text");
        serialize_content(&mut scope, text);
    }
    if let Some(html) = &input.html {
        let mut scope = writer.prefix("Html");
        serialize_content(&mut scope, html);
    }
}

fn serialize_content(writer: &mut QueryValueWriter<'_>, input: &Content) {
    if let Some(data) = &input.data {
        writer.prefix("Data").string(data);
    }
    if let Some(charset) = &input.charset {
        writer.prefix("Charset").string(charset);
    }
}

fn serialize_receipt_rule(writer: &mut QueryValueWriter<'_>, input: &ReceiptRule) {
    if let Some(name) = &input.name {
        writer.prefix("Name").string(name);
    }
    if let Some(enabled) = input.enabled {
        writer.prefix("Enabled").boolean(enabled);
    }
    if let Some(tls_policy) = &input.tls_policy {
        writer.prefix("TlsPolicy").string(tls_policy.as_str());
    }
    if let Some(recipients) = &input.recipients {
        serialize_string_list(writer.prefix("Recipients"), recipients);
    }
    if let Some(actions) = &input.actions {
        let scope = writer.prefix("Actions");
        let mut list = scope.start_list();
        for action in actions {
            let mut entry = list.entry();
            serialize_receipt_action(&mut entry, action);
        }
        list.finish();
    }
    if let Some(scan_enabled) = input.scan_enabled {
        writer.prefix("ScanEnabled").boolean(scan_enabled);
    }
}

fn serialize_receipt_action(writer: &mut QueryValueWriter<'_>, input: &ReceiptAction) {
    if let Some(s3_action) = &input.s3_action {
        let mut scope = writer.prefix("S3Action");
        serialize_s3_action(&mut scope, s3_action);
    }
    if let Some(bounce_action) = &input.bounce_action {
        let mut scope = writer.prefix("BounceAction");
        serialize_bounce_action(&mut scope, bounce_action);
    }
    if let Some(stop_action) = &input.stop_action {
        let mut scope = writer.prefix("StopAction");
        serialize_stop_action(&mut scope, stop_action);
    }
    if let Some(sns_action) = &input.sns_action {
        let mut scope = writer.prefix("SNSAction");
        serialize_sns_action(&mut scope, sns_action);
    }
}

fn serialize_s3_action(writer: &mut QueryValueWriter<'_>, input: &S3Action) {
    if let Some(topic_arn) = &input.topic_arn {
        writer.prefix("TopicArn").string(topic_arn);
    }
    if let Some(bucket_name) = &input.bucket_name {
        writer.prefix("BucketName").string(bucket_name);
    }
    if let Some(object_key_prefix) = &input.object_key_prefix {
        writer.prefix("ObjectKeyPrefix").string(object_key_prefix);
    }
    if let Some(kms_key_arn) = &input.kms_key_arn {
        writer.prefix("KmsKeyArn").string(kms_key_arn);
    }
}

fn serialize_bounce_action(writer: &mut QueryValueWriter<'_>, input: &BounceAction) {
    if let Some(topic_arn) = &input.topic_arn {
        writer.prefix("TopicArn").string(topic_arn);
    }
    if let Some(smtp_reply_code) = &input.smtp_reply_code {
        writer.prefix("SmtpReplyCode").string(smtp_reply_code);
    }
    if let Some(status_code) = &input.status_code {
        writer.prefix("StatusCode").string(status_code);
    }
    if let Some(message) = &input.message {
        writer.prefix("Message").string(message);
    }
    if let Some(sender) = &input.sender {
        writer.prefix("Sender").string(sender);
    }
}

fn serialize_stop_action(writer: &mut QueryValueWriter<'_>, input: &StopAction) {
    if let Some(scope) = &input.scope {
        writer.prefix("Scope").string(scope.as_str());
    }
    if let Some(topic_arn) = &input.topic_arn {
        writer.prefix("TopicArn").string(topic_arn);
    }
}

fn serialize_sns_action(writer: &mut QueryValueWriter<'_>, input: &SnsAction) {
    if let Some(topic_arn) = &input.topic_arn {
        writer.prefix("TopicArn").string(topic_arn);
    }
    if let Some(encoding) = &input.encoding {
        writer.prefix("Encoding").string(encoding.as_str());
    }
}

#[cfg(test)]
mod test {
    use crate::input::{ListIdentitiesInput, SendEmailInput};

    #[test]
    fn empty_input_serializes_action_and_version_only() {
        let input = SendEmailInput::builder().build();
        assert_eq!(
            "Action=SendEmail&Version=2010-12-01",
            super::send_email_input(&input)
        );
        let input = ListIdentitiesInput::builder().build();
        assert_eq!(
            "Action=ListIdentities&Version=2010-12-01",
            super::list_identities_input(&input)
        );
    }
}
