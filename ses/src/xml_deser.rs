/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Unmarshals XML response bodies into outputs and models. The payload
//! of each operation sits inside a `<OperationNameResult>` wrapper next
//! to `<ResponseMetadata>`. Unknown tags are skipped, never an error.

use crate::model::{
    BounceAction, IdentityVerificationAttributes, ReceiptAction, ReceiptRule, S3Action,
    SnsAction, SnsActionEncoding, StopAction, StopScope, TlsPolicy, VerificationStatus,
};
use crate::output::{
    DescribeReceiptRuleOutput, GetIdentityVerificationAttributesOutput, ListIdentitiesOutput,
    SendEmailOutput, SendRawEmailOutput,
};
use std::collections::HashMap;
use wire_xml::decode::{Document, ScopedDecoder, XmlError};

pub(crate) fn send_email_output(body: &[u8]) -> Result<SendEmailOutput, XmlError> {
    let mut doc = Document::try_from(body)?;
    let mut root = doc.root_element()?;
    let mut builder = SendEmailOutput::builder();
    while let Some(mut result) = root.next_tag() {
        if result.start_el().matches("SendEmailResult") {
            while let Some(mut field) = result.next_tag() {
                if field.start_el().matches("MessageId") {
                    builder = builder.message_id(field.try_data()?.to_string());
                }
            }
        }
    }
    Ok(builder.build())
}

pub(crate) fn send_raw_email_output(body: &[u8]) -> Result<SendRawEmailOutput, XmlError> {
    let mut doc = Document::try_from(body)?;
    let mut root = doc.root_element()?;
    let mut builder = SendRawEmailOutput::builder();
    while let Some(mut result) = root.next_tag() {
        if result.start_el().matches("SendRawEmailResult") {
            while let Some(mut field) = result.next_tag() {
                if field.start_el().matches("MessageId") {
                    builder = builder.message_id(field.try_data()?.to_string());
                }
            }
        }
    }
    Ok(builder.build())
}

pub(crate) fn list_identities_output(body: &[u8]) -> Result<ListIdentitiesOutput, XmlError> {
    let mut doc = Document::try_from(body)?;
    let mut root = doc.root_element()?;
    let mut builder = ListIdentitiesOutput::builder();
    while let Some(mut result) = root.next_tag() {
        if result.start_el().matches("ListIdentitiesResult") {
            while let Some(mut field) = result.next_tag() {
                if field.start_el().matches("Identities") {
                    builder = builder.set_identities(Some(deser_string_list(&mut field)?));
                } else if field.start_el().matches("NextToken") {
                    builder = builder.next_token(field.try_data()?.to_string());
                }
            }
        }
    }
    Ok(builder.build())
}

pub(crate) fn get_identity_verification_attributes_output(
    body: &[u8],
) -> Result<GetIdentityVerificationAttributesOutput, XmlError> {
    let mut doc = Document::try_from(body)?;
    let mut root = doc.root_element()?;
    let mut builder = GetIdentityVerificationAttributesOutput::builder();
    while let Some(mut result) = root.next_tag() {
        if result.start_el().matches("GetIdentityVerificationAttributesResult") {
            while let Some(mut field) = result.next_tag() {
                if field.start_el().matches("VerificationAttributes") {
                    builder = builder
                        .set_verification_attributes(Some(deser_verification_map(&mut field)?));
                }
            }
        }
    }
    Ok(builder.build())
}

pub(crate) fn describe_receipt_rule_output(
    body: &[u8],
) -> Result<DescribeReceiptRuleOutput, XmlError> {
    let mut doc = Document::try_from(body)?;
    let mut root = doc.root_element()?;
    let mut builder = DescribeReceiptRuleOutput::builder();
    while let Some(mut result) = root.next_tag() {
        if result.start_el().matches("DescribeReceiptRuleResult") {
            while let Some(mut field) = result.next_tag() {
                if field.start_el().matches("Rule") {
                    builder = builder.rule(deser_receipt_rule(&mut field)?);
                }
            }
        }
    }
    Ok(builder.build())
}

/// `<Wrapper><member>a</member><member>b</member></Wrapper>`, in
/// document order.
fn deser_string_list(decoder: &mut ScopedDecoder<'_, '_>) -> Result<Vec<String>, XmlError> {
    let mut items = Vec::new();
    while let Some(mut member) = decoder.next_tag() {
        if member.start_el().matches("member") {
            items.push(member.try_data()?.to_string());
        }
    }
    Ok(items)
}

/// `<entry><key>k</key><value>...</value></entry>` pairs.
fn deser_verification_map(
    decoder: &mut ScopedDecoder<'_, '_>,
) -> Result<HashMap<String, IdentityVerificationAttributes>, XmlError> {
    let mut map = HashMap::new();
    while let Some(mut entry) = decoder.next_tag() {
        if !entry.start_el().matches("entry") {
            continue;
        }
        let mut key = None;
        let mut value = None;
        while let Some(mut part) = entry.next_tag() {
            if part.start_el().matches("key") {
                key = Some(part.try_data()?.to_string());
            } else if part.start_el().matches("value") {
                value = Some(deser_verification_attributes(&mut part)?);
            }
        }
        if let (Some(key), Some(value)) = (key, value) {
            map.insert(key, value);
        }
    }
    Ok(map)
}

fn deser_verification_attributes(
    decoder: &mut ScopedDecoder<'_, '_>,
) -> Result<IdentityVerificationAttributes, XmlError> {
    let mut builder = IdentityVerificationAttributes::builder();
    while let Some(mut field) = decoder.next_tag() {
        if field.start_el().matches("VerificationStatus") {
            builder = builder.verification_status(VerificationStatus::from(field.try_data()?.as_ref()));
        } else if field.start_el().matches("VerificationToken") {
            builder = builder.verification_token(field.try_data()?.to_string());
        }
    }
    Ok(builder.build())
}

fn deser_receipt_rule(decoder: &mut ScopedDecoder<'_, '_>) -> Result<ReceiptRule, XmlError> {
    let mut builder = ReceiptRule::builder();
    while let Some(mut field) = decoder.next_tag() {
        let local = field.start_el().local();
        match local {
            "Name" => builder = builder.name(field.try_data()?.to_string()),
            "Enabled" => builder = builder.enabled(parse_bool(&field.try_data()?)?),
            "TlsPolicy" => builder = builder.tls_policy(TlsPolicy::from(field.try_data()?.as_ref())),
            "Recipients" => builder = builder.set_recipients(Some(deser_string_list(&mut field)?)),
            "Actions" => {
                let mut actions = Vec::new();
                while let Some(mut member) = field.next_tag() {
                    if member.start_el().matches("member") {
                        actions.push(deser_receipt_action(&mut member)?);
                    }
                }
                builder = builder.set_actions(Some(actions));
            }
            "ScanEnabled" => builder = builder.scan_enabled(parse_bool(&field.try_data()?)?),
            _ => {}
        }
    }
    Ok(builder.build())
}

fn deser_receipt_action(decoder: &mut ScopedDecoder<'_, '_>) -> Result<ReceiptAction, XmlError> {
    let mut builder = ReceiptAction::builder();
    while let Some(mut field) = decoder.next_tag() {
        let local = field.start_el().local();
        match local {
            "S3Action" => builder = builder.s3_action(deser_s3_action(&mut field)?),
            "BounceAction" => builder = builder.bounce_action(deser_bounce_action(&mut field)?),
            "StopAction" => builder = builder.stop_action(deser_stop_action(&mut field)?),
            "SNSAction" => builder = builder.sns_action(deser_sns_action(&mut field)?),
            _ => {}
        }
    }
    Ok(builder.build())
}

fn deser_s3_action(decoder: &mut ScopedDecoder<'_, '_>) -> Result<S3Action, XmlError> {
    let mut builder = S3Action::builder();
    while let Some(mut field) = decoder.next_tag() {
        let local = field.start_el().local();
        match local {
            "TopicArn" => builder = builder.topic_arn(field.try_data()?.to_string()),
            "BucketName" => builder = builder.bucket_name(field.try_data()?.to_string()),
            "ObjectKeyPrefix" => builder = builder.object_key_prefix(field.try_data()?.to_string()),
            "KmsKeyArn" => builder = builder.kms_key_arn(field.try_data()?.to_string()),
            _ => {}
        }
    }
    Ok(builder.build())
}

fn deser_bounce_action(decoder: &mut ScopedDecoder<'_, '_>) -> Result<BounceAction, XmlError> {
    let mut builder = BounceAction::builder();
    while let Some(mut field) = decoder.next_tag() {
        let local = field.start_el().local();
        match local {
            "TopicArn" => builder = builder.topic_arn(field.try_data()?.to_string()),
            "SmtpReplyCode" => builder = builder.smtp_reply_code(field.try_data()?.to_string()),
            "StatusCode" => builder = builder.status_code(field.try_data()?.to_string()),
            "Message" => builder = builder.message(field.try_data()?.to_string()),
            "Sender" => builder = builder.sender(field.try_data()?.to_string()),
            _ => {}
        }
    }
    Ok(builder.build())
}

fn deser_stop_action(decoder: &mut ScopedDecoder<'_, '_>) -> Result<StopAction, XmlError> {
    let mut builder = StopAction::builder();
    while let Some(mut field) = decoder.next_tag() {
        let local = field.start_el().local();
        match local {
            "Scope" => builder = builder.scope(StopScope::from(field.try_data()?.as_ref())),
            "TopicArn" => builder = builder.topic_arn(field.try_data()?.to_string()),
            _ => {}
        }
    }
    Ok(builder.build())
}

fn deser_sns_action(decoder: &mut ScopedDecoder<'_, '_>) -> Result<SnsAction, XmlError> {
    let mut builder = SnsAction::builder();
    while let Some(mut field) = decoder.next_tag() {
        let local = field.start_el().local();
        match local {
            "TopicArn" => builder = builder.topic_arn(field.try_data()?.to_string()),
            "Encoding" => builder = builder.encoding(SnsActionEncoding::from(field.try_data()?.as_ref())),
            _ => {}
        }
    }
    Ok(builder.build())
}

fn parse_bool(data: &str) -> Result<bool, XmlError> {
    match data {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(XmlError::custom(format!(
            "expected `true` or `false`, got `{}`",
            other
        ))),
    }
}
