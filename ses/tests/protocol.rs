/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Wire-level tests: requests marshal to the expected Query parameter
//! lists, and XML response bodies unmarshal to the expected outputs.

use pretty_assertions::assert_eq;
use ses::error::Error;
use ses::input::{
    CreateReceiptRuleInput, DescribeReceiptRuleInput, GetIdentityVerificationAttributesInput,
    ListIdentitiesInput, SendEmailInput, SendRawEmailInput,
};
use ses::model::{
    Body, Content, Destination, Message, MessageTag, RawMessage, ReceiptAction, ReceiptRule,
    S3Action, StopAction, StopScope, TlsPolicy, VerificationStatus,
};
use ses::operation::{
    parse_describe_receipt_rule_response, parse_get_identity_verification_attributes_response,
    parse_list_identities_response, parse_send_email_response,
};
use wire_types::Blob;

fn body_str(request: &http::Request<Vec<u8>>) -> &str {
    std::str::from_utf8(request.body()).expect("query bodies are UTF-8")
}

fn response(status: u16, body: &str) -> http::Response<Vec<u8>> {
    http::Response::builder()
        .status(status)
        .body(body.as_bytes().to_vec())
        .unwrap()
}

#[test]
fn send_email_marshals_nested_members_under_dotted_prefixes() {
    let input = SendEmailInput::builder()
        .source("sender@example.com")
        .destination(
            Destination::builder()
                .to_addresses("a@example.com")
                .to_addresses("b@example.com")
                .build(),
        )
        .message(
            Message::builder()
                .subject(Content::builder().data("Hi there").build())
                .body(
                    Body::builder()
                        .text(Content::builder().data("plain text").build())
                        .build(),
                )
                .build(),
        )
        .tags(MessageTag::builder().name("env").value("prod").build())
        .build();
    let request = input.request().expect("valid input");

    assert_eq!(request.method(), http::Method::POST);
    assert_eq!(request.uri().path(), "/");
    assert_eq!(
        request.headers()["content-type"],
        "application/x-www-form-urlencoded"
    );
    assert_eq!(
        body_str(&request),
        "Action=SendEmail&Version=2010-12-01\
         &Source=sender%40example.com\
         &Destination.ToAddresses.member.1=a%40example.com\
         &Destination.ToAddresses.member.2=b%40example.com\
         &Message.Subject.Data=Hi%20there\
         &Message.Body.Text.Data=plain%20text\
         &Tags.member.1.Name=env&Tags.member.1.Value=prod"
    );
}

#[test]
fn unset_members_contribute_no_parameters() {
    let input = SendEmailInput::builder().build();
    let request = input.request().expect("valid input");
    assert_eq!(body_str(&request), "Action=SendEmail&Version=2010-12-01");
}

#[test]
fn send_raw_email_base64_encodes_the_payload() {
    let input = SendRawEmailInput::builder()
        .source("sender@example.com")
        .raw_message(
            RawMessage::builder()
                .data(Blob::new(&b"From: sender@example.com\r\n\r\nhello"[..]))
                .build(),
        )
        .build();
    let request = input.request().expect("valid input");
    let body = body_str(&request);
    assert!(body.starts_with("Action=SendRawEmail&Version=2010-12-01"));
    // base64 of the raw message, percent-encoded ('=' padding becomes %3D)
    assert!(body.contains("RawMessage.Data="));
    assert!(!body.contains("RawMessage.Data=From"));
}

#[test]
fn create_receipt_rule_marshals_the_nested_rule_and_action_list() {
    let input = CreateReceiptRuleInput::builder()
        .rule_set_name("default-rules")
        .rule(
            ReceiptRule::builder()
                .name("store-then-stop")
                .enabled(true)
                .tls_policy(TlsPolicy::Optional)
                .recipients("postmaster@example.com")
                .actions(
                    ReceiptAction::builder()
                        .s3_action(S3Action::builder().bucket_name("mail-archive").build())
                        .build(),
                )
                .actions(
                    ReceiptAction::builder()
                        .stop_action(StopAction::builder().scope(StopScope::RuleSet).build())
                        .build(),
                )
                .scan_enabled(false)
                .build(),
        )
        .build();
    let request = input.request().expect("valid input");
    assert_eq!(
        body_str(&request),
        "Action=CreateReceiptRule&Version=2010-12-01\
         &RuleSetName=default-rules\
         &Rule.Name=store-then-stop\
         &Rule.Enabled=true\
         &Rule.TlsPolicy=Optional\
         &Rule.Recipients.member.1=postmaster%40example.com\
         &Rule.Actions.member.1.S3Action.BucketName=mail-archive\
         &Rule.Actions.member.2.StopAction.Scope=RuleSet\
         &Rule.ScanEnabled=false"
    );
}

#[test]
fn list_identities_marshals_scalars() {
    let input = ListIdentitiesInput::builder()
        .identity_type(ses::model::IdentityType::Domain)
        .max_items(10)
        .build();
    let request = input.request().expect("valid input");
    assert_eq!(
        body_str(&request),
        "Action=ListIdentities&Version=2010-12-01&IdentityType=Domain&MaxItems=10"
    );
}

#[test]
fn send_email_response_unmarshals_the_result_wrapper() {
    let body = r#"<SendEmailResponse xmlns="http://ses.amazonaws.com/doc/2010-12-01/">
        <SendEmailResult>
            <MessageId>0000014a-f4d4-4f89-91bd-deba0cea6a43</MessageId>
        </SendEmailResult>
        <ResponseMetadata>
            <RequestId>d5964849-c866-11e0-9beb-01a62d68c57f</RequestId>
        </ResponseMetadata>
    </SendEmailResponse>"#;
    let output = parse_send_email_response(&response(200, body)).expect("valid body");
    assert_eq!(
        output.message_id.as_deref(),
        Some("0000014a-f4d4-4f89-91bd-deba0cea6a43")
    );
}

#[test]
fn list_identities_response_preserves_member_order() {
    let body = r#"<ListIdentitiesResponse>
        <ListIdentitiesResult>
            <Identities>
                <member>example.com</member>
                <member>user@example.com</member>
                <member>other.example.com</member>
            </Identities>
            <NextToken>page-2</NextToken>
        </ListIdentitiesResult>
    </ListIdentitiesResponse>"#;
    let output = parse_list_identities_response(&response(200, body)).expect("valid body");
    assert_eq!(
        output.identities,
        Some(vec![
            "example.com".to_string(),
            "user@example.com".to_string(),
            "other.example.com".to_string(),
        ])
    );
    assert_eq!(output.next_token.as_deref(), Some("page-2"));
}

#[test]
fn verification_attributes_unmarshal_every_map_entry() {
    let body = r#"<GetIdentityVerificationAttributesResponse>
        <GetIdentityVerificationAttributesResult>
            <VerificationAttributes>
                <entry>
                    <key>domain.example.com</key>
                    <value>
                        <VerificationStatus>Pending</VerificationStatus>
                        <VerificationToken>QTKknzFg2J4ygwa+XvHAxUl1hyHoY0gVfZdfjIedHZ0=</VerificationToken>
                    </value>
                </entry>
                <entry>
                    <key>user@example.com</key>
                    <value>
                        <VerificationStatus>Success</VerificationStatus>
                    </value>
                </entry>
            </VerificationAttributes>
        </GetIdentityVerificationAttributesResult>
    </GetIdentityVerificationAttributesResponse>"#;
    let output = parse_get_identity_verification_attributes_response(&response(200, body))
        .expect("valid body");
    let map = output.verification_attributes.expect("map decoded");
    assert_eq!(map.len(), 2);
    assert_eq!(
        map["domain.example.com"].verification_status,
        Some(VerificationStatus::Pending)
    );
    assert_eq!(
        map["domain.example.com"].verification_token.as_deref(),
        Some("QTKknzFg2J4ygwa+XvHAxUl1hyHoY0gVfZdfjIedHZ0=")
    );
    assert_eq!(
        map["user@example.com"].verification_status,
        Some(VerificationStatus::Success)
    );
    assert_eq!(map["user@example.com"].verification_token, None);
}

#[test]
fn describe_receipt_rule_unmarshals_nested_actions_and_skips_unknown_tags() {
    let body = r#"<DescribeReceiptRuleResponse>
        <DescribeReceiptRuleResult>
            <Rule>
                <Name>store-then-stop</Name>
                <Enabled>true</Enabled>
                <TlsPolicy>Require</TlsPolicy>
                <SomeFutureField><Deep>ignored</Deep></SomeFutureField>
                <Recipients>
                    <member>postmaster@example.com</member>
                </Recipients>
                <Actions>
                    <member>
                        <S3Action>
                            <BucketName>mail-archive</BucketName>
                            <ObjectKeyPrefix>inbound/</ObjectKeyPrefix>
                        </S3Action>
                    </member>
                    <member>
                        <StopAction>
                            <Scope>RuleSet</Scope>
                        </StopAction>
                    </member>
                </Actions>
                <ScanEnabled>false</ScanEnabled>
            </Rule>
        </DescribeReceiptRuleResult>
    </DescribeReceiptRuleResponse>"#;
    let output = parse_describe_receipt_rule_response(&response(200, body)).expect("valid body");
    let rule = output.rule.expect("rule decoded");
    assert_eq!(rule.name.as_deref(), Some("store-then-stop"));
    assert_eq!(rule.enabled, Some(true));
    assert_eq!(rule.tls_policy, Some(TlsPolicy::Require));
    assert_eq!(
        rule.recipients,
        Some(vec!["postmaster@example.com".to_string()])
    );
    assert_eq!(rule.scan_enabled, Some(false));

    let actions = rule.actions.expect("actions decoded");
    assert_eq!(actions.len(), 2);
    let s3 = actions[0].s3_action.as_ref().expect("first action is S3");
    assert_eq!(s3.bucket_name.as_deref(), Some("mail-archive"));
    assert_eq!(s3.object_key_prefix.as_deref(), Some("inbound/"));
    let stop = actions[1].stop_action.as_ref().expect("second action is Stop");
    assert_eq!(stop.scope, Some(StopScope::RuleSet));
}

#[test]
fn error_responses_dispatch_to_the_matching_fault() {
    let body = r#"<ErrorResponse>
        <Error>
            <Type>Sender</Type>
            <Code>MessageRejected</Code>
            <Message>Email address is not verified.</Message>
        </Error>
        <RequestId>b9f2d1c2</RequestId>
    </ErrorResponse>"#;
    match parse_send_email_response(&response(400, body)) {
        Err(Error::MessageRejectedException(err)) => {
            assert_eq!(err.message(), Some("Email address is not verified."));
        }
        other => panic!("expected MessageRejected, got {:?}", other),
    }
}

#[test]
fn fault_extras_are_looked_up_by_path() {
    let body = r#"<ErrorResponse>
        <Error>
            <Type>Sender</Type>
            <Code>InvalidS3Configuration</Code>
            <Message>Could not write to bucket</Message>
            <Bucket>mail-archive</Bucket>
        </Error>
    </ErrorResponse>"#;
    match parse_send_email_response(&response(400, body)) {
        Err(Error::InvalidS3ConfigurationException(err)) => {
            assert_eq!(err.bucket.as_deref(), Some("mail-archive"));
        }
        other => panic!("expected InvalidS3Configuration, got {:?}", other),
    }
}

#[test]
fn describe_receipt_rule_request_binds_both_names() {
    let input = DescribeReceiptRuleInput::builder()
        .rule_set_name("default-rules")
        .rule_name("store-then-stop")
        .build();
    let request = input.request().expect("valid input");
    assert_eq!(
        body_str(&request),
        "Action=DescribeReceiptRule&Version=2010-12-01\
         &RuleSetName=default-rules&RuleName=store-then-stop"
    );
}

#[test]
fn get_identity_verification_attributes_request_lists_identities_in_order() {
    let input = GetIdentityVerificationAttributesInput::builder()
        .identities("a.example.com")
        .identities("b.example.com")
        .build();
    let request = input.request().expect("valid input");
    assert_eq!(
        body_str(&request),
        "Action=GetIdentityVerificationAttributes&Version=2010-12-01\
         &Identities.member.1=a.example.com&Identities.member.2=b.example.com"
    );
}
