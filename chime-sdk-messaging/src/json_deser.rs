/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Unmarshals JSON response bodies into outputs and models. Unknown
//! object keys are skipped, never an error.

use crate::error;
use crate::model::{
    Channel, ChannelMessage, ChannelMessageStatus, ChannelMessageStatusStructure,
    ChannelMessageSummary, ChannelSummary, ErrorCode, Identity, MessageAttributeValue,
};
use crate::output::{
    CreateChannelOutput, DescribeChannelOutput, GetChannelMessageOutput,
    ListChannelMessagesOutput, ListChannelsOutput, SendChannelMessageOutput,
    UpdateChannelReadMarkerOutput,
};
use std::collections::HashMap;
use std::iter::Peekable;
use wire_json::deserialize::{
    expect_bool_or_null, expect_start_object, expect_string_or_null, expect_timestamp_or_null,
    json_token_iter, skip_value, Error, Token,
};
use wire_types::instant::Format;

pub(crate) fn create_channel_output(body: &[u8]) -> Result<CreateChannelOutput, Error> {
    let mut tokens = json_token_iter(body).peekable();
    expect_start_object(tokens.next())?;
    let mut builder = CreateChannelOutput::builder();
    loop {
        match tokens.next().transpose()? {
            Some(Token::EndObject { .. }) => break,
            Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                "ChannelArn" => {
                    builder = builder.set_channel_arn(expect_string_or_null(tokens.next())?)
                }
                _ => skip_value(&mut tokens)?,
            },
            _ => return Err(Error::custom("expected object key or end object")),
        }
    }
    expect_eos(tokens)?;
    Ok(builder.build())
}

pub(crate) fn describe_channel_output(body: &[u8]) -> Result<DescribeChannelOutput, Error> {
    let mut tokens = json_token_iter(body).peekable();
    expect_start_object(tokens.next())?;
    let mut builder = DescribeChannelOutput::builder();
    loop {
        match tokens.next().transpose()? {
            Some(Token::EndObject { .. }) => break,
            Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                "Channel" => builder = builder.set_channel(deser_structure_channel(&mut tokens)?),
                _ => skip_value(&mut tokens)?,
            },
            _ => return Err(Error::custom("expected object key or end object")),
        }
    }
    expect_eos(tokens)?;
    Ok(builder.build())
}

pub(crate) fn list_channels_output(body: &[u8]) -> Result<ListChannelsOutput, Error> {
    let mut tokens = json_token_iter(body).peekable();
    expect_start_object(tokens.next())?;
    let mut builder = ListChannelsOutput::builder();
    loop {
        match tokens.next().transpose()? {
            Some(Token::EndObject { .. }) => break,
            Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                "Channels" => {
                    builder = builder.set_channels(deser_list_channel_summaries(&mut tokens)?)
                }
                "NextToken" => {
                    builder = builder.set_next_token(expect_string_or_null(tokens.next())?)
                }
                _ => skip_value(&mut tokens)?,
            },
            _ => return Err(Error::custom("expected object key or end object")),
        }
    }
    expect_eos(tokens)?;
    Ok(builder.build())
}

pub(crate) fn send_channel_message_output(body: &[u8]) -> Result<SendChannelMessageOutput, Error> {
    let mut tokens = json_token_iter(body).peekable();
    expect_start_object(tokens.next())?;
    let mut builder = SendChannelMessageOutput::builder();
    loop {
        match tokens.next().transpose()? {
            Some(Token::EndObject { .. }) => break,
            Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                "ChannelArn" => {
                    builder = builder.set_channel_arn(expect_string_or_null(tokens.next())?)
                }
                "MessageId" => {
                    builder = builder.set_message_id(expect_string_or_null(tokens.next())?)
                }
                "Status" => {
                    builder = builder.set_status(deser_structure_status(&mut tokens)?)
                }
                _ => skip_value(&mut tokens)?,
            },
            _ => return Err(Error::custom("expected object key or end object")),
        }
    }
    expect_eos(tokens)?;
    Ok(builder.build())
}

pub(crate) fn get_channel_message_output(body: &[u8]) -> Result<GetChannelMessageOutput, Error> {
    let mut tokens = json_token_iter(body).peekable();
    expect_start_object(tokens.next())?;
    let mut builder = GetChannelMessageOutput::builder();
    loop {
        match tokens.next().transpose()? {
            Some(Token::EndObject { .. }) => break,
            Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                "ChannelMessage" => {
                    builder =
                        builder.set_channel_message(deser_structure_channel_message(&mut tokens)?)
                }
                _ => skip_value(&mut tokens)?,
            },
            _ => return Err(Error::custom("expected object key or end object")),
        }
    }
    expect_eos(tokens)?;
    Ok(builder.build())
}

pub(crate) fn list_channel_messages_output(
    body: &[u8],
) -> Result<ListChannelMessagesOutput, Error> {
    let mut tokens = json_token_iter(body).peekable();
    expect_start_object(tokens.next())?;
    let mut builder = ListChannelMessagesOutput::builder();
    loop {
        match tokens.next().transpose()? {
            Some(Token::EndObject { .. }) => break,
            Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                "ChannelArn" => {
                    builder = builder.set_channel_arn(expect_string_or_null(tokens.next())?)
                }
                "NextToken" => {
                    builder = builder.set_next_token(expect_string_or_null(tokens.next())?)
                }
                "ChannelMessages" => {
                    builder = builder
                        .set_channel_messages(deser_list_channel_message_summaries(&mut tokens)?)
                }
                _ => skip_value(&mut tokens)?,
            },
            _ => return Err(Error::custom("expected object key or end object")),
        }
    }
    expect_eos(tokens)?;
    Ok(builder.build())
}

pub(crate) fn update_channel_read_marker_output(
    body: &[u8],
) -> Result<UpdateChannelReadMarkerOutput, Error> {
    let mut tokens = json_token_iter(body).peekable();
    expect_start_object(tokens.next())?;
    let mut builder = UpdateChannelReadMarkerOutput::builder();
    loop {
        match tokens.next().transpose()? {
            Some(Token::EndObject { .. }) => break,
            Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                "ChannelArn" => {
                    builder = builder.set_channel_arn(expect_string_or_null(tokens.next())?)
                }
                _ => skip_value(&mut tokens)?,
            },
            _ => return Err(Error::custom("expected object key or end object")),
        }
    }
    expect_eos(tokens)?;
    Ok(builder.build())
}

macro_rules! deser_modeled_exception {
    ($fn_name:ident, $typ:ident) => {
        pub(crate) fn $fn_name(body: &[u8]) -> Result<error::$typ, Error> {
            let (code, message) = deser_error_fields(body)?;
            Ok(error::$typ::builder()
                .set_code(code)
                .set_message(message)
                .build())
        }
    };
}

deser_modeled_exception!(bad_request_exception, BadRequestException);
deser_modeled_exception!(conflict_exception, ConflictException);
deser_modeled_exception!(forbidden_exception, ForbiddenException);
deser_modeled_exception!(not_found_exception, NotFoundException);
deser_modeled_exception!(resource_limit_exceeded_exception, ResourceLimitExceededException);
deser_modeled_exception!(service_failure_exception, ServiceFailureException);
deser_modeled_exception!(service_unavailable_exception, ServiceUnavailableException);
deser_modeled_exception!(throttled_client_exception, ThrottledClientException);
deser_modeled_exception!(unauthorized_client_exception, UnauthorizedClientException);

/// Every modeled fault carries the same `Code` + `Message` body shape.
fn deser_error_fields(body: &[u8]) -> Result<(Option<ErrorCode>, Option<String>), Error> {
    let mut tokens = json_token_iter(body).peekable();
    expect_start_object(tokens.next())?;
    let mut code = None;
    let mut message = None;
    loop {
        match tokens.next().transpose()? {
            Some(Token::EndObject { .. }) => break,
            Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                "Code" => {
                    code = expect_string_or_null(tokens.next())?
                        .map(|value| ErrorCode::from(value.as_str()))
                }
                "Message" | "message" => message = expect_string_or_null(tokens.next())?,
                _ => skip_value(&mut tokens)?,
            },
            _ => return Err(Error::custom("expected object key or end object")),
        }
    }
    Ok((code, message))
}

fn deser_structure_channel<'a, I>(tokens: &mut Peekable<I>) -> Result<Option<Channel>, Error>
where
    I: Iterator<Item = Result<Token<'a>, Error>>,
{
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::StartObject { .. }) => {
            let mut builder = Channel::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(Token::EndObject { .. }) => break,
                    Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                        "Name" => builder = builder.set_name(expect_string_or_null(tokens.next())?),
                        "ChannelArn" => {
                            builder = builder.set_channel_arn(expect_string_or_null(tokens.next())?)
                        }
                        "Mode" => {
                            builder = builder.set_mode(
                                expect_string_or_null(tokens.next())?
                                    .map(|value| value.as_str().into()),
                            )
                        }
                        "Privacy" => {
                            builder = builder.set_privacy(
                                expect_string_or_null(tokens.next())?
                                    .map(|value| value.as_str().into()),
                            )
                        }
                        "Metadata" => {
                            builder = builder.set_metadata(expect_string_or_null(tokens.next())?)
                        }
                        "CreatedBy" => {
                            builder = builder.set_created_by(deser_structure_identity(tokens)?)
                        }
                        "CreatedTimestamp" => {
                            builder = builder.set_created_timestamp(expect_timestamp_or_null(
                                tokens.next(),
                                Format::EpochSeconds,
                            )?)
                        }
                        "LastMessageTimestamp" => {
                            builder = builder.set_last_message_timestamp(expect_timestamp_or_null(
                                tokens.next(),
                                Format::EpochSeconds,
                            )?)
                        }
                        "LastUpdatedTimestamp" => {
                            builder = builder.set_last_updated_timestamp(expect_timestamp_or_null(
                                tokens.next(),
                                Format::EpochSeconds,
                            )?)
                        }
                        _ => skip_value(tokens)?,
                    },
                    _ => return Err(Error::custom("expected object key or end object")),
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(Error::custom("expected start object or null")),
    }
}

fn deser_structure_channel_summary<'a, I>(
    tokens: &mut Peekable<I>,
) -> Result<Option<ChannelSummary>, Error>
where
    I: Iterator<Item = Result<Token<'a>, Error>>,
{
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::StartObject { .. }) => {
            let mut builder = ChannelSummary::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(Token::EndObject { .. }) => break,
                    Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                        "Name" => builder = builder.set_name(expect_string_or_null(tokens.next())?),
                        "ChannelArn" => {
                            builder = builder.set_channel_arn(expect_string_or_null(tokens.next())?)
                        }
                        "Mode" => {
                            builder = builder.set_mode(
                                expect_string_or_null(tokens.next())?
                                    .map(|value| value.as_str().into()),
                            )
                        }
                        "Privacy" => {
                            builder = builder.set_privacy(
                                expect_string_or_null(tokens.next())?
                                    .map(|value| value.as_str().into()),
                            )
                        }
                        "Metadata" => {
                            builder = builder.set_metadata(expect_string_or_null(tokens.next())?)
                        }
                        "LastMessageTimestamp" => {
                            builder = builder.set_last_message_timestamp(expect_timestamp_or_null(
                                tokens.next(),
                                Format::EpochSeconds,
                            )?)
                        }
                        _ => skip_value(tokens)?,
                    },
                    _ => return Err(Error::custom("expected object key or end object")),
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(Error::custom("expected start object or null")),
    }
}

fn deser_structure_channel_message<'a, I>(
    tokens: &mut Peekable<I>,
) -> Result<Option<ChannelMessage>, Error>
where
    I: Iterator<Item = Result<Token<'a>, Error>>,
{
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::StartObject { .. }) => {
            let mut builder = ChannelMessage::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(Token::EndObject { .. }) => break,
                    Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                        "ChannelArn" => {
                            builder = builder.set_channel_arn(expect_string_or_null(tokens.next())?)
                        }
                        "MessageId" => {
                            builder = builder.set_message_id(expect_string_or_null(tokens.next())?)
                        }
                        "Content" => {
                            builder = builder.set_content(expect_string_or_null(tokens.next())?)
                        }
                        "Metadata" => {
                            builder = builder.set_metadata(expect_string_or_null(tokens.next())?)
                        }
                        "Type" => {
                            builder = builder.set_type(
                                expect_string_or_null(tokens.next())?
                                    .map(|value| value.as_str().into()),
                            )
                        }
                        "CreatedTimestamp" => {
                            builder = builder.set_created_timestamp(expect_timestamp_or_null(
                                tokens.next(),
                                Format::EpochSeconds,
                            )?)
                        }
                        "LastEditedTimestamp" => {
                            builder = builder.set_last_edited_timestamp(expect_timestamp_or_null(
                                tokens.next(),
                                Format::EpochSeconds,
                            )?)
                        }
                        "LastUpdatedTimestamp" => {
                            builder = builder.set_last_updated_timestamp(expect_timestamp_or_null(
                                tokens.next(),
                                Format::EpochSeconds,
                            )?)
                        }
                        "Sender" => {
                            builder = builder.set_sender(deser_structure_identity(tokens)?)
                        }
                        "Redacted" => {
                            builder = builder.set_redacted(expect_bool_or_null(tokens.next())?)
                        }
                        "Persistence" => {
                            builder = builder.set_persistence(
                                expect_string_or_null(tokens.next())?
                                    .map(|value| value.as_str().into()),
                            )
                        }
                        "Status" => builder = builder.set_status(deser_structure_status(tokens)?),
                        "MessageAttributes" => {
                            builder = builder
                                .set_message_attributes(deser_map_message_attributes(tokens)?)
                        }
                        _ => skip_value(tokens)?,
                    },
                    _ => return Err(Error::custom("expected object key or end object")),
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(Error::custom("expected start object or null")),
    }
}

fn deser_structure_channel_message_summary<'a, I>(
    tokens: &mut Peekable<I>,
) -> Result<Option<ChannelMessageSummary>, Error>
where
    I: Iterator<Item = Result<Token<'a>, Error>>,
{
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::StartObject { .. }) => {
            let mut builder = ChannelMessageSummary::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(Token::EndObject { .. }) => break,
                    Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                        "MessageId" => {
                            builder = builder.set_message_id(expect_string_or_null(tokens.next())?)
                        }
                        "Content" => {
                            builder = builder.set_content(expect_string_or_null(tokens.next())?)
                        }
                        "Metadata" => {
                            builder = builder.set_metadata(expect_string_or_null(tokens.next())?)
                        }
                        "Type" => {
                            builder = builder.set_type(
                                expect_string_or_null(tokens.next())?
                                    .map(|value| value.as_str().into()),
                            )
                        }
                        "CreatedTimestamp" => {
                            builder = builder.set_created_timestamp(expect_timestamp_or_null(
                                tokens.next(),
                                Format::EpochSeconds,
                            )?)
                        }
                        "LastUpdatedTimestamp" => {
                            builder = builder.set_last_updated_timestamp(expect_timestamp_or_null(
                                tokens.next(),
                                Format::EpochSeconds,
                            )?)
                        }
                        "LastEditedTimestamp" => {
                            builder = builder.set_last_edited_timestamp(expect_timestamp_or_null(
                                tokens.next(),
                                Format::EpochSeconds,
                            )?)
                        }
                        "Sender" => {
                            builder = builder.set_sender(deser_structure_identity(tokens)?)
                        }
                        "Redacted" => {
                            builder = builder.set_redacted(expect_bool_or_null(tokens.next())?)
                        }
                        "Status" => builder = builder.set_status(deser_structure_status(tokens)?),
                        "MessageAttributes" => {
                            builder = builder
                                .set_message_attributes(deser_map_message_attributes(tokens)?)
                        }
                        _ => skip_value(tokens)?,
                    },
                    _ => return Err(Error::custom("expected object key or end object")),
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(Error::custom("expected start object or null")),
    }
}

fn deser_structure_identity<'a, I>(tokens: &mut Peekable<I>) -> Result<Option<Identity>, Error>
where
    I: Iterator<Item = Result<Token<'a>, Error>>,
{
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::StartObject { .. }) => {
            let mut builder = Identity::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(Token::EndObject { .. }) => break,
                    Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                        "Arn" => builder = builder.set_arn(expect_string_or_null(tokens.next())?),
                        "Name" => builder = builder.set_name(expect_string_or_null(tokens.next())?),
                        _ => skip_value(tokens)?,
                    },
                    _ => return Err(Error::custom("expected object key or end object")),
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(Error::custom("expected start object or null")),
    }
}

fn deser_structure_status<'a, I>(
    tokens: &mut Peekable<I>,
) -> Result<Option<ChannelMessageStatusStructure>, Error>
where
    I: Iterator<Item = Result<Token<'a>, Error>>,
{
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::StartObject { .. }) => {
            let mut builder = ChannelMessageStatusStructure::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(Token::EndObject { .. }) => break,
                    Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                        "Value" => {
                            builder = builder.set_value(
                                expect_string_or_null(tokens.next())?
                                    .map(|value| ChannelMessageStatus::from(value.as_str())),
                            )
                        }
                        "Detail" => {
                            builder = builder.set_detail(expect_string_or_null(tokens.next())?)
                        }
                        _ => skip_value(tokens)?,
                    },
                    _ => return Err(Error::custom("expected object key or end object")),
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(Error::custom("expected start object or null")),
    }
}

fn deser_structure_message_attribute_value<'a, I>(
    tokens: &mut Peekable<I>,
) -> Result<Option<MessageAttributeValue>, Error>
where
    I: Iterator<Item = Result<Token<'a>, Error>>,
{
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::StartObject { .. }) => {
            let mut builder = MessageAttributeValue::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(Token::EndObject { .. }) => break,
                    Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                        "StringValues" => {
                            builder = builder.set_string_values(deser_list_strings(tokens)?)
                        }
                        _ => skip_value(tokens)?,
                    },
                    _ => return Err(Error::custom("expected object key or end object")),
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(Error::custom("expected start object or null")),
    }
}

fn deser_list_channel_summaries<'a, I>(
    tokens: &mut Peekable<I>,
) -> Result<Option<Vec<ChannelSummary>>, Error>
where
    I: Iterator<Item = Result<Token<'a>, Error>>,
{
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                if let Some(Ok(Token::EndArray { .. })) = tokens.peek() {
                    tokens.next().transpose()?;
                    break;
                }
                if let Some(item) = deser_structure_channel_summary(tokens)? {
                    items.push(item);
                }
            }
            Ok(Some(items))
        }
        _ => Err(Error::custom("expected start array or null")),
    }
}

fn deser_list_channel_message_summaries<'a, I>(
    tokens: &mut Peekable<I>,
) -> Result<Option<Vec<ChannelMessageSummary>>, Error>
where
    I: Iterator<Item = Result<Token<'a>, Error>>,
{
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                if let Some(Ok(Token::EndArray { .. })) = tokens.peek() {
                    tokens.next().transpose()?;
                    break;
                }
                if let Some(item) = deser_structure_channel_message_summary(tokens)? {
                    items.push(item);
                }
            }
            Ok(Some(items))
        }
        _ => Err(Error::custom("expected start array or null")),
    }
}

fn deser_list_strings<'a, I>(tokens: &mut Peekable<I>) -> Result<Option<Vec<String>>, Error>
where
    I: Iterator<Item = Result<Token<'a>, Error>>,
{
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                if let Some(Ok(Token::EndArray { .. })) = tokens.peek() {
                    tokens.next().transpose()?;
                    break;
                }
                if let Some(item) = expect_string_or_null(tokens.next())? {
                    items.push(item);
                }
            }
            Ok(Some(items))
        }
        _ => Err(Error::custom("expected start array or null")),
    }
}

fn deser_map_message_attributes<'a, I>(
    tokens: &mut Peekable<I>,
) -> Result<Option<HashMap<String, MessageAttributeValue>>, Error>
where
    I: Iterator<Item = Result<Token<'a>, Error>>,
{
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::StartObject { .. }) => {
            let mut map = HashMap::new();
            loop {
                match tokens.next().transpose()? {
                    Some(Token::EndObject { .. }) => break,
                    Some(Token::ObjectKey { key, .. }) => {
                        let key = key.to_unescaped()?.to_string();
                        if let Some(value) = deser_structure_message_attribute_value(tokens)? {
                            map.insert(key, value);
                        }
                    }
                    _ => return Err(Error::custom("expected object key or end object")),
                }
            }
            Ok(Some(map))
        }
        _ => Err(Error::custom("expected start object or null")),
    }
}

fn expect_eos<'a, I>(mut tokens: Peekable<I>) -> Result<(), Error>
where
    I: Iterator<Item = Result<Token<'a>, Error>>,
{
    if tokens.next().is_some() {
        return Err(Error::custom("found more JSON tokens after the response object"));
    }
    Ok(())
}
