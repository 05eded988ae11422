/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Request marshalling and response unmarshalling for Amazon Chime SDK
//! Messaging.
//!
//! The service speaks REST with JSON bodies
//! (`application/x-amz-json-1.0`); every operation carries the caller's
//! `AppInstanceUserArn` in the mandatory `x-amz-chime-bearer` header.
//! This crate stops at the wire boundary: inputs marshal into
//! [`http::Request`]s and `http::Response` bodies unmarshal into typed
//! outputs. Transport, signing, and retries live elsewhere.

pub mod error;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;

mod json_deser;
mod json_errors;
mod json_ser;

pub use crate::error::Error;
