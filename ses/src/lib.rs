/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Request marshalling and response unmarshalling for Amazon Simple
//! Email Service.
//!
//! SES speaks the AWS Query protocol: every operation POSTs
//! form-encoded `Action=<name>&Version=2010-12-01&...` parameters to
//! `/` and receives an XML response. This crate stops at the wire
//! boundary: inputs marshal into [`http::Request`]s and
//! `http::Response` bodies unmarshal into typed outputs. Transport,
//! signing, and retries live elsewhere.

pub mod error;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;

mod query_ser;
mod xml_deser;
mod xml_errors;

pub use crate::error::Error;
