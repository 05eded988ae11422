/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Pull parsing for XML response bodies.
//!
//! Only decoding is provided: the Query protocol sends requests as
//! form-encoded parameters, so nothing in this workspace ever writes
//! XML.

pub mod decode;
mod unescape;
