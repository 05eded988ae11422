/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Streaming JSON support for the JSON-protocol transform crates.
//!
//! [`serialize`] writes JSON objects and arrays directly into a
//! `String`; [`deserialize`] tokenizes a byte slice without building an
//! intermediate document. Absent model fields are simply never written,
//! and unknown object keys can be skipped, which is all the JSON
//! marshalling layer needs.

pub mod deserialize;
mod escape;
pub mod serialize;
