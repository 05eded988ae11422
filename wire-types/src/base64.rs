/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! A thin wrapper over `base64-simd` for blob-valued fields.

use base64_simd::Base64;

/// Encode `input` into base64 using the standard base64 alphabet.
pub fn encode(input: impl AsRef<[u8]>) -> String {
    Base64::STANDARD
        .encode_to_boxed_str(input.as_ref())
        .into_string()
}

/// Decode `input` from base64 using the standard base64 alphabet.
///
/// Returns an error if the input is not valid base64.
pub fn decode(input: impl AsRef<str>) -> Result<Vec<u8>, base64_simd::Error> {
    Base64::STANDARD
        .decode_to_boxed_bytes(input.as_ref().as_bytes())
        .map(|bytes| bytes.into_vec())
}

#[cfg(test)]
mod test {
    use super::{decode, encode};

    #[test]
    fn round_trip() {
        assert_eq!(encode(b"hello"), "aGVsbG8=");
        assert_eq!(decode("aGVsbG8=").unwrap(), b"hello");
        assert_eq!(encode(b""), "");
        assert!(decode("!!!").is_err());
    }
}
