// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Base64 text codec (RFC 4648 standard alphabet, padded).

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use super::error::{CodecError, Result};

/// Base64-encode raw bytes.
pub fn encode_bytes(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Base64-decode to raw bytes.
///
/// # Errors
/// [`CodecError::InvalidEncoding`] on a bad alphabet character, bad padding
/// or a truncated final quantum.
pub fn decode_bytes(input: &str) -> Result<Vec<u8>> {
    STANDARD.decode(input).map_err(|_| CodecError::InvalidEncoding)
}

/// UTF-8 encode `input`, then Base64-encode the bytes.
pub fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

/// Inverse of [`encode`].
///
/// # Errors
/// - [`CodecError::InvalidEncoding`] if `input` is not valid Base64.
/// - [`CodecError::InvalidUtf8`] if the decoded bytes are not UTF-8.
pub fn decode(input: &str) -> Result<String> {
    super::utf8(decode_bytes(input)?)
}
