// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Reversible text codecs.
//!
//! Each codec maps a UTF-8 string to a carrier string and back:
//!
//! - **Base64**: standard alphabet with padding.
//! - **Emoji**: every nibble becomes one of 16 fixed emoji, high nibble first.
//! - **Zero-width**: every bit becomes one of two invisible code points,
//!   MSB first, optionally appended to visible cover text.
//!
//! All codecs are stateless free functions. Decoders never return partial
//! output: the whole input is validated before a string is produced.

pub mod base64;
pub mod emoji;
pub mod error;
pub mod zero_width;

pub use error::CodecError;

/// Decode UTF-8 bytes produced by a codec back into a string.
pub(crate) fn utf8(bytes: Vec<u8>) -> error::Result<String> {
    String::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8)
}
