// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Error types for the image LSB codec.

use core::fmt;

use crate::ErrorCode;

/// Errors that can occur while embedding into or extracting from a pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// Width, height and sample count do not describe an RGBA buffer.
    InvalidDimensions,
    /// The payload exceeds the buffer's capacity. Nothing was written.
    PayloadTooLarge { len: usize, capacity: usize },
    /// The bitstream ran past the end of the buffer.
    BufferExhausted,
    /// The recovered header does not start with the magic bytes.
    NoPayloadFound,
    /// The header carries a version this codec does not understand.
    UnsupportedVersion(u8),
    /// The header declares more payload than the buffer can hold.
    InvalidPayloadLength { len: u32, capacity: usize },
    /// The extracted payload does not match the header checksum.
    ChecksumMismatch { expected: u32, actual: u32 },
    /// The extracted payload is intact but is not UTF-8 text.
    InvalidUtf8,
}

impl ImageError {
    /// Stable client-facing code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::PayloadTooLarge { .. } | Self::InvalidUtf8 => ErrorCode::InvalidInput,
            _ => ErrorCode::InvalidImage,
        }
    }
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions => write!(f, "pixel buffer does not match its dimensions"),
            Self::PayloadTooLarge { len, capacity } => write!(
                f,
                "payload is too large for this image (max {capacity} bytes, got {len})"
            ),
            Self::BufferExhausted => write!(f, "image does not contain a complete payload"),
            Self::NoPayloadFound => write!(f, "no embedded payload found in this image"),
            Self::UnsupportedVersion(v) => write!(f, "unsupported payload version ({v})"),
            Self::InvalidPayloadLength { len, capacity } => write!(
                f,
                "embedded payload length {len} is invalid for this image (max {capacity})"
            ),
            Self::ChecksumMismatch { expected, actual } => write!(
                f,
                "embedded payload checksum mismatch (expected {expected:08x}, got {actual:08x})"
            ),
            Self::InvalidUtf8 => write!(f, "embedded payload is not valid UTF-8 text"),
        }
    }
}

impl std::error::Error for ImageError {}

pub type Result<T> = std::result::Result<T, ImageError>;
