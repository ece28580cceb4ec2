// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Error types for the text codecs.

use std::fmt;

use crate::ErrorCode;

/// Errors that can occur while encoding or decoding a single text codec step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Malformed Base64 alphabet or padding.
    InvalidEncoding,
    /// Emoji input does not split into whole (high, low) nibble pairs.
    OddSymbolCount { count: usize },
    /// A symbol outside the 16-symbol emoji alphabet was found.
    UnknownSymbol { position: usize, symbol: char },
    /// The decoded bytes are not valid UTF-8.
    InvalidUtf8,
    /// The number of zero-width markers is not a whole number of bytes.
    LengthNotMultipleOfEight { count: usize },
    /// Embed-in-cover mode was requested without any cover text.
    MissingCoverText,
}

impl CodecError {
    /// Stable client-facing code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MissingCoverText => ErrorCode::InvalidOptions,
            _ => ErrorCode::InvalidInput,
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEncoding => write!(f, "input is not valid Base64"),
            Self::OddSymbolCount { count } => {
                write!(f, "invalid emoji sequence: odd symbol count ({count})")
            }
            Self::UnknownSymbol { position, symbol } => write!(
                f,
                "invalid emoji sequence: unknown symbol U+{:04X} at position {position}",
                *symbol as u32
            ),
            Self::InvalidUtf8 => write!(f, "decoded bytes are not valid UTF-8"),
            Self::LengthNotMultipleOfEight { count } => write!(
                f,
                "encoded string length must be a multiple of 8, but was {count}"
            ),
            Self::MissingCoverText => write!(f, "cover text is required for embed-in-cover mode"),
        }
    }
}

impl std::error::Error for CodecError {}

pub type Result<T> = std::result::Result<T, CodecError>;
