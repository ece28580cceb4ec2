// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Stable client-facing error codes.
//!
//! Every error type in this crate maps onto one of these through its
//! `code()` method. The string names are part of the public contract and
//! are meant for API responses and UI message lookup.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Coarse failure category shared by all subsystems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The carrier text or bytes are malformed for the selected codec.
    InvalidInput,
    /// The pipeline itself is missing or malformed.
    InvalidPipeline,
    /// A step is not supported in this context (e.g. the cipher step).
    UnsupportedStep,
    /// A step's options are missing or invalid.
    InvalidOptions,
    /// Encryption or decryption failed.
    CryptoError,
    /// The pixel buffer is unusable or holds no valid payload.
    InvalidImage,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::InvalidPipeline => "INVALID_PIPELINE",
            Self::UnsupportedStep => "UNSUPPORTED_STEP",
            Self::InvalidOptions => "INVALID_OPTIONS",
            Self::CryptoError => "CRYPTO_ERROR",
            Self::InvalidImage => "INVALID_IMAGE",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_name_matches_as_str() {
        for code in [
            ErrorCode::InvalidInput,
            ErrorCode::InvalidPipeline,
            ErrorCode::UnsupportedStep,
            ErrorCode::InvalidOptions,
            ErrorCode::CryptoError,
            ErrorCode::InvalidImage,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }
}
