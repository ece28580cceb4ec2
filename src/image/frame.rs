// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Payload frame construction and parsing.
//!
//! ```text
//! [4 bytes ] magic "STG0"
//! [1 byte  ] version (1)
//! [3 bytes ] reserved, zero on write, ignored on read
//! [4 bytes ] payload length (big-endian u32)
//! [4 bytes ] CRC-32 of the payload (big-endian u32)
//! [N bytes ] payload
//! ```

use super::error::{ImageError, Result};

/// Magic bytes that open every frame.
pub const MAGIC: [u8; 4] = *b"STG0";
/// The only frame version this codec writes or reads.
pub const VERSION: u8 = 1;
/// Fixed header size in bytes.
pub const HEADER_LEN: usize = 16;

/// Parsed frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Declared payload length in bytes.
    pub length: u32,
    /// CRC-32 of the payload.
    pub crc32: u32,
}

/// CRC-32 (IEEE) of `data`.
pub fn checksum(data: &[u8]) -> u32 {
    crc32fast::hash(data)
}

/// Build the 16-byte header for `payload`.
///
/// # Errors
/// [`ImageError::PayloadTooLarge`] if the length does not fit the u32 field.
pub fn build_header(payload: &[u8]) -> Result<[u8; HEADER_LEN]> {
    let length = u32::try_from(payload.len()).map_err(|_| ImageError::PayloadTooLarge {
        len: payload.len(),
        capacity: u32::MAX as usize,
    })?;

    let mut header = [0u8; HEADER_LEN];
    header[..4].copy_from_slice(&MAGIC);
    header[4] = VERSION;
    // [5..8) reserved, already zero.
    header[8..12].copy_from_slice(&length.to_be_bytes());
    header[12..16].copy_from_slice(&checksum(payload).to_be_bytes());
    Ok(header)
}

/// Parse and check a recovered header.
///
/// # Errors
/// - [`ImageError::NoPayloadFound`] if the magic bytes do not match.
/// - [`ImageError::UnsupportedVersion`] for any version other than [`VERSION`].
pub fn parse_header(header: &[u8; HEADER_LEN]) -> Result<Header> {
    if header[..4] != MAGIC {
        return Err(ImageError::NoPayloadFound);
    }
    if header[4] != VERSION {
        return Err(ImageError::UnsupportedVersion(header[4]));
    }
    Ok(Header {
        length: u32::from_be_bytes([header[8], header[9], header[10], header[11]]),
        crc32: u32::from_be_bytes([header[12], header[13], header[14], header[15]]),
    })
}

impl Header {
    /// Compare `payload` against the stored checksum.
    ///
    /// # Errors
    /// [`ImageError::ChecksumMismatch`] if they disagree.
    pub fn verify(&self, payload: &[u8]) -> Result<()> {
        let actual = checksum(payload);
        if actual != self.crc32 {
            return Err(ImageError::ChecksumMismatch { expected: self.crc32, actual });
        }
        Ok(())
    }
}
