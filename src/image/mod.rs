// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! RGB least-significant-bit embedding into raw RGBA pixel buffers.
//!
//! [`embed`] writes a 16-byte [`frame`] header followed by the payload, one
//! bit per R, G and B sample, skipping alpha. [`extract`] reads the header
//! back, validates magic, version and declared length, reads the payload and
//! verifies its CRC-32 before returning it.
//!
//! Decoding the carrier file into RGBA (and re-encoding it losslessly
//! afterwards) is left to the caller's image codec. Any lossy step between
//! embed and extract destroys the payload; the checksum reports that as
//! [`ImageError::ChecksumMismatch`] or one of the header errors.

mod bitio;
pub mod capacity;
pub mod error;
pub mod frame;

use tracing::debug;

use bitio::{LsbReader, LsbWriter};

pub use capacity::capacity_bytes;
pub use error::ImageError;
pub use frame::{HEADER_LEN, MAGIC, VERSION};

/// Samples per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// An owned RGBA8 pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA samples.
    ///
    /// # Errors
    /// [`ImageError::InvalidDimensions`] if `data.len() != width * height * 4`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, ImageError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(CHANNELS))
            .ok_or(ImageError::InvalidDimensions)?;
        if data.len() != expected {
            return Err(ImageError::InvalidDimensions);
        }
        Ok(Self { width, height, data })
    }

    /// An opaque black image.
    ///
    /// # Errors
    /// [`ImageError::InvalidDimensions`] if the sample count overflows `usize`.
    pub fn blank(width: u32, height: u32) -> Result<Self, ImageError> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(CHANNELS))
            .ok_or(ImageError::InvalidDimensions)?;
        let mut data = vec![0u8; len];
        for alpha in data.iter_mut().skip(CHANNELS - 1).step_by(CHANNELS) {
            *alpha = 0xFF;
        }
        Ok(Self { width, height, data })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_rgba(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the raw samples.
    pub fn as_rgba_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_rgba(self) -> Vec<u8> {
        self.data
    }

    /// Maximum payload size for this buffer, see [`capacity_bytes`].
    pub fn capacity(&self) -> usize {
        capacity_bytes(self.width, self.height)
    }
}

/// Embed `payload` into `buffer`.
///
/// The capacity check happens before any sample is touched, so on
/// [`ImageError::PayloadTooLarge`] the buffer is unchanged.
///
/// # Errors
/// - [`ImageError::PayloadTooLarge`] if `payload.len()` exceeds
///   [`PixelBuffer::capacity`].
/// - [`ImageError::BufferExhausted`] if the bitstream runs past the end of the
///   buffer.
pub fn embed(buffer: &mut PixelBuffer, payload: &[u8]) -> Result<(), ImageError> {
    let capacity = buffer.capacity();
    let header = frame::build_header(payload)?;

    if payload.len() > capacity {
        return Err(ImageError::PayloadTooLarge { len: payload.len(), capacity });
    }

    debug!(
        width = buffer.width,
        height = buffer.height,
        capacity,
        payload_len = payload.len(),
        "embedding payload"
    );

    let mut writer = LsbWriter::new(&mut buffer.data);
    writer.write_bytes(&header)?;
    writer.write_bytes(payload)?;
    Ok(())
}

/// By-value form of [`embed`]: consumes the cover and returns the stego buffer.
pub fn embed_owned(mut buffer: PixelBuffer, payload: &[u8]) -> Result<PixelBuffer, ImageError> {
    embed(&mut buffer, payload)?;
    Ok(buffer)
}

/// Recover the payload embedded by [`embed`].
///
/// # Errors
/// - [`ImageError::BufferExhausted`] if the buffer ends before the header or
///   payload is complete.
/// - [`ImageError::NoPayloadFound`] if the magic bytes do not match.
/// - [`ImageError::UnsupportedVersion`] for an unknown version byte.
/// - [`ImageError::InvalidPayloadLength`] if the declared length exceeds the
///   buffer's capacity.
/// - [`ImageError::ChecksumMismatch`] if the payload fails its CRC-32.
pub fn extract(buffer: &PixelBuffer) -> Result<Vec<u8>, ImageError> {
    let mut reader = LsbReader::new(&buffer.data);

    let mut raw = [0u8; HEADER_LEN];
    reader.read_exact(&mut raw)?;
    let header = frame::parse_header(&raw)?;

    let capacity = buffer.capacity();
    if header.length as usize > capacity {
        return Err(ImageError::InvalidPayloadLength { len: header.length, capacity });
    }

    let payload = reader.read_bytes(header.length as usize)?;
    header.verify(&payload)?;

    debug!(
        width = buffer.width,
        height = buffer.height,
        payload_len = payload.len(),
        "extracted payload"
    );
    Ok(payload)
}

/// Embed the UTF-8 bytes of `text`.
pub fn embed_text(buffer: &mut PixelBuffer, text: &str) -> Result<(), ImageError> {
    embed(buffer, text.as_bytes())
}

/// Extract a payload and decode it as UTF-8.
///
/// The checksum is verified before the bytes are interpreted as text.
///
/// # Errors
/// Everything [`extract`] returns, plus [`ImageError::InvalidUtf8`].
pub fn extract_text(buffer: &PixelBuffer) -> Result<String, ImageError> {
    String::from_utf8(extract(buffer)?).map_err(|_| ImageError::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> PixelBuffer {
        let len = (width * height) as usize * CHANNELS;
        let data = (0..len).map(|i| (i * 31 % 251) as u8).collect();
        PixelBuffer::new(width, height, data).unwrap()
    }

    #[test]
    fn new_validates_length() {
        assert!(PixelBuffer::new(2, 2, vec![0; 16]).is_ok());
        assert_eq!(PixelBuffer::new(2, 2, vec![0; 15]), Err(ImageError::InvalidDimensions));
        assert_eq!(PixelBuffer::new(2, 2, vec![0; 12]), Err(ImageError::InvalidDimensions));
    }

    #[test]
    fn blank_is_opaque() {
        let buf = PixelBuffer::blank(3, 2).unwrap();
        assert_eq!(buf.as_rgba().len(), 24);
        for px in buf.as_rgba().chunks(4) {
            assert_eq!(px, &[0, 0, 0, 0xFF]);
        }
    }

    #[test]
    fn roundtrip() {
        let mut buf = gradient(32, 32);
        embed(&mut buf, b"hidden in plain sight").unwrap();
        assert_eq!(extract(&buf).unwrap(), b"hidden in plain sight");
    }

    #[test]
    fn empty_payload_roundtrip() {
        let mut buf = gradient(8, 8);
        embed(&mut buf, &[]).unwrap();
        assert_eq!(extract(&buf).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn exact_capacity_fits() {
        let mut buf = gradient(16, 16);
        let payload = vec![0x5Au8; buf.capacity()];
        embed(&mut buf, &payload).unwrap();
        assert_eq!(extract(&buf).unwrap(), payload);
    }

    #[test]
    fn too_large_leaves_buffer_untouched() {
        let mut buf = gradient(16, 16);
        let before = buf.clone();
        let payload = vec![0u8; buf.capacity() + 1];
        assert_eq!(
            embed(&mut buf, &payload),
            Err(ImageError::PayloadTooLarge { len: payload.len(), capacity: before.capacity() })
        );
        assert_eq!(buf, before);
    }

    #[test]
    fn alpha_channel_preserved() {
        let mut buf = gradient(20, 20);
        let before = buf.clone();
        embed(&mut buf, &[0xFF; 64]).unwrap();
        for (a, b) in before.as_rgba().chunks(4).zip(buf.as_rgba().chunks(4)) {
            assert_eq!(a[3], b[3]);
        }
    }

    #[test]
    fn blank_image_has_no_payload() {
        let buf = PixelBuffer::blank(32, 32).unwrap();
        assert_eq!(extract(&buf), Err(ImageError::NoPayloadFound));
    }

    #[test]
    fn tiny_image_exhausted_on_header() {
        // 5 px = 15 bits, not even two header bytes.
        let buf = PixelBuffer::blank(5, 1).unwrap();
        assert_eq!(extract(&buf), Err(ImageError::BufferExhausted));
    }

    #[test]
    fn unsupported_version() {
        let mut buf = gradient(16, 16);
        let mut header = frame::build_header(b"x").unwrap();
        header[4] = 9;
        LsbWriter::new(buf.as_rgba_mut()).write_bytes(&header).unwrap();
        assert_eq!(extract(&buf), Err(ImageError::UnsupportedVersion(9)));
    }

    #[test]
    fn oversized_declared_length() {
        let mut buf = gradient(16, 16);
        let mut header = frame::build_header(b"x").unwrap();
        header[8..12].copy_from_slice(&u32::MAX.to_be_bytes());
        LsbWriter::new(buf.as_rgba_mut()).write_bytes(&header).unwrap();
        assert_eq!(
            extract(&buf),
            Err(ImageError::InvalidPayloadLength { len: u32::MAX, capacity: buf.capacity() })
        );
    }

    #[test]
    fn flipped_payload_bit_detected() {
        let mut buf = gradient(16, 16);
        embed(&mut buf, b"integrity").unwrap();
        // Bit k lives in sample (k / 3) * 4 + k % 3; bit 128 is the first
        // payload bit.
        let first_payload_sample = 128 / 3 * 4 + 128 % 3;
        buf.as_rgba_mut()[first_payload_sample] ^= 1;
        assert!(matches!(extract(&buf), Err(ImageError::ChecksumMismatch { .. })));
    }

    #[test]
    fn text_helpers() {
        let mut buf = gradient(24, 24);
        embed_text(&mut buf, "héllo wörld").unwrap();
        assert_eq!(extract_text(&buf).unwrap(), "héllo wörld");
    }

    #[test]
    fn non_utf8_payload_reported_after_checksum() {
        let mut buf = gradient(24, 24);
        embed(&mut buf, &[0xFF, 0xFE]).unwrap();
        assert_eq!(extract_text(&buf), Err(ImageError::InvalidUtf8));
    }

    #[test]
    fn owned_variant() {
        let buf = embed_owned(gradient(16, 16), b"owned").unwrap();
        assert_eq!(extract(&buf).unwrap(), b"owned");
    }
}
