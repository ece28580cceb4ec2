// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Zero-width bit codec.
//!
//! Every byte becomes eight invisible code points, MSB first:
//! [`ZERO`] (U+200B ZERO WIDTH SPACE) for a 0 bit and [`ONE`]
//! (U+200C ZERO WIDTH NON-JOINER) for a 1 bit.
//!
//! Decoding first filters the input down to those two markers, which is how
//! a payload appended to visible cover text is found without knowing where
//! the cover ends. Cover text that itself contains either marker corrupts
//! the recovered payload; callers are expected to supply ordinary text.

use super::error::{CodecError, Result};

/// Marker for a 0 bit.
pub const ZERO: char = '\u{200B}';
/// Marker for a 1 bit.
pub const ONE: char = '\u{200C}';

/// Returns `true` for either marker symbol.
pub fn is_marker(c: char) -> bool {
    c == ZERO || c == ONE
}

/// Encode raw bytes as zero-width markers, MSB first.
pub fn encode_bytes(data: &[u8]) -> String {
    // Both markers are 3 bytes in UTF-8.
    let mut out = String::with_capacity(data.len() * 8 * 3);
    for &byte in data {
        for bit_pos in (0..8).rev() {
            out.push(if (byte >> bit_pos) & 1 == 1 { ONE } else { ZERO });
        }
    }
    out
}

/// Decode the markers found anywhere in `input` back to raw bytes.
///
/// All non-marker characters are ignored.
///
/// # Errors
/// [`CodecError::LengthNotMultipleOfEight`] if the marker count is not a
/// whole number of bytes.
pub fn decode_bytes(input: &str) -> Result<Vec<u8>> {
    let bits: Vec<u8> = input
        .chars()
        .filter(|&c| is_marker(c))
        .map(|c| u8::from(c == ONE))
        .collect();

    if bits.len() % 8 != 0 {
        return Err(CodecError::LengthNotMultipleOfEight { count: bits.len() });
    }

    Ok(bits
        .chunks_exact(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | bit))
        .collect())
}

/// UTF-8 encode `input` and emit it as a bare zero-width bitstream.
pub fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

/// Emit `cover_text` followed by the zero-width encoding of `input`.
///
/// # Errors
/// [`CodecError::MissingCoverText`] if `cover_text` is empty or only
/// whitespace. Nothing is encoded in that case.
pub fn encode_in_cover(input: &str, cover_text: &str) -> Result<String> {
    if cover_text.trim().is_empty() {
        return Err(CodecError::MissingCoverText);
    }
    let mut out = String::with_capacity(cover_text.len() + input.len() * 24);
    out.push_str(cover_text);
    out.push_str(&encode(input));
    Ok(out)
}

/// Recover the text hidden in `input`, with or without a cover prefix.
///
/// # Errors
/// - [`CodecError::LengthNotMultipleOfEight`], see [`decode_bytes`].
/// - [`CodecError::InvalidUtf8`] if the recovered bytes are not UTF-8.
pub fn decode(input: &str) -> Result<String> {
    super::utf8(decode_bytes(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_msb_first() {
        // 0x41 = 0b0100_0001
        let expected: String = [ZERO, ONE, ZERO, ZERO, ZERO, ZERO, ZERO, ONE].iter().collect();
        assert_eq!(encode("A"), expected);
        assert_eq!(decode(&expected).unwrap(), "A");
    }

    #[test]
    fn five_markers_rejected() {
        let input: String = std::iter::repeat(ZERO).take(5).collect();
        assert_eq!(
            decode(&input),
            Err(CodecError::LengthNotMultipleOfEight { count: 5 })
        );
    }

    #[test]
    fn no_markers_decodes_to_empty() {
        assert_eq!(decode("hello").unwrap(), "");
    }

    #[test]
    fn cover_roundtrip() {
        let out = encode_in_cover("secret", "Nice weather today.").unwrap();
        assert!(out.starts_with("Nice weather today."));
        assert_eq!(decode(&out).unwrap(), "secret");
    }

    #[test]
    fn markers_found_between_visible_text() {
        let hidden = encode("hi");
        let (a, b) = hidden.split_at(hidden.len() / 2);
        let mixed = format!("see {a}you {b}later");
        assert_eq!(decode(&mixed).unwrap(), "hi");
    }

    #[test]
    fn blank_cover_rejected() {
        assert_eq!(encode_in_cover("x", ""), Err(CodecError::MissingCoverText));
        assert_eq!(encode_in_cover("x", "  \n"), Err(CodecError::MissingCoverText));
    }

    #[test]
    fn cover_containing_markers_corrupts_payload() {
        // Known limitation: markers inside the cover are indistinguishable
        // from payload bits.
        let cover = format!("cover{ZERO}");
        let out = encode_in_cover("A", &cover).unwrap();
        assert_eq!(
            decode(&out),
            Err(CodecError::LengthNotMultipleOfEight { count: 9 })
        );
    }

    #[test]
    fn invalid_utf8_rejected() {
        let input = encode_bytes(&[0xFF]);
        assert_eq!(decode(&input), Err(CodecError::InvalidUtf8));
    }
}
