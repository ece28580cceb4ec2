// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Nibble-to-emoji codec.
//!
//! Each byte is split into its high and low nibble and each nibble is
//! replaced by `ALPHABET[nibble]`, high nibble first. Every alphabet entry
//! is a single Unicode scalar value, so decoding walks `char`s, never bytes.

use super::error::{CodecError, Result};

/// The 16 symbols, indexed by nibble value.
pub const ALPHABET: [char; 16] = [
    '\u{1F600}', '\u{1F601}', '\u{1F602}', '\u{1F603}',
    '\u{1F604}', '\u{1F605}', '\u{1F606}', '\u{1F609}',
    '\u{1F60A}', '\u{1F60B}', '\u{1F60E}', '\u{1F60D}',
    '\u{1F618}', '\u{1F617}', '\u{1F619}', '\u{1F61A}',
];

fn nibble_of(symbol: char) -> Option<u8> {
    ALPHABET.iter().position(|&s| s == symbol).map(|i| i as u8)
}

/// Encode raw bytes as emoji, two symbols per byte.
pub fn encode_bytes(data: &[u8]) -> String {
    // Every alphabet symbol is 4 bytes in UTF-8.
    let mut out = String::with_capacity(data.len() * 8);
    for &byte in data {
        out.push(ALPHABET[(byte >> 4) as usize]);
        out.push(ALPHABET[(byte & 0x0F) as usize]);
    }
    out
}

/// Decode an emoji string back to raw bytes.
///
/// # Errors
/// - [`CodecError::OddSymbolCount`] if the symbol count is odd.
/// - [`CodecError::UnknownSymbol`] for the first symbol outside [`ALPHABET`].
pub fn decode_bytes(input: &str) -> Result<Vec<u8>> {
    let symbols: Vec<char> = input.chars().collect();
    if symbols.len() % 2 != 0 {
        return Err(CodecError::OddSymbolCount { count: symbols.len() });
    }

    let lookup = |position: usize| {
        let symbol = symbols[position];
        nibble_of(symbol).ok_or(CodecError::UnknownSymbol { position, symbol })
    };

    let mut out = Vec::with_capacity(symbols.len() / 2);
    for pair in (0..symbols.len()).step_by(2) {
        let high = lookup(pair)?;
        let low = lookup(pair + 1)?;
        out.push((high << 4) | low);
    }
    Ok(out)
}

/// UTF-8 encode `input` and map every nibble to its emoji.
pub fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

/// Inverse of [`encode`].
///
/// # Errors
/// Everything [`decode_bytes`] returns, plus [`CodecError::InvalidUtf8`].
pub fn decode(input: &str) -> Result<String> {
    super::utf8(decode_bytes(input)?)
}
