// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! LSB capacity estimation.
//!
//! Every pixel contributes one bit per R, G and B sample; alpha is never
//! touched. The frame header is reserved out of that total, so the result is
//! the largest payload [`embed`](super::embed) will accept for the geometry.

use super::frame::HEADER_LEN;

/// Maximum payload size in bytes for a `width` x `height` RGBA image.
///
/// `max(0, floor(width * height * 3 / 8) - 16)`. Depends only on geometry,
/// never on pixel content.
pub fn capacity_bytes(width: u32, height: u32) -> usize {
    let bits = u128::from(width) * u128::from(height) * 3;
    let bytes = (bits / 8).saturating_sub(HEADER_LEN as u128);
    usize::try_from(bytes).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_tiny_images() {
        assert_eq!(capacity_bytes(0, 0), 0);
        assert_eq!(capacity_bytes(0, 100), 0);
        assert_eq!(capacity_bytes(1, 1), 0);
        // 6x7 = 42 px -> 126 bits -> 15 bytes < header.
        assert_eq!(capacity_bytes(6, 7), 0);
    }

    #[test]
    fn header_boundary() {
        // 128 bits exactly holds the header and nothing else.
        // 43 px -> 129 bits -> 16 bytes.
        assert_eq!(capacity_bytes(43, 1), 0);
        // 48 px -> 144 bits -> 18 bytes.
        assert_eq!(capacity_bytes(8, 6), 2);
    }

    #[test]
    fn matches_formula() {
        for (w, h) in [(10u32, 10u32), (100, 100), (640, 480), (1920, 1080), (7, 13)] {
            let expected = ((w as u64 * h as u64 * 3) / 8).saturating_sub(16) as usize;
            assert_eq!(capacity_bytes(w, h), expected, "{w}x{h}");
        }
        assert_eq!(capacity_bytes(100, 100), 3734);
    }

    #[test]
    fn no_overflow_at_max_dimensions() {
        let cap = capacity_bytes(u32::MAX, u32::MAX);
        assert!(cap > 0);
    }
}
