// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Bit-level I/O over the RGB samples of an RGBA buffer.
//!
//! The buffer is walked strictly in order from offset 0. Every fourth
//! sample (alpha) is skipped; each remaining sample carries one bit in its
//! least-significant position. Bytes are written and read MSB first.

use super::error::{ImageError, Result};
use super::CHANNELS;

/// Index of the next usable sample at or after `pos`.
fn next_rgb(pos: usize) -> usize {
    if pos % CHANNELS == CHANNELS - 1 {
        pos + 1
    } else {
        pos
    }
}

/// Sequential LSB writer.
pub struct LsbWriter<'a> {
    data: &'a mut [u8],
    pos: usize,
}

impl<'a> LsbWriter<'a> {
    pub fn new(data: &'a mut [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Write the low bit of `bit` into the next RGB sample.
    pub fn write_bit(&mut self, bit: u8) -> Result<()> {
        let idx = next_rgb(self.pos);
        let sample = self.data.get_mut(idx).ok_or(ImageError::BufferExhausted)?;
        *sample = (*sample & 0xFE) | (bit & 1);
        self.pos = idx + 1;
        Ok(())
    }

    pub fn write_byte(&mut self, byte: u8) -> Result<()> {
        for bit_pos in (0..8).rev() {
            self.write_bit(byte >> bit_pos)?;
        }
        Ok(())
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        bytes.iter().try_for_each(|&b| self.write_byte(b))
    }
}

/// Sequential LSB reader.
pub struct LsbReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> LsbReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn read_bit(&mut self) -> Result<u8> {
        let idx = next_rgb(self.pos);
        let sample = *self.data.get(idx).ok_or(ImageError::BufferExhausted)?;
        self.pos = idx + 1;
        Ok(sample & 1)
    }

    pub fn read_byte(&mut self) -> Result<u8> {
        let mut byte = 0u8;
        for _ in 0..8 {
            byte = (byte << 1) | self.read_bit()?;
        }
        Ok(byte)
    }

    pub fn read_exact(&mut self, out: &mut [u8]) -> Result<()> {
        for b in out.iter_mut() {
            *b = self.read_byte()?;
        }
        Ok(())
    }

    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        let mut out = vec![0u8; count];
        self.read_exact(&mut out)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_untouched() {
        let mut data = vec![0xFFu8; 16];
        let mut w = LsbWriter::new(&mut data);
        // 0x00 clears 8 RGB LSBs spread over the first 3 pixels.
        w.write_byte(0x00).unwrap();
        assert_eq!(
            data[..12],
            [0xFE, 0xFE, 0xFE, 0xFF, 0xFE, 0xFE, 0xFE, 0xFF, 0xFE, 0xFE, 0xFF, 0xFF]
        );
    }

    #[test]
    fn msb_first() {
        let mut data = vec![0u8; 12];
        LsbWriter::new(&mut data).write_byte(0b1000_0001).unwrap();
        let lsbs: Vec<u8> = data.iter().map(|s| s & 1).collect();
        assert_eq!(lsbs, vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0]);
    }

    #[test]
    fn upper_bits_preserved() {
        let mut data: Vec<u8> = (0..12).map(|i| i * 17).collect();
        let before = data.clone();
        LsbWriter::new(&mut data).write_byte(0xA5).unwrap();
        for (a, b) in before.iter().zip(&data) {
            assert_eq!(a & 0xFE, b & 0xFE);
        }
        assert_eq!(LsbReader::new(&data).read_byte().unwrap(), 0xA5);
    }

    #[test]
    fn exhaustion() {
        // 2 pixels = 6 usable bits.
        let mut data = vec![0u8; 8];
        assert_eq!(
            LsbWriter::new(&mut data).write_byte(0xFF),
            Err(ImageError::BufferExhausted)
        );
        assert_eq!(LsbReader::new(&data).read_byte(), Err(ImageError::BufferExhausted));
    }

    #[test]
    fn trailing_partial_pixel() {
        // A buffer ending mid-pixel still yields its RGB samples.
        let mut data = vec![0u8; 7];
        let mut w = LsbWriter::new(&mut data);
        for _ in 0..6 {
            w.write_bit(1).unwrap();
        }
        assert_eq!(w.write_bit(1), Err(ImageError::BufferExhausted));
    }
}
