// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! # stegano-pipe
//!
//! Hide short messages in ordinary text or raster images by chaining small,
//! individually reversible transformations.
//!
//! - **Text pipeline** (`pipeline`): an ordered list of [`Step`]s (Base64,
//!   nibble-to-emoji, zero-width bits) applied forward to encode and in reverse
//!   to decode. The zero-width step can append its invisible output to
//!   visible cover text.
//! - **Image LSB** (`image`): a CRC-checked 16-byte frame written one bit
//!   per R/G/B sample of a raw RGBA buffer, alpha untouched.
//! - **Cipher** (`crypto`, feature `cipher`): Argon2id + AES-256-GCM-SIV
//!   passphrase sealing, applied by the caller around the pipeline.
//!
//! Every operation is a synchronous pure function over its inputs. Turning
//! an image file into RGBA samples and back is the caller's job and must be
//! lossless.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use stegano_pipe::{pipeline, image, Step, PixelBuffer};
//!
//! let steps = [Step::Base64, Step::zero_width_in_cover("Lovely weather today.")];
//! let carrier = pipeline::encode("meet at noon", &steps).unwrap();
//! assert_eq!(pipeline::decode(&carrier, &steps).unwrap(), "meet at noon");
//!
//! let mut pixels = PixelBuffer::blank(64, 64).unwrap();
//! image::embed_text(&mut pixels, "meet at noon").unwrap();
//! assert_eq!(image::extract_text(&pixels).unwrap(), "meet at noon");
//! ```

pub mod code;
#[cfg(feature = "cipher")]
pub mod crypto;
pub mod image;
pub mod pipeline;
pub mod text;

pub use code::ErrorCode;
#[cfg(feature = "cipher")]
pub use crypto::CipherError;
pub use image::{capacity_bytes, embed, extract, embed_text, extract_text, ImageError, PixelBuffer};
pub use pipeline::wire::{TransformRequest, TransformResponse, WireStep};
pub use pipeline::{Direction, PipelineError, Step, StepKind, ZeroWidth, ZeroWidthMode};
pub use text::CodecError;
