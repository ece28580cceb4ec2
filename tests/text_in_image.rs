// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! End-to-end: text pipeline output carried inside an image.

use stegano_pipe::pipeline::{self, Step};
use stegano_pipe::{image, PixelBuffer};

#[test]
fn pipeline_output_survives_image_roundtrip() {
    let steps = [Step::Base64, Step::Emoji];
    let carrier = pipeline::encode("rendezvous at dawn", &steps).unwrap();

    let mut pixels = PixelBuffer::blank(64, 64).unwrap();
    assert!(carrier.len() <= pixels.capacity());
    image::embed_text(&mut pixels, &carrier).unwrap();

    // Simulate a lossless save/load through the external image codec.
    let reloaded = PixelBuffer::new(64, 64, pixels.into_rgba()).unwrap();
    let recovered = image::extract_text(&reloaded).unwrap();
    assert_eq!(pipeline::decode(&recovered, &steps).unwrap(), "rendezvous at dawn");
}

#[test]
fn carrier_too_large_for_image() {
    let carrier = pipeline::encode(&"x".repeat(64), &[Step::Emoji]).unwrap();
    let mut pixels = PixelBuffer::blank(16, 16).unwrap();
    assert!(matches!(
        image::embed_text(&mut pixels, &carrier),
        Err(image::ImageError::PayloadTooLarge { .. })
    ));
}

#[cfg(feature = "cipher")]
#[test]
fn sealed_text_through_pipeline_and_image() {
    use stegano_pipe::crypto;

    let sealed = crypto::seal("the key is under the mat", "hunter2").unwrap();
    let steps = [Step::zero_width_in_cover("Happy birthday!")];
    let carrier = pipeline::encode(&sealed, &steps).unwrap();

    let mut pixels = PixelBuffer::blank(200, 200).unwrap();
    image::embed_text(&mut pixels, &carrier).unwrap();

    let recovered = image::extract_text(&pixels).unwrap();
    let opened = pipeline::decode(&recovered, &steps).unwrap();
    assert_eq!(crypto::open(&opened, "hunter2").unwrap(), "the key is under the mat");
    assert!(crypto::open(&opened, "hunter3").is_err());
}
