// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Serde wire shapes for pipelines coming from a UI or HTTP caller.
//!
//! ```json
//! { "text": "hi", "pipeline": [
//!     { "type": "BASE64" },
//!     { "type": "ZERO_WIDTH", "zeroWidthMode": "EMBED_IN_COVER", "coverText": "Hello!" }
//! ] }
//! ```
//!
//! `CRYPTO` steps are accepted by the parser so they can be rejected with a
//! precise error: passphrases never enter the core pipeline.

use serde::{Deserialize, Serialize};

use super::{PipelineError, Step, StepKind, ZeroWidth, ZeroWidthMode};

/// Step tag as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WireStepType {
    Crypto,
    Base64,
    Emoji,
    ZeroWidth,
}

/// One step as sent by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireStep {
    #[serde(rename = "type")]
    pub step_type: WireStepType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zero_width_mode: Option<ZeroWidthMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_text: Option<String>,
}

impl From<&Step> for WireStep {
    fn from(step: &Step) -> Self {
        match step {
            Step::Base64 => Self { step_type: WireStepType::Base64, zero_width_mode: None, cover_text: None },
            Step::Emoji => Self { step_type: WireStepType::Emoji, zero_width_mode: None, cover_text: None },
            Step::ZeroWidth(zw) => Self {
                step_type: WireStepType::ZeroWidth,
                zero_width_mode: Some(zw.mode()),
                cover_text: match zw {
                    ZeroWidth::Raw => None,
                    ZeroWidth::EmbedInCover { cover_text } => Some(cover_text.clone()),
                },
            },
        }
    }
}

/// Map wire steps onto core steps.
///
/// A missing `zeroWidthMode` means `RAW`. A missing `coverText` in
/// `EMBED_IN_COVER` mode becomes an empty cover, which `encode` rejects and
/// `decode` ignores.
///
/// # Errors
/// - [`PipelineError::EmptyPipeline`] if `steps` is empty.
/// - [`PipelineError::UnsupportedStep`] for the first `CRYPTO` step.
pub fn to_steps(steps: &[WireStep]) -> Result<Vec<Step>, PipelineError> {
    if steps.is_empty() {
        return Err(PipelineError::EmptyPipeline);
    }
    steps
        .iter()
        .enumerate()
        .map(|(index, s)| match s.step_type {
            WireStepType::Crypto => Err(PipelineError::UnsupportedStep { index, name: "CRYPTO" }),
            WireStepType::Base64 => Ok(Step::Base64),
            WireStepType::Emoji => Ok(Step::Emoji),
            WireStepType::ZeroWidth => Ok(Step::ZeroWidth(match s.zero_width_mode.unwrap_or_default() {
                ZeroWidthMode::Raw => ZeroWidth::Raw,
                ZeroWidthMode::EmbedInCover => ZeroWidth::EmbedInCover {
                    cover_text: s.cover_text.clone().unwrap_or_default(),
                },
            })),
        })
        .collect()
}

/// Encode or decode request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformRequest {
    pub text: String,
    pub pipeline: Vec<WireStep>,
}

/// Encode or decode response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformResponse {
    pub result: String,
}

impl TransformRequest {
    pub fn encode(&self) -> Result<TransformResponse, PipelineError> {
        let steps = to_steps(&self.pipeline)?;
        super::encode(&self.text, &steps).map(|result| TransformResponse { result })
    }

    pub fn decode(&self) -> Result<TransformResponse, PipelineError> {
        let steps = to_steps(&self.pipeline)?;
        super::decode(&self.text, &steps).map(|result| TransformResponse { result })
    }
}

/// Supported options for one step type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepCapability {
    #[serde(rename = "type")]
    pub step_type: StepKind,
    /// Non-empty only for `ZERO_WIDTH`.
    pub zero_width_modes: Vec<ZeroWidthMode>,
}

/// Step types the core pipeline accepts, for rendering a step picker.
pub fn capabilities() -> Vec<StepCapability> {
    vec![
        StepCapability { step_type: StepKind::Base64, zero_width_modes: Vec::new() },
        StepCapability { step_type: StepKind::Emoji, zero_width_modes: Vec::new() },
        StepCapability {
            step_type: StepKind::ZeroWidth,
            zero_width_modes: vec![ZeroWidthMode::Raw, ZeroWidthMode::EmbedInCover],
        },
    ]
}
