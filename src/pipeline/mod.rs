// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Ordered codec pipeline.
//!
//! A pipeline is a caller-owned slice of [`Step`]s. [`encode`] applies each
//! step's forward transform in list order; [`decode`] applies the inverse
//! transforms in reverse order, so `decode(encode(s, p), p) == s` for every
//! string `s` and every valid pipeline `p`.
//!
//! The first failing step aborts the run. The returned
//! [`PipelineError::StepFailed`] names the direction, the step's position and
//! type, and carries the codec error as its source. No partial output is ever
//! returned.

pub mod error;
pub mod wire;

use core::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::text::{self, CodecError};

pub use error::PipelineError;

/// Step limit enforced by the interactive front end.
///
/// Advisory only: the engine runs pipelines of any non-zero length.
pub const MAX_PIPELINE_STEPS: usize = 5;

/// Which codec a step runs, without its options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepKind {
    Base64,
    Emoji,
    ZeroWidth,
}

impl StepKind {
    /// Human-readable label used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Base64 => "Base64",
            Self::Emoji => "Emoji",
            Self::ZeroWidth => "Zero-width",
        }
    }

    /// Tag used in the wire format.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Base64 => "BASE64",
            Self::Emoji => "EMOJI",
            Self::ZeroWidth => "ZERO_WIDTH",
        }
    }
}

/// Zero-width output mode, without the cover text itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ZeroWidthMode {
    #[default]
    Raw,
    EmbedInCover,
}

/// Zero-width step options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZeroWidth {
    /// Output only the invisible bitstream.
    Raw,
    /// Output `cover_text` followed by the invisible bitstream.
    ///
    /// The cover must be non-blank at encode time; decode ignores it.
    EmbedInCover { cover_text: String },
}

impl ZeroWidth {
    pub fn mode(&self) -> ZeroWidthMode {
        match self {
            Self::Raw => ZeroWidthMode::Raw,
            Self::EmbedInCover { .. } => ZeroWidthMode::EmbedInCover,
        }
    }
}

/// One immutable pipeline step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Base64,
    Emoji,
    ZeroWidth(ZeroWidth),
}

impl Step {
    /// Convenience constructor for an embed-in-cover zero-width step.
    pub fn zero_width_in_cover(cover_text: impl Into<String>) -> Self {
        Self::ZeroWidth(ZeroWidth::EmbedInCover { cover_text: cover_text.into() })
    }

    pub fn kind(&self) -> StepKind {
        match self {
            Self::Base64 => StepKind::Base64,
            Self::Emoji => StepKind::Emoji,
            Self::ZeroWidth(_) => StepKind::ZeroWidth,
        }
    }

    /// Apply this step's forward transform.
    pub fn encode(&self, input: &str) -> Result<String, CodecError> {
        match self {
            Self::Base64 => Ok(text::base64::encode(input)),
            Self::Emoji => Ok(text::emoji::encode(input)),
            Self::ZeroWidth(ZeroWidth::Raw) => Ok(text::zero_width::encode(input)),
            Self::ZeroWidth(ZeroWidth::EmbedInCover { cover_text }) => {
                text::zero_width::encode_in_cover(input, cover_text)
            }
        }
    }

    /// Apply this step's inverse transform.
    pub fn decode(&self, input: &str) -> Result<String, CodecError> {
        match self {
            Self::Base64 => text::base64::decode(input),
            Self::Emoji => text::emoji::decode(input),
            Self::ZeroWidth(_) => text::zero_width::decode(input),
        }
    }
}

/// Direction of a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Encode,
    Decode,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode => f.write_str("encode"),
            Self::Decode => f.write_str("decode"),
        }
    }
}

/// Check a pipeline for encoding before any step runs.
///
/// # Errors
/// - [`PipelineError::EmptyPipeline`] if `steps` is empty.
/// - [`PipelineError::StepFailed`] with [`CodecError::MissingCoverText`] for
///   the first embed-in-cover step whose cover text is blank.
pub fn validate(steps: &[Step]) -> Result<(), PipelineError> {
    if steps.is_empty() {
        return Err(PipelineError::EmptyPipeline);
    }
    for (index, step) in steps.iter().enumerate() {
        if let Step::ZeroWidth(ZeroWidth::EmbedInCover { cover_text }) = step {
            if cover_text.trim().is_empty() {
                return Err(PipelineError::StepFailed {
                    direction: Direction::Encode,
                    index,
                    kind: StepKind::ZeroWidth,
                    source: CodecError::MissingCoverText,
                });
            }
        }
    }
    Ok(())
}

/// Run every step's forward transform in list order.
///
/// # Errors
/// See [`validate`]; otherwise the first failing step as
/// [`PipelineError::StepFailed`].
pub fn encode(input: &str, steps: &[Step]) -> Result<String, PipelineError> {
    validate(steps)?;
    run(input, steps.iter().enumerate(), Direction::Encode, steps.len())
}

/// Run every step's inverse transform in reverse list order.
///
/// # Errors
/// [`PipelineError::EmptyPipeline`] if `steps` is empty; otherwise the first
/// failing step (the last one in list order runs first).
pub fn decode(input: &str, steps: &[Step]) -> Result<String, PipelineError> {
    if steps.is_empty() {
        return Err(PipelineError::EmptyPipeline);
    }
    run(input, steps.iter().enumerate().rev(), Direction::Decode, steps.len())
}

fn run<'a>(
    input: &str,
    order: impl Iterator<Item = (usize, &'a Step)>,
    direction: Direction,
    len: usize,
) -> Result<String, PipelineError> {
    debug!(%direction, steps = len, input_len = input.len(), "pipeline start");

    let mut text = input.to_owned();
    for (index, step) in order {
        let kind = step.kind();
        let result = match direction {
            Direction::Encode => step.encode(&text),
            Direction::Decode => step.decode(&text),
        };
        text = result.map_err(|source| PipelineError::StepFailed { direction, index, kind, source })?;
        trace!(%direction, index, step = kind.label(), output_len = text.len(), "step done");
    }

    debug!(%direction, output_len = text.len(), "pipeline done");
    Ok(text)
}
