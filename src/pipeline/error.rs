// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Error types for the pipeline engine.

use core::fmt;

use super::{Direction, StepKind};
use crate::text::CodecError;
use crate::ErrorCode;

/// Errors returned by [`encode`](super::encode) and [`decode`](super::decode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// The pipeline has no steps.
    EmptyPipeline,
    /// The step at `index` (0-based, in list order) failed; no later step ran.
    StepFailed {
        direction: Direction,
        index: usize,
        kind: StepKind,
        source: CodecError,
    },
    /// The step at `index` cannot run inside the core pipeline.
    UnsupportedStep { index: usize, name: &'static str },
}

impl PipelineError {
    /// Stable client-facing code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyPipeline => ErrorCode::InvalidPipeline,
            Self::StepFailed { source, .. } => source.code(),
            Self::UnsupportedStep { .. } => ErrorCode::UnsupportedStep,
        }
    }

    /// Position of the offending step, if the failure is tied to one.
    pub fn step_index(&self) -> Option<usize> {
        match self {
            Self::EmptyPipeline => None,
            Self::StepFailed { index, .. } | Self::UnsupportedStep { index, .. } => Some(*index),
        }
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPipeline => write!(f, "pipeline has no steps"),
            Self::StepFailed { direction, index, kind, source } => write!(
                f,
                "{direction} failed at step {} ({}): {source}",
                index + 1,
                kind.label()
            ),
            Self::UnsupportedStep { index, name } => write!(
                f,
                "step {} ({name}) is client-side only and cannot run in the pipeline",
                index + 1
            ),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::StepFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}
