// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for pagefix.

use std::fmt;

use thiserror::Error;

/// Pipeline stage that raised an error. Used to report where an image gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    SkewEstimation,
    ContentCrop,
    QuadrilateralDetection,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::SkewEstimation => "skew estimation",
            Stage::ContentCrop => "content crop",
            Stage::QuadrilateralDetection => "quadrilateral detection",
        };
        f.write_str(name)
    }
}

/// Top-level error type for all pagefix operations.
#[derive(Debug, Error)]
pub enum PagefixError {
    // -- Geometry errors --
    #[error("no foreground pixels found during {stage}")]
    EmptyImage { stage: Stage },

    #[error("hull simplified to {found} boundary lines, need 4")]
    InsufficientBoundary { found: usize },

    #[error("document corners are degenerate, projective transform is singular")]
    DegenerateQuadrilateral,

    #[error("boundary lines are parallel and do not intersect")]
    ParallelLines,

    // -- Configuration --
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    // -- Image I/O --
    #[error("image processing failed: {0}")]
    ImageError(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PagefixError>;
