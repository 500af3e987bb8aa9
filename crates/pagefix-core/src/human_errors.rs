// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for batch runs.
//
// Every technical error is mapped to plain English with a clear suggestion, so
// a batch log tells the operator what to do about a page that was skipped.

use crate::error::PagefixError;

/// Whether an error concerns a single page or the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Only this page is affected; the batch continues with the next one.
    Page,
    /// The run itself is misconfigured; every page would fail the same way.
    Run,
}

/// A human-readable error with a plain English message and an actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary.
    pub message: String,
    /// What the operator should try.
    pub suggestion: String,
    /// How far the failure reaches.
    pub scope: Scope,
}

/// Convert a `PagefixError` into a `HumanError`.
pub fn humanize_error(err: &PagefixError) -> HumanError {
    match err {
        PagefixError::EmptyImage { stage } => HumanError {
            message: format!("The page looks blank (nothing found during {stage})."),
            suggestion: "Check that the scan is a black-on-white binary image and is not inverted.".into(),
            scope: Scope::Page,
        },

        PagefixError::InsufficientBoundary { found } => HumanError {
            message: format!("Could not find all four page edges (found {found})."),
            suggestion: "Rescan with the whole page visible and some background around it.".into(),
            scope: Scope::Page,
        },

        PagefixError::DegenerateQuadrilateral => HumanError {
            message: "The detected page corners overlap.".into(),
            suggestion: "The page outline is too small or irregular to straighten. Try a higher-resolution scan.".into(),
            scope: Scope::Page,
        },

        PagefixError::ParallelLines => HumanError {
            message: "Two page edges never meet.".into(),
            suggestion: "Switch corner_strategy back to \"endpoints\" for this kind of scan.".into(),
            scope: Scope::Page,
        },

        PagefixError::InvalidConfig(detail) => HumanError {
            message: "The configuration file has an invalid setting.".into(),
            suggestion: format!("Fix the setting and run again. ({detail})"),
            scope: Scope::Run,
        },

        PagefixError::ImageError(_) => HumanError {
            message: "There's a problem with this image file.".into(),
            suggestion: "The file may be damaged or in an unusual format. Try saving it as PNG first.".into(),
            scope: Scope::Page,
        },

        PagefixError::Io(io_err) => HumanError {
            message: "A file could not be read or written.".into(),
            suggestion: format!("Check the path and its permissions. ({io_err})"),
            scope: Scope::Page,
        },

        PagefixError::Serialization(_) => HumanError {
            message: "The configuration file is not valid JSON.".into(),
            suggestion: "Check the file for missing commas, quotes, or braces.".into(),
            scope: Scope::Run,
        },
    }
}
