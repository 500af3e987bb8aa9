// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pagefix — Core geometry types, configuration, and errors shared across all crates.

pub mod config;
pub mod error;
pub mod human_errors;
pub mod types;

pub use config::{CornerStrategy, FixConfig, Resampling};
pub use error::{PagefixError, Result, Stage};
pub use types::*;
