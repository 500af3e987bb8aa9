// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image module — grayscale decoding, binarization, and writing results.

pub mod binarize;
pub mod io;

pub use binarize::binarize_otsu;
