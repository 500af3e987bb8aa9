// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pagefix-document — Geometric correction of scanned binary document images.
//
// Provides the orientation pipeline (border trim, skew estimation, rotation,
// content crop, quadrilateral detection, perspective correction) and the thin
// image I/O layer used by the command-line front end.

pub mod image;
pub mod orient;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export the primary entry points so callers can use `pagefix_document::OrientationFixer` etc.
pub use orient::{FixTrace, OrientationFixer, fix_orientation};
