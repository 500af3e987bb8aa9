// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Orientation pipeline — border trimming, skew estimation, rotation, content
// cropping, quadrilateral detection, and perspective correction.
//
// Every stage is a plain function from an image (plus configuration) to a new
// image or a geometric value. `OrientationFixer` only sequences them.

pub mod crop;
pub mod foreground;
pub mod geometry;
pub mod perspective;
pub mod pipeline;
pub mod preprocess;
pub mod quad;
pub mod rotate;
pub mod skew;

pub use crop::crop_to_content;
pub use perspective::correct_perspective;
pub use pipeline::{FixTrace, OrientationFixer, fix_orientation};
pub use preprocess::invert_and_trim;
pub use quad::{Detection, classify_corners, detect_quadrilateral, simplify_hull};
pub use rotate::rotate_image;
pub use skew::estimate_rotation_angle;
