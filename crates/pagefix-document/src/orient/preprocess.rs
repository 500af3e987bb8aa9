// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Polarity inversion and border trimming.

use image::{GrayImage, imageops};
use tracing::{debug, instrument};

/// Return a copy of `image` with every sample replaced by `255 - v`.
pub fn invert(image: &GrayImage) -> GrayImage {
    let mut inverted = image.clone();
    imageops::invert(&mut inverted);
    inverted
}

/// Invert polarity and strip `fraction` of the height from the top and bottom
/// and `fraction` of the width from the left and right.
///
/// Scanners tend to leave dark bands along the page edges; trimming them keeps
/// the bands out of the foreground mass. Margins of half the dimension or more
/// leave an empty image, which the estimators downstream reject.
#[instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn invert_and_trim(image: &GrayImage, fraction: f64) -> GrayImage {
    let (width, height) = image.dimensions();
    let delta_h = (fraction * height as f64) as u32;
    let delta_w = (fraction * width as f64) as u32;
    let trimmed_w = width.saturating_sub(delta_w.saturating_mul(2));
    let trimmed_h = height.saturating_sub(delta_h.saturating_mul(2));

    let mut trimmed = imageops::crop_imm(image, delta_w, delta_h, trimmed_w, trimmed_h).to_image();
    imageops::invert(&mut trimmed);

    debug!(delta_w, delta_h, trimmed_w, trimmed_h, "Border trimmed");
    trimmed
}
