// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Rotation about the image centre.

use image::{GrayImage, Luma};
use imageproc::geometric_transformations::{self, Interpolation};
use pagefix_core::Resampling;
use pagefix_core::config::BINARY_THRESHOLD;
use tracing::{debug, instrument};

/// Map the configured resampling onto imageproc's interpolation.
pub(crate) fn interpolation(resampling: Resampling) -> Interpolation {
    match resampling {
        Resampling::Nearest => Interpolation::Nearest,
        Resampling::Bilinear => Interpolation::Bilinear,
    }
}

/// Rotate `image` by `angle_degrees` about its centre pixel `(w / 2, h / 2)`.
///
/// Positive angles turn the content counter-clockwise as displayed. The output
/// keeps the input size; uncovered areas are filled with background (0).
/// Bilinear output is thresholded back to 0/255 so the edge blend does not
/// widen the foreground.
#[instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn rotate_image(image: &GrayImage, angle_degrees: f64, resampling: Resampling) -> GrayImage {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return image.clone();
    }

    let center = ((width / 2) as f32, (height / 2) as f32);
    // imageproc turns clockwise for positive theta in image coordinates.
    let theta = -(angle_degrees.to_radians() as f32);
    let mut rotated = geometric_transformations::rotate(
        image,
        center,
        theta,
        interpolation(resampling),
        Luma([0u8]),
    );
    if resampling == Resampling::Bilinear {
        rebinarize(&mut rotated);
    }

    debug!(angle_degrees, "Rotation applied");
    rotated
}

fn rebinarize(image: &mut GrayImage) {
    for pixel in image.pixels_mut() {
        pixel.0[0] = if pixel.0[0] >= BINARY_THRESHOLD { 255 } else { 0 };
    }
}
