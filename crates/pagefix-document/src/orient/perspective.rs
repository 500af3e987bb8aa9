// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Perspective correction: map the detected quadrilateral onto its axis-aligned
// bounding rectangle.

use image::{GrayImage, Luma};
use imageproc::geometric_transformations::{Projection, warp};
use pagefix_core::{BoundingRect, FixConfig, PagefixError, Quadrilateral, Resampling, Result};
use tracing::{debug, info, instrument};

use super::preprocess::invert;
use super::quad::{Detection, detect_quadrilateral};
use super::rotate::interpolation;

/// Projective transform taking `corners` onto the corners of `bounds`, in the
/// order `[top-left, top-right, bottom-right, bottom-left]`.
pub fn rectifying_projection(corners: &Quadrilateral, bounds: &BoundingRect) -> Result<Projection> {
    if !corners.has_distinct_corners() {
        return Err(PagefixError::DegenerateQuadrilateral);
    }
    let from = corners.as_array().map(|p| (p.x as f32, p.y as f32));
    let to = bounds.corners().as_array().map(|p| (p.x as f32, p.y as f32));
    Projection::from_control_points(from, to).ok_or(PagefixError::DegenerateQuadrilateral)
}

/// Warp `image` so that `corners` land on the corners of `bounds`. The output
/// has the input's size; areas with no source are background (0).
pub fn warp_to_rectangle(
    image: &GrayImage,
    corners: &Quadrilateral,
    bounds: &BoundingRect,
    resampling: Resampling,
) -> Result<GrayImage> {
    let projection = rectifying_projection(corners, bounds)?;
    debug!(?bounds, "Projective transform solved");
    Ok(warp(image, &projection, interpolation(resampling), Luma([0u8])))
}

/// Detect the document outline, straighten it, and restore the original
/// polarity. Returns the detection alongside the corrected image.
#[instrument(skip_all, fields(width = image.width(), height = image.height()))]
pub fn correct_perspective_with_detection(
    image: &GrayImage,
    config: &FixConfig,
) -> Result<(GrayImage, Detection)> {
    let detection = detect_quadrilateral(image, config)?;
    let warped = warp_to_rectangle(
        image,
        &detection.corners,
        &detection.bounds,
        config.interpolation,
    )?;
    info!(
        out_w = warped.width(),
        out_h = warped.height(),
        "Perspective correction applied"
    );
    Ok((invert(&warped), detection))
}

/// Detect the document outline, straighten it, and restore the original polarity.
pub fn correct_perspective(image: &GrayImage, config: &FixConfig) -> Result<GrayImage> {
    correct_perspective_with_detection(image, config).map(|(corrected, _)| corrected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{filled_rect, right_triangle};
    use pagefix_core::Point;

    #[test]
    fn axis_aligned_block_is_unchanged() {
        let image = filled_rect(120, 90, (20, 18), (99, 71), 255, 0);
        let corrected = correct_perspective(&image, &FixConfig::default()).expect("block");

        assert_eq!(corrected.dimensions(), image.dimensions());
        let expected = invert(&image);
        let differing = corrected
            .pixels()
            .zip(expected.pixels())
            .filter(|(a, b)| a.0[0].abs_diff(b.0[0]) > 64)
            .count();
        // Only the outermost rows and columns may differ.
        assert!(differing <= (120 + 90) * 2, "{differing} pixels differ");
        assert_eq!(corrected.get_pixel(60, 45).0[0], 0);
        assert_eq!(corrected.get_pixel(10, 10).0[0], 255);
    }

    #[test]
    fn trapezoid_is_squared_up() {
        // Top edge narrower than the bottom edge.
        let (w, h) = (160u32, 140u32);
        let image = GrayImage::from_fn(w, h, |x, y| {
            let (x, y) = (x as f64, y as f64);
            let t = (y - 20.0) / 100.0;
            let left = 40.0 - 20.0 * t;
            let right = 120.0 + 20.0 * t;
            if (0.0..=1.0).contains(&t) && x >= left && x <= right {
                Luma([255])
            } else {
                Luma([0])
            }
        });

        let (corrected, detection) =
            correct_perspective_with_detection(&image, &FixConfig::default()).expect("trapezoid");
        assert!(detection.corners.top_left.distance_to(&Point::new(40.0, 20.0)) < 2.0);
        assert!(detection.corners.bottom_right.distance_to(&Point::new(140.0, 120.0)) < 2.0);

        // Foreground is dark again after correction. The top corners, which
        // were background before, are now filled.
        assert!(corrected.get_pixel(24, 24).0[0] < 128);
        assert!(corrected.get_pixel(136, 24).0[0] < 128);
        assert!(corrected.get_pixel(80, 130).0[0] > 128);
    }

    #[test]
    fn three_sided_outline_fails_before_warping() {
        let image = right_triangle(100, 100, (20, 20), 50, 255, 0);
        assert!(matches!(
            correct_perspective(&image, &FixConfig::default()),
            Err(PagefixError::InsufficientBoundary { found: 3 })
        ));
    }

    #[test]
    fn coincident_corners_are_degenerate() {
        let p = Point::new(10.0, 10.0);
        let corners = Quadrilateral {
            top_left: p,
            top_right: Point::new(50.0, 10.0),
            bottom_right: Point::new(50.0, 50.0),
            bottom_left: p,
        };
        let bounds = BoundingRect::from_extents(10, 10, 50, 50);
        let image = GrayImage::new(60, 60);
        assert!(matches!(
            warp_to_rectangle(&image, &corners, &bounds, Resampling::Bilinear),
            Err(PagefixError::DegenerateQuadrilateral)
        ));
    }
}
