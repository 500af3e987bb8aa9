// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Skew estimation from the minimum-area rectangle around the foreground mass.

use image::GrayImage;
use pagefix_core::{FixConfig, PagefixError, Result, RotatedRect, Stage};
use tracing::{debug, info, instrument};

use super::foreground::{has_empty_extent, row_extremes, smooth};
use super::geometry::{convex_hull, min_area_rect};

/// Minimum-area rectangle around the smoothed foreground of `image`.
pub fn foreground_min_area_rect(image: &GrayImage, config: &FixConfig) -> Result<RotatedRect> {
    let empty = PagefixError::EmptyImage {
        stage: Stage::SkewEstimation,
    };
    if has_empty_extent(image) {
        return Err(empty);
    }

    let smoothed = smooth(image, config);
    let points = row_extremes(&smoothed);
    if points.is_empty() {
        return Err(empty);
    }

    let hull = convex_hull(&points);
    debug!(points = points.len(), hull = hull.len(), "Foreground hull built");
    min_area_rect(&hull).ok_or(empty)
}

/// Rotation angle, in degrees, that brings the rectangle's long side level.
///
/// `rect.angle` refers to the side measured by `rect.width`; when that side is
/// the shorter one the long side sits a quarter turn further on.
pub fn normalize_skew_angle(rect: &RotatedRect) -> f64 {
    if rect.width < rect.height {
        rect.angle + 90.0
    } else {
        rect.angle
    }
}

/// Estimate the document skew of an inverted (foreground = nonzero) image.
///
/// Feeding the result to [`super::rotate::rotate_image`] levels the long side
/// of the foreground mass.
#[instrument(skip_all, fields(width = image.width(), height = image.height()))]
pub fn estimate_rotation_angle(image: &GrayImage, config: &FixConfig) -> Result<f64> {
    let rect = foreground_min_area_rect(image, config)?;
    let angle = normalize_skew_angle(&rect);
    info!(
        raw_angle = rect.angle,
        rect_width = rect.width,
        rect_height = rect.height,
        angle,
        "Skew estimated"
    );
    Ok(angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::rotated_rect;
    use pagefix_core::Point;

    fn rect(width: f64, height: f64, angle: f64) -> RotatedRect {
        RotatedRect {
            center: Point::new(0.0, 0.0),
            width,
            height,
            angle,
        }
    }

    #[test]
    fn narrow_rect_gets_a_quarter_turn() {
        assert_eq!(normalize_skew_angle(&rect(10.0, 40.0, -78.0)), 12.0);
    }

    #[test]
    fn wide_rect_keeps_its_angle() {
        assert_eq!(normalize_skew_angle(&rect(40.0, 10.0, -3.5)), -3.5);
        assert_eq!(normalize_skew_angle(&rect(20.0, 20.0, -45.0)), -45.0);
    }

    #[test]
    fn blank_image_is_empty() {
        let image = GrayImage::new(64, 64);
        let err = estimate_rotation_angle(&image, &FixConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            PagefixError::EmptyImage {
                stage: Stage::SkewEstimation
            }
        ));
    }

    #[test]
    fn speckle_alone_is_empty() {
        let mut image = GrayImage::new(64, 64);
        image.put_pixel(10, 10, image::Luma([255]));
        image.put_pixel(40, 50, image::Luma([255]));
        assert!(estimate_rotation_angle(&image, &FixConfig::default()).is_err());
    }

    #[test]
    fn tilted_landscape_block_reports_its_tilt() {
        let image = rotated_rect(160, 120, 70.0, 24.0, 12.0, 255, 0);
        let angle = estimate_rotation_angle(&image, &FixConfig::default()).expect("foreground");
        assert!((angle - 12.0).abs() < 1.5, "angle {angle}");
    }

    #[test]
    fn counter_tilted_landscape_block_reports_negative_tilt() {
        let image = rotated_rect(160, 120, 70.0, 24.0, -8.0, 255, 0);
        let angle = estimate_rotation_angle(&image, &FixConfig::default()).expect("foreground");
        assert!((angle + 8.0).abs() < 1.5, "angle {angle}");
    }
}
