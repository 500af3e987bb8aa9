// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The orientation pipeline: trim, estimate skew, rotate, crop, straighten.

use image::GrayImage;
use pagefix_core::{FixConfig, Result};
use tracing::{info, instrument};

use super::crop::crop_to_content;
use super::perspective::correct_perspective_with_detection;
use super::preprocess::invert_and_trim;
use super::quad::Detection;
use super::rotate::rotate_image;
use super::skew::estimate_rotation_angle;

/// Intermediate results of one pipeline run, for debugging and reporting.
#[derive(Debug, Clone)]
pub struct FixTrace {
    /// Inverted, border-trimmed input.
    pub trimmed: GrayImage,
    /// Estimated skew angle in degrees.
    pub angle: f64,
    /// `trimmed` after rotation by `angle`.
    pub rotated: GrayImage,
    /// `rotated` cropped to its content and re-padded.
    pub cropped: GrayImage,
    /// Quadrilateral found in `cropped`.
    pub detection: Detection,
    /// Final image, in the input's polarity.
    pub output: GrayImage,
}

/// Corrects skew and perspective of binary document images.
///
/// Holds only configuration, so one fixer can be shared across threads and
/// used for any number of images.
///
/// ```ignore
/// let fixer = OrientationFixer::new(FixConfig::default())?;
/// let straightened = fixer.fix(&scan)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct OrientationFixer {
    config: FixConfig,
}

impl OrientationFixer {
    /// Create a fixer after validating `config`.
    pub fn new(config: FixConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &FixConfig {
        &self.config
    }

    /// Run the full pipeline on a binary image (dark content on a light
    /// page) and return the straightened, cropped page in the same polarity.
    pub fn fix(&self, image: &GrayImage) -> Result<GrayImage> {
        self.fix_with_trace(image).map(|trace| trace.output)
    }

    /// Run the full pipeline and keep every intermediate image.
    ///
    /// Any stage failure aborts the run; no partial output is produced.
    #[instrument(skip_all, fields(width = image.width(), height = image.height()))]
    pub fn fix_with_trace(&self, image: &GrayImage) -> Result<FixTrace> {
        let config = &self.config;

        let trimmed = invert_and_trim(image, config.border_fraction);
        let angle = estimate_rotation_angle(&trimmed, config)?;
        let rotated = rotate_image(&trimmed, angle, config.interpolation);
        let cropped = crop_to_content(&rotated, config)?;
        let (output, detection) = correct_perspective_with_detection(&cropped, config)?;

        info!(
            angle,
            out_w = output.width(),
            out_h = output.height(),
            "Orientation fixed"
        );
        Ok(FixTrace {
            trimmed,
            angle,
            rotated,
            cropped,
            detection,
            output,
        })
    }
}

/// Run the pipeline with the default configuration.
pub fn fix_orientation(image: &GrayImage) -> Result<GrayImage> {
    OrientationFixer::default().fix(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orient::crop::content_bounds;
    use crate::orient::foreground::foreground_points;
    use crate::orient::geometry::{convex_hull, min_area_rect};
    use crate::test_support::rotated_rect;
    use image::Luma;
    use pagefix_core::{PagefixError, Stage};

    /// Dark pixels of a page, as the foreground of a thresholded inverse.
    fn dark_mask(image: &GrayImage) -> GrayImage {
        GrayImage::from_fn(image.width(), image.height(), |x, y| {
            if image.get_pixel(x, y).0[0] < 128 {
                Luma([255])
            } else {
                Luma([0])
            }
        })
    }

    #[test]
    fn tilted_square_comes_out_level_with_its_area() {
        let side = 56.0;
        let expected = side * side;
        for angle in [5.0, -5.0, 10.0, -10.0, 20.0, 30.0] {
            // Black square on white paper.
            let page = rotated_rect(100, 100, side, side, angle, 0, 255);

            let output = fix_orientation(&page).expect("square page");
            let mask = dark_mask(&output);

            let points = foreground_points(&mask);
            let area = points.len() as f64;
            assert!(
                (area - expected).abs() / expected < 0.05,
                "tilt {angle}: area {area}, expected {expected}"
            );

            let rect = min_area_rect(&convex_hull(&points)).expect("foreground");
            // Fold into [-45, 45) around the nearest axis.
            let tilt = (rect.angle + 45.0).rem_euclid(90.0) - 45.0;
            assert!(tilt.abs() <= 1.0, "tilt {angle}: residual {tilt}");
        }
    }

    #[test]
    fn blank_page_fails_at_skew_estimation() {
        let page = GrayImage::from_pixel(80, 60, Luma([255u8]));
        let err = fix_orientation(&page).unwrap_err();
        assert!(matches!(
            err,
            PagefixError::EmptyImage {
                stage: Stage::SkewEstimation
            }
        ));
    }

    #[test]
    fn trace_records_every_stage() {
        let page = rotated_rect(120, 100, 60.0, 40.0, -6.0, 0, 255);
        let fixer = OrientationFixer::new(FixConfig::default()).expect("valid config");
        let trace = fixer.fix_with_trace(&page).expect("page");

        // 1% of 120x100 is 1 pixel per side.
        assert_eq!(trace.trimmed.dimensions(), (118, 98));
        assert_eq!(trace.rotated.dimensions(), trace.trimmed.dimensions());
        assert!((trace.angle + 6.0).abs() < 1.5, "angle {}", trace.angle);
        assert_eq!(trace.output.dimensions(), trace.cropped.dimensions());
        assert!(trace.detection.corners.has_distinct_corners());

        // Content bounds come from the rotated image; the crop adds a tenth
        // of the content width left and right and a fifth of its height above
        // and below, all background.
        let bounds = content_bounds(&trace.rotated, fixer.config()).expect("content");
        let (pad_x, pad_y) = (bounds.width / 10, bounds.height / 5);
        assert_eq!(
            trace.cropped.dimensions(),
            (bounds.width + 2 * pad_x, bounds.height + 2 * pad_y)
        );
        let (w, h) = trace.cropped.dimensions();
        for (x, y, pixel) in trace.cropped.enumerate_pixels() {
            if x < pad_x || x >= w - pad_x || y < pad_y || y >= h - pad_y {
                assert_eq!(pixel.0[0], 0, "padding at ({x}, {y})");
            }
        }
    }

    #[test]
    fn invalid_config_is_rejected_up_front() {
        let config = FixConfig {
            median_kernel_size: 4,
            ..FixConfig::default()
        };
        assert!(matches!(
            OrientationFixer::new(config),
            Err(PagefixError::InvalidConfig(_))
        ));
    }

    #[test]
    fn intersection_strategy_runs_end_to_end() {
        let config = FixConfig {
            corner_strategy: pagefix_core::CornerStrategy::Intersections,
            ..FixConfig::default()
        };
        let page = rotated_rect(120, 100, 60.0, 40.0, 4.0, 0, 255);
        let fixer = OrientationFixer::new(config).expect("valid config");
        let output = fixer.fix(&page).expect("page");
        let mask = dark_mask(&output);
        let area = foreground_points(&mask).len() as f64;
        assert!((area - 2400.0).abs() / 2400.0 < 0.1, "area {area}");
    }
}
