// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global binarization for grayscale scans that are not already black and white.

use image::{GrayImage, Luma};
use imageproc::contrast::otsu_level;
use tracing::{debug, instrument};

/// Threshold `image` at its Otsu level: samples at or below the level become
/// 0, the rest 255.
#[instrument(skip_all, fields(width = image.width(), height = image.height()))]
pub fn binarize_otsu(image: &GrayImage) -> GrayImage {
    let level = otsu_level(image);
    debug!(level, "Otsu threshold computed");
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        if image.get_pixel(x, y).0[0] <= level {
            Luma([0])
        } else {
            Luma([255])
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::is_binary;

    #[test]
    fn two_tone_scan_splits_cleanly() {
        let image = GrayImage::from_fn(40, 20, |x, _| if x < 15 { Luma([40]) } else { Luma([210]) });
        let binary = binarize_otsu(&image);
        assert!(is_binary(&binary));
        assert_eq!(binary.get_pixel(3, 3).0[0], 0);
        assert_eq!(binary.get_pixel(30, 3).0[0], 255);
    }

    #[test]
    fn grayscale_is_not_binary() {
        let image = GrayImage::from_pixel(3, 3, Luma([128]));
        assert!(!is_binary(&image));
    }
}
