// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Foreground pixel extraction. Foreground is any nonzero sample.

use image::GrayImage;
use imageproc::filter::median_filter;
use imageproc::point::Point as PixelPoint;
use pagefix_core::{BoundingRect, FixConfig};

/// True when the image has no pixels at all (zero width or height).
pub fn has_empty_extent(image: &GrayImage) -> bool {
    image.width() == 0 || image.height() == 0
}

/// Median-filter the image with the configured kernel to suppress speckle.
pub fn smooth(image: &GrayImage, config: &FixConfig) -> GrayImage {
    let radius = config.median_radius();
    median_filter(image, radius, radius)
}

/// Every foreground pixel, in row-major order.
pub fn foreground_points(image: &GrayImage) -> Vec<PixelPoint<i32>> {
    image
        .enumerate_pixels()
        .filter(|(_, _, pixel)| pixel.0[0] != 0)
        .map(|(x, y, _)| PixelPoint::new(x as i32, y as i32))
        .collect()
}

/// The leftmost and rightmost foreground pixel of every row.
///
/// These points have the same convex hull as the full foreground set, at a
/// fraction of the size.
pub fn row_extremes(image: &GrayImage) -> Vec<PixelPoint<i32>> {
    let mut points = Vec::new();
    for (y, row) in image.rows().enumerate() {
        let mut first = None;
        let mut last = None;
        for (x, pixel) in row.enumerate() {
            if pixel.0[0] != 0 {
                first.get_or_insert(x);
                last = Some(x);
            }
        }
        if let (Some(first), Some(last)) = (first, last) {
            points.push(PixelPoint::new(first as i32, y as i32));
            if last != first {
                points.push(PixelPoint::new(last as i32, y as i32));
            }
        }
    }
    points
}

/// Axis-aligned bounding rectangle of the foreground, or `None` if there is none.
pub fn bounding_rect(image: &GrayImage) -> Option<BoundingRect> {
    let mut extents: Option<(u32, u32, u32, u32)> = None;
    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel.0[0] == 0 {
            continue;
        }
        extents = Some(match extents {
            None => (x, y, x, y),
            Some((min_x, min_y, max_x, max_y)) => {
                (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
            }
        });
    }
    extents.map(|(min_x, min_y, max_x, max_y)| BoundingRect::from_extents(min_x, min_y, max_x, max_y))
}
