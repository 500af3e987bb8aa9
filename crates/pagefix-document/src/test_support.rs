// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Synthetic page builders shared by the unit tests.

use image::{GrayImage, Luma};
use pagefix_core::Point;

/// `width x height` image of `bg` with the inclusive block `from..=to` set to `fg`.
pub(crate) fn filled_rect(
    width: u32,
    height: u32,
    from: (u32, u32),
    to: (u32, u32),
    fg: u8,
    bg: u8,
) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| {
        if x >= from.0 && x <= to.0 && y >= from.1 && y <= to.1 {
            Luma([fg])
        } else {
            Luma([bg])
        }
    })
}

/// A `rect_w x rect_h` rectangle centred in the image and turned by
/// `angle_degrees` (clockwise as displayed, since y points down).
pub(crate) fn rotated_rect(
    width: u32,
    height: u32,
    rect_w: f64,
    rect_h: f64,
    angle_degrees: f64,
    fg: u8,
    bg: u8,
) -> GrayImage {
    let (cx, cy) = ((width as f64 - 1.0) / 2.0, (height as f64 - 1.0) / 2.0);
    let theta = angle_degrees.to_radians();
    let (c, s) = (theta.cos(), theta.sin());
    GrayImage::from_fn(width, height, |x, y| {
        let (dx, dy) = (x as f64 - cx, y as f64 - cy);
        let along = dx * c + dy * s;
        let across = -dx * s + dy * c;
        if along.abs() <= rect_w / 2.0 && across.abs() <= rect_h / 2.0 {
            Luma([fg])
        } else {
            Luma([bg])
        }
    })
}

/// Right isosceles triangle with its right angle at `corner` and legs of
/// `leg` pixels running right and down. The hypotenuse is an exact diagonal.
pub(crate) fn right_triangle(
    width: u32,
    height: u32,
    corner: (u32, u32),
    leg: u32,
    fg: u8,
    bg: u8,
) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| {
        if x >= corner.0 && y >= corner.1 && (x - corner.0) + (y - corner.1) <= leg {
            Luma([fg])
        } else {
            Luma([bg])
        }
    })
}

/// True when every sample is either 0 or 255.
pub(crate) fn is_binary(image: &GrayImage) -> bool {
    image.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255)
}

/// True when `p` lies inside or on the boundary of the convex polygon `hull`.
pub(crate) fn hull_contains(hull: &[Point], p: &Point) -> bool {
    let n = hull.len();
    if n < 3 {
        return false;
    }
    let mut sign = 0.0f64;
    for i in 0..n {
        let a = hull[i];
        let b = hull[(i + 1) % n];
        let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
        if cross.abs() < 1e-9 {
            continue;
        }
        if sign == 0.0 {
            sign = cross.signum();
        } else if cross.signum() != sign {
            return false;
        }
    }
    true
}

/// Shoelace area of a simple polygon.
pub(crate) fn polygon_area(polygon: &[Point]) -> f64 {
    let n = polygon.len();
    let twice: f64 = (0..n)
        .map(|i| {
            let (a, b) = (polygon[i], polygon[(i + 1) % n]);
            a.x * b.y - b.x * a.y
        })
        .sum();
    twice.abs() / 2.0
}
