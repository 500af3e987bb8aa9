// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Plane geometry helpers: convex hull, minimum-area rectangle, line intersection.

use imageproc::point::Point as PixelPoint;
use pagefix_core::{LineSegment, PagefixError, Point, Result, RotatedRect};

/// Cross products smaller than this mark two lines as parallel.
pub const PARALLEL_EPSILON: f64 = 1e-7;

/// Convex hull of a pixel set, as an ordered cyclic polygon.
pub fn convex_hull(points: &[PixelPoint<i32>]) -> Vec<Point> {
    imageproc::geometry::convex_hull(points)
        .into_iter()
        .map(|p| Point::new(p.x as f64, p.y as f64))
        .collect()
}

/// Minimum-area enclosing rectangle of a convex polygon (rotating calipers).
///
/// Each hull edge is tried as one side of the rectangle; the hull is projected
/// onto the edge direction and its normal, and the smallest product of the two
/// extents wins. Returns `None` for an empty hull.
pub fn min_area_rect(hull: &[Point]) -> Option<RotatedRect> {
    let first = *hull.first()?;
    let n = hull.len();
    let mut best: Option<RotatedRect> = None;

    for i in 0..n {
        let origin = hull[i];
        let next = hull[(i + 1) % n];
        let (dx, dy) = (next.x - origin.x, next.y - origin.y);
        let edge_length = dx.hypot(dy);
        if edge_length < f64::EPSILON {
            continue;
        }

        let (ux, uy) = (dx / edge_length, dy / edge_length);
        let (vx, vy) = (-uy, ux);

        let mut min_u = f64::MAX;
        let mut max_u = f64::MIN;
        let mut min_v = f64::MAX;
        let mut max_v = f64::MIN;
        for p in hull {
            let (rx, ry) = (p.x - origin.x, p.y - origin.y);
            let along = rx * ux + ry * uy;
            let across = rx * vx + ry * vy;
            min_u = min_u.min(along);
            max_u = max_u.max(along);
            min_v = min_v.min(across);
            max_v = max_v.max(across);
        }

        let width = max_u - min_u;
        let height = max_v - min_v;
        if best.is_some_and(|rect| rect.area() <= width * height) {
            continue;
        }

        let mid_u = (min_u + max_u) / 2.0;
        let mid_v = (min_v + max_v) / 2.0;
        let center = Point::new(
            origin.x + mid_u * ux + mid_v * vx,
            origin.y + mid_u * uy + mid_v * vy,
        );
        best = Some(normalized_rect(center, width, height, uy.atan2(ux).to_degrees()));
    }

    // A single point (or a hull of repeated points) has no usable edge.
    Some(best.unwrap_or(RotatedRect {
        center: first,
        width: 0.0,
        height: 0.0,
        angle: -90.0,
    }))
}

/// Fold the side direction into `[-90, 0)`. Every quarter turn swaps which
/// extent lies along the reported direction.
fn normalized_rect(center: Point, mut width: f64, mut height: f64, mut angle: f64) -> RotatedRect {
    while angle >= 0.0 {
        angle -= 90.0;
        std::mem::swap(&mut width, &mut height);
    }
    while angle < -90.0 {
        angle += 90.0;
        std::mem::swap(&mut width, &mut height);
    }
    RotatedRect {
        center,
        width,
        height,
        angle,
    }
}

/// Intersection of the infinite lines through two segments.
pub fn intersect_lines(first: &LineSegment, second: &LineSegment) -> Result<Point> {
    let (d1x, d1y) = (first.end.x - first.start.x, first.end.y - first.start.y);
    let (d2x, d2y) = (second.end.x - second.start.x, second.end.y - second.start.y);
    let cross = d1x * d2y - d1y * d2x;
    if cross.abs() < PARALLEL_EPSILON {
        return Err(PagefixError::ParallelLines);
    }

    let (ox, oy) = (second.start.x - first.start.x, second.start.y - first.start.y);
    let t = (ox * d2y - oy * d2x) / cross;
    Ok(Point::new(first.start.x + d1x * t, first.start.y + d1y * t))
}
