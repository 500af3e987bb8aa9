// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document quadrilateral detection: hull simplification into boundary lines and
// classification of their endpoints into labelled corners.

use image::GrayImage;
use pagefix_core::config::BOUNDARY_LINE_COUNT;
use pagefix_core::{
    BoundingRect, CornerStrategy, FixConfig, LineSegment, PagefixError, Point, Quadrilateral,
    Result, Stage,
};
use serde::Serialize;
use tracing::{debug, info, instrument};

use super::foreground::{has_empty_extent, row_extremes};
use super::geometry::{convex_hull, intersect_lines};

/// Everything the detector found on one image.
#[derive(Debug, Clone, Serialize)]
pub struct Detection {
    /// Convex hull of the foreground.
    pub hull: Vec<Point>,
    /// The longest boundary lines, longest first.
    pub lines: Vec<LineSegment>,
    /// The classified document corners.
    pub corners: Quadrilateral,
    /// Axis-aligned bounds of the hull.
    pub bounds: BoundingRect,
}

/// Merge consecutive near-collinear hull edges into longer lines.
///
/// The hull is walked as a closed polygon. The running angle starts as the
/// first edge's signed angle; every later edge is compared by its absolute
/// angle, and after each step the running angle becomes the absolute angle of
/// the newest line. An edge within `merge_angle_degrees` extends the newest
/// line to its end point; anything else starts a new line.
pub fn simplify_hull(hull: &[Point], merge_angle_degrees: f64) -> Vec<LineSegment> {
    if hull.len() < 2 {
        return Vec::new();
    }

    let mut closed = hull.to_vec();
    closed.push(hull[0]);

    let mut lines = vec![LineSegment::new(closed[0], closed[1])];
    let mut running_angle = lines[0].angle();
    for pair in closed[1..].windows(2) {
        let edge = LineSegment::new(pair[0], pair[1]);
        let last = lines.len() - 1;
        if (running_angle - edge.angle().abs()).abs() <= merge_angle_degrees {
            lines[last].end = pair[1];
        } else {
            lines.push(edge);
        }
        running_angle = lines[lines.len() - 1].angle().abs();
    }
    lines
}

/// The `BOUNDARY_LINE_COUNT` longest simplified hull lines, longest first.
pub fn boundary_lines(hull: &[Point], config: &FixConfig) -> Vec<LineSegment> {
    let mut lines = simplify_hull(hull, config.merge_angle_degrees);
    lines.sort_by(|a, b| b.length().total_cmp(&a.length()));
    lines.truncate(BOUNDARY_LINE_COUNT);
    debug!(kept = lines.len(), "Boundary lines selected");
    lines
}

/// Indices of the left line (smallest x sum) and right line (largest x sum).
/// Ties go to the earlier line.
fn left_right_indices(lines: &[LineSegment]) -> (usize, usize) {
    let mut left = 0;
    let mut right = 0;
    for (i, line) in lines.iter().enumerate() {
        if line.x_sum() < lines[left].x_sum() {
            left = i;
        }
        if line.x_sum() > lines[right].x_sum() {
            right = i;
        }
    }
    (left, right)
}

/// Split a side line into its (upper, lower) endpoint by `x + y`.
fn upper_lower(line: &LineSegment) -> (Point, Point) {
    if line.start.coordinate_sum() <= line.end.coordinate_sum() {
        (line.start, line.end)
    } else {
        (line.end, line.start)
    }
}

fn require_four(lines: &[LineSegment]) -> Result<&[LineSegment]> {
    if lines.len() < BOUNDARY_LINE_COUNT {
        return Err(PagefixError::InsufficientBoundary { found: lines.len() });
    }
    Ok(&lines[..BOUNDARY_LINE_COUNT])
}

/// Label the document corners from the endpoints of the left and right lines.
///
/// The line whose endpoints have the smallest summed x is the left side, the
/// largest is the right side. On each side the endpoint with the smaller
/// `x + y` is the top corner. Only valid while the page is within about 45
/// degrees of upright.
pub fn classify_corners(lines: &[LineSegment]) -> Result<Quadrilateral> {
    let lines = require_four(lines)?;
    let (left, right) = left_right_indices(lines);
    let (top_left, bottom_left) = upper_lower(&lines[left]);
    let (top_right, bottom_right) = upper_lower(&lines[right]);
    Ok(Quadrilateral {
        top_left,
        top_right,
        bottom_right,
        bottom_left,
    })
}

/// Label the document corners by intersecting the side lines with the top and
/// bottom lines.
///
/// Left and right are chosen as in [`classify_corners`]; of the remaining two
/// lines the one with the smaller summed y is the top.
pub fn classify_corners_by_intersection(lines: &[LineSegment]) -> Result<Quadrilateral> {
    let lines = require_four(lines)?;
    let (left, right) = left_right_indices(lines);
    if left == right {
        return Err(PagefixError::DegenerateQuadrilateral);
    }

    let mut rest = (0..lines.len()).filter(|&i| i != left && i != right);
    let (Some(a), Some(b)) = (rest.next(), rest.next()) else {
        return Err(PagefixError::DegenerateQuadrilateral);
    };
    let (top, bottom) = if lines[a].y_sum() <= lines[b].y_sum() {
        (&lines[a], &lines[b])
    } else {
        (&lines[b], &lines[a])
    };

    Ok(Quadrilateral {
        top_left: intersect_lines(top, &lines[left])?,
        top_right: intersect_lines(top, &lines[right])?,
        bottom_right: intersect_lines(bottom, &lines[right])?,
        bottom_left: intersect_lines(bottom, &lines[left])?,
    })
}

fn hull_bounds(hull: &[Point]) -> Option<BoundingRect> {
    let first = hull.first()?;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for p in hull {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    Some(BoundingRect::from_extents(
        min_x as u32,
        min_y as u32,
        max_x as u32,
        max_y as u32,
    ))
}

/// Find the document outline in an inverted (foreground = nonzero) image.
#[instrument(skip_all, fields(width = image.width(), height = image.height()))]
pub fn detect_quadrilateral(image: &GrayImage, config: &FixConfig) -> Result<Detection> {
    let empty = PagefixError::EmptyImage {
        stage: Stage::QuadrilateralDetection,
    };
    if has_empty_extent(image) {
        return Err(empty);
    }

    let points = row_extremes(image);
    let hull = convex_hull(&points);
    let bounds = hull_bounds(&hull).ok_or(empty)?;

    let lines = boundary_lines(&hull, config);
    let corners = match config.corner_strategy {
        CornerStrategy::Endpoints => classify_corners(&lines)?,
        CornerStrategy::Intersections => classify_corners_by_intersection(&lines)?,
    };

    info!(
        hull = hull.len(),
        top_left = %corners.top_left,
        top_right = %corners.top_right,
        bottom_right = %corners.bottom_right,
        bottom_left = %corners.bottom_left,
        "Document quadrilateral detected"
    );
    Ok(Detection {
        hull,
        lines,
        corners,
        bounds,
    })
}
