// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Geometric domain types for the orientation pipeline.

use serde::{Deserialize, Serialize};

/// Corners closer than this (in pixels) are treated as the same point.
pub const CORNER_EPSILON: f64 = 1e-6;

/// A point in image space. `x` grows to the right, `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// `x + y`, used to order points along the top-left/bottom-right diagonal.
    pub fn coordinate_sum(&self) -> f64 {
        self.x + self.y
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// An ordered pair of points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Direction angle in degrees, in (-180, 180].
    pub fn angle(&self) -> f64 {
        (self.end.y - self.start.y)
            .atan2(self.end.x - self.start.x)
            .to_degrees()
    }

    /// Sum of both endpoints' x coordinates.
    pub fn x_sum(&self) -> f64 {
        self.start.x + self.end.x
    }

    /// Sum of both endpoints' y coordinates.
    pub fn y_sum(&self) -> f64 {
        self.start.y + self.end.y
    }
}

/// The four labelled corners of a document outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quadrilateral {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_right: Point,
    pub bottom_left: Point,
}

impl Quadrilateral {
    /// Corners in the fixed order `[top-left, top-right, bottom-right, bottom-left]`.
    pub fn as_array(&self) -> [Point; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }

    /// True when no two corners coincide.
    pub fn has_distinct_corners(&self) -> bool {
        let corners = self.as_array();
        for i in 0..corners.len() {
            for j in (i + 1)..corners.len() {
                if corners[i].distance_to(&corners[j]) < CORNER_EPSILON {
                    return false;
                }
            }
        }
        true
    }
}

/// Axis-aligned bounding rectangle of a pixel set. `width` and `height` count
/// pixels, so a single pixel has a 1x1 rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingRect {
    /// Rectangle spanning the inclusive pixel extents `[min_x, max_x] x [min_y, max_y]`.
    pub fn from_extents(min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> Self {
        Self {
            x: min_x,
            y: min_y,
            width: max_x - min_x + 1,
            height: max_y - min_y + 1,
        }
    }

    pub fn right(&self) -> u32 {
        self.x + self.width - 1
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height - 1
    }

    /// Outermost pixel centres as a quadrilateral.
    pub fn corners(&self) -> Quadrilateral {
        let (left, top) = (self.x as f64, self.y as f64);
        let (right, bottom) = (self.right() as f64, self.bottom() as f64);
        Quadrilateral {
            top_left: Point::new(left, top),
            top_right: Point::new(right, top),
            bottom_right: Point::new(right, bottom),
            bottom_left: Point::new(left, bottom),
        }
    }
}

/// Minimum-area enclosing rectangle of a point set.
///
/// `width` is the extent along the direction given by `angle`, `height` the
/// extent across it. `angle` is in degrees and always lies in `[-90, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotatedRect {
    pub center: Point,
    pub width: f64,
    pub height: f64,
    pub angle: f64,
}

impl RotatedRect {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
