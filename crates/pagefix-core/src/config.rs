// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Orientation pipeline configuration. Every tunable heuristic lives here as a
// named constant and as a field of `FixConfig`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PagefixError, Result};

/// Fraction of the height/width stripped from each edge before processing.
pub const DEFAULT_BORDER_FRACTION: f64 = 0.01;
/// Side length of the square median-filter window.
pub const DEFAULT_MEDIAN_KERNEL_SIZE: u32 = 9;
/// Consecutive hull edges whose angles differ by at most this many degrees
/// are merged into one boundary line.
pub const DEFAULT_MERGE_ANGLE_DEGREES: f64 = 15.0;
/// Number of longest boundary lines kept after hull simplification.
pub const BOUNDARY_LINE_COUNT: usize = 4;
/// Horizontal padding after the content crop is `width / DEFAULT_PAD_X_DIVISOR`.
pub const DEFAULT_PAD_X_DIVISOR: u32 = 10;
/// Vertical padding after the content crop is `height / DEFAULT_PAD_Y_DIVISOR`.
pub const DEFAULT_PAD_Y_DIVISOR: u32 = 5;
/// Samples at or above this level count as foreground after interpolation.
pub const BINARY_THRESHOLD: u8 = 128;

/// Resampling filter used by the rotation and perspective warps.
///
/// Nearest keeps a binary page binary. Bilinear rotation output is
/// re-thresholded at [`BINARY_THRESHOLD`] before the later stages see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resampling {
    #[default]
    Nearest,
    Bilinear,
}

/// How the four document corners are derived from the boundary lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CornerStrategy {
    /// Take the endpoints of the left and right boundary lines.
    #[default]
    Endpoints,
    /// Intersect the left/right lines with the top/bottom lines.
    Intersections,
}

/// Settings for one run of the orientation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixConfig {
    /// Margin trimmed from each edge, as a fraction of the dimension.
    pub border_fraction: f64,
    /// Median filter window (odd, >= 1).
    pub median_kernel_size: u32,
    /// Maximum angle difference for merging hull edges, in degrees.
    pub merge_angle_degrees: f64,
    /// Divisor for the left/right padding after the content crop.
    pub pad_x_divisor: u32,
    /// Divisor for the top/bottom padding after the content crop.
    pub pad_y_divisor: u32,
    /// Resampling used for rotation and perspective warps.
    pub interpolation: Resampling,
    /// Corner derivation method.
    pub corner_strategy: CornerStrategy,
}

impl Default for FixConfig {
    fn default() -> Self {
        Self {
            border_fraction: DEFAULT_BORDER_FRACTION,
            median_kernel_size: DEFAULT_MEDIAN_KERNEL_SIZE,
            merge_angle_degrees: DEFAULT_MERGE_ANGLE_DEGREES,
            pad_x_divisor: DEFAULT_PAD_X_DIVISOR,
            pad_y_divisor: DEFAULT_PAD_Y_DIVISOR,
            interpolation: Resampling::default(),
            corner_strategy: CornerStrategy::default(),
        }
    }
}

impl FixConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: FixConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Median filter radius derived from the kernel size.
    pub fn median_radius(&self) -> u32 {
        self.median_kernel_size / 2
    }

    /// Check that every field is in its usable range.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..0.5).contains(&self.border_fraction) {
            return Err(PagefixError::InvalidConfig(format!(
                "border_fraction must be in [0, 0.5), got {}",
                self.border_fraction
            )));
        }
        if self.median_kernel_size == 0 || self.median_kernel_size % 2 == 0 {
            return Err(PagefixError::InvalidConfig(format!(
                "median_kernel_size must be odd and positive, got {}",
                self.median_kernel_size
            )));
        }
        if !(self.merge_angle_degrees.is_finite() && self.merge_angle_degrees >= 0.0) {
            return Err(PagefixError::InvalidConfig(format!(
                "merge_angle_degrees must be a non-negative number, got {}",
                self.merge_angle_degrees
            )));
        }
        if self.pad_x_divisor == 0 || self.pad_y_divisor == 0 {
            return Err(PagefixError::InvalidConfig(
                "padding divisors must be positive".into(),
            ));
        }
        Ok(())
    }
}
