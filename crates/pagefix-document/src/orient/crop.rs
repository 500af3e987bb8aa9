// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Content crop: tighten to the smoothed foreground, then pad proportionally.

use image::{GrayImage, Luma, imageops};
use pagefix_core::{BoundingRect, FixConfig, PagefixError, Result, Stage};
use tracing::{debug, info, instrument};

use super::foreground::{bounding_rect, has_empty_extent, smooth};

/// Bounding rectangle of the median-smoothed foreground.
pub fn content_bounds(image: &GrayImage, config: &FixConfig) -> Result<BoundingRect> {
    let empty = PagefixError::EmptyImage {
        stage: Stage::ContentCrop,
    };
    if has_empty_extent(image) {
        return Err(empty);
    }
    bounding_rect(&smooth(image, config)).ok_or(empty)
}

/// Surround `image` with `pad_x` columns left and right and `pad_y` rows top
/// and bottom, all set to `value`.
pub fn pad_constant(image: &GrayImage, pad_x: u32, pad_y: u32, value: u8) -> GrayImage {
    let mut padded = GrayImage::from_pixel(
        image.width() + 2 * pad_x,
        image.height() + 2 * pad_y,
        Luma([value]),
    );
    imageops::replace(&mut padded, image, pad_x as i64, pad_y as i64);
    padded
}

/// Crop to the content and re-pad.
///
/// Bounds come from a smoothed copy so speckle cannot widen them, but the crop
/// is taken from the unsmoothed `image`. The result carries `height / 5` rows
/// of background above and below and `width / 10` columns left and right,
/// measured on the cropped size.
#[instrument(skip_all, fields(width = image.width(), height = image.height()))]
pub fn crop_to_content(image: &GrayImage, config: &FixConfig) -> Result<GrayImage> {
    let bounds = content_bounds(image, config)?;
    let cropped = imageops::crop_imm(image, bounds.x, bounds.y, bounds.width, bounds.height).to_image();

    let pad_x = cropped.width() / config.pad_x_divisor;
    let pad_y = cropped.height() / config.pad_y_divisor;
    let padded = pad_constant(&cropped, pad_x, pad_y, 0);

    info!(
        x = bounds.x,
        y = bounds.y,
        crop_w = bounds.width,
        crop_h = bounds.height,
        "Cropped to content"
    );
    debug!(pad_x, pad_y, out_w = padded.width(), out_h = padded.height(), "Padding added");
    Ok(padded)
}
