// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image I/O — enumerate inputs, decode to grayscale, write results and
// per-page log files. The orientation pipeline itself never touches the
// filesystem; everything that does lives here.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use image::{GrayImage, ImageFormat};
use pagefix_core::error::PagefixError;
use tracing::{debug, info, instrument};

/// Files to process: `path` itself if it is a file, otherwise the regular
/// files directly inside the directory, sorted by name.
pub fn list_input_files(path: impl AsRef<Path>) -> Result<Vec<PathBuf>, PagefixError> {
    let path = path.as_ref();
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    debug!(count = files.len(), dir = %path.display(), "Input files listed");
    Ok(files)
}

/// Load an image file and convert it to 8-bit grayscale.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn read_grayscale(path: impl AsRef<Path>) -> Result<GrayImage, PagefixError> {
    let img = image::open(path.as_ref()).map_err(|err| {
        PagefixError::ImageError(format!(
            "failed to open {}: {}",
            path.as_ref().display(),
            err
        ))
    })?;
    info!(width = img.width(), height = img.height(), "Image loaded");
    Ok(img.to_luma8())
}

/// Decode raw encoded bytes (PNG, JPEG, TIFF, ...) to 8-bit grayscale.
#[instrument(skip(data), fields(data_len = data.len()))]
pub fn decode_grayscale(data: &[u8]) -> Result<GrayImage, PagefixError> {
    let img = image::load_from_memory(data).map_err(|err| {
        PagefixError::ImageError(format!("failed to decode image: {}", err))
    })?;
    debug!(width = img.width(), height = img.height(), "Image decoded from bytes");
    Ok(img.to_luma8())
}

/// Encode a grayscale image as PNG bytes.
pub fn encode_png(image: &GrayImage) -> Result<Vec<u8>, PagefixError> {
    let mut buffer = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buffer);
    image.write_to(&mut cursor, ImageFormat::Png).map_err(|err| {
        PagefixError::ImageError(format!("image encoding failed: {}", err))
    })?;
    Ok(buffer)
}

/// Write `image` to `dir/filename`, creating `dir` if needed. The format is
/// inferred from the file extension. Returns the written path.
pub fn write_image(
    image: &GrayImage,
    dir: impl AsRef<Path>,
    filename: &str,
) -> Result<PathBuf, PagefixError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    image.save(&path).map_err(|err| {
        PagefixError::ImageError(format!(
            "failed to save image to {}: {}",
            path.display(),
            err
        ))
    })?;
    debug!(path = %path.display(), "Image written");
    Ok(path)
}

/// Append `line` to the text log `dir/<stem>.txt` that belongs to `filename`.
pub fn append_log_line(
    line: &str,
    dir: impl AsRef<Path>,
    filename: &str,
) -> Result<PathBuf, PagefixError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let path = dir.join(with_extension(filename, "txt"));
    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    writeln!(file, "{line}")?;
    Ok(path)
}

/// `filename` with its extension replaced by (or extended with) `extension`.
pub fn with_extension(filename: &str, extension: &str) -> String {
    Path::new(filename)
        .with_extension(extension)
        .to_string_lossy()
        .into_owned()
}

/// `filename` with `suffix` inserted before the extension and the extension
/// replaced by `extension`, e.g. `page.jpg` -> `page_rotated.png`.
pub fn with_suffix(filename: &str, suffix: &str, extension: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{stem}{suffix}.{extension}")
}
