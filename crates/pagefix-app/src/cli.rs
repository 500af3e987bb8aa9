// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Straighten scanned binary document images: remove skew and perspective
/// distortion and crop to the page.
#[derive(Debug, Clone, Parser)]
#[command(name = "pagefix")]
#[command(version)]
pub struct Cli {
    /// Input directory containing images, or a single image file.
    pub input_path: PathBuf,

    /// Output directory (created if missing).
    pub output_path: PathBuf,

    /// Write every intermediate stage image and a per-page text log.
    #[arg(short, long)]
    pub debug: bool,

    /// JSON file overriding pipeline settings (missing fields keep defaults).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Threshold grayscale input with Otsu's method before processing.
    #[arg(long)]
    pub binarize: bool,
}
