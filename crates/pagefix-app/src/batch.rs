// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Batch driver: run the orientation fixer over every input file.
//
// A failing page is logged and skipped. Errors whose scope is the whole run
// (configuration, input enumeration) abort it.

use std::path::{Path, PathBuf};

use pagefix_core::human_errors::{Scope, humanize_error};
use pagefix_core::{FixConfig, PagefixError, Result};
use pagefix_document::image::io::{
    append_log_line, list_input_files, read_grayscale, with_suffix, write_image,
};
use pagefix_document::image::binarize_otsu;
use pagefix_document::{FixTrace, OrientationFixer};
use tracing::{info, instrument, warn};

use crate::cli::Cli;

/// Outcome counts for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub failed: usize,
}

/// Load the configuration named on the command line, or the defaults.
pub fn load_config(path: Option<&Path>) -> Result<FixConfig> {
    match path {
        Some(path) => {
            let config = FixConfig::from_json_file(path)?;
            info!(path = %path.display(), "Configuration loaded");
            Ok(config)
        }
        None => Ok(FixConfig::default()),
    }
}

/// Process every input named by `cli` sequentially.
pub fn run(cli: &Cli) -> Result<BatchSummary> {
    let config = load_config(cli.config.as_deref())?;
    let fixer = OrientationFixer::new(config)?;
    let files = list_input_files(&cli.input_path)?;
    std::fs::create_dir_all(&cli.output_path)?;
    info!(count = files.len(), "Processing inputs");

    let mut summary = BatchSummary::default();
    for file in &files {
        match process_file(&fixer, file, cli) {
            Ok(written) => {
                summary.processed += 1;
                info!(output = %written.display(), "Page written");
            }
            Err(err) => {
                if aborts_run(&err) {
                    return Err(err);
                }
                summary.failed += 1;
                let human = humanize_error(&err);
                warn!(
                    file = %file.display(),
                    %err,
                    suggestion = %human.suggestion,
                    "{}", human.message
                );
            }
        }
    }
    Ok(summary)
}

/// True when `err` would fail every remaining page the same way.
fn aborts_run(err: &PagefixError) -> bool {
    humanize_error(err).scope == Scope::Run
}

/// Straighten one file and write the result under the output directory with
/// the input's file name. In debug mode every stage image is written too.
#[instrument(skip_all, fields(file = %path.display()))]
fn process_file(fixer: &OrientationFixer, path: &Path, cli: &Cli) -> Result<PathBuf> {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| PagefixError::ImageError(format!("not a file: {}", path.display())))?;

    let mut page = read_grayscale(path)?;
    if cli.binarize {
        page = binarize_otsu(&page);
    }

    if cli.debug {
        let trace = fixer.fix_with_trace(&page)?;
        write_debug_output(&trace, &cli.output_path, &filename)?;
        write_image(&trace.output, &cli.output_path, &filename)
    } else {
        let output = fixer.fix(&page)?;
        write_image(&output, &cli.output_path, &filename)
    }
}

/// Stage images `<stem>_1_trimmed.png` .. `<stem>_4_corrected.png` and the
/// text log `<stem>.txt`.
fn write_debug_output(trace: &FixTrace, dir: &Path, filename: &str) -> Result<()> {
    let stages = [
        ("_1_trimmed", &trace.trimmed),
        ("_2_rotated", &trace.rotated),
        ("_3_cropped", &trace.cropped),
        ("_4_corrected", &trace.output),
    ];
    for (suffix, image) in stages {
        write_image(image, dir, &with_suffix(filename, suffix, "png"))?;
    }

    let corners = &trace.detection.corners;
    append_log_line(&format!("angle: {:.3}", trace.angle), dir, filename)?;
    append_log_line(
        &format!(
            "corners: tl {} tr {} br {} bl {}",
            corners.top_left, corners.top_right, corners.bottom_right, corners.bottom_left
        ),
        dir,
        filename,
    )?;
    append_log_line(
        &format!("detection: {}", serde_json::to_string(&trace.detection)?),
        dir,
        filename,
    )?;
    Ok(())
}
