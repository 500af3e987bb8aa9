// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pagefix — straighten scanned document images.
//
// Entry point. Initialises logging, parses arguments, and runs the batch.

mod batch;
mod cli;

use std::process::ExitCode;

use clap::Parser;
use pagefix_core::human_errors::humanize_error;

use cli::Cli;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    tracing::info!(input = %cli.input_path.display(), "pagefix starting");

    match batch::run(&cli) {
        Ok(summary) => {
            tracing::info!(
                processed = summary.processed,
                failed = summary.failed,
                "Batch finished"
            );
            if summary.processed == 0 && summary.failed > 0 {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(err) => {
            let human = humanize_error(&err);
            eprintln!("error: {}\n  {}", human.message, human.suggestion);
            tracing::error!(%err, "Batch aborted");
            ExitCode::FAILURE
        }
    }
}
