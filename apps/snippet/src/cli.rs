//! # CLI Module
//!
//! The `snippet` command. It takes no arguments: the fragment names, their
//! order, the separator and the output name are all fixed in snippet-core.

use clap::Parser;
use snippet_core::{BuildError, BuildPlan, BuildReport};
use std::process::ExitCode;

/// Concatenate telegraph.js, ciphers.js, telegraph_storage.js and
/// userscript.js from the current directory into snippet.js.
#[derive(Parser, Debug)]
#[command(name = "snippet", version, about, long_about = None)]
pub struct Cli {}

/// Initialise stderr logging. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "snippet=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the build for `plan` and log its outcome.
pub fn cmd_build(plan: &BuildPlan) -> Result<BuildReport, BuildError> {
    tracing::info!(dir = %plan.dir().display(), "Building snippet");
    for (fragment, path) in plan.fragment_paths() {
        tracing::debug!(%fragment, path = %path.display(), "Resolved fragment");
    }

    match plan.build() {
        Ok(report) => {
            tracing::info!(
                output = %report.output.display(),
                bytes = report.bytes_written,
                fragment_bytes = report.fragment_bytes(),
                "Wrote snippet"
            );
            match serde_json::to_string(&report) {
                Ok(json) => tracing::debug!(report = %json, "Build report"),
                Err(e) => tracing::warn!(error = %e, "Failed to serialize build report"),
            }
            Ok(report)
        }
        Err(e) => {
            tracing::error!(kind = ?e.kind(), path = %e.path().display(), "Build failed");
            Err(e)
        }
    }
}

/// Map a build outcome to the process exit status.
pub fn exit_code(result: &Result<BuildReport, BuildError>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

/// Entry point used by `main`.
pub fn run(_cli: Cli) -> ExitCode {
    let result = cmd_build(&BuildPlan::default());
    if let Err(e) = &result {
        eprintln!("Error: {e}");
    }
    exit_code(&result)
}
