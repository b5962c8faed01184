//! Entry point for the playlist skill.
//!
//! Reads request envelopes from stdin, one per line, and writes one response
//! envelope per line to stdout. Logs go to stderr.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use beatbox_skill::{
    BootstrapError, StructuredHealthReporter, SystemConfigLoader, bootstrap_with,
};

fn main() -> ExitCode {
    let skill = match bootstrap_with(&SystemConfigLoader, Arc::new(StructuredHealthReporter::new()))
    {
        Ok(skill) => skill,
        Err(error) => return report_bootstrap_failure(&error),
    };

    match skill.serve(io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(error = %error, "request loop terminated");
            ExitCode::FAILURE
        }
    }
}

/// Prints the bootstrap error; telemetry may not be installed yet.
fn report_bootstrap_failure(error: &BootstrapError) -> ExitCode {
    let mut stderr = io::stderr().lock();
    if writeln!(stderr, "beatbox-skill: {error}").is_err() {
        return ExitCode::from(2);
    }
    ExitCode::FAILURE
}
