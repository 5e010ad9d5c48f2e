//! VoP batch name verification
//!
//! ## Usage
//!
//! ```bash
//! vop-verify pairs.jsonl > verdicts.jsonl
//! cat pairs.jsonl | VOP_MATCH_THRESHOLD=97 vop-verify
//! ```

use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

use tracing::{error, info};
use vop_core::Matcher;
use vop_verify::{Result, VerifyConfig};

fn main() -> ExitCode {
    vop_verify::tracing::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "verification failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = VerifyConfig::from_env()?;
    let matcher = Matcher::with_config(config.matcher)?;
    let input = std::env::args().nth(1);

    info!(
        match_threshold = config.matcher.match_threshold,
        close_match_threshold = config.matcher.close_match_threshold,
        parallel = config.parallel,
        input = input.as_deref().unwrap_or("-"),
        "Starting VoP name verification"
    );

    let stdout = io::stdout().lock();
    let summary = match input.as_deref() {
        None | Some("-") => vop_verify::run(&matcher, io::stdin().lock(), stdout, config.parallel)?,
        Some(path) => {
            let reader = BufReader::new(File::open(path)?);
            vop_verify::run(&matcher, reader, stdout, config.parallel)?
        }
    };

    info!(
        total = summary.total,
        matched = summary.matched,
        close_matched = summary.close_matched,
        not_matched = summary.not_matched,
        "Verification complete"
    );

    Ok(())
}
