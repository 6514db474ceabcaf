//! Simple CLI that reads one card as JSON from stdin and writes the
//! captured creative as JSON to stdout.
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (e.g. `RUST_LOG=creative_extract=debug`).

use std::io::{self, Read};
use std::process::ExitCode;

use creative_extract::{extract_card, CardInput};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "extraction failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<String, Box<dyn std::error::Error>> {
    let mut json = String::new();
    io::stdin().read_to_string(&mut json)?;

    let input = CardInput::from_json(&json)?;
    let options = input.options.clone().unwrap_or_default();
    options.validate()?;

    let creative = extract_card(&input, &options);
    info!(
        low_confidence = creative.is_low_confidence(),
        warnings = creative.warnings.len(),
        "captured creative"
    );

    Ok(serde_json::to_string(&creative)?)
}
