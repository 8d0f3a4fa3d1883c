// Runs the GitHub issue scenarios once and exits non-zero on any failure.
//
// ACCESS_TOKEN supplies the credential; ISSUE_SCENARIOS_CONFIG may point at
// a TOML file of overrides. RUST_LOG controls verbosity (default: info).

use anyhow::{Context, Result};
use env_logger::Env;
use github_issue_scenarios::{ScenarioConfig, ScenarioRunner};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = ScenarioConfig::from_env().context("Failed to load scenario configuration")?;
    let runner = ScenarioRunner::from_config(config).context("Failed to create GitHub client")?;

    let report = runner.run().await;
    println!("{report}");

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
