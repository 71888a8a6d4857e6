//! `questline` command-line planner.
//!
//! Reads onboarding answers from a YAML file and prints the resulting study
//! plan (estimate and timeline mismatch) as JSON on stdout.
//!
//! ```yaml
//! goals: [fullstack, spanish]
//! answers:
//!   fullstack: [2, 3, 1, 2, 2]
//! daily_minutes: 45
//! target_months: 6
//! ```
//!
//! Configuration is read from `questline-config.yaml` in the working
//! directory when present.

mod error;

use std::path::Path;

use questline_core::config::{LogFormat, LoggingConfig, QuestlineConfig};
use questline_core::onboarding::{OnboardingRequest, OnboardingSession};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the configuration, the plan file, or the answers in
/// it are invalid.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    init_tracing(&config.logging);
    info!(
        max_goals = config.progression.onboarding.max_goals,
        bonus_chance_per_10000 = config.progression.rewards.bonus_chance_per_10000,
        "Configuration loaded"
    );

    let plan_path = std::env::args().nth(1).ok_or(CliError::Usage)?;
    let rendered = run(&config, Path::new(&plan_path))?;
    println!("{rendered}");
    Ok(())
}

/// Install the tracing subscriber. `RUST_LOG` takes precedence over the
/// configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    match logging.format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

/// Load configuration from `questline-config.yaml`, or defaults if absent.
fn load_config() -> Result<QuestlineConfig, CliError> {
    let config_path = Path::new("questline-config.yaml");
    if config_path.exists() {
        Ok(QuestlineConfig::from_file(config_path)?)
    } else {
        Ok(QuestlineConfig::default())
    }
}

/// Build the plan described by the YAML file at `path` and render it as JSON.
fn run(config: &QuestlineConfig, path: &Path) -> Result<String, CliError> {
    let contents = std::fs::read_to_string(path)?;
    let request: OnboardingRequest = serde_yml::from_str(&contents)?;
    let session = OnboardingSession::from_request(&config.progression, &request)?;
    let plan = session.plan()?;
    info!(
        total_weeks = plan.estimate.total_weeks,
        has_mismatch = plan.mismatch.has_mismatch,
        "Plan ready"
    );
    Ok(serde_json::to_string_pretty(&plan)?)
}
