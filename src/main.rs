use std::env;

use anyhow::{Result, bail};
use dotenv::dotenv;
use insightly_client::{ClientConfig, Insightly, SmokeOptions};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SMOKE_TOP_VAR: &str = "INSIGHTLY_SMOKE_TOP";
const SMOKE_WRITES_VAR: &str = "INSIGHTLY_SMOKE_WRITES";

fn smoke_options() -> Result<SmokeOptions> {
    let mut options = SmokeOptions::default();

    if let Ok(raw) = env::var(SMOKE_TOP_VAR) {
        options.top = Some(raw.trim().parse()?);
    }

    if let Ok(raw) = env::var(SMOKE_WRITES_VAR) {
        options.include_writes = matches!(raw.trim(), "1" | "true" | "yes");
    }

    Ok(options)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load variables from .env file if it exists into the environment
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env()?;
    let options = smoke_options()?;
    info!(base_url = %config.base_url, ?options, "Running Insightly smoke test");

    let insightly = Insightly::with_config(config)?;
    let report = insightly.smoke_test(options).await;

    if !report.is_success() {
        for check in report.checks.iter().filter(|c| c.outcome.is_err()) {
            eprintln!("FAIL: {}", check.name);
        }
        bail!("{} of {} checks failed", report.failed(), report.checks.len());
    }

    info!(passed = report.passed(), "All checks passed");
    Ok(())
}
