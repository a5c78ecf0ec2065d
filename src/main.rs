//! Hookkit Demo - Main Entry Point
//!
//! A resizable split with a fetch demo on one side and notifications on the other.

use anyhow::Context;
use hookkit::app::application::run_app;
use hookkit::domain::config::AppConfig;
use hookkit::utils::config_store::{config_path, load_config};

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let path = config_path();
    let config: AppConfig = load_config(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;

    tracing::info!("Starting Hookkit demo...");

    run_app(config);
    Ok(())
}
