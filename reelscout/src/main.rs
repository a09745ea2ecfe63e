//! reelscout - top rated movies playing nearby
//!
//! Runs the whole pipeline once with no arguments:
//! scrape listings → TMDb lookups → filter → report → outbox.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use reelscout::{Pipeline, ScoutConfig};
use reelscout_common::config::{load_toml_config, resolve_config_path, TomlConfig};
use reelscout_common::logging::{bootstrap_logging, init_tracing};

/// Command-line arguments for reelscout
#[derive(Parser, Debug)]
#[command(name = "reelscout")]
#[command(about = "Mail a list of the top rated movies playing nearby")]
#[command(version)]
struct Args {
    /// TOML config file
    #[arg(short, long, env = "REELSCOUT_CONFIG")]
    config: Option<PathBuf>,

    /// Print the report instead of delivering it
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Config loading warns on a missing file; surface that before init_tracing
    let config_path = resolve_config_path(args.config.as_deref());
    let toml_config = {
        let _startup = bootstrap_logging();
        match &config_path {
            Some(path) => load_toml_config(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => TomlConfig::default(),
        }
    };

    init_tracing(&toml_config.logging).context("Failed to initialise logging")?;

    info!(
        "Starting reelscout v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    match &config_path {
        Some(path) if path.exists() => info!("Config: {}", path.display()),
        _ => info!("Config: built-in defaults"),
    }

    let config = ScoutConfig::resolve(&toml_config).context("Configuration incomplete")?;
    let pipeline = Pipeline::from_config(&config).context("Failed to build pipeline")?;

    if args.dry_run {
        let summary = pipeline.dry_run().await.context("Dry run failed")?;
        info!(
            "{} of {} listings qualify",
            summary.qualifying.len(),
            summary.listings
        );
        print!("{}", summary.report.text);
        return Ok(());
    }

    let summary = pipeline.run().await.context("Run failed")?;
    info!(
        "Done: {} of {} listings qualify, report at {}",
        summary.qualifying.len(),
        summary.listings,
        summary.delivered_to.as_deref().unwrap_or("-")
    );

    Ok(())
}
