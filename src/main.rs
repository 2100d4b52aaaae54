//! Entry point for the Level/Transmitter configuration editor.
//!
//! # Usage
//!
//! ```bash
//! level-config
//! level-config --config plant.toml --log-level debug
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use level_config::{
    app,
    config::AppSettings,
    logging::{self, TracingConfig},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "level-config")]
#[command(about = "Transmitter and Level configuration editor", long_about = None)]
struct Cli {
    /// Settings file (missing file falls back to defaults)
    #[arg(long, default_value = level_config::config::DEFAULT_SETTINGS_FILE)]
    config: PathBuf,

    /// Log level; takes precedence over the settings file and `RUST_LOG`
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = AppSettings::load_from(&cli.config)
        .with_context(|| format!("Failed to load settings from {}", cli.config.display()))?;
    let level_from_cli = cli.log_level.is_some();
    if let Some(level) = cli.log_level {
        settings.logging.level = level;
        settings.validate().context("Invalid --log-level")?;
    }

    let tracing_config = TracingConfig::from_settings(&settings)
        .context("Invalid logging settings")?
        .with_env_override(!level_from_cli);
    logging::init(tracing_config).context("Failed to initialize logging")?;
    tracing::info!("Starting Transmitter and Level Configuration");

    app::run(&settings).context("Configuration window failed")?;

    tracing::info!("Window closed");
    Ok(())
}
