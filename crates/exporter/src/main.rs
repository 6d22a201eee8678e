//! GKE exporter configuration tool - Main Application Entry Point
//!
//! Loads the exporter configuration, applies defaults, validates it and
//! prints the effective configuration that the export pipeline will use.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use config::{ConfigLoader, ConfigValidator, ExporterConfig};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Parser)]
#[command(name = "gke-exporter-config", version, about = "Print the effective GKE exporter configuration")]
struct Cli {
    /// Path to the exporter configuration file (.json, .yaml or .yml)
    #[arg(long, env = "GKE_EXPORTER_CONFIG", default_value = "exporter.json")]
    config: PathBuf,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Json)]
    log_format: LogFormat,

    /// Fail when any GKE metadata field is unset
    #[arg(long)]
    require_metadata: bool,

    /// Write an example configuration to this path and exit
    #[arg(long, value_name = "PATH")]
    write_example: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Load .env file if it exists
    let dotenv_result = dotenv::dotenv();

    let cli = Cli::parse();
    init_logging(cli.log_format)?;

    if let Err(e) = dotenv_result {
        if !e.not_found() {
            warn!("Could not load .env file: {}", e);
        }
    }

    if let Some(path) = &cli.write_example {
        ConfigLoader::create_example(path)?;
        info!(path = %path.display(), "Example configuration written");
        return Ok(());
    }

    let config = load_effective_config(&cli.config, cli.require_metadata)?;
    let rendered = serde_json::to_string_pretty(&config)
        .context("Failed to serialize effective configuration")?;
    println!("{}", rendered);

    Ok(())
}

/// Load, normalize and validate the configuration at `path`
fn load_effective_config(path: &Path, require_metadata: bool) -> Result<ExporterConfig> {
    let config = ConfigLoader::load(path).context("Failed to load configuration")?;

    let report = ConfigValidator::validate(&config);
    for issue in &report.warnings {
        warn!(field = %issue.field, "{}", issue.message);
    }
    if report.has_errors() {
        for issue in &report.errors {
            error!(field = %issue.field, "{}", issue.message);
        }
        error!("{}", report.summary());
    } else {
        info!("{}", report.summary());
    }
    report.into_result().context("Configuration is invalid")?;

    if require_metadata {
        config
            .gke_metadata
            .ensure_complete()
            .context("GKE metadata is incomplete")?;
    }

    info!(
        export_period = %config.export_period,
        metadata_fetch_timeout = %config.metadata_fetch_timeout,
        metadata_fetch_interval = %config.metadata_fetch_interval,
        api_endpoint = %config.api_endpoint,
        "Effective configuration"
    );

    Ok(config)
}

/// Initialize logging to stderr; stdout carries the rendered configuration
fn init_logging(format: LogFormat) -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Pretty => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to initialize pretty logging")?;
        }
        LogFormat::Json => {
            registry
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to initialize JSON logging")?;
        }
    }

    Ok(())
}
