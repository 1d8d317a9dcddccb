/*
[INPUT]:  CLI arguments, optional YAML configuration file
[OUTPUT]: Interactive storefront session, or a validated config on --dry-run
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

mod cli;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use orda_adapter::{DeniedGeolocator, FixedGeolocator, Geolocator, InMemoryIdentityProvider};
use orda_storefront::{Storefront, StorefrontConfig};

use crate::cli::ConsoleNotifier;

#[derive(Parser, Debug)]
#[command(name = "orda", version, about = "Orda food delivery storefront")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    /// Write logs to a daily rolling file in this directory instead of stderr
    #[arg(long = "log-dir", value_name = "DIR")]
    log_dir: Option<PathBuf>,
    /// Latitude reported to the location detector
    #[arg(long, requires = "longitude", allow_negative_numbers = true)]
    latitude: Option<f64>,
    /// Longitude reported to the location detector
    #[arg(long, requires = "latitude", allow_negative_numbers = true)]
    longitude: Option<f64>,
    #[arg(long = "dry-run")]
    dry_run: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a starter configuration file interactively
    Init {
        #[arg(long, value_name = "PATH", default_value = "orda.yaml")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let _guard = init_tracing(&args.log_level, args.log_dir.as_deref())?;

    if let Some(Command::Init { output }) = args.command {
        return cli::init::run_init(output);
    }

    info!(
        config_path = ?args.config_path,
        dry_run = args.dry_run,
        "starting orda"
    );

    let config = load_config(args.config_path.as_deref())?;
    info!(
        delivery_fee = %config.delivery_fee,
        placement_delay_ms = config.checkout.placement_delay_ms,
        "configuration loaded"
    );

    if args.dry_run {
        info!("dry-run requested; configuration validated");
        return Ok(());
    }

    let identity = Arc::new(InMemoryIdentityProvider::new());
    let mut store = Storefront::new(config, identity, Arc::new(ConsoleNotifier));

    let geolocator: Box<dyn Geolocator> = match (args.latitude, args.longitude) {
        (Some(latitude), Some(longitude)) => Box::new(FixedGeolocator::new(latitude, longitude)),
        _ => Box::new(DeniedGeolocator),
    };
    let location = store.detect_location(geolocator.as_ref()).await;
    info!(location, "session started");

    cli::interactive::run_interactive(&mut store)
        .await
        .context("interactive session")?;
    info!("session closed");

    Ok(())
}

fn init_tracing(log_level: &str, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "orda.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(|err| anyhow!(err))
                .context("initialize tracing subscriber")?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|err| anyhow!(err))
                .context("initialize tracing subscriber")?;
            Ok(None)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<StorefrontConfig> {
    let Some(path) = path else {
        return Ok(StorefrontConfig::default());
    };
    let path_str = path.to_str().context("config path must be valid utf-8")?;
    StorefrontConfig::from_file(path_str).context("load config")
}
