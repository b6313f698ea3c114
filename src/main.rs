use std::{ffi::OsString, path::PathBuf};

use anyhow::Context;
use clap::Parser;

use config::HeartbeatConfig;
use heartbeat::Heartbeat;
use identity::ProcessIdentity;
use shutdown::Shutdown;

pub mod config;
pub mod heartbeat;
pub mod identity;
pub mod shutdown;
pub mod signal;

/// Print a timestamped greeting at an interval derived from the invocation path
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path carrying the process id, e.g. `./process3/cmd`. The greeting repeats every
    /// `id * 5` seconds
    #[arg(allow_hyphen_values = true)]
    path: Option<OsString>,
    /// Read settings from a TOML file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Stop after this many greetings
    #[arg(short = 'n', long)]
    max_beats: Option<u64>,
    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
    /// Anything after the path is ignored
    #[arg(hide = true)]
    rest: Vec<OsString>,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<(), anyhow::Error> {
    let args: Vec<OsString> = std::env::args_os().collect();
    let cli = Cli::parse_from(&args);

    init_logging(cli.verbose);
    tracing::info!("Received arguments: {:?}", args);

    let config = match cli.config {
        Some(ref path) => HeartbeatConfig::load(path)?,
        None => HeartbeatConfig::default(),
    }
    .with_max_beats(cli.max_beats);

    let identity = match cli
        .path
        .as_deref()
        .map(|path| ProcessIdentity::extract(&path.to_string_lossy()))
    {
        Some(Ok(identity)) => identity,
        Some(Err(e)) => {
            println!("Error converting process ID: {}", e);
            tracing::debug!("Not starting heartbeat: {:?}", e);
            return Ok(());
        }
        None => ProcessIdentity::default(),
    };

    let heartbeat = Heartbeat::new(identity, &config);
    tracing::debug!(
        "Starting heartbeat for {} every {:?}",
        heartbeat.identity(),
        heartbeat.interval()
    );

    let shutdown = Shutdown::from_signals(&config.shutdown_signals)
        .context("Couldn't install shutdown handlers")?;

    let beats = heartbeat.run(&mut std::io::stdout().lock(), &shutdown)?;
    tracing::info!("Heartbeat stopped after {} beats", beats);

    Ok(())
}
