use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ringclock_core::{AppConfig, ClockTime};

mod commands;

#[derive(Parser)]
#[command(name = "ringclock")]
#[command(author, version, about = "A terminal clock of six rotating digit rings")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Start from this time (HH:MM:SS) and advance one second per tick
    #[arg(long, global = true, value_parser = parse_time)]
    at: Option<ClockTime>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the clock (default)
    Run,
    /// Print every digit's position at a given moment
    Layout {
        /// Rollover countdown steps to apply after the time tick
        #[arg(short, long, default_value_t = 0)]
        steps: u8,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the configuration file path
    Path,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn parse_time(s: &str) -> std::result::Result<ClockTime, String> {
    s.parse().map_err(|e: ringclock_core::Error| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let (config, start) = prepare(cli.at, true)?;
            commands::run::run(&config, start).await
        }
        Commands::Layout { steps, json } => {
            let (config, start) = prepare(cli.at, false)?;
            commands::layout::run(&config, start, steps, json)
        }
        // Never loads the config file, so a broken one can still be replaced
        Commands::Config { action } => match action {
            ConfigAction::Path => commands::config::path(),
            ConfigAction::Init { force } => commands::config::init(force),
        },
    }
}

/// Load configuration, set up logging and resolve the start time
fn prepare(at: Option<ClockTime>, tui: bool) -> Result<(AppConfig, Option<ClockTime>)> {
    let config = AppConfig::load()?;
    init_logging(&config, tui)?;

    let start = match at {
        Some(at) => Some(at),
        None => config.clock.start_time()?,
    };
    Ok((config, start))
}

/// Log to a file while the TUI owns the screen, to stderr otherwise
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if to_file {
        let data_dir = config.data_dir();
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("creating {}", data_dir.display()))?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(config.log_path())
            .with_context(|| format!("opening {}", config.log_path().display()))?;
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}
