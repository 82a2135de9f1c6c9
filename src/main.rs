use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use vidsettings::config::{Config, MAX_COUNTDOWN_SECONDS};
use vidsettings::display::{build_catalog, ResolutionMode, SimulatedDisplay};
use vidsettings::logging::init_tracing;

#[derive(Debug, Parser)]
#[command(name = "vidsettings", version, about = "Video settings panel with confirm-or-revert")]
struct Cli {
    /// Config file (default: platform config dir/vidsettings/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the confirmation countdown, in seconds
    #[arg(long, value_name = "SECS")]
    countdown: Option<u32>,

    /// Print the resolution catalog and exit
    #[arg(long)]
    list_modes: bool,

    /// With --list-modes, print JSON instead of text
    #[arg(long, requires = "list_modes")]
    json: bool,

    /// Hide the exit button
    #[arg(long)]
    no_exit_button: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;

    if cli.list_modes {
        return list_modes(&config, cli.json);
    }

    let log_path = config
        .logging
        .file
        .clone()
        .unwrap_or_else(Config::default_log_path);
    init_tracing(&log_path, &config.logging.level)
        .with_context(|| format!("Failed to open log file '{}'", log_path.display()))?;

    vidsettings::ui::run(&config).context("Terminal UI failed")
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            anyhow::ensure!(path.exists(), "Config file '{}' not found", path.display());
            Config::load_from(path)?
        }
        None => Config::load()?,
    };

    if let Some(countdown) = cli.countdown {
        anyhow::ensure!(
            countdown <= MAX_COUNTDOWN_SECONDS,
            "--countdown must be at most {}",
            MAX_COUNTDOWN_SECONDS
        );
        config.popup.countdown_seconds = countdown;
    }
    if cli.no_exit_button {
        config.popup.exit_button = false;
    }
    Ok(config)
}

fn list_modes(config: &Config, json: bool) -> anyhow::Result<()> {
    let display = SimulatedDisplay::from_config(&config.display);
    let (catalog, initial) = build_catalog(&display)?;

    if json {
        let modes: Vec<ResolutionMode> = catalog.iter().copied().collect();
        let doc = serde_json::json!({ "modes": modes, "initial_index": initial });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    for (idx, mode) in catalog.iter().enumerate() {
        let marker = if idx == initial { "*" } else { " " };
        println!("{} {:>2}. {}", marker, idx, mode);
    }
    Ok(())
}
