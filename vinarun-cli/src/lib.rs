#![warn(missing_docs)]
//! vinarun CLI Library
//!
//! Command-line front end for batched docking runs: loads `vinarun.toml`,
//! drives the timed round loop, then aggregates the per-round logs into
//! the tab-separated report.

mod config;

pub use config::{DockingConfig, EngineConfig, InputConfig, OutputConfig, VinaConfig};

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use vinarun_core::RoundRunner;
use vinarun_report::{ResultAggregator, export};

/// vinarun CLI arguments
#[derive(Parser, Debug)]
#[command(name = "vinarun")]
#[command(author, version, about = "Batch driver and result aggregator for AutoDock Vina")]
pub struct Cli {
    /// Optional subcommand (init, run, aggregate); defaults to run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the configuration file (default: discover vinarun.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the configured number of rounds
    #[arg(long)]
    pub rounds: Option<u32>,

    /// Path for the aggregated report (overrides config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default vinarun.toml in the current directory
    Init,
    /// Run the docking rounds, then aggregate and export (default)
    Run,
    /// Aggregate existing logs and export the report, without docking
    Aggregate,
}

/// Run the vinarun CLI. Main entry point for the binary.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the vinarun CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("vinarun=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("vinarun=info")
            .init();
    }

    match cli.command {
        Some(Commands::Init) => init_config(),
        Some(Commands::Aggregate) => {
            let config = load_config(&cli)?;
            aggregate_and_export(&cli, &config)
        }
        Some(Commands::Run) | None => {
            let config = load_config(&cli)?;
            run_docking(&cli, &config)
        }
    }
}

/// Load configuration from the explicit path or by discovery. Missing or
/// unreadable configuration is fatal before any engine invocation.
fn load_config(cli: &Cli) -> anyhow::Result<VinaConfig> {
    match &cli.config {
        Some(path) => VinaConfig::load(path)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => VinaConfig::discover()
            .context("no vinarun.toml found; run `vinarun init` to create one"),
    }
}

/// Write a default configuration file, refusing to clobber an existing one.
fn init_config() -> anyhow::Result<()> {
    let path = Path::new("vinarun.toml");
    if path.exists() {
        anyhow::bail!("vinarun.toml already exists, not overwriting");
    }
    std::fs::write(path, VinaConfig::default_toml())?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Full pipeline: timed round loop, then aggregation and export.
fn run_docking(cli: &Cli, config: &VinaConfig) -> anyhow::Result<()> {
    println!("\nDocking will start soon, please wait.");

    let mut spec = config.job_spec();
    if let Some(rounds) = cli.rounds {
        spec.num_rounds = rounds;
    }
    let num_rounds = spec.num_rounds;

    let runner = RoundRunner::new(spec);
    let results = runner.run_rounds_timed()?;
    tracing::debug!(rounds = results.len(), "docking rounds finished");

    aggregate_rounds(cli, config, num_rounds)
}

/// Aggregation-only pipeline over whatever logs currently exist.
fn aggregate_and_export(cli: &Cli, config: &VinaConfig) -> anyhow::Result<()> {
    let num_rounds = cli.rounds.unwrap_or(config.docking.num_rounds);
    aggregate_rounds(cli, config, num_rounds)
}

/// Aggregate the receptor directory's logs and write the report.
fn aggregate_rounds(cli: &Cli, config: &VinaConfig, num_rounds: u32) -> anyhow::Result<()> {
    // Logs are read from the receptor's directory, where the run loop
    // leaves them when output_prefix is the default.
    let directory = config
        .input
        .receptor
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let dataset = ResultAggregator::new().aggregate(directory, num_rounds)?;

    let report_path = cli
        .output
        .clone()
        .unwrap_or_else(|| config.output.report.clone());
    export(&dataset, &report_path)?;

    println!(
        "\n- Successfully exported data!\n- Check the file {}",
        report_path.display()
    );
    Ok(())
}
