//! Command-line interface for launchpad-seed
//!
//! # Usage Examples
//!
//! ```bash
//! # Clear and repopulate ./launchpad.db
//! launchpad-seed
//!
//! # Reproducible data in another file
//! LAUNCHPAD_DB_PATH=/tmp/dev.db launchpad-seed --seed 42
//!
//! # Counts from a TOML file, US-style names and phone numbers
//! launchpad-seed --config seed.toml --locale en-US
//!
//! # See what would be generated without touching the database
//! RUST_LOG=debug launchpad-seed --dry-run
//! ```

use clap::{Parser, ValueEnum};
use launchpad_seed::{run_seed, Overrides, SeedConfig, SeedReport};
use seed_core::ApplicationPositionMode;
use seed_generator::Locale;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "launchpad-seed")]
#[command(about = "Clear the launchpad database and fill it with consistent fake data")]
#[command(long_about = None)]
struct Cli {
    /// SQLite database file to seed (default: launchpad.db)
    #[arg(long, env = "LAUNCHPAD_DB_PATH")]
    database: Option<PathBuf>,

    /// TOML file with seed settings and row counts
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for reproducible data (unseeded when omitted)
    #[arg(long, env = "LAUNCHPAD_SEED")]
    seed: Option<u64>,

    /// Locale for names, cities and phone numbers (en-IN, en-US)
    #[arg(long)]
    locale: Option<Locale>,

    /// How project applications choose their position
    #[arg(long, value_enum)]
    application_positions: Option<PositionMode>,

    /// Generate into memory only, leaving the database untouched
    #[arg(long)]
    dry_run: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PositionMode {
    /// Any position of any project
    #[value(name = "independent")]
    Independent,
    /// A position of the application's own project
    #[value(name = "same-project")]
    SameProject,
}

impl From<PositionMode> for ApplicationPositionMode {
    fn from(mode: PositionMode) -> Self {
        match mode {
            PositionMode::Independent => ApplicationPositionMode::Independent,
            PositionMode::SameProject => ApplicationPositionMode::SameProject,
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SeedConfig::from_file(path)?,
        None => SeedConfig::default(),
    };
    let config = config.with_overrides(Overrides {
        database: cli.database,
        seed: cli.seed,
        locale: cli.locale,
        application_positions: cli.application_positions.map(Into::into),
    });

    let report = run_seed(&config, cli.dry_run)?;
    log_summary(&report);
    Ok(())
}

fn log_summary(report: &SeedReport) {
    for table in &report.tables {
        info!("  {:<22} {:>6} rows", table.table, table.rows);
    }
    if let Some(seed) = report.seed {
        info!("Re-run with --seed {} to reproduce this data", seed);
    }
}
