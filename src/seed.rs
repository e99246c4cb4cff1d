//! One seed run: build the generator, open the store, generate.

use crate::config::SeedConfig;
use anyhow::Context;
use seed_generator::{
    launchpad_schema, FixtureGenerator, GenerationContext, MemoryStore, SeedReport,
};
use seed_store_sqlite::SqliteStore;
use tracing::info;

/// Clear and repopulate the configured database.
///
/// With `dry_run` the rows are generated into memory and the database is
/// never opened. Configuration problems are reported before any store is
/// touched.
pub fn run_seed(config: &SeedConfig, dry_run: bool) -> anyhow::Result<SeedReport> {
    let schema = launchpad_schema().context("Embedded launchpad schema is invalid")?;
    let ctx = GenerationContext::new(config.seed, config.locale());
    match ctx.seed() {
        Some(seed) => info!("Generating with seed {} ({})", seed, ctx.locale()),
        None => info!("Generating unseeded ({})", ctx.locale()),
    }

    let mut generator = FixtureGenerator::new(schema, config.counts.clone(), ctx)
        .context("Invalid seed configuration")?;

    if dry_run {
        info!("Dry run: generating into memory only");
        let mut store = MemoryStore::new();
        return generator.generate(&mut store).context("Dry run failed");
    }

    let path = config.database_path();
    let mut store = SqliteStore::open(&path)
        .with_context(|| format!("Failed to open database {}", path.display()))?;
    generator
        .generate(&mut store)
        .with_context(|| format!("Failed to seed {}", path.display()))
}
