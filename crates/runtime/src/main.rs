//! Simulation binary.
//!
//! Loads content from `RPG_DATA_DIR`, replays a session script (or picks up
//! every catalog item when `RPG_SCRIPT` is unset), and logs the outcome.
//!
//! ```bash
//! RPG_DATA_DIR=crates/runtime/data RPG_SCRIPT=session.ron cargo run -p rpg-runtime
//! ```

use anyhow::Result;
use rpg_content::{ContentFactory, SessionScript};
use rpg_runtime::{HostEngine, RuntimeConfig, Session, setup_logging};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = RuntimeConfig::from_env();
    setup_logging(&config.log_level)?;

    tracing::info!(data_dir = %config.data_dir.display(), "Starting session");

    let factory = ContentFactory::new(&config.data_dir);
    let player_config = factory.load_config()?;
    let catalog = factory.load_items()?;
    let script = match &config.script {
        Some(name) => factory.load_script(name)?,
        None => SessionScript::collect_all(catalog.ids()),
    };
    tracing::debug!(commands = script.commands.len(), "Script loaded");

    let engine = HostEngine::with_dummies(config.enemies);
    let report = Session::new(&player_config, &catalog)
        .strict(config.strict)
        .run(&engine, &script)?;

    if let Some(stats) = report.stats {
        tracing::info!(
            health = stats.health,
            max_health = stats.max_health,
            armour = stats.armour,
            carrying_capacity = stats.carrying_capacity,
            "Final stats"
        );
    }
    for item in &report.items {
        tracing::info!(id = %item.id(), name = item.name(), "Carrying");
    }
    tracing::info!(
        accepted = report.pickups_accepted,
        rejected = report.pickups_rejected,
        damage_taken = report.damage_taken,
        enemies_struck = report.enemies_struck,
        effects = report.effects.len(),
        skipped = report.skipped,
        "Session finished"
    );

    Ok(())
}
