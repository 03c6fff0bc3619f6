//! Scripted play sessions.
//!
//! A [`Session`] replays a [`SessionScript`] against a fresh player wired to a
//! [`HostEngine`] and the default effect selector, then summarises what
//! happened.

use rpg_content::{Command, ItemCatalog, SessionScript};
use rpg_core::{Item, ItemEffectSelector, ItemId, Player, PlayerConfig, PlayerStats};

use crate::engine::HostEngine;
use crate::error::{Result, RuntimeError};

/// Summary of one replayed script.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionReport {
    /// Player numbers after the last command.
    pub stats: Option<PlayerStats>,
    /// Inventory contents after the last command.
    pub items: Vec<Item>,
    /// Effects requested during this session, in order.
    pub effects: Vec<String>,
    pub pickups_accepted: usize,
    pub pickups_rejected: usize,
    /// Total damage that got through armour.
    pub damage_taken: u64,
    /// Enemy hits dealt by used items.
    pub enemies_struck: usize,
    /// Commands skipped because their item is not in the catalog.
    pub skipped: usize,
}

/// Replays scripts for one player configuration and item catalog.
pub struct Session<'a> {
    config: &'a PlayerConfig,
    catalog: &'a ItemCatalog,
    strict: bool,
}

impl<'a> Session<'a> {
    pub fn new(config: &'a PlayerConfig, catalog: &'a ItemCatalog) -> Self {
        Self {
            config,
            catalog,
            strict: false,
        }
    }

    /// Fail instead of skipping commands that name unknown items.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Run `script` on a new player.
    ///
    /// # Errors
    ///
    /// In strict mode, returns [`RuntimeError::UnknownItem`] for the first
    /// command whose item id is missing from the catalog.
    pub fn run(&self, engine: &HostEngine, script: &SessionScript) -> Result<SessionReport> {
        let selector = ItemEffectSelector::new(engine);
        let mut player = Player::with_config(self.config, engine, &selector);
        let effects_before = engine.effect_count();
        let mut report = SessionReport::default();

        for (index, command) in script.commands.iter().enumerate() {
            match command {
                Command::Pickup(id) => {
                    let Some(item) = self.resolve(index, *id, &mut report)? else {
                        continue;
                    };
                    match player.try_pickup(item) {
                        Ok(outcome) => {
                            tracing::info!(item = item.name(), ?outcome, "picked up");
                            report.pickups_accepted += 1;
                        }
                        Err(err) => {
                            tracing::info!(item = item.name(), %err, "pickup refused");
                            report.pickups_rejected += 1;
                        }
                    }
                }
                Command::Heal(id) => {
                    if let Some(item) = self.resolve(index, *id, &mut report)? {
                        player.apply_healing(item);
                    }
                }
                Command::Use(id) => {
                    if let Some(item) = self.resolve(index, *id, &mut report)? {
                        report.enemies_struck += player.use_item(item);
                    }
                }
                Command::RecalculateArmour => player.recalculate_armour(),
                Command::TakeDamage(amount) => {
                    let outcome = player.take_damage(*amount);
                    report.damage_taken += u64::from(outcome.dealt());
                }
                Command::SetCarryingCapacity(capacity) => {
                    player.set_carrying_capacity(*capacity);
                }
            }
        }

        report.stats = Some(player.stats());
        report.items = player.inventory().list_items().to_vec();
        report.effects = engine.effects().split_off(effects_before);
        Ok(report)
    }

    fn resolve(
        &self,
        index: usize,
        id: ItemId,
        report: &mut SessionReport,
    ) -> Result<Option<&'a Item>> {
        if let Some(item) = self.catalog.get(id) {
            return Ok(Some(item));
        }
        if self.strict {
            return Err(RuntimeError::UnknownItem { index, id });
        }
        tracing::warn!(index, item = %id, "skipping command for unknown item");
        report.skipped += 1;
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ItemCatalog {
        ItemCatalog {
            items: vec![
                Item::builder().with_id(1).with_name("Helm").with_armour(30).with_weight(10).build(),
                Item::builder().with_id(2).with_name("Potion").with_heal(50).build(),
                Item::builder().with_id(3).with_name("Stink Bomb").build(),
            ],
        }
    }

    #[test]
    fn unknown_items_are_skipped_by_default() {
        let config = PlayerConfig::default();
        let catalog = catalog();
        let engine = HostEngine::new();
        let script = SessionScript::new(vec![Command::Pickup(ItemId(99)), Command::Pickup(ItemId(1))]);

        let report = Session::new(&config, &catalog).run(&engine, &script).unwrap();

        assert_eq!(report.skipped, 1);
        assert_eq!(report.pickups_accepted, 1);
    }

    #[test]
    fn strict_sessions_fail_on_unknown_items() {
        let config = PlayerConfig::default();
        let catalog = catalog();
        let engine = HostEngine::new();
        let script = SessionScript::new(vec![Command::RecalculateArmour, Command::Use(ItemId(42))]);

        let err = Session::new(&config, &catalog)
            .strict(true)
            .run(&engine, &script)
            .unwrap_err();

        assert_eq!(err, RuntimeError::UnknownItem { index: 1, id: ItemId(42) });
    }

    #[test]
    fn report_counts_damage_and_enemies() {
        let config = PlayerConfig::with_health(100, 60);
        let catalog = catalog();
        let engine = HostEngine::with_dummies(2);
        let script = SessionScript::new(vec![
            Command::Pickup(ItemId(1)),
            Command::RecalculateArmour,
            Command::TakeDamage(50),
            Command::Pickup(ItemId(2)),
            Command::Heal(ItemId(2)),
            Command::Use(ItemId(3)),
        ]);

        let report = Session::new(&config, &catalog).run(&engine, &script).unwrap();
        let stats = report.stats.unwrap();

        assert_eq!(report.damage_taken, 20);
        assert_eq!(stats.armour, 30);
        assert_eq!(stats.health, 90);
        assert_eq!(report.enemies_struck, 2);
        assert_eq!(report.items.len(), 1);
        assert_eq!(report.effects, vec!["lots_of_gore"]);
    }
}
