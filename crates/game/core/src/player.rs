//! The player aggregate: pickup eligibility, healing, armour and damage.
//!
//! A [`Player`] owns its [`Inventory`] and borrows two collaborators injected
//! at construction: the host [`GameEngine`] and an [`EffectSelector`].
//!
//! Two contracts are deliberately explicit rather than automatic:
//!
//! - Armour is a snapshot. Call [`Player::recalculate_armour`] after pickups
//!   that should count in combat.
//! - Picking up a consumable only plays its effect. Health changes through a
//!   separate [`Player::apply_healing`] call, which plays the effect again.

use crate::combat::{self, DamageOutcome};
use crate::config::PlayerConfig;
use crate::effect::{EffectSelector, SpecialEffect};
use crate::env::GameEngine;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Inventory, Item, ItemId};

/// Snapshot of the player's numbers, handed to the engine when it needs to
/// know who is asking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerStats {
    /// Current health. May be negative after heavy damage.
    pub health: i32,
    pub max_health: i32,
    /// Armour as of the last [`Player::recalculate_armour`].
    pub armour: u32,
    pub carrying_capacity: u32,
}

impl PlayerStats {
    pub fn from_config(config: &PlayerConfig) -> Self {
        Self {
            health: config.health,
            max_health: config.max_health,
            armour: 0,
            carrying_capacity: config.carrying_capacity,
        }
    }
}

/// What happened to an accepted item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickupOutcome {
    /// Equipment or collectible, now in the inventory.
    Stored,
    /// Healing item; not stored. Heal it in with [`Player::apply_healing`].
    Consumed,
}

/// Why a pickup was refused. Refusals have no side effects.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PickupError {
    #[error("item weighing {weight} exceeds capacity {capacity} (already carrying {carried})")]
    Overweight {
        carried: u64,
        weight: u32,
        capacity: u32,
    },

    #[error("unique item {0} is already in the inventory")]
    DuplicateUnique(ItemId),
}

impl GameError for PickupError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Overweight { .. } => "PICKUP_OVERWEIGHT",
            Self::DuplicateUnique(_) => "PICKUP_DUPLICATE_UNIQUE",
        }
    }
}

/// A player wired to trait-object collaborators.
pub type GamePlayer<'a> = Player<'a, dyn GameEngine + 'a, dyn EffectSelector + 'a>;

pub struct Player<'a, E, S>
where
    E: GameEngine + ?Sized,
    S: EffectSelector + ?Sized,
{
    stats: PlayerStats,
    inventory: Inventory,
    engine: &'a E,
    effects: &'a S,
}

impl<'a, E, S> Player<'a, E, S>
where
    E: GameEngine + ?Sized,
    S: EffectSelector + ?Sized,
{
    /// Create a player from [`PlayerConfig::default`].
    pub fn new(engine: &'a E, effects: &'a S) -> Self {
        Self::with_config(&PlayerConfig::default(), engine, effects)
    }

    /// Create a player from an explicit config. The config is taken as-is;
    /// run [`PlayerConfig::validate`] first if it came from outside.
    pub fn with_config(config: &PlayerConfig, engine: &'a E, effects: &'a S) -> Self {
        Self {
            stats: PlayerStats::from_config(config),
            inventory: Inventory::new(config.carrying_capacity),
            engine,
            effects,
        }
    }

    pub fn stats(&self) -> PlayerStats {
        self.stats
    }

    pub fn health(&self) -> i32 {
        self.stats.health
    }

    pub fn max_health(&self) -> i32 {
        self.stats.max_health
    }

    pub fn armour(&self) -> u32 {
        self.stats.armour
    }

    /// How much the player can carry in kilograms.
    pub fn carrying_capacity(&self) -> u32 {
        self.stats.carrying_capacity
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn set_health(&mut self, health: i32) {
        self.stats.health = health;
    }

    pub fn set_max_health(&mut self, max_health: i32) {
        self.stats.max_health = max_health;
    }

    pub fn set_carrying_capacity(&mut self, carrying_capacity: u32) {
        self.stats.carrying_capacity = carrying_capacity;
    }

    /// True while the light-load damage reduction applies.
    pub fn is_light_load(&self) -> bool {
        combat::is_light_load(self.stats.carrying_capacity)
    }

    /// Refresh the armour snapshot from the inventory.
    pub fn recalculate_armour(&mut self) {
        self.stats.armour = self.inventory.total_armour_bonus();
        tracing::trace!(armour = self.stats.armour, "armour recalculated");
    }

    /// Pick up an item, reporting why it was refused.
    ///
    /// On acceptance the item's effects are requested first; then non-healing
    /// items are stored and healing items are left for
    /// [`Player::apply_healing`].
    ///
    /// # Errors
    ///
    /// - [`PickupError::Overweight`] if carried weight plus the item's weight
    ///   exceeds the player's carrying capacity
    /// - [`PickupError::DuplicateUnique`] if the item is unique and an item
    ///   with the same id is already stored
    pub fn try_pickup(&mut self, item: &Item) -> Result<PickupOutcome, PickupError> {
        let carried = self.inventory.total_weight();
        let capacity = self.stats.carrying_capacity;
        if carried + u64::from(item.weight()) > u64::from(capacity) {
            tracing::debug!(item = %item.id(), carried, capacity, "pickup refused: too heavy");
            return Err(PickupError::Overweight {
                carried,
                weight: item.weight(),
                capacity,
            });
        }

        if item.is_unique() && self.inventory.contains_item_with_id(item) {
            tracing::debug!(item = %item.id(), "pickup refused: unique item already owned");
            return Err(PickupError::DuplicateUnique(item.id()));
        }

        self.effects.select_and_play(Some(item));

        if item.is_consumable() {
            tracing::debug!(item = %item.id(), heal = item.heal_amount(), "consumable picked up");
            return Ok(PickupOutcome::Consumed);
        }

        self.inventory.add_item(item.clone());
        tracing::debug!(item = %item.id(), name = item.name(), "item stored");
        Ok(PickupOutcome::Stored)
    }

    /// Pick up an item. Returns whether it was accepted.
    pub fn attempt_pickup(&mut self, item: &Item) -> bool {
        self.try_pickup(item).is_ok()
    }

    /// Heal by the item's heal amount, clamped to max health, and request its
    /// effects again. No-op for items that do not heal.
    pub fn apply_healing(&mut self, item: &Item) {
        if !item.is_consumable() {
            return;
        }

        let heal = i32::try_from(item.heal_amount()).unwrap_or(i32::MAX);
        let healed = self.stats.health.saturating_add(heal);
        self.stats.health = healed.min(self.stats.max_health);
        tracing::debug!(
            item = %item.id(),
            heal,
            health = self.stats.health,
            max_health = self.stats.max_health,
            "healing applied"
        );

        self.effects.select_and_play(Some(item));
    }

    /// Use an item on the surroundings.
    ///
    /// Only the stink bomb (matched by exact name) does anything: it deals
    /// fixed damage to every enemy the engine reports nearby. Returns the
    /// number of enemies hit.
    pub fn use_item(&self, item: &Item) -> usize {
        if item.name() != PlayerConfig::STINK_BOMB_NAME {
            return 0;
        }

        let enemies = self.engine.enemies_near(&self.stats);
        for enemy in &enemies {
            enemy.take_damage(PlayerConfig::STINK_BOMB_DAMAGE);
        }
        tracing::debug!(enemies = enemies.len(), "stink bomb used");
        enemies.len()
    }

    /// Take a hit.
    ///
    /// Damage below the armour snapshot is parried. Otherwise armour is
    /// subtracted, the light-load reduction applies when carrying capacity is
    /// under half the absolute maximum, and the rest comes off health with no
    /// floor at zero.
    pub fn take_damage(&mut self, amount: u32) -> DamageOutcome {
        let outcome = combat::resolve_damage(
            amount,
            self.stats.armour,
            self.stats.carrying_capacity,
        );

        if let DamageOutcome::Hit { dealt } = outcome {
            self.stats.health = combat::apply_damage(self.stats.health, dealt);
        }
        tracing::debug!(amount, ?outcome, health = self.stats.health, "damage resolved");

        self.play(outcome.effect());
        outcome
    }

    fn play(&self, effect: SpecialEffect) {
        self.engine.play_effect(effect.name());
    }
}

impl<E, S> core::fmt::Debug for Player<'_, E, S>
where
    E: GameEngine + ?Sized,
    S: EffectSelector + ?Sized,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Player")
            .field("stats", &self.stats)
            .field("inventory", &self.inventory)
            .finish_non_exhaustive()
    }
}
