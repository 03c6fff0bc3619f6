//! Item pickup, inventory and combat rules for a single player.
//!
//! `rpg-core` encodes one game's ruleset: which items a player may pick up,
//! how carried items add up to armour and weight, how healing and incoming
//! damage change health, and which cosmetic effects each of those requests.
//! Everything is synchronous and deterministic. Rendering, audio and enemy
//! behaviour belong to the host, reached through [`env::GameEngine`].
pub mod combat;
pub mod config;
pub mod effect;
pub mod env;
pub mod error;
pub mod player;
pub mod state;

pub use combat::DamageOutcome;
pub use config::{ConfigError, PlayerConfig};
pub use effect::{EffectPlan, EffectSelector, ItemEffectSelector, SpecialEffect, plan_item_effects};
pub use env::{Enemy, GameEngine};
pub use error::{ErrorSeverity, GameError};
pub use player::{GamePlayer, PickupError, PickupOutcome, Player, PlayerStats};
pub use state::{Inventory, Item, ItemBuilder, ItemId};
