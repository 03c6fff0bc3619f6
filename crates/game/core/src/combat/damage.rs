//! Damage calculation and application.

use crate::config::PlayerConfig;
use crate::effect::SpecialEffect;

/// Result of resolving one incoming hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageOutcome {
    /// Armour exceeded the damage; health is untouched.
    Parried,
    /// Damage got through. `dealt` may be zero when damage equals armour.
    Hit { dealt: u32 },
}

impl DamageOutcome {
    /// Effect the engine should play for this outcome.
    pub fn effect(&self) -> SpecialEffect {
        match self {
            Self::Parried => SpecialEffect::Parry,
            Self::Hit { .. } => SpecialEffect::LotsOfGore,
        }
    }

    pub fn dealt(&self) -> u32 {
        match self {
            Self::Parried => 0,
            Self::Hit { dealt } => *dealt,
        }
    }
}

/// Whether a player with this capacity gets the light-load reduction.
///
/// The threshold is half of [`PlayerConfig::MAXIMUM_CARRYING_CAPACITY`], not
/// half of the player's own capacity.
pub fn is_light_load(carrying_capacity: u32) -> bool {
    carrying_capacity < PlayerConfig::MAXIMUM_CARRYING_CAPACITY / 2
}

/// Remove the light-load share from `raw` damage.
///
/// The removed share is truncated toward zero, so `raw = 3` removes nothing
/// and `raw = 100` removes 25.
pub fn light_load_reduction(raw: u32) -> u32 {
    let removed = u64::from(raw) * u64::from(PlayerConfig::LIGHT_LOAD_REDUCTION_PERCENT) / 100;
    // removed <= raw, so the cast back cannot truncate
    raw - removed as u32
}

/// Calculate damage from an incoming hit.
///
/// # Formula
///
/// ```text
/// if amount < armour:
///     parried
/// raw = amount - armour
/// if carrying_capacity < MAXIMUM_CARRYING_CAPACITY / 2:
///     dealt = raw - trunc(raw * 25%)
/// else:
///     dealt = raw
/// ```
pub fn resolve_damage(amount: u32, armour: u32, carrying_capacity: u32) -> DamageOutcome {
    if amount < armour {
        return DamageOutcome::Parried;
    }

    let raw = amount - armour;
    let dealt = if is_light_load(carrying_capacity) {
        light_load_reduction(raw)
    } else {
        raw
    };

    DamageOutcome::Hit { dealt }
}

/// Apply damage to current health.
///
/// Health is not floored at zero; it saturates only at `i32::MIN`.
pub fn apply_damage(health: i32, dealt: u32) -> i32 {
    let dealt = i32::try_from(dealt).unwrap_or(i32::MAX);
    health.saturating_sub(dealt)
}
