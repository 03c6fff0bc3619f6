//! Damage resolution.
//!
//! Pure functions; the player applies the outcome and requests the effects.
//!
//! - `resolve_damage`: armour check, light-load reduction, final damage
//! - `apply_damage`: health reduction with no floor

pub mod damage;

pub use damage::{
    DamageOutcome, apply_damage, is_light_load, light_load_reduction, resolve_damage,
};
