//! Traits describing the host game engine.
//!
//! The core never renders, plays audio or runs enemy AI. It forwards effect
//! names and asks for nearby enemies through [`GameEngine`], which the host
//! supplies at construction time. Substituting a recording fake is how the
//! rules are tested.
use crate::player::PlayerStats;

/// Capabilities the host engine exposes to the core.
pub trait GameEngine {
    /// Fire a named cosmetic or audio effect. Fire-and-forget.
    fn play_effect(&self, effect_name: &str);

    /// Enemies within reach of the player. Order is not significant.
    fn enemies_near(&self, player: &PlayerStats) -> Vec<&dyn Enemy>;
}

/// Anything in the world that can be hurt by the player's items.
///
/// Takes `&self`: enemies are owned by the host, which decides how their
/// health is stored.
pub trait Enemy {
    fn take_damage(&self, amount: u32);
}
