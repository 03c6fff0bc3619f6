//! Cosmetic effect selection.
//!
//! Effect choice is split in two: [`plan_item_effects`] is a pure function of
//! the item, and an [`EffectSelector`] plays the plan through the engine.
//!
//! # Rules
//!
//! Evaluated in order for a present item:
//!
//! 1. rare → `cool_swirly_particles` (does not stop evaluation)
//! 2. rare and unique → `blue_swirly`, stop
//! 3. heal above [`PlayerConfig::MEGA_HEAL_THRESHOLD`] → `green_swirly`, stop
//!
//! An absent item plays nothing.

use arrayvec::ArrayVec;

use crate::config::PlayerConfig;
use crate::env::GameEngine;
use crate::state::Item;

/// Named effects the core can request.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum SpecialEffect {
    /// Any rare item.
    CoolSwirlyParticles,
    /// Rare and unique item.
    BlueSwirly,
    /// Very large heal.
    GreenSwirly,
    /// Incoming damage fully absorbed by armour.
    Parry,
    /// Incoming damage got through.
    LotsOfGore,
}

impl SpecialEffect {
    /// Name forwarded to the engine.
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// Effects to request for one item, in request order. At most two fire.
pub type EffectPlan = ArrayVec<SpecialEffect, 2>;

/// Decide which effects an item triggers.
pub fn plan_item_effects(item: Option<&Item>) -> EffectPlan {
    let mut plan = EffectPlan::new();
    let Some(item) = item else {
        return plan;
    };

    if item.is_rare() {
        plan.push(SpecialEffect::CoolSwirlyParticles);
    }

    if item.is_rare() && item.is_unique() {
        plan.push(SpecialEffect::BlueSwirly);
        return plan;
    }

    if item.heal_amount() > PlayerConfig::MEGA_HEAL_THRESHOLD {
        plan.push(SpecialEffect::GreenSwirly);
    }

    plan
}

/// Picks and requests the effects for an item.
pub trait EffectSelector {
    fn select_and_play(&self, item: Option<&Item>);
}

/// Default selector: plays [`plan_item_effects`] through a [`GameEngine`].
#[derive(Clone, Copy, Debug)]
pub struct ItemEffectSelector<'a, E: GameEngine + ?Sized> {
    engine: &'a E,
}

impl<'a, E: GameEngine + ?Sized> ItemEffectSelector<'a, E> {
    pub fn new(engine: &'a E) -> Self {
        Self { engine }
    }
}

impl<E: GameEngine + ?Sized> EffectSelector for ItemEffectSelector<'_, E> {
    fn select_and_play(&self, item: Option<&Item>) {
        for effect in plan_item_effects(item) {
            tracing::trace!(effect = effect.name(), "requesting item effect");
            self.engine.play_effect(effect.name());
        }
    }
}
