//! In-memory host engine.
//!
//! Stands in for the rendering/audio side of a game: effect requests are
//! logged and kept in order, and a fixed roster of training dummies counts as
//! "nearby" for as long as they are standing.

use std::cell::{Cell, RefCell};

use rpg_core::{Enemy, GameEngine, PlayerStats};

/// Enemy with a health pool and nothing else.
#[derive(Debug)]
pub struct TrainingDummy {
    name: String,
    health: Cell<i32>,
}

impl TrainingDummy {
    pub const DEFAULT_HEALTH: i32 = 250;

    pub fn new(name: impl Into<String>, health: i32) -> Self {
        Self {
            name: name.into(),
            health: Cell::new(health),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> i32 {
        self.health.get()
    }

    pub fn is_standing(&self) -> bool {
        self.health.get() > 0
    }
}

impl Enemy for TrainingDummy {
    fn take_damage(&self, amount: u32) {
        let amount = i32::try_from(amount).unwrap_or(i32::MAX);
        let health = self.health.get().saturating_sub(amount);
        self.health.set(health);
        tracing::info!(enemy = self.name(), amount, health, "enemy hit");
    }
}

/// Engine that records every effect request.
#[derive(Debug, Default)]
pub struct HostEngine {
    effects: RefCell<Vec<String>>,
    enemies: Vec<TrainingDummy>,
}

impl HostEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with `count` dummies at [`TrainingDummy::DEFAULT_HEALTH`].
    pub fn with_dummies(count: usize) -> Self {
        let enemies = (1..=count)
            .map(|n| TrainingDummy::new(format!("dummy-{n}"), TrainingDummy::DEFAULT_HEALTH))
            .collect();
        Self {
            effects: RefCell::default(),
            enemies,
        }
    }

    pub fn with_enemies(enemies: Vec<TrainingDummy>) -> Self {
        Self {
            effects: RefCell::default(),
            enemies,
        }
    }

    /// Effect names requested so far, oldest first.
    pub fn effects(&self) -> Vec<String> {
        self.effects.borrow().clone()
    }

    pub fn effect_count(&self) -> usize {
        self.effects.borrow().len()
    }

    pub fn enemies(&self) -> &[TrainingDummy] {
        &self.enemies
    }
}

impl GameEngine for HostEngine {
    fn play_effect(&self, effect_name: &str) {
        tracing::info!(effect = effect_name, "playing effect");
        self.effects.borrow_mut().push(effect_name.to_string());
    }

    fn enemies_near(&self, player: &PlayerStats) -> Vec<&dyn Enemy> {
        let nearby: Vec<&dyn Enemy> = self
            .enemies
            .iter()
            .filter(|enemy| enemy.is_standing())
            .map(|enemy| enemy as &dyn Enemy)
            .collect();
        tracing::debug!(nearby = nearby.len(), health = player.health, "enemies near player");
        nearby
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> PlayerStats {
        PlayerStats {
            health: 100,
            max_health: 100,
            armour: 0,
            carrying_capacity: 1000,
        }
    }

    #[test]
    fn records_effects_in_order() {
        let engine = HostEngine::new();
        engine.play_effect("parry");
        engine.play_effect("lots_of_gore");
        assert_eq!(engine.effects(), vec!["parry", "lots_of_gore"]);
    }

    #[test]
    fn fallen_dummies_are_not_nearby() {
        let engine = HostEngine::with_enemies(vec![
            TrainingDummy::new("upright", 10),
            TrainingDummy::new("fallen", 0),
        ]);
        assert_eq!(engine.enemies_near(&stats()).len(), 1);
    }

    #[test]
    fn dummy_health_goes_down() {
        let dummy = TrainingDummy::new("dummy", 150);
        dummy.take_damage(100);
        assert_eq!(dummy.health(), 50);
        dummy.take_damage(100);
        assert!(!dummy.is_standing());
    }
}
