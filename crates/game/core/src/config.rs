//! Player configuration and rule constants.

use crate::error::{ErrorSeverity, GameError};

/// Starting values for a player plus the fixed numbers of the ruleset.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerConfig {
    /// Upper bound enforced whenever health is restored.
    pub max_health: i32,
    /// Health the player starts with.
    pub health: i32,
    /// How much the player can carry in kilograms.
    pub carrying_capacity: u32,
}

impl PlayerConfig {
    // ===== ruleset constants =====
    /// Absolute carrying limit. Also the reference point for the light-load
    /// damage reduction, independent of the player's own capacity.
    pub const MAXIMUM_CARRYING_CAPACITY: u32 = 1000;
    /// Percentage shaved off incoming damage while carrying a light load.
    pub const LIGHT_LOAD_REDUCTION_PERCENT: u32 = 25;
    /// Fixed damage a stink bomb deals to each nearby enemy.
    pub const STINK_BOMB_DAMAGE: u32 = 100;
    /// Item name that triggers the stink bomb. Matched exactly.
    pub const STINK_BOMB_NAME: &'static str = "Stink Bomb";
    /// Heals strictly above this amount get the green swirl.
    pub const MEGA_HEAL_THRESHOLD: u32 = 500;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_HEALTH: i32 = 100;

    pub fn new() -> Self {
        Self {
            max_health: Self::DEFAULT_MAX_HEALTH,
            health: Self::DEFAULT_MAX_HEALTH,
            carrying_capacity: Self::MAXIMUM_CARRYING_CAPACITY,
        }
    }

    pub fn with_health(max_health: i32, health: i32) -> Self {
        Self {
            max_health,
            health,
            ..Self::new()
        }
    }

    /// Checks the values a player can legally start with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `max_health` is not positive or the starting
    /// health exceeds it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_health <= 0 {
            return Err(ConfigError::NonPositiveMaxHealth(self.max_health));
        }
        if self.health > self.max_health {
            return Err(ConfigError::HealthAboveMax {
                health: self.health,
                max_health: self.max_health,
            });
        }
        Ok(())
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Invalid [`PlayerConfig`] values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("max_health must be positive, got {0}")]
    NonPositiveMaxHealth(i32),

    #[error("starting health {health} exceeds max_health {max_health}")]
    HealthAboveMax { health: i32, max_health: i32 },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveMaxHealth(_) => "CONFIG_NON_POSITIVE_MAX_HEALTH",
            Self::HealthAboveMax { .. } => "CONFIG_HEALTH_ABOVE_MAX",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = PlayerConfig::default();
        assert_eq!(config.carrying_capacity, PlayerConfig::MAXIMUM_CARRYING_CAPACITY);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_health_above_max() {
        let err = PlayerConfig::with_health(50, 80).validate().unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_HEALTH_ABOVE_MAX");
        assert_eq!(err.severity(), ErrorSeverity::Validation);
    }

    #[test]
    fn rejects_zero_max_health() {
        assert_eq!(
            PlayerConfig::with_health(0, 0).validate(),
            Err(ConfigError::NonPositiveMaxHealth(0))
        );
    }
}
