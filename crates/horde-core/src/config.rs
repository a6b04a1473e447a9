//! Configuration structs. All fields default from `constants`, so partial
//! JSON documents deserialize into a complete config.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;
use crate::types::Rect;

/// Spawn director tuning. Immutable once the director is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerConfig {
    // --- Distance ---
    pub min_spawn_distance: f32,
    pub max_spawn_distance: f32,

    // --- Area restriction ---
    pub use_restricted_area: bool,
    pub restricted_area: Rect,
    pub max_spawn_attempts: u32,

    // --- Timing ---
    pub initial_spawn_delay: f32,
    pub base_spawn_interval: f32,
    pub base_zombies_per_wave: u32,

    // --- Difficulty ---
    pub enable_difficulty_scaling: bool,
    pub difficulty_increase_interval: f32,
    pub max_zombies_per_wave: u32,
    pub min_spawn_interval: f32,

    // --- Population cap ---
    pub limit_active_zombies: bool,
    pub max_active_zombies: u32,
    /// Tag passed to the population oracle.
    pub enemy_tag: String,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            min_spawn_distance: MIN_SPAWN_DISTANCE,
            max_spawn_distance: MAX_SPAWN_DISTANCE,
            use_restricted_area: true,
            restricted_area: Rect::new(
                RESTRICTED_MIN_X,
                RESTRICTED_MAX_X,
                RESTRICTED_MIN_Y,
                RESTRICTED_MAX_Y,
            ),
            max_spawn_attempts: MAX_SPAWN_ATTEMPTS,
            initial_spawn_delay: INITIAL_SPAWN_DELAY,
            base_spawn_interval: BASE_SPAWN_INTERVAL,
            base_zombies_per_wave: BASE_ZOMBIES_PER_WAVE,
            enable_difficulty_scaling: true,
            difficulty_increase_interval: DIFFICULTY_INCREASE_INTERVAL,
            max_zombies_per_wave: MAX_ZOMBIES_PER_WAVE,
            min_spawn_interval: MIN_SPAWN_INTERVAL,
            limit_active_zombies: true,
            max_active_zombies: MAX_ACTIVE_ZOMBIES,
            enemy_tag: ENEMY_TAG.to_string(),
        }
    }
}

impl SpawnerConfig {
    /// Check every bound the director relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.min_spawn_distance, self.max_spawn_distance);
        if !(min.is_finite() && max.is_finite() && min >= 0.0 && max >= min) {
            return Err(ConfigError::SpawnDistance { min, max });
        }
        let area = &self.restricted_area;
        if !(area.max.x >= area.min.x) {
            return Err(ConfigError::RestrictedArea { axis: 'x' });
        }
        if !(area.max.y >= area.min.y) {
            return Err(ConfigError::RestrictedArea { axis: 'y' });
        }
        if self.max_spawn_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        if !(self.initial_spawn_delay >= 0.0) {
            return Err(ConfigError::Negative {
                name: "initial_spawn_delay",
                value: self.initial_spawn_delay,
            });
        }
        positive("difficulty_increase_interval", self.difficulty_increase_interval)?;
        positive("min_spawn_interval", self.min_spawn_interval)?;
        if !(self.base_spawn_interval >= self.min_spawn_interval) {
            return Err(ConfigError::IntervalBounds {
                base: self.base_spawn_interval,
                min: self.min_spawn_interval,
            });
        }
        if self.base_zombies_per_wave > self.max_zombies_per_wave {
            return Err(ConfigError::WaveSize {
                base: self.base_zombies_per_wave,
                max: self.max_zombies_per_wave,
            });
        }
        if self.enemy_tag.is_empty() {
            return Err(ConfigError::EmptyTag);
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

/// Leaderboard storage and display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Entries considered "on the board" by `is_high_score`.
    pub display_limit: usize,
    /// When false, the ledger keeps only the best `storage_limit` records.
    pub unlimited_storage: bool,
    pub storage_limit: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            display_limit: DISPLAY_LIMIT,
            unlimited_storage: true,
            storage_limit: STORAGE_LIMIT,
        }
    }
}

/// Stats given to every spawned zombie.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZombieTemplate {
    pub health: f32,
    pub speed: f32,
}

impl Default for ZombieTemplate {
    fn default() -> Self {
        Self {
            health: ZOMBIE_HEALTH,
            speed: ZOMBIE_SPEED,
        }
    }
}

/// Configuration for starting a new session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// RNG seed for determinism. Same seed = same session.
    pub seed: u64,
    pub spawner: SpawnerConfig,
    /// `None` leaves the entity factory without a template, which disables
    /// the spawner at start.
    pub zombie: Option<ZombieTemplate>,
    /// `None` starts the session without a player, which disables the spawner.
    pub player_start: Option<Vec2>,
    pub score_per_kill: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            spawner: SpawnerConfig::default(),
            zombie: Some(ZombieTemplate::default()),
            player_start: Some(Vec2::ZERO),
            score_per_kill: SCORE_PER_KILL,
        }
    }
}
