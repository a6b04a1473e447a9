//! Difficulty curves. Pure functions of elapsed game time.

use horde_core::config::SpawnerConfig;
use horde_core::constants::SPAWN_INTERVAL_STEP;

/// Difficulty tier: `floor(game_time / interval)`.
pub fn difficulty_level(game_time: f32, interval: f32) -> u32 {
    if interval <= 0.0 || game_time <= 0.0 {
        return 0;
    }
    (game_time / interval).floor() as u32
}

/// `min(base + level, max)`.
pub fn zombies_per_wave(base: u32, level: u32, max: u32) -> u32 {
    base.saturating_add(level).min(max)
}

/// `max(base − level·0.2, min)`.
pub fn spawn_interval(base: f32, level: u32, min: f32) -> f32 {
    (base - level as f32 * SPAWN_INTERVAL_STEP).max(min)
}

/// The three curves bound to one spawner configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyCurve {
    pub tier_secs: f32,
    pub base_zombies: u32,
    pub max_zombies: u32,
    pub base_interval: f32,
    pub min_interval: f32,
}

impl DifficultyCurve {
    pub fn from_config(config: &SpawnerConfig) -> Self {
        Self {
            tier_secs: config.difficulty_increase_interval,
            base_zombies: config.base_zombies_per_wave,
            max_zombies: config.max_zombies_per_wave,
            base_interval: config.base_spawn_interval,
            min_interval: config.min_spawn_interval,
        }
    }

    pub fn level_at(&self, game_time: f32) -> u32 {
        difficulty_level(game_time, self.tier_secs)
    }

    pub fn zombies_per_wave(&self, level: u32) -> u32 {
        zombies_per_wave(self.base_zombies, level, self.max_zombies)
    }

    pub fn spawn_interval(&self, level: u32) -> f32 {
        spawn_interval(self.base_interval, level, self.min_interval)
    }
}
