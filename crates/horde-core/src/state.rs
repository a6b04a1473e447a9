//! Session snapshot: the visible state handed to the host after each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{EntityHandle, SimClock};

/// Complete session state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub clock: SimClock,
    pub phase: SessionPhase,
    pub player: Option<Vec2>,
    pub zombies: Vec<ZombieView>,
    pub spawner: SpawnerView,
    pub hud: HudView,
}

/// A zombie as seen by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZombieView {
    pub handle: EntityHandle,
    pub position: Vec2,
    pub wave: u32,
}

/// Spawner counters for debug overlays.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpawnerView {
    pub phase: SpawnerPhase,
    pub is_spawning: bool,
    pub game_time: f32,
    pub current_wave: u32,
    pub total_spawned: u32,
    pub active_zombies: u32,
    pub difficulty_level: u32,
    pub zombies_per_wave: u32,
    pub spawn_interval: f32,
}

/// HUD values. Telemetry fires when any of these change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HudView {
    pub wave: u32,
    pub kills: u32,
    pub elapsed_secs: u32,
    pub score: u32,
}

/// End-of-run figures handed to the leaderboard and lifetime stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub wave: u32,
    /// Spawned minus still alive at game over.
    pub kills: u32,
    pub survival_secs: f32,
    pub score: u32,
}
