//! Change notifications pushed to presentation layers.

use serde::{Deserialize, Serialize};

use crate::enums::SpawnerPhase;
use crate::state::SessionSummary;

/// Telemetry events. Emitted when a value changes, never on poll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TelemetryEvent {
    /// A new wave fired.
    WaveChanged { wave: u32 },
    /// Kill count (spawned − alive) changed.
    KillsChanged { kills: u32 },
    /// Elapsed time crossed a whole second.
    ElapsedChanged { secs: u32 },
    ScoreChanged { score: u32 },
    /// Difficulty tier changed, with the quantities it drives.
    DifficultyChanged {
        level: u32,
        zombies_per_wave: u32,
        spawn_interval: f32,
    },
    SpawnerPhaseChanged { phase: SpawnerPhase },
    /// The run ended.
    GameOver { summary: SessionSummary },
}
