//! Enumeration types used throughout the game core.

use serde::{Deserialize, Serialize};

/// Spawn director lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnerPhase {
    /// Built but not started.
    #[default]
    Idle,
    /// Waiting out the initial delay before the first wave.
    Delaying,
    /// Wave loop running.
    Spawning,
    /// Loop exited after a pause request; waits for resume.
    Paused,
    /// Terminal. No further ticks or waves.
    GameOver,
    /// A mandatory collaborator was missing at start. Terminal.
    Disabled,
}

/// What a pending spawn-loop wait is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaitKind {
    /// Initial delay before the loop starts (also used after resume).
    InitialDelay,
    /// Interval between two fired waves, latched at firing time.
    WaveInterval,
    /// Population cap reached; re-check after a fixed backoff.
    CapacityBackoff,
}

/// Session-level phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    #[default]
    NotStarted,
    Active,
    /// Whole session frozen; nothing advances.
    Paused,
    GameOver,
}
