//! Host commands sent to the session engine.
//!
//! Commands are queued and processed at the next tick boundary.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::types::EntityHandle;

/// All possible host actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionCommand {
    // --- Session control ---
    /// Freeze the whole session (no time advances).
    Pause,
    /// Unfreeze the session.
    Resume,
    /// End the run. Stops spawning and clears the registry.
    GameOver,

    // --- Spawner control ---
    /// Ask the spawn loop to stop after its current wait.
    PauseSpawning,
    /// Restart the spawn loop from its initial delay.
    ResumeSpawning,
    /// Spawn zombies immediately, outside the wave loop.
    SpawnZombies { count: u32 },

    // --- World ---
    /// Teleport the player (the host owns movement).
    MovePlayer { position: Vec2 },
    /// A zombie died. Awards score and removes it from the registry.
    KillZombie { handle: EntityHandle },
}
