//! Spawn logic for HORDE.
//!
//! Decides when and where hostiles appear: difficulty curves, rejection-sampled
//! placement around the player, and the wave loop state machine. No ECS
//! dependency; the director talks to its host through the traits in `host`.

pub mod difficulty;
pub mod director;
pub mod host;
pub mod sampling;
pub mod wait;

pub use director::{DifficultyChange, SpawnDirector, SpawnRequest};
pub use horde_core as core;
