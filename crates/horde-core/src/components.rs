//! ECS components stored in the session registry.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// World-space position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Registry tag, queried by kind (`"Player"`, `"Enemy"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag(pub &'static str);

/// Marker for the tracked player entity.
#[derive(Debug, Clone, Copy, Default)]
pub struct Player;

/// A live zombie.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zombie {
    pub health: f32,
    pub speed: f32,
    /// Wave the zombie was spawned in; 0 for manual spawns.
    pub wave: u32,
}
