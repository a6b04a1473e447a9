//! Fundamental geometric and timing types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self {
            min: Vec2::new(min_x, min_y),
            max: Vec2::new(max_x, max_y),
        }
    }

    /// True when `p` lies inside or on the border on both axes.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// True when `p` is outside the rectangle on at least one axis.
    ///
    /// This is the placement rule for the keep-clear zone: escaping on one
    /// axis is enough, so a point beside the rectangle but within its Y band
    /// still qualifies.
    pub fn escapes(&self, p: Vec2) -> bool {
        let outside_x = p.x < self.min.x || p.x > self.max.x;
        let outside_y = p.y < self.min.y || p.y > self.max.y;
        outside_x || outside_y
    }
}

/// Opaque, serializable handle to an entity owned by the host registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityHandle(pub u64);

/// Session clock tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimClock {
    /// Frames processed while the session was active.
    pub frame: u64,
    /// Elapsed active time in seconds.
    pub elapsed_secs: f32,
}

impl SimClock {
    pub fn advance(&mut self, dt: f32) {
        self.frame += 1;
        self.elapsed_secs += dt;
    }

    /// Elapsed time truncated to whole seconds.
    pub fn whole_secs(&self) -> u32 {
        self.elapsed_secs.max(0.0) as u32
    }
}

/// Format seconds as `MM:SS`, minutes unbounded.
pub fn format_mm_ss(secs: f32) -> String {
    let secs = secs.max(0.0);
    let minutes = (secs / 60.0).floor() as u32;
    let seconds = (secs % 60.0).floor() as u32;
    format!("{minutes:02}:{seconds:02}")
}
