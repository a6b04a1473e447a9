//! Spawn placement: rejection sampling over an annulus around the reference
//! point, minus the keep-clear rectangle.

use glam::Vec2;
use rand::Rng;

use horde_core::config::SpawnerConfig;
use horde_core::types::Rect;

/// Inputs to the placement sampler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementParams {
    pub min_distance: f32,
    pub max_distance: f32,
    /// `None` disables the area restriction.
    pub restricted: Option<Rect>,
    pub max_attempts: u32,
}

impl PlacementParams {
    pub fn from_config(config: &SpawnerConfig) -> Self {
        Self {
            min_distance: config.min_spawn_distance,
            max_distance: config.max_spawn_distance,
            restricted: config
                .use_restricted_area
                .then_some(config.restricted_area),
            max_attempts: config.max_spawn_attempts,
        }
    }

    /// Whether a candidate passes the area rule.
    pub fn admits(&self, candidate: Vec2) -> bool {
        match &self.restricted {
            Some(area) => area.escapes(candidate),
            None => true,
        }
    }
}

/// Result of one placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Vec2,
    /// False when every attempt was rejected and `position` is the last
    /// candidate, which may sit inside the restricted rectangle.
    pub accepted: bool,
    pub attempts: u32,
}

/// One candidate on the annulus `[min_distance, max_distance]` around `reference`.
pub fn sample_annulus<R: Rng + ?Sized>(
    rng: &mut R,
    reference: Vec2,
    min_distance: f32,
    max_distance: f32,
) -> Vec2 {
    let angle = rng.gen_range(0.0_f32..360.0).to_radians();
    let distance = if max_distance > min_distance {
        rng.gen_range(min_distance..=max_distance)
    } else {
        min_distance
    };
    reference + Vec2::new(angle.cos(), angle.sin()) * distance
}

/// Pick a spawn position around `reference`.
///
/// Tries up to `max_attempts` candidates. If none escapes the restricted
/// rectangle, the last candidate is returned unmodified with `accepted = false`.
pub fn random_spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    reference: Vec2,
    params: &PlacementParams,
) -> Placement {
    let mut position = reference;
    let mut attempts = 0;

    while attempts < params.max_attempts {
        position = sample_annulus(rng, reference, params.min_distance, params.max_distance);
        attempts += 1;
        if params.admits(position) {
            return Placement {
                position,
                accepted: true,
                attempts,
            };
        }
    }

    log::warn!(
        "no valid spawn position after {} attempts, using last candidate ({:.2}, {:.2})",
        params.max_attempts,
        position.x,
        position.y
    );
    Placement {
        position,
        accepted: false,
        attempts,
    }
}
