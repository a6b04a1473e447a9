//! Collaborator contracts the director calls into.
//!
//! The host owns entity lifetime; the director only creates through the
//! factory and counts through the oracle.

use glam::Vec2;

/// Creates hostiles.
pub trait EntityFactory {
    type Handle;

    /// False when the factory has nothing to build from (no template).
    fn can_create(&self) -> bool;

    /// Create one hostile at `position`. `None` if creation failed.
    fn create(&mut self, position: Vec2) -> Option<Self::Handle>;
}

/// Counts live entities by tag. Must be cheap and side-effect free.
pub trait PopulationOracle {
    fn count_living(&self, tag: &str) -> usize;
}

/// Position of the tracked entity (the player).
pub trait ReferencePoint {
    fn reference_position(&self) -> Option<Vec2>;
}

/// Everything the director needs from its host.
pub trait SpawnHost: EntityFactory + PopulationOracle + ReferencePoint {}

impl<T: EntityFactory + PopulationOracle + ReferencePoint> SpawnHost for T {}
