//! The registry as seen by the spawn director.
//!
//! `Arena` borrows the world for one director call and implements the
//! collaborator traits on top of it: zombies are created from the session's
//! template, counted by tag, and placed around the player.

use glam::Vec2;
use hecs::{Entity, World};

use horde_core::components::{Player, Position, Tag};
use horde_core::config::ZombieTemplate;
use horde_core::types::EntityHandle;
use horde_spawn::host::{EntityFactory, PopulationOracle, ReferencePoint};

use crate::world_setup;

pub struct Arena<'w> {
    world: &'w mut World,
    template: Option<ZombieTemplate>,
}

impl<'w> Arena<'w> {
    pub fn new(world: &'w mut World, template: Option<ZombieTemplate>) -> Self {
        Self { world, template }
    }
}

impl EntityFactory for Arena<'_> {
    type Handle = Entity;

    fn can_create(&self) -> bool {
        self.template.is_some()
    }

    fn create(&mut self, position: Vec2) -> Option<Entity> {
        let template = self.template.as_ref()?;
        // Wave is stamped by the engine once the request comes back.
        Some(world_setup::spawn_zombie(self.world, position, template, 0))
    }
}

impl PopulationOracle for Arena<'_> {
    fn count_living(&self, tag: &str) -> usize {
        count_tagged(self.world, tag)
    }
}

impl ReferencePoint for Arena<'_> {
    fn reference_position(&self) -> Option<Vec2> {
        player_position(self.world)
    }
}

/// Live entities carrying `tag`.
pub fn count_tagged(world: &World, tag: &str) -> usize {
    world
        .query::<&Tag>()
        .iter()
        .filter(|(_, t)| t.0 == tag)
        .count()
}

pub fn player_position(world: &World) -> Option<Vec2> {
    world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| pos.0)
}

pub fn to_handle(entity: Entity) -> EntityHandle {
    EntityHandle(entity.to_bits().get())
}

/// `None` for bit patterns that never named an entity.
pub fn from_handle(handle: EntityHandle) -> Option<Entity> {
    Entity::from_bits(handle.0)
}
