//! Entity spawn factories for the session registry.

use glam::Vec2;
use hecs::{Entity, World};

use horde_core::components::{Player, Position, Tag, Zombie};
use horde_core::config::ZombieTemplate;
use horde_core::constants::{ENEMY_TAG, PLAYER_TAG};

/// Spawn the tracked player entity.
pub fn spawn_player(world: &mut World, position: Vec2) -> Entity {
    world.spawn((Player, Tag(PLAYER_TAG), Position(position)))
}

/// Spawn one zombie from `template`.
pub fn spawn_zombie(world: &mut World, position: Vec2, template: &ZombieTemplate, wave: u32) -> Entity {
    world.spawn((
        Tag(ENEMY_TAG),
        Position(position),
        Zombie {
            health: template.health,
            speed: template.speed,
            wave,
        },
    ))
}

/// Remove every zombie. Returns how many were removed.
pub fn despawn_zombies(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> usize {
    despawn_buffer.clear();
    despawn_buffer.extend(world.query_mut::<&Zombie>().into_iter().map(|(e, _)| e));

    let count = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    count
}
