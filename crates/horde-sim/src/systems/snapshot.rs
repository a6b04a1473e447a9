//! Snapshot system: queries the registry and builds a `SessionSnapshot`.
//!
//! Read-only; never modifies the world.

use hecs::World;

use horde_core::components::{Position, Zombie};
use horde_core::constants::ENEMY_TAG;
use horde_core::enums::SessionPhase;
use horde_core::state::{HudView, SessionSnapshot, SpawnerView, ZombieView};
use horde_core::types::SimClock;
use horde_spawn::SpawnDirector;

use crate::arena::{count_tagged, player_position, to_handle};

/// Build the complete snapshot for the host.
pub fn build_snapshot(
    world: &World,
    director: &SpawnDirector,
    clock: &SimClock,
    phase: SessionPhase,
    hud: HudView,
) -> SessionSnapshot {
    SessionSnapshot {
        clock: *clock,
        phase,
        player: player_position(world),
        zombies: build_zombies(world),
        spawner: build_spawner(world, director),
        hud,
    }
}

/// HUD values derived from the director and the registry.
pub fn build_hud(world: &World, director: &SpawnDirector, clock: &SimClock, score: u32) -> HudView {
    HudView {
        wave: director.current_wave(),
        kills: kills(world, director),
        elapsed_secs: clock.whole_secs(),
        score,
    }
}

/// Spawned minus still alive.
pub fn kills(world: &World, director: &SpawnDirector) -> u32 {
    let alive = world.query::<&Zombie>().iter().count() as u32;
    director.total_spawned().saturating_sub(alive)
}

fn build_zombies(world: &World) -> Vec<ZombieView> {
    let mut zombies: Vec<ZombieView> = world
        .query::<(&Zombie, &Position)>()
        .iter()
        .map(|(entity, (zombie, pos))| ZombieView {
            handle: to_handle(entity),
            position: pos.0,
            wave: zombie.wave,
        })
        .collect();

    zombies.sort_by_key(|z| z.handle.0);
    zombies
}

fn build_spawner(world: &World, director: &SpawnDirector) -> SpawnerView {
    SpawnerView {
        phase: director.phase(),
        is_spawning: director.is_spawning(),
        game_time: director.game_time(),
        current_wave: director.current_wave(),
        total_spawned: director.total_spawned(),
        active_zombies: count_tagged(world, ENEMY_TAG) as u32,
        difficulty_level: director.difficulty_level(),
        zombies_per_wave: director.zombies_per_wave(),
        spawn_interval: director.spawn_interval(),
    }
}
