//! Session engine: one run from start to game over.
//!
//! `SessionEngine` owns the hecs registry, processes host commands, drives the
//! spawn director with the host's frame delta, and produces `SessionSnapshot`s.
//! Headless, so whole sessions can be replayed deterministically in tests.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use horde_core::commands::SessionCommand;
use horde_core::components::{Player, Position, Zombie};
use horde_core::config::{SessionConfig, ZombieTemplate};
use horde_core::enums::{SessionPhase, SpawnerPhase};
use horde_core::error::ConfigError;
use horde_core::events::TelemetryEvent;
use horde_core::state::{HudView, SessionSnapshot, SessionSummary};
use horde_core::types::{EntityHandle, SimClock};
use horde_spawn::{SpawnDirector, SpawnRequest};

use crate::arena::{self, Arena};
use crate::systems;
use crate::world_setup;

pub struct SessionEngine {
    world: World,
    director: SpawnDirector,
    rng: ChaCha8Rng,
    clock: SimClock,
    phase: SessionPhase,
    command_queue: VecDeque<SessionCommand>,
    despawn_buffer: Vec<Entity>,
    telemetry: Vec<TelemetryEvent>,

    template: Option<ZombieTemplate>,
    player_start: Option<glam::Vec2>,
    player: Option<Entity>,
    score: u32,
    score_per_kill: u32,

    /// Last values pushed as telemetry.
    hud: HudView,
    spawner_phase: SpawnerPhase,
    /// Fixed at game over, before the registry is cleared.
    final_summary: Option<SessionSummary>,
}

impl SessionEngine {
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        let director = SpawnDirector::new(config.spawner)?;
        Ok(Self {
            world: World::new(),
            spawner_phase: director.phase(),
            director,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            clock: SimClock::default(),
            phase: SessionPhase::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            telemetry: Vec::new(),
            template: config.zombie,
            player_start: config.player_start,
            player: None,
            score: 0,
            score_per_kill: config.score_per_kill,
            hud: HudView::default(),
            final_summary: None,
        })
    }

    /// Place the player and start the spawn director.
    ///
    /// Returns false if the session was already started. A session whose
    /// director comes up disabled still runs; it just never spawns.
    pub fn start(&mut self) -> bool {
        if self.phase != SessionPhase::NotStarted {
            log::warn!("session already started");
            return false;
        }
        if let Some(position) = self.player_start {
            self.player = Some(world_setup::spawn_player(&mut self.world, position));
        }
        self.phase = SessionPhase::Active;

        let arena = Arena::new(&mut self.world, self.template);
        if !self.director.start(&arena) {
            log::warn!("session started without a working spawner");
        }
        self.emit_changes();
        true
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SessionCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SessionCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the session by `dt` seconds and return the resulting snapshot.
    pub fn tick(&mut self, dt: f32) -> SessionSnapshot {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        self.process_commands();

        if self.phase == SessionPhase::Active {
            self.clock.advance(dt);
            if let Some(change) = self.director.tick(dt) {
                self.telemetry.push(TelemetryEvent::DifficultyChanged {
                    level: change.level,
                    zombies_per_wave: change.zombies_per_wave,
                    spawn_interval: change.spawn_interval,
                });
            }
            let mut arena = Arena::new(&mut self.world, self.template);
            if let Some(requests) = self.director.try_spawn_wave(dt, &mut arena, &mut self.rng) {
                self.stamp_waves(&requests);
            }
        }

        self.emit_changes();
        systems::snapshot::build_snapshot(
            &self.world,
            &self.director,
            &self.clock,
            self.phase,
            self.hud,
        )
    }

    /// Drain telemetry emitted since the last call.
    pub fn take_telemetry(&mut self) -> Vec<TelemetryEvent> {
        std::mem::take(&mut self.telemetry)
    }

    /// Run figures. Fixed once the game is over; live before that.
    pub fn summary(&self) -> SessionSummary {
        self.final_summary.unwrap_or_else(|| self.live_summary())
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn clock(&self) -> SimClock {
        self.clock
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn director(&self) -> &SpawnDirector {
        &self.director
    }

    /// Read-only access to the registry.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Handles of every live zombie, oldest first.
    pub fn zombie_handles(&self) -> Vec<EntityHandle> {
        let mut handles: Vec<EntityHandle> = self
            .world
            .query::<&Zombie>()
            .iter()
            .map(|(entity, _)| arena::to_handle(entity))
            .collect();
        handles.sort_by_key(|h| h.0);
        handles
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: SessionCommand) {
        if self.phase == SessionPhase::GameOver {
            log::debug!("command ignored after game over: {command:?}");
            return;
        }
        match command {
            SessionCommand::Pause => {
                if self.phase == SessionPhase::Active {
                    self.phase = SessionPhase::Paused;
                }
            }
            SessionCommand::Resume => {
                if self.phase == SessionPhase::Paused {
                    self.phase = SessionPhase::Active;
                }
            }
            SessionCommand::GameOver => {
                if matches!(self.phase, SessionPhase::Active | SessionPhase::Paused) {
                    self.end_session();
                }
            }
            SessionCommand::PauseSpawning => self.director.pause(),
            SessionCommand::ResumeSpawning => self.director.resume(),
            SessionCommand::SpawnZombies { count } => {
                if self.phase != SessionPhase::Active {
                    log::warn!("manual spawn ignored, session is {:?}", self.phase);
                    return;
                }
                let mut arena = Arena::new(&mut self.world, self.template);
                let spawned = self.director.spawn_manual(count, &mut arena, &mut self.rng);
                log::info!("manually spawned {}/{count} zombies", spawned.len());
            }
            SessionCommand::MovePlayer { position } => {
                match self
                    .player
                    .and_then(|player| self.world.get::<&mut Position>(player).ok())
                {
                    Some(mut pos) => pos.0 = position,
                    None => log::warn!("move ignored, no player in the registry"),
                }
            }
            SessionCommand::KillZombie { handle } => self.kill_zombie(handle),
        }
    }

    fn kill_zombie(&mut self, handle: EntityHandle) {
        let Some(entity) = arena::from_handle(handle) else {
            log::warn!("invalid zombie handle {}", handle.0);
            return;
        };
        if self.world.get::<&Zombie>(entity).is_err() {
            log::debug!("kill ignored, {} is not a live zombie", handle.0);
            return;
        }
        let _ = self.world.despawn(entity);
        self.score = self.score.saturating_add(self.score_per_kill);
    }

    /// Stop spawning, fix the summary, then clear the registry.
    fn end_session(&mut self) {
        self.director.game_over();
        let summary = self.live_summary();
        self.final_summary = Some(summary);
        self.phase = SessionPhase::GameOver;

        let cleared = world_setup::despawn_zombies(&mut self.world, &mut self.despawn_buffer);
        if let Some(player) = self.player.take() {
            if self.world.get::<&Player>(player).is_ok() {
                let _ = self.world.despawn(player);
            }
        }
        log::info!(
            "game over: wave {}, {} kills, {:.1}s, score {} ({cleared} zombies cleared)",
            summary.wave,
            summary.kills,
            summary.survival_secs,
            summary.score
        );
        self.telemetry.push(TelemetryEvent::GameOver { summary });
    }

    fn live_summary(&self) -> SessionSummary {
        SessionSummary {
            wave: self.director.current_wave(),
            kills: systems::snapshot::kills(&self.world, &self.director),
            survival_secs: self.clock.elapsed_secs,
            score: self.score,
        }
    }

    fn stamp_waves(&mut self, requests: &[SpawnRequest<Entity>]) {
        for request in requests {
            let Some(entity) = request.handle else {
                continue;
            };
            if let Ok(mut zombie) = self.world.get::<&mut Zombie>(entity) {
                zombie.wave = request.wave;
            }
        }
    }

    /// Compare against the last pushed values and emit what changed.
    fn emit_changes(&mut self) {
        // HUD freezes at game over; the GameOver event carries the final values.
        if self.phase != SessionPhase::GameOver {
            let hud =
                systems::snapshot::build_hud(&self.world, &self.director, &self.clock, self.score);
            systems::telemetry::diff_hud(&self.hud, &hud, &mut self.telemetry);
            self.hud = hud;
        }

        let phase = self.director.phase();
        systems::telemetry::diff_phase(self.spawner_phase, phase, &mut self.telemetry);
        self.spawner_phase = phase;
    }
}
