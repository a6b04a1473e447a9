//! Spawn director: wave timing, difficulty progression and placement.
//!
//! The wave loop is an explicit state machine advanced by `try_spawn_wave(dt)`:
//!
//! ```text
//! Idle ──start──▶ Delaying ──delay elapsed──▶ Spawning ◀──▶ Paused
//!   │                                              any ──▶ GameOver
//!   └──missing collaborator──▶ Disabled
//! ```
//!
//! Inside `Spawning` each iteration either defers on the population cap
//! (fixed backoff, re-check) or fires a wave and waits the interval that was
//! current at firing time. A pause request is honoured at the top of the next
//! iteration, so a wait already running completes first.

use glam::Vec2;
use rand::Rng;

use horde_core::config::SpawnerConfig;
use horde_core::constants::{CAPACITY_RECHECK_SECS, MAX_SPAWN_LOOP_STEPS};
use horde_core::enums::{SpawnerPhase, WaitKind};
use horde_core::error::ConfigError;

use crate::difficulty::DifficultyCurve;
use crate::host::SpawnHost;
use crate::sampling::{random_spawn_position, PlacementParams};
use crate::wait::ResumableWait;

/// One placement result and what the factory made of it.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnRequest<H> {
    pub position: Vec2,
    /// False when placement ran out of attempts.
    pub accepted: bool,
    /// Wave that produced the request; 0 for manual spawns.
    pub wave: u32,
    /// `None` if the factory failed to create the entity.
    pub handle: Option<H>,
}

/// Difficulty tier change reported by `tick`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyChange {
    pub level: u32,
    pub zombies_per_wave: u32,
    pub spawn_interval: f32,
}

/// Decides when and where hostiles are created.
#[derive(Debug, Clone)]
pub struct SpawnDirector {
    config: SpawnerConfig,
    curve: DifficultyCurve,
    placement: PlacementParams,

    phase: SpawnerPhase,
    /// Cooperative stop flag, observed at the loop top.
    stop_requested: bool,
    wait: Option<ResumableWait>,
    /// Whether the last population check found the cap reached.
    capped: bool,

    game_time: f32,
    current_wave: u32,
    total_spawned: u32,
    difficulty_level: u32,
    zombies_per_wave: u32,
    spawn_interval: f32,
}

impl SpawnDirector {
    /// Build a director. The configuration is validated once here.
    pub fn new(config: SpawnerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let curve = DifficultyCurve::from_config(&config);
        let placement = PlacementParams::from_config(&config);
        Ok(Self {
            zombies_per_wave: curve.zombies_per_wave(0),
            spawn_interval: curve.spawn_interval(0),
            config,
            curve,
            placement,
            phase: SpawnerPhase::Idle,
            stop_requested: false,
            wait: None,
            capped: false,
            game_time: 0.0,
            current_wave: 0,
            total_spawned: 0,
            difficulty_level: 0,
        })
    }

    /// Check collaborators and begin the initial delay.
    ///
    /// Without a reference point or a usable factory the director is disabled
    /// for the rest of its lifetime. Returns whether spawning was started.
    pub fn start<H: SpawnHost>(&mut self, host: &H) -> bool {
        if self.phase != SpawnerPhase::Idle {
            log::warn!("spawn director already started (phase {:?})", self.phase);
            return false;
        }
        if host.reference_position().is_none() {
            log::error!("spawn director: no reference point (player) available, disabling");
            self.phase = SpawnerPhase::Disabled;
            return false;
        }
        if !host.can_create() {
            log::error!("spawn director: entity factory has no zombie template, disabling");
            self.phase = SpawnerPhase::Disabled;
            return false;
        }
        self.begin_delay();
        log::info!(
            "spawn director started, first wave in {:.1}s",
            self.config.initial_spawn_delay
        );
        true
    }

    /// Advance game time and recompute the difficulty tier.
    ///
    /// Returns the new clamped quantities when the tier changed.
    pub fn tick(&mut self, dt: f32) -> Option<DifficultyChange> {
        if matches!(
            self.phase,
            SpawnerPhase::Idle | SpawnerPhase::GameOver | SpawnerPhase::Disabled
        ) {
            return None;
        }
        if dt.is_finite() && dt > 0.0 {
            self.game_time += dt;
        }
        if !self.config.enable_difficulty_scaling {
            return None;
        }

        let level = self.curve.level_at(self.game_time);
        if level == self.difficulty_level {
            return None;
        }
        self.difficulty_level = level;

        let zombies_per_wave = self.curve.zombies_per_wave(level);
        if zombies_per_wave != self.zombies_per_wave {
            log::info!("difficulty increased, zombies per wave: {zombies_per_wave}");
        }
        self.zombies_per_wave = zombies_per_wave;

        let spawn_interval = self.curve.spawn_interval(level);
        if spawn_interval != self.spawn_interval {
            log::info!("spawn interval decreased to {spawn_interval:.1}s");
        }
        self.spawn_interval = spawn_interval;

        Some(DifficultyChange {
            level,
            zombies_per_wave,
            spawn_interval,
        })
    }

    /// Advance the wave loop by `dt` seconds of spawning time.
    ///
    /// Fires every wave whose wait completes within `dt` and returns all
    /// requests produced, or `None` if nothing spawned. Work per call is
    /// bounded by `MAX_SPAWN_LOOP_STEPS`; a non-finite `dt` is ignored.
    pub fn try_spawn_wave<H, R>(
        &mut self,
        dt: f32,
        host: &mut H,
        rng: &mut R,
    ) -> Option<Vec<SpawnRequest<H::Handle>>>
    where
        H: SpawnHost,
        R: Rng + ?Sized,
    {
        if !matches!(self.phase, SpawnerPhase::Delaying | SpawnerPhase::Spawning) {
            return None;
        }

        if !dt.is_finite() {
            log::warn!("spawn loop ignored non-finite dt {dt}");
            return None;
        }

        let mut budget = dt.max(0.0);
        let mut requests = Vec::new();
        let mut steps = 0;

        loop {
            if steps == MAX_SPAWN_LOOP_STEPS {
                log::warn!("spawn loop fell behind, dropping {budget:.2}s of catch-up");
                break;
            }
            steps += 1;
            match self.wait.as_mut() {
                Some(wait) => {
                    let Some(leftover) = wait.advance(budget) else {
                        break;
                    };
                    budget = leftover;
                    let kind = wait.kind;
                    self.wait = None;
                    self.finish_wait(kind);
                }
                None => {
                    if self.phase != SpawnerPhase::Spawning {
                        break;
                    }
                    self.run_iteration(host, rng, &mut requests);
                }
            }
        }

        (!requests.is_empty()).then_some(requests)
    }

    /// Spawn `count` hostiles immediately, outside the wave loop.
    pub fn spawn_manual<H, R>(
        &mut self,
        count: u32,
        host: &mut H,
        rng: &mut R,
    ) -> Vec<SpawnRequest<H::Handle>>
    where
        H: SpawnHost,
        R: Rng + ?Sized,
    {
        if matches!(self.phase, SpawnerPhase::Disabled | SpawnerPhase::GameOver) {
            log::warn!("manual spawn ignored in phase {:?}", self.phase);
            return Vec::new();
        }
        (0..count)
            .filter_map(|_| self.spawn_one(host, rng, 0))
            .collect()
    }

    /// Request the loop to stop. The running wait completes first.
    ///
    /// A request made during the initial delay is kept: the delay runs out
    /// and the director goes straight to `Paused` without firing a wave.
    pub fn pause(&mut self) {
        if matches!(self.phase, SpawnerPhase::Delaying | SpawnerPhase::Spawning)
            && !self.stop_requested
        {
            self.stop_requested = true;
            log::info!("spawning paused");
        }
    }

    /// Restart the loop from its initial delay. Counters are kept.
    pub fn resume(&mut self) {
        let restart = match self.phase {
            SpawnerPhase::Paused => true,
            SpawnerPhase::Delaying | SpawnerPhase::Spawning => self.stop_requested,
            _ => false,
        };
        if restart {
            self.begin_delay();
            log::info!("spawning resumed");
        }
    }

    /// Stop for good. Game time freezes and no further waves fire.
    pub fn game_over(&mut self) {
        if matches!(self.phase, SpawnerPhase::Disabled | SpawnerPhase::GameOver) {
            return;
        }
        self.phase = SpawnerPhase::GameOver;
        self.wait = None;
        self.stop_requested = false;
        log::info!(
            "spawning stopped at wave {} after {:.1}s, {} spawned",
            self.current_wave,
            self.game_time,
            self.total_spawned
        );
    }

    // --- Queries ---

    pub fn phase(&self) -> SpawnerPhase {
        self.phase
    }

    pub fn is_spawning(&self) -> bool {
        self.phase == SpawnerPhase::Spawning && !self.stop_requested
    }

    pub fn game_time(&self) -> f32 {
        self.game_time
    }

    pub fn current_wave(&self) -> u32 {
        self.current_wave
    }

    pub fn total_spawned(&self) -> u32 {
        self.total_spawned
    }

    pub fn difficulty_level(&self) -> u32 {
        self.difficulty_level
    }

    pub fn zombies_per_wave(&self) -> u32 {
        self.zombies_per_wave
    }

    pub fn spawn_interval(&self) -> f32 {
        self.spawn_interval
    }

    /// The wait the loop is currently in, if any.
    pub fn pending_wait(&self) -> Option<&ResumableWait> {
        self.wait.as_ref()
    }

    pub fn config(&self) -> &SpawnerConfig {
        &self.config
    }

    // --- Loop internals ---

    fn begin_delay(&mut self) {
        self.phase = SpawnerPhase::Delaying;
        self.stop_requested = false;
        self.wait = Some(ResumableWait::new(
            WaitKind::InitialDelay,
            self.config.initial_spawn_delay,
        ));
    }

    fn enter_paused(&mut self) {
        self.phase = SpawnerPhase::Paused;
        self.stop_requested = false;
        self.wait = None;
    }

    fn finish_wait(&mut self, kind: WaitKind) {
        if kind == WaitKind::InitialDelay {
            if self.stop_requested {
                self.enter_paused();
            } else {
                self.phase = SpawnerPhase::Spawning;
                log::info!("starting endless spawn");
            }
        }
    }

    /// One pass of the loop body. Always leaves a wait pending or exits.
    fn run_iteration<H, R>(
        &mut self,
        host: &mut H,
        rng: &mut R,
        requests: &mut Vec<SpawnRequest<H::Handle>>,
    ) where
        H: SpawnHost,
        R: Rng + ?Sized,
    {
        if self.stop_requested {
            self.enter_paused();
            return;
        }

        if !self.can_spawn_more(host) {
            self.wait = Some(ResumableWait::new(
                WaitKind::CapacityBackoff,
                CAPACITY_RECHECK_SECS,
            ));
            return;
        }

        self.current_wave += 1;
        let wave = self.current_wave;
        log::info!(
            "spawning wave {wave} ({} zombies)",
            self.zombies_per_wave
        );
        for _ in 0..self.zombies_per_wave {
            if let Some(request) = self.spawn_one(host, rng, wave) {
                requests.push(request);
            }
        }

        // Latched now; a tier change during the wait does not shorten it.
        self.wait = Some(ResumableWait::new(
            WaitKind::WaveInterval,
            self.spawn_interval,
        ));
    }

    fn can_spawn_more<H: SpawnHost>(&mut self, host: &H) -> bool {
        if !self.config.limit_active_zombies {
            return true;
        }
        let active = host.count_living(&self.config.enemy_tag);
        let max = self.config.max_active_zombies as usize;
        if active >= max {
            if !self.capped {
                log::warn!("max zombies reached ({active}/{max}), waiting");
            } else {
                log::debug!("still capped ({active}/{max})");
            }
            self.capped = true;
            return false;
        }
        self.capped = false;
        true
    }

    fn spawn_one<H, R>(&mut self, host: &mut H, rng: &mut R, wave: u32) -> Option<SpawnRequest<H::Handle>>
    where
        H: SpawnHost,
        R: Rng + ?Sized,
    {
        let Some(reference) = host.reference_position() else {
            log::warn!("spawn skipped, reference point is gone");
            return None;
        };

        let placement = random_spawn_position(rng, reference, &self.placement);
        let handle = host.create(placement.position);
        if handle.is_some() {
            self.total_spawned += 1;
            log::debug!(
                "zombie #{} spawned at ({:.2}, {:.2})",
                self.total_spawned,
                placement.position.x,
                placement.position.y
            );
        } else {
            log::warn!("entity factory failed to create a zombie");
        }

        Some(SpawnRequest {
            position: placement.position,
            accepted: placement.accepted,
            wave,
            handle,
        })
    }
}
