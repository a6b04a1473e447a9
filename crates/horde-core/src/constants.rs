//! Gameplay constants and tuning defaults.

/// Nominal host frame rate (Hz). The core accepts any `dt`; this is only
/// used by headless drivers.
pub const TICK_RATE: u32 = 60;

/// Seconds per frame at the nominal rate.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Tags ---

/// Tag carried by every hostile entity; used by population queries.
pub const ENEMY_TAG: &str = "Enemy";

/// Tag carried by the player entity.
pub const PLAYER_TAG: &str = "Player";

// --- Spawn distance ---

/// Minimum spawn distance from the player (world units).
pub const MIN_SPAWN_DISTANCE: f32 = 10.0;

/// Maximum spawn distance from the player (world units).
pub const MAX_SPAWN_DISTANCE: f32 = 20.0;

// --- Restricted area (keep-clear rectangle around map center) ---

pub const RESTRICTED_MIN_X: f32 = -20.0;
pub const RESTRICTED_MAX_X: f32 = 20.0;
pub const RESTRICTED_MIN_Y: f32 = -12.0;
pub const RESTRICTED_MAX_Y: f32 = 12.0;

/// Placement attempts before falling back to the last candidate.
pub const MAX_SPAWN_ATTEMPTS: u32 = 20;

// --- Spawn timing ---

/// Delay before the first wave, and after every resume (seconds).
pub const INITIAL_SPAWN_DELAY: f32 = 2.0;

/// Seconds between waves at difficulty 0.
pub const BASE_SPAWN_INTERVAL: f32 = 3.0;

/// Zombies per wave at difficulty 0.
pub const BASE_ZOMBIES_PER_WAVE: u32 = 1;

// --- Difficulty scaling ---

/// Seconds of game time per difficulty tier.
pub const DIFFICULTY_INCREASE_INTERVAL: f32 = 30.0;

/// Upper bound on zombies per wave.
pub const MAX_ZOMBIES_PER_WAVE: u32 = 10;

/// Lower bound on the spawn interval (seconds).
pub const MIN_SPAWN_INTERVAL: f32 = 1.0;

/// Interval reduction per difficulty tier (seconds).
pub const SPAWN_INTERVAL_STEP: f32 = 0.2;

// --- Population cap ---

/// Live hostiles allowed before waves are deferred.
pub const MAX_ACTIVE_ZOMBIES: u32 = 50;

/// Backoff between population re-checks while capped (seconds).
pub const CAPACITY_RECHECK_SECS: f32 = 1.0;

/// Wait completions plus loop passes allowed in one `try_spawn_wave` call.
/// Catch-up time beyond this is dropped.
pub const MAX_SPAWN_LOOP_STEPS: u32 = 64;

// --- Zombies ---

pub const ZOMBIE_HEALTH: f32 = 100.0;
pub const ZOMBIE_SPEED: f32 = 2.0;

/// Score awarded per confirmed kill.
pub const SCORE_PER_KILL: u32 = 10;

// --- Leaderboard ---

/// Entries shown in the leaderboard view.
pub const DISPLAY_LIMIT: usize = 7;

/// Safety cap when unlimited storage is turned off.
pub const STORAGE_LIMIT: usize = 100;

/// Two submissions closer than this in survival time are the same run.
pub const DUPLICATE_SURVIVAL_WINDOW_SECS: f32 = 1.0;

/// Current ledger snapshot schema version.
pub const LEDGER_SNAPSHOT_VERSION: u32 = 1;

/// Local wall-clock format stamped on score records.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";
