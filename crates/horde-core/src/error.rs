//! Error types shared across crates.

use thiserror::Error;

/// Rejected configuration. Raised once at construction, never mid-session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("spawn distance range is invalid: min {min}, max {max} (need finite 0 <= min <= max)")]
    SpawnDistance { min: f32, max: f32 },
    #[error("restricted area is inverted on the {axis} axis")]
    RestrictedArea { axis: char },
    #[error("max spawn attempts must be at least 1")]
    ZeroAttempts,
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("base zombies per wave ({base}) exceeds max zombies per wave ({max})")]
    WaveSize { base: u32, max: u32 },
    #[error("base spawn interval ({base}s) is below min spawn interval ({min}s)")]
    IntervalBounds { base: f32, min: f32 },
    #[error("enemy tag must not be empty")]
    EmptyTag,
}
