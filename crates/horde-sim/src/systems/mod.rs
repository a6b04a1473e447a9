//! Read-only passes over the registry run after each tick.

pub mod snapshot;
pub mod telemetry;
