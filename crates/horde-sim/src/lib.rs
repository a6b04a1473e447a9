//! Session engine for HORDE.
//!
//! Owns the hecs world as the entity registry, drives the spawn director at
//! whatever rate the host ticks it, and produces `SessionSnapshot`s plus
//! change-driven telemetry for presentation layers.

pub mod arena;
pub mod engine;
pub mod results;
pub mod systems;
pub mod world_setup;

pub use engine::SessionEngine;
pub use horde_core as core;
