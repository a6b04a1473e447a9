//! Core types and definitions for HORDE.
//!
//! This crate defines the vocabulary shared across all other crates:
//! configs, components, commands, telemetry events, snapshot views and constants.
//! It has no dependency on any frame loop, renderer or storage backend.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

pub use glam::Vec2;

#[cfg(test)]
mod tests;
