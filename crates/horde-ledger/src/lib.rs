//! Leaderboard and lifetime statistics for HORDE.
//!
//! A ranked, deduplicated, write-through persisted record store. Storage
//! backends sit behind `SnapshotStore`; the on-disk format is a versioned
//! JSON envelope.

pub mod codec;
pub mod ledger;
pub mod record;
pub mod stats;
pub mod store;

pub use ledger::{Admission, RankedLedger};
pub use record::ScoreRecord;
pub use stats::LifetimeStats;
pub use store::{FileStore, MemoryStore, SnapshotStore, StoreError};
