//! Versioned snapshot encoding.
//!
//! Ledger: `{"version": 1, "entries": [...]}`.
//! Stats:  `{"version": 1, "stats": {...}}`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use horde_core::constants::LEDGER_SNAPSHOT_VERSION;

use crate::record::ScoreRecord;
use crate::stats::LifetimeStats;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

#[derive(Serialize)]
struct LedgerSnapshotRef<'a> {
    version: u32,
    entries: &'a [ScoreRecord],
}

#[derive(Deserialize)]
struct LedgerSnapshot {
    version: u32,
    entries: Vec<ScoreRecord>,
}

#[derive(Serialize, Deserialize)]
struct StatsSnapshot {
    version: u32,
    stats: LifetimeStats,
}

pub fn encode_entries(entries: &[ScoreRecord]) -> Result<Vec<u8>, CodecError> {
    let snapshot = LedgerSnapshotRef {
        version: LEDGER_SNAPSHOT_VERSION,
        entries,
    };
    Ok(serde_json::to_vec_pretty(&snapshot)?)
}

pub fn decode_entries(bytes: &[u8]) -> Result<Vec<ScoreRecord>, CodecError> {
    let snapshot: LedgerSnapshot = serde_json::from_slice(bytes)?;
    check_version(snapshot.version)?;
    Ok(snapshot.entries)
}

pub fn encode_stats(stats: &LifetimeStats) -> Result<Vec<u8>, CodecError> {
    let snapshot = StatsSnapshot {
        version: LEDGER_SNAPSHOT_VERSION,
        stats: *stats,
    };
    Ok(serde_json::to_vec_pretty(&snapshot)?)
}

pub fn decode_stats(bytes: &[u8]) -> Result<LifetimeStats, CodecError> {
    let snapshot: StatsSnapshot = serde_json::from_slice(bytes)?;
    check_version(snapshot.version)?;
    Ok(snapshot.stats)
}

fn check_version(found: u32) -> Result<(), CodecError> {
    if found == LEDGER_SNAPSHOT_VERSION {
        Ok(())
    } else {
        Err(CodecError::UnsupportedVersion {
            found,
            expected: LEDGER_SNAPSHOT_VERSION,
        })
    }
}
