//! Lifetime statistics kept across sessions.

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::store::{SnapshotStore, StoreError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LifetimeStats {
    pub highest_wave: u32,
    pub total_kills: u32,
    pub longest_survival_secs: f32,
}

impl LifetimeStats {
    /// Fold one finished run in. Returns true if a personal best was set.
    pub fn record_session(&mut self, wave: u32, kills: u32, survival_secs: f32) -> bool {
        let mut best = false;
        if wave > self.highest_wave {
            self.highest_wave = wave;
            best = true;
        }
        if survival_secs > self.longest_survival_secs {
            self.longest_survival_secs = survival_secs;
            best = true;
        }
        self.total_kills = self.total_kills.saturating_add(kills);
        best
    }
}

/// Load stats. Missing or unreadable state starts from zero.
pub fn load_stats<S: SnapshotStore>(store: &S) -> LifetimeStats {
    let bytes = match store.read_snapshot() {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            log::info!("no lifetime stats found, starting fresh");
            return LifetimeStats::default();
        }
        Err(e) => {
            log::warn!("failed to read lifetime stats: {e}");
            return LifetimeStats::default();
        }
    };
    match codec::decode_stats(&bytes) {
        Ok(stats) => stats,
        Err(e) => {
            log::warn!("lifetime stats are corrupt, starting fresh: {e}");
            LifetimeStats::default()
        }
    }
}

pub fn save_stats<S: SnapshotStore>(store: &mut S, stats: &LifetimeStats) -> Result<(), StoreError> {
    let bytes = codec::encode_stats(stats)?;
    store.write_snapshot(&bytes)
}
