//! Ranked ledger, the leaderboard.
//!
//! Entries are kept in rank order (score descending, ties in admission
//! order). Every mutation writes a full snapshot through the store. Write
//! failures are logged and swallowed; the in-memory state stays ahead.

use horde_core::config::LedgerConfig;

use crate::codec;
use crate::record::{now_timestamp, ScoreRecord};
use crate::store::SnapshotStore;

/// Outcome of `admit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Stored at this 1-based position.
    Admitted { position: usize },
    /// Stored, then trimmed straight away by the storage limit.
    Discarded,
    /// Same run already on the board; nothing changed.
    Duplicate,
}

pub struct RankedLedger<S: SnapshotStore> {
    entries: Vec<ScoreRecord>,
    config: LedgerConfig,
    store: S,
    /// False when the last write failed and disk is stale.
    persisted: bool,
}

impl<S: SnapshotStore> RankedLedger<S> {
    /// Hydrate from `store`. Missing or corrupt data starts an empty board.
    pub fn open(store: S, config: LedgerConfig) -> Self {
        let entries = match store.read_snapshot() {
            Ok(Some(bytes)) => match codec::decode_entries(&bytes) {
                Ok(entries) => {
                    log::info!("leaderboard loaded, {} entries", entries.len());
                    entries
                }
                Err(e) => {
                    log::warn!("leaderboard data is corrupt, starting empty: {e}");
                    Vec::new()
                }
            },
            Ok(None) => {
                log::info!("no leaderboard data found, starting empty");
                Vec::new()
            }
            Err(e) => {
                log::warn!("failed to read leaderboard, starting empty: {e}");
                Vec::new()
            }
        };

        let mut ledger = Self {
            entries,
            config,
            store,
            persisted: true,
        };
        ledger.sort();
        ledger
    }

    /// Admit a run stamped with the current local time.
    pub fn admit(
        &mut self,
        name: &str,
        score: u32,
        kills: u32,
        survival_secs: f32,
        wave: u32,
    ) -> Admission {
        self.admit_at(name, score, kills, survival_secs, wave, now_timestamp())
    }

    /// Admit a run with an explicit timestamp.
    pub fn admit_at(
        &mut self,
        name: &str,
        score: u32,
        kills: u32,
        survival_secs: f32,
        wave: u32,
        timestamp: String,
    ) -> Admission {
        let survival_secs = if survival_secs.is_finite() {
            survival_secs
        } else {
            log::warn!("non-finite survival time for {name}, storing 0");
            0.0
        };

        if self
            .entries
            .iter()
            .rev()
            .any(|e| e.is_same_run(name, score, kills, survival_secs))
        {
            log::warn!("duplicate leaderboard entry ignored: {name} - {score}");
            return Admission::Duplicate;
        }

        self.entries.push(ScoreRecord::new(
            name,
            score,
            kills,
            survival_secs,
            wave,
            timestamp,
        ));
        let new_index = self.entries.len() - 1;

        // Stable: the new record lands after existing equal scores.
        let position = self.entries[..new_index]
            .iter()
            .filter(|e| e.score >= score)
            .count()
            + 1;
        self.sort();

        let mut admission = Admission::Admitted { position };
        if !self.config.unlimited_storage && self.entries.len() > self.config.storage_limit {
            self.entries.truncate(self.config.storage_limit);
            log::info!("leaderboard trimmed to {} entries", self.config.storage_limit);
            if position > self.config.storage_limit {
                admission = Admission::Discarded;
            }
        }

        self.persist();
        log::info!(
            "leaderboard entry added: {name} - score {score} ({} total)",
            self.entries.len()
        );
        admission
    }

    /// At most `n` records, best first.
    pub fn top(&self, n: usize) -> Vec<ScoreRecord> {
        self.entries.iter().take(n).cloned().collect()
    }

    /// Every record, best first.
    pub fn all(&self) -> &[ScoreRecord] {
        &self.entries
    }

    /// 1-based rank `score` would take. Ties rank with the existing entry.
    pub fn rank(&self, score: u32) -> usize {
        self.entries
            .iter()
            .position(|e| score >= e.score)
            .map_or(self.entries.len() + 1, |i| i + 1)
    }

    /// Whether `score` would show in the top `top_count`. Display only;
    /// admission is never gated on this.
    pub fn is_top_score(&self, score: u32, top_count: usize) -> bool {
        if self.entries.len() < top_count {
            return true;
        }
        match top_count.checked_sub(1).and_then(|i| self.entries.get(i)) {
            Some(lowest) => score > lowest.score,
            None => false,
        }
    }

    /// `is_top_score` against the configured display limit.
    pub fn is_high_score(&self, score: u32) -> bool {
        self.is_top_score(score, self.config.display_limit)
    }

    /// Remove the record at a 0-based rank index.
    pub fn delete_at(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            log::warn!(
                "invalid leaderboard index {index}, {} entries",
                self.entries.len()
            );
            return false;
        }
        let removed = self.entries.remove(index);
        self.persist();
        log::info!(
            "deleted entry #{}: {} - score {}",
            index + 1,
            removed.name,
            removed.score
        );
        true
    }

    /// Remove the first record matching `name` and `score`.
    pub fn delete_matching(&mut self, name: &str, score: u32) -> bool {
        let Some(index) = self
            .entries
            .iter()
            .position(|e| e.name == name && e.score == score)
        else {
            log::warn!("leaderboard entry not found: {name} - {score}");
            return false;
        };
        self.entries.remove(index);
        self.persist();
        log::info!("deleted entry: {name} - score {score}");
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
        log::info!("leaderboard cleared");
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// False when the last write failed.
    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn sort(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
    }

    fn persist(&mut self) {
        let result = codec::encode_entries(&self.entries)
            .map_err(Into::into)
            .and_then(|bytes| self.store.write_snapshot(&bytes));
        match result {
            Ok(()) => {
                self.persisted = true;
                log::debug!("leaderboard saved, {} entries", self.entries.len());
            }
            Err(e) => {
                self.persisted = false;
                log::error!("failed to save leaderboard: {e}");
            }
        }
    }
}
