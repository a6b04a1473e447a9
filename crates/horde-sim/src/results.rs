//! Game-over flow: commit a finished run to the leaderboard and lifetime stats.

use horde_core::state::SessionSummary;
use horde_ledger::stats::{load_stats, save_stats};
use horde_ledger::{Admission, LifetimeStats, RankedLedger, SnapshotStore};

/// What happened to a committed run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommitOutcome {
    pub admission: Admission,
    /// Lifetime stats after folding the run in.
    pub stats: LifetimeStats,
    /// True if the run set a new best wave or survival time.
    pub personal_best: bool,
    /// False when the stats could not be written. True when nothing needed
    /// writing.
    pub stats_saved: bool,
}

/// Admit `summary` under `name` and fold it into the lifetime stats.
///
/// A run the ledger rejects as a duplicate is not folded in again.
///
/// Persistence failures are logged; the outcome still reflects the
/// in-memory result.
pub fn commit<L, S>(
    summary: &SessionSummary,
    name: &str,
    ledger: &mut RankedLedger<L>,
    stats_store: &mut S,
) -> CommitOutcome
where
    L: SnapshotStore,
    S: SnapshotStore,
{
    let admission = ledger.admit(
        name,
        summary.score,
        summary.kills,
        summary.survival_secs,
        summary.wave,
    );

    let mut stats = load_stats(stats_store);
    if admission == Admission::Duplicate {
        log::warn!("run already committed, lifetime stats left unchanged");
        return CommitOutcome {
            admission,
            stats,
            personal_best: false,
            stats_saved: true,
        };
    }

    let personal_best = stats.record_session(summary.wave, summary.kills, summary.survival_secs);
    let stats_saved = match save_stats(stats_store, &stats) {
        Ok(()) => true,
        Err(e) => {
            log::error!("failed to save lifetime stats: {e}");
            false
        }
    };

    if personal_best {
        log::info!(
            "new personal best: wave {}, {:.1}s",
            stats.highest_wave,
            stats.longest_survival_secs
        );
    }

    CommitOutcome {
        admission,
        stats,
        personal_best,
        stats_saved,
    }
}
