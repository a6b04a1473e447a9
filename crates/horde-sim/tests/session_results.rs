//! End-to-end: play a seeded session to game over and commit the result.

use std::fs;

use horde_core::commands::SessionCommand;
use horde_core::config::{LedgerConfig, SessionConfig};
use horde_core::constants::DT;
use horde_ledger::stats::load_stats;
use horde_ledger::{Admission, FileStore, MemoryStore, RankedLedger};
use horde_sim::results;
use horde_sim::SessionEngine;

/// Play `secs` seconds, killing the oldest zombie every `kill_every` frames.
fn play(seed: u64, secs: f32, kill_every: u32) -> SessionEngine {
    let mut engine = SessionEngine::new(SessionConfig {
        seed,
        ..Default::default()
    })
    .unwrap();
    assert!(engine.start());

    let frames = (secs / DT).round() as u32;
    for frame in 1..=frames {
        if frame % kill_every == 0 {
            if let Some(&handle) = engine.zombie_handles().first() {
                engine.queue_command(SessionCommand::KillZombie { handle });
            }
        }
        engine.tick(DT);
    }
    engine.queue_command(SessionCommand::GameOver);
    engine.tick(DT);
    engine
}

#[test]
fn test_commit_admits_and_updates_stats() {
    let engine = play(7, 40.0, 90);
    let summary = engine.summary();
    assert!(summary.kills > 0);
    assert_eq!(summary.score, summary.kills * 10);
    assert!(summary.wave >= 10);

    let mut ledger = RankedLedger::open(MemoryStore::new(), LedgerConfig::default());
    let mut stats_store = MemoryStore::new();

    let outcome = results::commit(&summary, "ana", &mut ledger, &mut stats_store);
    assert_eq!(outcome.admission, Admission::Admitted { position: 1 });
    assert!(outcome.personal_best);
    assert!(outcome.stats_saved);
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.all()[0].kills, summary.kills);
    assert_eq!(ledger.all()[0].wave, summary.wave);

    let stats = load_stats(&stats_store);
    assert_eq!(stats.highest_wave, summary.wave);
    assert_eq!(stats.total_kills, summary.kills);
}

#[test]
fn test_double_commit_counts_stats_once() {
    let summary = play(7, 20.0, 60).summary();
    assert!(summary.kills > 0);

    let mut ledger = RankedLedger::open(MemoryStore::new(), LedgerConfig::default());
    let mut stats_store = MemoryStore::new();

    let first = results::commit(&summary, "ana", &mut ledger, &mut stats_store);
    let writes = stats_store.write_count();
    let again = results::commit(&summary, "ana", &mut ledger, &mut stats_store);

    assert!(matches!(first.admission, Admission::Admitted { .. }));
    assert_eq!(again.admission, Admission::Duplicate);
    assert!(!again.personal_best);
    assert_eq!(again.stats, first.stats);
    assert_eq!(ledger.len(), 1);
    assert_eq!(stats_store.write_count(), writes);
    assert_eq!(load_stats(&stats_store).total_kills, summary.kills);
}

#[test]
fn test_seeded_sessions_commit_identically() {
    let a = play(99, 20.0, 45).summary();
    let b = play(99, 20.0, 45).summary();
    assert_eq!(a, b);
}

#[test]
fn test_results_survive_restart_on_disk() {
    let dir = std::env::temp_dir().join("horde_test_session_results");
    let _ = fs::remove_dir_all(&dir);
    let board_path = dir.join("leaderboard.json");
    let stats_path = dir.join("stats.json");

    let short = play(1, 10.0, 60).summary();
    let long = play(2, 35.0, 60).summary();
    {
        let mut ledger = RankedLedger::open(FileStore::new(&board_path), LedgerConfig::default());
        let mut stats_store = FileStore::new(&stats_path);
        results::commit(&short, "short", &mut ledger, &mut stats_store);
        results::commit(&long, "long", &mut ledger, &mut stats_store);
    }

    let ledger = RankedLedger::open(FileStore::new(&board_path), LedgerConfig::default());
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.all()[0].name, "long");
    assert_eq!(ledger.rank(long.score + 1), 1);

    let stats = load_stats(&FileStore::new(&stats_path));
    assert_eq!(stats.highest_wave, long.wave);
    assert_eq!(stats.total_kills, short.kills + long.kills);

    let _ = fs::remove_dir_all(&dir);
}
