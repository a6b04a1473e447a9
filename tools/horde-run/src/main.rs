//! horde-run: headless HORDE driver and leaderboard tool.
//!
//! Usage:
//!   horde-run simulate --seed 7 --secs 120 --name ana --kill-every 1.5
//!   horde-run leaderboard --top 7
//!   horde-run stats
//!   horde-run clear

mod config;

use std::path::PathBuf;
use std::process;

use anyhow::{bail, Result};

use horde_core::commands::SessionCommand;
use horde_core::constants::DT;
use horde_core::events::TelemetryEvent;
use horde_core::types::format_mm_ss;
use horde_ledger::stats::{load_stats, save_stats};
use horde_ledger::{Admission, FileStore, LifetimeStats, RankedLedger};
use horde_sim::{results, SessionEngine};

use config::RunConfig;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "simulate" => cmd_simulate(&args[2..]),
        "leaderboard" => cmd_leaderboard(&args[2..]),
        "stats" => cmd_stats(&args[2..]),
        "clear" => cmd_clear(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!(
        "horde-run: HORDE headless session runner\n\
         \n\
         Commands:\n\
         \n\
         simulate     Play a seeded session to game over and record the score\n\
         \n\
           --seed <N>          RNG seed (default: from config)\n\
           --secs <S>          Session length in seconds (default: 120)\n\
           --name <NAME>       Leaderboard name (default: bot)\n\
           --kill-every <S>    Kill the oldest zombie every S seconds (default: 1.5)\n\
         \n\
         leaderboard  Print the leaderboard\n\
         \n\
           --top <N>           Entries to show (default: display limit)\n\
         \n\
         stats        Print lifetime statistics\n\
         clear        Delete the leaderboard and lifetime statistics\n\
         \n\
         Common options:\n\
         \n\
           --config <path>     JSON run config (session, ledger, data_dir)\n\
           --data-dir <path>   Override the data directory\n"
    );
}

fn parse_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn parse_number<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> Result<T> {
    match parse_value(args, flag) {
        Some(raw) => match raw.parse() {
            Ok(value) => Ok(value),
            Err(_) => bail!("invalid value for {flag}: {raw}"),
        },
        None => Ok(default),
    }
}

fn load_config(args: &[String]) -> Result<RunConfig> {
    let mut config = match parse_value(args, "--config") {
        Some(path) => RunConfig::load(&PathBuf::from(path))?,
        None => RunConfig::default(),
    };
    if let Some(dir) = parse_value(args, "--data-dir") {
        config.data_dir = PathBuf::from(dir);
    }
    Ok(config)
}

fn open_ledger(config: &RunConfig) -> RankedLedger<FileStore> {
    RankedLedger::open(
        FileStore::new(config.leaderboard_path()),
        config.ledger.clone(),
    )
}

// --- Simulate command ---

fn cmd_simulate(args: &[String]) -> Result<()> {
    let mut config = load_config(args)?;
    config.session.seed = parse_number(args, "--seed", config.session.seed)?;
    let secs: f32 = parse_number(args, "--secs", 120.0)?;
    let kill_every: f32 = parse_number(args, "--kill-every", 1.5)?;
    let name = parse_value(args, "--name").unwrap_or_else(|| "bot".to_string());
    if !(secs > 0.0) {
        bail!("--secs must be positive");
    }

    let mut engine = SessionEngine::new(config.session.clone())?;
    engine.start();

    let frames = (secs / DT).round() as u64;
    let kill_frames = if kill_every > 0.0 {
        ((kill_every / DT).round() as u64).max(1)
    } else {
        0
    };

    for frame in 1..=frames {
        if kill_frames > 0 && frame % kill_frames == 0 {
            if let Some(&handle) = engine.zombie_handles().first() {
                engine.queue_command(SessionCommand::KillZombie { handle });
            }
        }
        engine.tick(DT);
        report_telemetry(engine.take_telemetry());
    }
    engine.queue_command(SessionCommand::GameOver);
    engine.tick(DT);
    report_telemetry(engine.take_telemetry());

    let summary = engine.summary();
    let mut ledger = open_ledger(&config);
    let mut stats_store = FileStore::new(config.stats_path());
    let outcome = results::commit(&summary, &name, &mut ledger, &mut stats_store);

    println!(
        "{name}: wave {}, {} kills, survived {}, score {}",
        summary.wave,
        summary.kills,
        format_mm_ss(summary.survival_secs),
        summary.score
    );
    match outcome.admission {
        Admission::Admitted { position } => println!("leaderboard position #{position}"),
        Admission::Discarded => println!("score did not make the stored leaderboard"),
        Admission::Duplicate => println!("run already recorded"),
    }
    if outcome.personal_best {
        println!("new personal best");
    }
    Ok(())
}

fn report_telemetry(events: Vec<TelemetryEvent>) {
    for event in events {
        match event {
            TelemetryEvent::WaveChanged { wave } => log::info!("wave {wave}"),
            TelemetryEvent::DifficultyChanged {
                level,
                zombies_per_wave,
                spawn_interval,
            } => log::info!(
                "difficulty {level}: {zombies_per_wave} per wave every {spawn_interval:.1}s"
            ),
            TelemetryEvent::SpawnerPhaseChanged { phase } => log::debug!("spawner {phase:?}"),
            other => log::trace!("{other:?}"),
        }
    }
}

// --- Leaderboard / stats commands ---

fn cmd_leaderboard(args: &[String]) -> Result<()> {
    let config = load_config(args)?;
    let ledger = open_ledger(&config);
    let top = parse_number(args, "--top", config.ledger.display_limit)?;

    if ledger.is_empty() {
        println!("leaderboard is empty");
        return Ok(());
    }
    println!("{:>4}  {:<16} {:>8} {:>6} {:>5} {:>7}  {}", "#", "name", "score", "kills", "wave", "time", "date");
    for (i, entry) in ledger.top(top).iter().enumerate() {
        println!(
            "{:>4}  {:<16} {:>8} {:>6} {:>5} {:>7}  {}",
            i + 1,
            entry.name,
            entry.score,
            entry.kills,
            entry.wave,
            format_mm_ss(entry.survival_secs),
            entry.timestamp
        );
    }
    if ledger.len() > top {
        println!("({} more)", ledger.len() - top);
    }
    Ok(())
}

fn cmd_stats(args: &[String]) -> Result<()> {
    let config = load_config(args)?;
    let stats = load_stats(&FileStore::new(config.stats_path()));
    println!("highest wave:     {}", stats.highest_wave);
    println!("total kills:      {}", stats.total_kills);
    println!("longest survival: {}", format_mm_ss(stats.longest_survival_secs));
    Ok(())
}

fn cmd_clear(args: &[String]) -> Result<()> {
    let config = load_config(args)?;
    let mut ledger = open_ledger(&config);
    let removed = ledger.len();
    ledger.clear();

    let mut stats_store = FileStore::new(config.stats_path());
    save_stats(&mut stats_store, &LifetimeStats::default())?;
    println!("cleared {removed} leaderboard entries and lifetime stats");
    Ok(())
}
