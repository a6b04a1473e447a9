#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::SessionCommand;
    use crate::config::{LedgerConfig, SessionConfig, SpawnerConfig};
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::events::TelemetryEvent;
    use crate::state::{SessionSnapshot, SessionSummary};
    use crate::types::{format_mm_ss, EntityHandle, Rect, SimClock};

    #[test]
    fn test_spawner_phase_serde() {
        let variants = vec![
            SpawnerPhase::Idle,
            SpawnerPhase::Delaying,
            SpawnerPhase::Spawning,
            SpawnerPhase::Paused,
            SpawnerPhase::GameOver,
            SpawnerPhase::Disabled,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: SpawnerPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify SessionCommand round-trips through serde (tagged union).
    #[test]
    fn test_session_command_serde() {
        let commands = vec![
            SessionCommand::Pause,
            SessionCommand::Resume,
            SessionCommand::GameOver,
            SessionCommand::PauseSpawning,
            SessionCommand::ResumeSpawning,
            SessionCommand::SpawnZombies { count: 3 },
            SessionCommand::MovePlayer {
                position: Vec2::new(4.0, -2.5),
            },
            SessionCommand::KillZombie {
                handle: EntityHandle(77),
            },
        ];
        for cmd in commands {
            let json = serde_json::to_string(&cmd).unwrap();
            let back: SessionCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(cmd, back);
        }
    }

    #[test]
    fn test_command_tag_shape() {
        let json = serde_json::to_string(&SessionCommand::SpawnZombies { count: 2 }).unwrap();
        assert!(json.contains("\"type\":\"SpawnZombies\""));
        let parsed: SessionCommand = serde_json::from_str(r#"{"type":"PauseSpawning"}"#).unwrap();
        assert_eq!(parsed, SessionCommand::PauseSpawning);
    }

    #[test]
    fn test_telemetry_serde() {
        let events = vec![
            TelemetryEvent::WaveChanged { wave: 4 },
            TelemetryEvent::DifficultyChanged {
                level: 3,
                zombies_per_wave: 4,
                spawn_interval: 2.4,
            },
            TelemetryEvent::GameOver {
                summary: SessionSummary {
                    wave: 9,
                    kills: 40,
                    survival_secs: 181.5,
                    score: 400,
                },
            },
        ];
        for e in events {
            let json = serde_json::to_string(&e).unwrap();
            let back: TelemetryEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(e, back);
        }
    }

    #[test]
    fn test_snapshot_serializes() {
        let snap = SessionSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"phase\":\"NotStarted\""));
    }

    // ---- Config ----

    #[test]
    fn test_default_spawner_config_matches_constants() {
        let cfg = SpawnerConfig::default();
        assert_eq!(cfg.min_spawn_distance, MIN_SPAWN_DISTANCE);
        assert_eq!(cfg.max_spawn_distance, MAX_SPAWN_DISTANCE);
        assert_eq!(cfg.max_spawn_attempts, MAX_SPAWN_ATTEMPTS);
        assert_eq!(cfg.restricted_area.min, Vec2::new(-20.0, -12.0));
        assert_eq!(cfg.restricted_area.max, Vec2::new(20.0, 12.0));
        assert_eq!(cfg.enemy_tag, ENEMY_TAG);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let cfg: SpawnerConfig =
            serde_json::from_str(r#"{"max_zombies_per_wave": 4, "limit_active_zombies": false}"#)
                .unwrap();
        assert_eq!(cfg.max_zombies_per_wave, 4);
        assert!(!cfg.limit_active_zombies);
        assert_eq!(cfg.base_spawn_interval, BASE_SPAWN_INTERVAL);

        let ledger: LedgerConfig = serde_json::from_str(r#"{"unlimited_storage": false}"#).unwrap();
        assert_eq!(ledger.storage_limit, STORAGE_LIMIT);
        assert_eq!(ledger.display_limit, DISPLAY_LIMIT);

        let session: SessionConfig = serde_json::from_str(r#"{"seed": 9}"#).unwrap();
        assert_eq!(session.seed, 9);
        assert!(session.zombie.is_some());
    }

    #[test]
    fn test_config_rejects_inverted_distance() {
        let cfg = SpawnerConfig {
            min_spawn_distance: 30.0,
            max_spawn_distance: 20.0,
            ..Default::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::SpawnDistance {
                min: 30.0,
                max: 20.0
            })
        );
    }

    #[test]
    fn test_config_rejects_unbounded_distance() {
        let cfg = SpawnerConfig {
            max_spawn_distance: f32::INFINITY,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::SpawnDistance { .. })));

        let cfg = SpawnerConfig {
            min_spawn_distance: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::SpawnDistance { .. })));
    }

    #[test]
    fn test_config_rejects_bad_bounds() {
        let zero_attempts = SpawnerConfig {
            max_spawn_attempts: 0,
            ..Default::default()
        };
        assert_eq!(zero_attempts.validate(), Err(ConfigError::ZeroAttempts));

        let zero_min_interval = SpawnerConfig {
            min_spawn_interval: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            zero_min_interval.validate(),
            Err(ConfigError::NonPositive { name: "min_spawn_interval", .. })
        ));

        let wave_size = SpawnerConfig {
            base_zombies_per_wave: 12,
            ..Default::default()
        };
        assert_eq!(
            wave_size.validate(),
            Err(ConfigError::WaveSize { base: 12, max: 10 })
        );

        let inverted_area = SpawnerConfig {
            restricted_area: Rect::new(5.0, -5.0, -1.0, 1.0),
            ..Default::default()
        };
        assert_eq!(
            inverted_area.validate(),
            Err(ConfigError::RestrictedArea { axis: 'x' })
        );

        let nan_delay = SpawnerConfig {
            initial_spawn_delay: f32::NAN,
            ..Default::default()
        };
        assert!(nan_delay.validate().is_err());
    }

    // ---- Types ----

    #[test]
    fn test_rect_escape_rule() {
        let r = Rect::new(-20.0, 20.0, -12.0, 12.0);
        // Inside on both axes.
        assert!(!r.escapes(Vec2::new(0.0, 0.0)));
        // Border counts as inside.
        assert!(!r.escapes(Vec2::new(20.0, 12.0)));
        // Outside on X only (within the Y band) still escapes.
        assert!(r.escapes(Vec2::new(25.0, 0.0)));
        // Outside on Y only.
        assert!(r.escapes(Vec2::new(0.0, -13.0)));
        assert!(r.contains(Vec2::new(20.0, -12.0)));
    }

    #[test]
    fn test_sim_clock_advance() {
        let mut clock = SimClock::default();
        for _ in 0..90 {
            clock.advance(DT);
        }
        assert_eq!(clock.frame, 90);
        assert!((clock.elapsed_secs - 1.5).abs() < 1e-3);
        assert_eq!(clock.whole_secs(), 1);
    }

    #[test]
    fn test_format_mm_ss() {
        assert_eq!(format_mm_ss(0.0), "00:00");
        assert_eq!(format_mm_ss(59.9), "00:59");
        assert_eq!(format_mm_ss(125.0), "02:05");
        assert_eq!(format_mm_ss(3725.0), "62:05");
        assert_eq!(format_mm_ss(-3.0), "00:00");
    }
}
