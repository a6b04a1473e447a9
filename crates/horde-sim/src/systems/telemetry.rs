//! Telemetry system: turns HUD and spawner changes into events.
//!
//! Events are emitted only when a value differs from the last one pushed.

use horde_core::enums::SpawnerPhase;
use horde_core::events::TelemetryEvent;
use horde_core::state::HudView;

/// Push one event per HUD field that changed.
pub fn diff_hud(prev: &HudView, next: &HudView, events: &mut Vec<TelemetryEvent>) {
    if next.wave != prev.wave {
        events.push(TelemetryEvent::WaveChanged { wave: next.wave });
    }
    if next.kills != prev.kills {
        events.push(TelemetryEvent::KillsChanged { kills: next.kills });
    }
    if next.elapsed_secs != prev.elapsed_secs {
        events.push(TelemetryEvent::ElapsedChanged {
            secs: next.elapsed_secs,
        });
    }
    if next.score != prev.score {
        events.push(TelemetryEvent::ScoreChanged { score: next.score });
    }
}

pub fn diff_phase(prev: SpawnerPhase, next: SpawnerPhase, events: &mut Vec<TelemetryEvent>) {
    if next != prev {
        events.push(TelemetryEvent::SpawnerPhaseChanged { phase: next });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_hud_is_silent() {
        let hud = HudView {
            wave: 3,
            kills: 4,
            elapsed_secs: 10,
            score: 40,
        };
        let mut events = Vec::new();
        diff_hud(&hud, &hud, &mut events);
        diff_phase(SpawnerPhase::Spawning, SpawnerPhase::Spawning, &mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn test_each_changed_field_emits_once() {
        let prev = HudView::default();
        let next = HudView {
            wave: 1,
            kills: 0,
            elapsed_secs: 2,
            score: 0,
        };
        let mut events = Vec::new();
        diff_hud(&prev, &next, &mut events);
        assert_eq!(
            events,
            vec![
                TelemetryEvent::WaveChanged { wave: 1 },
                TelemetryEvent::ElapsedChanged { secs: 2 },
            ]
        );
    }
}
