//! Score record for one finished run.

use serde::{Deserialize, Serialize};

use horde_core::constants::{DUPLICATE_SURVIVAL_WINDOW_SECS, TIMESTAMP_FORMAT};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub score: u32,
    pub kills: u32,
    pub survival_secs: f32,
    pub wave: u32,
    /// Local wall-clock time of admission, free text once stored.
    pub timestamp: String,
}

impl ScoreRecord {
    pub fn new(
        name: impl Into<String>,
        score: u32,
        kills: u32,
        survival_secs: f32,
        wave: u32,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            score,
            kills,
            survival_secs,
            wave,
            timestamp: timestamp.into(),
        }
    }

    /// Same run submitted twice: identical name, score and kills, survival
    /// within one second.
    pub fn is_same_run(&self, name: &str, score: u32, kills: u32, survival_secs: f32) -> bool {
        self.name == name
            && self.score == score
            && self.kills == kills
            && (self.survival_secs - survival_secs).abs() < DUPLICATE_SURVIVAL_WINDOW_SECS
    }
}

/// Current local time in the record timestamp format.
pub fn now_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}
