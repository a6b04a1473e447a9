//! Resumable timed wait, advanced explicitly by frame deltas.

use horde_core::enums::WaitKind;

/// A wait in progress. Runs to completion once started; nothing shortens it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResumableWait {
    pub kind: WaitKind,
    pub duration: f32,
    pub remaining: f32,
}

impl ResumableWait {
    pub fn new(kind: WaitKind, duration: f32) -> Self {
        let duration = duration.max(0.0);
        Self {
            kind,
            duration,
            remaining: duration,
        }
    }

    /// Consume up to `budget` seconds. Returns the unused part of the budget
    /// if the wait completed, `None` if it is still running.
    pub fn advance(&mut self, budget: f32) -> Option<f32> {
        if self.remaining > budget {
            self.remaining -= budget;
            None
        } else {
            let leftover = budget - self.remaining;
            self.remaining = 0.0;
            Some(leftover)
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.duration - self.remaining
    }
}
