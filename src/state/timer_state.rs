//! Timer state structure and phase classification

use serde::{Deserialize, Serialize};

/// Observable countdown state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    /// Seconds left in the countdown
    pub remaining_seconds: u64,
    /// Seconds counted since the current run started
    pub elapsed_seconds: u64,
    /// A run is suspended and can be resumed
    pub is_paused: bool,
    /// The tick loop is actively counting down
    pub is_playing: bool,
}

/// Coarse classification of a [`TimerState`] snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerPhase {
    Idle,
    Running,
    Paused,
    /// Countdown reached zero; elapsed time is reset one tick later
    Completing,
}

impl TimerPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerPhase::Idle => "idle",
            TimerPhase::Running => "running",
            TimerPhase::Paused => "paused",
            TimerPhase::Completing => "completing",
        }
    }
}

impl TimerState {
    /// Create the initial idle state
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state at the beginning of a fresh run
    pub fn fresh_run(total_seconds: u64) -> Self {
        Self {
            remaining_seconds: total_seconds,
            elapsed_seconds: 0,
            is_paused: false,
            is_playing: true,
        }
    }

    pub fn phase(&self) -> TimerPhase {
        if self.is_playing {
            TimerPhase::Running
        } else if self.is_paused && (self.remaining_seconds > 0 || self.elapsed_seconds > 0) {
            // A pause during completion freezes the pending reset too
            TimerPhase::Paused
        } else if self.remaining_seconds == 0 && self.elapsed_seconds > 0 {
            TimerPhase::Completing
        } else {
            TimerPhase::Idle
        }
    }

    pub fn is_idle(&self) -> bool {
        self.remaining_seconds == 0 && !self.is_playing
    }

    /// Advance the countdown by one second.
    ///
    /// Saturates at zero remaining; callers only tick while time is left.
    pub(crate) fn tick(&mut self) {
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        self.elapsed_seconds += 1;
    }

    /// Reset to idle values, leaving the paused flag alone
    pub(crate) fn clear(&mut self) {
        self.remaining_seconds = 0;
        self.elapsed_seconds = 0;
        self.is_playing = false;
    }
}
