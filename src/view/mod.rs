//! View model module
//!
//! Everything a screen needs to draw the timer, derived from a state
//! snapshot. Nothing here mutates the countdown except through the
//! controller's commands.

pub mod controls;
pub mod label;
pub mod ring;

use serde::{Deserialize, Serialize};

use crate::state::{TimerPhase, TimerState};

pub use controls::{play_action, play_affordance, press_play, press_stop, PlayAction, PlayAffordance};
pub use label::{countdown_label, format_clock};
pub use ring::{progress_fraction, RingGeometry};

/// Radius of the progress ring in layout units
pub const DEFAULT_RING_RADIUS: f64 = 150.0;

/// Render-ready description of the timer screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerView {
    pub phase: TimerPhase,
    pub label: String,
    pub clock: String,
    pub play_button: PlayAffordance,
    pub progress: f64,
    pub ring: RingGeometry,
}

impl TimerView {
    pub fn render(state: &TimerState, total_seconds: u64, ring_radius: f64) -> Self {
        Self {
            phase: state.phase(),
            label: countdown_label(state.remaining_seconds),
            clock: format_clock(state.remaining_seconds),
            play_button: play_affordance(state),
            progress: progress_fraction(state.elapsed_seconds, total_seconds),
            ring: RingGeometry::compute(state.elapsed_seconds, total_seconds, state.is_playing, ring_radius),
        }
    }
}
