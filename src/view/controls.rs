//! Control button affordances and tap dispatch

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::CountdownError,
    state::{TimerController, TimerState},
};

/// Icon shown on the play/pause button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayAffordance {
    Play,
    Pause,
}

/// Command a tap on the play/pause button issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayAction {
    /// Continue a paused run from its remaining time
    Resume,
    Pause,
    /// Begin a new run at the full total
    StartFresh,
}

pub fn play_affordance(state: &TimerState) -> PlayAffordance {
    match play_action(state) {
        PlayAction::Pause => PlayAffordance::Pause,
        PlayAction::Resume | PlayAction::StartFresh => PlayAffordance::Play,
    }
}

/// Decide what the play/pause button does for the given state.
///
/// With nothing left to count a tap always starts fresh, including the
/// paused-then-stopped combination.
pub fn play_action(state: &TimerState) -> PlayAction {
    if state.remaining_seconds == 0 {
        PlayAction::StartFresh
    } else if state.is_paused {
        PlayAction::Resume
    } else {
        PlayAction::Pause
    }
}

/// Handle a tap on the play/pause button
pub fn press_play(controller: &TimerController, total_seconds: u64) -> Result<(PlayAction, TimerState), CountdownError> {
    let current = controller.snapshot();
    let action = play_action(&current);
    debug!("Play button pressed, dispatching {:?}", action);

    let state = match action {
        PlayAction::Resume => controller.start(current.remaining_seconds, false)?,
        PlayAction::Pause => controller.pause(),
        PlayAction::StartFresh => controller.start(total_seconds, true)?,
    };

    Ok((action, state))
}

/// Handle a tap on the stop button
pub fn press_stop(controller: &TimerController) -> TimerState {
    controller.stop()
}
