//! State logging background task

use tokio::sync::watch;
use tracing::{debug, info};

use crate::{state::TimerState, view::format_clock};

/// Background task that logs phase transitions of the countdown
pub async fn state_logger_task(mut state_rx: watch::Receiver<TimerState>) {
    info!("Starting state logger task");

    let mut last_phase = state_rx.borrow_and_update().phase();

    while state_rx.changed().await.is_ok() {
        let state = *state_rx.borrow_and_update();
        let phase = state.phase();

        if phase != last_phase {
            info!(
                "Timer {:?} -> {:?} at {}",
                last_phase,
                phase,
                format_clock(state.remaining_seconds)
            );
            last_phase = phase;
        } else {
            debug!("Timer {:?}: {}", phase, format_clock(state.remaining_seconds));
        }
    }

    debug!("Timer state channel closed, state logger exiting");
}
