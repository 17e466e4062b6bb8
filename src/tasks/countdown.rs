//! Countdown tick loop

use std::{sync::Arc, time::Duration};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::state::controller::Shared;

/// Time between two ticks of the countdown
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Background task that counts the shared state down once per tick.
///
/// Every mutation goes through [`Shared::apply`] with this loop's
/// generation, so once the controller cancels or replaces the loop it
/// exits at its next step without touching the state.
pub(crate) async fn countdown_task(shared: Arc<Shared>, generation: u64) {
    debug!("Starting tick loop generation {}", generation);

    let mut interval = interval_at(Instant::now() + TICK_INTERVAL, TICK_INTERVAL);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        let time_left = shared.apply(generation, |state| {
            if state.remaining_seconds == 0 {
                state.is_playing = false;
                false
            } else {
                true
            }
        });

        match time_left {
            None => return,
            Some(false) => {
                info!("Countdown reached zero");
                interval.tick().await;

                if shared.apply(generation, |state| state.elapsed_seconds = 0).is_some() {
                    info!("Countdown completed");
                    shared.finish(generation);
                }
                return;
            }
            Some(true) => {
                interval.tick().await;

                match shared.apply(generation, |state| {
                    state.tick();
                    *state
                }) {
                    Some(state) => debug!(
                        "Tick: {}s remaining, {}s elapsed",
                        state.remaining_seconds, state.elapsed_seconds
                    ),
                    None => return,
                }
            }
        }
    }
}
