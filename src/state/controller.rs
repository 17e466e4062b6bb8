//! Countdown controller: commands, cancellation, and state publication

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, info, warn};

use super::{TimerPhase, TimerState};
use crate::{error::CountdownError, tasks::countdown_task};

/// State shared between the controller and its tick loop
#[derive(Debug)]
pub(crate) struct Shared {
    inner: Mutex<Inner>,
    state_tx: watch::Sender<TimerState>,
}

#[derive(Debug)]
struct Inner {
    state: TimerState,
    /// Identifies the tick loop currently allowed to mutate `state`
    generation: u64,
    task: Option<JoinHandle<()>>,
}

impl Shared {
    fn new() -> Self {
        let (state_tx, _) = watch::channel(TimerState::new());
        Self {
            inner: Mutex::new(Inner {
                state: TimerState::new(),
                generation: 0,
                task: None,
            }),
            state_tx,
        }
    }

    // Inner holds plain values only, so a poisoned lock is still consistent
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish_if_changed(&self, before: TimerState, after: TimerState) {
        if before != after {
            self.state_tx.send_replace(after);
        }
    }

    /// Apply a mutation on behalf of the tick loop identified by `generation`.
    ///
    /// Returns `None` without touching the state if that loop has been
    /// cancelled or replaced. The new state is published before the lock is
    /// released, so observers see changes in mutation order.
    pub(crate) fn apply<R>(&self, generation: u64, f: impl FnOnce(&mut TimerState) -> R) -> Option<R> {
        let mut inner = self.lock();
        if inner.generation != generation {
            debug!("Tick loop generation {} superseded, skipping update", generation);
            return None;
        }

        let before = inner.state;
        let result = f(&mut inner.state);
        self.publish_if_changed(before, inner.state);
        Some(result)
    }

    /// Release the task handle of a loop that ended on its own
    pub(crate) fn finish(&self, generation: u64) {
        let mut inner = self.lock();
        if inner.generation == generation {
            inner.task = None;
        }
    }
}

impl Inner {
    /// Invalidate the current tick loop and return the next generation
    fn cancel_loop(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("Cancelled active tick loop");
        }
        self.generation
    }
}

/// Owns one countdown and its tick loop.
///
/// Commands mutate state synchronously and publish it to every subscriber.
/// At most one tick loop is alive at a time; it is cancelled when the
/// controller is dropped.
#[derive(Debug)]
pub struct TimerController {
    shared: Arc<Shared>,
}

impl TimerController {
    /// Create an idle controller
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared::new()),
        }
    }

    /// Start a countdown, or resume the current one.
    ///
    /// With `from_beginning` the countdown restarts at `total_seconds` with
    /// no elapsed time; otherwise it resumes from the current remaining time.
    /// Any running tick loop is replaced. Must be called from within a tokio
    /// runtime.
    pub fn start(&self, total_seconds: u64, from_beginning: bool) -> Result<TimerState, CountdownError> {
        if total_seconds == 0 {
            warn!("Rejected start with a zero-second countdown");
            return Err(CountdownError::invalid_duration(0));
        }

        let mut inner = self.shared.lock();
        let generation = inner.cancel_loop();
        let before = inner.state;

        if from_beginning {
            inner.state = TimerState::fresh_run(total_seconds);
        } else {
            inner.state.is_playing = true;
            inner.state.is_paused = false;
        }

        let state = inner.state;
        self.shared.publish_if_changed(before, state);
        inner.task = Some(tokio::spawn(countdown_task(Arc::clone(&self.shared), generation)));
        drop(inner);

        if from_beginning {
            info!("Countdown started: {}s", total_seconds);
        } else {
            info!("Countdown resumed with {}s remaining", state.remaining_seconds);
        }
        Ok(state)
    }

    /// Suspend the countdown, keeping remaining and elapsed time.
    ///
    /// The playing flag is cleared together with the tick loop so that a
    /// paused snapshot never reports an active countdown.
    pub fn pause(&self) -> TimerState {
        let mut inner = self.shared.lock();
        inner.cancel_loop();
        let before = inner.state;

        inner.state.is_paused = true;
        inner.state.is_playing = false;

        let state = inner.state;
        self.shared.publish_if_changed(before, state);
        drop(inner);

        info!("Countdown paused with {}s remaining", state.remaining_seconds);
        state
    }

    /// Cancel the countdown and return to idle. The paused flag is kept.
    pub fn stop(&self) -> TimerState {
        let mut inner = self.shared.lock();
        inner.cancel_loop();
        let before = inner.state;

        inner.state.clear();

        let state = inner.state;
        self.shared.publish_if_changed(before, state);
        drop(inner);

        info!("Countdown stopped");
        state
    }

    /// Get the current state
    pub fn snapshot(&self) -> TimerState {
        self.shared.lock().state
    }

    pub fn phase(&self) -> TimerPhase {
        self.snapshot().phase()
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.shared.state_tx.subscribe()
    }

    /// Whether a tick loop is currently alive
    pub fn has_active_loop(&self) -> bool {
        self.shared
            .lock()
            .task
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }
}

impl Default for TimerController {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TimerController {
    fn drop(&mut self) {
        self.shared.lock().cancel_loop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::sleep;

    fn counts(controller: &TimerController) -> (u64, u64) {
        let state = controller.snapshot();
        (state.remaining_seconds, state.elapsed_seconds)
    }

    #[tokio::test(start_paused = true)]
    async fn start_from_beginning_sets_fresh_run() {
        let controller = TimerController::new();
        for total in [1, 2, 10, 3600] {
            let state = controller.start(total, true).unwrap();
            assert_eq!(state, controller.snapshot());
            assert_eq!(state.remaining_seconds, total);
            assert_eq!(state.elapsed_seconds, 0);
            assert!(state.is_playing);
            assert!(!state.is_paused);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn start_rejects_zero_total_and_keeps_state() {
        let controller = TimerController::new();
        controller.start(5, true).unwrap();
        sleep(Duration::from_millis(1500)).await;

        let before = controller.snapshot();
        let err = controller.start(0, true).unwrap_err();
        assert_eq!(err, CountdownError::InvalidDuration { total_seconds: 0 });
        assert_eq!(controller.snapshot(), before);
        assert!(controller.has_active_loop());
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_decrement_remaining_and_increment_elapsed() {
        let controller = TimerController::new();
        controller.start(4, true).unwrap();

        sleep(Duration::from_millis(500)).await;
        assert_eq!(counts(&controller), (4, 0));

        for expected in 1..=4 {
            sleep(Duration::from_secs(1)).await;
            assert_eq!(counts(&controller), (4 - expected, expected));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn natural_completion_resets_elapsed_one_tick_later() {
        let controller = TimerController::new();
        controller.start(2, true).unwrap();

        sleep(Duration::from_millis(2500)).await;
        let state = controller.snapshot();
        assert_eq!(state.remaining_seconds, 0);
        assert_eq!(state.elapsed_seconds, 2);
        assert!(!state.is_playing);
        assert_eq!(state.phase(), TimerPhase::Completing);

        sleep(Duration::from_secs(1)).await;
        let state = controller.snapshot();
        assert_eq!(state.elapsed_seconds, 0);
        assert_eq!(state.phase(), TimerPhase::Idle);
        assert!(!controller.has_active_loop());
    }

    #[tokio::test(start_paused = true)]
    async fn stop_is_idempotent_from_any_state() {
        let controller = TimerController::new();

        let idle = controller.stop();
        assert!(idle.is_idle());

        controller.start(10, true).unwrap();
        sleep(Duration::from_millis(2500)).await;
        let stopped = controller.stop();
        assert_eq!((stopped.remaining_seconds, stopped.elapsed_seconds), (0, 0));
        assert!(!stopped.is_playing);
        assert_eq!(controller.stop(), stopped);

        controller.start(10, true).unwrap();
        controller.pause();
        let stopped = controller.stop();
        assert_eq!((stopped.remaining_seconds, stopped.elapsed_seconds), (0, 0));
        assert!(stopped.is_paused);
        assert_eq!(stopped.phase(), TimerPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn stopped_loop_never_mutates_again() {
        let controller = TimerController::new();
        controller.start(10, true).unwrap();
        sleep(Duration::from_millis(1500)).await;
        controller.stop();

        sleep(Duration::from_secs(5)).await;
        assert!(controller.snapshot().is_idle());
        assert_eq!(counts(&controller), (0, 0));
        assert!(!controller.has_active_loop());
    }

    #[tokio::test(start_paused = true)]
    async fn pause_then_resume_loses_no_seconds() {
        let controller = TimerController::new();
        controller.start(10, true).unwrap();
        sleep(Duration::from_millis(3500)).await;

        let paused = controller.pause();
        assert_eq!((paused.remaining_seconds, paused.elapsed_seconds), (7, 3));
        assert!(paused.is_paused);
        assert!(!paused.is_playing);
        assert_eq!(paused.phase(), TimerPhase::Paused);

        sleep(Duration::from_secs(4)).await;
        assert_eq!(controller.snapshot(), paused);

        let resumed = controller.start(paused.remaining_seconds, false).unwrap();
        assert_eq!((resumed.remaining_seconds, resumed.elapsed_seconds), (7, 3));
        assert!(resumed.is_playing);
        assert!(!resumed.is_paused);
    }

    #[tokio::test(start_paused = true)]
    async fn restart_replaces_previous_loop() {
        let controller = TimerController::new();
        controller.start(10, true).unwrap();
        controller.start(10, true).unwrap();

        sleep(Duration::from_millis(1500)).await;
        assert_eq!(counts(&controller), (9, 1));
        sleep(Duration::from_secs(1)).await;
        assert_eq!(counts(&controller), (8, 2));
    }

    #[tokio::test(start_paused = true)]
    async fn resume_with_nothing_left_completes_immediately() {
        let controller = TimerController::new();
        let state = controller.start(3, false).unwrap();
        assert!(state.is_playing);

        sleep(Duration::from_millis(10)).await;
        let state = controller.snapshot();
        assert!(!state.is_playing);
        assert!(state.is_idle());
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_observe_every_tick() {
        let controller = TimerController::new();
        let mut rx = controller.subscribe();
        controller.start(2, true).unwrap();

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().remaining_seconds, 2);
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().remaining_seconds, 1);
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().remaining_seconds, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_controller_cancels_loop() {
        let controller = TimerController::new();
        let mut rx = controller.subscribe();
        controller.start(5, true).unwrap();
        rx.borrow_and_update();
        drop(controller);

        sleep(Duration::from_secs(3)).await;
        assert_eq!(rx.borrow().remaining_seconds, 5);
    }
}
