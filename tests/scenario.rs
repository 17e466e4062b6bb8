use std::time::Duration;

use tokio::time::sleep;

use ring_countdown::{TimerController, TimerPhase};

fn counts(controller: &TimerController) -> (u64, u64) {
    let state = controller.snapshot();
    (state.remaining_seconds, state.elapsed_seconds)
}

#[tokio::test(start_paused = true)]
async fn start_pause_resume_until_completion() {
    let controller = TimerController::new();
    controller.start(10, true).expect("start");

    sleep(Duration::from_millis(3500)).await;
    assert_eq!(counts(&controller), (7, 3));

    let paused = controller.pause();
    assert_eq!((paused.remaining_seconds, paused.elapsed_seconds), (7, 3));
    sleep(Duration::from_secs(2)).await;
    assert_eq!(counts(&controller), (7, 3));

    controller.start(7, false).expect("resume");
    // Observe halfway between ticks
    sleep(Duration::from_millis(500)).await;
    for step in 1..=7 {
        sleep(Duration::from_secs(1)).await;
        assert_eq!(counts(&controller), (7 - step, 3 + step));
    }

    let state = controller.snapshot();
    assert!(!state.is_playing);
    assert_eq!(state.phase(), TimerPhase::Completing);

    sleep(Duration::from_secs(1)).await;
    assert_eq!(counts(&controller), (0, 0));
    assert_eq!(controller.phase(), TimerPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn completed_timer_can_start_again() {
    let controller = TimerController::new();
    controller.start(1, true).expect("start");
    sleep(Duration::from_millis(2500)).await;
    assert_eq!(controller.phase(), TimerPhase::Idle);

    let state = controller.start(3, true).expect("restart");
    assert_eq!((state.remaining_seconds, state.elapsed_seconds), (3, 0));
    sleep(Duration::from_millis(1500)).await;
    assert_eq!(counts(&controller), (2, 1));
}
