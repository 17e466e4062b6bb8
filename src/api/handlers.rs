//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        Json,
    },
};
use futures::stream::{self, Stream};
use tracing::{info, warn};

use crate::{
    error::CountdownError,
    state::AppState,
    view::press_play,
};
use super::responses::{ApiResponse, HealthResponse, StartRequest, StatusResponse};

type CommandResult = Result<Json<ApiResponse>, (StatusCode, Json<ApiResponse>)>;

fn rejected(state: &AppState, err: CountdownError) -> (StatusCode, Json<ApiResponse>) {
    warn!("Command rejected: {}", err);
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse::error(err.to_string(), state.controller.snapshot())),
    )
}

/// Handle POST /start - Start a fresh countdown or resume the current one
pub async fn start_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<StartRequest>,
) -> CommandResult {
    let total_seconds = request
        .total_seconds
        .unwrap_or(state.total_seconds as i64);
    let from_beginning = request.from_beginning.unwrap_or(true);

    let result = u64::try_from(total_seconds)
        .map_err(|_| CountdownError::invalid_duration(total_seconds))
        .and_then(|total| state.controller.start(total, from_beginning));

    match result {
        Ok(timer_state) => {
            state.record_action(if from_beginning { "start" } else { "resume" });
            info!("Start endpoint called - total={}s from_beginning={}", total_seconds, from_beginning);
            let message = if from_beginning { "Countdown started" } else { "Countdown resumed" };
            Ok(Json(ApiResponse::from_state(message.to_string(), timer_state)))
        }
        Err(e) => Err(rejected(&state, e)),
    }
}

/// Handle POST /pause - Suspend the countdown
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> Json<ApiResponse> {
    let timer_state = state.controller.pause();
    state.record_action("pause");
    info!("Pause endpoint called");
    Json(ApiResponse::from_state("Countdown paused".to_string(), timer_state))
}

/// Handle POST /stop - Cancel the countdown
pub async fn stop_handler(State(state): State<Arc<AppState>>) -> Json<ApiResponse> {
    let timer_state = state.controller.stop();
    state.record_action("stop");
    info!("Stop endpoint called");
    Json(ApiResponse::from_state("Countdown stopped".to_string(), timer_state))
}

/// Handle POST /play - Tap on the play/pause button
pub async fn play_handler(State(state): State<Arc<AppState>>) -> CommandResult {
    match press_play(&state.controller, state.total_seconds) {
        Ok((action, timer_state)) => {
            state.record_action("play");
            info!("Play endpoint called - dispatched {:?}", action);
            Ok(Json(
                ApiResponse::from_state(format!("Play button dispatched {:?}", action), timer_state)
                    .with_action(action),
            ))
        }
        Err(e) => Err(rejected(&state, e)),
    }
}

/// Handle GET /status - Return the countdown state and its rendered view
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let timer_state = state.controller.snapshot();
    let (last_action, last_action_time) = state.get_last_action();

    Json(StatusResponse {
        phase: timer_state.phase(),
        state: timer_state,
        view: state.view(),
        total_seconds: state.total_seconds,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    })
}

/// Handle GET /events - Stream state changes as server-sent events
pub async fn events_handler(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let state_rx = state.controller.subscribe();

    // The first event carries the current state, later ones each change
    let stream = stream::unfold((state_rx, true), |(mut state_rx, first)| async move {
        if !first {
            state_rx.changed().await.ok()?;
        }
        let timer_state = *state_rx.borrow_and_update();
        let event = Event::default().event("timer").json_data(timer_state);
        Some((event, (state_rx, false)))
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
