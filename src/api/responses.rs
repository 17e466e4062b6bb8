//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    state::{TimerPhase, TimerState},
    view::{PlayAction, TimerView},
};

/// Body of `POST /start`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StartRequest {
    /// Countdown length; the configured total when omitted
    pub total_seconds: Option<i64>,
    /// Start over instead of resuming; true when omitted
    pub from_beginning: Option<bool>,
}

/// API response structure for command endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub state: TimerState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<PlayAction>,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, state: TimerState) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            state,
            action: None,
        }
    }

    /// Create a response whose status is the phase of the resulting state
    pub fn from_state(message: String, state: TimerState) -> Self {
        Self::new(state.phase().as_str().to_string(), message, state)
    }

    /// Create an error response
    pub fn error(message: String, state: TimerState) -> Self {
        Self::new("error".to_string(), message, state)
    }

    pub fn with_action(mut self, action: PlayAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// Status response with the rendered view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub phase: TimerPhase,
    pub state: TimerState,
    pub view: TimerView,
    pub total_seconds: u64,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
