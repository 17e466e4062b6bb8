//! Main application state management

use std::{
    sync::{Mutex, PoisonError},
    time::Instant,
};
use chrono::{DateTime, Utc};

use super::TimerController;
use crate::view::{TimerView, DEFAULT_RING_RADIUS};

/// Application state shared by the HTTP handlers
#[derive(Debug)]
pub struct AppState {
    /// The single countdown this server controls
    pub controller: TimerController,
    /// Fixed total used when a countdown starts fresh
    pub total_seconds: u64,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Mutex<Option<String>>,
    pub last_action_time: Mutex<Option<DateTime<Utc>>>,
}

impl AppState {
    /// Create a new AppState with an idle countdown
    pub fn new(port: u16, host: String, total_seconds: u64) -> Self {
        Self {
            controller: TimerController::new(),
            total_seconds,
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
        }
    }

    /// Remember the last command issued through the API
    pub fn record_action(&self, action: &str) {
        *self.last_action.lock().unwrap_or_else(PoisonError::into_inner) = Some(action.to_string());
        *self.last_action_time.lock().unwrap_or_else(PoisonError::into_inner) = Some(Utc::now());
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }

    /// Render the current countdown for a view
    pub fn view(&self) -> TimerView {
        TimerView::render(&self.controller.snapshot(), self.total_seconds, DEFAULT_RING_RADIUS)
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_last_action() {
        let state = AppState::new(0, "127.0.0.1".to_string(), 10);
        assert_eq!(state.get_last_action(), (None, None));

        state.record_action("pause");
        let (action, time) = state.get_last_action();
        assert_eq!(action.as_deref(), Some("pause"));
        assert!(time.is_some());
    }

    #[test]
    fn fresh_state_renders_idle_view() {
        let state = AppState::new(0, "127.0.0.1".to_string(), 10);
        let view = state.view();
        assert_eq!(view.clock, "00:00");
        assert_eq!(state.get_uptime(), "0s");
    }
}
