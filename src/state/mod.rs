//! State management module
//!
//! This module contains the countdown state, its controller, and the
//! application state shared with the HTTP handlers.

pub mod app_state;
pub mod controller;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use controller::TimerController;
pub use timer_state::{TimerPhase, TimerState};
