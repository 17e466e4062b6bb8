//! Ring Countdown - a circular countdown timer with play/pause/stop controls
//!
//! The core is [`TimerController`]: one cancellable one-second tick loop and
//! an observable [`TimerState`]. The [`view`] module derives what a screen
//! shows from a state snapshot, and [`api`] exposes both over HTTP.

pub mod config;
pub mod error;
pub mod state;
pub mod view;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::CountdownError;
pub use state::{AppState, TimerController, TimerPhase, TimerState};
pub use view::TimerView;
pub use api::create_router;
pub use utils::signals::shutdown_signal;
