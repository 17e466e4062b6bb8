//! Background tasks module
//!
//! This module contains the countdown tick loop and tasks that observe it.

pub mod countdown;
pub mod state_logger;

pub(crate) use countdown::countdown_task;
pub use countdown::TICK_INTERVAL;
pub use state_logger::state_logger_task;
