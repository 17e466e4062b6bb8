//! Error types for countdown commands

use thiserror::Error;

/// Errors a countdown command can be rejected with.
///
/// Only `start` is fallible; `pause` and `stop` are total over every state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CountdownError {
    /// A run needs at least one second to count down
    #[error("Invalid countdown duration: {total_seconds}s (must be greater than zero)")]
    InvalidDuration { total_seconds: i64 },
}

impl CountdownError {
    pub fn invalid_duration(total_seconds: i64) -> Self {
        Self::InvalidDuration { total_seconds }
    }
}
