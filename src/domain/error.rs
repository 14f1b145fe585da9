use thiserror::Error;

use crate::notifier::NotifyError;

/// Top-level error type for the adapter.
#[derive(Error, Debug)]
pub enum AdapterError {
    /// A level name outside the eight recognized levels.
    #[error("unrecognized log level: {0}")]
    InvalidLevel(String),

    /// Failure raised by the notification client, passed through unchanged.
    #[error(transparent)]
    Notify(#[from] NotifyError),
}
