//! Boundary to the external error-monitoring service.
//!
//! The transport behind these calls (HTTP, queuing, retries) is the client
//! implementation's concern; the adapter only ever sees this trait and makes
//! no assumption about how long a call takes or whether it can fail.

use thiserror::Error;

use crate::domain::{Context, Severity};

#[cfg(test)]
use mockall::automock;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("request timeout: {0}")]
    RequestTimeout(String),
    #[error("notification rejected: {status} - {message}")]
    Rejected { status: u16, message: String },
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Client for the remote error-monitoring service.
///
/// Both operations report one event and return or fail independently of the
/// adapter; failures are never retried or swallowed on this side.
#[cfg_attr(test, automock)]
#[cfg_attr(test, allow(unused_parens))]
pub trait Notifier: Send + Sync {
    /// Report an exception value with its context.
    fn notify_exception(
        &self,
        exception: &(dyn std::error::Error + Send + Sync),
        context: &Context,
        severity: Severity,
    ) -> Result<(), NotifyError>;

    /// Report a formatted message under a title.
    fn notify_error(
        &self,
        title: &str,
        message: &str,
        context: &Context,
        severity: Severity,
    ) -> Result<(), NotifyError>;
}
