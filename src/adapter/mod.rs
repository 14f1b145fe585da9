//! The log adapter: the logging facade surface and its dispatch into the
//! notification client.

pub mod format;

pub use format::{TITLE_LIMIT, dump_value, format_message, truncate};

use tracing::trace;

use crate::domain::{AdapterError, Context, Level, Message, get_or_default, omit_key};
use crate::notifier::Notifier;

/// Logging facade that forwards every event to an error-monitoring service.
///
/// Holds nothing but the injected client; every call performs exactly one
/// synchronous notification and propagates any client failure to the caller.
pub struct Logger<N: Notifier> {
    notifier: N,
}

impl<N: Notifier> Logger<N> {
    /// Create a new logger around a notification client.
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }

    /// Access the injected notification client.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Log an emergency message.
    pub fn emergency(&self, message: impl Into<Message>, context: Context) -> Result<(), AdapterError> {
        self.log(Level::Emergency, message, context)
    }

    /// Log an alert message.
    pub fn alert(&self, message: impl Into<Message>, context: Context) -> Result<(), AdapterError> {
        self.log(Level::Alert, message, context)
    }

    /// Log a critical message.
    pub fn critical(&self, message: impl Into<Message>, context: Context) -> Result<(), AdapterError> {
        self.log(Level::Critical, message, context)
    }

    /// Log an error message.
    pub fn error(&self, message: impl Into<Message>, context: Context) -> Result<(), AdapterError> {
        self.log(Level::Error, message, context)
    }

    /// Log a warning message.
    pub fn warning(&self, message: impl Into<Message>, context: Context) -> Result<(), AdapterError> {
        self.log(Level::Warning, message, context)
    }

    /// Log a notice.
    pub fn notice(&self, message: impl Into<Message>, context: Context) -> Result<(), AdapterError> {
        self.log(Level::Notice, message, context)
    }

    /// Log an informational message.
    pub fn info(&self, message: impl Into<Message>, context: Context) -> Result<(), AdapterError> {
        self.log(Level::Info, message, context)
    }

    /// Log a debug message.
    pub fn debug(&self, message: impl Into<Message>, context: Context) -> Result<(), AdapterError> {
        self.log(Level::Debug, message, context)
    }

    /// Log a message at an arbitrary level.
    ///
    /// Exception payloads go to the client's exception notification untouched.
    /// Everything else is formatted, given a title (the context `title` entry
    /// when present, otherwise a truncated prefix of the formatted message)
    /// and sent as an error notification. The `title` key is stripped from the
    /// context on both paths.
    pub fn log(
        &self,
        level: Level,
        message: impl Into<Message>,
        context: Context,
    ) -> Result<(), AdapterError> {
        let severity = level.severity();
        trace!(level = %level, severity = %severity, "dispatching log event");

        match message.into() {
            Message::Exception(exception) => {
                self.notifier
                    .notify_exception(exception.as_ref(), &omit_key(context, "title"), severity)?;
            }
            message => {
                let formatted = format_message(&message);
                let title = get_or_default(&context, "title", truncate(&formatted, TITLE_LIMIT));
                self.notifier
                    .notify_error(&title, &formatted, &omit_key(context, "title"), severity)?;
            }
        }

        Ok(())
    }
}
