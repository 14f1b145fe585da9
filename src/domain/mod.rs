//! Domain layer for log-notifier.
//!
//! Contains the canonical types shared across all modules:
//! - `Level`: the eight-value level of the logging facade
//! - `Severity`: the four-value classification the notification service understands
//! - `Message`: tagged log payload deciding the notification path
//! - `AdapterError`: top-level error type

pub mod context;
pub mod error;
pub mod level;
pub mod message;

pub use context::{Context, get_or_default, omit_key};
pub use error::AdapterError;
pub use level::{Level, Severity};
pub use message::{Message, ToJson, ToStructure};
