#![deny(warnings, rust_2024_compatibility)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
// Noisy pedantic lint suppressed with justification:
#![allow(
    clippy::module_name_repetitions // e.g. NotifyError in notifier module
)]

pub mod adapter;
pub mod domain;
pub mod notifier;

// Re-export main types for easy access
pub use adapter::{Logger, TITLE_LIMIT, dump_value, format_message, truncate};
pub use domain::{AdapterError, Context, Level, Message, Severity, ToJson, ToStructure};
pub use notifier::{Notifier, NotifyError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
