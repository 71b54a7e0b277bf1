//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]` where phase or config validation can fail.

use thiserror::Error;

/// Errors produced by `tl-core` validation.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("signal phase {field} duration must be non-negative, got {value}")]
    NegativeDuration { field: &'static str, value: i64 },

    #[error("signal phase {field} duration {value} is too large")]
    DurationOverflow { field: &'static str, value: i64 },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `tl-core`.
pub type CoreResult<T> = Result<T, CoreError>;
