//! Errors reported by the placement engine.

use thiserror::Error;

/// Failure of a layout pass.
///
/// Every variant describes a programming error on the caller's side; nothing
/// here is transient or worth retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// The resolved configuration cannot produce a layout.
    #[error("invalid layout configuration: {reason}")]
    InvalidConfig { reason: String },

    /// A delegate callback or the viewport produced an unusable value.
    #[error("invalid input for {what}: {value}")]
    InvalidInput { what: String, value: f32 },

    /// An engine operation was called in the wrong state.
    #[error("`{operation}` called out of order: {detail}")]
    StateMisuse {
        operation: &'static str,
        detail: String,
    },
}

impl LayoutError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        LayoutError::InvalidConfig {
            reason: reason.into(),
        }
    }

    pub(crate) fn input(what: impl Into<String>, value: f32) -> Self {
        LayoutError::InvalidInput {
            what: what.into(),
            value,
        }
    }

    pub(crate) fn misuse(operation: &'static str, detail: impl Into<String>) -> Self {
        LayoutError::StateMisuse {
            operation,
            detail: detail.into(),
        }
    }
}
