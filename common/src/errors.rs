//! Validation errors for filter state.

use thiserror::Error;

/// A filter state that must not be sent to the server.
///
/// These are caller mistakes (a page of zero, an inverted range, a sort key
/// outside the allow-list) and are returned before any request is dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("page must be at least 1, got {0}")]
    InvalidPage(u32),
    #[error("page size must be between 1 and {max}, got {got}")]
    InvalidPageSize { got: u32, max: u32 },
    #[error("{field}: minimum {min} is greater than maximum {max}")]
    InvalidRange { field: &'static str, min: u64, max: u64 },
    #[error("unknown sort key {0:?}")]
    UnknownSortKey(String),
    #[error("unknown sort direction {0:?}")]
    UnknownSortDirection(String),
}
