//! Port to the remote paginated listing endpoints.

use std::future::Future;

use common::{query_string::QueryPairs, search_result::PageResponse};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("server responded with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Message suitable for showing next to a retry button.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message, .. } if !message.trim().is_empty() => message.trim().to_string(),
            Self::Status { status, .. } => format!("The server could not complete the search (status {status})."),
            Self::Network(_) => "Unable to reach the server. Check your connection and try again.".to_string(),
            Self::Decode(_) => "The server sent a response that could not be read.".to_string(),
        }
    }
}

/// One page of `I` for the given request parameters.
pub trait ListingApi<I> {
    fn fetch_page(&self, request: &QueryPairs) -> impl Future<Output = Result<PageResponse<I>, FetchError>>;
}
