//! REST client for the paginated listing endpoints.

use std::future::Future;

use common::{query_string::QueryPairs, search_result::PageResponse};
use dioxus::logger::tracing;
use search_state::{FetchError, ListingApi};
use serde::de::DeserializeOwned;

const AUTH_TOKEN_KEY: &str = "token";

/// Where to send requests and with which credentials.
///
/// Built once at startup and handed to every client, so nothing below the
/// app root reads browser storage.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiSession {
    pub base_url: String,
    pub bearer_token: Option<String>,
}

impl ApiSession {
    pub fn from_browser_storage(base_url: String) -> Self {
        let bearer_token = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(AUTH_TOKEN_KEY).ok().flatten())
            .filter(|token| !token.is_empty());
        Self { base_url, bearer_token }
    }
}

#[derive(Debug, Clone)]
pub struct RestListingApi {
    client: reqwest::Client,
    session: ApiSession,
    endpoint: &'static str,
}

impl RestListingApi {
    pub fn new(session: ApiSession, endpoint: &'static str) -> Self {
        Self { client: reqwest::Client::new(), session, endpoint }
    }

    fn url(&self) -> String {
        format!("{}/{}", self.session.base_url.trim_end_matches('/'), self.endpoint.trim_start_matches('/'))
    }
}

impl<I: DeserializeOwned> ListingApi<I> for RestListingApi {
    fn fetch_page(&self, request: &QueryPairs) -> impl Future<Output = Result<PageResponse<I>, FetchError>> {
        let mut builder = self.client.get(self.url()).query(request.as_slice());
        if let Some(token) = &self.session.bearer_token {
            builder = builder.bearer_auth(token);
        }
        async move {
            let response = builder.send().await.map_err(|e| FetchError::Network(e.to_string()))?;
            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                tracing::warn!("listing request failed with {status}: {body}");
                return Err(FetchError::Status { status: status.as_u16(), message: server_message(&body) });
            }
            response.json::<PageResponse<I>>().await.map_err(|e| FetchError::Decode(e.to_string()))
        }
    }
}

/// The `message` field of a JSON error body, if there is one.
fn server_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_default()
}
