//! Cached query capability.
//!
//! Features never talk to the network directly. They ask a [`QueryClient`]
//! for the value cached under a [`QueryKey`], and explicitly evict entries
//! with [`QueryClient::invalidate`] when the cached value must not be seen
//! again (for example after a sign-out).
//!
//! Remote endpoints answer with a `{ status, data }` envelope, modelled by
//! [`QueryResponse`]. A response only carries usable data when `status` is
//! truthy and `data` is present.
//!
//! # Example
//!
//! ```no_run
//! use storefront_core::query::{QueryClient, QueryError, QueryKey};
//!
//! # #[derive(serde::Deserialize)] struct Cart { total_items: u32 }
//! async fn cart_total<Q: QueryClient>(client: &Q) -> Result<u32, QueryError> {
//!     let key = QueryKey::new("listCartItem");
//!     let response = client.fetch::<Cart>(&key).await?;
//!     Ok(response.into_data().map_or(0, |cart| cart.total_items))
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::future::Future;
use thiserror::Error;

/// Identifier of a cached query
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QueryKey(String);

impl QueryKey {
    /// Creates a key from its string form
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QueryKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// `{ status, data }` envelope returned by storefront endpoints
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse<T> {
    /// Whether the endpoint reported success
    #[serde(default)]
    pub status: bool,
    /// Payload, absent on failure
    pub data: Option<T>,
}

impl<T> QueryResponse<T> {
    /// Successful response carrying `data`
    #[must_use]
    pub const fn ok(data: T) -> Self {
        Self {
            status: true,
            data: Some(data),
        }
    }

    /// Response with a falsy status and no payload
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            status: false,
            data: None,
        }
    }

    /// Returns the payload only when the status is truthy
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        if self.status { self.data } else { None }
    }

    /// Borrowing variant of [`QueryResponse::into_data`]
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        if self.status { self.data.as_ref() } else { None }
    }
}

/// Errors produced by a [`QueryClient`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The request never produced a response
    #[error("Transport error: {0}")]
    Transport(String),

    /// The caller is not (or no longer) authorized
    #[error("Unauthorized")]
    Unauthorized,

    /// The response body did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// No fetcher is registered under the key
    #[error("Unknown query: {0}")]
    UnknownQuery(QueryKey),
}

impl From<serde_json::Error> for QueryError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(error.to_string())
    }
}

/// Cache-backed query capability
///
/// Implementations own caching, deduplication and transport. Callers only
/// see `fetch` and `invalidate`.
pub trait QueryClient: Send + Sync {
    /// Returns the response cached under `key`, fetching it if needed
    ///
    /// # Errors
    ///
    /// Returns a [`QueryError`] when the request fails or the body cannot be
    /// decoded as `QueryResponse<T>`.
    fn fetch<T>(
        &self,
        key: &QueryKey,
    ) -> impl Future<Output = Result<QueryResponse<T>, QueryError>> + Send
    where
        T: DeserializeOwned + Send + 'static;

    /// Evicts the entry cached under `key`
    fn invalidate(&self, key: &QueryKey);
}

/// Lifecycle of a query as seen by a feature
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryStatus {
    /// Not enabled (its precondition did not hold)
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// Settled with a response
    Success,
    /// Settled with an error
    Error,
}

/// Bookkeeping for one query: its status and when it last settled successfully
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    /// Current status
    pub status: QueryStatus,
    /// When the last successful response was received
    pub updated_at: Option<DateTime<Utc>>,
}

impl QueryState {
    /// Marks the query as in flight, keeping the last update time
    pub const fn start(&mut self) {
        self.status = QueryStatus::Loading;
    }

    /// Marks the query as settled successfully at `at`
    pub fn succeed(&mut self, at: DateTime<Utc>) {
        self.status = QueryStatus::Success;
        self.updated_at = Some(at);
    }

    /// Marks the query as failed
    pub const fn fail(&mut self) {
        self.status = QueryStatus::Error;
    }

    /// Whether a request is currently in flight
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.status, QueryStatus::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct Cart {
        total_items: u32,
    }

    #[test]
    fn data_requires_truthy_status() {
        let ok = QueryResponse::ok(3);
        assert_eq!(ok.data(), Some(&3));

        let failed = QueryResponse {
            status: false,
            data: Some(3),
        };
        assert_eq!(failed.into_data(), None);
    }

    #[test]
    fn envelope_tolerates_missing_fields() -> Result<(), serde_json::Error> {
        let response: QueryResponse<Cart> = serde_json::from_str(r#"{"status": true}"#)?;
        assert!(response.status);
        assert!(response.data.is_none());

        let response: QueryResponse<Cart> =
            serde_json::from_str(r#"{"status": true, "data": {"totalItems": 4}}"#)?;
        assert_eq!(response.into_data(), Some(Cart { total_items: 4 }));

        let response: QueryResponse<Cart> = serde_json::from_str("{}")?;
        assert_eq!(response, QueryResponse::empty());
        Ok(())
    }

    #[test]
    fn query_state_keeps_last_update_across_reloads() {
        let at = Utc::now();
        let mut state = QueryState::default();
        assert_eq!(state.status, QueryStatus::Idle);

        state.start();
        assert!(state.is_loading());

        state.succeed(at);
        state.start();
        assert_eq!(state.updated_at, Some(at));

        state.fail();
        assert_eq!(state.status, QueryStatus::Error);
        assert_eq!(state.updated_at, Some(at));
    }

    #[test]
    fn decode_errors_convert() {
        let error = serde_json::from_str::<Cart>("not json").map_err(QueryError::from);
        assert!(matches!(error, Err(QueryError::Decode(_))));
    }
}
