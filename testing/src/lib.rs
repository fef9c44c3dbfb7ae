//! # Storefront Testing
//!
//! Testing utilities and helpers for the storefront header.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given/When/Then harness for reducers
//! - [`assertions`]: effect assertions
//! - [`FixedClock`]: deterministic time
//! - [`MockQueryClient`]: scripted query responses with recorded fetches and evictions
//!
//! ## Example
//!
//! ```ignore
//! use storefront_testing::{MockQueryClient, test_clock};
//!
//! let queries = MockQueryClient::new()
//!     .with_response("listCartItem", &QueryResponse::ok(CartSummary { total_items: 3 }));
//! let env = HeaderEnvironment::new(
//!     auth, guests, queries.clone(), navigator, Arc::new(test_clock()), config,
//! );
//! ```

pub mod reducer_test;

use chrono::{DateTime, Utc};
use storefront_core::environment::Clock;

/// Mock implementations of environment traits.
pub mod mocks {
    use super::{Clock, DateTime, Utc};
    use serde::Serialize;
    use serde::de::DeserializeOwned;
    use serde_json::Value;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
    use storefront_core::query::{QueryClient, QueryError, QueryKey, QueryResponse};

    /// Fixed clock for deterministic tests
    ///
    /// # Example
    ///
    /// ```
    /// use storefront_testing::mocks::FixedClock;
    /// use storefront_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    #[must_use]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(DateTime::<Utc>::UNIX_EPOCH + chrono::Duration::days(20_089))
    }

    #[derive(Debug, Default)]
    struct Recorded {
        responses: HashMap<QueryKey, Result<Value, QueryError>>,
        cache: HashMap<QueryKey, Value>,
        fetches: Vec<QueryKey>,
        loads: Vec<QueryKey>,
        invalidations: Vec<QueryKey>,
    }

    /// Scripted query client.
    ///
    /// Behaves like a keyed cache in front of a scripted backend: the first
    /// fetch of a key "loads" the scripted response and caches it, later
    /// fetches are served from the cache until the key is invalidated.
    /// Every fetch, load and invalidation is recorded.
    ///
    /// Clones share the same recording.
    #[derive(Debug, Clone, Default)]
    pub struct MockQueryClient {
        inner: Arc<Mutex<Recorded>>,
    }

    impl MockQueryClient {
        /// Create a client with no scripted responses
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        fn lock(&self) -> MutexGuard<'_, Recorded> {
            self.inner.lock().unwrap_or_else(PoisonError::into_inner)
        }

        /// Script the response served for `key`
        #[must_use]
        pub fn with_response<T: Serialize>(
            self,
            key: impl Into<QueryKey>,
            response: &QueryResponse<T>,
        ) -> Self {
            self.set_response(key, response);
            self
        }

        /// Script a raw JSON body served for `key`
        #[must_use]
        pub fn with_json(self, key: impl Into<QueryKey>, body: Value) -> Self {
            self.lock().responses.insert(key.into(), Ok(body));
            self
        }

        /// Script a failure for `key`
        #[must_use]
        pub fn with_failure(self, key: impl Into<QueryKey>, error: QueryError) -> Self {
            self.lock().responses.insert(key.into(), Err(error));
            self
        }

        /// Replace the scripted response for `key` (cached values are kept)
        pub fn set_response<T: Serialize>(
            &self,
            key: impl Into<QueryKey>,
            response: &QueryResponse<T>,
        ) {
            let body = serde_json::to_value(response).unwrap_or_default();
            self.lock().responses.insert(key.into(), Ok(body));
        }

        /// Number of `fetch` calls for `key`
        #[must_use]
        pub fn fetch_count(&self, key: impl Into<QueryKey>) -> usize {
            let key = key.into();
            self.lock().fetches.iter().filter(|k| **k == key).count()
        }

        /// Number of fetches for `key` that missed the cache
        #[must_use]
        pub fn load_count(&self, key: impl Into<QueryKey>) -> usize {
            let key = key.into();
            self.lock().loads.iter().filter(|k| **k == key).count()
        }

        /// Number of `invalidate` calls for `key`
        #[must_use]
        pub fn invalidation_count(&self, key: impl Into<QueryKey>) -> usize {
            let key = key.into();
            self.lock().invalidations.iter().filter(|k| **k == key).count()
        }

        /// Every invalidated key, in call order
        #[must_use]
        pub fn invalidations(&self) -> Vec<QueryKey> {
            self.lock().invalidations.clone()
        }

        /// Whether a value is currently cached under `key`
        #[must_use]
        pub fn is_cached(&self, key: impl Into<QueryKey>) -> bool {
            self.lock().cache.contains_key(&key.into())
        }

        fn resolve(&self, key: &QueryKey) -> Result<Value, QueryError> {
            let mut recorded = self.lock();
            recorded.fetches.push(key.clone());

            if let Some(body) = recorded.cache.get(key) {
                return Ok(body.clone());
            }

            recorded.loads.push(key.clone());
            let body = recorded
                .responses
                .get(key)
                .cloned()
                .unwrap_or_else(|| Err(QueryError::UnknownQuery(key.clone())))?;
            recorded.cache.insert(key.clone(), body.clone());
            Ok(body)
        }
    }

    impl QueryClient for MockQueryClient {
        fn fetch<T>(
            &self,
            key: &QueryKey,
        ) -> impl Future<Output = Result<QueryResponse<T>, QueryError>> + Send
        where
            T: DeserializeOwned + Send + 'static,
        {
            let resolved = self.resolve(key);

            async move {
                let body = resolved?;
                Ok(serde_json::from_value(body)?)
            }
        }

        fn invalidate(&self, key: &QueryKey) {
            let mut recorded = self.lock();
            recorded.invalidations.push(key.clone());
            recorded.cache.remove(key);
        }
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, MockQueryClient, test_clock};
pub use reducer_test::{ReducerTest, assertions};
