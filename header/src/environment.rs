//! Header environment.
//!
//! Dependency injection for the header reducer. The query client is a type
//! parameter because [`QueryClient::fetch`] is generic over the payload type;
//! everything else is shared behind trait objects.

use crate::config::HeaderConfig;
use crate::providers::{AuthService, GuestStorage, Navigator};
use std::sync::Arc;
use storefront_core::environment::Clock;
use storefront_core::query::QueryClient;

/// Collaborators available to the header reducer
#[derive(Clone)]
pub struct HeaderEnvironment<Q>
where
    Q: QueryClient + Clone,
{
    /// Session predicate and logout
    pub auth: Arc<dyn AuthService>,
    /// Guest identity lookup
    pub guests: Arc<dyn GuestStorage>,
    /// Cached profile and cart queries
    pub queries: Q,
    /// Host router
    pub navigator: Arc<dyn Navigator>,
    /// Time source for query bookkeeping
    pub clock: Arc<dyn Clock>,
    /// Display configuration
    pub config: HeaderConfig,
}

impl<Q> HeaderEnvironment<Q>
where
    Q: QueryClient + Clone,
{
    /// Creates a new `HeaderEnvironment`
    #[must_use]
    pub fn new(
        auth: Arc<dyn AuthService>,
        guests: Arc<dyn GuestStorage>,
        queries: Q,
        navigator: Arc<dyn Navigator>,
        clock: Arc<dyn Clock>,
        config: HeaderConfig,
    ) -> Self {
        Self {
            auth,
            guests,
            queries,
            navigator,
            clock,
            config,
        }
    }

    /// Whether the profile query is enabled
    #[must_use]
    pub fn profile_query_enabled(&self) -> bool {
        self.auth.is_logged_in()
    }

    /// Whether the cart query is enabled: a guest cart or a signed-in user
    #[must_use]
    pub fn cart_query_enabled(&self) -> bool {
        self.guests.guest_user().is_some_and(|guest| guest.has_id()) || self.auth.is_logged_in()
    }
}
