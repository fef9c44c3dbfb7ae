//! Collaborators the header depends on.
//!
//! All of them are synchronous: they read or clear locally stored session
//! data, or hand a route to the host router. Remote reads go through
//! [`storefront_core::query::QueryClient`] instead.

use crate::types::{GuestUser, Route};

/// Session predicate and sign-out action
pub trait AuthService: Send + Sync {
    /// Whether the stored session says the user is logged in
    fn is_logged_in(&self) -> bool;

    /// Clear the stored session
    fn logout(&self);
}

/// Local guest identity lookup
pub trait GuestStorage: Send + Sync {
    /// The stored guest identity, if any
    fn guest_user(&self) -> Option<GuestUser>;
}

/// Host router and layout controls
pub trait Navigator: Send + Sync {
    /// Navigate to `route`
    fn push(&self, route: Route);

    /// Open or close the layout's sidebar
    fn toggle_sidebar(&self);
}
