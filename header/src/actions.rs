//! Header actions.

use crate::types::{CartSummary, ProfilePayload};
use storefront_core::query::{QueryError, QueryResponse};

/// Every input the header reacts to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderAction {
    // ========== Lifecycle ==========
    /// The header was mounted: reset display state and start enabled queries
    Mounted,
    /// Re-run enabled queries without resetting display state
    Refresh,
    /// The header was torn down
    Unmounted,

    // ========== Query results ==========
    // Results from an older generation are stale and dropped.
    /// The profile query settled with a response
    ProfileLoaded {
        /// Query generation the request was started in
        generation: u64,
        /// `{ status, data }` envelope
        response: QueryResponse<ProfilePayload>,
    },
    /// The profile query failed
    ProfileFailed {
        /// Query generation the request was started in
        generation: u64,
        /// Why
        error: QueryError,
    },
    /// The cart query settled with a response
    CartLoaded {
        /// Query generation the request was started in
        generation: u64,
        /// `{ status, data }` envelope
        response: QueryResponse<CartSummary>,
    },
    /// The cart query failed
    CartFailed {
        /// Query generation the request was started in
        generation: u64,
        /// Why
        error: QueryError,
    },

    // ========== User interaction ==========
    /// The logo was clicked
    LogoClicked,
    /// The cart icon was clicked
    CartClicked,
    /// "Profile" was chosen in the account menu
    ProfileClicked,
    /// The login button was clicked
    LogInClicked,
    /// The sidebar toggle was clicked
    SidebarToggled,
    /// "Sign out" was chosen in the account menu
    SignOutClicked,

    // ========== Effect results ==========
    /// Logout ran and the cart entry was evicted
    SignedOut,
}
