//! Header state.

use crate::config::HeaderConfig;
use crate::types::CartSummary;
use serde::{Deserialize, Serialize};
use storefront_core::query::QueryState;

/// Display fields derived from the profile
///
/// Replaced as a whole whenever a new profile is projected; never patched
/// field by field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// User identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Avatar URL or local path
    pub avatar: String,
    /// Account role
    pub role: String,
}

impl SessionState {
    /// Avatar to display, falling back to the local default before any
    /// profile has been projected
    #[must_use]
    pub fn display_avatar<'a>(&'a self, config: &'a HeaderConfig) -> &'a str {
        if self.avatar.is_empty() {
            &config.default_avatar
        } else {
            &self.avatar
        }
    }

    /// Role to display, falling back to the default role
    #[must_use]
    pub fn display_role<'a>(&'a self, config: &'a HeaderConfig) -> &'a str {
        if self.role.is_empty() {
            &config.default_role
        } else {
            &self.role
        }
    }
}

/// State of the header
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderState {
    /// Projected profile
    pub session: SessionState,
    /// Last cart summary with a truthy status
    pub cart: Option<CartSummary>,
    /// Session flag observed when queries were last started or sign-out
    /// completed; drives the logo link in the rendered view
    pub logged_in: bool,
    /// Between `Mounted` and `Unmounted`
    pub mounted: bool,
    /// A sign-out is in flight
    pub signing_out: bool,
    /// Profile query bookkeeping
    pub profile_query: QueryState,
    /// Cart query bookkeeping
    pub cart_query: QueryState,
    /// Bumped whenever in-flight query results become stale
    pub query_generation: u64,
}

impl HeaderState {
    /// Items in the cart, zero when no cart data is available
    #[must_use]
    pub fn cart_total(&self) -> u32 {
        self.cart.map_or(0, |cart| cart.total_items)
    }

    /// Make every in-flight query result stale
    pub const fn bump_generation(&mut self) {
        self.query_generation = self.query_generation.wrapping_add(1);
    }

    /// Whether a result started in `generation` may still be applied
    #[must_use]
    pub const fn accepts(&self, generation: u64) -> bool {
        self.mounted && self.query_generation == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bumped_generation_rejects_older_results() {
        let mut state = HeaderState {
            mounted: true,
            ..HeaderState::default()
        };
        let started = state.query_generation;
        assert!(state.accepts(started));

        state.bump_generation();
        assert!(!state.accepts(started));
        assert!(state.accepts(started + 1));

        state.mounted = false;
        assert!(!state.accepts(started + 1));
    }

    #[test]
    fn display_fields_fall_back_before_projection() {
        let config = HeaderConfig::default();
        let session = SessionState::default();

        assert_eq!(session.display_avatar(&config), "/images/profile_image.jpg");
        assert_eq!(session.display_role(&config), "Customer");
    }

    #[test]
    fn cart_total_defaults_to_zero() {
        let mut state = HeaderState::default();
        assert_eq!(state.cart_total(), 0);

        state.cart = Some(CartSummary::new(4));
        assert_eq!(state.cart_total(), 4);
    }
}
