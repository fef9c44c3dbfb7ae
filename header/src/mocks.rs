//! Mock collaborators for tests and the demo binary.
//!
//! Each mock records the calls made to it. Clones share the recording.

use crate::providers::{AuthService, GuestStorage, Navigator};
use crate::types::{GuestUser, Route};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Mock session store
#[derive(Debug, Clone, Default)]
pub struct MockAuthService {
    logged_in: Arc<AtomicBool>,
    logout_calls: Arc<AtomicUsize>,
}

impl MockAuthService {
    /// Session with a logged-in user
    #[must_use]
    pub fn logged_in() -> Self {
        let auth = Self::default();
        auth.set_logged_in(true);
        auth
    }

    /// Anonymous session
    #[must_use]
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// Simulate a login or an external logout
    pub fn set_logged_in(&self, logged_in: bool) {
        self.logged_in.store(logged_in, Ordering::SeqCst);
    }

    /// Number of `logout` calls
    #[must_use]
    pub fn logout_calls(&self) -> usize {
        self.logout_calls.load(Ordering::SeqCst)
    }
}

impl AuthService for MockAuthService {
    fn is_logged_in(&self) -> bool {
        self.logged_in.load(Ordering::SeqCst)
    }

    fn logout(&self) {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        self.logged_in.store(false, Ordering::SeqCst);
    }
}

/// Mock guest storage
#[derive(Debug, Clone, Default)]
pub struct MockGuestStorage {
    guest: Option<GuestUser>,
}

impl MockGuestStorage {
    /// A stored guest with `id`
    #[must_use]
    pub fn with_guest(id: impl Into<String>) -> Self {
        Self {
            guest: Some(GuestUser::new(id)),
        }
    }

    /// A stored guest record that was never issued an id
    #[must_use]
    pub fn without_id() -> Self {
        Self {
            guest: Some(GuestUser::default()),
        }
    }

    /// Nothing stored
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

impl GuestStorage for MockGuestStorage {
    fn guest_user(&self) -> Option<GuestUser> {
        self.guest.clone()
    }
}

/// Navigator that records pushed routes
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    routes: Arc<Mutex<Vec<Route>>>,
    sidebar_toggles: Arc<AtomicUsize>,
}

impl RecordingNavigator {
    /// Navigator with an empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes pushed so far, oldest first
    #[must_use]
    pub fn routes(&self) -> Vec<Route> {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of sidebar toggles
    #[must_use]
    pub fn sidebar_toggles(&self) -> usize {
        self.sidebar_toggles.load(Ordering::SeqCst)
    }
}

impl Navigator for RecordingNavigator {
    fn push(&self, route: Route) {
        tracing::debug!(%route, "Navigating");
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route);
    }

    fn toggle_sidebar(&self) {
        self.sidebar_toggles.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logout_clears_session() {
        let auth = MockAuthService::logged_in();
        assert!(auth.is_logged_in());

        auth.logout();
        assert!(!auth.is_logged_in());
        assert_eq!(auth.logout_calls(), 1);
    }

    #[test]
    fn navigator_clones_share_history() {
        let navigator = RecordingNavigator::new();
        navigator.clone().push(Route::Cart);
        assert_eq!(navigator.routes(), vec![Route::Cart]);
    }
}
