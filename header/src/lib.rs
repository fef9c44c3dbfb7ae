//! # Storefront Header
//!
//! The storefront's top bar: branding, a cart badge and either an account
//! menu (signed-in customers) or a login button (guests).
//!
//! The header is a reducer-driven state machine:
//!
//! - `Mounted` starts the profile query (when logged in) and the cart query
//!   (when logged in or holding a guest cart)
//! - query results come back as `ProfileLoaded`/`CartLoaded` actions; a
//!   profile payload is projected into [`SessionState`] in one replacement
//! - [`render`] turns the state into a [`HeaderView`] for the caller's
//!   [`HeaderMode`]
//! - `SignOutClicked` logs out and evicts the cached cart entry
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use storefront_core::environment::SystemClock;
//! use storefront_header::mocks::{MockAuthService, MockGuestStorage, RecordingNavigator};
//! use storefront_header::{
//!     render, HeaderAction, HeaderConfig, HeaderEnvironment, HeaderMode, HeaderReducer,
//!     HeaderState,
//! };
//! use storefront_runtime::Store;
//! use storefront_testing::MockQueryClient;
//!
//! # async fn example() -> Result<(), storefront_runtime::StoreError> {
//! let config = HeaderConfig::from_env();
//! let env = HeaderEnvironment::new(
//!     Arc::new(MockAuthService::logged_out()),
//!     Arc::new(MockGuestStorage::with_guest("guest-1")),
//!     MockQueryClient::new(),
//!     Arc::new(RecordingNavigator::new()),
//!     Arc::new(SystemClock),
//!     config.clone(),
//! );
//! let store = Store::new(HeaderState::default(), HeaderReducer::new(), env);
//!
//! store.send(HeaderAction::Mounted).await?.wait().await;
//! let view = store.state(|s| render(s, HeaderMode::Guest, &config)).await;
//! assert!(view.login_button().is_some());
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod badge;
pub mod config;
pub mod environment;
pub mod mocks;
pub mod projection;
pub mod providers;
pub mod reducer;
pub mod state;
pub mod types;
pub mod view;

pub use actions::HeaderAction;
pub use badge::CartBadge;
pub use config::HeaderConfig;
pub use environment::HeaderEnvironment;
pub use projection::project;
pub use providers::{AuthService, GuestStorage, Navigator};
pub use reducer::HeaderReducer;
pub use state::{HeaderState, SessionState};
pub use types::{CartSummary, GuestUser, HeaderMode, ProfilePayload, Route};
pub use view::{HeaderView, render};
