//! Reducer logic for the header.
//!
//! Query results only ever reach the state through `ProfileLoaded` and
//! `CartLoaded`, so the projection never sees an in-flight request.

use crate::actions::HeaderAction;
use crate::environment::HeaderEnvironment;
use crate::projection::project;
use crate::state::{HeaderState, SessionState};
use crate::types::{
    CART_QUERY, CartSummary, PROFILE_QUERY, ProfilePayload, Route, cart_query_key,
    profile_query_key,
};
use std::marker::PhantomData;
use storefront_core::query::{QueryClient, QueryState};
use storefront_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use storefront_runtime::metrics::QueryMetrics;

/// Reducer for the header
///
/// Generic over the query client so tests can inject a scripted one.
#[derive(Debug)]
pub struct HeaderReducer<Q> {
    _phantom: PhantomData<fn() -> Q>,
}

impl<Q> HeaderReducer<Q> {
    /// Creates a new `HeaderReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<Q> Default for HeaderReducer<Q> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q> Clone for HeaderReducer<Q> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<Q> HeaderReducer<Q>
where
    Q: QueryClient + Clone + 'static,
{
    /// Starts every query whose precondition holds
    ///
    /// Results of queries started earlier become stale.
    fn start_queries(
        state: &mut HeaderState,
        env: &HeaderEnvironment<Q>,
    ) -> SmallVec<[Effect<HeaderAction>; 4]> {
        state.bump_generation();
        state.logged_in = env.profile_query_enabled();
        let generation = state.query_generation;

        let mut effects = Vec::new();

        if state.logged_in {
            state.profile_query.start();
            effects.push(Self::fetch_profile(env, generation));
        }

        if env.cart_query_enabled() {
            state.cart_query.start();
            effects.push(Self::fetch_cart(env, generation));
        }

        tracing::debug!(
            logged_in = state.logged_in,
            generation,
            queries = effects.len(),
            "Starting header queries"
        );

        if effects.is_empty() {
            SmallVec::new()
        } else {
            smallvec![Effect::merge(effects)]
        }
    }

    fn fetch_profile(env: &HeaderEnvironment<Q>, generation: u64) -> Effect<HeaderAction> {
        let queries = env.queries.clone();
        Effect::future(async move {
            let key = profile_query_key();
            Some(match queries.fetch::<ProfilePayload>(&key).await {
                Ok(response) => {
                    QueryMetrics::record_success(PROFILE_QUERY);
                    HeaderAction::ProfileLoaded {
                        generation,
                        response,
                    }
                },
                Err(error) => {
                    QueryMetrics::record_failure(PROFILE_QUERY);
                    HeaderAction::ProfileFailed { generation, error }
                },
            })
        })
    }

    fn fetch_cart(env: &HeaderEnvironment<Q>, generation: u64) -> Effect<HeaderAction> {
        let queries = env.queries.clone();
        Effect::future(async move {
            let key = cart_query_key();
            Some(match queries.fetch::<CartSummary>(&key).await {
                Ok(response) => {
                    QueryMetrics::record_success(CART_QUERY);
                    HeaderAction::CartLoaded {
                        generation,
                        response,
                    }
                },
                Err(error) => {
                    QueryMetrics::record_failure(CART_QUERY);
                    HeaderAction::CartFailed { generation, error }
                },
            })
        })
    }

    fn navigate(env: &HeaderEnvironment<Q>, route: Route) -> SmallVec<[Effect<HeaderAction>; 4]> {
        let navigator = env.navigator.clone();
        smallvec![Effect::future(async move {
            navigator.push(route);
            None
        })]
    }

    /// Logout, evict the cached cart, then report completion
    fn sign_out(env: &HeaderEnvironment<Q>) -> Effect<HeaderAction> {
        let auth = env.auth.clone();
        let queries = env.queries.clone();
        Effect::chain(vec![
            Effect::future(async move {
                auth.logout();
                None
            }),
            Effect::future(async move {
                let key = cart_query_key();
                queries.invalidate(&key);
                QueryMetrics::record_invalidation(key.as_str());
                None
            }),
            Effect::future(async { Some(HeaderAction::SignedOut) }),
        ])
    }
}

impl<Q> Reducer for HeaderReducer<Q>
where
    Q: QueryClient + Clone + 'static,
{
    type State = HeaderState;
    type Action = HeaderAction;
    type Environment = HeaderEnvironment<Q>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Lifecycle ==========
            HeaderAction::Mounted => {
                *state = HeaderState {
                    mounted: true,
                    query_generation: state.query_generation,
                    ..HeaderState::default()
                };
                Self::start_queries(state, env)
            },
            HeaderAction::Refresh => {
                if !state.mounted {
                    return SmallVec::new();
                }
                Self::start_queries(state, env)
            },
            HeaderAction::Unmounted => {
                *state = HeaderState {
                    query_generation: state.query_generation,
                    ..HeaderState::default()
                };
                state.bump_generation();
                SmallVec::new()
            },

            // ========== Query results ==========
            HeaderAction::ProfileLoaded {
                generation,
                response,
            } => {
                if !state.accepts(generation) {
                    tracing::debug!(generation, "Dropped stale profile result");
                    return SmallVec::new();
                }
                state.profile_query.succeed(env.clock.now());

                if let Some(payload) = response.into_data() {
                    state.session = project(&payload, &env.config);
                    tracing::debug!(user_id = %state.session.id, "Projected profile");
                } else {
                    tracing::debug!("Profile response carried no data");
                }
                SmallVec::new()
            },
            HeaderAction::ProfileFailed { generation, error } => {
                if !state.accepts(generation) {
                    return SmallVec::new();
                }
                tracing::debug!(%error, "Profile query failed");
                state.profile_query.fail();
                SmallVec::new()
            },
            HeaderAction::CartLoaded {
                generation,
                response,
            } => {
                if !state.accepts(generation) {
                    tracing::debug!(generation, "Dropped stale cart result");
                    return SmallVec::new();
                }
                state.cart_query.succeed(env.clock.now());
                state.cart = response.into_data();
                SmallVec::new()
            },
            HeaderAction::CartFailed { generation, error } => {
                if !state.accepts(generation) {
                    return SmallVec::new();
                }
                tracing::debug!(%error, "Cart query failed");
                state.cart_query.fail();
                SmallVec::new()
            },

            // ========== User interaction ==========
            HeaderAction::LogoClicked => {
                // Session read at click time, not the snapshot in state
                let auth = env.auth.clone();
                let navigator = env.navigator.clone();
                smallvec![Effect::future(async move {
                    navigator.push(if auth.is_logged_in() {
                        Route::OrderList
                    } else {
                        Route::Home
                    });
                    None
                })]
            },
            HeaderAction::CartClicked => Self::navigate(env, Route::Cart),
            HeaderAction::ProfileClicked => Self::navigate(env, Route::Profile),
            HeaderAction::LogInClicked => Self::navigate(env, Route::Login),
            HeaderAction::SidebarToggled => {
                let navigator = env.navigator.clone();
                smallvec![Effect::future(async move {
                    navigator.toggle_sidebar();
                    None
                })]
            },
            HeaderAction::SignOutClicked => {
                if state.signing_out {
                    return SmallVec::new();
                }
                tracing::debug!("Signing out");
                state.signing_out = true;
                smallvec![Self::sign_out(env)]
            },

            // ========== Effect results ==========
            HeaderAction::SignedOut => {
                state.signing_out = false;
                state.logged_in = false;
                state.session = SessionState::default();
                state.cart = None;
                state.profile_query = QueryState::default();
                state.cart_query = QueryState::default();
                state.bump_generation();
                SmallVec::new()
            },
        }
    }
}
