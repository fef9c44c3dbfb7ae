//! # Storefront Core
//!
//! Core traits and types for the storefront header.
//!
//! The header is written as a small state machine driven by a reducer:
//!
//! - **State**: what the header currently displays
//! - **Action**: every input (user clicks, query results, lifecycle)
//! - **Reducer**: pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: description of a side effect, executed by the runtime
//! - **Environment**: injected collaborators (query client, session, router)
//!
//! ## Example
//!
//! ```ignore
//! use storefront_core::{effect::Effect, reducer::Reducer, SmallVec};
//!
//! impl Reducer for BadgeReducer {
//!     type State = BadgeState;
//!     type Action = BadgeAction;
//!     type Environment = BadgeEnvironment;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut BadgeState,
//!         action: BadgeAction,
//!         env: &BadgeEnvironment,
//!     ) -> SmallVec<[Effect<BadgeAction>; 4]> {
//!         SmallVec::new()
//!     }
//! }
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use smallvec::{SmallVec, smallvec};

/// Cached query capability (`fetch` by key, explicit `invalidate`)
pub mod query;

/// The [`Reducer`](reducer::Reducer) trait
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// Feature logic: folds an action into the state and describes the
    /// side effects that should follow
    pub trait Reducer {
        /// Feature state
        type State;

        /// Inputs, including the results of earlier effects
        type Action;

        /// Injected collaborators
        type Environment;

        /// Apply `action` to `state` in place and return the effects to run.
        ///
        /// Must not perform I/O itself; anything observable goes into an
        /// effect. Effects are returned inline since most actions produce at
        /// most one.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Side effect descriptions returned by reducers
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;

    /// A side effect for the runtime to execute.
    ///
    /// Futures may resolve to an `Action`, which the runtime feeds back into
    /// the reducer.
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Run effects in parallel
        Parallel(Vec<Effect<Action>>),

        /// Run effects sequentially
        Sequential(Vec<Effect<Action>>),

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if Some, the action is fed back into the reducer
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    // Futures are opaque
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Parallel(effects) => {
                    f.debug_tuple("Effect::Parallel").field(effects).finish()
                },
                Effect::Sequential(effects) => {
                    f.debug_tuple("Effect::Sequential").field(effects).finish()
                },
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Combine effects to run in parallel
        #[must_use]
        pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Parallel(effects)
        }

        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Sequential(effects)
        }

        /// Wrap a future that produces an optional follow-up action
        #[must_use]
        pub fn future<F>(fut: F) -> Effect<Action>
        where
            F: Future<Output = Option<Action>> + Send + 'static,
        {
            Effect::Future(Box::pin(fut))
        }

        /// Whether this effect does nothing when executed
        #[must_use]
        pub fn is_none(&self) -> bool {
            match self {
                Effect::None => true,
                Effect::Parallel(effects) | Effect::Sequential(effects) => {
                    effects.iter().all(Effect::is_none)
                },
                Effect::Future(_) => false,
            }
        }
    }
}

/// Collaborators shared by every feature
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Time source, used to stamp when a query result was last received
    pub trait Clock: Send + Sync {
        /// Current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// System clock backed by [`Utc::now`]
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::effect::Effect;

    #[test]
    fn none_effects_are_detected_through_composition() {
        let nested: Effect<()> =
            Effect::merge(vec![Effect::None, Effect::chain(vec![Effect::None])]);
        assert!(nested.is_none());

        let with_future: Effect<()> =
            Effect::merge(vec![Effect::None, Effect::future(async { None })]);
        assert!(!with_future.is_none());
    }

    #[test]
    fn debug_hides_future_body() {
        let effect: Effect<()> = Effect::future(async { None });
        assert_eq!(format!("{effect:?}"), "Effect::Future(<future>)");
    }
}
