//! # Tasklist Core
//!
//! Core traits for reducer-driven applications.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature, owned by the runtime
//! - **Action**: All possible inputs to a reducer
//! - **Reducer**: Pure transition `(State, Action, Environment) → State`
//! - **Environment**: Injected dependencies via traits
//!
//! ## Example
//!
//! ```
//! use tasklist_core::reducer::Reducer;
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut CounterState, action: CounterAction, _env: &()) {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!         }
//!     }
//! }
//!
//! let mut state = CounterState::default();
//! CounterReducer.reduce(&mut state, CounterAction::Increment, &());
//! assert_eq!(state.count, 1);
//! ```

/// Reducer module - The core trait for business logic
///
/// Reducers are deterministic given their environment. They never perform
/// I/O; anything non-deterministic (ids, time) comes in through the
/// environment.
pub mod reducer {
    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into the next state
        ///
        /// # Arguments
        ///
        /// - `state`: The current state, replaced or updated in place
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment);
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter.
pub mod environment {
    use uuid::Uuid;

    /// `IdGenerator` trait - abstracts identity allocation for testability
    ///
    /// Every call must return an id never returned before by the same
    /// generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use tasklist_core::environment::{IdGenerator, UuidGenerator};
    ///
    /// let ids = UuidGenerator;
    /// assert_ne!(ids.next_id(), ids.next_id());
    /// ```
    pub trait IdGenerator: Send + Sync {
        /// Allocate a fresh identifier
        fn next_id(&self) -> String;
    }

    /// Production id generator backed by random v4 UUIDs
    #[derive(Debug, Clone, Copy, Default)]
    pub struct UuidGenerator;

    impl IdGenerator for UuidGenerator {
        fn next_id(&self) -> String {
            Uuid::new_v4().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::environment::{IdGenerator, UuidGenerator};
    use super::reducer::Reducer;
    use std::collections::HashSet;

    struct Append;

    impl Reducer for Append {
        type State = Vec<String>;
        type Action = &'static str;
        type Environment = UuidGenerator;

        fn reduce(&self, state: &mut Vec<String>, action: &'static str, env: &UuidGenerator) {
            state.push(format!("{action}:{}", env.next_id()));
        }
    }

    #[test]
    fn test_uuid_generator_produces_distinct_ids() {
        let ids = UuidGenerator;
        let generated: HashSet<String> = (0..100).map(|_| ids.next_id()).collect();
        assert_eq!(generated.len(), 100);
    }

    #[test]
    fn test_reducer_draws_ids_from_environment() {
        let mut state = Vec::new();
        Append.reduce(&mut state, "a", &UuidGenerator);
        Append.reduce(&mut state, "b", &UuidGenerator);

        assert_eq!(state.len(), 2);
        assert!(state[0].starts_with("a:"));
        assert_ne!(state[0][2..], state[1][2..]);
    }
}
