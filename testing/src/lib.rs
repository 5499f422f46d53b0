//! # Tasklist Testing
//!
//! Testing utilities and helpers for reducer-driven applications.
//!
//! This crate provides:
//! - Deterministic implementations of Environment traits
//! - A Given-When-Then builder for reducers ([`ReducerTest`])
//!
//! ## Example
//!
//! ```ignore
//! use tasklist_testing::{ReducerTest, SequentialIdGenerator};
//!
//! ReducerTest::new(TaskReducer::new())
//!     .with_env(TaskEnvironment::new(Arc::new(SequentialIdGenerator::new())))
//!     .given_state(TaskList::new())
//!     .when_action(TaskAction::Add { name: "Buy milk".into() })
//!     .then_state(|list| assert_eq!(list.len(), 1))
//!     .run();
//! ```


/// Mock implementations of Environment traits
pub mod mocks {
    use std::sync::atomic::{AtomicU64, Ordering};
    use tasklist_core::environment::IdGenerator;

    /// Predictable id generator: `task-1`, `task-2`, ...
    ///
    /// # Example
    ///
    /// ```
    /// use tasklist_core::environment::IdGenerator;
    /// use tasklist_testing::mocks::SequentialIdGenerator;
    ///
    /// let ids = SequentialIdGenerator::new();
    /// assert_eq!(ids.next_id(), "task-1");
    /// assert_eq!(ids.next_id(), "task-2");
    /// ```
    #[derive(Debug)]
    pub struct SequentialIdGenerator {
        next: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Create a generator producing `task-1`, `task-2`, ...
        #[must_use]
        pub const fn new() -> Self {
            Self {
                next: AtomicU64::new(1),
            }
        }
    }

    impl Default for SequentialIdGenerator {
        fn default() -> Self {
            Self::new()
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> String {
            let n = self.next.fetch_add(1, Ordering::SeqCst);
            format!("task-{n}")
        }
    }
}

// Re-export commonly used items
pub use mocks::SequentialIdGenerator;
pub use reducer_test::ReducerTest;
