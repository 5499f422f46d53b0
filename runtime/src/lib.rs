//! # Tasklist Runtime
//!
//! Runtime implementation for reducer-driven applications.
//!
//! This crate provides the Store runtime that owns the single current state
//! value and coordinates reducer execution.
//!
//! ## Core Components
//!
//! - **Store**: The runtime that owns state and runs the reducer
//! - **State publication**: Every transition is published to state subscribers,
//!   which is how a rendering layer learns it has to redraw
//! - **Graceful shutdown**: New actions are rejected, in-flight ones drain
//!
//! ## Example
//!
//! ```ignore
//! use tasklist_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething).await?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tasklist_core::reducer::Reducer;
use tokio::sync::{RwLock, watch};

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions
        ///
        /// This error is returned when `send()` is called after shutdown initiated.
        #[error("Store is shutting down")]
        ShutdownInProgress,

        /// Shutdown timed out waiting for in-flight actions
        #[error("Shutdown timed out with {0} actions still in flight")]
        ShutdownTimeout(usize),
    }
}

pub use error::StoreError;

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use tasklist_runtime::StoreConfig;
///
/// let config = StoreConfig::default().with_shutdown_timeout(Duration::from_secs(5));
/// assert_eq!(config.shutdown_timeout, Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Default timeout for graceful shutdown
    pub shutdown_timeout: Duration,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(shutdown_timeout: Duration) -> Self {
        Self { shutdown_timeout }
    }

    /// Set the default shutdown timeout
    #[must_use]
    pub const fn with_shutdown_timeout(mut self, timeout: Duration) -> Self {
        self.shutdown_timeout = timeout;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            shutdown_timeout: Duration::from_secs(30),
        }
    }
}

/// Guard that decrements an atomic counter on drop (for shutdown tracking)
///
/// Keeps the in-flight count accurate even if the reducer panics.
struct AtomicCounterGuard(Arc<AtomicUsize>);

impl AtomicCounterGuard {
    fn enter(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(Arc::clone(counter))
    }
}

impl Drop for AtomicCounterGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Store runtime for coordinating reducer execution and state publication.
pub mod store {
    use super::{
        Arc, AtomicBool, AtomicCounterGuard, AtomicUsize, Duration, Ordering, Reducer, RwLock,
        StoreConfig, StoreError, watch,
    };

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`; replaced or updated only by the reducer)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. State publication to subscribers after every action
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: RwLock<S>,
        reducer: R,
        environment: E,
        config: StoreConfig,
        shutdown: AtomicBool,
        in_flight: Arc<AtomicUsize>,
        /// Latest state, republished after every reducer run.
        state_publisher: watch::Sender<S>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        S: Clone,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default()`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new store with custom configuration
        #[must_use]
        pub fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            let (state_publisher, _) = watch::channel(initial_state.clone());

            Self {
                state: RwLock::new(initial_state),
                reducer,
                environment,
                config,
                shutdown: AtomicBool::new(false),
                in_flight: Arc::new(AtomicUsize::new(0)),
                state_publisher,
            }
        }

        /// The configuration this store was built with
        #[must_use]
        pub const fn config(&self) -> &StoreConfig {
            &self.config
        }

        /// Number of `send` calls that have not finished yet
        #[must_use]
        pub fn in_flight(&self) -> usize {
            self.in_flight.load(Ordering::SeqCst)
        }

        /// Whether [`Store::shutdown`] has been called
        #[must_use]
        pub fn is_shutting_down(&self) -> bool {
            self.shutdown.load(Ordering::SeqCst)
        }

        /// Gracefully shut down the store
        ///
        /// New actions are rejected immediately; the call then waits for
        /// actions already inside [`Store::send`] to finish.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownTimeout`] if actions are still in
        /// flight when `timeout` elapses.
        pub async fn shutdown(&self, timeout: Duration) -> Result<(), StoreError> {
            tracing::info!("Initiating graceful shutdown");
            metrics::counter!("store.shutdown.initiated").increment(1);

            self.shutdown.store(true, Ordering::SeqCst);

            let start = std::time::Instant::now();
            let poll_interval = Duration::from_millis(10);

            loop {
                let pending = self.in_flight.load(Ordering::SeqCst);

                if pending == 0 {
                    tracing::info!("All actions drained, shutdown successful");
                    return Ok(());
                }

                if start.elapsed() >= timeout {
                    tracing::error!(
                        in_flight = pending,
                        "Shutdown timeout: {} actions still in flight", pending
                    );
                    metrics::counter!("store.shutdown.timeout").increment(1);
                    return Err(StoreError::ShutdownTimeout(pending));
                }

                tokio::time::sleep(poll_interval).await;
            }
        }

        /// Shut down using the configured default timeout
        ///
        /// # Errors
        ///
        /// See [`Store::shutdown`].
        pub async fn shutdown_default(&self) -> Result<(), StoreError> {
            self.shutdown(self.config.shutdown_timeout).await
        }

        /// Send an action to the store
        ///
        /// Runs the reducer to completion under the state write lock, then
        /// publishes the resulting state.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting down.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<(), StoreError> {
            // Counted before the shutdown check so a concurrent shutdown
            // either rejects this action or waits for it.
            let _in_flight = AtomicCounterGuard::enter(&self.in_flight);

            if self.shutdown.load(Ordering::SeqCst) {
                tracing::warn!("Rejected action: store is shutting down");
                metrics::counter!("store.shutdown.rejected_actions").increment(1);
                return Err(StoreError::ShutdownInProgress);
            }

            tracing::debug!("Processing action");
            metrics::counter!("store.actions.total").increment(1);

            let mut state = self.state.write().await;

            let start = std::time::Instant::now();
            self.reducer.reduce(&mut *state, action, &self.environment);
            metrics::histogram!("store.reducer.duration_seconds")
                .record(start.elapsed().as_secs_f64());

            // Published while the write lock is held so subscribers see
            // transitions in the order they were applied.
            self.state_publisher.send_replace(state.clone());

            Ok(())
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let task_count = store.state(|s| s.len()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&*state)
        }

        /// Clone of the current state value
        pub async fn snapshot(&self) -> S {
            self.state(S::clone).await
        }

        /// Subscribe to state changes
        ///
        /// The receiver starts at the current value and is notified after
        /// every action the reducer processes.
        #[must_use]
        pub fn subscribe_state(&self) -> watch::Receiver<S> {
            self.state_publisher.subscribe()
        }
    }
}

pub use store::Store;
