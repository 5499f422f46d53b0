//! A todo list driven by a pure reducer.
//!
//! Tasks can be added, deleted and toggled. Every transition is computed by
//! [`TaskReducer::apply`] from the current [`TaskList`] value and returns a
//! new value; the [`Store`](tasklist_runtime::Store) owns the current one and
//! publishes each transition to subscribers.
//!
//! - Misses (delete or toggle of an unknown id) are no-ops that return the
//!   very same list value
//! - An unknown action kind at the wire boundary is a hard error
//!   ([`TaskError::UnrecognizedAction`])
//!
//! # Quick Start
//!
//! ```no_run
//! use tasklist::{TaskAction, TaskEnvironment, TaskList, TaskReducer};
//! use tasklist_runtime::Store;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Store::new(TaskList::new(), TaskReducer::new(), TaskEnvironment::production());
//!
//! store.send(TaskAction::add("Buy milk")).await?;
//! let id = store.state(|list| list.last().map(|task| task.id.clone())).await;
//!
//! if let Some(id) = id {
//!     store.send(TaskAction::toggle(id)).await?;
//! }
//!
//! let list = store.snapshot().await;
//! println!("Completed: {}/{}", list.completed_count(), list.len());
//! # Ok(())
//! # }
//! ```

pub mod action;
pub mod config;
pub mod error;
pub mod host;
pub mod reducer;
pub mod render;
pub mod types;

// Re-export commonly used types
pub use action::{decode_json, encode_json, parse_command, RawAction, TaskAction};
pub use config::{Config, InputFormat};
pub use error::{HostError, TaskError};
pub use reducer::{TaskEnvironment, TaskReducer};
pub use types::{Task, TaskId, TaskList};
