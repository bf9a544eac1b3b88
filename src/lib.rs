//! Save and restore sets of open editor views under string keys.
//!
//! The hosting environment exposes no direct "list all open views"
//! query, only the active view, an "advance to the next view" command,
//! and an active-view-changed notification. [`discover`] reconstructs
//! the full open-view set from those three primitives with bounded
//! waiting and cycle detection; [`EditorSetManager`] wires discovery to
//! a durable keyed store and a reopen policy, exposing best-effort
//! `save`, `get`, `restore`, and `clear` operations.
//!
//! The host's primitives arrive through two injected traits:
//! [`EditorHost`] for view cycling and open/close commands, and
//! [`KeyValueStore`] for the durable string → string-array map. Command
//! dispatch, selection UI, configuration loading, and logging setup stay
//! with the embedder.

pub mod config;
pub mod discover;
pub mod error;
pub mod host;
pub mod manager;
pub mod persist;
pub mod store;
pub mod view;

pub use config::ManagerConfig;
pub use discover::{DISCOVERY_STEP_TIMEOUT, discover};
pub use error::Error;
pub use host::EditorHost;
pub use manager::EditorSetManager;
pub use persist::{Restorable, SavedEntry};
pub use store::{KeyValueStore, MemoryStore};
pub use view::{MatchCriteria, View, views_equal};
