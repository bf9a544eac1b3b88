//! Manager configuration.
//!
//! Loading values from the host's configuration surface is the caller's
//! job; the manager only consumes the resolved struct.

use serde::{Deserialize, Serialize};

/// Behavior switches for [`EditorSetManager`](crate::EditorSetManager).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerConfig {
    /// When restoring a key whose saved set is empty, leave the
    /// currently open views untouched instead of closing them all.
    pub preserve_views_on_empty_set: bool,
}
