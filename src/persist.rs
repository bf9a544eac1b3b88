//! Saved-entry persistence — keyed lists of `(path, group)` records plus
//! the known-key index.
//!
//! Wire format: each entry is one JSON string (`{"path":"...","group":1}`)
//! and a key's value is the array of those strings. The index of every
//! key that has been saved lives under a reserved store key so `clear`
//! can find them all without the store supporting key enumeration.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::host::EditorHost;
use crate::store::KeyValueStore;
use crate::view::View;

/// Reserved store key holding the list of every saved set key.
pub const KNOWN_KEYS_KEY: &str = "restore-editors:known-keys";

/// The persisted record for one document-backed view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedEntry {
    /// Absolute document location.
    pub path: String,
    /// Positional group index, omitted from the encoding when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<u32>,
}

impl SavedEntry {
    /// Build an entry from a view, or `None` for documentless panes.
    fn from_view(view: &View) -> Option<Self> {
        view.document.clone().map(|path| Self {
            path,
            group: view.group,
        })
    }
}

/// A decoded entry that knows how to reopen its document in the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restorable {
    entry: SavedEntry,
}

impl Restorable {
    pub fn entry(&self) -> &SavedEntry {
        &self.entry
    }

    /// Ask the host to reopen this entry's document at its saved group,
    /// awaiting completion so callers can open sequentially.
    pub async fn open<H: EditorHost>(&self, host: &mut H) -> Result<(), Error> {
        host.open(&self.entry.path, self.entry.group).await
    }
}

impl From<SavedEntry> for Restorable {
    fn from(entry: SavedEntry) -> Self {
        Self { entry }
    }
}

/// Persist the document-backed subset of `views` under `key`, replacing
/// any previous list, and register `key` in the known-key index.
pub fn save_entries<S: KeyValueStore>(
    store: &mut S,
    key: &str,
    views: &[View],
) -> Result<(), Error> {
    let mut encoded = Vec::new();
    for view in views {
        let Some(entry) = SavedEntry::from_view(view) else {
            continue;
        };
        encoded.push(serde_json::to_string(&entry)?);
    }

    tracing::debug!(key = %key, count = encoded.len(), "persisting editor set");
    store.put(key, encoded)?;

    let mut known = store.get(KNOWN_KEYS_KEY)?.unwrap_or_default();
    if !known.iter().any(|k| k == key) {
        tracing::debug!(key = %key, "registering new set key");
        known.push(key.to_owned());
        store.put(KNOWN_KEYS_KEY, known)?;
    }

    Ok(())
}

/// Load the entries saved under `key`, in saved order.
///
/// An unknown key yields an empty list. A record that fails to decode is
/// skipped with a warning rather than failing the whole read, so one
/// corrupt entry cannot make an entire saved set unreachable.
pub fn load<S: KeyValueStore>(store: &S, key: &str) -> Result<Vec<Restorable>, Error> {
    let Some(records) = store.get(key)? else {
        return Ok(Vec::new());
    };

    let mut entries = Vec::with_capacity(records.len());
    for record in &records {
        match serde_json::from_str::<SavedEntry>(record) {
            Ok(entry) => entries.push(entry.into()),
            Err(e) => {
                tracing::warn!(key = %key, record = %record, error = %e, "skipping malformed saved entry");
            }
        }
    }

    Ok(entries)
}

/// Delete every saved list named by the known-key index, then the index
/// itself. Calling this with nothing saved is a no-op.
pub fn clear_all<S: KeyValueStore>(store: &mut S) -> Result<(), Error> {
    let known = store.get(KNOWN_KEYS_KEY)?.unwrap_or_default();
    tracing::debug!(count = known.len(), "clearing saved editor sets");

    for key in &known {
        store.remove(key)?;
    }
    store.remove(KNOWN_KEYS_KEY)?;

    Ok(())
}
