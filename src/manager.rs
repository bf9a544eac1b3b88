//! EditorSetManager — the coordinating owner of capture, persistence,
//! and restore.
//!
//! The manager is the crate's error boundary: every public operation is
//! best-effort, logging failures instead of returning them. A failed
//! restore may leave a partially opened set and a failed save leaves the
//! previously persisted state untouched. Concurrent calls against the
//! same key are unsupported; one logical caller owns a key at a time.

use crate::config::ManagerConfig;
use crate::discover::{DISCOVERY_STEP_TIMEOUT, discover};
use crate::error::Error;
use crate::host::EditorHost;
use crate::persist::{self, Restorable};
use crate::store::KeyValueStore;
use crate::view::MatchCriteria;

/// Saves and restores sets of open editors keyed by an arbitrary string,
/// typically a version-control branch name.
pub struct EditorSetManager<H, S> {
    host: H,
    store: S,
    config: ManagerConfig,
}

impl<H: EditorHost, S: KeyValueStore> EditorSetManager<H, S> {
    pub fn new(host: H, store: S, config: ManagerConfig) -> Self {
        Self {
            host,
            store,
            config,
        }
    }

    /// Capture the currently open views and persist them under `key`,
    /// replacing whatever was saved there before.
    ///
    /// Cycling the focus to enumerate views is non-destructive: the view
    /// that was active when the call started is active again when it
    /// returns. Errors are logged and swallowed; on failure the prior
    /// saved state for `key` is left intact.
    pub async fn save(&mut self, key: &str) {
        if let Err(e) = self.try_save(key).await {
            tracing::error!(key = %key, error = %e, "save failed");
        }
    }

    async fn try_save(&mut self, key: &str) -> Result<(), Error> {
        let views = discover(
            &mut self.host,
            MatchCriteria::IDENTITY_AND_GROUP,
            DISCOVERY_STEP_TIMEOUT,
        )
        .await?;

        // Put the user's focus back on the view the walk started from.
        if let Some(anchor) = views.first() {
            self.host.activate(anchor).await?;
        }

        tracing::info!(key = %key, count = views.len(), "saving editor set");
        persist::save_entries(&mut self.store, key, &views)
    }

    /// The entries saved under `key`, in saved order. Empty when the key
    /// is unknown or the store read fails.
    pub fn get(&self, key: &str) -> Vec<Restorable> {
        match persist::load(&self.store, key) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::error!(key = %key, error = %e, "get failed");
                Vec::new()
            }
        }
    }

    /// Replace the open views with the set saved under `key`.
    ///
    /// Closes all current views first, unless the saved set is empty and
    /// the preserve-on-empty option is enabled. Entries open strictly in
    /// saved order, each awaited before the next, so the final focus
    /// lands on the last saved entry. Errors are logged and swallowed; a
    /// failure mid-restore leaves the set partially opened.
    pub async fn restore(&mut self, key: &str) {
        if let Err(e) = self.try_restore(key).await {
            tracing::error!(key = %key, error = %e, "restore failed");
        }
    }

    async fn try_restore(&mut self, key: &str) -> Result<(), Error> {
        let entries = persist::load(&self.store, key)?;
        tracing::info!(key = %key, count = entries.len(), "restoring editor set");

        let keep_open = self.config.preserve_views_on_empty_set && entries.is_empty();
        if !keep_open {
            self.host.close_all().await?;
        }

        for entry in &entries {
            entry.open(&mut self.host).await?;
        }

        Ok(())
    }

    /// Delete every saved set and forget every known key. Errors are
    /// logged and swallowed; calling with nothing saved is a no-op.
    pub async fn clear(&mut self) {
        if let Err(e) = persist::clear_all(&mut self.store) {
            tracing::error!(error = %e, "clear failed");
        }
    }
}
