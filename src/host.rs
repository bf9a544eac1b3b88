//! EditorHost trait — the view-cycling, open, and close primitives.
//!
//! The hosting environment exposes no "list all open views" query, only
//! the active view, a command to advance to the next view, and a change
//! notification. This trait captures exactly those primitives (plus the
//! open/close commands restore needs) so the discovery algorithm and the
//! manager can be driven against a fake host in tests.

use crate::error::Error;
use crate::view::View;

/// Host primitives consumed by the capture/restore pipeline.
///
/// All operations run on one logical caller; implementations are awaited
/// sequentially and never raced against each other.
#[allow(async_fn_in_trait)]
pub trait EditorHost {
    /// The currently active view, if any.
    fn active_view(&self) -> Option<View>;

    /// Issue the host's "advance to the next view" command.
    async fn advance(&mut self) -> Result<(), Error>;

    /// Await the next active-view-changed notification.
    ///
    /// Returns `None` when the notification carries no view (nothing is
    /// active anymore) or the notification stream has ended. Callers
    /// bound this wait with their own timeout; the host side never
    /// times out on its own.
    async fn changed(&mut self) -> Option<View>;

    /// Give `view` the focus. Best-effort; used to put the user's
    /// original view back after a discovery run.
    async fn activate(&mut self, view: &View) -> Result<(), Error>;

    /// Open the document at `path`, placing it in `group` when given,
    /// and focus it. Resolves once the host has finished opening.
    async fn open(&mut self, path: &str, group: Option<u32>) -> Result<(), Error>;

    /// Issue the host's "close all views" command and await completion.
    async fn close_all(&mut self) -> Result<(), Error>;
}
