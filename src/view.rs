//! View handles and the equality predicate used for cycle detection.
//!
//! A [`View`] is a transient handle to one open editor pane in the host.
//! The crate never owns a view beyond a single discovery run; the host
//! hands them out and may invalidate them at any time afterwards.

/// One open editor/document pane in the hosting environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    /// Host-assigned identity token. Stable across focus changes for the
    /// same underlying pane instance.
    pub id: String,
    /// Absolute path of the backing document, or `None` for non-file
    /// panes (settings screens, diff viewers, ...).
    pub document: Option<String>,
    /// Positional group index ("view column"). Positive when present.
    pub group: Option<u32>,
}

impl View {
    /// Whether this view is backed by a document on disk.
    ///
    /// Views without a document still occupy a position in the host's
    /// focus cycle, so discovery keeps them; only persistence drops them.
    pub fn has_document(&self) -> bool {
        self.document.is_some()
    }
}

/// Which criteria [`views_equal`] applies.
///
/// Discovery uses both: matching on identity alone would conflate the
/// same document reopened in a different group with the original pane
/// and terminate the cycle walk early.
#[derive(Debug, Clone, Copy)]
pub struct MatchCriteria {
    /// Compare host identity tokens.
    pub use_identity: bool,
    /// Compare group indices.
    pub use_group: bool,
}

impl MatchCriteria {
    /// Identity token AND group index — the discovery criterion.
    pub const IDENTITY_AND_GROUP: Self = Self {
        use_identity: true,
        use_group: true,
    };
}

/// Compare two views under the given criteria.
///
/// Each enabled criterion must hold for the views to be equal; with no
/// criteria enabled every pair compares equal.
pub fn views_equal(a: &View, b: &View, criteria: MatchCriteria) -> bool {
    if criteria.use_identity && a.id != b.id {
        return false;
    }
    if criteria.use_group && a.group != b.group {
        return false;
    }
    true
}
