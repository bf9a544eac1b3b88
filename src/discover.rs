//! Open-view discovery — focus cycling with cycle detection.
//!
//! The host cannot enumerate its open views directly, so discovery
//! reconstructs the set by repeatedly advancing the active view and
//! observing the change notification, bounded per step by a timeout.
//! The walk terminates when the anchor (the view that was active when
//! the walk started) comes back around, when an already-seen view
//! reappears (a shorter cycle), or when no notification arrives in time
//! (the set is exhausted or the current view refuses to cycle away).

use std::time::Duration;

use tokio::time::timeout;

use crate::error::Error;
use crate::host::EditorHost;
use crate::view::{MatchCriteria, View, views_equal};

/// How long each discovery step waits for a change notification before
/// concluding that there is no further distinct view.
pub const DISCOVERY_STEP_TIMEOUT: Duration = Duration::from_millis(500);

/// Walk the host's focus cycle and return every open view, anchor first,
/// in cycling order.
///
/// Returns an empty list when no view is active. Views without a backing
/// document are included — they occupy a cycle position and must be
/// stepped over, not treated as termination; persistence filters them
/// out later. Each call re-probes live host state; results are not
/// cached. The walk leaves focus wherever it stopped — callers that need
/// the original focus back activate the anchor afterwards.
pub async fn discover<H: EditorHost>(
    host: &mut H,
    criteria: MatchCriteria,
    step_timeout: Duration,
) -> Result<Vec<View>, Error> {
    let Some(anchor) = host.active_view() else {
        tracing::debug!("discover: no active view, nothing to capture");
        return Ok(Vec::new());
    };

    let mut found = vec![anchor.clone()];

    loop {
        host.advance().await?;

        let next = match timeout(step_timeout, host.changed()).await {
            // No notification in time: the set is exhausted or the last
            // view is not cycling away.
            Err(_) => {
                tracing::debug!(seen = found.len(), "discover: step timed out, stopping");
                break;
            }
            // A notification with no view to compare against also ends
            // the walk.
            Ok(None) => {
                tracing::debug!(seen = found.len(), "discover: no active view reported");
                break;
            }
            Ok(Some(view)) => view,
        };

        if views_equal(&next, &anchor, criteria) {
            // Full cycle completed.
            break;
        }
        if found.iter().any(|seen| views_equal(seen, &next, criteria)) {
            tracing::debug!(id = %next.id, "discover: shorter cycle detected, stopping");
            break;
        }

        found.push(next);
    }

    tracing::debug!(count = found.len(), "discover: walk complete");
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::fake::FakeHost;

    fn view(id: &str, path: Option<&str>, group: Option<u32>) -> View {
        View {
            id: id.into(),
            document: path.map(str::to_owned),
            group,
        }
    }

    const STEP: Duration = Duration::from_millis(50);

    #[tokio::test]
    async fn no_active_view_yields_empty() {
        let mut host = FakeHost::new(vec![]);
        let found = discover(&mut host, MatchCriteria::IDENTITY_AND_GROUP, STEP)
            .await
            .unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn single_view_yields_itself_once() {
        let only = view("v1", Some("/proj/c.ts"), Some(1));
        let mut host = FakeHost::new(vec![only.clone()]);
        let found = discover(&mut host, MatchCriteria::IDENTITY_AND_GROUP, STEP)
            .await
            .unwrap();
        assert_eq!(found, vec![only]);
    }

    #[tokio::test]
    async fn full_cycle_returns_views_anchor_first() {
        let ring = vec![
            view("v1", Some("/proj/a.ts"), Some(1)),
            view("v2", Some("/proj/b.ts"), Some(2)),
            view("v3", None, Some(1)), // settings pane, no document
        ];
        let mut host = FakeHost::new(ring.clone());
        let found = discover(&mut host, MatchCriteria::IDENTITY_AND_GROUP, STEP)
            .await
            .unwrap();
        // All three come back in cycling order, documentless pane included.
        assert_eq!(found, ring);
        // The full cycle ends with the anchor active again.
        assert_eq!(host.active_view().unwrap().id, "v1");
    }

    #[tokio::test(start_paused = true)]
    async fn silent_view_stops_the_walk_via_timeout() {
        let ring = vec![
            view("v1", Some("/proj/a.ts"), Some(1)),
            view("v2", Some("/proj/b.ts"), Some(1)),
        ];
        // v2 ignores the advance command, so its step never notifies.
        let mut host = FakeHost::new(ring.clone()).silent_at(1);
        let found = discover(&mut host, MatchCriteria::IDENTITY_AND_GROUP, STEP)
            .await
            .unwrap();
        assert_eq!(found, ring);
    }

    #[tokio::test]
    async fn shorter_cycle_stops_without_appending() {
        // The ring revisits v2 before ever returning to the anchor.
        let a = view("v1", Some("/proj/a.ts"), Some(1));
        let b = view("v2", Some("/proj/b.ts"), Some(2));
        let c = view("v3", Some("/proj/c.ts"), Some(1));
        let mut host = FakeHost::new(vec![a.clone(), b.clone(), c.clone(), b.clone()]);
        let found = discover(&mut host, MatchCriteria::IDENTITY_AND_GROUP, STEP)
            .await
            .unwrap();
        assert_eq!(found, vec![a, b, c]);
    }

    #[tokio::test]
    async fn same_document_in_two_groups_counts_twice() {
        let left = view("v1", Some("/proj/a.ts"), Some(1));
        let right = view("v1", Some("/proj/a.ts"), Some(2));
        let mut host = FakeHost::new(vec![left.clone(), right.clone()]);
        let found = discover(&mut host, MatchCriteria::IDENTITY_AND_GROUP, STEP)
            .await
            .unwrap();
        assert_eq!(found, vec![left, right]);
    }

    #[tokio::test]
    async fn empty_notification_stops_the_walk() {
        let ring = vec![
            view("v1", Some("/proj/a.ts"), Some(1)),
            view("v2", Some("/proj/b.ts"), Some(1)),
        ];
        let mut host = FakeHost::new(ring.clone());
        // A notification with no view arrives ahead of the advance's.
        host.notify_none();
        let found = discover(&mut host, MatchCriteria::IDENTITY_AND_GROUP, STEP)
            .await
            .unwrap();
        assert_eq!(found, vec![ring[0].clone()]);
    }

    #[tokio::test]
    async fn advance_failure_propagates() {
        let ring = vec![view("v1", Some("/proj/a.ts"), Some(1))];
        let mut host = FakeHost::new(ring).failing_advance();
        let result = discover(&mut host, MatchCriteria::IDENTITY_AND_GROUP, STEP).await;
        assert!(matches!(result, Err(Error::Host(_))));
    }
}
