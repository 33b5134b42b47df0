// Eviction policy: which awake documents must hibernate, and when.
//
// Two independent triggers. Capacity eviction runs after every document open
// and hibernates least-recently-used documents down to the cap. Age eviction
// runs when a workspace becomes active (and on explicit host-driven sweeps)
// and hibernates documents idle past the workspace threshold. Both are
// deterministic functions of the workspace and an explicit `now`.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use mosaic_common::types::Workspace;
use mosaic_common::DocumentId;

use crate::lifecycle;

/// Hibernate the least-recently-used awake documents until at most
/// `max_open` remain awake. Exactly the excess count is hibernated, never
/// more. Ties on `last_modified` break by document-list position, so the
/// policy is stable for a given workspace state.
pub fn enforce_document_limit(ws: &mut Workspace, max_open: usize) -> usize {
    let awake = ws.awake_document_count();
    if awake <= max_open {
        return 0;
    }
    let excess = awake - max_open;

    let mut candidates: Vec<(DocumentId, DateTime<Utc>)> = ws
        .documents
        .iter()
        .filter(|d| !d.is_hibernated)
        .map(|d| (d.id, d.last_modified))
        .collect();
    // Stable sort: equal timestamps keep creation (list) order.
    candidates.sort_by_key(|(_, last_modified)| *last_modified);

    for (doc_id, _) in candidates.into_iter().take(excess) {
        lifecycle::hibernate_document(ws, doc_id);
    }
    debug!(workspace = %ws.id, hibernated = excess, "enforced open-document limit");
    excess
}

/// Hibernate every awake document idle for at least
/// `settings.hibernate_after_minutes`. Does nothing unless the workspace has
/// `auto_hibernate` enabled. A threshold of zero hibernates all stale
/// documents immediately. Returns the number hibernated.
pub fn check_and_hibernate_documents(ws: &mut Workspace, now: DateTime<Utc>) -> usize {
    if !ws.settings.auto_hibernate {
        return 0;
    }
    let threshold = Duration::minutes(ws.settings.hibernate_after_minutes.max(0));

    let stale: Vec<DocumentId> = ws
        .documents
        .iter()
        .filter(|d| !d.is_hibernated && now.signed_duration_since(d.last_modified) >= threshold)
        .map(|d| d.id)
        .collect();

    let count = stale.len();
    for doc_id in stale {
        lifecycle::hibernate_document(ws, doc_id);
    }
    if count > 0 {
        debug!(workspace = %ws.id, hibernated = count, "age-evicted idle documents");
    }
    count
}
