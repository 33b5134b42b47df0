// Document lifecycle: open, close, hibernate, restore.
//
// Hibernation moves the heavy payload fields (`content`, `metadata`,
// `file_data`) into a snapshot and clears them; restore is the exact inverse.
// Close cascades through tabs, group member lists, and tile panes before the
// document itself is removed, so no dangling references survive.

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::debug;

use mosaic_common::settings::GlobalSettings;
use mosaic_common::types::{Document, DocumentKind, HibernatedData, Workspace};
use mosaic_common::{DocumentId, TabId};

use crate::{eviction, groups, tabs, tiling};

/// What to open. Payload fields are used only when the `(title, kind)` pair
/// does not already exist in the workspace.
#[derive(Debug, Clone, Default)]
pub struct OpenDocumentSpec {
    pub title: String,
    pub kind: DocumentKind,
    pub content: Option<Value>,
    pub metadata: Option<Value>,
    pub file_data: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<u64>,
    pub mime_type: Option<String>,
}

impl OpenDocumentSpec {
    pub fn new(title: impl Into<String>, kind: DocumentKind) -> Self {
        Self { title: title.into(), kind, ..Default::default() }
    }
}

/// Open a document: reuse the existing `(title, kind)` document (restoring
/// it if hibernated) or create it, ensure it has exactly one tab, activate
/// that tab, then enforce the open-document cap.
pub fn open_document(
    ws: &mut Workspace,
    spec: OpenDocumentSpec,
    global: &GlobalSettings,
    now: DateTime<Utc>,
) -> DocumentId {
    let existing =
        ws.documents.iter().find(|d| d.title == spec.title && d.kind == spec.kind).map(|d| d.id);
    let doc_id = match existing {
        Some(doc_id) => {
            restore_document(ws, doc_id, now);
            doc_id
        }
        None => {
            let mut doc = Document::new(spec.title, spec.kind, now);
            doc.content = spec.content;
            doc.metadata = spec.metadata.unwrap_or(Value::Null);
            doc.file_data = spec.file_data;
            doc.file_name = spec.file_name;
            doc.file_size = spec.file_size;
            doc.mime_type = spec.mime_type;
            let doc_id = doc.id;
            ws.documents.push(doc);
            debug!(workspace = %ws.id, document = %doc_id, "created document");
            doc_id
        }
    };

    let tab_id = match ws.tabs.iter().find(|t| t.document_id == doc_id) {
        Some(tab) => tab.id,
        None => tabs::create_tab(ws, doc_id, None),
    };
    tabs::set_active_tab(ws, tab_id, now);

    eviction::enforce_document_limit(ws, global.max_open_documents);
    doc_id
}

/// Remove a document and every reference to it. Idempotent: closing an
/// unknown document is a no-op.
pub fn close_document(ws: &mut Workspace, document_id: DocumentId) {
    if ws.document(document_id).is_none() {
        return;
    }

    let removed_tabs: Vec<TabId> =
        ws.tabs.iter().filter(|t| t.document_id == document_id).map(|t| t.id).collect();

    ws.tabs.retain(|t| t.document_id != document_id);
    for tab_id in &removed_tabs {
        groups::remove_tab_from_groups(ws, *tab_id);
        tiling::remove_tab_from_panes(ws, *tab_id);
    }

    if ws.active_tab_id.is_some_and(|active| removed_tabs.contains(&active)) {
        let next_active = ws.tabs_in_order().first().map(|t| t.id);
        ws.active_tab_id = next_active;
        for tab in &mut ws.tabs {
            tab.is_active = Some(tab.id) == next_active;
        }
    }

    ws.documents.retain(|d| d.id != document_id);
    debug!(workspace = %ws.id, document = %document_id, "closed document");
}

/// Move the document's payload into its hibernation snapshot and clear the
/// live fields. No-op if the document is absent or already hibernated.
/// Returns whether a hibernation actually happened.
pub fn hibernate_document(ws: &mut Workspace, document_id: DocumentId) -> bool {
    let Some(doc) = ws.document_mut(document_id) else {
        return false;
    };
    if doc.is_hibernated {
        return false;
    }

    doc.hibernated_data = Some(HibernatedData {
        content: doc.content.take(),
        metadata: std::mem::replace(&mut doc.metadata, Value::Null),
        file_data: doc.file_data.take(),
    });
    doc.is_hibernated = true;
    true
}

/// Restore a hibernated document's payload. No-op if the document is awake
/// or has no snapshot. Refreshes `last_modified` on success.
pub fn restore_document(ws: &mut Workspace, document_id: DocumentId, now: DateTime<Utc>) -> bool {
    let Some(doc) = ws.document_mut(document_id) else {
        return false;
    };
    if !doc.is_hibernated {
        return false;
    }
    let Some(snapshot) = doc.hibernated_data.take() else {
        // Hibernated with no snapshot should not occur; leave it untouched.
        return false;
    };

    doc.content = snapshot.content;
    doc.metadata = snapshot.metadata;
    doc.file_data = snapshot.file_data;
    doc.is_hibernated = false;
    doc.last_modified = now;
    true
}
