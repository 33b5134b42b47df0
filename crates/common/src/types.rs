// Core session domain types shared across the Mosaic crates.
//
// These structs are the persisted snapshot shape as well as the in-memory
// object graph; field names serialize in camelCase and timestamps as
// ISO-8601, matching the session file the UI shell reads back at startup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ids::{DocumentId, TabGroupId, TabId, WorkspaceId};
use crate::layout::TileLayout;
use crate::settings::WorkspaceSettings;

/// Content kind of a document. The engine never interprets `content`; the
/// kind only routes the payload to the right external editor.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    #[default]
    Page,
    Table,
    Whiteboard,
    Database,
    Pdf,
    Canvas,
}

/// Payload snapshot taken when a document hibernates, restored verbatim on
/// wake.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HibernatedData {
    pub content: Option<Value>,
    pub metadata: Value,
    pub file_data: Option<String>,
}

/// An open (or hibernated) document within a workspace.
///
/// Hibernation is a strict two-state lifecycle: either the live payload
/// fields hold the data and `hibernated_data` is `None`, or the payload
/// fields are cleared and `hibernated_data` holds their last-known values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    pub kind: DocumentKind,
    /// Opaque editor payload; the engine only copies, clears, or restores it.
    pub content: Option<Value>,
    pub file_data: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<u64>,
    pub mime_type: Option<String>,
    #[serde(default)]
    pub metadata: Value,
    pub created: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    pub is_hibernated: bool,
    pub hibernated_data: Option<HibernatedData>,
}

impl Document {
    pub fn new(title: impl Into<String>, kind: DocumentKind, now: DateTime<Utc>) -> Self {
        Self {
            id: DocumentId::new(),
            title: title.into(),
            kind,
            content: None,
            file_data: None,
            file_name: None,
            file_size: None,
            mime_type: None,
            metadata: Value::Null,
            created: now,
            last_modified: now,
            is_hibernated: false,
            hibernated_data: None,
        }
    }
}

/// A lightweight pointer to an open document plus presentation state.
/// References the document by id; the workspace's document list owns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub id: TabId,
    pub document_id: DocumentId,
    pub group_id: Option<TabGroupId>,
    /// Position in the tab strip; unique per workspace under stable sort.
    pub order: usize,
    pub is_pinned: bool,
    /// Cache of "this is the workspace's active tab"; kept consistent with
    /// `Workspace::active_tab_id` by the tab manager.
    pub is_active: bool,
}

/// A named, collapsible stack of tabs.
///
/// `tab_ids` mirrors the set of workspace tabs whose `group_id` points here;
/// the tab and group managers keep the two in sync on every move.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TabGroup {
    pub id: TabGroupId,
    pub name: String,
    pub color: Option<String>,
    pub tab_ids: Vec<TabId>,
    pub is_collapsed: bool,
}

/// One workspace: documents, tabs, groups, layout, and settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: String,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub documents: Vec<Document>,
    pub tabs: Vec<Tab>,
    pub tab_groups: Vec<TabGroup>,
    /// If set, must reference a tab in `tabs`.
    pub active_tab_id: Option<TabId>,
    pub tile_layout: Option<TileLayout>,
    pub settings: WorkspaceSettings,
    pub created: DateTime<Utc>,
    pub last_accessed: DateTime<Utc>,
}

impl Workspace {
    pub fn new(name: impl Into<String>, settings: WorkspaceSettings, now: DateTime<Utc>) -> Self {
        Self {
            id: WorkspaceId::new(),
            name: name.into(),
            icon: None,
            color: None,
            documents: Vec::new(),
            tabs: Vec::new(),
            tab_groups: Vec::new(),
            active_tab_id: None,
            tile_layout: None,
            settings,
            created: now,
            last_accessed: now,
        }
    }

    pub fn document(&self, id: DocumentId) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn document_mut(&mut self, id: DocumentId) -> Option<&mut Document> {
        self.documents.iter_mut().find(|d| d.id == id)
    }

    pub fn tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn tab_mut(&mut self, id: TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.id == id)
    }

    pub fn tab_group_mut(&mut self, id: TabGroupId) -> Option<&mut TabGroup> {
        self.tab_groups.iter_mut().find(|g| g.id == id)
    }

    /// Tabs sorted by their `order` field, the strip as the user sees it.
    pub fn tabs_in_order(&self) -> Vec<&Tab> {
        let mut tabs: Vec<&Tab> = self.tabs.iter().collect();
        tabs.sort_by_key(|t| t.order);
        tabs
    }

    /// Count of non-hibernated documents.
    pub fn awake_document_count(&self) -> usize {
        self.documents.iter().filter(|d| !d.is_hibernated).count()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::{Document, DocumentKind, Workspace};
    use crate::settings::WorkspaceSettings;

    #[test]
    fn document_timestamps_serialize_as_iso8601() {
        let doc = Document::new("notes", DocumentKind::Page, Utc::now());
        let json = serde_json::to_value(&doc).expect("document serializes");

        let created = json["created"].as_str().expect("created is a string");
        assert!(created.parse::<chrono::DateTime<chrono::Utc>>().is_ok());
        assert_eq!(json["isHibernated"], false);
        assert_eq!(json["kind"], "page");
    }

    #[test]
    fn tabs_in_order_sorts_by_order_field() {
        let now = Utc::now();
        let mut ws = Workspace::new("test", WorkspaceSettings::default(), now);
        for order in [2usize, 0, 1] {
            let doc = Document::new(format!("d{order}"), DocumentKind::Page, now);
            ws.tabs.push(super::Tab {
                id: crate::ids::TabId::new(),
                document_id: doc.id,
                group_id: None,
                order,
                is_pinned: false,
                is_active: false,
            });
            ws.documents.push(doc);
        }

        let orders: Vec<usize> = ws.tabs_in_order().iter().map(|t| t.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }
}
