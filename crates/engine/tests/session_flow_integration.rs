// End-to-end session flows through the registry: open/evict/close cascades,
// layout recomputation, and snapshot hydrate/persist.

use chrono::{Duration, Utc};
use serde_json::json;
use tempfile::tempdir;

use mosaic_common::layout::TileLayoutKind;
use mosaic_common::settings::GlobalSettings;
use mosaic_common::types::DocumentKind;
use mosaic_engine::{groups, lifecycle, tabs, tiling};
use mosaic_engine::{OpenDocumentSpec, SnapshotStore, WorkspaceRegistry};

#[test]
fn opening_past_the_cap_hibernates_the_least_recently_used_document() {
    let mut registry = WorkspaceRegistry::new(GlobalSettings {
        max_open_documents: 2,
        ..GlobalSettings::default()
    });
    let t0 = Utc::now();
    let ws_id = registry.create_workspace("w", None, t0);

    let doc_a = registry
        .open_document(ws_id, OpenDocumentSpec::new("a", DocumentKind::Page), t0)
        .expect("workspace exists");
    let doc_b = registry
        .open_document(
            ws_id,
            OpenDocumentSpec::new("b", DocumentKind::Page),
            t0 + Duration::minutes(1),
        )
        .expect("workspace exists");
    let doc_c = registry
        .open_document(
            ws_id,
            OpenDocumentSpec::new("c", DocumentKind::Page),
            t0 + Duration::minutes(2),
        )
        .expect("workspace exists");

    let ws = registry.workspace(ws_id).expect("workspace exists");
    assert_eq!(ws.documents.len(), 3, "eviction hibernates, it does not close");
    assert!(ws.document(doc_a).unwrap().is_hibernated);
    assert!(!ws.document(doc_b).unwrap().is_hibernated);
    assert!(!ws.document(doc_c).unwrap().is_hibernated);
}

#[test]
fn repeated_opens_never_duplicate_tabs() {
    let mut registry = WorkspaceRegistry::default();
    let ws_id = registry.create_workspace("w", None, Utc::now());

    for title in ["a", "b", "a", "c", "b", "a"] {
        registry
            .open_document(ws_id, OpenDocumentSpec::new(title, DocumentKind::Page), Utc::now())
            .expect("workspace exists");
    }

    let ws = registry.workspace(ws_id).expect("workspace exists");
    assert_eq!(ws.documents.len(), 3);
    assert_eq!(ws.tabs.len(), 3);

    let mut doc_refs: Vec<_> = ws.tabs.iter().map(|t| t.document_id).collect();
    doc_refs.sort_unstable();
    doc_refs.dedup();
    assert_eq!(doc_refs.len(), 3, "each document has exactly one tab");
}

#[test]
fn closing_a_document_cascades_through_tabs_groups_and_panes() {
    let mut registry = WorkspaceRegistry::default();
    let ws_id = registry.create_workspace("w", None, Utc::now());
    let mut doc_ids = Vec::new();
    for title in ["a", "b", "c", "d"] {
        doc_ids.push(
            registry
                .open_document(ws_id, OpenDocumentSpec::new(title, DocumentKind::Page), Utc::now())
                .expect("workspace exists"),
        );
    }

    let ws = registry.workspace_mut(ws_id).expect("workspace exists");
    let group_id = groups::create_tab_group(ws, "stack", None);
    let closing_tab = ws.tabs.iter().find(|t| t.document_id == doc_ids[0]).unwrap().id;
    tabs::move_tab(ws, closing_tab, 0, Some(group_id));
    tiling::set_tile_layout(ws, TileLayoutKind::SplitHorizontal);
    tabs::set_active_tab(ws, closing_tab, Utc::now());

    registry.close_document(ws_id, doc_ids[0]);

    let ws = registry.workspace(ws_id).expect("workspace exists");
    assert_eq!(ws.documents.len(), 3);
    assert!(ws.tabs.iter().all(|t| t.document_id != doc_ids[0]));
    assert!(ws.tab_groups[0].tab_ids.is_empty(), "group member list is cleaned");
    assert_eq!(ws.tab_groups.len(), 1, "empty groups are retained");

    let layout = ws.tile_layout.as_ref().expect("layout survives");
    for pane in &layout.panes {
        assert!(!pane.tab_ids.contains(&closing_tab));
        if let Some(active) = pane.active_tab_id {
            assert!(pane.tab_ids.contains(&active), "pane active tab stays valid");
        }
    }

    let active = ws.active_tab_id.expect("a remaining tab becomes active");
    assert!(ws.tab(active).is_some(), "workspace active tab stays valid");

    // Closing again is a no-op.
    registry.close_document(ws_id, doc_ids[0]);
    assert_eq!(registry.workspace(ws_id).unwrap().documents.len(), 3);
}

#[test]
fn split_layout_on_four_tabs_gives_two_even_panes() {
    let mut registry = WorkspaceRegistry::default();
    let ws_id = registry.create_workspace("w", None, Utc::now());
    for title in ["a", "b", "c", "d"] {
        registry
            .open_document(ws_id, OpenDocumentSpec::new(title, DocumentKind::Page), Utc::now())
            .expect("workspace exists");
    }

    let ws = registry.workspace_mut(ws_id).expect("workspace exists");
    tiling::set_tile_layout(ws, TileLayoutKind::SplitHorizontal);

    let layout = ws.tile_layout.as_ref().expect("layout set");
    assert_eq!(layout.panes.len(), 2);
    assert_eq!(layout.panes[0].tab_ids.len(), 2);
    assert_eq!(layout.panes[1].tab_ids.len(), 2);
    assert_eq!(layout.panes[0].width, 50.0);
    assert_eq!(layout.panes[1].width, 50.0);
}

#[test]
fn session_survives_persist_and_hydrate() {
    let tmp = tempdir().expect("tempdir should be created");
    let store = SnapshotStore::new(tmp.path().join("mosaic")).expect("snapshot store");

    let mut registry = WorkspaceRegistry::default();
    let ws_id = registry.create_workspace("main", None, Utc::now());
    let doc_id = registry
        .open_document(
            ws_id,
            OpenDocumentSpec {
                content: Some(json!({"text": "hello"})),
                ..OpenDocumentSpec::new("notes", DocumentKind::Page)
            },
            Utc::now(),
        )
        .expect("workspace exists");
    let ws = registry.workspace_mut(ws_id).expect("workspace exists");
    lifecycle::hibernate_document(ws, doc_id);
    registry.persist(&store).expect("session should persist");

    let restored = WorkspaceRegistry::hydrate(&store);
    assert_eq!(restored.to_snapshot(), registry.to_snapshot());

    let doc = restored.workspace(ws_id).unwrap().document(doc_id).unwrap();
    assert!(doc.is_hibernated);
    assert_eq!(
        doc.hibernated_data.as_ref().unwrap().content,
        Some(json!({"text": "hello"})),
        "hibernation snapshot survives the disk round trip"
    );
}

#[test]
fn hydrate_from_corrupt_session_file_starts_empty() {
    let tmp = tempdir().expect("tempdir should be created");
    let store = SnapshotStore::new(tmp.path()).expect("snapshot store");
    std::fs::write(store.session_path(), b"not json at all").expect("write corrupt file");

    let mut registry = WorkspaceRegistry::hydrate(&store);
    assert!(registry.workspaces().is_empty());
    assert_eq!(registry.active_workspace_id(), None);

    // Normal bootstrap proceeds afterwards.
    let ws_id = registry.create_workspace("fresh", None, Utc::now());
    assert_eq!(registry.active_workspace_id(), Some(ws_id));
    registry.persist(&store).expect("session should persist");
    assert_eq!(WorkspaceRegistry::hydrate(&store).workspaces().len(), 1);
}
