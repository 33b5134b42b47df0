// Tab manager: creation, ordering, pinning, activation, cross-group moves.
//
// All operations take the workspace explicitly and treat unknown tab ids as
// silent no-ops: tabs can legitimately disappear mid-gesture when a close
// event cascades while a drag is in flight.

use chrono::{DateTime, Utc};
use tracing::debug;

use mosaic_common::types::{Tab, Workspace};
use mosaic_common::{DocumentId, TabGroupId, TabId};

/// Append a new tab for `document_id` at the end of the strip.
///
/// If `group_id` names a missing group the tab is created ungrouped.
pub fn create_tab(
    ws: &mut Workspace,
    document_id: DocumentId,
    group_id: Option<TabGroupId>,
) -> TabId {
    let group_id = group_id.filter(|gid| ws.tab_groups.iter().any(|g| g.id == *gid));
    let tab = Tab {
        id: TabId::new(),
        document_id,
        group_id,
        order: ws.tabs.len(),
        is_pinned: false,
        is_active: false,
    };
    let tab_id = tab.id;
    if let Some(gid) = group_id {
        if let Some(group) = ws.tab_group_mut(gid) {
            group.tab_ids.push(tab_id);
        }
    }
    ws.tabs.push(tab);
    tab_id
}

/// Make `tab_id` the workspace's active tab and refresh the referenced
/// document's `last_modified` so activation counts as recent use.
pub fn set_active_tab(ws: &mut Workspace, tab_id: TabId, now: DateTime<Utc>) {
    let Some(document_id) = ws.tab(tab_id).map(|t| t.document_id) else {
        return;
    };

    for tab in &mut ws.tabs {
        tab.is_active = tab.id == tab_id;
    }
    ws.active_tab_id = Some(tab_id);

    if let Some(doc) = ws.document_mut(document_id) {
        doc.last_modified = now;
    }
}

/// Move a tab to a new strip position and (possibly) a new group.
///
/// Every other tab at or past `new_order` shifts up by one, keeping orders
/// unique under stable sort. `new_group` of `None` ungroups the tab.
pub fn move_tab(
    ws: &mut Workspace,
    tab_id: TabId,
    new_order: usize,
    new_group: Option<TabGroupId>,
) {
    if ws.tab(tab_id).is_none() {
        return;
    }

    let old_group = ws.tab(tab_id).and_then(|t| t.group_id);
    if let Some(gid) = old_group {
        if let Some(group) = ws.tab_group_mut(gid) {
            group.tab_ids.retain(|id| *id != tab_id);
        }
    }

    let new_group = new_group.filter(|gid| ws.tab_groups.iter().any(|g| g.id == *gid));
    if let Some(gid) = new_group {
        if let Some(group) = ws.tab_group_mut(gid) {
            group.tab_ids.push(tab_id);
        }
    }

    for tab in &mut ws.tabs {
        if tab.id != tab_id && tab.order >= new_order {
            tab.order += 1;
        }
    }
    if let Some(tab) = ws.tab_mut(tab_id) {
        tab.order = new_order;
        tab.group_id = new_group;
    }
    debug!(%tab_id, new_order, "moved tab");
}

/// Pin or unpin a tab. Pure flag flip.
pub fn pin_tab(ws: &mut Workspace, tab_id: TabId, pinned: bool) {
    if let Some(tab) = ws.tab_mut(tab_id) {
        tab.is_pinned = pinned;
    }
}
