// Tab group manager: named, collapsible stacks of tabs.
//
// Groups that lose their last tab are retained, not pruned; they are named
// containers the user may refill (the UI can hide empties).

use mosaic_common::types::{TabGroup, Workspace};
use mosaic_common::{TabGroupId, TabId};

/// Append a new empty, expanded group.
pub fn create_tab_group(
    ws: &mut Workspace,
    name: impl Into<String>,
    color: Option<String>,
) -> TabGroupId {
    let group = TabGroup {
        id: TabGroupId::new(),
        name: name.into(),
        color,
        tab_ids: Vec::new(),
        is_collapsed: false,
    };
    let group_id = group.id;
    ws.tab_groups.push(group);
    group_id
}

/// Collapse or expand a group. No-op on unknown ids.
pub fn toggle_tab_group(ws: &mut Workspace, group_id: TabGroupId) {
    if let Some(group) = ws.tab_group_mut(group_id) {
        group.is_collapsed = !group.is_collapsed;
    }
}

/// Drop `tab_id` from every group's member list. Used by cascading deletes.
pub(crate) fn remove_tab_from_groups(ws: &mut Workspace, tab_id: TabId) {
    for group in &mut ws.tab_groups {
        group.tab_ids.retain(|id| *id != tab_id);
    }
}
