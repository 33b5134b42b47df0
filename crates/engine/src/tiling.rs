// Tiling engine: partitions a workspace's tabs into visible panes.
//
// `set_tile_layout` is a pure recomputation from the current tab order, not
// an incremental update: switching layouts discards manual pane placement but
// never loses a tab. `move_to_pane` is the only way to deviate from the
// balanced auto-partition afterwards.

use tracing::debug;

use mosaic_common::layout::{PanePlacement, TileLayout, TileLayoutKind, TilePane};
use mosaic_common::types::Workspace;
use mosaic_common::{PaneId, TabId, TileLayoutId};

/// Replace the workspace's layout with `kind`, distributing the current tabs
/// across the implied panes in contiguous, size-balanced slices (earlier
/// panes absorb the remainder). Each pane's active tab starts as its first.
pub fn set_tile_layout(ws: &mut Workspace, kind: TileLayoutKind) {
    let tab_ids: Vec<TabId> = ws.tabs_in_order().iter().map(|t| t.id).collect();
    let mut panes = panes_for(&kind);

    let pane_count = panes.len();
    let base = tab_ids.len() / pane_count;
    let remainder = tab_ids.len() % pane_count;

    let mut next = 0;
    for (i, pane) in panes.iter_mut().enumerate() {
        let take = base + usize::from(i < remainder);
        pane.tab_ids = tab_ids[next..next + take].to_vec();
        pane.active_tab_id = pane.tab_ids.first().copied();
        next += take;
    }

    debug!(workspace = %ws.id, panes = pane_count, tabs = tab_ids.len(), "set tile layout");
    ws.tile_layout = Some(TileLayout { id: TileLayoutId::new(), kind, panes });
}

/// Move a tab into `pane_id`, making it that pane's active tab. Silent no-op
/// if the workspace has no layout or either id is unknown.
pub fn move_to_pane(ws: &mut Workspace, tab_id: TabId, pane_id: PaneId) {
    if ws.tab(tab_id).is_none() {
        return;
    }
    let Some(layout) = ws.tile_layout.as_mut() else {
        return;
    };
    if !layout.panes.iter().any(|p| p.id == pane_id) {
        return;
    }

    for pane in &mut layout.panes {
        pane.tab_ids.retain(|id| *id != tab_id);
        if pane.active_tab_id == Some(tab_id) {
            pane.active_tab_id = pane.tab_ids.first().copied();
        }
    }
    if let Some(pane) = layout.panes.iter_mut().find(|p| p.id == pane_id) {
        pane.tab_ids.push(tab_id);
        pane.active_tab_id = Some(tab_id);
    }
}

/// Drop `tab_id` from every pane, repairing pane active pointers. Used by
/// cascading deletes.
pub(crate) fn remove_tab_from_panes(ws: &mut Workspace, tab_id: TabId) {
    let Some(layout) = ws.tile_layout.as_mut() else {
        return;
    };
    for pane in &mut layout.panes {
        pane.tab_ids.retain(|id| *id != tab_id);
        if pane.active_tab_id == Some(tab_id) {
            pane.active_tab_id = pane.tab_ids.first().copied();
        }
    }
}

/// Empty panes with the geometry `kind` implies; percentage hints sum to 100
/// along each split axis.
fn panes_for(kind: &TileLayoutKind) -> Vec<TilePane> {
    match kind {
        TileLayoutKind::Single => vec![TilePane::new(100.0, 100.0)],
        TileLayoutKind::SplitHorizontal => {
            vec![TilePane::new(50.0, 100.0), TilePane::new(50.0, 100.0)]
        }
        TileLayoutKind::SplitVertical => {
            vec![TilePane::new(100.0, 50.0), TilePane::new(100.0, 50.0)]
        }
        TileLayoutKind::Grid2x2 => (0..4).map(|_| TilePane::new(50.0, 50.0)).collect(),
        TileLayoutKind::Grid3x3 => {
            (0..9).map(|_| TilePane::new(100.0 / 3.0, 100.0 / 3.0)).collect()
        }
        TileLayoutKind::Custom { rows, cols, placements } if !placements.is_empty() => {
            placements.iter().map(|p| custom_pane(p, *rows, *cols)).collect()
        }
        // A custom spec with no placements degenerates to one full-area pane.
        TileLayoutKind::Custom { .. } => vec![TilePane::new(100.0, 100.0)],
    }
}

fn custom_pane(placement: &PanePlacement, rows: u8, cols: u8) -> TilePane {
    let cols = f32::from(cols.max(1));
    let rows = f32::from(rows.max(1));
    TilePane {
        id: placement.pane_id,
        tab_ids: Vec::new(),
        active_tab_id: None,
        width: f32::from(placement.col_span.max(1)) / cols * 100.0,
        height: f32::from(placement.row_span.max(1)) / rows * 100.0,
    }
}
