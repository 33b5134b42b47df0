// Tile layouts: how a workspace's tabs are partitioned into simultaneously
// visible panes.

use serde::{Deserialize, Serialize};

use crate::ids::{PaneId, TabId, TileLayoutId};

/// One visible region of a tiled workspace.
///
/// `width` and `height` are percentage hints of the workspace area; fixed
/// layouts assign them so they sum to 100 along each split axis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TilePane {
    pub id: PaneId,
    pub tab_ids: Vec<TabId>,
    pub active_tab_id: Option<TabId>,
    pub width: f32,
    pub height: f32,
}

impl TilePane {
    pub fn new(width: f32, height: f32) -> Self {
        Self { id: PaneId::new(), tab_ids: Vec::new(), active_tab_id: None, width, height }
    }
}

/// Grid cell assignment for one pane of a custom layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PanePlacement {
    pub pane_id: PaneId,
    pub row: u8,
    pub col: u8,
    #[serde(default = "default_span")]
    pub row_span: u8,
    #[serde(default = "default_span")]
    pub col_span: u8,
}

fn default_span() -> u8 {
    1
}

/// The geometric arrangement of a layout. Layout-specific data (the custom
/// grid specification) is only reachable under its variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum TileLayoutKind {
    Single,
    SplitHorizontal,
    SplitVertical,
    #[serde(rename = "grid-2x2")]
    Grid2x2,
    #[serde(rename = "grid-3x3")]
    Grid3x3,
    Custom { rows: u8, cols: u8, placements: Vec<PanePlacement> },
}

impl TileLayoutKind {
    /// Number of panes this arrangement implies.
    pub fn pane_count(&self) -> usize {
        match self {
            Self::Single => 1,
            Self::SplitHorizontal | Self::SplitVertical => 2,
            Self::Grid2x2 => 4,
            Self::Grid3x3 => 9,
            Self::Custom { placements, .. } => placements.len(),
        }
    }
}

/// A workspace's current pane arrangement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TileLayout {
    pub id: TileLayoutId,
    #[serde(flatten)]
    pub kind: TileLayoutKind,
    pub panes: Vec<TilePane>,
}
