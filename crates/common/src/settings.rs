// Workspace and process-wide settings.
//
// Settings are fully-specified structs with explicit defaults; overrides are
// merged field-by-field from a typed patch so missing or misspelled fields
// fail at compile time rather than vanishing into an untyped merge.

use serde::{Deserialize, Serialize};

/// Default cap on simultaneously awake (non-hibernated) documents per
/// workspace.
pub const DEFAULT_MAX_OPEN_DOCUMENTS: usize = 10;

/// Default idle threshold before a document qualifies for age-based
/// hibernation.
pub const DEFAULT_HIBERNATE_AFTER_MINUTES: i64 = 30;

/// Axis along which the tab strip is laid out.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TabAxis {
    #[default]
    Horizontal,
    Vertical,
}

/// Per-workspace presentation and hibernation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkspaceSettings {
    pub tab_axis: TabAxis,
    pub enable_tab_stacking: bool,
    pub enable_tab_groups: bool,
    pub enable_tiling: bool,
    pub auto_hibernate: bool,
    /// Idle minutes before a document qualifies for age eviction. Never
    /// negative; `0` means any stale document qualifies immediately.
    pub hibernate_after_minutes: i64,
    pub theme: Option<String>,
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self {
            tab_axis: TabAxis::Horizontal,
            enable_tab_stacking: true,
            enable_tab_groups: true,
            enable_tiling: true,
            auto_hibernate: true,
            hibernate_after_minutes: DEFAULT_HIBERNATE_AFTER_MINUTES,
            theme: None,
        }
    }
}

impl WorkspaceSettings {
    /// Apply a partial override on top of these settings, field by field.
    pub fn merged(&self, patch: WorkspaceSettingsPatch) -> Self {
        Self {
            tab_axis: patch.tab_axis.unwrap_or(self.tab_axis),
            enable_tab_stacking: patch.enable_tab_stacking.unwrap_or(self.enable_tab_stacking),
            enable_tab_groups: patch.enable_tab_groups.unwrap_or(self.enable_tab_groups),
            enable_tiling: patch.enable_tiling.unwrap_or(self.enable_tiling),
            auto_hibernate: patch.auto_hibernate.unwrap_or(self.auto_hibernate),
            hibernate_after_minutes: patch
                .hibernate_after_minutes
                .unwrap_or(self.hibernate_after_minutes)
                .max(0),
            theme: patch.theme.or_else(|| self.theme.clone()),
        }
    }
}

/// Partial workspace settings, used when creating a workspace with overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkspaceSettingsPatch {
    pub tab_axis: Option<TabAxis>,
    pub enable_tab_stacking: Option<bool>,
    pub enable_tab_groups: Option<bool>,
    pub enable_tiling: Option<bool>,
    pub auto_hibernate: Option<bool>,
    pub hibernate_after_minutes: Option<i64>,
    pub theme: Option<String>,
}

/// Process-wide defaults shared by every workspace in a registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GlobalSettings {
    pub default_tab_layout: TabAxis,
    /// Capacity cap enforced after every document open.
    pub max_open_documents: usize,
    pub hibernation_enabled: bool,
    pub hibernate_after_minutes: i64,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            default_tab_layout: TabAxis::Horizontal,
            max_open_documents: DEFAULT_MAX_OPEN_DOCUMENTS,
            hibernation_enabled: true,
            hibernate_after_minutes: DEFAULT_HIBERNATE_AFTER_MINUTES,
        }
    }
}
