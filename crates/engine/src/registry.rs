// Workspace registry: the collection of workspaces, the active pointer, and
// the entry point the UI shell drives.
//
// The registry is an explicit owned object, not ambient process state; tests
// can hold as many independent registries as they like. Operations addressed
// by a workspace id the caller chose (`switch_workspace`, `delete_workspace`)
// surface NotFound; everything below workspace level is a silent no-op on
// missing ids.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use mosaic_common::settings::{GlobalSettings, WorkspaceSettings, WorkspaceSettingsPatch};
use mosaic_common::types::Workspace;
use mosaic_common::{DocumentId, EngineError, WorkspaceId};

use crate::eviction;
use crate::lifecycle::{self, OpenDocumentSpec};
use crate::snapshot::{SessionSnapshot, SnapshotStore};

#[derive(Debug, Clone, Default)]
pub struct WorkspaceRegistry {
    workspaces: Vec<Workspace>,
    active_workspace_id: Option<WorkspaceId>,
    global: GlobalSettings,
}

impl WorkspaceRegistry {
    pub fn new(global: GlobalSettings) -> Self {
        Self { workspaces: Vec::new(), active_workspace_id: None, global }
    }

    /// Build a registry from the startup snapshot, falling back to an empty
    /// registry (with a warning) on any load or parse failure. Startup never
    /// crashes on a bad session file; the shell bootstraps a fresh workspace
    /// through `create_workspace` as usual.
    pub fn hydrate(store: &SnapshotStore) -> Self {
        match store.load() {
            Ok(Some(snapshot)) => Self::from_snapshot(snapshot),
            Ok(None) => Self::default(),
            Err(error) => {
                warn!(?error, "failed to load session snapshot, starting empty");
                Self::default()
            }
        }
    }

    pub fn from_snapshot(snapshot: SessionSnapshot) -> Self {
        let SessionSnapshot { workspaces, active_workspace_id, global_settings } = snapshot;
        // A stale active pointer falls back to the first workspace.
        let active_workspace_id = active_workspace_id
            .filter(|id| workspaces.iter().any(|ws| ws.id == *id))
            .or_else(|| workspaces.first().map(|ws| ws.id));
        Self { workspaces, active_workspace_id, global: global_settings }
    }

    pub fn to_snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            workspaces: self.workspaces.clone(),
            active_workspace_id: self.active_workspace_id,
            global_settings: self.global.clone(),
        }
    }

    /// Persist the current state. Failures are logged here so fire-and-forget
    /// callers can ignore the result; the next mutation's save retries
    /// naturally. No durability promise is made for session state.
    pub fn persist(&self, store: &SnapshotStore) -> Result<(), EngineError> {
        store.save(&self.to_snapshot()).map(|_| ()).map_err(|error| {
            warn!(?error, "failed to persist session snapshot");
            EngineError::Persistence(error)
        })
    }

    // ── Workspace lifecycle ────────────────────────────────────────────

    /// Create an empty workspace, merging `overrides` field-by-field onto the
    /// process-wide defaults. The first workspace ever created becomes
    /// active.
    pub fn create_workspace(
        &mut self,
        name: impl Into<String>,
        overrides: Option<WorkspaceSettingsPatch>,
        now: DateTime<Utc>,
    ) -> WorkspaceId {
        let defaults = WorkspaceSettings {
            tab_axis: self.global.default_tab_layout,
            auto_hibernate: self.global.hibernation_enabled,
            hibernate_after_minutes: self.global.hibernate_after_minutes.max(0),
            ..WorkspaceSettings::default()
        };
        let settings = defaults.merged(overrides.unwrap_or_default());

        let ws = Workspace::new(name, settings, now);
        let ws_id = ws.id;
        info!(workspace = %ws_id, name = %ws.name, "created workspace");
        self.workspaces.push(ws);
        if self.active_workspace_id.is_none() {
            self.active_workspace_id = Some(ws_id);
        }
        ws_id
    }

    /// Make `id` the active workspace, refresh its `last_accessed`, and run
    /// age eviction on it (only the newly active workspace is swept).
    pub fn switch_workspace(
        &mut self,
        id: WorkspaceId,
        now: DateTime<Utc>,
    ) -> Result<(), EngineError> {
        let ws = self
            .workspaces
            .iter_mut()
            .find(|ws| ws.id == id)
            .ok_or(EngineError::WorkspaceNotFound(id))?;

        ws.last_accessed = now;
        eviction::check_and_hibernate_documents(ws, now);
        self.active_workspace_id = Some(id);
        Ok(())
    }

    /// Delete a workspace. If it was active, the first remaining workspace
    /// (if any) becomes active.
    pub fn delete_workspace(&mut self, id: WorkspaceId) -> Result<(), EngineError> {
        let index = self
            .workspaces
            .iter()
            .position(|ws| ws.id == id)
            .ok_or(EngineError::WorkspaceNotFound(id))?;

        self.workspaces.remove(index);
        if self.active_workspace_id == Some(id) {
            self.active_workspace_id = self.workspaces.first().map(|ws| ws.id);
        }
        info!(workspace = %id, "deleted workspace");
        Ok(())
    }

    /// Explicit age-eviction sweep over the active workspace, for a
    /// host-driven periodic scheduler. Returns how many documents hibernated.
    pub fn sweep_active_workspace(&mut self, now: DateTime<Utc>) -> usize {
        match self.active_workspace_mut() {
            Some(ws) => eviction::check_and_hibernate_documents(ws, now),
            None => 0,
        }
    }

    // ── Document entry points ──────────────────────────────────────────

    /// Open a document in the given workspace; the registry supplies the
    /// process-wide open-document cap to the eviction policy.
    pub fn open_document(
        &mut self,
        workspace_id: WorkspaceId,
        spec: OpenDocumentSpec,
        now: DateTime<Utc>,
    ) -> Result<DocumentId, EngineError> {
        let global = self.global.clone();
        let ws = self
            .workspaces
            .iter_mut()
            .find(|ws| ws.id == workspace_id)
            .ok_or(EngineError::WorkspaceNotFound(workspace_id))?;
        Ok(lifecycle::open_document(ws, spec, &global, now))
    }

    /// Close a document in the given workspace. Missing workspace or
    /// document ids are silent no-ops (close races cascading deletes).
    pub fn close_document(&mut self, workspace_id: WorkspaceId, document_id: DocumentId) {
        if let Some(ws) = self.workspace_mut(workspace_id) {
            lifecycle::close_document(ws, document_id);
        }
    }

    // ── Accessors ──────────────────────────────────────────────────────

    pub fn workspaces(&self) -> &[Workspace] {
        &self.workspaces
    }

    pub fn global_settings(&self) -> &GlobalSettings {
        &self.global
    }

    pub fn active_workspace_id(&self) -> Option<WorkspaceId> {
        self.active_workspace_id
    }

    pub fn workspace(&self, id: WorkspaceId) -> Option<&Workspace> {
        self.workspaces.iter().find(|ws| ws.id == id)
    }

    pub fn workspace_mut(&mut self, id: WorkspaceId) -> Option<&mut Workspace> {
        self.workspaces.iter_mut().find(|ws| ws.id == id)
    }

    pub fn active_workspace(&self) -> Option<&Workspace> {
        self.active_workspace_id.and_then(|id| self.workspace(id))
    }

    pub fn active_workspace_mut(&mut self) -> Option<&mut Workspace> {
        let id = self.active_workspace_id?;
        self.workspace_mut(id)
    }
}
