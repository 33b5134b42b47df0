// Engine error taxonomy.
//
// Only operations addressed by a caller-chosen workspace id surface NotFound;
// misses on sub-entities (tabs, panes, documents already being cascaded away)
// are silent no-ops at the call sites, since UI gestures routinely race
// against cascading deletes.

use thiserror::Error;

use crate::ids::WorkspaceId;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("workspace {0} does not exist")]
    WorkspaceNotFound(WorkspaceId),

    #[error("failed to persist session snapshot")]
    Persistence(#[source] anyhow::Error),
}
