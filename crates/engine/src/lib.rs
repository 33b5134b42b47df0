// mosaic-engine: the workspace session engine.
//
// Owns open documents, tab/group presentation, tile-pane layout, and
// memory-reclaiming hibernation for one registry of workspaces. Everything
// here is synchronous and in-memory; the snapshot store is the only I/O
// boundary and is invoked by the embedding shell, not from within mutations.

pub mod eviction;
pub mod groups;
pub mod lifecycle;
pub mod registry;
pub mod snapshot;
pub mod tabs;
pub mod tiling;

pub use lifecycle::OpenDocumentSpec;
pub use registry::WorkspaceRegistry;
pub use snapshot::{SessionSnapshot, SnapshotStore};
