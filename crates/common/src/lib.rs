// mosaic-common: shared types for the Mosaic session engine.

pub mod error;
pub mod ids;
pub mod layout;
pub mod settings;
pub mod types;

pub use error::EngineError;
pub use ids::{DocumentId, PaneId, TabGroupId, TabId, TileLayoutId, WorkspaceId};
