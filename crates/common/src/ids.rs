// Opaque entity ids. Every session entity gets a collision-resistant id at
// creation; the newtypes keep a tab id from being passed where a pane id is
// expected.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

entity_id!(
    /// Identifies one workspace within a registry.
    WorkspaceId
);
entity_id!(
    /// Identifies a document within its owning workspace.
    DocumentId
);
entity_id!(TabId);
entity_id!(TabGroupId);
entity_id!(TileLayoutId);
entity_id!(
    /// Identifies a tile pane within a workspace's layout.
    PaneId
);
