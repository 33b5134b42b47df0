// Session snapshot persistence.
//
// The full registry state is written as one versionless JSON document,
// `session.json`, after mutations and read once at startup. Saves go through
// a temp file and an atomic rename so a crash mid-write never leaves a
// torn session file. Loads that fail for any reason degrade to an empty
// registry at the hydrate call site; startup must never crash on a bad file.

use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use mosaic_common::settings::GlobalSettings;
use mosaic_common::types::Workspace;
use mosaic_common::WorkspaceId;

const SESSION_FILE: &str = "session.json";

/// Root directory for Mosaic session state: `~/.mosaic/`.
pub fn default_session_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".mosaic"))
}

/// The persisted registry state, exactly as written to disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub workspaces: Vec<Workspace>,
    pub active_workspace_id: Option<WorkspaceId>,
    pub global_settings: GlobalSettings,
}

/// Reads and writes `session.json` under one session directory.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    session_dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(session_dir: impl AsRef<Path>) -> Result<Self> {
        let session_dir = session_dir.as_ref().to_path_buf();
        fs::create_dir_all(&session_dir).with_context(|| {
            format!("failed to create session directory `{}`", session_dir.display())
        })?;
        Ok(Self { session_dir })
    }

    pub fn save(&self, snapshot: &SessionSnapshot) -> Result<PathBuf> {
        let payload =
            serde_json::to_vec_pretty(snapshot).context("failed to serialize session snapshot")?;

        let target_path = self.session_path();
        let tmp_path = self.temp_path();
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&tmp_path)
            .with_context(|| format!("failed to open temp session file `{}`", tmp_path.display()))?;
        file.write_all(&payload).context("failed to write session snapshot")?;
        file.sync_data().context("failed to fsync session snapshot")?;
        drop(file);

        fs::rename(&tmp_path, &target_path).with_context(|| {
            format!(
                "failed to atomically move session file `{}` to `{}`",
                tmp_path.display(),
                target_path.display()
            )
        })?;

        Ok(target_path)
    }

    /// Load the persisted snapshot. `Ok(None)` when no session file exists
    /// yet; `Err` on unreadable or unparseable files (the caller decides how
    /// to degrade).
    pub fn load(&self) -> Result<Option<SessionSnapshot>> {
        let path = self.session_path();
        if !path.exists() {
            return Ok(None);
        }

        let mut contents = String::new();
        OpenOptions::new()
            .read(true)
            .open(&path)
            .with_context(|| format!("failed to open session file `{}`", path.display()))?
            .read_to_string(&mut contents)
            .with_context(|| format!("failed to read session file `{}`", path.display()))?;

        let snapshot = serde_json::from_str(&contents)
            .with_context(|| format!("session file `{}` is not valid JSON", path.display()))?;
        Ok(Some(snapshot))
    }

    pub fn session_path(&self) -> PathBuf {
        self.session_dir.join(SESSION_FILE)
    }

    fn temp_path(&self) -> PathBuf {
        let nonce = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        self.session_dir.join(format!("{SESSION_FILE}.tmp.{nonce}"))
    }
}
