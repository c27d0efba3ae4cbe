//! Scene snapshot persistence.
//!
//! A snapshot is the durable subset of engine state: the viewport and the
//! placed objects. Selection, gestures, and outpaint sessions are transient
//! and never persist. The JSON store writes atomically (temp file + rename)
//! so a crash mid-save can never leave a torn scene on disk.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{CanvasError, CanvasResult};
use crate::types::PlacedImage;
use crate::viewport::Viewport;

/// Durable scene state: everything needed to restore a composition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneSnapshot {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub objects: Vec<PlacedImage>,
}

/// Where snapshots go. The engine calls this on explicit save/load
/// commands; hosts pick the backing store.
pub trait SnapshotStore {
    fn save(&self, snapshot: &SceneSnapshot) -> CanvasResult<()>;

    /// Load the stored snapshot. A store with nothing saved yet returns an
    /// empty snapshot, not an error.
    fn load(&self) -> CanvasResult<SceneSnapshot>;
}

/// JSON-file snapshot store.
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the platform data directory
    /// (e.g. `~/.local/share/artboard/scene.json`).
    pub fn default_location() -> CanvasResult<Self> {
        let dir = dirs::data_dir()
            .ok_or(CanvasError::NoSnapshotDir)?
            .join("artboard");
        Ok(Self::new(dir.join("scene.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn save(&self, snapshot: &SceneSnapshot) -> CanvasResult<()> {
        let json = serde_json::to_string_pretty(snapshot)?;

        let parent = self.path.parent().ok_or(CanvasError::NoSnapshotDir)?;
        fs::create_dir_all(parent)?;

        // Write to a sibling temp file, then rename over the target.
        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(&self.path)
            .map_err(|e| CanvasError::Io(e.error))?;

        info!(
            path = %self.path.display(),
            objects = snapshot.objects.len(),
            "scene snapshot saved"
        );
        Ok(())
    }

    fn load(&self) -> CanvasResult<SceneSnapshot> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no snapshot on disk, starting empty");
                return Ok(SceneSnapshot::default());
            }
            Err(e) => return Err(e.into()),
        };

        let snapshot: SceneSnapshot = serde_json::from_str(&json)?;
        info!(
            path = %self.path.display(),
            objects = snapshot.objects.len(),
            "scene snapshot loaded"
        );
        Ok(snapshot)
    }
}
