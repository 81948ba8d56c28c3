use crate::Result;
use derive_more::{AsRef, Display, From};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;

/// Opaque reference to a persisted trainer snapshot; recorded verbatim,
/// never inspected.
#[derive(Debug, Clone, PartialEq, Eq, Display, From, AsRef, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckpointRef(String);

impl CheckpointRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn from_path(path: &Path) -> Self {
        CheckpointRef(path.to_string_lossy().into_owned())
    }
}

impl From<&str> for CheckpointRef {
    fn from(value: &str) -> Self {
        CheckpointRef(value.to_owned())
    }
}

/// Clears the checkpoint root before a fresh run; a missing directory is
/// not an error.
pub fn prepare_checkpoint_dir(dir: &Path) -> Result<()> {
    match std::fs::remove_dir_all(dir) {
        Ok(()) => {}
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => return Err(err.into()),
    }
    std::fs::create_dir_all(dir)?;
    Ok(())
}
