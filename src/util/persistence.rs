//! Session state saved to the platform config directory.

use std::path::PathBuf;
use std::{fs, io};

use directories::ProjectDirs;
use thiserror::Error;

use crate::domain::app_state::PersistedState;

const STATE_FILE: &str = "planner.json";

#[derive(Debug, Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

fn state_file() -> Option<PathBuf> {
    ProjectDirs::from("com", "LobsterExportPlanner", "LobsterExportPlanner")
        .map(|dirs| dirs.config_dir().join(STATE_FILE))
}

/// A missing or unreadable state file is not an error; the planner starts
/// from defaults.
pub fn load_persisted_state() -> Option<PersistedState> {
    let data = fs::read_to_string(state_file()?).ok()?;
    serde_json::from_str(&data).ok()
}

pub fn save_persisted_state(state: &PersistedState) -> Result<(), PersistSaveError> {
    let path = state_file().ok_or(PersistSaveError::StorageUnavailable)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_vec_pretty(state)?)?;
    Ok(())
}
