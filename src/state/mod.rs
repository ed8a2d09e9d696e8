//! State persistence module
//!
//! Loads and saves the streak record as JSON. A missing file yields a fresh
//! default record; a file that exists but cannot be parsed is surfaced as an
//! error rather than overwritten, so user history is never silently lost.

mod types;

pub use types::StreakState;

use crate::error::{Result, StreakError};
use std::fs;
use std::path::Path;

/// Load the streak state, or a default record if none was persisted yet
pub fn load(path: &Path) -> Result<StreakState> {
    if !path.exists() {
        return Ok(StreakState::default());
    }

    let content = fs::read_to_string(path)?;
    let state: StreakState = serde_json::from_str(&content).map_err(|e| {
        StreakError::CorruptState(format!(
            "Cannot parse '{}': {}. Fix or remove the file to continue.",
            path.display(),
            e
        ))
    })?;

    Ok(state)
}

/// Save the streak state, overwriting the persisted record wholly
pub fn save(state: &StreakState, path: &Path) -> Result<()> {
    // Serialize fully before touching the file
    let json = serde_json::to_string_pretty(state)?;

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, json)?;
    Ok(())
}
