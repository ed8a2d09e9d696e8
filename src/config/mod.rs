//! Configuration module
//!
//! Resolves the state file location. The state lives in the user's home
//! directory (one streak per user, independent of the working directory),
//! falling back to the working directory when no home can be determined.

use std::path::PathBuf;

/// Streak configuration
///
/// A plain value handed to the state store, so tests can point it at a
/// temporary path instead of the real home directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the persisted streak state
    pub state_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let state_file = dirs::home_dir()
            .map(|home| home.join(".streak.json"))
            .unwrap_or_else(|| PathBuf::from(".streak.json"));

        Self { state_file }
    }
}
