use thiserror::Error;

/// Streak error types
#[derive(Error, Debug)]
pub enum StreakError {
    #[error("Corrupt state file: {0}")]
    CorruptState(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for streak operations
pub type Result<T> = std::result::Result<T, StreakError>;
