use thiserror::Error;

/// Errors from the ambient parts of the preview (settings, scheduler startup).
#[derive(Error, Debug)]
pub enum PreviewError {
    /// No home directory to derive a config directory from.
    #[error("could not determine config directory")]
    NoConfigDir,

    #[error("settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to start scheduler runtime: {0}")]
    Runtime(String),
}

pub type Result<T> = std::result::Result<T, PreviewError>;
