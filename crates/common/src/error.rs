use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResultToolsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path {0} does not exist.")]
    PathNotFound(String),

    #[error("The given path {0} is a file. It must be a directory.")]
    NotADirectory(String),

    #[error(
        "Not enough disk space after saving the summary file. \
         Available free disk: {available} bytes. Summary file size: {summary_size} bytes."
    )]
    InsufficientDiskSpace { available: u64, summary_size: u64 },

    #[error("Invalid summary file {path}: {reason}")]
    InvalidSummary { path: String, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
