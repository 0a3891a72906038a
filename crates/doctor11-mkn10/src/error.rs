use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to read catalog at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed catalog data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("diagnosis code {0} appears more than once")]
    DuplicateCode(String),

    #[error("failed to fetch catalog from {url}: {message}")]
    Fetch { url: String, message: String },
}
