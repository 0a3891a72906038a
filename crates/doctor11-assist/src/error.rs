use std::path::PathBuf;

use thiserror::Error;

use crate::gcs::GcsViolation;

#[derive(Debug, Error)]
pub enum AssistError {
    #[error("failed to read lab results at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed lab results: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("lab results must be a JSON object")]
    NotAnObject,

    #[error("malformed lab results CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("lab results CSV has no data row")]
    EmptyCsv,

    #[error("GCS out of range: {0}")]
    Gcs(#[from] GcsViolation),
}
