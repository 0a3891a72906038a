use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown anamnesis section: {0}")]
    UnknownAnamnesisSection(String),

    #[error("unknown status praesens section: {0}")]
    UnknownStatusSection(String),
}
