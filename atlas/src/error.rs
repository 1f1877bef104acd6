use std::path::PathBuf;

use thiserror::Error;

/// Failures while bringing up the dataset. All of these are fatal: the
/// process must not serve traffic over a missing or unparsable dataset.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("expected follower dataset at {path}")]
    MissingDataset { path: PathBuf },

    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),
}
