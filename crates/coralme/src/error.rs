//! Error taxonomy. Every variant collapses to a single `Error: …` line and
//! exit code 1 at the binary boundary; the tags stay distinct for tests.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("malformed organism descriptor {}: {}", path.display(), reason)]
    Descriptor { path: PathBuf, reason: String },

    #[error("build failed: {0}")]
    Build(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
