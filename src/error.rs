//! Error types for manifest loading and artifact acquisition

use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single `acquire` call. Every variant is terminal for its request.
#[derive(Error, Debug)]
pub enum AcquireError {
    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("SHA256 mismatch for {url}: expected one of [{}], got {actual}", .expected.join(", "))]
    ChecksumMismatch {
        url: String,
        expected: Vec<String>,
        actual: String,
    },

    #[error("Filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Incomplete write to {}: expected {expected} bytes, wrote {written}", .path.display())]
    IncompleteWrite {
        path: PathBuf,
        expected: usize,
        written: usize,
    },
}

impl AcquireError {
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AcquireError::Filesystem {
            path: path.into(),
            source,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read manifest {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid manifest entry {index}: {reason}")]
    Invalid { index: usize, reason: String },
}
