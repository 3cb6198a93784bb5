// tests/src/suites/cipher/error.rs
//! Structured error types for the cipher harness

use std::path::PathBuf;

use cipher_vectors_table::{EntryPoint, TableError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid harness config: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("report serialization failed: {0}")]
    Report(#[from] serde_json::Error),

    #[error("no handler registered for {}", .0.name())]
    Unsupported(EntryPoint),

    #[error("{failed} of {total} vectors failed")]
    Failures { failed: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, HarnessError>;
