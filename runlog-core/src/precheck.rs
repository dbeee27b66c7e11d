//! Typed precondition checks gating public entry points.
//!
//! A precondition failure indicates caller error and is meant to abort the
//! calling operation entirely. I/O failures are a different class; the
//! components report those through their own error types.

use std::fmt::Debug;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreconditionError {
    #[error("path does not exist: {path}")]
    MissingPath { path: PathBuf },

    #[error("not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("expected {expected}, got {actual}")]
    Mismatch { expected: String, actual: String },
}

/// Fails unless `path` exists.
pub fn ensure_exists(path: &Path) -> Result<(), PreconditionError> {
    if path.exists() {
        Ok(())
    } else {
        Err(PreconditionError::MissingPath {
            path: path.to_path_buf(),
        })
    }
}

/// Fails unless `path` exists and is a directory.
pub fn ensure_dir(path: &Path) -> Result<(), PreconditionError> {
    ensure_exists(path)?;

    if path.is_dir() {
        Ok(())
    } else {
        Err(PreconditionError::NotADirectory {
            path: path.to_path_buf(),
        })
    }
}

/// Fails unless `expected == actual`.
pub fn ensure_eq<T: PartialEq + Debug>(expected: &T, actual: &T) -> Result<(), PreconditionError> {
    if expected == actual {
        Ok(())
    } else {
        Err(PreconditionError::Mismatch {
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        })
    }
}
