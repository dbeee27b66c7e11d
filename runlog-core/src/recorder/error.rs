use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecorderError {
    #[error("failed to create log file {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to append to log file {path}: {source}")]
    Append {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RecorderError {
    pub fn create(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Create {
            path: path.into(),
            source,
        }
    }

    pub fn append(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Append {
            path: path.into(),
            source,
        }
    }
}
