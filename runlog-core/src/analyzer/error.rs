use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::precheck::PreconditionError;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    #[error("failed to read log file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write summary {path}: {source}")]
    WriteSummary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no log loaded; call read_log first")]
    NotLoaded,

    #[error("no metrics calculated; call calculate_metrics first")]
    NotCalculated,
}

impl AnalyzerError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write_summary(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::WriteSummary {
            path: path.into(),
            source,
        }
    }
}
