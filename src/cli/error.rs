//! Error types for the cinematch CLI

use std::process::ExitCode;
use thiserror::Error;

use cinematch::RecommendError;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// Library error (loading, index build, invalid option)
    #[error(transparent)]
    Recommend(#[from] RecommendError),

    /// Some queried titles could not be answered
    #[error("{failed} of {total} queries returned no recommendations")]
    QueriesFailed {
        /// Queries that were blank or not found
        failed: usize,
        /// Queries attempted
        total: usize,
    },

    /// Failed writing output or reading stdin
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        match self {
            Self::Recommend(e) => match e {
                RecommendError::NotFound { .. } => ExitCode::from(2),
                RecommendError::Io(_) => ExitCode::from(3),
                RecommendError::MissingColumn { .. } | RecommendError::Csv { .. } => {
                    ExitCode::from(4)
                }
                RecommendError::EmptyCatalog => ExitCode::from(5),
                RecommendError::InvalidParameter { .. } => ExitCode::from(6),
                RecommendError::DimensionMismatch { .. } => ExitCode::from(1),
            },
            Self::QueriesFailed { .. } => ExitCode::from(2),
            Self::Io(_) => ExitCode::from(7),
            Self::Json(_) => ExitCode::from(1),
        }
    }
}
