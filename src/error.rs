//! Error types for cinematch operations.
//!
//! Loading errors are fatal at startup; `NotFound` is the only error a
//! caller is expected to recover from per query.

use thiserror::Error;

/// Main error type for catalog loading, index building and queries.
///
/// # Examples
///
/// ```
/// use cinematch::error::RecommendError;
///
/// let err = RecommendError::NotFound { name: "zzz".to_string() };
/// assert!(err.to_string().contains("check spelling"));
/// ```
#[derive(Error, Debug)]
pub enum RecommendError {
    /// The catalog has no rows, so no index can be built.
    #[error("Cannot build a similarity index over an empty catalog")]
    EmptyCatalog,

    /// The queried title does not match any catalog row.
    #[error("'{name}' is not in our database. Please check spelling.")]
    NotFound {
        /// Name as supplied by the caller
        name: String,
    },

    /// A required column is absent from the input header.
    #[error("Missing column '{column}' (available: {available:?})")]
    MissingColumn {
        /// Column that was requested
        column: String,
        /// Columns found in the header
        available: Vec<String>,
    },

    /// Malformed delimited input.
    #[error("CSV error at line {line}: {message}")]
    Csv {
        /// 1-based line number (header is line 1)
        line: u64,
        /// Parser message
        message: String,
    },

    /// Invalid configuration or query value.
    #[error("Invalid parameter: {param} = {value}, expected {constraint}")]
    InvalidParameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Matrix/vector dimensions don't match.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RecommendError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an invalid parameter error
    #[must_use]
    pub fn invalid_parameter(param: &str, value: impl ToString, constraint: &str) -> Self {
        Self::InvalidParameter {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }

    /// Whether a caller can keep serving queries after this error.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::InvalidParameter { .. })
    }
}

impl From<csv::Error> for RecommendError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map_or(0, csv::Position::line);
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(e) => Self::Io(e),
            _ => Self::Csv { line, message },
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, RecommendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog_display() {
        let err = RecommendError::EmptyCatalog;
        assert!(err.to_string().contains("empty catalog"));
    }

    #[test]
    fn test_not_found_display() {
        let err = RecommendError::NotFound {
            name: "ZzzNotAMovie".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("ZzzNotAMovie"));
        assert!(msg.contains("not in our database"));
        assert!(msg.contains("check spelling"));
    }

    #[test]
    fn test_missing_column_display() {
        let err = RecommendError::MissingColumn {
            column: "comb".to_string(),
            available: vec!["movie_title".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("comb"));
        assert!(msg.contains("movie_title"));
    }

    #[test]
    fn test_invalid_parameter_helper() {
        let err = RecommendError::invalid_parameter("top_k", 0, ">0");
        let msg = err.to_string();
        assert!(msg.contains("top_k = 0"));
        assert!(msg.contains(">0"));
    }

    #[test]
    fn test_dimension_mismatch_helper() {
        let err = RecommendError::dimension_mismatch("rows", 100, 50);
        let msg = err.to_string();
        assert!(msg.contains("rows=100"));
        assert!(msg.contains("50"));
    }

    #[test]
    fn test_recoverable() {
        assert!(RecommendError::NotFound {
            name: "x".to_string()
        }
        .is_recoverable());
        assert!(!RecommendError::EmptyCatalog.is_recoverable());
    }

    #[test]
    fn test_from_io_error() {
        use std::error::Error;
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RecommendError = io_err.into();
        assert!(matches!(err, RecommendError::Io(_)));
        assert!(err.source().is_some());
    }
}
