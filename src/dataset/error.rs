//! Dataset error types

use thiserror::Error;

/// Errors that can occur while loading a series from CSV
#[derive(Error, Debug)]
pub enum DatasetError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader error (malformed file, bad encoding)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Header row is missing a required column
    #[error("Missing column: {0}")]
    MissingColumn(&'static str),

    /// File parsed but produced no usable rows
    #[error("Empty dataset: no valid rows")]
    Empty,
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DatasetError::MissingColumn("Price");
        assert_eq!(err.to_string(), "Missing column: Price");

        let err = DatasetError::Empty;
        assert_eq!(err.to_string(), "Empty dataset: no valid rows");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DatasetError = io_err.into();
        assert!(matches!(err, DatasetError::Io(_)));
    }
}
