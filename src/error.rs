//! Errors raised while loading the census table.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to open data file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed CSV input: {0}")]
    Csv(#[from] csv::Error),

    #[error("Line {line}: expected {expected} columns, found {found}")]
    ColumnCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: column '{column}' is not a valid integer: '{value}'")]
    InvalidNumber {
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("Line {line}: column '{column}' has unknown value '{value}'")]
    InvalidCategory {
        line: u64,
        column: &'static str,
        value: String,
    },
}

impl DataError {
    /// Whether the data file does not exist.
    pub fn is_source_missing(&self) -> bool {
        match self {
            DataError::Io { source, .. } => source.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_missing() {
        let err = DataError::Io {
            path: PathBuf::from("missing.csv"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.is_source_missing());

        let err = DataError::Io {
            path: PathBuf::from("locked.csv"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!err.is_source_missing());
    }

    #[test]
    fn test_error_messages() {
        let err = DataError::ColumnCount {
            line: 3,
            expected: 15,
            found: 14,
        };
        assert_eq!(err.to_string(), "Line 3: expected 15 columns, found 14");

        let err = DataError::InvalidNumber {
            line: 7,
            column: "age",
            value: "forty".to_string(),
        };
        assert!(err.to_string().contains("'age'"));
        assert!(err.to_string().contains("forty"));
    }
}
