use std::path::{Path, PathBuf};

use rust_xlsxwriter::XlsxError;
use thiserror::Error;

/// Convenience alias used across the workspace.
pub type Result<T> = std::result::Result<T, SampleError>;

/// Top-level error type for sample data generation.
#[derive(Error, Debug)]
pub enum SampleError {
    #[error("File system error at {}", .path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] XlsxError),

    #[error("Invalid table: {0}")]
    InvalidTable(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Classification of errors for logging and exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Output path not writable, missing directory, disk full, closed stdout.
    SystemError,
    /// The workbook encoder rejected the data or failed to assemble the file.
    SerializationError,
    /// The in-memory table broke its shape invariants.
    DataError,
    /// Bad command line or environment.
    ConfigError,
}

impl SampleError {
    /// Wrap an I/O failure that happened while touching `path`.
    pub fn file_system(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns the broad error category for routing and display purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FileSystem { .. } | Self::Io(_) => ErrorCategory::SystemError,
            Self::Serialization(_) => ErrorCategory::SerializationError,
            Self::InvalidTable(_) => ErrorCategory::DataError,
            Self::Config(_) => ErrorCategory::ConfigError,
        }
    }

    /// Process exit status for this error, following the BSD `sysexits` codes.
    pub fn exit_code(&self) -> u8 {
        self.category().exit_code()
    }
}

impl ErrorCategory {
    pub fn exit_code(self) -> u8 {
        match self {
            Self::ConfigError => 64,
            Self::DataError => 65,
            Self::SerializationError => 70,
            Self::SystemError => 74,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_file_system_error_keeps_path_and_source() {
        let err = SampleError::file_system(
            "missing/dir/out.xlsx",
            io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        );
        assert!(err.to_string().contains("missing/dir/out.xlsx"));
        let source = err.source().expect("source should be attached");
        assert!(source.to_string().contains("no such directory"));
        assert_eq!(err.category(), ErrorCategory::SystemError);
    }

    #[test]
    fn test_io_error_converts_via_from() {
        let err: SampleError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, SampleError::Io(_)));
        assert_eq!(err.exit_code(), 74);
    }

    #[test]
    fn test_serialization_error_converts_via_from() {
        let err: SampleError = XlsxError::RowColumnLimitError.into();
        assert!(matches!(err, SampleError::Serialization(_)));
        assert_eq!(err.category(), ErrorCategory::SerializationError);
        assert!(err.to_string().starts_with("Serialization error"));
    }

    #[test]
    fn test_exit_codes_are_distinct_and_non_zero() {
        let codes = [
            ErrorCategory::SystemError.exit_code(),
            ErrorCategory::SerializationError.exit_code(),
            ErrorCategory::DataError.exit_code(),
            ErrorCategory::ConfigError.exit_code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            assert_ne!(*a, 0);
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_invalid_table_and_config_categories() {
        assert_eq!(
            SampleError::InvalidTable("ragged".into()).category(),
            ErrorCategory::DataError
        );
        assert_eq!(
            SampleError::Config("bad arg".into()).exit_code(),
            ErrorCategory::ConfigError.exit_code()
        );
    }
}
