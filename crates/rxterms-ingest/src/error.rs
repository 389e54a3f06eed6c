//! Error types for RxTerms ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an ingestion run.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Input Shape Errors ===
    /// No header row was supplied.
    #[error("input is empty: no header row")]
    EmptyInput,

    /// Header row lacks a required column.
    #[error("required column '{column}' not found in header")]
    MissingColumn { column: String },

    // === Record Errors ===
    /// An active record has an empty display name.
    #[error("Error on line {line}: {content} (missing display name)")]
    MissingDisplayName { line: usize, content: String },

    /// A non-mixed strength has no leading numeric run.
    #[error("Bad strength data for rxcui {rxcui} on line {line}: '{strength}'")]
    MalformedStrength {
        line: usize,
        rxcui: String,
        strength: String,
    },

    // === File System Errors ===
    /// Data file not found.
    #[error("data file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the data file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The csv reader rejected a record.
    #[error("failed to parse {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// File encoding is not supported (only UTF-8).
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },
}

impl IngestError {
    /// Returns true for errors caused by the content of a data row.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::MissingDisplayName { .. } | Self::MalformedStrength { .. }
        )
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::MalformedStrength {
            line: 4,
            rxcui: "1234".to_string(),
            strength: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Bad strength data for rxcui 1234 on line 4: 'abc'"
        );
    }

    #[test]
    fn test_format_error_classification() {
        let missing = IngestError::MissingDisplayName {
            line: 2,
            content: "|||".to_string(),
        };
        assert!(missing.is_format_error());
        assert!(!IngestError::EmptyInput.is_format_error());
    }
}
