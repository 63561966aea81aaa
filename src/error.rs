//! Error types for corpus loading and query selection

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to read word list {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Query offset {offset} out of range for corpus of {len} words")]
    OffsetOutOfRange { offset: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_error_display() {
        let error = ScanError::SourceRead {
            path: PathBuf::from("words.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(
            error.to_string(),
            "Failed to read word list words.txt: no such file"
        );

        let error = ScanError::OffsetOutOfRange {
            offset: 100_000,
            len: 42,
        };
        assert_eq!(
            error.to_string(),
            "Query offset 100000 out of range for corpus of 42 words"
        );
    }

    #[test]
    fn test_scan_error_source() {
        use std::error::Error;

        let error = ScanError::SourceRead {
            path: PathBuf::from("words.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(error.source().is_some());

        let error = ScanError::OffsetOutOfRange { offset: 1, len: 0 };
        assert!(error.source().is_none());
    }
}
