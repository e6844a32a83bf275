use std::path::PathBuf;

use thiserror::Error;

/// Failures that prevent a file from being checked at all.
///
/// Format violations are never errors; they are reported as diagnostics.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not valid UTF-8: {source}")]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
}
