use std::path::PathBuf;

use thiserror::Error;

/// Compute-backend acquisition failures. Fatal at startup; there is no
/// fallback between backends.
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("no accelerator device is available in this build")]
    NoAccelerator,
}

/// Failures while reading a file-backed minibatch source.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: malformed record: {reason}")]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("{path}:{line}: stream '{stream}' expected {expected} values, found {found}")]
    DimensionMismatch {
        path: PathBuf,
        line: usize,
        stream: String,
        expected: usize,
        found: usize,
    },

    #[error("{path}:{line}: missing stream '{stream}'")]
    MissingStream {
        path: PathBuf,
        line: usize,
        stream: String,
    },

    #[error("{path} contains no samples")]
    Empty { path: PathBuf },
}
