use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    // Input errors
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("File {path} too short for an idx header: {len} bytes, expected at least {expected}")]
    TruncatedHeader {
        path: PathBuf,
        len: usize,
        expected: usize,
    },

    // Data integrity
    #[error("Corrupt or mismatched dataset: {labels} labels but {pixel_bytes} image bytes, expected {expected}")]
    SizeMismatch {
        labels: usize,
        pixel_bytes: usize,
        expected: usize,
    },

    // Argument errors
    #[error("Unknown mode '{0}', expected 'train' or 'test'")]
    UnknownMode(String),

    #[error("Unknown output format '{0}', expected 'binary' or 'csv'")]
    UnknownFormat(String),

    // Output errors
    #[error("Failed to write {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}
