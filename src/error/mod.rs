//! # Error Module
//!
//! Error types for the duplicate image detector.
//!
//! ## Design Principles
//! - **Never panic** on user data - return errors instead
//! - **Include context** - paths, file names, what went wrong
//! - **Per-file errors are not fatal** - the batch keeps going

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum DetectorError {
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Errors raised while resolving input paths into candidates
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("File does not exist: {path}")]
    NotFound { path: PathBuf },

    #[error("Invalid file extension: {path}")]
    InvalidExtension { path: PathBuf },

    #[error("Not a regular file: {path}")]
    NotRegularFile { path: PathBuf },

    #[error("Failed to read directory {path}: {source}")]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// The offending path
    pub fn path(&self) -> &PathBuf {
        match self {
            ScanError::NotFound { path }
            | ScanError::InvalidExtension { path }
            | ScanError::NotRegularFile { path }
            | ScanError::ReadDirectory { path, .. } => path,
        }
    }
}

/// Errors raised while fingerprinting a single file
#[derive(Error, Debug)]
pub enum HashError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("Image is empty: {path}")]
    EmptyImage { path: PathBuf },

    #[error("Failed to resize {path}: {reason}")]
    Resize { path: PathBuf, reason: String },
}

/// Errors raised while writing the report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, DetectorError>;
