//! Error types for gzarray operations.
//!
//! This module provides the error hierarchy using `thiserror` for the
//! compression, file I/O, and CLI stages of a run.

use thiserror::Error;

/// Result type alias for gzarray operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Compression step failed.
    #[error("{0}")]
    Compress(#[from] CompressError),

    /// I/O errors (file operations).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// CLI command errors.
    #[error("{0}")]
    Command(#[from] CommandError),
}

impl Error {
    /// Short machine-readable name of the error category.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Compress(_) => "compress",
            Self::Io(_) => "io",
            Self::Command(_) => "command",
        }
    }

    /// Returns true for the failures a run reports as a plain message.
    ///
    /// These are `gzip failed` and `Missing file name`. The process still
    /// exits successfully after printing them; only the remaining errors
    /// (I/O faults, bad configuration) end the run with a failure status.
    #[must_use]
    pub const fn is_diagnostic(&self) -> bool {
        matches!(
            self,
            Self::Compress(
                CompressError::ToolFailed { .. }
                    | CompressError::Spawn { .. }
                    | CompressError::Library { .. }
            ) | Self::Command(CommandError::MissingFileName)
        )
    }
}

/// Compression-specific errors.
#[derive(Error, Debug)]
pub enum CompressError {
    /// External tool ran and exited unsuccessfully.
    #[error("gzip failed")]
    ToolFailed {
        /// Program that was run.
        program: String,
        /// Exit code, if the process exited normally.
        status: Option<i32>,
    },

    /// External tool could not be started.
    #[error("gzip failed")]
    Spawn {
        /// Program that was run.
        program: String,
        /// Reason the spawn failed.
        reason: String,
    },

    /// In-process compression failed.
    #[error("gzip failed")]
    Library {
        /// Path being compressed.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Unknown compressor backend name.
    #[error("unknown compressor backend: {name}")]
    UnknownBackend {
        /// Name that was requested.
        name: String,
    },
}

/// I/O-specific errors for file operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to write file.
    #[error("failed to write file: {path}: {reason}")]
    WriteFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Memory mapping error.
    #[error("memory mapping failed: {path}: {reason}")]
    MmapFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Generic I/O error wrapper.
    #[error("{0}")]
    Generic(String),
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// No input path was given.
    #[error("Missing file name")]
    MissingFileName,
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(IoError::Generic(err.to_string()))
    }
}
