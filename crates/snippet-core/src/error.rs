//! # Error Module
//!
//! Failure taxonomy for a build run. Every variant is fatal: a run either
//! writes the complete output or returns one of these without touching it.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from a build run.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A fragment is missing or cannot be read.
    #[error("resource not found: {}: {source}", .path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A fragment's bytes are not valid UTF-8.
    #[error("invalid UTF-8 in {} at byte {valid_up_to}", .path.display())]
    Decode { path: PathBuf, valid_up_to: usize },

    /// The output could not be created or written.
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Discriminant of [`BuildError`] without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildErrorKind {
    ResourceNotFound,
    Decode,
    Write,
}

impl BuildError {
    #[must_use]
    pub fn kind(&self) -> BuildErrorKind {
        match self {
            Self::ResourceNotFound { .. } => BuildErrorKind::ResourceNotFound,
            Self::Decode { .. } => BuildErrorKind::Decode,
            Self::Write { .. } => BuildErrorKind::Write,
        }
    }

    /// The file the failure is about.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::ResourceNotFound { path, .. }
            | Self::Decode { path, .. }
            | Self::Write { path, .. } => path,
        }
    }
}

/// Result alias for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_path() {
        let err = BuildError::ResourceNotFound {
            path: PathBuf::from("ciphers.js"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("resource not found: ciphers.js"));
        assert_eq!(err.kind(), BuildErrorKind::ResourceNotFound);
    }

    #[test]
    fn decode_reports_offset() {
        let err = BuildError::Decode {
            path: PathBuf::from("telegraph.js"),
            valid_up_to: 7,
        };
        assert_eq!(err.to_string(), "invalid UTF-8 in telegraph.js at byte 7");
        assert_eq!(err.path(), std::path::Path::new("telegraph.js"));
    }
}
