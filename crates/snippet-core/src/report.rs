//! # Report Module
//!
//! Summary of a successful build, returned to the caller instead of being
//! logged by the core.

use crate::fragment::Fragment;
use serde::Serialize;
use std::path::PathBuf;

/// Byte length of one fragment as read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FragmentSize {
    pub name: String,
    pub bytes: usize,
}

/// Outcome of a successful build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    /// Where the output was written.
    pub output: PathBuf,
    /// Total bytes written, separators included.
    pub bytes_written: usize,
    /// Fragment sizes in output order.
    pub fragments: Vec<FragmentSize>,
    /// BLAKE3 hex digest of the output.
    #[cfg(feature = "crypto-hash")]
    pub blake3: String,
}

impl BuildReport {
    pub(crate) fn new(output: PathBuf, contents: &str, sizes: &[(Fragment, usize)]) -> Self {
        Self {
            output,
            bytes_written: contents.len(),
            fragments: sizes
                .iter()
                .map(|(fragment, bytes)| FragmentSize {
                    name: fragment.file_name().to_string(),
                    bytes: *bytes,
                })
                .collect(),
            #[cfg(feature = "crypto-hash")]
            blake3: blake3::hash(contents.as_bytes()).to_hex().to_string(),
        }
    }

    /// Bytes contributed by the fragments alone.
    #[must_use]
    pub fn fragment_bytes(&self) -> usize {
        self.fragments.iter().map(|f| f.bytes).sum()
    }
}
