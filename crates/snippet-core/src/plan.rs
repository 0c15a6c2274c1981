//! # Build Plan
//!
//! Resolves the fixed fragment and output names against a directory and
//! runs the read-join-write sequence.
//!
//! Every fragment is read into memory before the output is opened, so a
//! failed read leaves any existing `snippet.js` exactly as it was.

use crate::error::{BuildError, Result};
use crate::fragment::{join_fragments, read_fragment, Fragment};
use crate::report::BuildReport;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the combined output file.
pub const OUTPUT_NAME: &str = "snippet.js";

/// Where a build reads its fragments from and writes its output to.
///
/// The default plan uses the process working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    dir: PathBuf,
}

impl Default for BuildPlan {
    fn default() -> Self {
        Self::new(".")
    }
}

impl BuildPlan {
    /// Create a plan rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Fragment paths in read order.
    pub fn fragment_paths(&self) -> impl Iterator<Item = (Fragment, PathBuf)> + '_ {
        Fragment::ALL
            .into_iter()
            .map(|fragment| (fragment, self.dir.join(fragment.file_name())))
    }

    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.dir.join(OUTPUT_NAME)
    }

    /// Read all fragments in order, stopping at the first failure.
    pub fn read_all(&self) -> Result<Vec<String>> {
        Fragment::ALL
            .into_iter()
            .map(|fragment| read_fragment(&self.dir, fragment))
            .collect()
    }

    /// Run the build: read, join, then write the output once.
    pub fn build(&self) -> Result<BuildReport> {
        let parts = self.read_all()?;
        let contents = join_fragments(&parts);

        let output = self.output_path();
        fs::write(&output, &contents).map_err(|source| BuildError::Write {
            path: output.clone(),
            source,
        })?;

        let sizes: Vec<(Fragment, usize)> = Fragment::ALL
            .into_iter()
            .zip(parts.iter().map(String::len))
            .collect();
        Ok(BuildReport::new(output, &contents, &sizes))
    }
}

/// Build `snippet.js` in the working directory.
pub fn build() -> Result<BuildReport> {
    BuildPlan::default().build()
}

// =============================================================================
// TESTS
// =============================================================================
