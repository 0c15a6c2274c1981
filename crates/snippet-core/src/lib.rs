//! # Snippet Core
//!
//! Concatenates the four userscript sources into one `snippet.js`:
//!
//! ```text
//! telegraph.js ──────────┐
//! ciphers.js ────────────┤  "\n\n\n\n\n"    ┌────────────┐
//! telegraph_storage.js ──┼─────────────────►│ snippet.js │
//! userscript.js ─────────┘                  └────────────┘
//! ```
//!
//! No fragment is parsed or transformed. A run either writes the whole
//! output or fails before writing anything.
//!
//! ```rust,ignore
//! let report = snippet_core::build()?;
//! println!("wrote {} bytes to {}", report.bytes_written, report.output.display());
//! ```

pub mod error;
pub mod fragment;
pub mod plan;
pub mod report;

pub use error::{BuildError, BuildErrorKind, Result};
pub use fragment::{join_fragments, read_fragment, Fragment, SEPARATOR};
pub use plan::{build, BuildPlan, OUTPUT_NAME};
pub use report::{BuildReport, FragmentSize};
