//! # Fragment Module
//!
//! The four source files that make up `snippet.js`, their fixed order,
//! and the two pure steps applied to them: reading and joining.

use crate::error::{BuildError, Result};
use std::fmt;
use std::fs;
use std::path::Path;

/// Five newlines, inserted between adjacent fragments.
pub const SEPARATOR: &str = "\n\n\n\n\n";

/// One of the input files combined into the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Fragment {
    Telegraph,
    Ciphers,
    TelegraphStorage,
    Userscript,
}

impl Fragment {
    /// All fragments in output order.
    pub const ALL: [Fragment; 4] = [
        Fragment::Telegraph,
        Fragment::Ciphers,
        Fragment::TelegraphStorage,
        Fragment::Userscript,
    ];

    /// File name, relative to the build directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Fragment::Telegraph => "telegraph.js",
            Fragment::Ciphers => "ciphers.js",
            Fragment::TelegraphStorage => "telegraph_storage.js",
            Fragment::Userscript => "userscript.js",
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Read one fragment fully and decode it as UTF-8.
///
/// Any I/O failure (missing file, permission denied, a directory in its
/// place) maps to [`BuildError::ResourceNotFound`].
pub fn read_fragment(dir: &Path, fragment: Fragment) -> Result<String> {
    let path = dir.join(fragment.file_name());
    let bytes = fs::read(&path).map_err(|source| BuildError::ResourceNotFound {
        path: path.clone(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|e| BuildError::Decode {
        valid_up_to: e.utf8_error().valid_up_to(),
        path,
    })
}

/// Join fragment contents with [`SEPARATOR`] between each adjacent pair.
#[must_use]
pub fn join_fragments<S: AsRef<str>>(parts: &[S]) -> String {
    let body: usize = parts.iter().map(|p| p.as_ref().len()).sum();
    let seps = parts.len().saturating_sub(1) * SEPARATOR.len();
    let mut out = String::with_capacity(body + seps);
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push_str(SEPARATOR);
        }
        out.push_str(part.as_ref());
    }
    out
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::error::BuildErrorKind;

    #[test]
    fn order_is_fixed() {
        let names: Vec<_> = Fragment::ALL.iter().map(|f| f.file_name()).collect();
        assert_eq!(
            names,
            vec!["telegraph.js", "ciphers.js", "telegraph_storage.js", "userscript.js"]
        );
    }

    #[test]
    fn join_single_letters() {
        let out = join_fragments(&["A", "B", "C", "D"]);
        assert_eq!(out, "A\n\n\n\n\nB\n\n\n\n\nC\n\n\n\n\nD");
        assert_eq!(out.len(), 19);
    }

    #[test]
    fn join_empty_fragments_leaves_only_separators() {
        let out = join_fragments(&["", "", "", ""]);
        assert_eq!(out, "\n".repeat(15));
    }

    #[test]
    fn join_does_not_pad_ends() {
        assert_eq!(join_fragments(&["only"]), "only");
        assert_eq!(join_fragments::<&str>(&[]), "");
    }

    #[test]
    fn read_missing_fragment() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_fragment(dir.path(), Fragment::Ciphers).unwrap_err();
        assert_eq!(err.kind(), BuildErrorKind::ResourceNotFound);
        assert_eq!(err.path(), dir.path().join("ciphers.js"));
    }

    #[test]
    fn read_invalid_utf8_fragment() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("userscript.js"), b"ok\xff\xfe").unwrap();
        let err = read_fragment(dir.path(), Fragment::Userscript).unwrap_err();
        match err {
            BuildError::Decode { valid_up_to, .. } => assert_eq!(valid_up_to, 2),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn read_keeps_content_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let text = "// ==UserScript==\r\nconst x = 'é';\n";
        fs::write(dir.path().join("telegraph.js"), text).unwrap();
        assert_eq!(read_fragment(dir.path(), Fragment::Telegraph).unwrap(), text);
    }
}
