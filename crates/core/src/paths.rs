//! Deterministic file globbing.
//!
//! Thin wrapper over `globset` + `walkdir` used by the convention layers to
//! find build artifacts (test result files, coverage summaries). Results are
//! sorted so repeated runs over the same tree produce identical output.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSetBuilder};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Collect all files under `root` whose root-relative path matches any of the
/// given glob patterns.
///
/// A missing `root` yields an empty list rather than an error; convention
/// passes routinely probe directories that only exist after certain targets
/// have run.
pub fn glob_files(root: impl AsRef<Path>, patterns: &[&str]) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .map_err(|err| Error::pattern(*pattern, err.to_string()))?;
        builder.add(glob);
    }
    let set = builder
        .build()
        .map_err(|err| Error::pattern(patterns.join(", "), err.to_string()))?;

    if !root.exists() {
        return Ok(Vec::new());
    }

    let mut matches = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry.map_err(|err| {
            let path = err.path().map(Path::to_path_buf);
            let source = err
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("file system loop"));
            Error::io(source, path, "walking directory tree")
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or_else(|_| entry.path());
        if set.is_match(relative) {
            matches.push(entry.path().to_path_buf());
        }
    }

    matches.sort();
    Ok(matches)
}
