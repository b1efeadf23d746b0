//! Step-summary conventions.
//!
//! After a server build finishes, test result and coverage fragments are
//! stitched onto the job's step summary file (the file named by
//! `GITHUB_STEP_SUMMARY`). This module collects the artifacts and appends
//! already-rendered markdown; parsing of coverage data itself happens
//! elsewhere and is not a concern of this layer.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Environment variable naming the step summary file.
pub const STEP_SUMMARY_ENV: &str = "GITHUB_STEP_SUMMARY";

/// Marker that starts the per-file detail table in a coverage summary.
const COVERAGE_DETAIL_MARKER: &str = "|**Name**";

/// Collect test result files (`*.trx`) under the given directory.
pub fn collect_test_results(directory: &Path) -> Result<Vec<PathBuf>> {
    rigging_core::paths::glob_files(directory, &["**/*.trx"]).map_err(Error::from)
}

/// Trim a coverage summary down to its header section.
///
/// The generated coverage markdown ends with a per-file detail table that is
/// too large for a step summary; everything from the `|**Name**` marker on is
/// dropped, along with the whitespace immediately before it. A summary without
/// the marker passes through whole.
#[must_use]
pub fn trim_coverage_summary(summary: &str) -> &str {
    match summary.find(COVERAGE_DETAIL_MARKER) {
        Some(index) => summary[..index].trim_end(),
        None => summary,
    }
}

/// Append a rendered fragment to the step summary file.
///
/// The file is created when absent; existing content keeps its position with
/// leading whitespace trimmed, and the fragment follows on a new line.
pub fn append_to_summary(summary_path: &Path, fragment: &str) -> Result<()> {
    let existing = if summary_path.exists() {
        std::fs::read_to_string(summary_path).map_err(|source| {
            Error::io(source, Some(summary_path.to_path_buf()), "reading step summary")
        })?
    } else {
        String::new()
    };

    let combined = format!("{}\n{fragment}", existing.trim_start());
    std::fs::write(summary_path, combined).map_err(|source| {
        Error::io(source, Some(summary_path.to_path_buf()), "writing step summary")
    })
}
