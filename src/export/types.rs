//! Export report.

use std::path::PathBuf;

/// Summary of a completed export.
#[derive(Clone, Debug)]
pub struct ExportReport {
    /// Number of non-empty pages fetched
    pub pages: usize,
    /// Total users fetched across all pages
    pub users: usize,
    /// Header columns, sorted
    pub columns: Vec<String>,
    /// Target CSV path
    pub output: PathBuf,
    /// Whether the CSV was written (false when the API returned no users)
    pub file_written: bool,
}
