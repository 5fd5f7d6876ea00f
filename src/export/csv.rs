//! CSV export functionality.
//!
//! Writes flattened users to a CSV file whose header is the sorted union of
//! every field seen. The file is written to a temporary file beside the
//! target and renamed into place, so the target is either left untouched or
//! fully replaced.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{Terminator, WriterBuilder};
use tempfile::{Builder, NamedTempFile};

use super::row::FlatRecord;

/// Returns the sorted, de-duplicated union of field names across `records`.
pub fn collect_columns(records: &[FlatRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|record| record.keys().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Writes `records` under the `columns` header to `path`.
///
/// Fields a record lacks are written as empty cells. Lines end in CRLF and
/// cells are quoted only when needed.
///
/// A replaced file keeps its permissions. A new file gets the mode a plain
/// create would give it (`0o666` less the umask on Unix).
///
/// # Errors
///
/// Returns an error if the temporary file cannot be created or written, or
/// if it cannot be renamed over `path`.
pub fn write_users_csv(path: &Path, columns: &[String], records: &[FlatRecord]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = create_temp_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    if let Ok(existing) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .with_context(|| format!("Failed to copy permissions of {}", path.display()))?;
    }

    {
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::CRLF)
            .from_writer(tmp.as_file_mut());

        writer
            .write_record(columns)
            .context("Failed to write CSV header")?;
        for record in records {
            writer
                .write_record(
                    columns
                        .iter()
                        .map(|column| record.get(column).map(String::as_str).unwrap_or("")),
                )
                .context("Failed to write CSV row")?;
        }
        writer.flush().context("Failed to flush CSV output")?;
    }

    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    Ok(())
}

fn create_temp_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}
