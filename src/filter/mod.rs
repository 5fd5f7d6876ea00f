//! Low-activity user filter.
//!
//! Reads a users CSV (header row required) and reports the email of every
//! user whose `actions` count is below a threshold. A missing or malformed
//! `actions` cell counts as zero actions, so such users are always reported.

use std::borrow::Cow;
use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use log::{debug, info, trace};

use crate::config::{FilterConfig, ACTIONS_COLUMN, EMAIL_COLUMN};

/// Result of scanning a users CSV.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    /// Number of data rows read (header excluded)
    pub rows_scanned: usize,
    /// Emails of low-activity users, in file order
    pub emails: Vec<String>,
}

/// Summary of a low-activity run.
#[derive(Debug, Clone)]
pub struct FilterReport {
    /// File that was read
    pub input: PathBuf,
    /// Number of data rows read (header excluded)
    pub rows_scanned: usize,
    /// Number of emails written to the output
    pub emails_printed: usize,
}

/// Parses an `actions` cell, defaulting to zero.
///
/// Missing, blank and non-numeric values yield `0.0`. Surrounding whitespace
/// is ignored; decimal, exponent, infinity and NaN forms are accepted, as are
/// `_` separators between digits (`1_000`). A NaN count compares false
/// against any threshold, so such a row is never reported.
pub fn parse_actions(raw: Option<&str>) -> f64 {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return 0.0;
    };
    match strip_digit_separators(value).and_then(|digits| digits.parse::<f64>().ok()) {
        Some(actions) => actions,
        None => {
            trace!("Treating non-numeric actions value {value:?} as 0");
            0.0
        }
    }
}

/// Removes `_` digit separators. Returns `None` if an underscore is not
/// surrounded by ASCII digits on both sides.
fn strip_digit_separators(value: &str) -> Option<Cow<'_, str>> {
    if !value.contains('_') {
        return Some(Cow::Borrowed(value));
    }
    let bytes = value.as_bytes();
    let well_placed = bytes.iter().enumerate().all(|(idx, b)| {
        *b != b'_'
            || (idx > 0
                && bytes[idx - 1].is_ascii_digit()
                && bytes.get(idx + 1).is_some_and(|next| next.is_ascii_digit()))
    });
    well_placed.then(|| Cow::Owned(value.replace('_', "")))
}

/// Position of a column in the header row. With duplicate names the last
/// one wins, matching how a row is read into a name-to-value mapping.
fn column_index(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .enumerate()
        .filter(|(_, header)| *header == name)
        .map(|(idx, _)| idx)
        .last()
}

/// Selects the emails of users with fewer than `threshold` actions.
///
/// Each qualifying row yields its email once, in file order; rows whose
/// email cell is missing or empty are skipped. Rows shorter than the header
/// are accepted and their missing cells treated as absent.
///
/// # Errors
///
/// Returns an error if the header or a row cannot be read (I/O failure,
/// malformed quoting, invalid UTF-8).
pub fn select_low_activity_emails<R: Read>(reader: R, threshold: f64) -> Result<Selection> {
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = csv_reader
        .headers()
        .context("Failed to read CSV header row")?
        .clone();
    let actions_idx = column_index(&headers, ACTIONS_COLUMN);
    let email_idx = column_index(&headers, EMAIL_COLUMN);
    if actions_idx.is_none() {
        debug!("No '{ACTIONS_COLUMN}' column; every row counts as 0 actions");
    }
    if email_idx.is_none() {
        debug!("No '{EMAIL_COLUMN}' column; no emails can be reported");
    }

    let mut selection = Selection::default();
    for (line, record) in csv_reader.records().enumerate() {
        let record = record.with_context(|| format!("Failed to read CSV row {}", line + 1))?;
        selection.rows_scanned += 1;

        let actions = parse_actions(actions_idx.and_then(|idx| record.get(idx)));
        if actions >= threshold {
            continue;
        }

        match email_idx.and_then(|idx| record.get(idx)) {
            Some(email) if !email.is_empty() => selection.emails.push(email.to_string()),
            _ => debug!("Skipping low-activity row {} without an email", line + 1),
        }
    }

    Ok(selection)
}

/// Runs the low-activity filter: reads the configured CSV and writes one
/// email per line to `out`.
///
/// # Errors
///
/// Returns an error if the input cannot be opened or parsed, or if writing
/// to `out` fails.
pub fn run_low_activity<W: Write>(config: &FilterConfig, out: &mut W) -> Result<FilterReport> {
    let file = File::open(&config.input)
        .with_context(|| format!("Failed to open input file: {}", config.input.display()))?;

    let selection = select_low_activity_emails(file, config.threshold)
        .with_context(|| format!("Failed to parse {}", config.input.display()))?;

    for email in &selection.emails {
        writeln!(out, "{email}").context("Failed to write email to output")?;
    }
    out.flush().context("Failed to flush output")?;

    info!(
        "Scanned {} rows, {} users below {} actions",
        selection.rows_scanned,
        selection.emails.len(),
        config.threshold
    );

    Ok(FilterReport {
        input: config.input.clone(),
        rows_scanned: selection.rows_scanned,
        emails_printed: selection.emails.len(),
    })
}
