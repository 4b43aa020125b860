//! Side-channel bulk importer for normalized spreadsheet rows.
//!
//! Spreadsheet parsing itself stays outside the core: the collaborator maps
//! sheet columns onto [`ImportRow`] values (or serializes them to a JSON
//! array for [`import_json`]) and this module owns the normalization and
//! insertion policy.

use std::io::Read;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{
    asset,
    contact::ContactDraft,
    store::{StoreError, sqlite::ContactStore},
    types::ContactId,
};

/// One normalized row of the import sheet.
///
/// `photo` holds a filesystem path to resolve into blob bytes, not the
/// bytes themselves.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImportRow {
    /// Full name, required non-empty.
    pub name: String,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Postal address.
    #[serde(default)]
    pub address: Option<String>,
    /// Path to a photo file on disk.
    #[serde(default)]
    pub photo: Option<String>,
    /// Birth date in `YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS` form.
    #[serde(default)]
    pub birth_date: Option<String>,
    /// Occupation.
    #[serde(default)]
    pub occupation: Option<String>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Batch-level import failures; these abort the whole run.
#[derive(Debug)]
pub enum ImportError {
    /// The JSON payload could not be parsed into rows.
    Json(serde_json::Error),
    /// The record store failed; already-inserted rows stay inserted.
    Store(StoreError),
}

impl From<serde_json::Error> for ImportError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<StoreError> for ImportError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Why a single row was skipped; the rest of the batch continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowRejection {
    /// The birth date could not be normalized to `YYYY-MM-DD`.
    InvalidDate(String),
    /// The name column was empty.
    EmptyName,
}

/// A skipped row and the reason it was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    /// Zero-based row position within the batch.
    pub row: usize,
    /// Why the row was not inserted.
    pub reason: RowRejection,
}

/// Summary of one import run.
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Ids assigned to inserted rows, in batch order.
    pub inserted: Vec<ContactId>,
    /// Rows rejected with their reasons.
    pub rejected: Vec<RejectedRow>,
    /// Rows inserted without a photo because their photo path was unreadable.
    pub photos_skipped: Vec<usize>,
}

/// Inserts a batch of rows into `store`.
///
/// Per-row problems (bad date, empty name) reject that row only; an
/// unreadable photo path inserts the row with no photo. Store-level
/// failures abort the batch.
pub fn import_rows<I>(store: &mut ContactStore, rows: I) -> Result<ImportReport, ImportError>
where
    I: IntoIterator<Item = ImportRow>,
{
    let mut report = ImportReport::default();

    for (row_idx, row) in rows.into_iter().enumerate() {
        if row.name.trim().is_empty() {
            tracing::warn!(row = row_idx, "rejecting import row with empty name");
            report.rejected.push(RejectedRow {
                row: row_idx,
                reason: RowRejection::EmptyName,
            });
            continue;
        }

        let raw_date = row.birth_date.as_deref().unwrap_or("");
        let Some(birth_date) = normalize_birth_date(raw_date) else {
            tracing::warn!(row = row_idx, value = raw_date, "rejecting import row with unparseable date");
            report.rejected.push(RejectedRow {
                row: row_idx,
                reason: RowRejection::InvalidDate(raw_date.to_string()),
            });
            continue;
        };

        let photo = match row.photo.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(path) => match asset::encode(path) {
                Ok(blob) => Some(blob),
                Err(_) => {
                    tracing::warn!(row = row_idx, path, "photo path unreadable, inserting row without photo");
                    report.photos_skipped.push(row_idx);
                    None
                }
            },
        };

        let draft = ContactDraft {
            name: row.name,
            email: row.email.unwrap_or_default(),
            phone: row.phone.unwrap_or_default(),
            address: row.address.unwrap_or_default(),
            birth_date,
            occupation: row.occupation.unwrap_or_default(),
            notes: row.notes.unwrap_or_default(),
            photo,
        };

        let id = store.create(&draft)?;
        report.inserted.push(id);
    }

    Ok(report)
}

/// Parses a JSON array of [`ImportRow`] values and imports it.
pub fn import_json(store: &mut ContactStore, reader: impl Read) -> Result<ImportReport, ImportError> {
    let rows: Vec<ImportRow> = serde_json::from_reader(reader)?;
    import_rows(store, rows)
}

// Accepts a bare date or a spreadsheet datetime stamp; output is always
// zero-padded YYYY-MM-DD. Empty input means "unset" and stays empty.
fn normalize_birth_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(String::new());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.format("%Y-%m-%d").to_string());
    }
    if let Ok(stamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(stamp.date().format("%Y-%m-%d").to_string());
    }
    None
}
