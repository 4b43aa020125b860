//! Persistence layer: error taxonomy, lookup results, and the write seam.

/// SQLite-backed contact store.
pub mod sqlite;

use crate::{
    contact::{ContactDraft, ContactRecord},
    types::ContactId,
};

/// Errors surfaced by the record store.
#[derive(Debug)]
pub enum StoreError {
    /// No contact name matched the lookup pattern.
    NotFound(String),
    /// No contact row exists with this id.
    MissingContact(ContactId),
    /// The backing database could not be opened. Fatal, never retried.
    Unavailable(rusqlite::Error),
    /// Any other SQLite-level failure.
    Sqlite(rusqlite::Error),
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Convenience alias for store results.
pub type StoreResult<T> = Result<T, StoreError>;

/// Outcome of a name-substring lookup that matched at least one row.
///
/// Zero matches surface as [`StoreError::NotFound`] instead. More than one
/// match is not auto-resolved: the caller gets every candidate in
/// deterministic `(name, id)` order and decides how to disambiguate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameMatch {
    /// Exactly one row matched.
    Unique(ContactRecord),
    /// Two or more rows matched; always holds at least two entries.
    Ambiguous(Vec<ContactRecord>),
}

impl NameMatch {
    /// The deterministically-first matching record.
    pub fn first(&self) -> &ContactRecord {
        match self {
            Self::Unique(record) => record,
            Self::Ambiguous(records) => &records[0],
        }
    }

    /// Number of rows behind this match.
    pub fn total(&self) -> usize {
        match self {
            Self::Unique(_) => 1,
            Self::Ambiguous(records) => records.len(),
        }
    }
}

/// Write seam between the edit session and the record store.
///
/// [`sqlite::ContactStore`] is the production implementation; tests drive the
/// session against counting fakes to pin the write-once guarantee.
pub trait RecordStore {
    /// Inserts a full row and returns the store-assigned id.
    fn create(&mut self, draft: &ContactDraft) -> StoreResult<ContactId>;

    /// Overwrites every field of the row with the given identity.
    fn update_by_id(&mut self, id: ContactId, draft: &ContactDraft) -> StoreResult<()>;
}
