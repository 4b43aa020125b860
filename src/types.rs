//! Shared primitive identifiers.

/// Stable contact row identifier, assigned by the record store on insert.
///
/// Matches the SQLite rowid domain. The id is the only reliable handle for
/// update and re-fetch; names are not unique.
pub type ContactId = i64;
