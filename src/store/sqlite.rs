//! SQLite-backed contact store.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::{
    contact::{ContactDraft, ContactRecord, PhotoBlob},
    types::ContactId,
};

use super::{NameMatch, RecordStore, StoreError, StoreResult};

/// Single-connection store over the `contacts` table.
///
/// The location is injected at construction; there is no implicit global
/// path. The connection is held for the lifetime of the store and released
/// on [`close`](Self::close) or drop.
pub struct ContactStore {
    conn: Connection,
}

impl ContactStore {
    /// Opens or creates a contact database at `path`.
    ///
    /// Bootstraps the schema, enables WAL mode and sets
    /// `synchronous=NORMAL`. Any failure here is [`StoreError::Unavailable`].
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let conn = Connection::open(path).map_err(StoreError::Unavailable)?;
        Self::init_connection(conn)
    }

    /// Opens an in-memory store, useful for tests and fixtures.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory().map_err(StoreError::Unavailable)?;
        Self::init_connection(conn)
    }

    fn init_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(include_str!("schema.sql"))
            .map_err(StoreError::Unavailable)?;
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(StoreError::Unavailable)?;
        conn.pragma_update(None, "synchronous", "NORMAL")
            .map_err(StoreError::Unavailable)?;
        Ok(Self { conn })
    }

    /// Closes the connection, surfacing any pending SQLite failure.
    pub fn close(self) -> StoreResult<()> {
        self.conn.close().map_err(|(_, err)| StoreError::Sqlite(err))
    }

    /// Inserts a full row and returns the assigned id.
    pub fn create(&mut self, draft: &ContactDraft) -> StoreResult<ContactId> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO contacts (name, email, phone, address, photo, birth_date, occupation, notes) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                draft.name,
                text_param(&draft.email),
                text_param(&draft.phone),
                text_param(&draft.address),
                draft.photo.as_ref().map(|photo| photo.bytes.as_slice()),
                text_param(&draft.birth_date),
                text_param(&draft.occupation),
                text_param(&draft.notes),
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(id)
    }

    /// Overwrites every field of the row with identity `id`.
    ///
    /// This is the only write path for existing rows; name-based resolution
    /// is read-only. Zero affected rows is [`StoreError::MissingContact`].
    pub fn update_by_id(&mut self, id: ContactId, draft: &ContactDraft) -> StoreResult<()> {
        let tx = self.conn.transaction()?;
        let changed = tx.execute(
            "UPDATE contacts SET name = ?1, email = ?2, phone = ?3, address = ?4, photo = ?5, \
             birth_date = ?6, occupation = ?7, notes = ?8 WHERE id = ?9",
            params![
                draft.name,
                text_param(&draft.email),
                text_param(&draft.phone),
                text_param(&draft.address),
                draft.photo.as_ref().map(|photo| photo.bytes.as_slice()),
                text_param(&draft.birth_date),
                text_param(&draft.occupation),
                text_param(&draft.notes),
                id,
            ],
        )?;
        if changed == 0 {
            return Err(StoreError::MissingContact(id));
        }
        tx.commit()?;
        Ok(())
    }

    /// Fetches the row with identity `id`.
    pub fn get(&self, id: ContactId) -> StoreResult<ContactRecord> {
        self.conn
            .query_row(
                "SELECT id, name, email, phone, address, photo, birth_date, occupation, notes \
                 FROM contacts WHERE id = ?1",
                params![id],
                row_to_contact,
            )
            .optional()?
            .ok_or(StoreError::MissingContact(id))
    }

    /// Case-insensitive substring lookup on `name`.
    ///
    /// Zero matches is [`StoreError::NotFound`]. With more than one match
    /// every candidate is returned in `(name, id)` order and the caller
    /// disambiguates; no row is silently picked for mutation.
    pub fn find_by_name(&self, pattern: &str) -> StoreResult<NameMatch> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, email, phone, address, photo, birth_date, occupation, notes \
             FROM contacts WHERE name LIKE '%' || ?1 || '%' \
             ORDER BY name COLLATE NOCASE, id",
        )?;
        let rows = stmt.query_map(params![pattern], row_to_contact)?;

        let mut matches = Vec::new();
        for row in rows {
            matches.push(row?);
        }

        if matches.is_empty() {
            return Err(StoreError::NotFound(pattern.to_string()));
        }
        if matches.len() == 1 {
            let only = matches.remove(0);
            return Ok(NameMatch::Unique(only));
        }

        let total = matches.len();
        tracing::warn!(pattern, total, "name pattern matched more than one contact");
        Ok(NameMatch::Ambiguous(matches))
    }

    /// All known names in `(name, id)` order, for seeding the name index.
    pub fn list_all_names(&self) -> StoreResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM contacts ORDER BY name COLLATE NOCASE, id")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut names = Vec::new();
        for row in rows {
            names.push(row?);
        }
        Ok(names)
    }
}

impl RecordStore for ContactStore {
    fn create(&mut self, draft: &ContactDraft) -> StoreResult<ContactId> {
        ContactStore::create(self, draft)
    }

    fn update_by_id(&mut self, id: ContactId, draft: &ContactDraft) -> StoreResult<()> {
        ContactStore::update_by_id(self, id, draft)
    }
}

// Empty optional text is persisted as NULL so the schema's nullable columns
// stay meaningful; reads fold NULL back to "".
fn text_param(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

fn row_to_contact(row: &Row<'_>) -> rusqlite::Result<ContactRecord> {
    Ok(ContactRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        phone: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        address: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        photo: row
            .get::<_, Option<Vec<u8>>>(5)?
            .map(|bytes| PhotoBlob { bytes }),
        birth_date: row.get::<_, Option<String>>(6)?.unwrap_or_default(),
        occupation: row.get::<_, Option<String>>(7)?.unwrap_or_default(),
        notes: row.get::<_, Option<String>>(8)?.unwrap_or_default(),
    })
}
