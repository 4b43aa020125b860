//! Facade wiring the store, name index, and edit session together.

use std::path::Path;

use crate::{
    contact::{ContactDraft, ContactRecord},
    import::{self, ImportError, ImportReport, ImportRow},
    index::NameIndex,
    session::{ConfirmOutcome, EditSession, SessionError, SessionState},
    store::{NameMatch, StoreResult, sqlite::ContactStore},
    types::ContactId,
};

/// Single-user contact book: one store connection, the autocomplete index
/// seeded from it, and the edit session guarding mutation.
///
/// This is the surface the presentation layer calls; it re-seeds the index
/// after every committed write so suggestions always reflect the store.
pub struct ContactBook {
    store: ContactStore,
    index: NameIndex,
    session: EditSession,
}

impl ContactBook {
    /// Opens a contact book backed by the database at `path`.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Self::seed(ContactStore::open(path)?)
    }

    /// Opens a contact book over an in-memory database.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::seed(ContactStore::open_in_memory()?)
    }

    fn seed(store: ContactStore) -> StoreResult<Self> {
        let names = store.list_all_names()?;
        Ok(Self {
            store,
            index: NameIndex::from_names(names),
            session: EditSession::new(),
        })
    }

    /// Autocomplete suggestions for a typed prefix.
    pub fn search(&self, prefix: &str) -> Vec<String> {
        self.index.suggest(prefix)
    }

    /// Resolves a name pattern to a contact, surfacing ambiguity to the
    /// caller instead of picking a row.
    pub fn select(&self, name: &str) -> StoreResult<NameMatch> {
        self.store.find_by_name(name)
    }

    /// Re-fetches a contact by its identity, e.g. after a commit.
    pub fn get(&self, id: ContactId) -> StoreResult<ContactRecord> {
        self.store.get(id)
    }

    /// Starts an edit session over an existing contact, or a create flow
    /// when `contact` is `None`, and opens the working copy for mutation.
    pub fn begin_edit(&mut self, contact: Option<ContactRecord>) -> Result<(), SessionError> {
        match contact {
            Some(record) => self.session.load(record)?,
            None => self.session.load_new()?,
        }
        self.session.begin_edit()
    }

    /// The current edit session state.
    pub fn session_state(&self) -> SessionState {
        self.session.state()
    }

    /// Read access to the session's working copy.
    pub fn working(&self) -> Option<&ContactDraft> {
        self.session.working()
    }

    /// Mutable access to the session's working copy.
    pub fn working_mut(&mut self) -> Result<&mut ContactDraft, SessionError> {
        self.session.working_mut()
    }

    /// Stages a photo path to resolve at commit time.
    pub fn set_photo_path(&mut self, path: impl Into<std::path::PathBuf>) -> Result<(), SessionError> {
        self.session.set_photo_path(path)
    }

    /// Requests a commit of the working copy, entering the confirmation gate.
    pub fn request_commit(&mut self) -> Result<(), SessionError> {
        self.session.request_commit()
    }

    /// Answers the confirmation gate; a committed write re-seeds the
    /// autocomplete index from the store.
    pub fn confirm(&mut self, approved: bool) -> Result<ConfirmOutcome, SessionError> {
        let outcome = self.session.confirm(&mut self.store, approved)?;
        if outcome.committed_id().is_some() {
            let names = self.store.list_all_names()?;
            self.index.rebuild(names);
        }
        Ok(outcome)
    }

    /// Discards the working copy without writing.
    pub fn cancel(&mut self) {
        self.session.cancel();
    }

    /// Bulk-inserts normalized rows and re-seeds the autocomplete index.
    pub fn import_rows<I>(&mut self, rows: I) -> Result<ImportReport, ImportError>
    where
        I: IntoIterator<Item = ImportRow>,
    {
        let report = import::import_rows(&mut self.store, rows)?;
        let names = self.store.list_all_names().map_err(ImportError::Store)?;
        self.index.rebuild(names);
        Ok(report)
    }

    /// All known names in store order.
    pub fn names(&self) -> &[String] {
        self.index.names()
    }

    /// Closes the underlying store connection.
    pub fn close(self) -> StoreResult<()> {
        self.store.close()
    }
}
