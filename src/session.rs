//! Edit session state machine guarding every contact mutation.

use std::mem;
use std::path::PathBuf;

use crate::{
    asset::{self, AssetError},
    contact::{ContactDraft, ContactRecord},
    store::{RecordStore, StoreError},
    types::ContactId,
};

/// Errors surfaced by the edit session.
#[derive(Debug)]
pub enum SessionError {
    /// A working copy is already held; commit or cancel it first.
    NotIdle,
    /// No working copy is loaded.
    NothingLoaded,
    /// The working copy is not open for mutation.
    NotEditing,
    /// No commit is awaiting confirmation.
    NotPendingConfirm,
    /// The working copy has an empty name.
    EmptyName,
    /// Photo resolution failed with a non-recoverable I/O error.
    Asset(AssetError),
    /// The record store rejected the write.
    Store(StoreError),
}

impl From<AssetError> for SessionError {
    fn from(value: AssetError) -> Self {
        Self::Asset(value)
    }
}

impl From<StoreError> for SessionError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Observable session states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No working copy held.
    Idle,
    /// A working copy was loaded and is read-only.
    Loaded,
    /// The working copy is open for mutation; the persisted row is untouched.
    Editing,
    /// A commit was requested and awaits an explicit yes/no.
    PendingConfirm,
}

/// Result of answering the confirmation gate.
#[derive(Debug)]
pub enum ConfirmOutcome {
    /// The working copy was persisted as a single atomic write.
    Committed {
        /// Identity of the written row; callers re-fetch their view by it.
        id: ContactId,
        /// Present when the pending photo path was missing and the previous
        /// photo value was kept instead.
        photo_warning: Option<AssetError>,
    },
    /// Confirmation was declined; the working copy was discarded unwritten.
    Cancelled,
}

impl ConfirmOutcome {
    /// The committed id, when the gate resulted in a write.
    pub fn committed_id(&self) -> Option<ContactId> {
        match self {
            Self::Committed { id, .. } => Some(*id),
            Self::Cancelled => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    New,
    Existing(ContactId),
}

#[derive(Debug, Default)]
enum Phase {
    #[default]
    Idle,
    Loaded {
        target: Target,
        working: ContactDraft,
    },
    Editing {
        target: Target,
        working: ContactDraft,
        photo_path: Option<PathBuf>,
    },
    PendingConfirm {
        target: Target,
        working: ContactDraft,
        photo_path: Option<PathBuf>,
    },
}

/// Short-lived state machine coordinating a transactionally-safe edit.
///
/// `Idle → Loaded → Editing → PendingConfirm → {committed | cancelled} →
/// Idle`. The working copy is a value-copy of the fetched contact (or a
/// fresh empty draft for a create flow); the persisted row is untouched
/// until the confirmation gate answers yes. A write reaches the record
/// store in exactly one place, [`confirm`](Self::confirm), and never more
/// than once per session instance. The write target is the identity
/// captured at load time, never a name pattern.
#[derive(Debug, Default)]
pub struct EditSession {
    phase: Phase,
}

impl EditSession {
    /// Creates an idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current observable state.
    pub fn state(&self) -> SessionState {
        match self.phase {
            Phase::Idle => SessionState::Idle,
            Phase::Loaded { .. } => SessionState::Loaded,
            Phase::Editing { .. } => SessionState::Editing,
            Phase::PendingConfirm { .. } => SessionState::PendingConfirm,
        }
    }

    /// Loads a value-copy of an existing contact, remembering its identity.
    pub fn load(&mut self, record: ContactRecord) -> Result<(), SessionError> {
        if !matches!(self.phase, Phase::Idle) {
            return Err(SessionError::NotIdle);
        }
        let target = Target::Existing(record.id);
        self.phase = Phase::Loaded {
            target,
            working: record.into_draft(),
        };
        Ok(())
    }

    /// Loads a fresh empty draft for a create flow.
    pub fn load_new(&mut self) -> Result<(), SessionError> {
        if !matches!(self.phase, Phase::Idle) {
            return Err(SessionError::NotIdle);
        }
        self.phase = Phase::Loaded {
            target: Target::New,
            working: ContactDraft::default(),
        };
        Ok(())
    }

    /// Opens the loaded working copy for mutation.
    pub fn begin_edit(&mut self) -> Result<(), SessionError> {
        match mem::take(&mut self.phase) {
            Phase::Loaded { target, working } => {
                self.phase = Phase::Editing {
                    target,
                    working,
                    photo_path: None,
                };
                Ok(())
            }
            other => {
                self.phase = other;
                Err(SessionError::NothingLoaded)
            }
        }
    }

    /// Read access to the working copy in any non-idle state.
    pub fn working(&self) -> Option<&ContactDraft> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Loaded { working, .. }
            | Phase::Editing { working, .. }
            | Phase::PendingConfirm { working, .. } => Some(working),
        }
    }

    /// Mutable access to the working copy, only while editing.
    pub fn working_mut(&mut self) -> Result<&mut ContactDraft, SessionError> {
        match &mut self.phase {
            Phase::Editing { working, .. } => Ok(working),
            _ => Err(SessionError::NotEditing),
        }
    }

    /// Stages a filesystem path to resolve into the photo field at commit.
    ///
    /// An empty path clears the staged path: the previous photo value is
    /// preserved, not cleared.
    pub fn set_photo_path(&mut self, path: impl Into<PathBuf>) -> Result<(), SessionError> {
        let path = path.into();
        match &mut self.phase {
            Phase::Editing { photo_path, .. } => {
                *photo_path = if path.as_os_str().is_empty() {
                    None
                } else {
                    Some(path)
                };
                Ok(())
            }
            _ => Err(SessionError::NotEditing),
        }
    }

    /// Requests a commit, entering the mandatory confirmation gate.
    ///
    /// An empty name violates the record invariant; the session stays in
    /// the editing state so the caller can fix the copy.
    pub fn request_commit(&mut self) -> Result<(), SessionError> {
        match mem::take(&mut self.phase) {
            Phase::Editing {
                target,
                working,
                photo_path,
            } => {
                if working.name.trim().is_empty() {
                    self.phase = Phase::Editing {
                        target,
                        working,
                        photo_path,
                    };
                    return Err(SessionError::EmptyName);
                }
                self.phase = Phase::PendingConfirm {
                    target,
                    working,
                    photo_path,
                };
                Ok(())
            }
            other => {
                self.phase = other;
                Err(SessionError::NotEditing)
            }
        }
    }

    /// Answers the confirmation gate.
    ///
    /// `approved == false` discards the working copy without touching the
    /// store. `approved == true` resolves the staged photo path (a missing
    /// file keeps the previous photo and is reported in the outcome), then
    /// issues the single write: `create` for a new contact, `update_by_id`
    /// for an existing one. A failed write leaves the session awaiting
    /// confirmation, since no committed state exists to return to.
    pub fn confirm<S: RecordStore>(
        &mut self,
        store: &mut S,
        approved: bool,
    ) -> Result<ConfirmOutcome, SessionError> {
        match mem::take(&mut self.phase) {
            Phase::PendingConfirm {
                target,
                mut working,
                photo_path,
            } => {
                if !approved {
                    return Ok(ConfirmOutcome::Cancelled);
                }

                let mut photo_warning = None;
                let encoded = photo_path.as_deref().map(|path| asset::encode(path));
                match encoded {
                    None => {}
                    Some(Ok(blob)) => working.photo = Some(blob),
                    Some(Err(AssetError::FileNotFound(path))) => {
                        tracing::warn!(
                            path = %path.display(),
                            "photo file missing, keeping previous photo"
                        );
                        photo_warning = Some(AssetError::FileNotFound(path));
                    }
                    Some(Err(err)) => {
                        self.phase = Phase::PendingConfirm {
                            target,
                            working,
                            photo_path,
                        };
                        return Err(SessionError::Asset(err));
                    }
                }

                let written = match target {
                    Target::New => store.create(&working),
                    Target::Existing(id) => store.update_by_id(id, &working).map(|()| id),
                };
                match written {
                    Ok(id) => Ok(ConfirmOutcome::Committed { id, photo_warning }),
                    Err(err) => {
                        self.phase = Phase::PendingConfirm {
                            target,
                            working,
                            photo_path,
                        };
                        Err(SessionError::Store(err))
                    }
                }
            }
            other => {
                self.phase = other;
                Err(SessionError::NotPendingConfirm)
            }
        }
    }

    /// Discards the working copy from any state without writing.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
    }
}
