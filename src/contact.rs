//! Contact domain record, draft, and photo blob types.

use serde::{Deserialize, Serialize};

use crate::types::ContactId;

/// Opaque encoded photo payload.
///
/// Raw image bytes with no schema-level interpretation; whatever metadata
/// exists is carried by the image format itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PhotoBlob {
    /// Raw photo bytes.
    pub bytes: Vec<u8>,
}

/// Fully materialized, persisted contact row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Stable contact identifier.
    pub id: ContactId,
    /// Full name, never empty.
    pub name: String,
    /// Email address, empty when unset.
    pub email: String,
    /// Phone number, empty when unset.
    pub phone: String,
    /// Postal address, empty when unset.
    pub address: String,
    /// Birth date as `YYYY-MM-DD` text, empty when unset.
    pub birth_date: String,
    /// Occupation, empty when unset.
    pub occupation: String,
    /// Free-form notes, empty when unset.
    pub notes: String,
    /// Photo bytes, absent when unset.
    pub photo: Option<PhotoBlob>,
}

impl ContactRecord {
    /// Converts this record into an id-less working copy for an edit session.
    pub fn into_draft(self) -> ContactDraft {
        ContactDraft {
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            birth_date: self.birth_date,
            occupation: self.occupation,
            notes: self.notes,
            photo: self.photo,
        }
    }
}

/// Insert/overwrite payload: a full contact row minus the identity.
///
/// A fresh draft has every text field empty and no photo.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactDraft {
    /// Full name, required non-empty before commit.
    pub name: String,
    /// Email address, empty when unset.
    pub email: String,
    /// Phone number, empty when unset.
    pub phone: String,
    /// Postal address, empty when unset.
    pub address: String,
    /// Birth date as `YYYY-MM-DD` text, empty when unset.
    pub birth_date: String,
    /// Occupation, empty when unset.
    pub occupation: String,
    /// Free-form notes, empty when unset.
    pub notes: String,
    /// Photo bytes, absent when unset.
    pub photo: Option<PhotoBlob>,
}

impl ContactDraft {
    /// Reattaches an identity, yielding the record as it will be persisted.
    pub fn into_record(self, id: ContactId) -> ContactRecord {
        ContactRecord {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            birth_date: self.birth_date,
            occupation: self.occupation,
            notes: self.notes,
            photo: self.photo,
        }
    }
}
