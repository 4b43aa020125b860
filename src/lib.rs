//! Single-user contact persistence and search over one SQLite table.
//!
//! The core is a record store with id-keyed writes and name-substring
//! lookup, an in-memory token-prefix index driving autocomplete, and an
//! edit session whose mandatory confirmation gate is the only path to a
//! write. A side-channel importer bulk-loads normalized spreadsheet rows.
//!
//! # Examples
//!
//! Creating and finding a contact through the [`book::ContactBook`] facade:
//! ```
//! use contactbook::book::ContactBook;
//!
//! let mut book = ContactBook::open_in_memory().expect("open");
//!
//! book.begin_edit(None).expect("begin edit");
//! {
//!     let draft = book.working_mut().expect("working copy");
//!     draft.name = "Ann Lee".to_string();
//!     draft.email = "ann@example.com".to_string();
//! }
//! book.request_commit().expect("request commit");
//! let outcome = book.confirm(true).expect("confirm");
//! assert!(outcome.committed_id().is_some());
//!
//! assert_eq!(book.search("le"), vec!["Ann Lee".to_string()]);
//! ```
//!
//! Editing an existing contact in a file-backed book:
//! ```no_run
//! use contactbook::{book::ContactBook, store::NameMatch};
//!
//! let mut book = ContactBook::open("contacts.db").expect("open");
//! let selected = book.select("lee").expect("lookup");
//! if let NameMatch::Ambiguous(candidates) = &selected {
//!     eprintln!("{} contacts share that name", candidates.len());
//! }
//! let record = selected.first().clone();
//! book.begin_edit(Some(record)).expect("begin edit");
//! book.working_mut().expect("working copy").phone = "555-0100".to_string();
//! book.request_commit().expect("request commit");
//! book.confirm(true).expect("confirm");
//! book.close().expect("close");
//! ```
#![deny(missing_docs)]

/// Photo blob codec.
pub mod asset;
/// Contact book facade for the presentation layer.
pub mod book;
/// Contact domain records and drafts.
pub mod contact;
/// Bulk importer for normalized spreadsheet rows.
pub mod import;
/// Token-prefix autocomplete index.
pub mod index;
/// Edit session state machine and confirmation gate.
pub mod session;
/// Persistence layer and SQLite implementation.
pub mod store;
/// Shared primitive types.
pub mod types;
