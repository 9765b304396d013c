//! Storage layer for contact-book
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation, plus the audit trail of contact changes.

pub mod contacts;
pub mod file_io;

pub use contacts::ContactRepository;
pub use file_io::{read_json, write_json_atomic};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::ContactPaths;
use crate::config::settings::Settings;
use crate::error::ContactError;
use crate::models::{AddressBook, Record};

/// Main storage coordinator for the address book and its audit log
pub struct Storage {
    paths: ContactPaths,
    pub contacts: ContactRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ContactPaths, settings: &Settings) -> Result<Self, ContactError> {
        paths.ensure_directories()?;

        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self {
            contacts: ContactRepository::new(paths.contacts_file()),
            audit,
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ContactPaths {
        &self.paths
    }

    /// Load the address book from disk
    pub fn load_book(&self) -> Result<AddressBook, ContactError> {
        self.contacts.load()
    }

    /// Save the address book to disk
    pub fn save_book(&self, book: &AddressBook) -> Result<(), ContactError> {
        self.contacts.save(book)
    }

    /// Get the audit logger, if auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Record the creation of a contact
    pub fn log_create(&self, record: &Record) {
        self.log_entry(AuditEntry::create(record));
    }

    /// Record a change to an existing contact
    pub fn log_update(&self, before: &Record, after: &Record) {
        self.log_entry(AuditEntry::update(before, after));
    }

    /// Record the deletion of a contact
    pub fn log_delete(&self, record: &Record) {
        self.log_entry(AuditEntry::delete(record));
    }

    // The in-memory change has already been applied, so a failed audit
    // write is reported without failing the command.
    fn log_entry(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                tracing::warn!(contact = %entry.contact, error = %e, "failed to write audit entry");
            }
        }
    }
}
