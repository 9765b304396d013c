//! Contact repository for JSON storage
//!
//! Manages loading and saving the address book to addressbook.json

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ContactError;
use crate::models::{AddressBook, Record};

use super::file_io::{read_json, write_json_atomic};

/// Current on-disk format version
pub const SCHEMA_VERSION: u32 = 1;

/// Serializable address book data structure
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ContactData {
    #[serde(default = "default_schema_version")]
    schema_version: u32,
    #[serde(default)]
    contacts: Vec<Record>,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

impl Default for ContactData {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            contacts: Vec::new(),
        }
    }
}

/// Repository for address book persistence
pub struct ContactRepository {
    path: PathBuf,
}

impl ContactRepository {
    /// Create a new contact repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the address book, or an empty one if nothing has been saved yet
    pub fn load(&self) -> Result<AddressBook, ContactError> {
        let data: ContactData = read_json(&self.path)?;

        if data.schema_version > SCHEMA_VERSION {
            return Err(ContactError::Storage(format!(
                "{} uses schema version {}, newer than supported version {}",
                self.path.display(),
                data.schema_version,
                SCHEMA_VERSION
            )));
        }

        let book = AddressBook::from_records(data.contacts)?;
        tracing::debug!(path = %self.path.display(), contacts = book.len(), "loaded address book");
        Ok(book)
    }

    /// Save the address book in its listing order
    pub fn save(&self, book: &AddressBook) -> Result<(), ContactError> {
        let data = ContactData {
            schema_version: SCHEMA_VERSION,
            contacts: book.records(),
        };
        write_json_atomic(&self.path, &data)?;
        tracing::debug!(path = %self.path.display(), contacts = book.len(), "saved address book");
        Ok(())
    }
}
