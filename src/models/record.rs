//! Contact record model
//!
//! A record owns one name, an ordered list of phone numbers and an optional
//! birthday. Phone numbers are kept in insertion order and are not deduplicated.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::fields::{Birthday, Name, Phone};
use crate::error::{ContactError, ContactResult};

/// A single contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a contact with no phones and no birthday
    pub fn new(name: &str) -> ContactResult<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number
    pub fn add_phone(&mut self, value: &str) -> ContactResult<()> {
        self.phones.push(Phone::new(value)?);
        Ok(())
    }

    /// Remove the first phone number equal to `value`
    pub fn remove_phone(&mut self, value: &str) -> ContactResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == value)
            .ok_or_else(|| ContactError::not_found(value))?;
        self.phones.remove(index);
        Ok(())
    }

    /// Find the first phone number equal to `value`
    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Replace `old` with `new`
    ///
    /// `new` is validated before anything is touched, and `old` must exist.
    /// On any error the record is left as it was.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactResult<()> {
        let new = Phone::new(new)?;
        self.remove_phone(old)?;
        self.phones.push(new);
        Ok(())
    }

    /// Set the birthday, replacing any previous one
    pub fn add_birthday(&mut self, value: &str) -> ContactResult<()> {
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }

    /// Phone numbers joined with `separator`
    pub fn phones_joined(&self, separator: &str) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_joined("; ")
        )
    }
}
