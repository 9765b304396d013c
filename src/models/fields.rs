//! Validated field types for contact records
//!
//! `Name`, `Phone` and `Birthday` can only be built from input that passes
//! their validator. Deserialization goes through the same constructors, so a
//! value read back from storage upholds the same rules as one typed by the user.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ContactError, ContactResult};

/// Date format used for birthdays, both for input and display
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Minimum number of characters in a contact name
const NAME_MIN_LEN: usize = 2;

/// Number of digits in a phone number
const PHONE_LEN: usize = 10;

/// A contact name, unique within an address book
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Create a name, rejecting anything shorter than two characters
    pub fn new(value: impl Into<String>) -> ContactResult<Self> {
        let value = value.into();
        if Self::validate(&value) {
            Ok(Self(value))
        } else {
            Err(ContactError::NameValidation)
        }
    }

    pub fn validate(value: &str) -> bool {
        value.chars().count() >= NAME_MIN_LEN
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A ten digit phone number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    /// Create a phone number from exactly ten ASCII digits
    pub fn new(value: impl Into<String>) -> ContactResult<Self> {
        let value = value.into();
        if Self::validate(&value) {
            Ok(Self(value))
        } else {
            Err(ContactError::PhoneValidation)
        }
    }

    pub fn validate(value: &str) -> bool {
        value.len() == PHONE_LEN && value.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A birthday written as `DD.MM.YYYY`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday, rejecting malformed strings and impossible dates
    pub fn new(value: &str) -> ContactResult<Self> {
        Self::parse(value)
            .map(Self)
            .ok_or(ContactError::BirthdayValidation)
    }

    pub fn validate(value: &str) -> bool {
        Self::parse(value).is_some()
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    fn parse(value: &str) -> Option<NaiveDate> {
        // chrono accepts single digit days and months, so check the shape first
        let bytes = value.as_bytes();
        let shaped = bytes.len() == 10
            && bytes[2] == b'.'
            && bytes[5] == b'.'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());

        if !shaped {
            return None;
        }

        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT).ok()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl FromStr for Name {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl FromStr for Phone {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl FromStr for Birthday {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Name {
    type Error = ContactError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Phone {
    type Error = ContactError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Birthday {
    type Error = ContactError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}
