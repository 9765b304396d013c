//! Core data models for contact-book
//!
//! This module contains the data structures of the contact domain: validated
//! fields, contact records and the address book that owns them.

pub mod book;
pub mod fields;
pub mod record;

pub use book::{AddressBook, UpcomingBirthday, UpcomingBirthdays, DEFAULT_BIRTHDAY_WINDOW_DAYS};
pub use fields::{Birthday, Name, Phone, BIRTHDAY_FORMAT};
pub use record::Record;
