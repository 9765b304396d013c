//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display.

pub mod contacts;

pub use contacts::{format_contact_table, format_upcoming_birthdays, NO_CONTACTS, NO_UPCOMING_BIRTHDAYS};
