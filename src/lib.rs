//! contact-book - command-driven personal contact manager
//!
//! This library provides the core functionality of the contact-book
//! assistant: contacts with phone numbers and birthdays, a command
//! dispatcher over the address book, and reminders for birthdays coming up
//! in the next week.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Validated fields, contact records and the address book
//! - `storage`: JSON file storage layer
//! - `audit`: Audit logging of contact changes
//! - `commands`: Command table and dispatcher
//! - `display`: Text rendering for listings
//! - `cli`: Interactive loop
//!
//! # Example
//!
//! ```rust,ignore
//! use contacts::commands::Dispatcher;
//! use contacts::config::{ContactPaths, Settings};
//! use contacts::storage::Storage;
//!
//! let paths = ContactPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//! let mut book = storage.load_book()?;
//!
//! let dispatcher = Dispatcher::new(&storage, &settings);
//! let outcome = dispatcher.dispatch(&mut book, "add", &["alice".into(), "1234567890".into()]);
//! assert_eq!(outcome.message, "Contact added.");
//! ```

pub mod audit;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod storage;

pub use error::{ContactError, ContactResult};
