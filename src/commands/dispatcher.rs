//! Command dispatcher
//!
//! Maps a command token to its handler and runs it against the address book.
//! Handlers return `ContactResult`; `dispatch` is the single place where errors
//! become user-facing text, so nothing a handler does can end the session.

use chrono::{Local, NaiveDate};

use super::{CommandKind, Outcome, COMMANDS};
use crate::config::settings::Settings;
use crate::display::{format_contact_table, format_upcoming_birthdays};
use crate::error::{ContactError, ContactResult};
use crate::models::{AddressBook, Record};
use crate::storage::Storage;

/// Reply for tokens that match no command
pub const INVALID_COMMAND: &str = "Invalid command.";

/// Runs commands for one session
pub struct Dispatcher<'a> {
    storage: &'a Storage,
    birthday_window_days: u32,
    today: Option<NaiveDate>,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher that saves through `storage`
    pub fn new(storage: &'a Storage, settings: &Settings) -> Self {
        Self {
            storage,
            birthday_window_days: settings.birthday_window_days,
            today: None,
        }
    }

    /// Evaluate birthday queries against a fixed date instead of the clock
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Run one command and turn its result or error into a reply
    pub fn dispatch(&self, book: &mut AddressBook, command: &str, args: &[String]) -> Outcome {
        let Some(kind) = CommandKind::from_token(command) else {
            tracing::debug!(command, "unknown command");
            return Outcome::reply(INVALID_COMMAND);
        };

        tracing::debug!(command, args = args.len(), mutating = kind.is_mutating(), "dispatching");

        match self.run(kind, book, args) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::debug!(command, error = %e, "command failed");
                Outcome::reply(e.to_string())
            }
        }
    }

    fn run(&self, kind: CommandKind, book: &mut AddressBook, args: &[String]) -> ContactResult<Outcome> {
        match kind {
            CommandKind::Hello => Ok(Outcome::reply("How can I help you?")),
            CommandKind::Add => self.add_contact(book, args),
            CommandKind::Change => self.change_phone(book, args),
            CommandKind::Phone => show_phones(book, args),
            CommandKind::All => Ok(Outcome::reply(format_contact_table(book))),
            CommandKind::AddBirthday => self.add_birthday(book, args),
            CommandKind::ShowBirthday => show_birthday(book, args),
            CommandKind::Birthdays => Ok(self.birthdays(book)),
            CommandKind::Delete => self.delete_contact(book, args),
            CommandKind::Help => Ok(Outcome::reply(help_text())),
            CommandKind::Close => self.save_and_exit(book, "Closing the program..."),
            CommandKind::Exit => self.save_and_exit(book, "Good bye!"),
        }
    }

    fn add_contact(&self, book: &mut AddressBook, args: &[String]) -> ContactResult<Outcome> {
        let usage = CommandKind::Add.usage();
        let name = arg(args, 0, usage)?;
        let phone = arg(args, 1, usage)?;

        if let Some(record) = book.find_mut(name) {
            let before = record.clone();
            record.add_phone(phone)?;
            self.storage.log_update(&before, record);
            return Ok(Outcome::reply("Contact updated."));
        }

        // Build the record completely before it goes into the book
        let mut record = Record::new(name)?;
        record.add_phone(phone)?;
        self.storage.log_create(&record);
        book.add_record(record);
        Ok(Outcome::reply("Contact added."))
    }

    fn change_phone(&self, book: &mut AddressBook, args: &[String]) -> ContactResult<Outcome> {
        let usage = CommandKind::Change.usage();
        let name = arg(args, 0, usage)?;
        let old_phone = arg(args, 1, usage)?;
        let new_phone = arg(args, 2, usage)?;

        let Some(record) = book.find_mut(name) else {
            return Ok(contact_not_found(name));
        };

        let before = record.clone();
        record.edit_phone(old_phone, new_phone)?;
        self.storage.log_update(&before, record);
        Ok(Outcome::reply(format!("Contact {} updated successfully.", name)))
    }

    fn add_birthday(&self, book: &mut AddressBook, args: &[String]) -> ContactResult<Outcome> {
        let usage = CommandKind::AddBirthday.usage();
        let name = arg(args, 0, usage)?;
        let birthday = arg(args, 1, usage)?;

        let Some(record) = book.find_mut(name) else {
            return Ok(contact_not_found(name));
        };

        let before = record.clone();
        record.add_birthday(birthday)?;
        self.storage.log_update(&before, record);
        Ok(Outcome::reply("Contact updated."))
    }

    fn birthdays(&self, book: &AddressBook) -> Outcome {
        let today = self.today.unwrap_or_else(|| Local::now().date_naive());
        let upcoming = book.upcoming_birthdays(today, self.birthday_window_days);
        Outcome::reply(format_upcoming_birthdays(&upcoming))
    }

    fn delete_contact(&self, book: &mut AddressBook, args: &[String]) -> ContactResult<Outcome> {
        let name = arg(args, 0, CommandKind::Delete.usage())?;
        let removed = book.delete(name)?;
        self.storage.log_delete(&removed);
        Ok(Outcome::reply(format!("Contact {} deleted.", name)))
    }

    fn save_and_exit(&self, book: &AddressBook, farewell: &str) -> ContactResult<Outcome> {
        self.storage.save_book(book)?;
        tracing::info!(contacts = book.len(), "address book saved");
        Ok(Outcome::exit(farewell))
    }
}

fn show_phones(book: &AddressBook, args: &[String]) -> ContactResult<Outcome> {
    let name = arg(args, 0, CommandKind::Phone.usage())?;

    let Some(record) = book.find(name) else {
        return Ok(contact_not_found(name));
    };

    if record.phones().is_empty() {
        Ok(Outcome::reply("No phones found."))
    } else {
        Ok(Outcome::reply(record.phones_joined(", ")))
    }
}

fn show_birthday(book: &AddressBook, args: &[String]) -> ContactResult<Outcome> {
    let name = arg(args, 0, CommandKind::ShowBirthday.usage())?;

    let Some(record) = book.find(name) else {
        return Ok(contact_not_found(name));
    };

    Ok(Outcome::reply(match record.birthday() {
        Some(birthday) => birthday.to_string(),
        None => "Birthday is None".to_string(),
    }))
}

fn help_text() -> String {
    COMMANDS
        .iter()
        .map(|c| format!("{:<40} {}", c.usage, c.description))
        .collect::<Vec<_>>()
        .join("\n")
}

fn contact_not_found(name: &str) -> Outcome {
    Outcome::reply(format!("Contact {} not found.", name))
}

/// Positional argument `index`, or a usage error if it is missing
fn arg<'s>(args: &'s [String], index: usize, usage: &'static str) -> ContactResult<&'s str> {
    args.get(index)
        .map(String::as_str)
        .ok_or(ContactError::MissingArguments { usage })
}
