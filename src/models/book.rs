//! Address book model
//!
//! A name-keyed collection of contact records. Records keep the order in
//! which they were first added, which is the order used by every listing.

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use indexmap::IndexMap;

use super::fields::BIRTHDAY_FORMAT;
use super::record::Record;
use crate::error::{ContactError, ContactResult};

/// Default number of days ahead the birthday query looks
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// A contact whose birthday falls inside the upcoming window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,
    /// Day to send greetings on, moved off weekends
    pub greeting_date: NaiveDate,
}

impl UpcomingBirthday {
    /// Greeting date formatted as `DD.MM.YYYY`
    pub fn formatted_date(&self) -> String {
        self.greeting_date.format(BIRTHDAY_FORMAT).to_string()
    }
}

/// Result of the upcoming birthday query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpcomingBirthdays {
    /// At least one contact qualifies, in address book order
    Found(Vec<UpcomingBirthday>),
    /// Nobody has a birthday inside the window
    NoneUpcoming,
}

/// The full set of contacts for a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from stored records, rejecting duplicate names
    pub fn from_records(records: Vec<Record>) -> ContactResult<Self> {
        let mut book = Self::new();
        for record in records {
            let name = record.name().as_str().to_string();
            if book.records.insert(name.clone(), record).is_some() {
                return Err(ContactError::Storage(format!(
                    "Duplicate contact name in stored data: {}",
                    name
                )));
            }
        }
        Ok(book)
    }

    /// Insert a record under its name, replacing any existing one
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().as_str().to_string();
        self.records.insert(name, record);
    }

    /// Find a record by exact name
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Find a record by exact name for modification
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a record, failing if the name is unknown
    pub fn delete(&mut self, name: &str) -> ContactResult<Record> {
        self.records
            .shift_remove(name)
            .ok_or_else(|| ContactError::not_found(name))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Clone all records in insertion order
    pub fn records(&self) -> Vec<Record> {
        self.records.values().cloned().collect()
    }

    /// Contacts with a birthday in the next seven days, counted from today
    pub fn get_upcoming_birthdays(&self) -> UpcomingBirthdays {
        self.upcoming_birthdays(Local::now().date_naive(), DEFAULT_BIRTHDAY_WINDOW_DAYS)
    }

    /// Contacts with a birthday between `today` and `today + window_days`
    ///
    /// A birthday already past this year is looked up again next year, which
    /// covers windows that cross New Year. Greeting dates landing on a
    /// weekend move to the following Monday. A window reaching past the last
    /// representable date has no upper bound.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> UpcomingBirthdays {
        let window_end = today
            .checked_add_days(Days::new(u64::from(window_days)))
            .unwrap_or(NaiveDate::MAX);

        let found: Vec<UpcomingBirthday> = self
            .records
            .values()
            .filter_map(|record| {
                let birthday = record.birthday()?.date();
                let greeting_date = greeting_date(birthday, today, window_end)?;
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    greeting_date,
                })
            })
            .collect();

        if found.is_empty() {
            UpcomingBirthdays::NoneUpcoming
        } else {
            UpcomingBirthdays::Found(found)
        }
    }
}

/// Greeting date for a birthday, or `None` if it falls outside the window
fn greeting_date(birthday: NaiveDate, today: NaiveDate, window_end: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary(birthday, today.year())?;

    let candidate = if this_year >= today {
        this_year
    } else {
        anniversary(birthday, today.year() + 1)?
    };

    if candidate > window_end {
        return None;
    }

    Some(roll_off_weekend(candidate))
}

/// The birthday's date in `year`; 29 February maps to 28 February in common years
fn anniversary(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).or_else(|| {
        if birthday.month() == 2 && birthday.day() == 29 {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}

/// Move Saturday and Sunday to the following Monday
fn roll_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => {
            let offset = 7 - date.weekday().num_days_from_monday();
            date.checked_add_days(Days::new(u64::from(offset)))
                .unwrap_or(date)
        }
        _ => date,
    }
}
