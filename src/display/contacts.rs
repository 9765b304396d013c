//! Contact display formatting
//!
//! Formats the address book and the upcoming birthday list for terminal output.

use crate::models::{AddressBook, UpcomingBirthdays};

/// Shown by `all` when the book is empty
pub const NO_CONTACTS: &str = "No contacts.";

/// Shown by `birthdays` when nobody qualifies
pub const NO_UPCOMING_BIRTHDAYS: &str = "There are no upcoming birthdays yet";

/// Narrowest a table column is allowed to be
const MIN_COLUMN_WIDTH: usize = 12;

/// Format every contact as a centered `name|birthday|phones` table
pub fn format_contact_table(book: &AddressBook) -> String {
    if book.is_empty() {
        return NO_CONTACTS.to_string();
    }

    let rows: Vec<(String, String, String)> = book
        .iter()
        .map(|record| {
            let birthday = record
                .birthday()
                .map(|b| b.to_string())
                .unwrap_or_else(|| " ".to_string());
            (record.name().to_string(), birthday, record.phones_joined(", "))
        })
        .collect();

    let name_width = column_width(rows.iter().map(|r| r.0.as_str()));
    let birthday_width = column_width(rows.iter().map(|r| r.1.as_str()));
    let phones_width = column_width(rows.iter().map(|r| r.2.as_str()));

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format!(
        "{:^name_width$}|{:^birthday_width$}|{:^phones_width$}",
        "name",
        "birthday",
        "phones",
        name_width = name_width,
        birthday_width = birthday_width,
        phones_width = phones_width,
    ));

    for (name, birthday, phones) in &rows {
        lines.push(format!(
            "{:^name_width$}|{:^birthday_width$}|{:^phones_width$}",
            name,
            birthday,
            phones,
            name_width = name_width,
            birthday_width = birthday_width,
            phones_width = phones_width,
        ));
    }

    lines.join("\n")
}

/// Format upcoming birthdays as `name : DD.MM.YYYY` lines
pub fn format_upcoming_birthdays(upcoming: &UpcomingBirthdays) -> String {
    match upcoming {
        UpcomingBirthdays::Found(list) => list
            .iter()
            .map(|entry| format!("{} : {}", entry.name, entry.formatted_date()))
            .collect::<Vec<_>>()
            .join("\n"),
        UpcomingBirthdays::NoneUpcoming => NO_UPCOMING_BIRTHDAYS.to_string(),
    }
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_COLUMN_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Record, UpcomingBirthday};
    use chrono::NaiveDate;

    #[test]
    fn test_empty_book() {
        assert_eq!(format_contact_table(&AddressBook::new()), "No contacts.");
    }

    #[test]
    fn test_contact_table() {
        let mut book = AddressBook::new();

        let mut alice = Record::new("alice").unwrap();
        alice.add_phone("1234567890").unwrap();
        alice.add_birthday("12.06.1990").unwrap();
        book.add_record(alice);

        book.add_record(Record::new("bob").unwrap());

        let table = format_contact_table(&book);
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "    name    |  birthday  |   phones   ");
        assert_eq!(lines[1], "   alice    | 12.06.1990 | 1234567890 ");
        assert_eq!(lines[2], "    bob     |            |            ");
    }

    #[test]
    fn test_wide_columns_stay_aligned() {
        let mut book = AddressBook::new();
        let mut record = Record::new("Bartholomew-Jones").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("0987654321").unwrap();
        book.add_record(record);

        let table = format_contact_table(&book);
        let widths: Vec<_> = table.lines().map(|l| l.chars().count()).collect();
        assert_eq!(widths[0], widths[1]);
    }

    #[test]
    fn test_upcoming_birthdays() {
        let upcoming = UpcomingBirthdays::Found(vec![
            UpcomingBirthday {
                name: "alice".to_string(),
                greeting_date: NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(),
            },
            UpcomingBirthday {
                name: "bob".to_string(),
                greeting_date: NaiveDate::from_ymd_opt(2024, 6, 17).unwrap(),
            },
        ]);

        assert_eq!(
            format_upcoming_birthdays(&upcoming),
            "alice : 12.06.2024\nbob : 17.06.2024"
        );
        assert_eq!(
            format_upcoming_birthdays(&UpcomingBirthdays::NoneUpcoming),
            NO_UPCOMING_BIRTHDAYS
        );
    }
}
