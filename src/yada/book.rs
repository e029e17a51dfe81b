//! # Address Book
//!
//! The keyed collection of contact [`Record`]s. Records are keyed by their
//! lowercase name and kept in insertion order so listings are deterministic.
//!
//! Lookups other than by name (by phone, by birthday) are linear scans. The
//! book is expected to hold at most a few thousand records, so no secondary
//! index is maintained.

use crate::fields::Birthday;
use crate::model::{name_key, Record};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
    records: Vec<Record>,
}

/// A birthday inside the reminder window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub birthday: Birthday,
    /// The day the birthday actually falls on this time around.
    pub falls_on: NaiveDate,
    /// The day to congratulate: `falls_on`, moved to Monday when it is a weekend.
    pub congratulate_on: NaiveDate,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Inserts the record under its lowercase name. An existing record with
    /// the same key is replaced in place and returned.
    pub fn add(&mut self, record: Record) -> Option<Record> {
        match self.position(record.name()) {
            Some(idx) => Some(std::mem::replace(&mut self.records[idx], record)),
            None => {
                self.records.push(record);
                None
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.position(name).map(|idx| &self.records[idx])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.position(name).map(move |idx| &mut self.records[idx])
    }

    /// First record holding a phone exactly equal to `value`.
    pub fn find_by_phone(&self, value: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.find_phone(value))
    }

    /// All records whose birthday renders exactly as `date_text` (`DD.MM.YYYY`).
    pub fn find_by_birthday(&self, date_text: &str) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|r| r.birthday().is_some_and(|b| b.to_string() == date_text))
            .collect()
    }

    /// Removes the record stored under `name`, if any.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.position(name).map(|idx| self.records.remove(idx))
    }

    /// Birthdays falling within `days` days starting at `today`, ordered by
    /// congratulation day and then by book order.
    pub fn upcoming_birthdays(&self, today: NaiveDate, days: u32) -> Vec<UpcomingBirthday> {
        let window = Duration::days(i64::from(days));
        let mut upcoming: Vec<UpcomingBirthday> = self
            .records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let mut falls_on = birthday.in_year(today.year());
                if falls_on < today {
                    falls_on = birthday.in_year(today.year() + 1);
                }
                if falls_on - today >= window {
                    return None;
                }
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    birthday,
                    falls_on,
                    congratulate_on: next_weekday(falls_on),
                })
            })
            .collect();
        upcoming.sort_by_key(|u| u.congratulate_on);
        upcoming
    }

    fn position(&self, name: &str) -> Option<usize> {
        let key = name_key(name);
        self.records.iter().position(|r| r.key() == key)
    }
}

fn next_weekday(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

impl From<Vec<Record>> for AddressBook {
    fn from(records: Vec<Record>) -> Self {
        let mut book = AddressBook::new();
        for record in records {
            book.add(record);
        }
        book
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(book: AddressBook) -> Self {
        book.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phone: &str, birthday: Option<&str>) -> Record {
        let mut r = Record::new(name);
        r.add_phone(phone).unwrap();
        if let Some(b) = birthday {
            r.set_birthday(b).unwrap();
        }
        r
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn add_keys_by_lowercase_name() {
        let mut book = AddressBook::new();
        book.add(record("Ann", "0501234567", None));
        assert_eq!(book.len(), 1);
        assert!(book.contains("ann"));
        assert!(book.contains("ANN"));
        assert_eq!(book.find("aNn").unwrap().key(), "ann");
    }

    #[test]
    fn add_overwrites_in_place() {
        let mut book = AddressBook::new();
        book.add(record("Ann", "0501234567", None));
        book.add(record("Bob", "0671112233", None));
        let previous = book.add(record("ANN", "0930000000", None));
        assert_eq!(previous.unwrap().phones()[0].as_str(), "0501234567");

        let names: Vec<_> = book.iter().map(Record::name).collect();
        assert_eq!(names, ["ANN", "Bob"]);
    }

    #[test]
    fn find_by_phone_on_empty_book_is_none() {
        assert!(AddressBook::new().find_by_phone("0501234567").is_none());
    }

    #[test]
    fn find_by_phone_returns_owner() {
        let mut book = AddressBook::new();
        book.add(record("Ann", "0501234567", None));
        book.add(record("Bob", "0671112233", None));
        assert_eq!(book.find_by_phone("0671112233").unwrap().name(), "Bob");
        assert!(book.find_by_phone("0000000000").is_none());
    }

    #[test]
    fn find_by_birthday_returns_all_matches_in_order() {
        let mut book = AddressBook::new();
        book.add(record("Ann", "0501234567", Some("01.01.2000")));
        book.add(record("Bob", "0671112233", Some("02.02.1999")));
        book.add(record("Cid", "0931112233", Some("01.01.2000")));
        book.add(record("Dee", "0941112233", None));

        let names: Vec<_> = book
            .find_by_birthday("01.01.2000")
            .into_iter()
            .map(Record::name)
            .collect();
        assert_eq!(names, ["Ann", "Cid"]);
        assert!(book.find_by_birthday("03.03.2003").is_empty());
        assert!(book.find_by_birthday("Unknown").is_empty());
    }

    #[test]
    fn delete_is_case_insensitive_and_tolerates_absent() {
        let mut book = AddressBook::new();
        book.add(record("Ann", "0501234567", None));
        assert!(book.delete("nobody").is_none());
        assert_eq!(book.delete("ANN").unwrap().name(), "Ann");
        assert!(book.is_empty());
    }

    #[test]
    fn find_mut_edits_in_place() {
        let mut book = AddressBook::new();
        book.add(record("Ann", "0501234567", None));
        book.find_mut("ann")
            .unwrap()
            .edit_phone("0501234567", "0509999999")
            .unwrap();
        assert_eq!(book.find("ann").unwrap().phones()[0].as_str(), "0509999999");
    }

    #[test]
    fn serializes_as_array_and_deduplicates_on_load() {
        let mut book = AddressBook::new();
        book.add(record("Ann", "0501234567", Some("01.01.2000")));
        let json = serde_json::to_string(&book).unwrap();
        assert!(json.starts_with('['));
        let back: AddressBook = serde_json::from_str(&json).unwrap();
        assert_eq!(back, book);

        let dupes = r#"[{"name":"Ann","phones":["0501234567"]},{"name":"ann","phones":[]}]"#;
        let loaded: AddressBook = serde_json::from_str(dupes).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.find("ann").unwrap().name(), "ann");
    }

    #[test]
    fn upcoming_birthdays_moves_weekends_to_monday() {
        // 2024-06-03 is a Monday.
        let today = date(2024, 6, 3);
        let mut book = AddressBook::new();
        book.add(record("Sat", "0501234567", Some("08.06.1990")));
        book.add(record("Wed", "0501234568", Some("05.06.1985")));
        book.add(record("Late", "0501234569", Some("20.06.1985")));
        book.add(record("Past", "0501234560", Some("01.06.1985")));

        let upcoming = book.upcoming_birthdays(today, 7);
        let summary: Vec<_> = upcoming
            .iter()
            .map(|u| (u.name.as_str(), u.congratulate_on))
            .collect();
        assert_eq!(
            summary,
            [("Wed", date(2024, 6, 5)), ("Sat", date(2024, 6, 10))]
        );
        assert_eq!(upcoming[1].falls_on, date(2024, 6, 8));
    }

    #[test]
    fn upcoming_birthdays_wrap_into_next_year() {
        let today = date(2023, 12, 29);
        let mut book = AddressBook::new();
        book.add(record("Ny", "0501234567", Some("02.01.1990")));
        let upcoming = book.upcoming_birthdays(today, 7);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].falls_on, date(2024, 1, 2));
    }

    #[test]
    fn today_is_inside_the_window() {
        let today = date(2024, 6, 4);
        let mut book = AddressBook::new();
        book.add(record("Now", "0501234567", Some("04.06.2000")));
        assert_eq!(book.upcoming_birthdays(today, 1).len(), 1);
        assert!(book.upcoming_birthdays(today, 0).is_empty());
    }
}
