use crate::book::AddressBook;
use crate::commands::contacts::find;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, YadaError};
use chrono::NaiveDate;

/// Records a birthday. Without `force` an existing birthday is a conflict.
pub fn set(book: &mut AddressBook, name: &str, raw: &str, force: bool) -> Result<CmdResult> {
    let record = book
        .find_mut(name)
        .ok_or_else(|| YadaError::ContactNotFound(name.to_string()))?;

    let message = if force {
        match record.replace_birthday(raw)? {
            Some(previous) => format!(
                "Birthday for {} changed: {} -> {}",
                record.name(),
                previous,
                record.birthday_text()
            ),
            None => format!("Birthday added for {}: {}", record.name(), record.birthday_text()),
        }
    } else {
        let birthday = record.set_birthday(raw)?;
        format!("Birthday added for {}: {}", record.name(), birthday)
    };
    tracing::debug!(name = %record.key(), birthday = raw, force, "set birthday");

    Ok(CmdResult::default()
        .with_affected_records(vec![record.clone()])
        .with_message(CmdMessage::success(message)))
}

pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = find(book, name)?;
    match record.birthday() {
        Some(birthday) => Ok(CmdResult::default()
            .with_listed_records(vec![record.clone()])
            .with_message(CmdMessage::info(format!(
                "{}'s birthday is on {}",
                record.name(),
                birthday
            )))),
        None => Err(YadaError::BirthdayNotFound(record.name().to_string())),
    }
}

/// Contacts born on `date_text` (`DD.MM.YYYY`, compared as text).
pub fn find_by_birthday(book: &AddressBook, date_text: &str) -> Result<CmdResult> {
    let matches: Vec<_> = book
        .find_by_birthday(date_text)
        .into_iter()
        .cloned()
        .collect();
    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No contact has a birthday on {}",
            date_text
        )));
    }
    Ok(result.with_listed_records(matches))
}

pub fn upcoming(book: &AddressBook, today: NaiveDate, days: u32) -> Result<CmdResult> {
    let upcoming = book.upcoming_birthdays(today, days);
    let mut result = CmdResult::default();
    if upcoming.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No birthdays in the next {} days",
            days
        )));
    }
    Ok(result.with_upcoming_birthdays(upcoming))
}
