use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, YadaError};
use crate::fields::Address;
use crate::model::Record;

fn record_mut<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| YadaError::ContactNotFound(name.to_string()))
}

pub fn find<'a>(book: &'a AddressBook, name: &str) -> Result<&'a Record> {
    book.find(name)
        .ok_or_else(|| YadaError::ContactNotFound(name.to_string()))
}

/// Adds `phone` to the contact called `name`, creating the contact first if
/// it does not exist yet.
pub fn add(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        tracing::debug!(name = %record.key(), phone, "added phone to existing contact");
        let message = CmdMessage::success(format!("Contact updated: {}", record.name()));
        return Ok(CmdResult::default()
            .with_affected_records(vec![record.clone()])
            .with_message(message));
    }

    let mut record = Record::new(name);
    record.add_phone(phone)?;
    tracing::debug!(name = %record.key(), phone, "created contact");
    let result = CmdResult::default()
        .with_affected_records(vec![record.clone()])
        .with_message(CmdMessage::success(format!("Contact added: {}", name)));
    book.add(record);
    Ok(result)
}

pub fn change_phone(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let record = record_mut(book, name)?;
    record.edit_phone(old, new)?;
    tracing::debug!(name = %record.key(), old, new, "changed phone");
    Ok(CmdResult::default()
        .with_affected_records(vec![record.clone()])
        .with_message(CmdMessage::success(format!(
            "Phone changed for {}: {} -> {}",
            record.name(),
            old,
            new
        ))))
}

/// Removing a phone the contact does not have is not an error, only a warning.
pub fn remove_phone(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = record_mut(book, name)?;
    if !record.remove_phone(phone) {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "{} has no phone {}",
            record.name(),
            phone
        ))));
    }
    tracing::debug!(name = %record.key(), phone, "removed phone");
    Ok(CmdResult::default()
        .with_affected_records(vec![record.clone()])
        .with_message(CmdMessage::success(format!(
            "Phone {} removed from {}",
            phone,
            record.name()
        ))))
}

pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = find(book, name)?;
    Ok(CmdResult::default().with_listed_records(vec![record.clone()]))
}

pub fn all(book: &AddressBook) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed_records(book.iter().cloned().collect());
    if book.is_empty() {
        result.add_message(CmdMessage::info(
            "There are no contacts yet. Add one with: add <name> <phone>",
        ));
    }
    Ok(result)
}

pub fn delete(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let removed = book
        .delete(name)
        .ok_or_else(|| YadaError::ContactNotFound(name.to_string()))?;
    tracing::debug!(name = %removed.key(), "deleted contact");
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Contact deleted: {}", removed.name())))
        .with_affected_records(vec![removed]))
}

pub fn find_by_phone(book: &AddressBook, phone: &str) -> Result<CmdResult> {
    match book.find_by_phone(phone) {
        Some(record) => Ok(CmdResult::default().with_listed_records(vec![record.clone()])),
        None => Ok(CmdResult::default()
            .with_message(CmdMessage::info(format!("No contact has phone {}", phone)))),
    }
}

pub fn add_email(book: &mut AddressBook, name: &str, email: &str) -> Result<CmdResult> {
    let record = record_mut(book, name)?;
    record.add_email(email)?;
    tracing::debug!(name = %record.key(), email, "added email");
    Ok(CmdResult::default()
        .with_affected_records(vec![record.clone()])
        .with_message(CmdMessage::success(format!(
            "Email {} added to {}",
            email,
            record.name()
        ))))
}

pub fn edit_email(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let record = record_mut(book, name)?;
    record.edit_email(old, new)?;
    tracing::debug!(name = %record.key(), old, new, "changed email");
    Ok(CmdResult::default()
        .with_affected_records(vec![record.clone()])
        .with_message(CmdMessage::success(format!(
            "Email changed for {}: {} -> {}",
            record.name(),
            old,
            new
        ))))
}

pub fn add_address(book: &mut AddressBook, name: &str, address: Address) -> Result<CmdResult> {
    let record = record_mut(book, name)?;
    tracing::debug!(name = %record.key(), address = %address, "added address");
    record.add_address(address);
    Ok(CmdResult::default()
        .with_affected_records(vec![record.clone()])
        .with_message(CmdMessage::success(format!(
            "Address added to {}",
            record.name()
        ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    fn phones(book: &AddressBook, name: &str) -> Vec<String> {
        book.find(name)
            .unwrap()
            .phones()
            .iter()
            .map(|p| p.to_string())
            .collect()
    }

    #[test]
    fn add_creates_then_appends() {
        let mut book = AddressBook::new();
        let result = add(&mut book, "Ann", "0501234567").unwrap();
        assert_eq!(result.affected_records[0].key(), "ann");
        assert_eq!(phones(&book, "ann"), ["0501234567"]);

        add(&mut book, "ann", "+380671112233").unwrap();
        assert_eq!(book.len(), 1);
        assert_eq!(phones(&book, "Ann"), ["0501234567", "0671112233"]);
    }

    #[test]
    fn add_with_bad_phone_creates_nothing() {
        let mut book = AddressBook::new();
        assert!(matches!(
            add(&mut book, "Ann", "12345"),
            Err(YadaError::InvalidPhone(_))
        ));
        assert!(book.is_empty());
    }

    #[test]
    fn change_phone_scenario() {
        let mut book = AddressBook::new();
        add(&mut book, "Ann", "0501234567").unwrap();
        change_phone(&mut book, "ann", "0501234567", "0509999999").unwrap();
        assert_eq!(phones(&book, "ann"), ["0509999999"]);
    }

    #[test]
    fn change_phone_reports_missing_contact_and_phone() {
        let mut book = AddressBook::new();
        assert!(matches!(
            change_phone(&mut book, "ghost", "0501234567", "0509999999"),
            Err(YadaError::ContactNotFound(_))
        ));
        add(&mut book, "Ann", "0501234567").unwrap();
        assert!(matches!(
            change_phone(&mut book, "ann", "0000000000", "0509999999"),
            Err(YadaError::PhoneNotFound { .. })
        ));
    }

    #[test]
    fn remove_missing_phone_is_a_warning() {
        let mut book = AddressBook::new();
        add(&mut book, "Ann", "0501234567").unwrap();
        let result = remove_phone(&mut book, "ann", "0000000000").unwrap();
        assert!(result.affected_records.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);

        remove_phone(&mut book, "ann", "0501234567").unwrap();
        assert!(phones(&book, "ann").is_empty());
    }

    #[test]
    fn delete_and_lookup() {
        let mut book = AddressBook::new();
        add(&mut book, "Ann", "0501234567").unwrap();
        add(&mut book, "Bob", "0671112233").unwrap();

        let hit = find_by_phone(&book, "0671112233").unwrap();
        assert_eq!(hit.listed_records[0].name(), "Bob");
        let miss = find_by_phone(&book, "0000000000").unwrap();
        assert!(miss.listed_records.is_empty());
        assert_eq!(miss.messages.len(), 1);

        delete(&mut book, "BOB").unwrap();
        assert!(matches!(
            delete(&mut book, "bob"),
            Err(YadaError::ContactNotFound(_))
        ));
        assert!(matches!(show(&book, "bob"), Err(YadaError::ContactNotFound(_))));
        assert_eq!(all(&book).unwrap().listed_records.len(), 1);
    }

    #[test]
    fn all_on_empty_book_explains_itself() {
        let result = all(&AddressBook::new()).unwrap();
        assert!(result.listed_records.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Info);
    }

    #[test]
    fn emails_and_addresses() {
        let mut book = AddressBook::new();
        add(&mut book, "Ann", "0501234567").unwrap();
        add_email(&mut book, "ann", "ann@mail.com").unwrap();
        assert!(matches!(
            add_email(&mut book, "ann", "ann@mail"),
            Err(YadaError::InvalidEmail(_))
        ));
        assert!(matches!(
            edit_email(&mut book, "ann", "other@mail.com", "x@y.io"),
            Err(YadaError::EmailNotFound { .. })
        ));
        edit_email(&mut book, "ann", "ann@mail.com", "ann@work.io").unwrap();

        let address = Address::new("UA", "Kyiv", "Main", "5", "");
        add_address(&mut book, "ann", address.clone()).unwrap();
        assert!(matches!(
            add_address(&mut book, "ghost", address),
            Err(YadaError::ContactNotFound(_))
        ));

        let record = book.find("ann").unwrap();
        assert_eq!(record.emails()[0].as_str(), "ann@work.io");
        assert_eq!(record.addresses().len(), 1);
    }
}
