use crate::error::{Result, YadaError};
use crate::fields::{
    validate_birthday, validate_email, validate_phone, validate_tag, Address, Birthday, Email,
    Phone,
};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const UNKNOWN_BIRTHDAY: &str = "Unknown";

/// One person's contact data.
///
/// Every collection is always present (possibly empty) so older data files
/// without `emails` or `addresses` still load. All mutators validate their
/// input before touching the record, a failed call leaves it unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
    #[serde(default)]
    addresses: Vec<Address>,
    #[serde(default)]
    emails: Vec<Email>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
            addresses: Vec::new(),
            emails: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The address book key: the name folded to lowercase.
    pub fn key(&self) -> String {
        name_key(&self.name)
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    pub fn emails(&self) -> &[Email] {
        &self.emails
    }

    /// Appends a phone. Duplicates are kept.
    pub fn add_phone(&mut self, raw: &str) -> Result<&Phone> {
        let phone = validate_phone(raw)?;
        self.phones.push(phone);
        Ok(&self.phones[self.phones.len() - 1])
    }

    /// Removes every phone equal to `value`. Returns whether anything was removed.
    pub fn remove_phone(&mut self, value: &str) -> bool {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != value);
        before != self.phones.len()
    }

    /// Replaces every phone equal to `old` with the validated `new`.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let replacement = validate_phone(new)?;
        let mut found = false;
        for phone in self.phones.iter_mut().filter(|p| p.as_str() == old) {
            *phone = replacement.clone();
            found = true;
        }
        if !found {
            return Err(YadaError::PhoneNotFound {
                name: self.name.clone(),
                phone: old.to_string(),
            });
        }
        Ok(())
    }

    pub fn find_phone(&self, value: &str) -> bool {
        self.phones.iter().any(|p| p.as_str() == value)
    }

    /// Sets the birthday, failing if one is already recorded.
    pub fn set_birthday(&mut self, raw: &str) -> Result<Birthday> {
        let birthday = validate_birthday(raw)?;
        if self.birthday.is_some() {
            return Err(YadaError::BirthdayConflict(self.name.clone()));
        }
        self.birthday = Some(birthday);
        Ok(birthday)
    }

    /// Sets the birthday unconditionally, returning the previous one.
    pub fn replace_birthday(&mut self, raw: &str) -> Result<Option<Birthday>> {
        let birthday = validate_birthday(raw)?;
        Ok(self.birthday.replace(birthday))
    }

    pub fn add_address(&mut self, address: Address) {
        self.addresses.push(address);
    }

    pub fn add_email(&mut self, raw: &str) -> Result<&Email> {
        let email = validate_email(raw)?;
        self.emails.push(email);
        Ok(&self.emails[self.emails.len() - 1])
    }

    /// Replaces the first email equal to `old` with the validated `new`.
    pub fn edit_email(&mut self, old: &str, new: &str) -> Result<()> {
        let replacement = validate_email(new)?;
        match self.emails.iter_mut().find(|e| e.as_str() == old) {
            Some(email) => {
                *email = replacement;
                Ok(())
            }
            None => Err(YadaError::EmailNotFound {
                name: self.name.clone(),
                email: old.to_string(),
            }),
        }
    }

    pub fn birthday_text(&self) -> String {
        self.birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| UNKNOWN_BIRTHDAY.to_string())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name,
            join(&self.phones),
            self.birthday_text()
        )?;
        if !self.emails.is_empty() {
            write!(f, ", emails: {}", join(&self.emails))?;
        }
        if !self.addresses.is_empty() {
            write!(f, ", addresses: {}", join(&self.addresses))?;
        }
        Ok(())
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn name_key(name: &str) -> String {
    name.to_lowercase()
}

/// A free-text note with tags. Ids are assigned by the notebook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: u32,
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Note {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: single_line(&text.into()),
            tags: Vec::new(),
        }
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = single_line(text);
    }

    /// Adds a tag unless an identical one is already present.
    /// Returns whether the tag list changed.
    pub fn add_tag(&mut self, raw: &str) -> Result<bool> {
        let tag = validate_tag(raw)?;
        if self.tags.contains(&tag) {
            return Ok(false);
        }
        self.tags.push(tag);
        Ok(true)
    }

    /// Removes the tag if present. Returns whether it was.
    pub fn delete_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        before != self.tags.len()
    }

    pub fn has_tag_ignore_case(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }
}

// Notes are persisted one per line.
fn single_line(text: &str) -> String {
    text.split(['\n', '\r'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
