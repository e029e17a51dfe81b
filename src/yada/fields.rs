//! Validated record fields.
//!
//! Every field type here can only be obtained through its validator, so a
//! value that made it into a [`crate::model::Record`] is known to be well
//! formed. Validators are pure: they never print and never touch state, the
//! caller decides what to tell the user from the returned error.
//!
//! Serialization goes through the same validators (`serde(try_from)`), so a
//! hand-edited contacts file cannot smuggle in a malformed phone or date.

use crate::error::{Result, YadaError};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

const PHONE_PREFIX: &str = "+38";
const PHONE_DIGITS: usize = 10;
const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// A phone number: exactly ten ASCII digits, stored without the `+38` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Strips a leading `+38` and requires exactly ten digits. No other
/// normalization happens: dashes, spaces and parentheses are rejected.
pub fn validate_phone(raw: &str) -> Result<Phone> {
    let digits = raw.strip_prefix(PHONE_PREFIX).unwrap_or(raw);
    if digits.len() == PHONE_DIGITS && digits.bytes().all(|b| b.is_ascii_digit()) {
        Ok(Phone(digits.to_string()))
    } else {
        Err(YadaError::InvalidPhone(raw.to_string()))
    }
}

impl TryFrom<String> for Phone {
    type Error = YadaError;

    fn try_from(value: String) -> Result<Self> {
        validate_phone(&value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A birthday, rendered and parsed as `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The date this birthday falls on in `year`. A 29 February birthday is
    /// celebrated on 1 March in non-leap years.
    pub fn in_year(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
            .unwrap_or(self.0)
    }
}

/// Parses a `DD.MM.YYYY` birthday.
///
/// The shape is checked first, then `day <= 31` and `month <= 12`. Dates that
/// pass those checks but do not exist on the calendar (`31.02.2020`,
/// `00.05.1990`) are rejected as well, with the same error.
pub fn validate_birthday(raw: &str) -> Result<Birthday> {
    let invalid = || YadaError::InvalidBirthday(raw.to_string());

    let bytes = raw.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[2] == b'.'
        && bytes[5] == b'.'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
    if !shaped {
        return Err(invalid());
    }

    let day: u32 = raw[0..2].parse().map_err(|_| invalid())?;
    let month: u32 = raw[3..5].parse().map_err(|_| invalid())?;
    let year: i32 = raw[6..10].parse().map_err(|_| invalid())?;
    if day > 31 || month > 12 {
        return Err(invalid());
    }

    NaiveDate::from_ymd_opt(year, month, day)
        .map(Birthday)
        .ok_or_else(invalid)
}

impl TryFrom<String> for Birthday {
    type Error = YadaError;

    fn try_from(value: String) -> Result<Self> {
        validate_birthday(&value)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

/// An email address of the form `local@domain.tld`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn validate_email(raw: &str) -> Result<Email> {
    if EMAIL_RE.is_match(raw) {
        Ok(Email(raw.to_string()))
    } else {
        Err(YadaError::InvalidEmail(raw.to_string()))
    }
}

impl TryFrom<String> for Email {
    type Error = YadaError;

    fn try_from(value: String) -> Result<Self> {
        validate_email(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A postal address. Free text, no validation; addresses are append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub country: String,
    pub city: String,
    pub street: String,
    pub house_number: String,
    #[serde(default)]
    pub apartment_number: String,
}

impl Address {
    pub fn new(
        country: impl Into<String>,
        city: impl Into<String>,
        street: impl Into<String>,
        house_number: impl Into<String>,
        apartment_number: impl Into<String>,
    ) -> Self {
        Self {
            country: country.into(),
            city: city.into(),
            street: street.into(),
            house_number: house_number.into(),
            apartment_number: apartment_number.into(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {} {}",
            self.country, self.city, self.street, self.house_number
        )?;
        if !self.apartment_number.is_empty() {
            write!(f, ", apt. {}", self.apartment_number)?;
        }
        Ok(())
    }
}

/// Validates a note tag and returns it trimmed.
///
/// Tags are stored on a single comma separated line, so blank tags and tags
/// containing commas or line breaks are rejected. Case is preserved.
pub fn validate_tag(raw: &str) -> Result<String> {
    let tag = raw.trim();
    if tag.is_empty() || tag.contains([',', '\n', '\r']) {
        return Err(YadaError::InvalidTag(raw.to_string()));
    }
    Ok(tag.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ten_digit_phones_with_or_without_prefix() {
        for raw in ["0501234567", "9999999999", "0000000000"] {
            assert_eq!(validate_phone(raw).unwrap().as_str(), raw);
            let prefixed = format!("+38{}", raw);
            assert_eq!(validate_phone(&prefixed).unwrap().as_str(), raw);
        }
    }

    #[test]
    fn rejects_malformed_phones() {
        for raw in [
            "",
            "050123456",
            "05012345678",
            "050-123-4567",
            "050 1234567",
            "(050)123456",
            "+3805012345",
            "05012345ab",
            "38 0501234567",
            "+1 0501234567",
        ] {
            let err = validate_phone(raw).unwrap_err();
            assert!(matches!(err, YadaError::InvalidPhone(_)), "{raw}");
        }
    }

    #[test]
    fn only_leading_prefix_is_stripped() {
        assert!(validate_phone("05012+3845").is_err());
        assert!(validate_phone("0501234+38567").is_err());
    }

    #[test]
    fn parses_birthdays_in_dd_mm_yyyy() {
        let b = validate_birthday("07.03.1991").unwrap();
        assert_eq!(b.date(), NaiveDate::from_ymd_opt(1991, 3, 7).unwrap());
        assert_eq!(b.to_string(), "07.03.1991");
    }

    #[test]
    fn every_real_calendar_date_parses() {
        for m in 1..=12u32 {
            for d in 1..=31u32 {
                let raw = format!("{:02}.{:02}.{:04}", d, m, 2024);
                let real = NaiveDate::from_ymd_opt(2024, m, d).is_some();
                assert_eq!(validate_birthday(&raw).is_ok(), real, "{raw}");
            }
        }
    }

    #[test]
    fn rejects_impossible_calendar_dates() {
        for raw in ["31.02.2020", "31.04.2021", "29.02.2021", "00.01.2000", "01.00.2000"] {
            assert!(matches!(
                validate_birthday(raw),
                Err(YadaError::InvalidBirthday(_))
            ));
        }
        assert!(validate_birthday("29.02.2020").is_ok());
    }

    #[test]
    fn rejects_out_of_range_and_misshapen_birthdays() {
        for raw in [
            "32.01.2000",
            "01.13.2000",
            "1.1.2000",
            "2000-01-01",
            "01/01/2000",
            "01.01.00",
            "01.01.2000 ",
            "aa.bb.cccc",
            "",
        ] {
            assert!(validate_birthday(raw).is_err(), "{raw}");
        }
    }

    #[test]
    fn leap_day_birthdays_move_to_march_first() {
        let b = validate_birthday("29.02.2000").unwrap();
        assert_eq!(b.in_year(2023), NaiveDate::from_ymd_opt(2023, 3, 1).unwrap());
        assert_eq!(b.in_year(2024), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn email_requires_a_tld() {
        assert!(matches!(
            validate_email("a@b"),
            Err(YadaError::InvalidEmail(_))
        ));
        assert_eq!(validate_email("a@b.co").unwrap().as_str(), "a@b.co");
    }

    #[test]
    fn email_pattern_edges() {
        for ok in [
            "first.last+tag@mail.example.com",
            "x_y%z@sub-domain.org",
            "A1@B2.io",
        ] {
            assert!(validate_email(ok).is_ok(), "{ok}");
        }
        for bad in [
            "",
            "@b.co",
            "a@.co",
            "a@b.c",
            "a@b.c0",
            "a b@c.com",
            "a@b_c.com",
            "a@@b.com",
            "a@b.com.",
        ] {
            assert!(validate_email(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn deserialization_revalidates() {
        let ok: Phone = serde_json::from_str("\"0501234567\"").unwrap();
        assert_eq!(ok.as_str(), "0501234567");
        assert!(serde_json::from_str::<Phone>("\"12\"").is_err());
        assert!(serde_json::from_str::<Birthday>("\"31.02.2020\"").is_err());
        assert!(serde_json::from_str::<Email>("\"nope\"").is_err());
    }

    #[test]
    fn address_display_omits_empty_apartment() {
        let a = Address::new("Ukraine", "Kyiv", "Khreshchatyk", "1", "");
        assert_eq!(a.to_string(), "Ukraine, Kyiv, Khreshchatyk 1");
        let b = Address::new("Ukraine", "Kyiv", "Khreshchatyk", "1", "12");
        assert_eq!(b.to_string(), "Ukraine, Kyiv, Khreshchatyk 1, apt. 12");
    }

    #[test]
    fn tags_are_trimmed_and_must_fit_on_one_line() {
        assert_eq!(validate_tag("  Work ").unwrap(), "Work");
        for bad in ["", "   ", "a,b", "a\nb"] {
            assert!(matches!(validate_tag(bad), Err(YadaError::InvalidTag(_))));
        }
    }
}
