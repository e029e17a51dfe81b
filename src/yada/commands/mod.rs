//! # Command Layer
//!
//! Business logic for every user-facing operation. Commands take the
//! in-memory [`AddressBook`](crate::book::AddressBook) or
//! [`Notebook`](crate::notebook::Notebook) plus plain arguments, and return a
//! [`CmdResult`] describing what happened. They never print and never
//! persist; the API layer saves after a command succeeds.
//!
//! A command that fails returns before touching its target, so the caller
//! can skip the save and the stored snapshot stays as it was.

use crate::book::UpcomingBirthday;
use crate::config::YadaConfig;
use crate::model::{Note, Record};

pub mod birthdays;
pub mod config;
pub mod contacts;
pub mod notes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records created or changed by the command, in their new state
    pub affected_records: Vec<Record>,
    /// Records to display (listings and lookups)
    pub listed_records: Vec<Record>,
    /// Notes to display, or the note a command just changed
    pub listed_notes: Vec<Note>,
    pub upcoming_birthdays: Vec<UpcomingBirthday>,
    pub config: Option<YadaConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<Note>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_upcoming_birthdays(mut self, upcoming: Vec<UpcomingBirthday>) -> Self {
        self.upcoming_birthdays = upcoming;
        self
    }

    pub fn with_config(mut self, config: YadaConfig) -> Self {
        self.config = Some(config);
        self
    }
}
