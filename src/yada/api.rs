//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for all yada operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns state**: the loaded [`AddressBook`] and [`Notebook`]
//! - **Normalizes inputs** (e.g., parsing note ids typed by the user)
//! - **Dispatches** to the appropriate command function
//! - **Persists** the full snapshot after every successful mutation
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! A failed command is never followed by a save, so the data on disk only
//! ever reflects complete operations. When the save itself fails, the
//! in-memory state is rolled back to what it was before the command.
//!
//! ## Generic Over DataStore
//!
//! `YadaApi<S: DataStore>` is generic over the storage backend:
//! - Production: `YadaApi<FileStore>`
//! - Testing: `YadaApi<InMemoryStore>`

use crate::book::AddressBook;
use crate::commands;
use crate::config::YadaConfig;
use crate::error::{Result, YadaError};
use crate::fields::Address;
use crate::notebook::Notebook;
use crate::store::DataStore;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct YadaApi<S: DataStore> {
    store: S,
    book: AddressBook,
    notebook: Notebook,
    data_dir: PathBuf,
    birthday_window: u32,
}

impl<S: DataStore> YadaApi<S> {
    /// Loads the address book and notebook from `store`.
    pub fn new(store: S, data_dir: PathBuf, config: &YadaConfig) -> Result<Self> {
        let book = store.load_contacts()?;
        let notebook = Notebook::from_notes(store.load_notes()?);
        tracing::debug!(
            contacts = book.len(),
            notes = notebook.len(),
            data_dir = %data_dir.display(),
            "api ready"
        );
        Ok(Self {
            store,
            book,
            notebook,
            data_dir,
            birthday_window: config.birthday_window_days,
        })
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn notebook(&self) -> &Notebook {
        &self.notebook
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Runs a contacts command and saves the book. Any failure, including
    /// the save, restores the book to its state before the command.
    fn mutate_contacts(
        &mut self,
        command: impl FnOnce(&mut AddressBook) -> Result<CmdResult>,
    ) -> Result<CmdResult> {
        let before = self.book.clone();
        let outcome = command(&mut self.book).and_then(|result| {
            self.store.save_contacts(&self.book)?;
            Ok(result)
        });
        if let Err(e) = &outcome {
            tracing::debug!(error = %e, "contacts rolled back");
            self.book = before;
        }
        outcome
    }

    fn mutate_notes(
        &mut self,
        command: impl FnOnce(&mut Notebook) -> Result<CmdResult>,
    ) -> Result<CmdResult> {
        let before = self.notebook.clone();
        let outcome = command(&mut self.notebook).and_then(|result| {
            self.store.save_notes(self.notebook.list_all())?;
            Ok(result)
        });
        if let Err(e) = &outcome {
            tracing::debug!(error = %e, "notes rolled back");
            self.notebook = before;
        }
        outcome
    }

    // --- Contacts ---

    pub fn add_contact(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        self.mutate_contacts(|book| commands::contacts::add(book, name, phone))
    }

    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> Result<CmdResult> {
        self.mutate_contacts(|book| commands::contacts::change_phone(book, name, old, new))
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        self.mutate_contacts(|book| commands::contacts::remove_phone(book, name, phone))
    }

    pub fn show_contact(&self, name: &str) -> Result<CmdResult> {
        commands::contacts::show(&self.book, name)
    }

    pub fn all_contacts(&self) -> Result<CmdResult> {
        commands::contacts::all(&self.book)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<CmdResult> {
        self.mutate_contacts(|book| commands::contacts::delete(book, name))
    }

    pub fn find_by_phone(&self, phone: &str) -> Result<CmdResult> {
        commands::contacts::find_by_phone(&self.book, phone)
    }

    pub fn add_email(&mut self, name: &str, email: &str) -> Result<CmdResult> {
        self.mutate_contacts(|book| commands::contacts::add_email(book, name, email))
    }

    pub fn edit_email(&mut self, name: &str, old: &str, new: &str) -> Result<CmdResult> {
        self.mutate_contacts(|book| commands::contacts::edit_email(book, name, old, new))
    }

    pub fn add_address(&mut self, name: &str, address: Address) -> Result<CmdResult> {
        self.mutate_contacts(|book| commands::contacts::add_address(book, name, address))
    }

    // --- Birthdays ---

    pub fn set_birthday(&mut self, name: &str, birthday: &str, force: bool) -> Result<CmdResult> {
        self.mutate_contacts(|book| commands::birthdays::set(book, name, birthday, force))
    }

    pub fn show_birthday(&self, name: &str) -> Result<CmdResult> {
        commands::birthdays::show(&self.book, name)
    }

    pub fn find_by_birthday(&self, date_text: &str) -> Result<CmdResult> {
        commands::birthdays::find_by_birthday(&self.book, date_text)
    }

    /// Birthdays in the next `days` days (the configured window by default).
    pub fn upcoming_birthdays(&self, days: Option<u32>) -> Result<CmdResult> {
        self.upcoming_birthdays_from(Local::now().date_naive(), days)
    }

    pub fn upcoming_birthdays_from(&self, today: NaiveDate, days: Option<u32>) -> Result<CmdResult> {
        let days = days.unwrap_or(self.birthday_window);
        commands::birthdays::upcoming(&self.book, today, days)
    }

    // --- Notes ---

    pub fn add_note(&mut self, text: &str) -> Result<CmdResult> {
        if text.trim().is_empty() {
            return Err(YadaError::Api("Note text cannot be empty".into()));
        }
        self.mutate_notes(|notebook| commands::notes::add(notebook, text))
    }

    pub fn edit_note(&mut self, id: &str, text: &str) -> Result<CmdResult> {
        let id = parse_note_id(id)?;
        self.mutate_notes(|notebook| commands::notes::edit(notebook, id, text))
    }

    pub fn delete_note(&mut self, id: &str) -> Result<CmdResult> {
        let id = parse_note_id(id)?;
        self.mutate_notes(|notebook| commands::notes::delete(notebook, id))
    }

    pub fn list_notes(&self) -> Result<CmdResult> {
        commands::notes::list(&self.notebook)
    }

    pub fn search_notes(&self, query: &str) -> Result<CmdResult> {
        commands::notes::search_text(&self.notebook, query)
    }

    pub fn search_tag(&self, tag: &str) -> Result<CmdResult> {
        commands::notes::search_tag(&self.notebook, tag)
    }

    pub fn add_tag(&mut self, id: &str, tag: &str) -> Result<CmdResult> {
        let id = parse_note_id(id)?;
        self.mutate_notes(|notebook| commands::notes::add_tag(notebook, id, tag))
    }

    pub fn delete_tag(&mut self, id: &str, tag: &str) -> Result<CmdResult> {
        let id = parse_note_id(id)?;
        self.mutate_notes(|notebook| commands::notes::delete_tag(notebook, id, tag))
    }

    // --- Settings ---

    /// Reads or changes `config.json`. A new birthday window applies to the
    /// running session; file names take effect on the next start.
    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&self.data_dir, action)?;
        if let Some(config) = &result.config {
            self.birthday_window = config.birthday_window_days;
        }
        Ok(result)
    }
}

fn parse_note_id(raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| YadaError::Api(format!("Note id must be a positive number, got {:?}", raw)))
}
