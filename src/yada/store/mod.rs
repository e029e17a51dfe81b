//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence boundary for the address book
//! and the notebook. The core never touches files directly: the API loads a
//! snapshot through the store at startup and hands the whole snapshot back
//! after every mutation.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage in the data directory
//!   - Contacts in `contacts.json` (JSON array of records)
//!   - Notes in `notes.txt` (line format, see [`text`])
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Counts saves so tests can assert that failed commands write nothing
//!
//! ## Failure Policy
//!
//! A missing file is not an error, it loads as an empty book/notebook.
//! A file that exists but cannot be parsed is an error: silently starting
//! from scratch would overwrite the user's data on the next save.

use crate::book::AddressBook;
use crate::error::Result;
use crate::model::Note;

pub mod fs;
pub mod memory;
pub mod text;

pub trait DataStore {
    /// Load the address book, or an empty one if nothing was saved yet
    fn load_contacts(&self) -> Result<AddressBook>;

    /// Replace the stored address book with `book`
    fn save_contacts(&mut self, book: &AddressBook) -> Result<()>;

    /// Load notes in stored order, or none if nothing was saved yet
    fn load_notes(&self) -> Result<Vec<Note>>;

    /// Replace the stored notes with `notes`
    fn save_notes(&mut self, notes: &[Note]) -> Result<()>;
}
