use super::DataStore;
use crate::book::AddressBook;
use crate::error::Result;
use crate::model::Note;

/// Keeps the snapshot in memory and counts saves. Used by tests.
#[derive(Default)]
pub struct InMemoryStore {
    book: AddressBook,
    notes: Vec<Note>,
    contact_saves: usize,
    note_saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the address book was saved.
    pub fn contact_saves(&self) -> usize {
        self.contact_saves
    }

    /// Number of times the notes were saved.
    pub fn note_saves(&self) -> usize {
        self.note_saves
    }
}

impl DataStore for InMemoryStore {
    fn load_contacts(&self) -> Result<AddressBook> {
        Ok(self.book.clone())
    }

    fn save_contacts(&mut self, book: &AddressBook) -> Result<()> {
        self.book = book.clone();
        self.contact_saves += 1;
        Ok(())
    }

    fn load_notes(&self) -> Result<Vec<Note>> {
        Ok(self.notes.clone())
    }

    fn save_notes(&mut self, notes: &[Note]) -> Result<()> {
        self.notes = notes.to_vec();
        self.note_saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Record;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_contact(mut self, name: &str, phone: &str) -> Self {
            let mut record = Record::new(name);
            record.add_phone(phone).unwrap();
            self.store.book.add(record);
            self
        }

        pub fn with_birthday(mut self, name: &str, birthday: &str) -> Self {
            self.store
                .book
                .find_mut(name)
                .expect("fixture contact exists")
                .set_birthday(birthday)
                .unwrap();
            self
        }

        pub fn with_note(mut self, text: &str, tags: &[&str]) -> Self {
            let id = self.store.notes.iter().map(|n| n.id).max().unwrap_or(0) + 1;
            let mut note = Note::new(id, text);
            for tag in tags {
                note.add_tag(tag).unwrap();
            }
            self.store.notes.push(note);
            self
        }
    }
}
