use super::text::{decode_notes, encode_notes};
use super::DataStore;
use crate::book::AddressBook;
use crate::config::YadaConfig;
use crate::error::{Result, YadaError};
use crate::model::Note;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    root: PathBuf,
    contacts_file: String,
    notes_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        let defaults = YadaConfig::default();
        Self {
            root,
            contacts_file: defaults.contacts_file,
            notes_file: defaults.notes_file,
        }
    }

    pub fn with_config(mut self, config: &YadaConfig) -> Self {
        self.contacts_file = config.contacts_file.clone();
        self.notes_file = config.notes_file.clone();
        self
    }

    pub fn contacts_path(&self) -> PathBuf {
        self.root.join(&self.contacts_file)
    }

    pub fn notes_path(&self) -> PathBuf {
        self.root.join(&self.notes_file)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(YadaError::Io)?;
        }
        Ok(())
    }

    fn read_if_exists(path: &Path) -> Result<Option<String>> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "data file missing, starting empty");
            return Ok(None);
        }
        fs::read_to_string(path).map(Some).map_err(YadaError::Io)
    }
}

impl DataStore for FileStore {
    fn load_contacts(&self) -> Result<AddressBook> {
        let path = self.contacts_path();
        let Some(content) = Self::read_if_exists(&path)? else {
            return Ok(AddressBook::new());
        };
        let book: AddressBook =
            serde_json::from_str(&content).map_err(YadaError::Serialization)?;
        tracing::debug!(path = %path.display(), records = book.len(), "loaded contacts");
        Ok(book)
    }

    fn save_contacts(&mut self, book: &AddressBook) -> Result<()> {
        self.ensure_dir()?;
        let path = self.contacts_path();
        let content = serde_json::to_string_pretty(book).map_err(YadaError::Serialization)?;
        fs::write(&path, content).map_err(YadaError::Io)?;
        tracing::debug!(path = %path.display(), records = book.len(), "saved contacts");
        Ok(())
    }

    fn load_notes(&self) -> Result<Vec<Note>> {
        let path = self.notes_path();
        let Some(content) = Self::read_if_exists(&path)? else {
            return Ok(Vec::new());
        };
        let notes = decode_notes(&content).map_err(|e| match e {
            YadaError::Store(msg) => YadaError::Store(format!("{}: {}", path.display(), msg)),
            other => other,
        })?;
        tracing::debug!(path = %path.display(), notes = notes.len(), "loaded notes");
        Ok(notes)
    }

    fn save_notes(&mut self, notes: &[Note]) -> Result<()> {
        self.ensure_dir()?;
        let path = self.notes_path();
        fs::write(&path, encode_notes(notes)).map_err(YadaError::Io)?;
        tracing::debug!(path = %path.display(), notes = notes.len(), "saved notes");
        Ok(())
    }
}
