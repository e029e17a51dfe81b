//! # Notebook
//!
//! An ordered list of [`Note`]s. Order is insertion order, not id order:
//! a new note gets `max(existing ids) + 1`, so deleting the newest note frees
//! its id for the next one.

use crate::error::{Result, YadaError};
use crate::model::Note;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notebook {
    notes: Vec<Note>,
}

/// Outcome of [`Notebook::delete_tag`] on an existing note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagRemoval {
    Removed,
    Absent,
}

impl Notebook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_notes(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn list_all(&self) -> &[Note] {
        &self.notes
    }

    pub fn next_id(&self) -> Result<u32> {
        let max = self.notes.iter().map(|n| n.id).max().unwrap_or(0);
        max.checked_add(1).ok_or_else(|| {
            YadaError::Api(format!(
                "No note ids left after {}; delete that note to free an id",
                max
            ))
        })
    }

    /// Appends a note and returns its id.
    pub fn add_note(&mut self, text: &str) -> Result<u32> {
        let id = self.next_id()?;
        self.notes.push(Note::new(id, text));
        Ok(id)
    }

    pub fn find(&self, id: u32) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    fn find_mut(&mut self, id: u32) -> Result<&mut Note> {
        self.notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(YadaError::NoteNotFound(id))
    }

    pub fn edit_note(&mut self, id: u32, text: &str) -> Result<&Note> {
        let note = self.find_mut(id)?;
        note.set_text(text);
        Ok(note)
    }

    pub fn delete_note(&mut self, id: u32) -> Result<Note> {
        let idx = self
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or(YadaError::NoteNotFound(id))?;
        Ok(self.notes.remove(idx))
    }

    /// Case-insensitive substring search over note text.
    pub fn search_by_text(&self, query: &str) -> Vec<&Note> {
        let query = query.to_lowercase();
        self.notes
            .iter()
            .filter(|n| n.text.to_lowercase().contains(&query))
            .collect()
    }

    /// Notes carrying `tag`, compared case-insensitively.
    pub fn search_by_tag(&self, tag: &str) -> Vec<&Note> {
        self.notes
            .iter()
            .filter(|n| n.has_tag_ignore_case(tag))
            .collect()
    }

    /// Adds a tag to a note. Returns whether the tag was new.
    pub fn add_tag(&mut self, id: u32, tag: &str) -> Result<bool> {
        self.find_mut(id)?.add_tag(tag)
    }

    pub fn delete_tag(&mut self, id: u32, tag: &str) -> Result<TagRemoval> {
        let note = self.find_mut(id)?;
        Ok(if note.delete_tag(tag) {
            TagRemoval::Removed
        } else {
            TagRemoval::Absent
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_start_at_one_and_are_reused_after_deleting_the_max() {
        let mut nb = Notebook::new();
        assert_eq!(nb.add_note("buy milk").unwrap(), 1);
        nb.delete_note(1).unwrap();
        assert_eq!(nb.add_note("buy eggs").unwrap(), 1);
    }

    #[test]
    fn ids_follow_the_current_maximum() {
        let mut nb = Notebook::new();
        nb.add_note("a").unwrap();
        nb.add_note("b").unwrap();
        nb.add_note("c").unwrap();
        nb.delete_note(2).unwrap();
        assert_eq!(nb.add_note("d").unwrap(), 4);
        let ids: Vec<_> = nb.list_all().iter().map(|n| n.id).collect();
        assert_eq!(ids, [1, 3, 4]);
    }

    #[test]
    fn order_is_insertion_order_not_id_order() {
        let mut nb = Notebook::from_notes(vec![Note::new(5, "five"), Note::new(2, "two")]);
        nb.add_note("six").unwrap();
        let ids: Vec<_> = nb.list_all().iter().map(|n| n.id).collect();
        assert_eq!(ids, [5, 2, 6]);
    }

    #[test]
    fn add_note_fails_when_ids_run_out() {
        let mut nb = Notebook::from_notes(vec![Note::new(u32::MAX, "last")]);
        assert!(matches!(nb.add_note("one more"), Err(YadaError::Api(_))));
        assert_eq!(nb.len(), 1);
        nb.delete_note(u32::MAX).unwrap();
        assert_eq!(nb.add_note("one more").unwrap(), 1);
    }

    #[test]
    fn edit_and_delete_report_missing_ids() {
        let mut nb = Notebook::new();
        nb.add_note("a").unwrap();
        assert!(matches!(
            nb.edit_note(9, "x"),
            Err(YadaError::NoteNotFound(9))
        ));
        assert!(matches!(nb.delete_note(9), Err(YadaError::NoteNotFound(9))));
        assert_eq!(nb.edit_note(1, "b").unwrap().text, "b");
        assert_eq!(nb.len(), 1);
    }

    #[test]
    fn text_search_is_case_insensitive_substring() {
        let mut nb = Notebook::new();
        nb.add_note("Buy MILK").unwrap();
        nb.add_note("call mom").unwrap();
        nb.add_note("milkshake recipe").unwrap();
        let hits: Vec<_> = nb.search_by_text("milk").iter().map(|n| n.id).collect();
        assert_eq!(hits, [1, 3]);
        assert!(nb.search_by_text("zzz").is_empty());
    }

    #[test]
    fn tag_search_is_case_insensitive_exact() {
        let mut nb = Notebook::new();
        nb.add_note("a").unwrap();
        nb.add_note("b").unwrap();
        nb.add_tag(1, "Work").unwrap();
        nb.add_tag(2, "workshop").unwrap();
        let hits: Vec<_> = nb.search_by_tag("work").iter().map(|n| n.id).collect();
        assert_eq!(hits, [1]);
    }

    #[test]
    fn add_tag_twice_keeps_one() {
        let mut nb = Notebook::new();
        nb.add_note("a").unwrap();
        assert!(nb.add_tag(1, "x").unwrap());
        assert!(!nb.add_tag(1, "x").unwrap());
        assert_eq!(nb.find(1).unwrap().tags, ["x"]);
        assert!(matches!(nb.add_tag(2, "x"), Err(YadaError::NoteNotFound(2))));
    }

    #[test]
    fn delete_tag_distinguishes_missing_note_and_missing_tag() {
        let mut nb = Notebook::new();
        nb.add_note("a").unwrap();
        nb.add_tag(1, "x").unwrap();
        assert_eq!(nb.delete_tag(1, "y").unwrap(), TagRemoval::Absent);
        assert_eq!(nb.delete_tag(1, "x").unwrap(), TagRemoval::Removed);
        assert!(nb.find(1).unwrap().tags.is_empty());
        assert!(matches!(
            nb.delete_tag(7, "x"),
            Err(YadaError::NoteNotFound(7))
        ));
    }
}
