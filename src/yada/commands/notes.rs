use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Note;
use crate::notebook::{Notebook, TagRemoval};

const NO_MATCHES: &str = "There are no notes matching specified criteria.";

fn listed(notes: Vec<&Note>) -> CmdResult {
    let mut result = CmdResult::default();
    if notes.is_empty() {
        result.add_message(CmdMessage::info(NO_MATCHES));
    }
    result.with_listed_notes(notes.into_iter().cloned().collect())
}

fn note_snapshot(notebook: &Notebook, id: u32) -> Vec<Note> {
    notebook.find(id).cloned().into_iter().collect()
}

pub fn add(notebook: &mut Notebook, text: &str) -> Result<CmdResult> {
    let id = notebook.add_note(text)?;
    tracing::debug!(id, "added note");
    Ok(CmdResult::default()
        .with_listed_notes(note_snapshot(notebook, id))
        .with_message(CmdMessage::success(format!(
            "Note was added under the id: {}",
            id
        ))))
}

pub fn edit(notebook: &mut Notebook, id: u32, text: &str) -> Result<CmdResult> {
    let note = notebook.edit_note(id, text)?.clone();
    tracing::debug!(id, "edited note");
    Ok(CmdResult::default()
        .with_listed_notes(vec![note])
        .with_message(CmdMessage::success(format!("Note {} was edited", id))))
}

pub fn delete(notebook: &mut Notebook, id: u32) -> Result<CmdResult> {
    let note = notebook.delete_note(id)?;
    tracing::debug!(id, "deleted note");
    Ok(CmdResult::default()
        .with_listed_notes(vec![note])
        .with_message(CmdMessage::success(format!("Note {} was deleted", id))))
}

pub fn list(notebook: &Notebook) -> Result<CmdResult> {
    let mut result =
        CmdResult::default().with_listed_notes(notebook.list_all().to_vec());
    if notebook.is_empty() {
        result.add_message(CmdMessage::info("There are no notes in the notebook."));
    }
    Ok(result)
}

pub fn search_text(notebook: &Notebook, query: &str) -> Result<CmdResult> {
    Ok(listed(notebook.search_by_text(query)))
}

pub fn search_tag(notebook: &Notebook, tag: &str) -> Result<CmdResult> {
    Ok(listed(notebook.search_by_tag(tag)))
}

pub fn add_tag(notebook: &mut Notebook, id: u32, tag: &str) -> Result<CmdResult> {
    let added = notebook.add_tag(id, tag)?;
    let tag = tag.trim();
    let message = if added {
        tracing::debug!(id, tag, "tagged note");
        CmdMessage::success(format!("Tag '{}' added to note {}", tag, id))
    } else {
        CmdMessage::info(format!("Note {} already has tag '{}'", id, tag))
    };
    Ok(CmdResult::default()
        .with_listed_notes(note_snapshot(notebook, id))
        .with_message(message))
}

pub fn delete_tag(notebook: &mut Notebook, id: u32, tag: &str) -> Result<CmdResult> {
    let message = match notebook.delete_tag(id, tag)? {
        TagRemoval::Removed => {
            tracing::debug!(id, tag, "untagged note");
            CmdMessage::success(format!("Tag '{}' of note {} deleted", tag, id))
        }
        TagRemoval::Absent => {
            CmdMessage::warning(format!("No tag '{}' found in note {}", tag, id))
        }
    };
    Ok(CmdResult::default()
        .with_listed_notes(note_snapshot(notebook, id))
        .with_message(message))
}
