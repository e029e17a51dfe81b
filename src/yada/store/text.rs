//! Line format for notes.
//!
//! Each note takes two lines: its tags joined by `", "` (an empty line when
//! it has none), then `id:text`.
//!
//! ```text
//! work, urgent
//! 1:send the report
//!
//! 2:buy milk
//! ```

use crate::error::{Result, YadaError};
use crate::model::Note;

const TAG_SEPARATOR: &str = ", ";

pub fn encode_notes(notes: &[Note]) -> String {
    let mut out = String::new();
    for note in notes {
        out.push_str(&note.tags.join(TAG_SEPARATOR));
        out.push('\n');
        out.push_str(&format!("{}:{}\n", note.id, note.text));
    }
    out
}

pub fn decode_notes(content: &str) -> Result<Vec<Note>> {
    let lines: Vec<&str> = content.lines().collect();
    let mut notes = Vec::with_capacity(lines.len() / 2);

    for (pair_idx, pair) in lines.chunks(2).enumerate() {
        let tags_line_no = pair_idx * 2 + 1;
        let (tags_line, note_line) = match pair {
            [tags, note] => (*tags, *note),
            // A lone trailing blank line is just an extra newline at EOF.
            [tail] if tail.trim().is_empty() => break,
            _ => {
                return Err(YadaError::Store(format!(
                    "notes file ends after the tag line at line {}",
                    tags_line_no
                )))
            }
        };

        let note_line_no = tags_line_no + 1;
        let (id, text) = note_line.split_once(':').ok_or_else(|| {
            YadaError::Store(format!(
                "expected `id:text` at line {}, found {:?}",
                note_line_no, note_line
            ))
        })?;
        let id: u32 = id.trim().parse().map_err(|_| {
            YadaError::Store(format!(
                "invalid note id {:?} at line {}",
                id, note_line_no
            ))
        })?;

        let tags = tags_line
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        notes.push(Note {
            id,
            text: text.to_string(),
            tags,
        });
    }

    Ok(notes)
}
