//! Line editor for interactive sessions: history, Emacs key bindings and
//! Tab completion of command names.

use super::setup::ReplLine;
use clap::CommandFactory;
use reedline::{
    default_emacs_keybindings, ColumnarMenu, Completer, Emacs, FileBackedHistory, KeyCode,
    KeyModifiers, MenuBuilder, Prompt, PromptEditMode, PromptHistorySearch, Reedline,
    ReedlineEvent, ReedlineMenu, Span, Suggestion,
};
use std::borrow::Cow;
use std::path::Path;

const HISTORY_FILE: &str = "history.txt";
const HISTORY_SIZE: usize = 500;
const MENU_NAME: &str = "completion_menu";

/// Completes the first word of the line against prompt command names and
/// aliases.
#[derive(Clone)]
pub(super) struct CommandCompleter {
    commands: Vec<(String, String)>,
}

impl CommandCompleter {
    pub(super) fn new() -> Self {
        let cmd = ReplLine::command();
        let mut commands: Vec<(String, String)> = cmd
            .get_subcommands()
            .flat_map(|sc| {
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                std::iter::once(sc.get_name())
                    .chain(sc.get_all_aliases())
                    .map(move |name| (name.to_string(), about.clone()))
            })
            .collect();
        commands.push(("good bye".to_string(), "End the session".to_string()));
        commands.sort();
        Self { commands }
    }
}

impl Completer for CommandCompleter {
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let before_cursor = line.get(..pos).unwrap_or(line);
        let start = before_cursor.len() - before_cursor.trim_start().len();
        let word = before_cursor[start..].to_lowercase();
        if word.contains(char::is_whitespace) {
            return Vec::new();
        }

        self.commands
            .iter()
            .filter(|(name, _)| name.starts_with(&word))
            .map(|(name, about)| Suggestion {
                value: name.clone(),
                description: Some(about.clone()),
                style: None,
                extra: None,
                span: Span::new(start, pos),
                append_whitespace: true,
            })
            .collect()
    }
}

struct CommandPrompt;

impl Prompt for CommandPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed("Enter a command: ")
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_history_search_indicator(
        &self,
        _history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        Cow::Borrowed("")
    }
}

pub(super) fn prompt() -> impl Prompt {
    CommandPrompt
}

/// Builds the editor. History lives in the data directory; if the file
/// cannot be opened the session keeps history in memory only.
pub(super) fn line_editor(data_dir: &Path) -> Reedline {
    let mut keybindings = default_emacs_keybindings();
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::Tab,
        ReedlineEvent::UntilFound(vec![
            ReedlineEvent::Menu(MENU_NAME.to_string()),
            ReedlineEvent::MenuNext,
        ]),
    );
    let menu = ColumnarMenu::default().with_name(MENU_NAME);

    let editor = Reedline::create()
        .with_completer(Box::new(CommandCompleter::new()))
        .with_menu(ReedlineMenu::EngineCompleter(Box::new(menu)))
        .with_edit_mode(Box::new(Emacs::new(keybindings)));

    match FileBackedHistory::with_file(HISTORY_SIZE, data_dir.join(HISTORY_FILE)) {
        Ok(history) => editor.with_history(Box::new(history)),
        Err(e) => {
            tracing::warn!(error = %e, "command history is not saved");
            editor
        }
    }
}
