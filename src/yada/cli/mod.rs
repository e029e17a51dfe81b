//! # CLI Behavior
//!
//! `yada` starts an interactive session: it greets, then reads one command
//! per line until `exit`, `close`, `good bye` or end of input.
//!
//! For the overall architecture, see the library documentation.
//!
//! ## Prompt lines
//!
//! - The first word picks the command and is case-insensitive:
//!   `ADD Ann 0501234567` works like `add Ann 0501234567`.
//! - Quote arguments that contain spaces: `add "John Smith" 0501234567`.
//! - Free text (note text, searches) may also be typed unquoted:
//!   `add-note buy milk and eggs`.
//! - A mistake never ends the session. Validation and lookup errors are
//!   printed in red on stderr and the prompt comes back.
//!
//! ## Terminal vs. piped input
//!
//! On a terminal the prompt is a line editor: history (kept in
//! `history.txt` in the data directory), Emacs key bindings and Tab
//! completion of command names. Ctrl-C clears the line and Ctrl-D ends the
//! session. Piped input is read line by line with the same prompt text.
//!
//! ## Data directory
//!
//! `--data-dir`, else `$YADA_HOME`, else the platform data directory. It
//! holds `config.json`, the contacts file and the notes file.
//!
//! ## Module Structure
//!
//! - `commands`: the session loop and per-command dispatch
//! - `editor`: the interactive line editor and command completion
//! - `line`: prompt-line tokenizing
//! - `print`: output formatting (tables, notes, colors)
//! - `setup`: clap definitions for process arguments and prompt commands, help text

mod commands;
mod editor;
mod line;
mod print;
pub mod setup;

pub use commands::run;
