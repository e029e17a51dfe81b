use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

/// Process arguments. Commands themselves are typed at the prompt.
#[derive(Parser, Debug)]
#[command(name = "yada", bin_name = "yada", version = get_version())]
#[command(about = "Interactive address book and notebook", long_about = None)]
pub struct Cli {
    /// Directory holding contacts, notes and config.json (defaults to $YADA_HOME)
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Log filter, e.g. "debug" or "yada=trace"
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

/// One line typed at the prompt. The first word selects the command.
#[derive(Parser, Debug)]
#[command(
    multicall = true,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
pub struct ReplLine {
    #[command(subcommand)]
    pub command: ReplCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum ReplCommand {
    // --- Contacts ---
    /// Add a contact, or another phone to an existing contact
    Add { name: String, phone: String },

    /// Replace one of a contact's phones
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },

    /// Show a contact's phones
    Phone { name: String },

    /// Remove one phone from a contact
    RemovePhone { name: String, phone: String },

    /// Show every contact
    All,

    /// Remove a contact
    Delete { name: String },

    /// Find the contact that has a phone
    FindPhone { phone: String },

    /// Add an email to a contact
    AddEmail { name: String, email: String },

    /// Replace one of a contact's emails
    EditEmail {
        name: String,
        old_email: String,
        new_email: String,
    },

    /// Add a postal address to a contact
    AddAddress {
        name: String,
        country: String,
        city: String,
        street: String,
        house: String,
        #[arg(default_value = "")]
        apartment: String,
    },

    // --- Birthdays ---
    /// Record a contact's birthday (DD.MM.YYYY)
    #[command(alias = "add-birthday")]
    SetBirthday {
        name: String,
        birthday: String,
        /// Replace a birthday that is already set
        #[arg(short, long)]
        force: bool,
    },

    /// Show a contact's birthday
    ShowBirthday { name: String },

    /// Birthdays coming up in the next days
    Birthdays { days: Option<u32> },

    /// Find contacts born on a date (DD.MM.YYYY)
    FindBirthday { date: String },

    // --- Notes ---
    /// Add a note
    AddNote {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Replace the text of a note
    EditNote {
        id: String,
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Delete a note
    DeleteNote { id: String },

    /// Show every note
    ShowNotes,

    /// Find notes containing some text
    SearchNotes {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        query: Vec<String>,
    },

    /// Find notes with a tag
    SearchTag { tag: String },

    /// Tag a note
    AddTag { id: String, tag: String },

    /// Remove a tag from a note
    DeleteTag { id: String, tag: String },

    // --- General ---
    /// Show or change settings
    Config { key: Option<String>, value: Option<String> },

    /// Say hello
    Hello,

    /// Show this help
    Help,

    /// Leave the assistant
    #[command(alias = "close")]
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Contacts,
    Birthdays,
    Notes,
    General,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Contacts => "Contacts:",
            CommandGroup::Birthdays => "Birthdays:",
            CommandGroup::Notes => "Notes:",
            CommandGroup::General => "General:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "add" | "change" | "phone" | "remove-phone" | "all" | "delete" | "find-phone"
            | "add-email" | "edit-email" | "add-address" => Some(CommandGroup::Contacts),
            "set-birthday" | "show-birthday" | "birthdays" | "find-birthday" => {
                Some(CommandGroup::Birthdays)
            }
            "add-note" | "edit-note" | "delete-note" | "show-notes" | "search-notes"
            | "search-tag" | "add-tag" | "delete-tag" => Some(CommandGroup::Notes),
            "config" | "hello" | "help" | "exit" => Some(CommandGroup::General),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Contacts,
            CommandGroup::Birthdays,
            CommandGroup::Notes,
            CommandGroup::General,
        ]
    }
}

/// True when `name` (already lowercased) is a command or one of its aliases.
pub fn is_known_command(name: &str) -> bool {
    ReplLine::command().find_subcommand(name).is_some()
}

/// Grouped help listing every prompt command with its arguments.
pub fn get_grouped_help() -> String {
    let cmd = ReplLine::command();
    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    let mut output = String::from("Commands (quote arguments that contain spaces):\n");
    for group in CommandGroup::all() {
        let entries: Vec<_> = subcommands
            .iter()
            .filter(|sc| CommandGroup::for_command(sc.get_name()) == Some(*group))
            .map(|sc| {
                let usage = std::iter::once(sc.get_name().to_string())
                    .chain(sc.get_positionals().map(|arg| {
                        let id = arg.get_id().as_str().to_uppercase();
                        let many = matches!(arg.get_num_args(), Some(range) if range.max_values() > 1);
                        let id = if many { format!("{}...", id) } else { id };
                        if arg.is_required_set() {
                            format!("<{}>", id)
                        } else {
                            format!("[{}]", id)
                        }
                    }))
                    .collect::<Vec<_>>()
                    .join(" ");
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                (usage, about)
            })
            .collect();

        if entries.is_empty() {
            continue;
        }
        output.push('\n');
        output.push_str(group.heading());
        output.push('\n');
        for (usage, about) in entries {
            output.push_str(&format!("  {:<52} {}\n", usage, about));
        }
    }
    output.push_str("\n  good bye / close / exit ends the session.\n");
    output
}
