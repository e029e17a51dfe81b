//! # CLI Layer
//!
//! This module is **one possible UI client** for yada, not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Handles argument and prompt-line parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Startup**: parse process arguments, set up logging, resolve the data
//!    directory and build the `YadaApi`
//! 2. **Loop**: read a line (line editor on a terminal, plain reads when
//!    piped), tokenize it, parse it with the `ReplLine` grammar
//! 3. **API Dispatch**: call the matching `YadaApi` method
//! 4. **Output Formatting**: print the `CmdResult` (tables, notes, messages)
//! 5. **Error Handling**: print core errors in red on stderr and keep going
//!
//! Only failures before the loop starts (unreadable data files, no data
//! directory) or a broken stdin end the process with an error.

use super::editor::{line_editor, prompt};
use super::line::{is_farewell, tokenize};
use super::print::{
    print_config, print_error, print_messages, print_notes, print_phones, print_records,
    print_upcoming,
};
use super::setup::{get_grouped_help, is_known_command, Cli, ReplCommand, ReplLine};
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use reedline::Signal;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use yada::api::{ConfigAction, YadaApi};
use yada::config::YadaConfig;
use yada::error::{Result, YadaError};
use yada::fields::Address;
use yada::logging::init_tracing;
use yada::store::fs::FileStore;

const DATA_DIR_ENV: &str = "YADA_HOME";

struct AppContext {
    api: YadaApi<FileStore>,
    data_dir: PathBuf,
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose, cli.log_level.as_deref()) {
        eprintln!("Could not set up logging: {}", e);
    }

    let mut ctx = init_context(&cli)?;
    println!("Welcome to the assistant bot!");
    if io::stdin().is_terminal() {
        interactive(&mut ctx)?;
    } else {
        piped(&mut ctx, io::stdin().lock())?;
    }
    println!("Good bye!");
    Ok(())
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    let config = YadaConfig::load(&data_dir)?;
    let store = FileStore::new(data_dir.clone()).with_config(&config);
    tracing::info!(data_dir = %data_dir.display(), "starting");

    Ok(AppContext {
        api: YadaApi::new(store, data_dir.clone(), &config)?,
        data_dir,
    })
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "yada", "yada")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            YadaError::Api(format!(
                "Could not determine a data directory; pass --data-dir or set {}",
                DATA_DIR_ENV
            ))
        })
}

fn interactive(ctx: &mut AppContext) -> Result<()> {
    let mut editor = line_editor(&ctx.data_dir);
    let prompt = prompt();
    loop {
        match editor.read_line(&prompt)? {
            Signal::Success(line) => {
                if handle_line(ctx, &line) == Flow::Exit {
                    break;
                }
            }
            Signal::CtrlC => continue,
            Signal::CtrlD => break,
        }
    }
    Ok(())
}

fn piped(ctx: &mut AppContext, mut input: impl BufRead) -> Result<()> {
    let mut line = String::new();
    loop {
        print!("Enter a command: ");
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            println!();
            break;
        }
        if handle_line(ctx, &line) == Flow::Exit {
            break;
        }
    }
    Ok(())
}

fn handle_line(ctx: &mut AppContext, line: &str) -> Flow {
    let words = match tokenize(line) {
        Ok(words) => words,
        Err(e) => {
            print_error(&e);
            return Flow::Continue;
        }
    };
    let Some(command_word) = words.first() else {
        return Flow::Continue;
    };
    if is_farewell(&words) {
        return Flow::Exit;
    }
    if !is_known_command(command_word) {
        eprintln!(
            "{}",
            format!(
                "Unknown command '{}'. Type 'help' to see the available commands.",
                command_word
            )
            .yellow()
        );
        return Flow::Continue;
    }

    let command = match ReplLine::try_parse_from(&words) {
        Ok(parsed) => parsed.command,
        Err(e) => {
            eprint!("{}", e.render());
            return Flow::Continue;
        }
    };
    tracing::debug!(?command, "dispatching");

    match dispatch(ctx, command) {
        Ok(flow) => flow,
        Err(e) => {
            tracing::debug!(kind = ?e.kind(), "command failed");
            print_error(&e);
            Flow::Continue
        }
    }
}

fn dispatch(ctx: &mut AppContext, command: ReplCommand) -> Result<Flow> {
    let api = &mut ctx.api;
    match command {
        ReplCommand::Add { name, phone } => {
            print_messages(&api.add_contact(&name, &phone)?.messages);
        }
        ReplCommand::Change {
            name,
            old_phone,
            new_phone,
        } => {
            print_messages(&api.change_phone(&name, &old_phone, &new_phone)?.messages);
        }
        ReplCommand::Phone { name } => {
            print_phones(&api.show_contact(&name)?.listed_records);
        }
        ReplCommand::RemovePhone { name, phone } => {
            print_messages(&api.remove_phone(&name, &phone)?.messages);
        }
        ReplCommand::All => {
            let result = api.all_contacts()?;
            print_records(&result.listed_records);
            print_messages(&result.messages);
        }
        ReplCommand::Delete { name } => {
            print_messages(&api.delete_contact(&name)?.messages);
        }
        ReplCommand::FindPhone { phone } => {
            let result = api.find_by_phone(&phone)?;
            print_records(&result.listed_records);
            print_messages(&result.messages);
        }
        ReplCommand::AddEmail { name, email } => {
            print_messages(&api.add_email(&name, &email)?.messages);
        }
        ReplCommand::EditEmail {
            name,
            old_email,
            new_email,
        } => {
            print_messages(&api.edit_email(&name, &old_email, &new_email)?.messages);
        }
        ReplCommand::AddAddress {
            name,
            country,
            city,
            street,
            house,
            apartment,
        } => {
            let address = Address::new(country, city, street, house, apartment);
            print_messages(&api.add_address(&name, address)?.messages);
        }
        ReplCommand::SetBirthday {
            name,
            birthday,
            force,
        } => {
            print_messages(&api.set_birthday(&name, &birthday, force)?.messages);
        }
        ReplCommand::ShowBirthday { name } => {
            print_messages(&api.show_birthday(&name)?.messages);
        }
        ReplCommand::Birthdays { days } => {
            let result = api.upcoming_birthdays(days)?;
            print_upcoming(&result.upcoming_birthdays);
            print_messages(&result.messages);
        }
        ReplCommand::FindBirthday { date } => {
            let result = api.find_by_birthday(&date)?;
            print_records(&result.listed_records);
            print_messages(&result.messages);
        }
        ReplCommand::AddNote { text } => {
            print_messages(&api.add_note(&text.join(" "))?.messages);
        }
        ReplCommand::EditNote { id, text } => {
            print_messages(&api.edit_note(&id, &text.join(" "))?.messages);
        }
        ReplCommand::DeleteNote { id } => {
            print_messages(&api.delete_note(&id)?.messages);
        }
        ReplCommand::ShowNotes => {
            let result = api.list_notes()?;
            print_notes(&result.listed_notes);
            print_messages(&result.messages);
        }
        ReplCommand::SearchNotes { query } => {
            let result = api.search_notes(&query.join(" "))?;
            print_notes(&result.listed_notes);
            print_messages(&result.messages);
        }
        ReplCommand::SearchTag { tag } => {
            let result = api.search_tag(&tag)?;
            print_notes(&result.listed_notes);
            print_messages(&result.messages);
        }
        ReplCommand::AddTag { id, tag } => {
            print_messages(&api.add_tag(&id, &tag)?.messages);
        }
        ReplCommand::DeleteTag { id, tag } => {
            print_messages(&api.delete_tag(&id, &tag)?.messages);
        }
        ReplCommand::Config { key, value } => {
            let action = match (key, value) {
                (None, _) => ConfigAction::ShowAll,
                (Some(k), None) => ConfigAction::ShowKey(k),
                (Some(k), Some(v)) => ConfigAction::Set(k, v),
            };
            let result = api.config(action)?;
            if let Some(config) = result.config.as_ref().filter(|_| result.messages.is_empty()) {
                print_config(config);
            }
            print_messages(&result.messages);
        }
        ReplCommand::Hello => println!("How can I help you?"),
        ReplCommand::Help => print!("{}", get_grouped_help()),
        ReplCommand::Exit => return Ok(Flow::Exit),
    }
    Ok(Flow::Continue)
}
