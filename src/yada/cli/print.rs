use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use yada::api::{CmdMessage, MessageLevel};
use yada::book::UpcomingBirthday;
use yada::config::YadaConfig;
use yada::error::YadaError;
use yada::model::{Note, Record};

const MAX_CELL_WIDTH: usize = 40;
const HEADERS: [&str; 5] = ["Name", "Phones", "Birthday", "Emails", "Addresses"];

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_error(err: &YadaError) {
    eprintln!("{}", err.to_string().red());
}

pub(super) fn print_phones(records: &[Record]) {
    for record in records {
        let phones: Vec<_> = record.phones().iter().map(|p| p.as_str()).collect();
        if phones.is_empty() {
            println!("{} has no phones", record.name());
        } else {
            println!("{}: {}", record.name().bold(), phones.join("; "));
        }
    }
}

fn record_cells(record: &Record) -> [String; 5] {
    let join = |items: Vec<String>| items.join("; ");
    [
        record.name().to_string(),
        join(record.phones().iter().map(|p| p.to_string()).collect()),
        record.birthday_text(),
        join(record.emails().iter().map(|e| e.to_string()).collect()),
        join(record.addresses().iter().map(|a| a.to_string()).collect()),
    ]
}

/// Renders records as an aligned table. Columns with nothing in them are
/// left out.
pub(super) fn format_records_table(records: &[Record]) -> String {
    let rows: Vec<[String; 5]> = records
        .iter()
        .map(|r| record_cells(r).map(|cell| truncate_to_width(&cell, MAX_CELL_WIDTH)))
        .collect();

    // Name and birthday always show; the list columns only when used.
    let columns: Vec<usize> = (0..HEADERS.len())
        .filter(|&col| col == 0 || col == 2 || rows.iter().any(|row| !row[col].is_empty()))
        .collect();
    let widths: Vec<usize> = columns
        .iter()
        .map(|&col| {
            rows.iter()
                .map(|row| row[col].width())
                .chain(std::iter::once(HEADERS[col].width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let render_row = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| pad_to_width(cell, *width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    out.push_str(&render_row(columns.iter().map(|&c| HEADERS[c]).collect()));
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');
    for row in &rows {
        out.push_str(&render_row(columns.iter().map(|&c| row[c].as_str()).collect()));
        out.push('\n');
    }
    out
}

pub(super) fn print_records(records: &[Record]) {
    if records.is_empty() {
        return;
    }
    print!("{}", format_records_table(records));
}

pub(super) fn print_notes(notes: &[Note]) {
    for note in notes {
        let tags = if note.tags.is_empty() {
            "-".to_string()
        } else {
            note.tags.join(", ")
        };
        println!("{} {}", "Tags:".dimmed(), tags.cyan());
        println!("{}:{}", note.id.to_string().yellow(), note.text);
    }
}

/// Groups upcoming birthdays by the weekday they are celebrated on, in
/// date order.
pub(super) fn format_upcoming(upcoming: &[UpcomingBirthday]) -> Vec<(String, Vec<String>)> {
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();
    let mut last_day = None;
    for entry in upcoming {
        if last_day == Some(entry.congratulate_on) {
            if let Some((_, names)) = groups.last_mut() {
                names.push(entry.name.clone());
            }
            continue;
        }
        last_day = Some(entry.congratulate_on);
        let heading = entry.congratulate_on.format("%A %d.%m").to_string();
        groups.push((heading, vec![entry.name.clone()]));
    }
    groups
}

pub(super) fn print_upcoming(upcoming: &[UpcomingBirthday]) {
    for (day, names) in format_upcoming(upcoming) {
        println!("{}: {}", day.bold(), names.join(", "));
    }
}

pub(super) fn print_config(config: &YadaConfig) {
    println!("contacts-file = {}", config.contacts_file);
    println!("notes-file = {}", config.notes_file);
    println!("birthday-window = {}", config.birthday_window_days);
}

fn pad_to_width(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
