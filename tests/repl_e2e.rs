#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn yada_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("yada"));
    cmd.env("YADA_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("YADA_LOG");
    cmd
}

fn session(home: &Path, lines: &[&str]) -> assert_cmd::assert::Assert {
    let mut input = lines.join("\n");
    input.push('\n');
    yada_cmd(home).write_stdin(input).assert().success()
}

#[test]
fn test_greets_and_says_goodbye() {
    let temp = TempDir::new().unwrap();
    session(temp.path(), &["hello", "exit"])
        .stdout(predicate::str::contains("Welcome to the assistant bot!"))
        .stdout(predicate::str::contains("How can I help you?"))
        .stdout(predicate::str::contains("Good bye!"));
}

#[test]
fn test_every_farewell_ends_the_session() {
    let temp = TempDir::new().unwrap();
    for farewell in ["exit", "close", "Good bye", "EXIT"] {
        session(temp.path(), &[farewell, "hello"])
            .stdout(predicate::str::contains("How can I help you?").not());
    }
}

#[test]
fn test_end_of_input_ends_the_session() {
    let temp = TempDir::new().unwrap();
    yada_cmd(temp.path())
        .write_stdin("hello\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Good bye!"));
}

#[test]
fn test_contacts_persist_between_sessions() {
    let temp = TempDir::new().unwrap();
    session(
        temp.path(),
        &[
            r#"add "John Smith" 0501234567"#,
            "add 'john smith' +380671112233",
            "set-birthday 'John Smith' 15.05.1990",
            "exit",
        ],
    )
    .stdout(predicate::str::contains("Contact added: John Smith"));

    assert!(temp.path().join("contacts.json").exists());

    session(temp.path(), &["phone 'JOHN SMITH'", "all", "exit"])
        .stdout(predicate::str::contains("John Smith: 0501234567; 0671112233"))
        .stdout(predicate::str::contains("15.05.1990"));
}

#[test]
fn test_errors_are_reported_and_the_session_continues() {
    let temp = TempDir::new().unwrap();
    session(
        temp.path(),
        &[
            "add Ann 12345",
            "change Ann 0501234567 0509999999",
            "add Ann 0501234567",
            "set-birthday Ann 31.02.2020",
            "fly away",
            "add Ann",
            "phone ann",
            "exit",
        ],
    )
    .stderr(predicate::str::contains("Phone number must be 10 digits"))
    .stderr(predicate::str::contains("Contact not found: Ann"))
    .stderr(predicate::str::contains("Birthday date must be in the format DD.MM.YYYY"))
    .stderr(predicate::str::contains("Unknown command 'fly'"))
    .stdout(predicate::str::contains("Ann: 0501234567"));
}

#[test]
fn test_birthday_conflict_needs_force() {
    let temp = TempDir::new().unwrap();
    session(
        temp.path(),
        &[
            "add Ann 0501234567",
            "set-birthday Ann 01.01.2000",
            "set-birthday Ann 02.02.2002",
            "show-birthday ann",
            "set-birthday Ann 02.02.2002 --force",
            "show-birthday ann",
            "exit",
        ],
    )
    .stderr(predicate::str::contains("use --force to overwrite"))
    .stdout(predicate::str::contains("Ann's birthday is on 01.01.2000"))
    .stdout(predicate::str::contains("Ann's birthday is on 02.02.2002"));
}

#[test]
fn test_notes_workflow() {
    let temp = TempDir::new().unwrap();
    session(
        temp.path(),
        &[
            "add-note Call mom on Sunday",
            "add-note buy milk",
            "add-tag 1 family",
            "search-tag FAMILY",
            "search-notes MOM",
            "delete-note 2",
            "add-note buy eggs",
            "exit",
        ],
    )
    .stdout(predicate::str::contains("Note was added under the id: 1"))
    .stdout(predicate::str::contains("1:Call mom on Sunday"))
    .stdout(predicate::str::contains("Note was added under the id: 2").count(2));

    let notes = fs::read_to_string(temp.path().join("notes.txt")).unwrap();
    assert_eq!(notes, "family\n1:Call mom on Sunday\n\n2:buy eggs\n");

    session(temp.path(), &["search-notes dad", "edit-note 9 x", "exit"])
        .stdout(predicate::str::contains(
            "There are no notes matching specified criteria.",
        ))
        .stderr(predicate::str::contains("Note with id 9 not found"));
}

#[test]
fn test_config_changes_the_notes_file() {
    let temp = TempDir::new().unwrap();
    session(temp.path(), &["config notes-file memo.txt", "exit"])
        .stdout(predicate::str::contains("notes-file set to memo.txt"));

    session(temp.path(), &["add-note remember", "exit"]);
    assert!(temp.path().join("memo.txt").exists());
    assert!(!temp.path().join("notes.txt").exists());
}

#[test]
fn test_corrupt_contacts_file_fails_at_startup() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("contacts.json"), "{ not json").unwrap();
    yada_cmd(temp.path())
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_data_dir_flag_overrides_environment() {
    let temp = TempDir::new().unwrap();
    let other = temp.path().join("other");
    yada_cmd(temp.path())
        .arg("--data-dir")
        .arg(&other)
        .write_stdin("add Ann 0501234567\nexit\n")
        .assert()
        .success();
    assert!(other.join("contacts.json").exists());
    assert!(!temp.path().join("contacts.json").exists());
}
