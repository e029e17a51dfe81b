//! # Yada Architecture
//!
//! Yada ("yet another digital assistant") keeps an address book and a tagged
//! notebook. The core is a **UI-agnostic library**; the interactive shell in
//! `cli/` is only one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Process arguments, REPL loop, line tokenizing            │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the loaded address book and notebook                │
//! │  - Normalizes inputs (note ids, default windows)            │
//! │  - Saves a full snapshot after each successful mutation     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic over AddressBook / Notebook               │
//! │  - Returns CmdResult values, never prints                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain + Storage (fields, model, book, notebook, store/)   │
//! │  - Validated field types and the two collections            │
//! │  - DataStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Validation at the edge of the model
//!
//! Phones, birthdays and emails only exist as values that passed their
//! validator ([`fields::Phone`], [`fields::Birthday`], [`fields::Email`]).
//! A record never holds raw strings for them, and every mutation that takes
//! user input validates before it touches the record. A failing operation
//! leaves the record, the book and the stored files unchanged.
//!
//! ## No I/O in the core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. User-facing text travels back as [`commands::CmdMessage`]s
//! and errors as [`error::YadaError`]; the CLI decides how to show them.
//!
//! ## Testing Strategy
//!
//! 1. **Domain and commands**: unit tests next to the code, on plain values.
//! 2. **API**: dispatch and persistence tests against `InMemoryStore`
//!    (a failed command must not save).
//! 3. **Store**: `FileStore` tests in temporary directories.
//! 4. **CLI**: end-to-end tests in `tests/` that drive the binary's stdin.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command family
//! - [`fields`]: Phone, birthday, email, address and tag validation
//! - [`model`]: `Record` (a contact) and `Note`
//! - [`book`]: `AddressBook` and upcoming-birthday queries
//! - [`notebook`]: `Notebook` with id assignment and searches
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`logging`]: tracing subscriber setup
//! - [`error`]: Error types
//! - `cli`: Argument parsing, the REPL and printing for the binary (not part of the lib API)

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod logging;
pub mod model;
pub mod notebook;
pub mod store;
