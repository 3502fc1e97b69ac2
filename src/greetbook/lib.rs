//! # Greetbook Architecture
//!
//! Greetbook is a **UI-agnostic contact-book library**. The interactive
//! console bot is just one client of it; the same core would serve a
//! scripted session or any other front end.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session Layer (bot.rs, interface.rs, wired by main.rs)     │
//! │  - Read-parse-dispatch loop, alias lookup, help rendering   │
//! │  - Interface trait is the ONLY I/O boundary                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                               │
//! │  - Pure business logic per user-facing command              │
//! │  - Operates on the book, returns structured CmdResult       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model + Birthday Engine (model.rs, book.rs, birthdays.rs)  │
//! │  - Validated value types, the address book                  │
//! │  - Next-occurrence / weekend-shift / window computation     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                      │
//! │  - Abstract BookStore trait                                  │
//! │  - FileStore (production JSON), InMemoryStore (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From the command layer inward, code takes plain arguments, returns
//! `Result<CmdResult>`, never writes to stdout/stderr, and never reads the
//! system clock — `today` is always an explicit parameter, so the birthday
//! engine tests run against a frozen calendar.
//!
//! ## Module Overview
//!
//! - [`bot`]: the session loop and command table
//! - [`interface`]: console and scripted I/O variants
//! - [`commands`]: business logic for each command
//! - [`birthdays`]: the upcoming-birthday computation
//! - [`book`]: the address book collection
//! - [`model`]: validated value types (`Name`, `Phone`, `Birthday`, `Record`)
//! - [`store`]: persistence abstraction and backends
//! - [`error`]: error types

pub mod birthdays;
pub mod book;
pub mod bot;
pub mod commands;
pub mod error;
pub mod interface;
pub mod model;
pub mod store;
