//! # Core Application Logic
//!
//! This module contains the library's business logic.
//! It knows nothing about the console or any other front end.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Library (state)      │
//!                    │  • Command (requests)   │
//!                    │  • update() → Outcome   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │  Console   │
//!                         │  Adapter   │
//!                         │ (menu loop)│
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `Book` and `Library`, all session data in one place
//! - [`action`]: `MenuChoice`, `Command`, `Outcome` and the `update()` reducer
//! - [`error`]: `SessionError`, the failures that can end a session
//! - [`config`]: settings file, env vars and their resolution

pub mod action;
pub mod config;
pub mod error;
pub mod state;

pub use action::{Command, MenuChoice, NewBook, Outcome, update};
pub use error::SessionError;
pub use state::{Book, BookEntry, Library};
