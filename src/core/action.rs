//! # Actions
//!
//! Everything the user can ask for becomes a `Command`.
//! Picks "1" and types a title, author, year and genre? That's `Command::AddBook(new_book)`.
//!
//! The `update()` function takes the library and a command, applies it,
//! and returns an `Outcome` describing what happened. No I/O here: the
//! console adapter collects input before and renders the outcome after.
//!
//! ```text
//! Library + Command  →  update()  →  Outcome
//! ```
//!
//! Menu input is parsed into a `MenuChoice` first, so unrecognized choices
//! are a variant to match on rather than a silent string fallthrough.

use std::num::IntErrorKind;

use log::debug;

use crate::core::error::SessionError;
use crate::core::state::{Book, BookEntry, Library};

/// What the user picked from the main menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook,
    ListBooks,
    MarkRead,
    SearchGenre,
    Quit,
    /// Anything other than "1" to "5", kept for logging.
    Invalid(String),
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => MenuChoice::AddBook,
            "2" => MenuChoice::ListBooks,
            "3" => MenuChoice::MarkRead,
            "4" => MenuChoice::SearchGenre,
            "5" => MenuChoice::Quit,
            other => MenuChoice::Invalid(other.to_string()),
        }
    }
}

/// The fields collected for an add-book command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i64,
    pub genre: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddBook(NewBook),
    ListBooks,
    MarkRead { title: String },
    SearchGenre { genre: String },
    Quit,
}

/// The result of applying a command. None of these are errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added { title: String },
    Listing(Vec<BookEntry>),
    Empty,
    MarkedRead { title: String },
    NotFound { title: String },
    GenreMatches { genre: String, titles: Vec<String> },
    NoGenreMatch { genre: String },
    Farewell,
}

/// Parses a publication year. Surrounding whitespace is ignored.
///
/// Any year that fits in an `i64` is accepted; larger whole numbers are
/// `YearOutOfRange` rather than `InvalidYear`.
pub fn parse_year(input: &str) -> Result<i64, SessionError> {
    input.trim().parse::<i64>().map_err(|source| match source.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => SessionError::YearOutOfRange {
            input: input.to_string(),
        },
        _ => SessionError::InvalidYear {
            input: input.to_string(),
            source,
        },
    })
}

/// Applies `command` to `library`.
pub fn update(library: &mut Library, command: Command) -> Outcome {
    debug!("Applying command: {:?}", command);
    match command {
        Command::AddBook(new_book) => {
            let NewBook {
                title,
                author,
                year,
                genre,
            } = new_book;
            if library
                .insert(title.clone(), Book::new(author, year, genre))
                .is_some()
            {
                debug!("Overwrote existing record for '{}'", title);
            }
            Outcome::Added { title }
        }
        Command::ListBooks => {
            if library.is_empty() {
                Outcome::Empty
            } else {
                Outcome::Listing(library.entries().to_vec())
            }
        }
        Command::MarkRead { title } => {
            if library.mark_read(&title) {
                Outcome::MarkedRead { title }
            } else {
                Outcome::NotFound { title }
            }
        }
        Command::SearchGenre { genre } => {
            let titles = library.titles_in_genre(&genre);
            if titles.is_empty() {
                Outcome::NoGenreMatch { genre }
            } else {
                Outcome::GenreMatches { genre, titles }
            }
        }
        Command::Quit => Outcome::Farewell,
    }
}
