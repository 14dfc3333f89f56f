//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::action::NewBook;
use crate::core::config::ResolvedConfig;
use crate::core::state::{Book, Library};
use crate::YearPolicy;

/// The book used throughout the examples: Dune, Herbert, 1965, Sci-Fi.
pub fn dune() -> NewBook {
    NewBook {
        title: "Dune".to_string(),
        author: "Herbert".to_string(),
        year: 1965,
        genre: "Sci-Fi".to_string(),
    }
}

/// Builds a library from `(title, author, year, genre)` tuples, all unread.
pub fn library_with(books: &[(&str, &str, i64, &str)]) -> Library {
    let mut library = Library::new();
    for (title, author, year, genre) in books {
        library.insert(title.to_string(), Book::new(*author, *year, *genre));
    }
    library
}

/// Creates a config with the default rule width and the given year policy.
pub fn test_config(year_policy: YearPolicy) -> ResolvedConfig {
    ResolvedConfig {
        year_policy,
        ..ResolvedConfig::default()
    }
}
