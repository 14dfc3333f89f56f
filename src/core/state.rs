//! # Library State
//!
//! The in-memory library: every book the user has entered this session.
//!
//! ```text
//! Library
//! └── entries: Vec<BookEntry>   // first-insertion order, unique titles
//!     ├── title: String         // case-sensitive key
//!     └── book: Book
//!         ├── author: String
//!         ├── year: i64
//!         ├── genre: String
//!         └── read: bool        // only field mutated after creation
//! ```
//!
//! Collections stay small, so lookups are a linear scan over `entries`.
//! State changes only happen through `update(library, command)` in action.rs.

/// Display label for a book that has been read.
pub const STATUS_READ: &str = "Lu";
/// Display label for a book that has not been read yet.
pub const STATUS_UNREAD: &str = "Non lu";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub author: String,
    pub year: i64,
    pub genre: String,
    pub read: bool,
}

impl Book {
    /// A freshly added book is always unread.
    pub fn new(author: impl Into<String>, year: i64, genre: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            year,
            genre: genre.into(),
            read: false,
        }
    }

    pub fn status(&self) -> &'static str {
        if self.read { STATUS_READ } else { STATUS_UNREAD }
    }

    fn has_genre(&self, genre: &str) -> bool {
        self.genre.to_lowercase() == genre.to_lowercase()
    }
}

/// A title together with its record, as stored and listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookEntry {
    pub title: String,
    pub book: Book,
}

#[derive(Debug, Default, Clone)]
pub struct Library {
    entries: Vec<BookEntry>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[BookEntry] {
        &self.entries
    }

    pub fn get(&self, title: &str) -> Option<&Book> {
        self.entries
            .iter()
            .find(|entry| entry.title == title)
            .map(|entry| &entry.book)
    }

    fn get_mut(&mut self, title: &str) -> Option<&mut Book> {
        self.entries
            .iter_mut()
            .find(|entry| entry.title == title)
            .map(|entry| &mut entry.book)
    }

    /// Inserts `book` under `title`, replacing any existing record wholesale.
    /// A replaced title keeps its original position. Returns the old record.
    pub fn insert(&mut self, title: String, book: Book) -> Option<Book> {
        match self.get_mut(&title) {
            Some(existing) => Some(std::mem::replace(existing, book)),
            None => {
                self.entries.push(BookEntry { title, book });
                None
            }
        }
    }

    /// Sets the read flag on `title`. Returns false if no such title exists.
    pub fn mark_read(&mut self, title: &str) -> bool {
        match self.get_mut(title) {
            Some(book) => {
                book.read = true;
                true
            }
            None => false,
        }
    }

    /// Titles whose genre equals `genre`, ignoring case, in library order.
    pub fn titles_in_genre(&self, genre: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| entry.book.has_genre(genre))
            .map(|entry| entry.title.clone())
            .collect()
    }
}
