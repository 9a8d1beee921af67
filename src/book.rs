//! The [`Book`] value type shelved by every catalog.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A book identified by its title, with an optional author.
///
/// Catalogs compare and order books by title only; the author is carried
/// along as data and is never used as a search key.
///
/// # Examples
///
/// ```
/// use bookshelf::Book;
///
/// let book = Book::new("Moby Dick", Some("Herman Melville"));
/// assert_eq!(book.title(), "Moby Dick");
/// assert_eq!(book.to_string(), "\"Moby Dick\" by: \"Herman Melville\"");
///
/// let anonymous = Book::new("Beowulf", None::<String>);
/// assert_eq!(anonymous.to_string(), "\"Beowulf\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    title: String,
    author: Option<String>,
}

impl Book {
    /// Create a book with the given title and optional author.
    pub fn new(title: impl Into<String>, author: Option<impl Into<String>>) -> Self {
        Book {
            title: title.into(),
            author: author.map(Into::into),
        }
    }

    /// Create a book that has no recorded author.
    pub fn without_author(title: impl Into<String>) -> Self {
        Book {
            title: title.into(),
            author: None,
        }
    }

    /// The title of the book.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The author of the book, if one is recorded.
    #[must_use]
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.author {
            Some(author) => write!(f, "\"{}\" by: \"{}\"", self.title, author),
            None => write!(f, "\"{}\"", self.title),
        }
    }
}
