//! Catalog that finds books by scanning every shelved title.

use std::fmt;

use tracing::{debug, trace};

use super::Catalog;
use crate::book::Book;
use crate::config::TitleMatch;

/// A catalog that appends on insert and scans linearly on lookup.
///
/// Insertion is O(1); lookup is O(n). When several books share a title the
/// first one in storage order wins. Title comparison follows the configured
/// [`TitleMatch`] policy, which is [`TitleMatch::Exact`] unless changed with
/// [`with_title_match`](Self::with_title_match).
///
/// # Examples
///
/// ```
/// use bookshelf::{Book, Catalog, LinearSearchCatalog, TitleMatch};
///
/// let books = [Book::new("Moby Dick", Some("Herman Melville"))];
///
/// let exact = LinearSearchCatalog::new(&books);
/// assert!(exact.find("moby dick").is_none());
///
/// let relaxed = LinearSearchCatalog::new(&books).with_title_match(TitleMatch::IgnoreCase);
/// assert!(relaxed.find("moby dick").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LinearSearchCatalog {
    books: Vec<Book>,
    title_match: TitleMatch,
}

impl LinearSearchCatalog {
    /// Create a catalog holding copies of `books`.
    #[must_use]
    pub fn new(books: &[Book]) -> Self {
        Self::from(books.to_vec())
    }

    /// Set the title comparison policy used by lookups.
    #[must_use]
    pub fn with_title_match(mut self, title_match: TitleMatch) -> Self {
        self.title_match = title_match;
        self
    }

    /// The title comparison policy in effect.
    #[must_use]
    pub fn title_match(&self) -> TitleMatch {
        self.title_match
    }
}

impl From<Vec<Book>> for LinearSearchCatalog {
    fn from(books: Vec<Book>) -> Self {
        debug!(books = books.len(), "built linear search catalog");
        LinearSearchCatalog {
            books,
            title_match: TitleMatch::default(),
        }
    }
}

impl Catalog for LinearSearchCatalog {
    fn books(&self) -> &[Book] {
        &self.books
    }

    fn shelve(&mut self, book: Book) {
        trace!(title = book.title(), "shelving at end");
        self.books.push(book);
    }

    fn locate(&self, title: &str) -> Option<usize> {
        match self.title_match {
            TitleMatch::Exact => self.books.iter().position(|book| book.title() == title),
            TitleMatch::IgnoreCase => {
                let wanted = title.to_lowercase();
                self.books
                    .iter()
                    .position(|book| book.title().to_lowercase() == wanted)
            },
        }
    }

    fn remove_at(&mut self, index: usize) -> Book {
        let book = self.books.remove(index);
        trace!(title = book.title(), index, "unshelved");
        book
    }

    fn empty(&mut self) {
        self.books.clear();
    }
}

impl fmt::Display for LinearSearchCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
