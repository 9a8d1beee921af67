//! Catalog kept sorted by a title key and searched with binary search.

use std::fmt;

use tracing::{debug, trace};

use super::Catalog;
use crate::book::Book;
use crate::search::lower_bound;
use crate::title_keys::{basic_key, KeyFn};

/// A catalog whose books are always sorted ascending by `key(title)`.
///
/// Lookups binary-search for the first book whose key is not below the
/// target's key, then walk forward through the run of equal keys comparing
/// full titles, so colliding titles stay independently findable. Lookups are
/// O(log n) for well-distributed keys, bounded by the longest collision run
/// otherwise. Insertion finds its position the same way but shifts the tail
/// of the storage, so it is O(n).
///
/// Titles are compared case-sensitively regardless of the key function.
///
/// # Examples
///
/// ```
/// use bookshelf::{Book, Catalog, BinarySearchCatalog};
/// use bookshelf::title_keys::positional_key;
///
/// let books = [Book::without_author("Listen"), Book::without_author("Silent")];
///
/// // "Listen" and "Silent" share a basic key; both remain findable.
/// let catalog = BinarySearchCatalog::new(&books);
/// assert!(catalog.find("Listen").is_some());
/// assert!(catalog.find("Silent").is_some());
///
/// let catalog = BinarySearchCatalog::with_key(&books, positional_key);
/// assert!(catalog.find("Silent").is_some());
/// ```
#[derive(Clone)]
pub struct BinarySearchCatalog {
    books: Vec<Book>,
    key: KeyFn,
}

impl BinarySearchCatalog {
    /// Create a catalog holding copies of `books`, keyed by [`basic_key`].
    #[must_use]
    pub fn new(books: &[Book]) -> Self {
        Self::with_key(books, basic_key)
    }

    /// Create a catalog holding copies of `books`, keyed by `key`.
    #[must_use]
    pub fn with_key(books: &[Book], key: KeyFn) -> Self {
        Self::from_vec_with_key(books.to_vec(), key)
    }

    /// Take ownership of `books` and sort them by `key`.
    #[must_use]
    pub fn from_vec_with_key(mut books: Vec<Book>, key: KeyFn) -> Self {
        books.sort_by_cached_key(|book| key(book.title()));
        debug!(books = books.len(), "built binary search catalog");
        BinarySearchCatalog { books, key }
    }

    /// The key function the catalog is sorted by.
    #[must_use]
    pub fn key_fn(&self) -> KeyFn {
        self.key
    }

    fn key_of(&self, book: &Book) -> u64 {
        (self.key)(book.title())
    }
}

impl Default for BinarySearchCatalog {
    fn default() -> Self {
        Self::from_vec_with_key(Vec::new(), basic_key)
    }
}

impl From<Vec<Book>> for BinarySearchCatalog {
    fn from(books: Vec<Book>) -> Self {
        Self::from_vec_with_key(books, basic_key)
    }
}

impl Catalog for BinarySearchCatalog {
    fn books(&self) -> &[Book] {
        &self.books
    }

    fn shelve(&mut self, book: Book) {
        let target = self.key_of(&book);
        // Lands before any books already carrying the same key.
        match lower_bound(&self.books, &target, |b| self.key_of(b)) {
            Some(index) => {
                trace!(title = book.title(), index, key = target, "shelving");
                self.books.insert(index, book);
            },
            None => {
                trace!(title = book.title(), key = target, "shelving at end");
                self.books.push(book);
            },
        }
    }

    fn locate(&self, title: &str) -> Option<usize> {
        let target = (self.key)(title);
        let first = lower_bound(&self.books, &target, |b| self.key_of(b))?;

        self.books[first..]
            .iter()
            .take_while(|book| self.key_of(book) == target)
            .position(|book| book.title() == title)
            .map(|offset| first + offset)
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

impl fmt::Debug for BinarySearchCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchCatalog")
            .field("books", &self.books)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for BinarySearchCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
