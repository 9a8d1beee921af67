//! Catalog that resolves titles through a title-to-position hash index.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, trace};

use super::Catalog;
use crate::book::Book;

/// A catalog that appends on insert and keeps a `title -> position` map.
///
/// Lookups are a single map probe. Every structural change updates the map
/// in the same call, so after any mutation each mapped title points at a
/// stored book with exactly that title.
///
/// Titles are compared case-sensitively. When several books share a title,
/// the map points at the most recently shelved one and older copies are not
/// reachable through [`find`](Catalog::find) until the newer ones are
/// unshelved. Use [`LinearSearchCatalog`](super::LinearSearchCatalog) when
/// duplicates must be resolved in storage order.
///
/// Removal shifts every book stored after the removed one, so
/// [`unshelve`](Catalog::unshelve) costs O(n) to reindex them.
///
/// # Examples
///
/// ```
/// use bookshelf::{Book, Catalog, HashMapCatalog};
///
/// let mut catalog = HashMapCatalog::new(&[
///     Book::without_author("Dune"),
///     Book::without_author("Emma"),
///     Book::without_author("Ulysses"),
/// ]);
///
/// catalog.unshelve("Dune");
/// assert_eq!(catalog.locate("Emma"), Some(0));
/// assert_eq!(catalog.locate("Ulysses"), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HashMapCatalog {
    books: Vec<Book>,
    index: HashMap<String, usize>,
}

impl HashMapCatalog {
    /// Create a catalog holding copies of `books`.
    #[must_use]
    pub fn new(books: &[Book]) -> Self {
        Self::from(books.to_vec())
    }

    /// Number of distinct titles reachable through the index.
    #[must_use]
    pub fn indexed_titles(&self) -> usize {
        self.index.len()
    }

    /// Point every title stored at or after `from` at its last occurrence.
    ///
    /// Walking forward means a later duplicate overwrites an earlier one.
    fn reindex_from(&mut self, from: usize) {
        for (position, book) in self.books.iter().enumerate().skip(from) {
            if let Some(slot) = self.index.get_mut(book.title()) {
                *slot = position;
            } else {
                self.index.insert(book.title().to_string(), position);
            }
        }
    }
}

impl From<Vec<Book>> for HashMapCatalog {
    fn from(books: Vec<Book>) -> Self {
        let mut catalog = HashMapCatalog {
            index: HashMap::with_capacity(books.len()),
            books,
        };
        catalog.reindex_from(0);
        debug!(
            books = catalog.books.len(),
            titles = catalog.index.len(),
            "built hash map catalog"
        );
        catalog
    }
}

impl Catalog for HashMapCatalog {
    fn books(&self) -> &[Book] {
        &self.books
    }

    fn shelve(&mut self, book: Book) {
        let position = self.books.len();
        trace!(title = book.title(), position, "shelving at end");
        self.index.insert(book.title().to_string(), position);
        self.books.push(book);
    }

    fn locate(&self, title: &str) -> Option<usize> {
        self.index.get(title).copied()
    }

    fn remove_at(&mut self, index: usize) -> Book {
        let book = self.books.remove(index);
        trace!(title = book.title(), index, "unshelved");

        // The removed title may still have copies stored before `index`;
        // copies after it are picked up by the reindex below.
        match self.books[..index]
            .iter()
            .rposition(|b| b.title() == book.title())
        {
            Some(survivor) => {
                self.index.insert(book.title().to_string(), survivor);
            },
            None => {
                self.index.remove(book.title());
            },
        }
        self.reindex_from(index);

        book
    }

    fn empty(&mut self) {
        self.books.clear();
        self.index.clear();
    }
}

impl fmt::Display for HashMapCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_index_consistent(catalog: &HashMapCatalog) {
        for (title, &position) in &catalog.index {
            assert_eq!(
                catalog.books.get(position).map(Book::title),
                Some(title.as_str()),
                "index entry {title:?} -> {position} is stale"
            );
        }
        for book in &catalog.books {
            assert!(catalog.index.contains_key(book.title()));
        }
    }

    fn titles(names: &[&str]) -> Vec<Book> {
        names.iter().map(|t| Book::without_author(*t)).collect()
    }

    #[test]
    fn test_construction_indexes_every_title() {
        let catalog = HashMapCatalog::new(&titles(&["a", "b", "c"]));
        assert_eq!(catalog.locate("a"), Some(0));
        assert_eq!(catalog.locate("c"), Some(2));
        assert_eq!(catalog.indexed_titles(), 3);
        assert_index_consistent(&catalog);
    }

    #[test]
    fn test_unshelve_shifts_later_entries() {
        let mut catalog = HashMapCatalog::new(&titles(&["a", "b", "c", "d", "e"]));
        assert_eq!(catalog.unshelve("b"), Some(Book::without_author("b")));
        assert_eq!(catalog.locate("a"), Some(0));
        assert_eq!(catalog.locate("c"), Some(1));
        assert_eq!(catalog.locate("e"), Some(3));
        assert_eq!(catalog.locate("b"), None);
        assert_eq!(catalog.find("e").map(Book::title), Some("e"));
        assert_index_consistent(&catalog);
    }

    #[test]
    fn test_unshelve_last_and_first() {
        let mut catalog = HashMapCatalog::new(&titles(&["a", "b", "c"]));
        catalog.unshelve("c");
        catalog.unshelve("a");
        assert_eq!(catalog.locate("b"), Some(0));
        assert_eq!(catalog.len(), 1);
        assert_index_consistent(&catalog);
    }

    #[test]
    fn test_newest_duplicate_shadows_older() {
        let mut catalog = HashMapCatalog::default();
        catalog.shelve(Book::new("Dune", Some("Old")));
        catalog.shelve(Book::without_author("Emma"));
        catalog.shelve(Book::new("Dune", Some("New")));
        assert_eq!(catalog.indexed_titles(), 2);
        assert_eq!(catalog.find("Dune").and_then(Book::author), Some("New"));

        let removed = catalog.unshelve("Dune").expect("Dune should be shelved");
        assert_eq!(removed.author(), Some("New"));
        // The older copy becomes reachable again.
        assert_eq!(catalog.find("Dune").and_then(Book::author), Some("Old"));
        assert_index_consistent(&catalog);

        catalog.unshelve("Dune");
        assert_eq!(catalog.find("Dune"), None);
        assert_eq!(catalog.locate("Emma"), Some(0));
        assert_index_consistent(&catalog);
    }

    #[test]
    fn test_duplicates_in_initial_batch() {
        let catalog = HashMapCatalog::new(&[
            Book::new("Dune", Some("Old")),
            Book::new("Dune", Some("New")),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.locate("Dune"), Some(1));
    }

    #[test]
    fn test_shelve_after_unshelve() {
        let mut catalog = HashMapCatalog::new(&titles(&["a", "b"]));
        catalog.unshelve("a");
        catalog.shelve(Book::without_author("c"));
        assert_eq!(catalog.locate("b"), Some(0));
        assert_eq!(catalog.locate("c"), Some(1));
        assert_index_consistent(&catalog);
    }

    #[test]
    fn test_empty_clears_index() {
        let mut catalog = HashMapCatalog::new(&titles(&["a", "b"]));
        catalog.empty();
        assert_eq!(catalog.indexed_titles(), 0);
        assert_eq!(catalog.find("a"), None);
    }
}
