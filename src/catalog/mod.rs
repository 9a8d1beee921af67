//! The shared catalog contract and its three lookup strategies.
//!
//! Every catalog owns a sequence of [`Book`] values and answers lookups by
//! exact title. The variants differ only in how they [`locate`](Catalog::locate)
//! a title and how they [`shelve`](Catalog::shelve) a new book:
//!
//! | Variant | `shelve` | `locate` |
//! |---|---|---|
//! | [`LinearSearchCatalog`] | append, O(1) | scan, O(n) |
//! | [`BinarySearchCatalog`] | sorted insert, O(n) | lower-bound search, O(log n) average |
//! | [`HashMapCatalog`] | append, O(1) amortized | map lookup, O(1) |
//!
//! # Examples
//!
//! ```
//! use bookshelf::{Book, Catalog, BinarySearchCatalog, HashMapCatalog, LinearSearchCatalog};
//!
//! let books = vec![
//!     Book::new("Dune", Some("Frank Herbert")),
//!     Book::new("Emma", Some("Jane Austen")),
//! ];
//!
//! let catalogs: Vec<Box<dyn Catalog>> = vec![
//!     Box::new(LinearSearchCatalog::new(&books)),
//!     Box::new(BinarySearchCatalog::new(&books)),
//!     Box::new(HashMapCatalog::new(&books)),
//! ];
//!
//! for mut catalog in catalogs {
//!     assert_eq!(catalog.find("Emma").and_then(Book::author), Some("Jane Austen"));
//!     assert!(catalog.unshelve("Dune").is_some());
//!     assert_eq!(catalog.find("Dune"), None);
//!     assert_eq!(catalog.len(), 1);
//! }
//! ```

use std::fmt;

use crate::book::Book;

pub mod binary;
pub mod hashed;
pub mod linear;

pub use binary::BinarySearchCatalog;
pub use hashed::HashMapCatalog;
pub use linear::LinearSearchCatalog;

/// Common contract implemented by every lookup strategy.
///
/// Implementors provide storage access, insertion, removal by position and
/// title resolution; lookups and removals by title are provided on top of
/// those in terms of [`locate`](Self::locate).
///
/// A miss is never an error: [`find`](Self::find) and
/// [`unshelve`](Self::unshelve) return `None` and leave the catalog unchanged.
pub trait Catalog: fmt::Debug {
    /// The shelved books in storage order.
    fn books(&self) -> &[Book];

    /// Insert a book. Duplicate titles are allowed and coexist.
    fn shelve(&mut self, book: Book);

    /// Resolve a title to its storage position, or `None` if it is not shelved.
    fn locate(&self, title: &str) -> Option<usize>;

    /// Remove and return the book stored at `index`.
    ///
    /// Any auxiliary index must be brought back in sync before this returns.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    fn remove_at(&mut self, index: usize) -> Book;

    /// Remove every book, as if freshly constructed from an empty batch.
    fn empty(&mut self);

    /// Find the book with the given title without modifying the catalog.
    fn find(&self, title: &str) -> Option<&Book> {
        self.locate(title).map(|index| &self.books()[index])
    }

    /// Remove and return the book with the given title.
    ///
    /// Returns `None`, leaving the catalog unchanged, when no book matches.
    fn unshelve(&mut self, title: &str) -> Option<Book> {
        let index = self.locate(title)?;
        Some(self.remove_at(index))
    }

    /// Whether a book with the given title is shelved.
    fn contains(&self, title: &str) -> bool {
        self.locate(title).is_some()
    }

    /// Number of shelved books.
    fn len(&self) -> usize {
        self.books().len()
    }

    /// Whether the catalog holds no books.
    fn is_empty(&self) -> bool {
        self.books().is_empty()
    }

    /// One line per book, in storage order.
    fn render(&self) -> String {
        self.books()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_books() -> Vec<Book> {
        vec![
            Book::new("Dune", Some("Frank Herbert")),
            Book::without_author("Beowulf"),
            Book::new("Emma", Some("Jane Austen")),
        ]
    }

    fn all_variants(books: &[Book]) -> Vec<Box<dyn Catalog>> {
        vec![
            Box::new(LinearSearchCatalog::new(books)),
            Box::new(BinarySearchCatalog::new(books)),
            Box::new(HashMapCatalog::new(books)),
        ]
    }

    #[test]
    fn test_find_existing_and_missing() {
        for catalog in all_variants(&sample_books()) {
            assert_eq!(catalog.find("Beowulf").map(Book::title), Some("Beowulf"));
            assert_eq!(catalog.find("Ulysses"), None, "{catalog:?}");
            assert!(catalog.contains("Dune"));
        }
    }

    #[test]
    fn test_unshelve_returns_shelved_book() {
        for mut catalog in all_variants(&sample_books()) {
            let book = catalog.unshelve("Emma").expect("Emma should be shelved");
            assert_eq!(book, Book::new("Emma", Some("Jane Austen")));
            assert_eq!(catalog.find("Emma"), None);
            assert_eq!(catalog.len(), 2);
        }
    }

    #[test]
    fn test_unshelve_miss_leaves_catalog_unchanged() {
        for mut catalog in all_variants(&sample_books()) {
            let before = catalog.render();
            assert_eq!(catalog.unshelve("Ulysses"), None);
            assert_eq!(catalog.render(), before);
            assert_eq!(catalog.len(), 3);
        }
    }

    #[test]
    fn test_empty_catalog_lookups() {
        for mut catalog in all_variants(&[]) {
            assert!(catalog.is_empty());
            assert_eq!(catalog.find("Dune"), None);
            assert_eq!(catalog.unshelve("Dune"), None);
            assert_eq!(catalog.render(), "");
        }
    }

    #[test]
    fn test_empty_resets_catalog() {
        for mut catalog in all_variants(&sample_books()) {
            catalog.empty();
            assert_eq!(catalog.len(), 0);
            assert_eq!(catalog.find("Dune"), None);
            catalog.shelve(Book::without_author("Dune"));
            assert_eq!(catalog.find("Dune").map(Book::title), Some("Dune"));
        }
    }

    #[test]
    fn test_case_sensitive_by_default() {
        let books = vec![Book::new("moby dick", Some("Herman Melville"))];
        for catalog in all_variants(&books) {
            assert_eq!(catalog.find("Moby Dick"), None);
            assert!(catalog.find("moby dick").is_some());
        }
    }

    #[test]
    fn test_construction_copies_batch() {
        let mut books = sample_books();
        let catalogs = all_variants(&books);
        books.clear();
        books.push(Book::without_author("Ulysses"));
        for catalog in catalogs {
            assert_eq!(catalog.len(), 3);
            assert_eq!(catalog.find("Ulysses"), None);
        }
    }
}
