//! Common test helpers shared across the integration test suite.

use bookshelf::{BinarySearchCatalog, Book, Catalog, HashMapCatalog, LinearSearchCatalog};

/// Path of the sample CSV fixture.
pub const BOOKS_CSV: &str = "tests/data/books.csv";

/// Number of books in [`BOOKS_CSV`].
#[allow(dead_code)]
pub const BOOKS_CSV_LEN: usize = 10;

/// A small batch of books with one key collision ("Listen"/"Silent").
pub fn sample_books() -> Vec<Book> {
    vec![
        Book::new("The Drunkard's Walk", Some("Leonard Mlodinow")),
        Book::new("Dune", Some("Frank Herbert")),
        Book::without_author("Listen"),
        Book::without_author("Silent"),
        Book::new("Emma", Some("Jane Austen")),
    ]
}

/// One catalog of each variant, all built from `books`.
pub fn all_catalogs(books: &[Book]) -> Vec<Box<dyn Catalog>> {
    vec![
        Box::new(LinearSearchCatalog::new(books)),
        Box::new(BinarySearchCatalog::new(books)),
        Box::new(HashMapCatalog::new(books)),
    ]
}
