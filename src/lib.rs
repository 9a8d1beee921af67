#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Bookshelf: an in-memory book catalog
//!
//! Three interchangeable catalogs over a mutable collection of title/author
//! records, each trading insertion cost against lookup cost.
//!
//! ## Quick Start
//!
//! ```
//! use bookshelf::{Book, Catalog, BinarySearchCatalog};
//!
//! let mut catalog = BinarySearchCatalog::new(&[
//!     Book::new("The Drunkard's Walk", Some("Leonard Mlodinow")),
//!     Book::new("Dune", Some("Frank Herbert")),
//! ]);
//!
//! catalog.shelve(Book::without_author("Beowulf"));
//! assert_eq!(catalog.len(), 3);
//!
//! let dune = catalog.unshelve("Dune");
//! assert_eq!(dune.as_ref().and_then(Book::author), Some("Frank Herbert"));
//! assert!(catalog.find("Dune").is_none());
//! ```
//!
//! ## Modules
//!
//! - [`book`] — The [`Book`] value type
//! - [`catalog`] — The [`Catalog`] contract and its linear, binary-search and hash-map variants
//! - [`search`] — Lower-bound binary search
//! - [`title_keys`] — Key functions for the binary-search catalog
//! - [`config`] — Strategy selection and catalog construction
//! - [`book_csv`] — Reading book batches from CSV
//! - [`timing`] — Timing and benchmarking catalog operations
//! - [`error`] — Error types and result type

pub mod book;
pub mod book_csv;
pub mod catalog;
pub mod config;
pub mod error;
pub mod search;
pub mod timing;
pub mod title_keys;

pub use book::Book;
pub use catalog::{BinarySearchCatalog, Catalog, HashMapCatalog, LinearSearchCatalog};
pub use config::{CatalogConfig, KeyStrategy, SearchStrategy, TitleMatch};
pub use error::{CatalogError, Result};
pub use timing::BenchmarkReport;
