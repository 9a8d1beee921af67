//! Reading batches of books from CSV files.
//!
//! The first row of the source is a header and is skipped. Every other row
//! describes one book in one of three shapes:
//!
//! | Columns | Meaning |
//! |---|---|
//! | 1 | `Title` |
//! | 2 | `Title, Author` |
//! | 3 | `Title, Author surname, Author first name` |
//!
//! In the three-column shape the author is joined as `"{first} {surname}"`.
//! An empty author cell means the book has no author. Any other column count
//! aborts the batch with [`CatalogError::CsvFormat`].
//!
//! # Examples
//!
//! ```
//! use bookshelf::book_csv::read_books;
//!
//! let data = "Title,Author\nDune,Frank Herbert\nBeowulf\nEmma,Austen,Jane\n";
//! let books = read_books(data.as_bytes())?;
//!
//! assert_eq!(books.len(), 3);
//! assert_eq!(books[0].author(), Some("Frank Herbert"));
//! assert_eq!(books[1].author(), None);
//! assert_eq!(books[2].author(), Some("Jane Austen"));
//! # Ok::<(), bookshelf::CatalogError>(())
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use crate::book::Book;
use crate::error::{CatalogError, Result};

const EXPECTED_SHAPE: &str = "Title, Author or equivalent.";

/// Read every book from a CSV source.
///
/// # Errors
///
/// Returns an error if the source cannot be tokenized, has no header row,
/// or contains a row of an unsupported shape.
pub fn read_books<R: Read>(reader: R) -> Result<Vec<Book>> {
    read_up_to(reader, None)
}

/// Read at most `limit` books from a CSV source.
///
/// Rows after the limit are not inspected, so a malformed row past the
/// limit does not cause an error.
///
/// # Errors
///
/// Same as [`read_books`].
pub fn read_n_books<R: Read>(reader: R, limit: usize) -> Result<Vec<Book>> {
    read_up_to(reader, Some(limit))
}

/// Read every book from the CSV file at `path`.
///
/// # Errors
///
/// Returns [`CatalogError::IoError`] if the file cannot be opened, otherwise
/// the same errors as [`read_books`].
pub fn read_books_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Book>> {
    let file = File::open(path.as_ref())?;
    debug!(path = %path.as_ref().display(), "reading books");
    read_books(file)
}

/// Read at most `limit` books from the CSV file at `path`.
///
/// # Errors
///
/// Same as [`read_books_from_path`].
pub fn read_n_books_from_path<P: AsRef<Path>>(path: P, limit: usize) -> Result<Vec<Book>> {
    let file = File::open(path.as_ref())?;
    debug!(path = %path.as_ref().display(), limit, "reading books");
    read_n_books(file, limit)
}

fn read_up_to<R: Read>(reader: R, limit: Option<usize>) -> Result<Vec<Book>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    if csv_reader.headers()?.is_empty() {
        return Err(CatalogError::MissingHeader);
    }

    let mut books = Vec::new();
    for row in csv_reader.records() {
        if limit.is_some_and(|limit| books.len() >= limit) {
            break;
        }
        books.push(book_from_row(&row?)?);
    }

    debug!(books = books.len(), "read book batch");
    Ok(books)
}

fn book_from_row(row: &csv::StringRecord) -> Result<Book> {
    let author = |name: &str| (!name.is_empty()).then(|| name.to_string());

    match row.len() {
        1 => Ok(Book::without_author(&row[0])),
        2 => Ok(Book::new(&row[0], author(&row[1]))),
        3 => {
            let joined = match (row[2].is_empty(), row[1].is_empty()) {
                (true, _) => author(&row[1]),
                (false, true) => author(&row[2]),
                (false, false) => Some(format!("{} {}", &row[2], &row[1])),
            };
            Ok(Book::new(&row[0], joined))
        },
        _ => {
            let row: Vec<String> = row.iter().map(str::to_string).collect();
            warn!(?row, "rejecting malformed book row");
            Err(CatalogError::CsvFormat {
                row,
                expected: EXPECTED_SHAPE.to_string(),
            })
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_is_skipped() {
        let books = read_books("Title,Author\nDune,Frank Herbert\n".as_bytes())
            .expect("Failed to read books");
        assert_eq!(books, vec![Book::new("Dune", Some("Frank Herbert"))]);
    }

    #[test]
    fn test_three_column_author_join() {
        let books = read_books("Title,Last,First\nEmma,Austen,Jane\n".as_bytes())
            .expect("Failed to read books");
        assert_eq!(books[0].author(), Some("Jane Austen"));
    }

    #[test]
    fn test_empty_author_is_absent() {
        let books =
            read_books("Title,Author\nBeowulf,\n".as_bytes()).expect("Failed to read books");
        assert_eq!(books[0].author(), None);
    }

    #[test]
    fn test_quoted_title_with_comma() {
        let books = read_books("Title,Author\n\"Guns, Germs, and Steel\",Jared Diamond\n".as_bytes())
            .expect("Failed to read books");
        assert_eq!(books[0].title(), "Guns, Germs, and Steel");
        assert_eq!(books[0].author(), Some("Jared Diamond"));
    }

    #[test]
    fn test_too_many_columns_is_rejected() {
        let err = read_books("Title,Author\nDune,Frank,Herbert,Extra\n".as_bytes())
            .expect_err("row should be rejected");
        match err {
            CatalogError::CsvFormat { row, expected } => {
                assert_eq!(row, vec!["Dune", "Frank", "Herbert", "Extra"]);
                assert_eq!(expected, EXPECTED_SHAPE);
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_limit_stops_before_malformed_row() {
        let data = "Title\nA\nB\nC,1,2,3,4\n";
        let books = read_n_books(data.as_bytes(), 2).expect("Failed to read books");
        assert_eq!(books.len(), 2);
        assert!(read_n_books(data.as_bytes(), 3).is_err());
    }

    #[test]
    fn test_missing_header() {
        let err = read_books("".as_bytes()).expect_err("empty source has no header");
        assert!(matches!(err, CatalogError::MissingHeader));
    }

    #[test]
    fn test_header_only_yields_no_books() {
        let books = read_books("Title,Author\n".as_bytes()).expect("Failed to read books");
        assert!(books.is_empty());
    }
}
