//! Error types for catalog loading and configuration.
//!
//! This module provides the [`CatalogError`] type and the [`Result`]
//! convenience type. Catalog lookups themselves never fail: a miss is an
//! ordinary `None`, so the errors here only come from the layers around the
//! catalogs (CSV input and configuration parsing).

use thiserror::Error;

/// Error type for book loading and catalog configuration.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A CSV row had a column count that does not describe a book.
    ///
    /// Carries the offending row and the shape rows are expected to have.
    #[error("Invalid row format: {row:?} found. Format should be {expected}")]
    CsvFormat {
        /// The cells of the rejected row.
        row: Vec<String>,
        /// Human-readable description of the accepted row shapes.
        expected: String,
    },

    /// The CSV source did not contain a header row.
    #[error("CSV source is missing its header row")]
    MissingHeader,

    /// Error from the CSV tokenizer.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A strategy or policy name that is not recognised.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error from the underlying source.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`CatalogError`].
pub type Result<T> = std::result::Result<T, CatalogError>;
