//! Configuration for choosing and tuning a catalog strategy.
//!
//! This module provides the [`CatalogConfig`] struct, which selects one of
//! the three lookup strategies and the per-strategy policies, and builds a
//! boxed [`Catalog`] from a batch of books.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::book::Book;
use crate::catalog::{BinarySearchCatalog, Catalog, HashMapCatalog, LinearSearchCatalog};
use crate::error::{CatalogError, Result};
use crate::title_keys::{basic_key, positional_key, KeyFn};

/// Which lookup strategy a catalog uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStrategy {
    /// Append on insert, scan on lookup.
    Linear,
    /// Keep sorted by title key, binary search on lookup.
    #[default]
    Binary,
    /// Append on insert, hash index on lookup.
    HashMap,
}

impl SearchStrategy {
    /// All strategies, in increasing order of lookup speed.
    pub const ALL: [SearchStrategy; 3] = [Self::Linear, Self::Binary, Self::HashMap];
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Binary => write!(f, "binary"),
            Self::HashMap => write!(f, "hash-map"),
        }
    }
}

impl FromStr for SearchStrategy {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "binary" => Ok(Self::Binary),
            "hash-map" | "hashmap" | "hash" => Ok(Self::HashMap),
            other => Err(CatalogError::InvalidConfig(format!(
                "unknown search strategy '{other}'"
            ))),
        }
    }
}

/// Key function used by the binary search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyStrategy {
    /// [`basic_key`]: sum of code points.
    #[default]
    Basic,
    /// [`positional_key`]: position-weighted sum of code points.
    Positional,
}

impl KeyStrategy {
    /// The key function this strategy names.
    #[must_use]
    pub fn key_fn(self) -> KeyFn {
        match self {
            Self::Basic => basic_key,
            Self::Positional => positional_key,
        }
    }
}

impl fmt::Display for KeyStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => write!(f, "basic"),
            Self::Positional => write!(f, "positional"),
        }
    }
}

impl FromStr for KeyStrategy {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "positional" => Ok(Self::Positional),
            other => Err(CatalogError::InvalidConfig(format!(
                "unknown key strategy '{other}'"
            ))),
        }
    }
}

/// How the linear strategy compares titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TitleMatch {
    /// Titles must be identical.
    #[default]
    Exact,
    /// Titles are compared after lower-casing both sides.
    IgnoreCase,
}

impl fmt::Display for TitleMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::IgnoreCase => write!(f, "ignore-case"),
        }
    }
}

impl FromStr for TitleMatch {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "ignore-case" | "ignorecase" => Ok(Self::IgnoreCase),
            other => Err(CatalogError::InvalidConfig(format!(
                "unknown title match policy '{other}'"
            ))),
        }
    }
}

/// Configuration for building a catalog.
///
/// Fields that do not apply to the chosen strategy are ignored: `key` only
/// affects [`SearchStrategy::Binary`] and `title_match` only affects
/// [`SearchStrategy::Linear`].
///
/// # Examples
///
/// ```
/// use bookshelf::{Book, Catalog, CatalogConfig, KeyStrategy, SearchStrategy};
///
/// let config = CatalogConfig::default()
///     .with_strategy(SearchStrategy::Binary)
///     .with_key(KeyStrategy::Positional);
///
/// let catalog = config.build(vec![Book::without_author("Dune")]);
/// assert!(catalog.find("Dune").is_some());
///
/// let config = CatalogConfig::from_json(r#"{"strategy": "hash-map"}"#)?;
/// assert_eq!(config.strategy, SearchStrategy::HashMap);
/// # Ok::<(), bookshelf::CatalogError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Lookup strategy.
    pub strategy: SearchStrategy,
    /// Key function for the binary strategy.
    pub key: KeyStrategy,
    /// Title comparison for the linear strategy.
    pub title_match: TitleMatch,
}

impl CatalogConfig {
    /// Set the lookup strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the key function for the binary strategy.
    #[must_use]
    pub fn with_key(mut self, key: KeyStrategy) -> Self {
        self.key = key;
        self
    }

    /// Set the title comparison for the linear strategy.
    #[must_use]
    pub fn with_title_match(mut self, title_match: TitleMatch) -> Self {
        self.title_match = title_match;
        self
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidConfig`] if the JSON is malformed or
    /// names an unknown strategy.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CatalogError::InvalidConfig(e.to_string()))
    }

    /// Build the configured catalog, taking ownership of `books`.
    #[must_use]
    pub fn build(&self, books: Vec<Book>) -> Box<dyn Catalog> {
        match self.strategy {
            SearchStrategy::Linear => {
                Box::new(LinearSearchCatalog::from(books).with_title_match(self.title_match))
            },
            SearchStrategy::Binary => Box::new(BinarySearchCatalog::from_vec_with_key(
                books,
                self.key.key_fn(),
            )),
            SearchStrategy::HashMap => Box::new(HashMapCatalog::from(books)),
        }
    }
}

impl fmt::Display for CatalogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.strategy {
            SearchStrategy::Linear => write!(f, "linear ({})", self.title_match),
            SearchStrategy::Binary => write!(f, "binary ({} key)", self.key),
            SearchStrategy::HashMap => write!(f, "hash-map"),
        }
    }
}
