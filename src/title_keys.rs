//! Key functions mapping titles to orderable numeric keys.
//!
//! [`BinarySearchCatalog`](crate::catalog::BinarySearchCatalog) keeps its
//! books sorted by one of these keys. Keys are not required to be unique:
//! distinct titles may collide, and the catalog resolves collisions by
//! comparing full titles within the run of equal keys.

/// A key strategy: a total function from a title to a numeric key.
pub type KeyFn = fn(&str) -> u64;

/// Sum of the Unicode code points of the title.
///
/// Cheap, but anagrams and many other titles share a key.
///
/// ```
/// use bookshelf::title_keys::basic_key;
///
/// assert_eq!(basic_key("ab"), 97 + 98);
/// assert_eq!(basic_key("ab"), basic_key("ba"));
/// ```
#[must_use]
pub fn basic_key(title: &str) -> u64 {
    title
        .chars()
        .fold(0u64, |sum, c| sum.wrapping_add(u64::from(u32::from(c))))
}

/// Sum of each code point multiplied by its zero-based position.
///
/// Weighting by position separates anagrams, so collisions are rarer than
/// with [`basic_key`]. The first character always contributes zero.
///
/// ```
/// use bookshelf::title_keys::positional_key;
///
/// assert_eq!(positional_key("ab"), 98);
/// assert_ne!(positional_key("ab"), positional_key("ba"));
/// ```
#[must_use]
pub fn positional_key(title: &str) -> u64 {
    title.chars().zip(0u64..).fold(0u64, |sum, (c, position)| {
        sum.wrapping_add(u64::from(u32::from(c)).wrapping_mul(position))
    })
}
