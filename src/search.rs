//! Lower-bound binary search over key-sorted slices.

/// Find the first position in `items` whose key is not less than `target`.
///
/// `items` must be sorted ascending by `key`. When several items share the
/// target key, the position of the first of them is returned. Returns `None`
/// if `items` is empty or every key is below `target`; otherwise the result
/// is also the position at which an item with key `target` can be inserted
/// without breaking the ordering.
///
/// # Examples
///
/// ```
/// use bookshelf::search::lower_bound;
///
/// let values = [1, 2, 4, 5, 7, 8, 10, 11];
/// assert_eq!(lower_bound(&values, &6, |v| *v), Some(4));
/// assert_eq!(lower_bound(&values, &7, |v| *v), Some(4));
/// assert_eq!(lower_bound(&values, &12, |v| *v), None);
/// ```
pub fn lower_bound<T, K, F>(items: &[T], target: &K, key: F) -> Option<usize>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    // Half-open window [left, right); the answer, if any, lies in it or at `right`.
    let mut left = 0;
    let mut right = items.len();
    let mut found = None;

    while left < right {
        let middle = left + (right - left) / 2;
        if key(&items[middle]) < *target {
            left = middle + 1;
        } else {
            found = Some(middle);
            right = middle;
        }
    }

    found
}
