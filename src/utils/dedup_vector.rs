use std::collections::HashSet;
use std::hash::Hash;

/// Deduplicates a slice while maintaining first-seen order.
///
/// # Arguments
/// * `vec` - A slice containing elements to deduplicate.
///
/// # Returns
/// A new vector with later repeats removed.
pub fn dedup_vector<T: Eq + Hash + Clone>(vec: &[T]) -> Vec<T> {
    dedup_vector_by_key(vec, |item| item.clone())
}

/// Deduplicates a slice by a derived key, keeping the first element seen for each key.
pub fn dedup_vector_by_key<T, K, F>(vec: &[T], key_fn: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    vec.iter()
        .filter_map(|item| {
            if seen.insert(key_fn(item)) {
                Some(item.clone())
            } else {
                None
            }
        })
        .collect()
}
