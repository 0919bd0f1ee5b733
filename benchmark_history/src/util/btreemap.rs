//!
//! Utility functions for `BTreeMap`.
//!

use std::collections::BTreeMap;

/// Intersects two `BTreeMap` instances and merges their entries using a
/// specified merger function.
///
/// # Arguments
///
/// * `map1` - The first `BTreeMap` containing keys of type `K` and values of
///   type `V1`.
/// * `map2` - The second `BTreeMap` containing keys of type `K` and values of
///   type `V2`. This map is consumed during the intersection.
/// * `merger` - A closure that takes a key of type `K`, and a value from each
///   map (`V1` and `V2`), and returns a merged result of type `R`.
///
/// # Returns
///
/// An iterator that yields merged results of type `R` for each intersecting key
/// from the maps, in key order.
///
/// # Example
///
/// ```rust
/// use benchmark_history::util::btreemap::intersect_map;
///
/// let reference = [("Benchmark_Get - ns/op", 10), ("Benchmark_Set - ns/op", 20)];
/// let candidate = [("Benchmark_Set - ns/op", 30)];
/// let expected: Vec<_> = [("Benchmark_Set - ns/op", 1.5)].into();
/// assert_eq!(
///     intersect_map(reference.into(), candidate.into(), |name, r, c| (name, c as f64 / r as f64))
///         .collect::<Vec<_>>(),
///     expected
/// )
/// ```
pub fn intersect_map<K, V1, V2, R>(
    map1: BTreeMap<K, V1>,
    mut map2: BTreeMap<K, V2>,
    merger: impl Fn(K, V1, V2) -> R,
) -> impl Iterator<Item = R>
where
    K: Ord,
{
    map1.into_iter().filter_map(move |(key, value1)| {
        map2.remove(&key).map(|value2| merger(key, value1, value2))
    })
}
