//! Domain-specific assertions for termscan harnesses.
//!
//! These wrap `pretty_assertions` so a failing comparison prints a diff of
//! two ordered maps instead of two `HashMap` dumps in random order.

use std::collections::BTreeMap;
use termscan_core::FrequencyMap;

/// Convert a [`FrequencyMap`] into an ordered map.
pub fn ordered(map: &FrequencyMap) -> BTreeMap<String, i64> {
    map.iter().map(|(k, v)| (k.to_string(), v)).collect()
}

/// Assert that a [`FrequencyMap`] holds exactly the given counts.
///
/// ```rust
/// assert_counts!(map, [("a", 1), ("a b", 1)]);
/// assert_counts!(map, []);
/// ```
#[macro_export]
macro_rules! assert_counts {
    ($map:expr, [$(($key:expr, $count:expr)),* $(,)?]) => {{
        let pairs: Vec<(String, i64)> = vec![$(($key.to_string(), $count as i64)),*];
        let expected: std::collections::BTreeMap<String, i64> = pairs.into_iter().collect();
        pretty_assertions::assert_eq!($crate::common::ordered(&$map), expected);
    }};
}

/// Assert that no key in the map carries a zero or negative count. Holds
/// for every map produced by a search.
pub fn assert_no_empty_counts(map: &FrequencyMap) {
    for (key, count) in map.iter() {
        assert!(count > 0, "key {key:?} present with count {count}");
    }
}
