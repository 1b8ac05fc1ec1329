use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::error::EmptyAggregationError;

/// A value together with how many trips carried it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrequencyCount<T> {
    pub value: T,
    pub count: usize,
}

/// Count occurrences of each distinct value, in ascending value order.
pub fn count_values<T, I>(values: I) -> BTreeMap<T, usize>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// Return the most frequent value and its occurrence count.
///
/// Tie-break: among equally frequent values the smallest one wins, so the
/// result is deterministic regardless of row order.
///
/// # Examples
///
/// ```
/// use bikeshare_rust::services::frequency::most_frequent;
///
/// let mode = most_frequent(vec![3, 1, 3, 2, 1]).unwrap();
/// assert_eq!(mode.value, 1); // 1 and 3 both occur twice; smallest wins
/// assert_eq!(mode.count, 2);
/// ```
pub fn most_frequent<T, I>(values: I) -> Result<FrequencyCount<T>, EmptyAggregationError>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut best: Option<FrequencyCount<T>> = None;

    // Ascending key order plus strictly-greater replacement gives the
    // smallest key among the most frequent ones.
    for (value, count) in count_values(values) {
        match &best {
            Some(current) if count <= current.count => {}
            _ => best = Some(FrequencyCount { value, count }),
        }
    }

    best.ok_or(EmptyAggregationError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_frequent_single_winner() {
        let mode = most_frequent(vec!["b", "a", "b"]).unwrap();
        assert_eq!(mode.value, "b");
        assert_eq!(mode.count, 2);
    }

    #[test]
    fn test_most_frequent_tie_breaks_to_smallest() {
        let mode = most_frequent(vec!["b", "a"]).unwrap();
        assert_eq!(mode.value, "a");
        assert_eq!(mode.count, 1);
    }

    #[test]
    fn test_most_frequent_on_empty_input_fails() {
        let result = most_frequent(Vec::<u32>::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_count_values() {
        let counts = count_values(vec!["x", "y", "x"]);
        assert_eq!(counts.get("x"), Some(&2));
        assert_eq!(counts.get("y"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// The winning count is >= the count of every distinct value.
            #[test]
            fn mode_count_dominates_all_values(values in proptest::collection::vec(0u8..20, 1..200)) {
                let mode = most_frequent(values.clone()).unwrap();
                let counts = count_values(values);

                for (value, count) in counts {
                    prop_assert!(mode.count >= count);
                    if count == mode.count {
                        prop_assert!(mode.value <= value);
                    }
                }
            }
        }
    }
}
