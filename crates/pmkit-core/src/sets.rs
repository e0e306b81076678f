use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

/// Returns `true` if both sets hold the same values.
///
/// Equal size plus one-way containment implies the sets are equal.
pub fn are_sets_equal<T, S>(a: &HashSet<T, S>, b: &HashSet<T, S>) -> bool
where
    T: Eq + Hash,
    S: BuildHasher,
{
    a.len() == b.len() && a.iter().all(|v| b.contains(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> HashSet<T> {
        items.into_iter().collect()
    }

    #[test]
    fn same_values_any_order() {
        assert!(are_sets_equal(&set([1, 2, 3]), &set([3, 2, 1])));
    }

    #[test]
    fn different_size() {
        assert!(!are_sets_equal(&set([1, 2]), &set([1, 2, 3])));
        assert!(!are_sets_equal(&set([1, 2, 3]), &set([1, 2])));
    }

    #[test]
    fn same_size_different_values() {
        assert!(!are_sets_equal(&set(["a", "b"]), &set(["a", "c"])));
    }

    #[test]
    fn empty_sets() {
        assert!(are_sets_equal(&HashSet::<u8>::new(), &HashSet::new()));
    }
}
