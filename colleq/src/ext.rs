use std::hash::Hash;

use colleq_rule::ItemEquality;

use crate::bag::BagEq;
use crate::collection::Collection;
use crate::comparer::CollectionEquality;
use crate::list::ListEq;
use crate::set::SetEq;

/// Compare any two collections directly.
///
/// ```
/// use colleq::CollectionEqExt;
///
/// let a = vec![1, 2, 2];
/// assert!(a.bag_equals(&[2, 1, 2]));
/// assert!(a.set_equals(&[1, 2]));
/// assert!(!a.list_equals(&[2, 1, 2]));
/// ```
pub trait CollectionEqExt<T>: Collection<T> {
    fn list_equals<D>(&self, other: &D) -> bool
    where
        T: Eq + Hash,
        D: Collection<T> + ?Sized,
    {
        ListEq::<T>::new().eq_collections(self, other)
    }

    fn set_equals<D>(&self, other: &D) -> bool
    where
        T: Eq + Hash,
        D: Collection<T> + ?Sized,
    {
        SetEq::<T>::new().eq_collections(self, other)
    }

    fn bag_equals<D>(&self, other: &D) -> bool
    where
        T: Eq + Hash,
        D: Collection<T> + ?Sized,
    {
        BagEq::<T>::new().eq_collections(self, other)
    }

    fn list_equals_by<D, R>(&self, other: &D, rule: R) -> bool
    where
        D: Collection<T> + ?Sized,
        R: ItemEquality<T>,
    {
        ListEq::<T, R>::with_rule(rule).eq_collections(self, other)
    }

    fn set_equals_by<D, R>(&self, other: &D, rule: R) -> bool
    where
        D: Collection<T> + ?Sized,
        R: ItemEquality<T>,
    {
        SetEq::<T, R>::with_rule(rule).eq_collections(self, other)
    }

    fn bag_equals_by<D, R>(&self, other: &D, rule: R) -> bool
    where
        D: Collection<T> + ?Sized,
        R: ItemEquality<T>,
    {
        BagEq::<T, R>::with_rule(rule).eq_collections(self, other)
    }
}

impl<T, C: Collection<T> + ?Sized> CollectionEqExt<T> for C {}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    use colleq_rule::{KeyEq, NaturalEq, Nullable};

    #[test]
    fn test_natural() {
        let a = vec!["A", "B", "B"];
        assert!(a.list_equals(&["A", "B", "B"]));
        assert!(!a.list_equals(&["B", "A", "B"]));
        assert!(a.set_equals(&["B", "A"]));
        assert!(!a.bag_equals(&["B", "A"]));
        assert!(a.bag_equals(&["B", "A", "B"]));
    }

    #[test]
    fn test_mixed_containers() {
        let set: HashSet<i32> = [1, 2].into_iter().collect();
        assert!(set.set_equals(&vec![2, 1, 1]));
        assert!(vec![2, 1].bag_equals(&set));
    }

    #[test]
    fn test_by_rule() {
        let rule = KeyEq::new(|s: &&str| s.to_lowercase());
        let a = vec!["a", "B"];
        assert!(a.list_equals_by(&["A", "b"], &rule));
        assert!(a.set_equals_by(&["b", "A", "a"], &rule));
        assert!(a.bag_equals_by(&["b", "A"], &rule));
        assert!(!a.bag_equals_by(&["b", "A", "a"], &rule));
    }

    #[test]
    fn test_absent_items_by_rule() {
        let a = vec![None, Some(1)];
        assert!(a.bag_equals_by(&[Some(1), None], Nullable::new(NaturalEq::new())));
    }
}
