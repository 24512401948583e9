use std::cell::Cell;
use std::collections::HashSet;

use proptest::prelude::*;

use colleq::{BagEq, Collection, CollectionEquality, ListEq, Membership, SetEq};

/// Counts how often its items are walked.
struct Tracked<C> {
    inner: C,
    walks: Cell<usize>,
}

impl<C> Tracked<C> {
    fn new(inner: C) -> Self {
        Self {
            inner,
            walks: Cell::new(0),
        }
    }
}

impl<C: Collection<i32>> Collection<i32> for Tracked<C> {
    fn items<'a>(&'a self) -> impl Iterator<Item = &'a i32>
    where
        i32: 'a,
    {
        self.walks.set(self.walks.get() + 1);
        self.inner.items()
    }

    fn finite_count(&self) -> Option<usize> {
        self.inner.finite_count()
    }

    fn membership(&self) -> Option<&dyn Membership<i32>> {
        self.inner.membership()
    }
}

// a small item range makes duplicates and accidental equality likely
fn items() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(0..5i32, 0..8)
}

fn shuffled() -> impl Strategy<Value = (Vec<i32>, Vec<i32>)> {
    items().prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
}

proptest! {
    #[test]
    fn list_is_reflexive(a in items()) {
        let comparer = ListEq::new();
        prop_assert!(comparer.eq_collections(&a, &a.clone()));
        prop_assert_eq!(comparer.hash_collection(&a), comparer.hash_collection(&a.clone()));
    }

    #[test]
    fn permutations_are_equal_sets_and_bags((a, b) in shuffled()) {
        prop_assert!(SetEq::new().eq_collections(&a, &b));
        prop_assert!(BagEq::new().eq_collections(&a, &b));
        prop_assert!(BagEq::ordered().eq_collections(&a, &b));
    }

    #[test]
    fn set_and_bag_are_symmetric(a in items(), b in items()) {
        let set = SetEq::new();
        let bag = BagEq::new();
        prop_assert_eq!(set.eq_collections(&a, &b), set.eq_collections(&b, &a));
        prop_assert_eq!(bag.eq_collections(&a, &b), bag.eq_collections(&b, &a));
        prop_assert_eq!(bag.eq_collections(&a, &b), BagEq::ordered().eq_collections(&a, &b));
    }

    #[test]
    fn equal_collections_hash_alike(a in items(), b in items()) {
        let list = ListEq::new();
        if list.eq_collections(&a, &b) {
            prop_assert_eq!(list.hash_collection(&a), list.hash_collection(&b));
        }
        let set = SetEq::new();
        if set.eq_collections(&a, &b) {
            prop_assert_eq!(set.hash_collection(&a), set.hash_collection(&b));
        }
        let bag = BagEq::new();
        if bag.eq_collections(&a, &b) {
            prop_assert_eq!(bag.hash_collection(&a), bag.hash_collection(&b));
        }
    }

    #[test]
    fn duplicate_free_bags_are_sets(
        a in prop::collection::hash_set(0..6i32, 0..5),
        b in prop::collection::hash_set(0..6i32, 0..5),
    ) {
        let a: Vec<i32> = a.into_iter().collect();
        let b: Vec<i32> = b.into_iter().collect();
        let bag = BagEq::new().eq_collections(&a, &b);
        let set = SetEq::new().eq_collections(&a, &b);
        prop_assert_eq!(bag, set);
    }

    #[test]
    fn different_sizes_are_not_walked(a in items(), b in items()) {
        prop_assume!(a.len() != b.len());
        let x = Tracked::new(a);
        let y = Tracked::new(b);
        prop_assert!(!ListEq::new().eq_collections(&x, &y));
        prop_assert!(!BagEq::new().eq_collections(&x, &y));
        prop_assert!(!BagEq::ordered().eq_collections(&x, &y));
        prop_assert_eq!(x.walks.get(), 0);
        prop_assert_eq!(y.walks.get(), 0);
    }

    #[test]
    fn different_sized_sets_are_not_walked(
        a in prop::collection::hash_set(0..6i32, 0..5),
        b in prop::collection::hash_set(0..6i32, 0..5),
    ) {
        prop_assume!(a.len() != b.len());
        let x: Tracked<HashSet<i32>> = Tracked::new(a);
        let y: Tracked<HashSet<i32>> = Tracked::new(b);
        prop_assert!(!SetEq::new().eq_collections(&x, &y));
        prop_assert!(!BagEq::new().eq_collections(&x, &y));
        prop_assert_eq!(x.walks.get(), 0);
        prop_assert_eq!(y.walks.get(), 0);
    }
}
