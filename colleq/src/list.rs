use std::fmt;
use std::marker::PhantomData;

use colleq_rule::{ItemEquality, NaturalEq};
use tracing::trace;

use crate::collection::Collection;
use crate::comparer::CollectionEquality;
use crate::count::FiniteCountEq;
use crate::item::{combine_ordered, item_hash, items_equal, same_collection, ORDERED_HASH_SEED};

/// List equality: the same items, in the same order, the same number of
/// times.
///
/// ```
/// use colleq::{CollectionEquality, ListEq};
///
/// let comparer = ListEq::new();
/// assert!(comparer.equal(Some(&vec!["A", "B"]), Some(&vec!["A", "B"])));
/// assert!(!comparer.equal(Some(&vec!["A", "B"]), Some(&vec!["B", "A"])));
/// ```
pub struct ListEq<T, R = NaturalEq> {
    rule: R,
    _item: PhantomData<fn(&T)>,
}

impl<T> ListEq<T> {
    pub fn new() -> Self {
        Self::with_rule(NaturalEq::new())
    }
}

impl<T, R> ListEq<T, R> {
    /// Compare items with `rule` instead of their own equality.
    pub fn with_rule(rule: R) -> Self {
        Self {
            rule,
            _item: PhantomData,
        }
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }
}

impl<T, R: ItemEquality<T>> CollectionEquality<T> for ListEq<T, R> {
    fn eq_collections<C, D>(&self, x: &C, y: &D) -> bool
    where
        C: Collection<T> + ?Sized,
        D: Collection<T> + ?Sized,
    {
        if same_collection(x, y) {
            return true;
        }
        if FiniteCountEq::<T>::new().counts_differ(x, y) {
            trace!("lists differ in length");
            return false;
        }
        let mut xs = x.items();
        let mut ys = y.items();
        loop {
            match (xs.next(), ys.next()) {
                (Some(a), Some(b)) => {
                    if !items_equal(&self.rule, a, b) {
                        return false;
                    }
                }
                (None, None) => return true,
                // one ran out before the other
                _ => return false,
            }
        }
    }

    fn hash_collection<C>(&self, x: &C) -> u64
    where
        C: Collection<T> + ?Sized,
    {
        x.items().fold(ORDERED_HASH_SEED, |acc, item| {
            combine_ordered(acc, item_hash(&self.rule, item))
        })
    }
}

impl<T> Default for ListEq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R: Clone> Clone for ListEq<T, R> {
    fn clone(&self) -> Self {
        Self::with_rule(self.rule.clone())
    }
}

impl<T, R: fmt::Debug> fmt::Debug for ListEq<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListEq").field("rule", &self.rule).finish()
    }
}
