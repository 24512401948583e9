use std::fmt;
use std::marker::PhantomData;

use colleq_rule::{ItemEquality, ItemOrdering, NaturalEq, NaturalOrd, Unordered, ABSENT_ITEM_HASH};
use tracing::trace;

use crate::collection::Collection;
use crate::comparer::CollectionEquality;
use crate::count::FiniteCountEq;
use crate::item::{items_equal, same_collection, ItemCounts};
use crate::set::SetEq;

/// How a [`BagEq`] compares items.
#[derive(Debug, Clone)]
pub struct BagOptions<R = NaturalEq, O = Unordered> {
    /// The equality rule for items.
    pub item_equality: R,
    /// An order over items that agrees with `item_equality`. When given,
    /// bags are compared by sorting both sides instead of counting.
    pub item_ordering: Option<O>,
}

impl Default for BagOptions {
    fn default() -> Self {
        Self {
            item_equality: NaturalEq::new(),
            item_ordering: None,
        }
    }
}

impl BagOptions<NaturalEq, NaturalOrd> {
    /// Natural equality together with the items' own `Ord`.
    pub fn ordered() -> Self {
        Self {
            item_equality: NaturalEq::new(),
            item_ordering: Some(NaturalOrd),
        }
    }
}

/// Bag equality: the same items the same number of times, in any order.
///
/// ```
/// use colleq::{BagEq, CollectionEquality};
///
/// let comparer = BagEq::new();
/// assert!(comparer.equal(Some(&vec!["A", "B", "B"]), Some(&vec!["B", "A", "B"])));
/// assert!(!comparer.equal(Some(&vec!["A", "B", "B"]), Some(&vec!["B", "A"])));
/// ```
pub struct BagEq<T, R = NaturalEq, O = Unordered> {
    rule: R,
    ordering: Option<O>,
    _item: PhantomData<fn(&T)>,
}

impl<T> BagEq<T> {
    pub fn new() -> Self {
        Self::with_rule(NaturalEq::new())
    }
}

impl<T: Ord> BagEq<T, NaturalEq, NaturalOrd> {
    /// Natural equality, comparing by sorting on the items' own `Ord`.
    pub fn ordered() -> Self {
        Self::from_options(BagOptions::ordered())
    }
}

impl<T, R> BagEq<T, R> {
    /// Compare items with `rule` instead of their own equality.
    pub fn with_rule(rule: R) -> Self {
        Self::from_options(BagOptions {
            item_equality: rule,
            item_ordering: None,
        })
    }
}

impl<T, R, O> BagEq<T, R, O> {
    /// Compare items with `rule`, sorting by `ordering` before comparing.
    ///
    /// `ordering` must call two items `Equal` exactly when `rule` says they
    /// are equal; otherwise the result of a comparison is unspecified.
    pub fn with_ordering(rule: R, ordering: O) -> Self {
        Self::from_options(BagOptions {
            item_equality: rule,
            item_ordering: Some(ordering),
        })
    }

    pub fn from_options(options: BagOptions<R, O>) -> Self {
        Self {
            rule: options.item_equality,
            ordering: options.item_ordering,
            _item: PhantomData,
        }
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }

    pub fn ordering(&self) -> Option<&O> {
        self.ordering.as_ref()
    }
}

impl<T, R: ItemEquality<T>, O: ItemOrdering<T>> BagEq<T, R, O> {
    fn eq_sorted<C, D>(&self, ordering: &O, x: &C, y: &D) -> bool
    where
        C: Collection<T> + ?Sized,
        D: Collection<T> + ?Sized,
    {
        let mut xs: Vec<&T> = x.items().collect();
        let mut ys: Vec<&T> = y.items().collect();
        if xs.len() != ys.len() {
            return false;
        }
        xs.sort_by(|a, b| ordering.compare(*a, *b));
        ys.sort_by(|a, b| ordering.compare(*a, *b));
        xs.iter()
            .zip(ys.iter())
            .all(|(a, b)| items_equal(&self.rule, *a, *b))
    }
}

impl<T, R: ItemEquality<T>, O: ItemOrdering<T>> CollectionEquality<T> for BagEq<T, R, O> {
    fn eq_collections<C, D>(&self, x: &C, y: &D) -> bool
    where
        C: Collection<T> + ?Sized,
        D: Collection<T> + ?Sized,
    {
        if same_collection(x, y) {
            return true;
        }
        // two sets under the equality they were built with hold every item
        // once, so they are equal bags iff they are equal sets
        if self.rule.is_natural_equality() && x.membership().is_some() && y.membership().is_some()
        {
            trace!("comparing bags as sets");
            return SetEq::<T, &R>::with_rule(&self.rule).eq_collections(x, y);
        }
        if FiniteCountEq::<T>::new().counts_differ(x, y) {
            trace!("bags differ in size");
            return false;
        }
        if let Some(ordering) = &self.ordering {
            trace!("comparing bags by sorting");
            return self.eq_sorted(ordering, x, y);
        }
        let first = ItemCounts::from_items(&self.rule, x.items());
        let second = ItemCounts::from_items(&self.rule, y.items());
        trace!(
            distinct = first.distinct_present(),
            absent = first.absent(),
            "comparing bags by counting"
        );
        first.same_counts(&second)
    }

    fn hash_collection<C>(&self, x: &C) -> u64
    where
        C: Collection<T> + ?Sized,
    {
        let counts = ItemCounts::from_items(&self.rule, x.items());
        let hash = counts.iter().fold(0, |acc, (item, count)| {
            acc ^ (self.rule.hash_item(item) ^ count as u64)
        });
        if counts.absent() > 0 {
            hash ^ (ABSENT_ITEM_HASH ^ counts.absent() as u64)
        } else {
            hash
        }
    }
}

impl<T> Default for BagEq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R: Clone, O: Clone> Clone for BagEq<T, R, O> {
    fn clone(&self) -> Self {
        Self {
            rule: self.rule.clone(),
            ordering: self.ordering.clone(),
            _item: PhantomData,
        }
    }
}

impl<T, R: fmt::Debug, O: fmt::Debug> fmt::Debug for BagEq<T, R, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BagEq")
            .field("rule", &self.rule)
            .field("ordering", &self.ordering)
            .finish()
    }
}
