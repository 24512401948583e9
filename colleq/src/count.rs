use std::fmt;
use std::marker::PhantomData;

use crate::collection::Collection;
use crate::comparer::CollectionEquality;
use crate::item::same_collection;

/// Considers collections equal when they hold the same number of items.
///
/// On its own this is rarely the equality you want. The list and bag
/// comparers use [`FiniteCountEq::counts_differ`] as a shortcut: if both
/// sizes are known up front and they differ, nothing else needs looking at.
pub struct FiniteCountEq<T> {
    _item: PhantomData<fn(&T)>,
}

impl<T> FiniteCountEq<T> {
    pub fn new() -> Self {
        Self { _item: PhantomData }
    }

    /// Whether the sizes of the two collections are both known without
    /// iterating, and differ.
    ///
    /// When either size isn't known this says `false`: it never claims a
    /// difference it can't see.
    pub fn counts_differ<C, D>(&self, x: &C, y: &D) -> bool
    where
        C: Collection<T> + ?Sized,
        D: Collection<T> + ?Sized,
    {
        match (x.finite_count(), y.finite_count()) {
            (Some(x), Some(y)) => x != y,
            _ => false,
        }
    }

    fn count<C: Collection<T> + ?Sized>(x: &C) -> usize {
        x.finite_count().unwrap_or_else(|| x.items().count())
    }
}

impl<T> CollectionEquality<T> for FiniteCountEq<T> {
    // a size that isn't known up front is found by counting
    fn eq_collections<C, D>(&self, x: &C, y: &D) -> bool
    where
        C: Collection<T> + ?Sized,
        D: Collection<T> + ?Sized,
    {
        same_collection(x, y) || Self::count(x) == Self::count(y)
    }

    fn hash_collection<C>(&self, x: &C) -> u64
    where
        C: Collection<T> + ?Sized,
    {
        Self::count(x) as u64
    }
}

impl<T> Default for FiniteCountEq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for FiniteCountEq<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for FiniteCountEq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FiniteCountEq").finish()
    }
}
