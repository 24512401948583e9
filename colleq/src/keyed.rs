use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::bag::BagEq;
use crate::collection::Collection;
use crate::comparer::CollectionEquality;
use crate::list::ListEq;
use crate::set::SetEq;

/// A collection that compares and hashes as a whole, through a comparer.
///
/// This lets a collection be a key in a `HashMap`, or a field of a value
/// type that derives `Eq` and `Hash`.
///
/// ```
/// use std::collections::HashSet;
///
/// use colleq::Keyed;
///
/// let mut seen = HashSet::new();
/// assert!(seen.insert(Keyed::bag(vec![1, 2, 2])));
/// assert!(!seen.insert(Keyed::bag(vec![2, 1, 2])));
/// assert!(seen.insert(Keyed::bag(vec![1, 2])));
/// ```
pub struct Keyed<T, C, K> {
    collection: C,
    comparer: K,
    _item: PhantomData<fn(&T)>,
}

impl<T, C: Collection<T>> Keyed<T, C, ListEq<T>> {
    pub fn list(collection: C) -> Self {
        Self::new(collection, ListEq::new())
    }
}

impl<T, C: Collection<T>> Keyed<T, C, SetEq<T>> {
    pub fn set(collection: C) -> Self {
        Self::new(collection, SetEq::new())
    }
}

impl<T, C: Collection<T>> Keyed<T, C, BagEq<T>> {
    pub fn bag(collection: C) -> Self {
        Self::new(collection, BagEq::new())
    }
}

impl<T, C, K> Keyed<T, C, K> {
    pub fn new(collection: C, comparer: K) -> Self {
        Self {
            collection,
            comparer,
            _item: PhantomData,
        }
    }

    pub fn get(&self) -> &C {
        &self.collection
    }

    pub fn comparer(&self) -> &K {
        &self.comparer
    }

    pub fn into_inner(self) -> C {
        self.collection
    }
}

impl<T, C: Collection<T>, K: CollectionEquality<T>> PartialEq for Keyed<T, C, K> {
    fn eq(&self, other: &Self) -> bool {
        self.comparer.eq_collections(&self.collection, &other.collection)
    }
}

impl<T, C: Collection<T>, K: CollectionEquality<T>> Eq for Keyed<T, C, K> {}

impl<T, C: Collection<T>, K: CollectionEquality<T>> Hash for Keyed<T, C, K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.comparer.hash_collection(&self.collection));
    }
}

impl<T, C: Clone, K: Clone> Clone for Keyed<T, C, K> {
    fn clone(&self) -> Self {
        Self::new(self.collection.clone(), self.comparer.clone())
    }
}

impl<T, C: fmt::Debug, K> fmt::Debug for Keyed<T, C, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Keyed").field(&self.collection).finish()
    }
}
