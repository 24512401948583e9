use std::collections::{BTreeSet, BinaryHeap, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;
use std::sync::Arc;

/// A finite collection of items that can be iterated as often as needed.
///
/// Comparers only need [`Collection::items`]. The other two methods expose
/// capabilities that let them skip work; implement them when they can be
/// answered without iterating.
pub trait Collection<T> {
    /// The items, in the collection's own order.
    fn items<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a;

    /// The number of items, if it's known without iterating.
    fn finite_count(&self) -> Option<usize> {
        None
    }

    /// The collection seen as a set of distinct items under the item type's
    /// own equality, if it is one.
    fn membership(&self) -> Option<&dyn Membership<T>> {
        None
    }
}

/// A collection that holds each item at most once and can look items up
/// without a scan.
pub trait Membership<T> {
    fn contains_item(&self, item: &T) -> bool;

    fn distinct_count(&self) -> usize;
}

impl<T: Eq + Hash, S: BuildHasher> Membership<T> for HashSet<T, S> {
    fn contains_item(&self, item: &T) -> bool {
        self.contains(item)
    }

    fn distinct_count(&self) -> usize {
        self.len()
    }
}

impl<T: Ord> Membership<T> for BTreeSet<T> {
    fn contains_item(&self, item: &T) -> bool {
        self.contains(item)
    }

    fn distinct_count(&self) -> usize {
        self.len()
    }
}

impl<T> Collection<T> for [T] {
    fn items<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }

    fn finite_count(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T, const N: usize> Collection<T> for [T; N] {
    fn items<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }

    fn finite_count(&self) -> Option<usize> {
        Some(N)
    }
}

impl<T> Collection<T> for Vec<T> {
    fn items<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }

    fn finite_count(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> Collection<T> for VecDeque<T> {
    fn items<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }

    fn finite_count(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> Collection<T> for LinkedList<T> {
    fn items<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }

    fn finite_count(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> Collection<T> for BinaryHeap<T> {
    fn items<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }

    fn finite_count(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T: Eq + Hash, S: BuildHasher> Collection<T> for HashSet<T, S> {
    fn items<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }

    fn finite_count(&self) -> Option<usize> {
        Some(self.len())
    }

    fn membership(&self) -> Option<&dyn Membership<T>> {
        Some(self)
    }
}

impl<T: Ord> Collection<T> for BTreeSet<T> {
    fn items<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }

    fn finite_count(&self) -> Option<usize> {
        Some(self.len())
    }

    fn membership(&self) -> Option<&dyn Membership<T>> {
        Some(self)
    }
}

// smart pointers and references see through to what they point at

impl<T, C: Collection<T> + ?Sized> Collection<T> for &C {
    fn items<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        (**self).items()
    }

    fn finite_count(&self) -> Option<usize> {
        (**self).finite_count()
    }

    fn membership(&self) -> Option<&dyn Membership<T>> {
        (**self).membership()
    }
}

impl<T, C: Collection<T> + ?Sized> Collection<T> for Box<C> {
    fn items<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        (**self).items()
    }

    fn finite_count(&self) -> Option<usize> {
        (**self).finite_count()
    }

    fn membership(&self) -> Option<&dyn Membership<T>> {
        (**self).membership()
    }
}

impl<T, C: Collection<T> + ?Sized> Collection<T> for Rc<C> {
    fn items<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        (**self).items()
    }

    fn finite_count(&self) -> Option<usize> {
        (**self).finite_count()
    }

    fn membership(&self) -> Option<&dyn Membership<T>> {
        (**self).membership()
    }
}

impl<T, C: Collection<T> + ?Sized> Collection<T> for Arc<C> {
    fn items<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        (**self).items()
    }

    fn finite_count(&self) -> Option<usize> {
        (**self).finite_count()
    }

    fn membership(&self) -> Option<&dyn Membership<T>> {
        (**self).membership()
    }
}

/// Hides the count and the set view of a collection, so comparers can only
/// iterate it.
///
/// This is how a lazily produced sequence looks to a comparer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Uncounted<C>(pub C);

impl<T, C: Collection<T>> Collection<T> for Uncounted<C> {
    fn items<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.0.items()
    }
}
