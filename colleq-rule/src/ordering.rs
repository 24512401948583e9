use std::cmp::Ordering;

/// A total order over items.
///
/// Bag comparison uses it to sort both operands and compare them position by
/// position. The order must agree with the equality rule it's paired with:
/// items the order calls `Equal` must be equal under the rule, and the other
/// way round. This isn't checked.
///
/// Partial orders are not supported. Sorting needs every pair of items to
/// be comparable; with incomparable items, equal bags can be reported as
/// unequal.
pub trait ItemOrdering<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, O: ItemOrdering<T> + ?Sized> ItemOrdering<T> for &O {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }
}

/// The item's own `Ord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrd;

impl<T: Ord + ?Sized> ItemOrdering<T> for NaturalOrd {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// An order given by a closure.
#[derive(Debug, Clone, Copy)]
pub struct FnOrd<F>(F);

impl<F> FnOrd<F> {
    pub fn new(compare: F) -> Self {
        Self(compare)
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> ItemOrdering<T> for FnOrd<F> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

/// No order is known.
///
/// This type has no values. A comparer whose ordering slot is `Unordered`
/// can only ever hold `None` there, so it never sorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unordered {}

impl<T: ?Sized> ItemOrdering<T> for Unordered {
    fn compare(&self, _a: &T, _b: &T) -> Ordering {
        match *self {}
    }
}
