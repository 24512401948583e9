//! Item-level helpers shared by the comparers.
//!
//! These apply an [`ItemEquality`] rule safely in the presence of absent
//! items, and count how often each distinct item occurs in a collection.

use ahash::{HashMap, HashMapExt};

use colleq_rule::{ItemEquality, ABSENT_ITEM_HASH};

/// Starting value of the ordered hash fold.
pub(crate) const ORDERED_HASH_SEED: u64 = 19;
const ORDERED_HASH_FACTOR: u64 = 31;

/// Compare two items under `rule`. Absent items only equal absent items.
pub fn items_equal<T, R: ItemEquality<T>>(rule: &R, a: &T, b: &T) -> bool {
    match (rule.is_absent(a), rule.is_absent(b)) {
        (false, false) => rule.equal(a, b),
        (true, true) => true,
        _ => false,
    }
}

/// Hash an item under `rule`. Absent items hash to [`ABSENT_ITEM_HASH`].
pub fn item_hash<T, R: ItemEquality<T>>(rule: &R, item: &T) -> u64 {
    if rule.is_absent(item) {
        ABSENT_ITEM_HASH
    } else {
        rule.hash_item(item)
    }
}

/// Fold the next item hash into a hash where position matters.
pub(crate) fn combine_ordered(acc: u64, item_hash: u64) -> u64 {
    acc.wrapping_mul(ORDERED_HASH_FACTOR).wrapping_add(item_hash)
}

/// Whether both references point at the same collection.
pub(crate) fn same_collection<C: ?Sized, D: ?Sized>(x: &C, y: &D) -> bool {
    std::ptr::addr_eq(x as *const C, y as *const D)
}

/// How often each distinct item occurs in a collection.
///
/// Items are grouped by the hash the rule gives them and told apart within a
/// group by the rule's equality. Absent items never become keys; they are
/// counted separately.
///
/// The counts borrow the items they were built from.
pub struct ItemCounts<'a, T, R> {
    rule: &'a R,
    groups: HashMap<u64, Vec<(&'a T, usize)>>,
    distinct: usize,
    absent: usize,
}

impl<'a, T, R: ItemEquality<T>> ItemCounts<'a, T, R> {
    pub fn new(rule: &'a R) -> Self {
        Self {
            rule,
            groups: HashMap::new(),
            distinct: 0,
            absent: 0,
        }
    }

    pub fn from_items<I>(rule: &'a R, items: I) -> Self
    where
        I: IntoIterator<Item = &'a T>,
    {
        let mut counts = Self::new(rule);
        for item in items {
            counts.add(item);
        }
        counts
    }

    /// Count one more occurrence of `item`, returning its new count.
    pub fn add(&mut self, item: &'a T) -> usize {
        let rule = self.rule;
        if rule.is_absent(item) {
            self.absent += 1;
            return self.absent;
        }
        let group = self.groups.entry(rule.hash_item(item)).or_default();
        match group.iter_mut().find(|entry| rule.equal(entry.0, item)) {
            Some(entry) => {
                entry.1 += 1;
                entry.1
            }
            None => {
                group.push((item, 1));
                self.distinct += 1;
                1
            }
        }
    }

    /// How often `item` was seen; zero if never.
    pub fn count(&self, item: &T) -> usize {
        if self.rule.is_absent(item) {
            return self.absent;
        }
        self.groups
            .get(&self.rule.hash_item(item))
            .and_then(|group| group.iter().find(|entry| self.rule.equal(entry.0, item)))
            .map_or(0, |entry| entry.1)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.count(item) > 0
    }

    /// The number of distinct present items.
    pub fn distinct_present(&self) -> usize {
        self.distinct
    }

    /// The number of absent items seen.
    pub fn absent(&self) -> usize {
        self.absent
    }

    /// The number of distinct items, where all absent items together count
    /// as one.
    pub fn distinct_len(&self) -> usize {
        self.distinct + usize::from(self.absent > 0)
    }

    /// The distinct present items with their counts, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a T, usize)> + '_ {
        self.groups.values().flatten().copied()
    }

    /// Whether both count the same items the same number of times.
    pub fn same_counts(&self, other: &ItemCounts<'_, T, R>) -> bool {
        self.absent == other.absent
            && self.distinct == other.distinct
            && self.iter().all(|(item, count)| other.count(item) == count)
    }
}
