use std::fmt;
use std::marker::PhantomData;

use colleq_rule::{ItemEquality, NaturalEq, ABSENT_ITEM_HASH};
use tracing::trace;

use crate::collection::{Collection, Membership};
use crate::comparer::CollectionEquality;
use crate::item::{item_hash, same_collection, ItemCounts};

/// Set equality: the same distinct items, regardless of order and of how
/// often each occurs.
///
/// ```
/// use colleq::{CollectionEquality, SetEq};
///
/// let comparer = SetEq::new();
/// assert!(comparer.equal(Some(&vec!["A", "B", "B"]), Some(&vec!["B", "A"])));
/// ```
pub struct SetEq<T, R = NaturalEq> {
    rule: R,
    _item: PhantomData<fn(&T)>,
}

impl<T> SetEq<T> {
    pub fn new() -> Self {
        Self::with_rule(NaturalEq::new())
    }
}

impl<T, R> SetEq<T, R> {
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

/// The distinct items of one operand.
enum Members<'a, T, R> {
    // the operand is a set under the same equality; use it directly
    Indexed(&'a dyn Membership<T>),
    Counted(ItemCounts<'a, T, R>),
}

impl<T, R: ItemEquality<T>> Members<'_, T, R> {
    fn contains(&self, item: &T) -> bool {
        match self {
            Members::Indexed(membership) => membership.contains_item(item),
            Members::Counted(counts) => counts.contains(item),
        }
    }

    fn distinct_len(&self) -> usize {
        match self {
            Members::Indexed(membership) => membership.distinct_count(),
            Members::Counted(counts) => counts.distinct_len(),
        }
    }
}

impl<T, R: ItemEquality<T>> SetEq<T, R> {
    fn members<'a, C>(&'a self, x: &'a C) -> Members<'a, T, R>
    where
        C: Collection<T> + ?Sized,
    {
        match x.membership() {
            Some(membership) if self.rule.is_natural_equality() => Members::Indexed(membership),
            _ => Members::Counted(ItemCounts::from_items(&self.rule, x.items())),
        }
    }
}

impl<T, R: ItemEquality<T>> CollectionEquality<T> for SetEq<T, R> {
    fn eq_collections<C, D>(&self, x: &C, y: &D) -> bool
    where
        C: Collection<T> + ?Sized,
        D: Collection<T> + ?Sized,
    {
        if same_collection(x, y) {
            return true;
        }
        let first = self.members(x);
        let second = self.members(y);
        if first.distinct_len() != second.distinct_len() {
            trace!(
                first = first.distinct_len(),
                second = second.distinct_len(),
                "sets differ in distinct items"
            );
            return false;
        }
        // as many distinct items on both sides, so if every item of the
        // second is in the first, nothing in the first is left over
        y.items().all(|item| first.contains(item))
    }

    fn hash_collection<C>(&self, x: &C) -> u64
    where
        C: Collection<T> + ?Sized,
    {
        match self.members(x) {
            // the items of a set are already distinct
            Members::Indexed(_) => x
                .items()
                .fold(0, |acc, item| acc ^ item_hash(&self.rule, item)),
            Members::Counted(counts) => {
                let hash = counts
                    .iter()
                    .fold(0, |acc, (item, _)| acc ^ self.rule.hash_item(item));
                if counts.absent() > 0 {
                    hash ^ ABSENT_ITEM_HASH
                } else {
                    hash
                }
            }
        }
    }
}

impl<T> Default for SetEq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R: Clone> Clone for SetEq<T, R> {
    fn clone(&self) -> Self {
        Self::with_rule(self.rule.clone())
    }
}

impl<T, R: fmt::Debug> fmt::Debug for SetEq<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetEq").field("rule", &self.rule).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::{BTreeSet, HashSet};

    use colleq_rule::{FnEq, KeyEq, Nullable};
    use rstest::rstest;

    use crate::collection::Uncounted;
    use crate::error::Error;

    #[rstest]
    #[case(vec!["A", "B", "B"], vec!["B", "A"], true)]
    #[case(vec!["A", "B"], vec!["B", "A"], true)]
    #[case(vec!["A", "B"], vec!["A", "C"], false)]
    #[case(vec!["A", "B"], vec!["A"], false)]
    #[case(vec!["A", "A", "A"], vec!["A"], true)]
    #[case(vec![], vec![], true)]
    #[case(vec!["A"], vec![], false)]
    fn test_set_equal(#[case] a: Vec<&str>, #[case] b: Vec<&str>, #[case] expected: bool) {
        let comparer = SetEq::new();
        assert_eq!(comparer.equal(Some(&a), Some(&b)), expected);
        assert_eq!(comparer.equal(Some(&b), Some(&a)), expected);
    }

    #[test]
    fn test_missing_operands() {
        let comparer = SetEq::<&str>::new();
        assert!(comparer.equal(None::<&Vec<&str>>, None::<&Vec<&str>>));
        assert!(!comparer.equal(None::<&Vec<&str>>, Some(&vec![])));
        assert_eq!(
            comparer.hash(None::<&Vec<&str>>),
            Err(Error::MissingArgument("collection"))
        );
    }

    #[test]
    fn test_hash_ignores_order_and_duplicates() {
        let comparer = SetEq::new();
        let a = comparer.hash(Some(&vec!["A", "B"])).unwrap();
        let b = comparer.hash(Some(&vec!["B", "A"])).unwrap();
        let c = comparer.hash(Some(&vec!["A", "A", "B"])).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_hash_set_operands_are_used_directly() {
        let comparer = SetEq::new();
        let set: HashSet<&str> = ["A", "B"].into_iter().collect();
        let tree: BTreeSet<&str> = ["B", "A"].into_iter().collect();
        let list = vec!["B", "A", "A"];
        assert!(comparer.eq_collections(&set, &tree));
        assert!(comparer.eq_collections(&set, &list));
        assert!(comparer.eq_collections(&list, &set));
        assert!(!comparer.eq_collections(&set, &vec!["A"]));
        assert_eq!(comparer.hash_collection(&set), comparer.hash_collection(&list));
        assert_eq!(comparer.hash_collection(&tree), comparer.hash_collection(&list));
    }

    #[test]
    fn test_hash_set_is_reindexed_under_custom_rule() {
        let comparer = SetEq::with_rule(KeyEq::new(|s: &String| s.to_lowercase()));
        let set: HashSet<String> = ["a".to_string(), "A".to_string()].into_iter().collect();
        // two members of the set are one item under the rule
        assert!(comparer.eq_collections(&set, &vec!["a".to_string()]));
        assert_eq!(
            comparer.hash_collection(&set),
            comparer.hash_collection(&vec!["A".to_string()])
        );
    }

    #[test]
    fn test_absent_items_are_one_member() {
        let comparer = SetEq::with_rule(Nullable::new(NaturalEq::new()));
        let a = vec![None, Some("A"), None];
        let b = vec![Some("A"), None];
        let c = vec![Some("A")];
        assert!(comparer.eq_collections(&a, &b));
        assert!(!comparer.eq_collections(&a, &c));
        assert_eq!(comparer.hash_collection(&a), comparer.hash_collection(&b));
    }

    #[test]
    fn test_absent_items_with_set_operand() {
        let comparer = SetEq::with_rule(Nullable::new(NaturalEq::new()));
        let set: HashSet<Option<&str>> = [None, Some("A")].into_iter().collect();
        let list = vec![Some("A"), None, None];
        assert!(comparer.eq_collections(&set, &list));
        assert_eq!(comparer.hash_collection(&set), comparer.hash_collection(&list));
    }

    #[test]
    fn test_uncounted_operands() {
        let comparer = SetEq::new();
        let a = Uncounted(vec![1, 2, 2, 3]);
        let b = Uncounted(vec![3, 2, 1]);
        assert!(comparer.eq_collections(&a, &b));
    }

    #[test]
    fn test_colliding_hashes() {
        let comparer = SetEq::with_rule(FnEq::new(|a: &i32, b: &i32| a == b, |_: &i32| 1_u64));
        assert!(comparer.eq_collections(&vec![1, 2, 3], &vec![3, 2, 1, 1]));
        assert!(!comparer.eq_collections(&vec![1, 2, 3], &vec![3, 2, 4]));
    }
}
