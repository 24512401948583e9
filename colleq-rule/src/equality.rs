use std::hash::{BuildHasher, BuildHasherDefault, Hash};

use ahash::AHasher;

/// The hash builder [`NaturalEq`] uses unless it's given another one.
///
/// Its keys are fixed for the lifetime of the process, so two rules built
/// independently hash equal items the same.
pub type DefaultHashBuilder = BuildHasherDefault<AHasher>;

/// The hash an absent item contributes.
pub const ABSENT_ITEM_HASH: u64 = 31;

/// A rule that decides when two items are the same, with a matching hash.
///
/// A rule must be an equivalence relation, and items it considers equal must
/// get the same hash. None of this is checked: a rule that breaks it makes
/// every comparer built on it answer wrongly.
pub trait ItemEquality<T: ?Sized> {
    /// Whether two items are equal.
    fn equal(&self, a: &T, b: &T) -> bool;

    /// The hash of an item.
    fn hash_item(&self, item: &T) -> u64;

    /// Whether this item stands for a missing value.
    ///
    /// Comparers count absent items on their own and never pass them to
    /// [`ItemEquality::equal`] or [`ItemEquality::hash_item`]. An absent item
    /// only equals another absent item.
    fn is_absent(&self, _item: &T) -> bool {
        false
    }

    /// Whether this rule agrees with the item type's own `Eq` and `Hash`.
    ///
    /// If it does, an operand that already is a `HashSet` or `BTreeSet` can
    /// be used as it is, without indexing it again.
    fn is_natural_equality(&self) -> bool {
        false
    }
}

impl<T: ?Sized, R: ItemEquality<T> + ?Sized> ItemEquality<T> for &R {
    fn equal(&self, a: &T, b: &T) -> bool {
        (**self).equal(a, b)
    }

    fn hash_item(&self, item: &T) -> u64 {
        (**self).hash_item(item)
    }

    fn is_absent(&self, item: &T) -> bool {
        (**self).is_absent(item)
    }

    fn is_natural_equality(&self) -> bool {
        (**self).is_natural_equality()
    }
}

/// Equality through the item's own `Eq` and `Hash`.
#[derive(Debug, Clone, Default)]
pub struct NaturalEq<S = DefaultHashBuilder> {
    hash_builder: S,
}

impl NaturalEq {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S> NaturalEq<S> {
    /// Use `hash_builder` to hash items.
    ///
    /// Hashes are only comparable between rules whose builders produce the
    /// same hashers.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self { hash_builder }
    }

    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }
}

impl<T: Eq + Hash + ?Sized, S: BuildHasher> ItemEquality<T> for NaturalEq<S> {
    fn equal(&self, a: &T, b: &T) -> bool {
        a == b
    }

    fn hash_item(&self, item: &T) -> u64 {
        self.hash_builder.hash_one(item)
    }

    fn is_natural_equality(&self) -> bool {
        true
    }
}

/// Equality given by a pair of closures.
///
/// ```
/// use colleq_rule::{FnEq, ItemEquality};
///
/// let rule = FnEq::new(
///     |a: &i32, b: &i32| a.rem_euclid(10) == b.rem_euclid(10),
///     |i: &i32| i.rem_euclid(10) as u64,
/// );
/// assert!(rule.equal(&3, &13));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnEq<E, H> {
    equal: E,
    hash: H,
}

impl<E, H> FnEq<E, H> {
    pub fn new(equal: E, hash: H) -> Self {
        Self { equal, hash }
    }
}

impl<T: ?Sized, E, H> ItemEquality<T> for FnEq<E, H>
where
    E: Fn(&T, &T) -> bool,
    H: Fn(&T) -> u64,
{
    fn equal(&self, a: &T, b: &T) -> bool {
        (self.equal)(a, b)
    }

    fn hash_item(&self, item: &T) -> u64 {
        (self.hash)(item)
    }
}

/// Items are equal when the keys derived from them are equal.
///
/// The key is computed again for each comparison and each hash.
///
/// ```
/// use colleq_rule::{ItemEquality, KeyEq};
///
/// let rule = KeyEq::new(|s: &String| s.to_lowercase());
/// assert!(rule.equal(&"Foo".to_string(), &"FOO".to_string()));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct KeyEq<F, S = DefaultHashBuilder> {
    key: F,
    hash_builder: S,
}

impl<F> KeyEq<F> {
    pub fn new(key: F) -> Self {
        Self {
            key,
            hash_builder: DefaultHashBuilder::default(),
        }
    }
}

impl<F, S> KeyEq<F, S> {
    pub fn with_hasher(key: F, hash_builder: S) -> Self {
        Self { key, hash_builder }
    }
}

impl<T: ?Sized, K, F, S> ItemEquality<T> for KeyEq<F, S>
where
    F: Fn(&T) -> K,
    K: Eq + Hash,
    S: BuildHasher,
{
    fn equal(&self, a: &T, b: &T) -> bool {
        (self.key)(a) == (self.key)(b)
    }

    fn hash_item(&self, item: &T) -> u64 {
        self.hash_builder.hash_one((self.key)(item))
    }
}

/// Lifts a rule over `T` to `Option<T>`, where `None` is the absent item.
#[derive(Debug, Clone, Default)]
pub struct Nullable<R = NaturalEq> {
    inner: R,
}

impl<R> Nullable<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<T, R: ItemEquality<T>> ItemEquality<Option<T>> for Nullable<R> {
    fn equal(&self, a: &Option<T>, b: &Option<T>) -> bool {
        match (a, b) {
            (Some(a), Some(b)) => self.inner.equal(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    fn hash_item(&self, item: &Option<T>) -> u64 {
        match item {
            Some(item) => self.inner.hash_item(item),
            None => ABSENT_ITEM_HASH,
        }
    }

    fn is_absent(&self, item: &Option<T>) -> bool {
        item.is_none()
    }

    // None == None and Some(a) == Some(b) iff a == b, which is exactly how
    // Option's own Eq behaves
    fn is_natural_equality(&self) -> bool {
        self.inner.is_natural_equality()
    }
}
