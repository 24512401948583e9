use crate::collection::Collection;
use crate::error::{Error, Result};

/// A notion of equality between whole collections, with a matching hash.
///
/// Collections that are equal under a comparer get the same hash from it.
pub trait CollectionEquality<T> {
    /// Compare two collections that are both present.
    fn eq_collections<C, D>(&self, x: &C, y: &D) -> bool
    where
        C: Collection<T> + ?Sized,
        D: Collection<T> + ?Sized;

    /// Hash a collection that is present.
    fn hash_collection<C>(&self, x: &C) -> u64
    where
        C: Collection<T> + ?Sized;

    /// Compare two collections, either of which may be missing.
    ///
    /// Two missing collections are equal; a missing collection never equals
    /// a present one, not even an empty one.
    fn equal<C, D>(&self, x: Option<&C>, y: Option<&D>) -> bool
    where
        C: Collection<T> + ?Sized,
        D: Collection<T> + ?Sized,
    {
        match (x, y) {
            (Some(x), Some(y)) => self.eq_collections(x, y),
            (None, None) => true,
            _ => false,
        }
    }

    /// Hash a collection.
    ///
    /// Fails with [`Error::MissingArgument`] if the collection is missing.
    fn hash<C>(&self, x: Option<&C>) -> Result<u64>
    where
        C: Collection<T> + ?Sized,
    {
        let x = x.ok_or(Error::MissingArgument("collection"))?;
        Ok(self.hash_collection(x))
    }
}
