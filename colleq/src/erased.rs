use std::any::{type_name, Any};
use std::fmt;
use std::marker::PhantomData;

use tracing::trace;

use crate::collection::Collection;
use crate::comparer::CollectionEquality;
use crate::error::{Error, Result};
use crate::item::same_collection;

/// A comparer for operands whose types are only known at runtime.
///
/// Operands are accepted as `dyn Any` and must be of the collection type
/// `C` to be compared. An operand of any other type is only equal to
/// itself, and can't be hashed.
///
/// ```
/// use std::any::Any;
///
/// use colleq::{Erased, SetEq};
///
/// let comparer = Erased::<_, Vec<i32>, _>::new(SetEq::new());
/// let a: &dyn Any = &vec![1, 2, 2];
/// let b: &dyn Any = &vec![2, 1];
/// let other: &dyn Any = &"not a list";
/// assert!(comparer.equal(Some(a), Some(b)));
/// assert!(!comparer.equal(Some(a), Some(other)));
/// assert!(comparer.hash(Some(other)).is_err());
/// ```
pub struct Erased<T, C, K> {
    comparer: K,
    _operand: PhantomData<fn(&C, &T)>,
}

impl<T, C, K> Erased<T, C, K>
where
    C: Collection<T> + Any,
    K: CollectionEquality<T>,
{
    pub fn new(comparer: K) -> Self {
        Self {
            comparer,
            _operand: PhantomData,
        }
    }

    pub fn comparer(&self) -> &K {
        &self.comparer
    }

    pub fn equal(&self, x: Option<&dyn Any>, y: Option<&dyn Any>) -> bool {
        let (x, y) = match (x, y) {
            (Some(x), Some(y)) => (x, y),
            (None, None) => return true,
            _ => return false,
        };
        match (x.downcast_ref::<C>(), y.downcast_ref::<C>()) {
            (Some(x), Some(y)) => self.comparer.eq_collections(x, y),
            _ => {
                trace!(expected = type_name::<C>(), "comparing operands of another type");
                // zero-sized values of different types can share an address
                x.type_id() == y.type_id() && same_collection(x, y)
            }
        }
    }

    pub fn hash(&self, x: Option<&dyn Any>) -> Result<u64> {
        let x = x.ok_or(Error::MissingArgument("collection"))?;
        let x = x.downcast_ref::<C>().ok_or(Error::UnexpectedOperand {
            expected: type_name::<C>(),
        })?;
        Ok(self.comparer.hash_collection(x))
    }
}

impl<T, C, K: Clone> Clone for Erased<T, C, K> {
    fn clone(&self) -> Self {
        Self {
            comparer: self.comparer.clone(),
            _operand: PhantomData,
        }
    }
}

impl<T, C, K: fmt::Debug> fmt::Debug for Erased<T, C, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Erased")
            .field("operand", &type_name::<C>())
            .field("comparer", &self.comparer)
            .finish()
    }
}
