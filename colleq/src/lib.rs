//! Structural equality and hashing for collections.
//!
//! Three comparers answer whether two collections hold the same items, each
//! with its own idea of "the same":
//!
//! - [`ListEq`]: same items in the same order.
//! - [`SetEq`]: same distinct items; order and repetition don't matter.
//! - [`BagEq`]: same items the same number of times, in any order.
//!
//! Each also hashes a collection consistently with its equality. Items are
//! compared with an [`ItemEquality`] rule, their own `Eq` and `Hash` unless
//! another is given.
//!
//! ```
//! use colleq::{BagEq, CollectionEquality, ListEq, SetEq};
//!
//! let a = vec!["A", "B", "B"];
//! let b = vec!["B", "A"];
//! assert!(!ListEq::new().equal(Some(&a), Some(&b)));
//! assert!(SetEq::new().equal(Some(&a), Some(&b)));
//! assert!(!BagEq::new().equal(Some(&a), Some(&b)));
//! ```
mod bag;
mod collection;
mod comparer;
mod count;
mod erased;
mod error;
mod ext;
pub mod item;
mod keyed;
mod list;
mod set;

pub use bag::{BagEq, BagOptions};
pub use collection::{Collection, Membership, Uncounted};
pub use comparer::CollectionEquality;
pub use count::FiniteCountEq;
pub use erased::Erased;
pub use error::{Error, Result};
pub use ext::CollectionEqExt;
pub use keyed::Keyed;
pub use list::ListEq;
pub use set::SetEq;

pub use colleq_rule::{
    DefaultHashBuilder, FnEq, FnOrd, ItemEquality, ItemOrdering, KeyEq, NaturalEq, NaturalOrd,
    Nullable, Unordered, ABSENT_ITEM_HASH,
};
