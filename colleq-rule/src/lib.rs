mod equality;
mod ordering;

pub use equality::{
    DefaultHashBuilder, FnEq, ItemEquality, KeyEq, NaturalEq, Nullable, ABSENT_ITEM_HASH,
};
pub use ordering::{FnOrd, ItemOrdering, NaturalOrd, Unordered};
