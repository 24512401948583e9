use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A collection that the operation needs was not given.
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),
    /// A type-erased operand was not of the collection type the comparer
    /// works with.
    #[error("Operand is not a {expected}")]
    UnexpectedOperand { expected: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
