use std::fmt::Display;

use thiserror::Error as ErrorMacro;

use super::QueryError;

#[derive(ErrorMacro, Debug)]
pub enum CollectionError {
    #[error("The sequence contains no matching element")] EmptySequence(#[from] EmptySequenceError),
    #[error("The index is outside of the collection bounds")] IndexOutOfRange(#[from] IndexOutOfRangeError)
}

#[derive(ErrorMacro, Debug)]
pub struct EmptySequenceError {
    pub operation: &'static str
}

impl Display for EmptySequenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("Cannot take `{}` of an empty sequence.", self.operation))
    }
}

#[derive(ErrorMacro, Debug)]
pub struct IndexOutOfRangeError {
    pub index: usize,
    pub len: usize
}

impl Display for IndexOutOfRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("Index {} is out of range for a collection of {} elements.", self.index, self.len))
    }
}

impl From<EmptySequenceError> for QueryError {
    fn from(value: EmptySequenceError) -> Self {
        CollectionError::from(value).into()
    }
}

impl From<IndexOutOfRangeError> for QueryError {
    fn from(value: IndexOutOfRangeError) -> Self {
        CollectionError::from(value).into()
    }
}
