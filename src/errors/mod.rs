use thiserror::Error as ErrorMacro;

use self::{collection_error::CollectionError, filter_error::FilterError};

pub mod collection_error;
pub mod filter_error;

#[derive(ErrorMacro, Debug)]
pub enum QueryError {
    #[error("Error while querying a collection")] Collection(#[from] CollectionError),
    #[error("Error while building a filter")] Filter(#[from] FilterError),
}
