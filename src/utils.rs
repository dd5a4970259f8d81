use crate::errors::QueryError;

pub type QueryResult<T> = Result<T, QueryError>;
