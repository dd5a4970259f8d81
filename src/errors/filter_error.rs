use std::fmt::Display;

use thiserror::Error as ErrorMacro;

use super::QueryError;

#[derive(ErrorMacro, Debug)]
pub enum FilterError {
    #[error("The filter property key cannot be used as a property path")] InvalidPropertyKey(#[from] InvalidPropertyKeyError)
}

#[derive(ErrorMacro, Debug)]
pub struct InvalidPropertyKeyError {
    pub key: String
}

impl Display for InvalidPropertyKeyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("Property key \"{}\" contains an empty segment.", self.key))
    }
}

impl From<InvalidPropertyKeyError> for QueryError {
    fn from(value: InvalidPropertyKeyError) -> Self {
        FilterError::from(value).into()
    }
}
