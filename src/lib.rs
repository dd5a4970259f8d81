#[warn(clippy::pedantic)]
mod errors;
mod utils;
mod collection;
mod filter;

pub use collection::{subset_equals, Collection, CollectionGroups, SortDirection};
pub use errors::{collection_error::{CollectionError, EmptySequenceError, IndexOutOfRangeError}, filter_error::{FilterError, InvalidPropertyKeyError}, QueryError};
pub use filter::{AdvancedFilter, AdvancedFilterBuilder, FilterInput, PropertyPath, RangeBounds};
pub use utils::QueryResult;
