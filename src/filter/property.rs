use std::{fmt::{Display, Write}, str::FromStr};

use serde::Serialize;
use smallvec::SmallVec;

use crate::errors::filter_error::InvalidPropertyKeyError;

/// An ordered list of field-name segments addressing a possibly nested
/// field of the target record schema.
///
/// Keys address nested fields with the `|` separator: `"sourceFile|assetIds"`
/// becomes the path `["sourceFile", "assetIds"]`. Serializes as a plain
/// array of segments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PropertyPath(SmallVec<[String; 2]>);

impl PropertyPath {
    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for PropertyPath {
    fn from(key: &str) -> PropertyPath {
        PropertyPath(key.split('|').map(str::to_owned).collect())
    }
}

impl From<String> for PropertyPath {
    fn from(key: String) -> PropertyPath {
        PropertyPath::from(key.as_str())
    }
}

impl FromStr for PropertyPath {
    type Err = InvalidPropertyKeyError;

    /// The validating counterpart of the `From` conversions: rejects keys
    /// that would produce an empty segment.
    fn from_str(key: &str) -> Result<PropertyPath, Self::Err> {
        if key.is_empty() || key.split('|').any(str::is_empty) {
            return Err(InvalidPropertyKeyError { key: key.to_owned() });
        }
        Ok(PropertyPath::from(key))
    }
}

impl Display for PropertyPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, segment) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_char('.')?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::PropertyPath;

    #[test]
    fn keys_split_on_the_pipe_separator() {
        assert_eq!(PropertyPath::from("name").segments(), ["name"]);
        assert_eq!(PropertyPath::from("sourceFile|assetIds").segments(), ["sourceFile", "assetIds"]);
    }

    #[test]
    fn parsing_rejects_empty_segments() {
        assert!(PropertyPath::from_str("").is_err());
        assert!(PropertyPath::from_str("a||b").is_err());
        assert_eq!(PropertyPath::from_str("a|b").unwrap(), PropertyPath::from("a|b"));
    }

    #[test]
    fn display_joins_segments_with_dots() {
        assert_eq!(PropertyPath::from("sourceFile|assetIds").to_string(), "sourceFile.assetIds");
    }
}
