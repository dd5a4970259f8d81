use std::fmt::{Display, Write};

use serde::Serialize;
use serde_json::{Number, Value};

mod builder; pub use builder::{AdvancedFilterBuilder, RangeBounds};
mod input; pub use input::FilterInput;
mod property; pub use property::PropertyPath;

/// A single node of the nested filter tree understood by the search
/// backend's filter endpoint.
///
/// Serialization produces the backend's wire format verbatim: externally
/// tagged camelCase nodes, the property path as an array of segments, and
/// absent range bounds omitted from the node.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AdvancedFilter {
    Equals {
        property: PropertyPath,
        value: Value
    },
    In {
        property: PropertyPath,
        values: Value
    },
    Range {
        property: PropertyPath,
        #[serde(skip_serializing_if = "Option::is_none")]
        gte: Option<Number>,
        #[serde(skip_serializing_if = "Option::is_none")]
        gt: Option<Number>,
        #[serde(skip_serializing_if = "Option::is_none")]
        lte: Option<Number>,
        #[serde(skip_serializing_if = "Option::is_none")]
        lt: Option<Number>
    },
    Prefix {
        property: PropertyPath,
        value: Value
    },
    Exists {
        property: PropertyPath
    },
    ContainsAny {
        property: PropertyPath,
        values: Vec<Value>
    },
    ContainsAll {
        property: PropertyPath,
        values: Vec<Value>
    },
    Search {
        property: PropertyPath,
        value: String
    },
    And(Vec<AdvancedFilter>),
    Or(Vec<AdvancedFilter>),
    Not(Box<AdvancedFilter>)
}

impl AdvancedFilter {
    /// Flattens `and`/`or` nodes into same-kind parents, unwraps single-child
    /// combinators and cancels double negation. The set of records matched by
    /// the tree is unchanged.
    pub fn simplify(self) -> AdvancedFilter {
        match self {
            AdvancedFilter::And(filters) => collapse(flatten(filters, is_and), AdvancedFilter::And),
            AdvancedFilter::Or(filters) => collapse(flatten(filters, is_or), AdvancedFilter::Or),
            AdvancedFilter::Not(term) => match (*term).simplify() {
                AdvancedFilter::Not(cancelled) => *cancelled,
                term => AdvancedFilter::Not(Box::new(term))
            },
            leaf => leaf
        }
    }
}

fn is_and(filter: &AdvancedFilter) -> bool {
    matches!(filter, AdvancedFilter::And(_))
}

fn is_or(filter: &AdvancedFilter) -> bool {
    matches!(filter, AdvancedFilter::Or(_))
}

fn flatten(filters: Vec<AdvancedFilter>, same_kind: fn(&AdvancedFilter) -> bool) -> Vec<AdvancedFilter> {
    let mut flattened = Vec::with_capacity(filters.len());
    for filter in filters {
        let filter = filter.simplify();
        if same_kind(&filter) {
            match filter {
                AdvancedFilter::And(inner) | AdvancedFilter::Or(inner) => flattened.extend(inner),
                _ => unreachable!()
            }
        } else {
            flattened.push(filter);
        }
    }
    flattened
}

fn collapse(mut filters: Vec<AdvancedFilter>, combinator: fn(Vec<AdvancedFilter>) -> AdvancedFilter) -> AdvancedFilter {
    if filters.len() == 1 {
        filters.remove(0)
    } else {
        combinator(filters)
    }
}

impl Display for AdvancedFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdvancedFilter::Equals { property, value } => {
                f.write_fmt(format_args!("{property} == {value}"))
            },
            AdvancedFilter::In { property, values } => {
                f.write_fmt(format_args!("{property} IN {values}"))
            },
            AdvancedFilter::Range { property, gte, gt, lte, lt } => {
                let mut any_written = false;
                for (symbol, bound) in [(">=", gte), (">", gt), ("<=", lte), ("<", lt)] {
                    if let Some(bound) = bound {
                        if any_written {
                            f.write_str(" AND ")?;
                        }
                        f.write_fmt(format_args!("{property} {symbol} {bound}"))?;
                        any_written = true;
                    }
                }
                Ok(())
            },
            AdvancedFilter::Prefix { property, value } => {
                f.write_fmt(format_args!("{property} PREFIX {value}"))
            },
            AdvancedFilter::Exists { property } => {
                f.write_fmt(format_args!("{property} EXISTS"))
            },
            AdvancedFilter::ContainsAny { property, values } => {
                f.write_fmt(format_args!("{property} CONTAINS ANY "))?;
                write_values(f, values)
            },
            AdvancedFilter::ContainsAll { property, values } => {
                f.write_fmt(format_args!("{property} CONTAINS ALL "))?;
                write_values(f, values)
            },
            AdvancedFilter::Search { property, value } => {
                f.write_fmt(format_args!("{property} SEARCH \"{value}\""))
            },
            AdvancedFilter::And(filters) => write_combinator(f, filters, " AND "),
            AdvancedFilter::Or(filters) => write_combinator(f, filters, " OR "),
            AdvancedFilter::Not(term) => {
                f.write_str("NOT (")?;
                term.fmt(f)?;
                f.write_char(')')
            }
        }
    }
}

fn write_combinator(f: &mut std::fmt::Formatter<'_>, filters: &[AdvancedFilter], separator: &str) -> std::fmt::Result {
    for (index, filter) in filters.iter().enumerate() {
        if index > 0 {
            f.write_str(separator)?;
        }
        match filter {
            AdvancedFilter::And(_) | AdvancedFilter::Or(_) => {
                f.write_char('(')?;
                filter.fmt(f)?;
                f.write_char(')')?;
            },
            _ => filter.fmt(f)?,
        }
    }
    Ok(())
}

fn write_values(f: &mut std::fmt::Formatter<'_>, values: &[Value]) -> std::fmt::Result {
    f.write_char('[')?;
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        value.fmt(f)?;
    }
    f.write_char(']')
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{AdvancedFilter, PropertyPath};

    fn equals(key: &str, value: i32) -> AdvancedFilter {
        AdvancedFilter::Equals {
            property: PropertyPath::from(key),
            value: json!(value)
        }
    }

    #[test]
    fn display_renders_nested_combinators_with_parentheses() {
        let filter = AdvancedFilter::And(vec![
            equals("a", 1),
            AdvancedFilter::Or(vec![equals("b", 2), equals("c", 3)])
        ]);

        assert_eq!(filter.to_string(), "a == 1 AND (b == 2 OR c == 3)");
    }

    #[test]
    fn display_renders_leaves() {
        let filter = AdvancedFilter::And(vec![
            AdvancedFilter::Prefix {
                property: PropertyPath::from("name"),
                value: json!("report")
            },
            AdvancedFilter::ContainsAny {
                property: PropertyPath::from("sourceFile|assetIds"),
                values: vec![json!(1), json!(2)]
            },
            AdvancedFilter::Range {
                property: PropertyPath::from("size"),
                gte: Some(1.into()),
                gt: None,
                lte: None,
                lt: Some(5.into())
            }
        ]);

        assert_eq!(
            filter.to_string(),
            "name PREFIX \"report\" AND sourceFile.assetIds CONTAINS ANY [1, 2] AND size >= 1 AND size < 5"
        );
    }

    #[test]
    fn simplify_cancels_double_negation() {
        let filter = AdvancedFilter::Not(Box::new(AdvancedFilter::Not(Box::new(equals("a", 1)))));

        assert_eq!(filter.to_string(), "NOT (NOT (a == 1))");
        assert_eq!(filter.simplify().to_string(), "a == 1");
    }

    #[test]
    fn simplify_flattens_nested_same_kind_combinators() {
        let filter = AdvancedFilter::And(vec![
            equals("a", 1),
            AdvancedFilter::And(vec![equals("b", 2), equals("c", 3)])
        ]);

        assert_eq!(filter.to_string(), "a == 1 AND (b == 2 AND c == 3)");
        assert_eq!(filter.simplify().to_string(), "a == 1 AND b == 2 AND c == 3");
    }

    #[test]
    fn simplify_keeps_mixed_combinators_nested() {
        let filter = AdvancedFilter::And(vec![
            equals("a", 1),
            AdvancedFilter::Or(vec![equals("b", 2), equals("c", 3)])
        ]);

        assert_eq!(filter.clone().simplify(), filter);
    }

    #[test]
    fn simplify_unwraps_single_child_combinators() {
        let filter = AdvancedFilter::Or(vec![AdvancedFilter::And(vec![equals("a", 1)])]);

        assert_eq!(filter.simplify(), equals("a", 1));
    }

    #[test]
    fn simplify_does_not_touch_a_plain_negation() {
        let filter = AdvancedFilter::Not(Box::new(equals("a", 1)));

        assert_eq!(filter.clone().simplify(), filter);
    }
}
