use log::{debug, trace};
use serde_json::{Number, Value};

use super::{AdvancedFilter, FilterInput, PropertyPath};

/// Bounds of a `range` leaf. A bound left unset is omitted from the node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RangeBounds {
    pub gte: Option<Number>,
    pub gt: Option<Number>,
    pub lte: Option<Number>,
    pub lt: Option<Number>
}

impl RangeBounds {
    pub fn new() -> RangeBounds {
        RangeBounds::default()
    }

    pub fn gte(mut self, bound: impl Into<Number>) -> RangeBounds {
        self.gte = Some(bound.into());
        self
    }

    pub fn gt(mut self, bound: impl Into<Number>) -> RangeBounds {
        self.gt = Some(bound.into());
        self
    }

    pub fn lte(mut self, bound: impl Into<Number>) -> RangeBounds {
        self.lte = Some(bound.into());
        self
    }

    pub fn lt(mut self, bound: impl Into<Number>) -> RangeBounds {
        self.lt = Some(bound.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.gte.is_none() && self.gt.is_none() && self.lte.is_none() && self.lt.is_none()
    }
}

/// Incrementally assembles a nested filter tree from sparse UI filter state.
///
/// Every leaf call appends at most one node: an input resolving to nothing
/// skips the node instead of producing a vacuous one, so a fully chained
/// builder over an empty form yields no filter at all. The builder is
/// consumed once by [`AdvancedFilterBuilder::build`], which hands back the
/// first accumulated node; multi-leaf compositions go through
/// [`AdvancedFilterBuilder::and`] / [`AdvancedFilterBuilder::or`].
#[derive(Default)]
pub struct AdvancedFilterBuilder {
    filters: Vec<AdvancedFilter>
}

impl AdvancedFilterBuilder {
    pub fn new() -> AdvancedFilterBuilder {
        AdvancedFilterBuilder { filters: Vec::new() }
    }

    pub fn equals<V: Into<Value>>(mut self, key: impl Into<PropertyPath>, value: impl Into<FilterInput<V>>) -> AdvancedFilterBuilder {
        if let Some(value) = value.into().resolve() {
            self.filters.push(AdvancedFilter::Equals {
                property: key.into(),
                value: value.into()
            });
        }
        self
    }

    pub fn prefix<V: Into<Value>>(mut self, key: impl Into<PropertyPath>, value: impl Into<FilterInput<V>>) -> AdvancedFilterBuilder {
        if let Some(value) = value.into().resolve() {
            self.filters.push(AdvancedFilter::Prefix {
                property: key.into(),
                value: value.into()
            });
        }
        self
    }

    /// The `in` leaf; named `is_in` as `in` is reserved.
    pub fn is_in<V: Into<Value>>(mut self, key: impl Into<PropertyPath>, values: impl Into<FilterInput<V>>) -> AdvancedFilterBuilder {
        if let Some(values) = values.into().resolve() {
            self.filters.push(AdvancedFilter::In {
                property: key.into(),
                values: values.into()
            });
        }
        self
    }

    /// Appends a `containsAny` leaf; both an absent input and an empty list
    /// are no-ops.
    pub fn contains_any<V: Into<Value>>(mut self, key: impl Into<PropertyPath>, values: impl Into<FilterInput<Vec<V>>>) -> AdvancedFilterBuilder {
        if let Some(values) = values.into().resolve() {
            if !values.is_empty() {
                self.filters.push(AdvancedFilter::ContainsAny {
                    property: key.into(),
                    values: values.into_iter().map(Into::into).collect()
                });
            }
        }
        self
    }

    /// Appends a `containsAll` leaf; both an absent input and an empty list
    /// are no-ops.
    pub fn contains_all<V: Into<Value>>(mut self, key: impl Into<PropertyPath>, values: impl Into<FilterInput<Vec<V>>>) -> AdvancedFilterBuilder {
        if let Some(values) = values.into().resolve() {
            if !values.is_empty() {
                self.filters.push(AdvancedFilter::ContainsAll {
                    property: key.into(),
                    values: values.into_iter().map(Into::into).collect()
                });
            }
        }
        self
    }

    pub fn search(mut self, key: impl Into<PropertyPath>, value: impl Into<FilterInput<String>>) -> AdvancedFilterBuilder {
        if let Some(value) = value.into().resolve() {
            self.filters.push(AdvancedFilter::Search {
                property: key.into(),
                value
            });
        }
        self
    }

    /// Appends an `exists` leaf when the validity input resolves truthy.
    pub fn exists(mut self, key: impl Into<PropertyPath>, valid: impl Into<FilterInput<bool>>) -> AdvancedFilterBuilder {
        if valid.into().resolve().unwrap_or(false) {
            self.filters.push(AdvancedFilter::Exists { property: key.into() });
        }
        self
    }

    /// The negated counterpart of [`AdvancedFilterBuilder::exists`]: the
    /// `exists` leaf wrapped in a `not` node.
    pub fn not_exists(mut self, key: impl Into<PropertyPath>, valid: impl Into<FilterInput<bool>>) -> AdvancedFilterBuilder {
        if valid.into().resolve().unwrap_or(false) {
            self.filters.push(AdvancedFilter::Not(Box::new(AdvancedFilter::Exists {
                property: key.into()
            })));
        }
        self
    }

    /// Appends a `range` leaf carrying every bound that is set; a bounds
    /// object with no bound at all is a no-op.
    pub fn range(mut self, key: impl Into<PropertyPath>, bounds: impl Into<FilterInput<RangeBounds>>) -> AdvancedFilterBuilder {
        if let Some(bounds) = bounds.into().resolve() {
            if !bounds.is_empty() {
                self.filters.push(AdvancedFilter::Range {
                    property: key.into(),
                    gte: bounds.gte,
                    gt: bounds.gt,
                    lte: bounds.lte,
                    lt: bounds.lt
                });
            }
        }
        self
    }

    /// Appends an `and` node over everything the other builder accumulated;
    /// an empty builder contributes nothing.
    pub fn and(mut self, other: AdvancedFilterBuilder) -> AdvancedFilterBuilder {
        if !other.filters.is_empty() {
            trace!("merging {} filters under `and`", other.filters.len());
            self.filters.push(AdvancedFilter::And(other.filters));
        }
        self
    }

    /// Appends an `or` node over everything the other builder accumulated;
    /// an empty builder contributes nothing.
    pub fn or(mut self, other: AdvancedFilterBuilder) -> AdvancedFilterBuilder {
        if !other.filters.is_empty() {
            trace!("merging {} filters under `or`", other.filters.len());
            self.filters.push(AdvancedFilter::Or(other.filters));
        }
        self
    }

    /// Appends a `not` node over whatever the other builder builds to, if
    /// anything.
    pub fn not(mut self, other: AdvancedFilterBuilder) -> AdvancedFilterBuilder {
        if let Some(filter) = other.build() {
            self.filters.push(AdvancedFilter::Not(Box::new(filter)));
        }
        self
    }

    /// Finalizes the builder: the first accumulated node, or `None` when no
    /// input produced one and no filter should be sent at all.
    pub fn build(self) -> Option<AdvancedFilter> {
        let filter = self.filters.into_iter().next();
        if let Some(filter) = &filter {
            debug!("built advanced filter: {filter}");
        }
        filter
    }
}
