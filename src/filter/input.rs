use super::RangeBounds;

/// A leaf-filter input that is either already known or computed on demand.
///
/// Deferred inputs are evaluated exactly once, synchronously, by the leaf
/// call that consumes them; call sites with expensive derived values can
/// hand over a closure instead of computing upfront. An input resolving to
/// `None` makes the consuming call a no-op.
pub enum FilterInput<V> {
    Value(V),
    Absent,
    Lazy(Box<dyn FnOnce() -> Option<V>>)
}

impl<V> FilterInput<V> {
    /// Defers the value until the leaf call that consumes it.
    pub fn lazy(produce: impl FnOnce() -> Option<V> + 'static) -> FilterInput<V> {
        FilterInput::Lazy(Box::new(produce))
    }

    pub(crate) fn resolve(self) -> Option<V> {
        match self {
            FilterInput::Value(value) => Some(value),
            FilterInput::Absent => None,
            FilterInput::Lazy(produce) => produce()
        }
    }
}

impl<V> From<Option<V>> for FilterInput<V> {
    fn from(value: Option<V>) -> FilterInput<V> {
        match value {
            Some(value) => FilterInput::Value(value),
            None => FilterInput::Absent
        }
    }
}

impl From<bool> for FilterInput<bool> {
    fn from(value: bool) -> FilterInput<bool> {
        FilterInput::Value(value)
    }
}

impl From<String> for FilterInput<String> {
    fn from(value: String) -> FilterInput<String> {
        FilterInput::Value(value)
    }
}

impl<'a> From<&'a str> for FilterInput<String> {
    fn from(value: &'a str) -> FilterInput<String> {
        FilterInput::Value(value.to_owned())
    }
}

impl From<RangeBounds> for FilterInput<RangeBounds> {
    fn from(value: RangeBounds) -> FilterInput<RangeBounds> {
        FilterInput::Value(value)
    }
}
