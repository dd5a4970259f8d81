use std::{collections::HashSet, hash::Hash};

use indexmap::IndexMap;
use itertools::Itertools;
use serde_json::Value;

use super::Collection;

/// Groups produced by [`Collection::group_by`], keyed in order of first
/// appearance.
pub type CollectionGroups<K, V> = IndexMap<K, Vec<V>>;

impl<T> Collection<T> {
    /// Groups the elements by the given key. Within every group the elements
    /// keep the collection order; new keys are appended in the order they are
    /// first encountered.
    pub fn group_by<K: Hash + Eq>(&self, grouper: impl Fn(&T) -> K) -> CollectionGroups<K, T>
    where T: Clone {
        self.group_by_with(grouper, Clone::clone)
    }

    /// Same as [`Collection::group_by`], with every element passed through
    /// `mapper` before landing in its group.
    pub fn group_by_with<K: Hash + Eq, V>(&self, grouper: impl Fn(&T) -> K, mapper: impl Fn(&T) -> V) -> CollectionGroups<K, V> {
        let mut groups = CollectionGroups::new();
        for element in &self.elements {
            groups
                .entry(grouper(element))
                .or_insert_with(Vec::new)
                .push(mapper(element));
        }
        groups
    }

    /// Keeps the first occurrence of every distinct element.
    pub fn distinct(&self) -> Collection<T>
    where T: Clone + PartialEq {
        self.distinct_with(|candidate, kept| candidate == kept)
    }

    /// Keeps every element for which `eq(candidate, already_kept)` holds
    /// against no previously kept element.
    ///
    /// The comparator does not have to be symmetric; [`subset_equals`] is the
    /// one-directional record comparison used for JSON rows.
    pub fn distinct_with(&self, eq: impl Fn(&T, &T) -> bool) -> Collection<T>
    where T: Clone {
        let mut kept: Vec<T> = Vec::new();
        for element in &self.elements {
            if !kept.iter().any(|k| eq(element, k)) {
                kept.push(element.clone());
            }
        }
        Collection::from(kept)
    }

    /// Keeps the first element of every group, in the order the groups were
    /// first encountered.
    pub fn distinct_by<K: Hash + Eq>(&self, key: impl Fn(&T) -> K) -> Collection<T>
    where T: Clone {
        let mut seen = HashSet::new();
        Collection::from(
            self.elements
                .iter()
                .filter(|element| seen.insert(key(element)))
                .cloned()
                .collect_vec()
        )
    }
}

/// Checks that every key of `candidate` is present in `against` with an equal
/// value, recursing into nested objects. `against` may carry extra keys, so
/// the comparison is one-directional.
pub fn subset_equals(candidate: &Value, against: &Value) -> bool {
    match (candidate, against) {
        (Value::Object(candidate), Value::Object(against)) => {
            candidate
                .iter()
                .all(|(key, value)| against.get(key).is_some_and(|other| subset_equals(value, other)))
        },
        (candidate, against) => candidate == against
    }
}
