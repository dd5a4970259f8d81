use itertools::Itertools;

use super::Collection;

impl<T: Clone> Collection<T> {
    /// Returns a new collection with the other collection's elements appended
    /// after the receiver's.
    pub fn concat(&self, other: &Collection<T>) -> Collection<T> {
        let mut elements = self.elements.clone();
        elements.extend(other.elements.iter().cloned());
        Collection::from(elements)
    }

    /// Concatenation with duplicates removed; keeps the first occurrence.
    pub fn union(&self, other: &Collection<T>) -> Collection<T>
    where T: PartialEq {
        self.concat(other).distinct()
    }

    /// Keeps the elements that are also present in the other collection.
    pub fn intersect(&self, other: &Collection<T>) -> Collection<T>
    where T: PartialEq {
        Collection::from(
            self.elements
                .iter()
                .filter(|element| other.contains(element))
                .cloned()
                .collect_vec()
        )
    }

    /// Keeps the elements that are absent from the other collection.
    pub fn except(&self, other: &Collection<T>) -> Collection<T>
    where T: PartialEq {
        Collection::from(
            self.elements
                .iter()
                .filter(|element| !other.contains(element))
                .cloned()
                .collect_vec()
        )
    }
}
