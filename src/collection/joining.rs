use super::Collection;

impl<T> Collection<T> {
    /// Inner-joins with another collection: every pair whose keys match is
    /// passed to `result`. The pairs come out in nested-loop order, outer
    /// elements first.
    pub fn join<U, K: PartialEq, R>(
        &self,
        other: &Collection<U>,
        outer_key: impl Fn(&T) -> K,
        inner_key: impl Fn(&U) -> K,
        result: impl Fn(&T, &U) -> R
    ) -> Collection<R> {
        let mut joined = Vec::new();
        for outer in &self.elements {
            let key = outer_key(outer);
            for inner in &other.elements {
                if inner_key(inner) == key {
                    joined.push(result(outer, inner));
                }
            }
        }
        Collection::from(joined)
    }
}
