//! Trait-based DP problem definition.

/// A dynamic programming problem over indices `I` producing values `K`.
pub trait DpProblem<I, K> {
    /// The indices `index` depends on, or `None` if `index` is undefined.
    ///
    /// Base cases return `Some(vec![])`.
    fn deps(&self, index: &I) -> Option<Vec<I>>;

    /// Computes the value for `index`; `deps` holds the resolved values in
    /// the order returned by [`DpProblem::deps`].
    fn compute(&self, index: &I, deps: Vec<K>) -> K;
}
