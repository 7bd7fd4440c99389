//! Storage backends for the DP cache.

use std::collections::HashMap;
use std::hash::Hash;

/// Where computed values live.
pub trait Backend<I, K> {
    /// The cached value for `index`, if computed.
    fn get(&self, index: &I) -> Option<&K>;

    /// The cached value for `index`, computing and storing it with `f` if absent.
    fn get_or_insert(&mut self, index: I, f: impl FnOnce() -> K) -> &K;
}

/// A HashMap-based backend for arbitrary hashable indices.
#[derive(Debug)]
pub struct HashMapBackend<I, K> {
    data: HashMap<I, K>,
}

impl<I, K> HashMapBackend<I, K> {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }
}

impl<I, K> Default for HashMapBackend<I, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Hash + Eq, K> Backend<I, K> for HashMapBackend<I, K> {
    fn get(&self, index: &I) -> Option<&K> {
        self.data.get(index)
    }

    fn get_or_insert(&mut self, index: I, f: impl FnOnce() -> K) -> &K {
        self.data.entry(index).or_insert_with(f)
    }
}
