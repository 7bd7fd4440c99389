//! Single-threaded DP cache implementation.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

use thiserror::Error;

use super::backend::Backend;
use super::problem::DpProblem;

/// Why an index could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DpError<I: Debug> {
    #[error("{0:?} is not defined")]
    Undefined(I),
    #[error("dependency cycle through {0:?}")]
    Cycle(I),
}

/// Lazily resolves and memoizes the values of a [`DpProblem`].
pub struct DpCache<I, K, B, P> {
    backend: RefCell<B>,
    problem: P,
    in_progress: RefCell<HashSet<I>>,
    _phantom: PhantomData<K>,
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone + Hash + Eq + Debug,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    pub fn with_problem(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            problem,
            in_progress: RefCell::new(HashSet::new()),
            _phantom: PhantomData,
        }
    }

    /// The value for `index`, resolving its dependencies first.
    ///
    /// Each index is computed at most once. An index reached again while its
    /// own dependencies are still being resolved is a [`DpError::Cycle`].
    pub fn get(&self, index: &I) -> Result<K, DpError<I>> {
        if let Some(value) = self.backend.borrow().get(index) {
            return Ok(value.clone());
        }

        if !self.in_progress.borrow_mut().insert(index.clone()) {
            return Err(DpError::Cycle(index.clone()));
        }
        let resolved = self.resolve_deps(index);
        self.in_progress.borrow_mut().remove(index);
        let dep_values = resolved?;

        Ok(self
            .backend
            .borrow_mut()
            .get_or_insert(index.clone(), || self.problem.compute(index, dep_values))
            .clone())
    }

    fn resolve_deps(&self, index: &I) -> Result<Vec<K>, DpError<I>> {
        self.problem
            .deps(index)
            .ok_or_else(|| DpError::Undefined(index.clone()))?
            .iter()
            .map(|dep| self.get(dep))
            .collect()
    }
}
